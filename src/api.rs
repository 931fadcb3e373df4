//! Learning Path API
//!
//! `fetch` wrappers for the two backend endpoints. Any reply with a JSON
//! body is returned, whatever its HTTP status; callers decide what counts
//! as success.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::UiConfig;
use crate::error::ApiError;
use crate::models::{ApiEnvelope, ApiReply, GenerateRequest, GeneratedPath};

/// `POST {api_base}/{path_id}/enroll`, no body.
pub async fn enroll(config: &UiConfig, path_id: &str) -> Result<ApiReply<serde_json::Value>, ApiError> {
    let url = config.enroll_url(path_id);
    log::debug!("POST {url}");
    let response = Request::post(&url)
        .header("Accept", "application/json")
        .send()
        .await?;
    read_reply(response).await
}

/// `POST {api_base}/generate` with the request as JSON.
pub async fn generate(config: &UiConfig, request: &GenerateRequest) -> Result<ApiReply<GeneratedPath>, ApiError> {
    let url = config.generate_url();
    log::debug!("POST {url}");
    let response = Request::post(&url)
        .header("Accept", "application/json")
        .json(request)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await?;
    read_reply(response).await
}

async fn read_reply<T: DeserializeOwned>(response: Response) -> Result<ApiReply<T>, ApiError> {
    let http_ok = response.ok();
    let status = response.status();
    let body = response.json::<ApiEnvelope<T>>().await?;
    log::debug!("reply {status}: status={:?}", body.status);
    Ok(ApiReply { http_ok, body })
}
