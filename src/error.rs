//! API Errors

use thiserror::Error;

/// A request that never produced a readable reply.
///
/// Replies the backend did send (including non-2xx ones with a JSON body)
/// are not errors; they arrive as [`crate::models::ApiReply`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unreadable response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
