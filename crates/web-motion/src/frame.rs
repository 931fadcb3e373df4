//! Frame and Timer Futures
//!
//! Async wrappers over `requestAnimationFrame` and `setTimeout` so effects
//! can be written as plain loops with explicit await points.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// High resolution timestamp (ms), same time origin as frame timestamps.
pub fn now() -> f64 {
    web_sys::window()
        .and_then(|win| win.performance())
        .map(|perf| perf.now())
        .unwrap_or(0.0)
}

/// Resolves on the next animation frame with that frame's timestamp.
///
/// Without a window the future resolves immediately with `now()`.
pub async fn next_frame() -> f64 {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .map(|win| win.request_animation_frame(&resolve).is_ok())
            .unwrap_or(false);
        if !scheduled {
            let _ = resolve.call1(&JsValue::NULL, &JsValue::from_f64(now()));
        }
    });
    JsFuture::from(promise)
        .await
        .ok()
        .and_then(|ts| ts.as_f64())
        .unwrap_or_else(now)
}

/// Sleep for `ms` milliseconds on the browser timer queue.
pub async fn sleep(ms: u32) {
    TimeoutFuture::new(ms).await;
}
