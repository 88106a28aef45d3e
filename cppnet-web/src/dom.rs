//! Browser glue: console logging and clipboard access.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no browser window available")]
    NoWindow,
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

/// Convert a JavaScript value into a readable string for error reporting.
#[cfg(target_arch = "wasm32")]
fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Route `log` records to the browser console at `Info` and above.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns an error when there is no window or the browser rejects the write.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn copy_to_clipboard(text: &str) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| DomError::Clipboard(js_error_message(&err)))
}

/// Fire-and-forget clipboard write; failures are logged.
pub fn spawn_copy(text: String) {
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        match copy_to_clipboard(&text).await {
            Ok(()) => log::debug!("copied {} bytes to clipboard", text.len()),
            Err(err) => log::warn!("{err}"),
        }
    });
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("clipboard unavailable off-browser; dropped {} bytes", text.len());
}
