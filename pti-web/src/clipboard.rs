use crate::dom;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Browser window unavailable")]
    NoWindow,
    #[error("Clipboard write rejected: {0}")]
    Rejected(String),
}

/// Write plain text to the system clipboard.
///
/// # Errors
/// Returns an error if there is no window or the browser rejects the write,
/// e.g. when the page lacks clipboard permission.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = dom::window().ok_or(ClipboardError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError::Rejected(dom::js_error_message(&err)))
}
