//! Save text to a file through a temporary anchor and object URL.

use crate::dom;
use pti_core::ContractDownload;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("Document unavailable")]
    NoDocument,
    #[error("Document has no body")]
    NoBody,
    #[error("Browser error: {0}")]
    Js(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::Js(dom::js_error_message(&value))
    }
}

/// Object URL that is revoked when dropped.
struct ObjectUrl(String);

impl ObjectUrl {
    fn for_blob(blob: &Blob) -> Result<Self, DownloadError> {
        Ok(Self(Url::create_object_url_with_blob(blob)?))
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        if let Err(err) = Url::revoke_object_url(&self.0) {
            log::warn!("Failed to revoke object URL: {}", dom::js_error_message(&err));
        }
    }
}

/// Offer `body` to the user as a file named `file_name`.
///
/// # Errors
/// Returns an error if the document is unavailable or any browser call fails.
/// The object URL is released on every path.
pub fn download_text(file_name: &str, mime_type: &str, body: &str) -> Result<(), DownloadError> {
    let document = dom::document().ok_or(DownloadError::NoDocument)?;
    let parts = js_sys::Array::of1(&JsValue::from_str(body));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = ObjectUrl::for_blob(&blob)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| DownloadError::Js("Failed to cast to anchor".to_string()))?;
    anchor.set_href(url.as_str());
    anchor.set_download(file_name);

    let body_el = document.body().ok_or(DownloadError::NoBody)?;
    body_el.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    Ok(())
}

/// Download the contract currently shown for `mode_value`.
///
/// # Errors
/// See [`download_text`].
pub fn download_contract(mode_value: &str) -> Result<(), DownloadError> {
    let download = ContractDownload::for_mode(mode_value);
    download_text(download.file_name, download.mime_type, download.body)
}
