// src/clipboard.rs
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

use crate::error::ClipboardError;

#[allow(async_fn_in_trait)]
pub trait ClipboardWriter {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// `navigator.clipboard` of the current window.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserClipboard;

impl ClipboardWriter for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let w = window().ok_or(ClipboardError::Unavailable)?;
        let cb = w.navigator().clipboard();
        JsFuture::from(cb.write_text(text))
            .await
            .map_err(|_| ClipboardError::Rejected)?;
        Ok(())
    }
}
