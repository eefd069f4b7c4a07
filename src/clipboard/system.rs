use std::future::Future;

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::Clipboard;
use super::error::ClipboardError;

/// `navigator.clipboard` of the current window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClipboard;

impl SystemClipboard {
    fn handle() -> Result<web_sys::Clipboard, ClipboardError> {
        let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
        let navigator = window.navigator();
        // Missing outside secure contexts, so check before casting
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
            .map_err(|_| ClipboardError::Unavailable)?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::Unavailable);
        }
        Ok(clipboard.unchecked_into::<web_sys::Clipboard>())
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>> {
        let promise = Self::handle().map(|c| c.write_text(text));
        async move {
            JsFuture::from(promise?)
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Rejected(describe(&e)))
        }
    }
}

fn describe(error: &JsValue) -> String {
    error
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(error, &JsValue::from_str("name"))
                .ok()
                .and_then(|n| n.as_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
