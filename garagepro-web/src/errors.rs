//! Error handling for the page script.
//!
//! Every failure is caught where it happens; these types only carry enough
//! detail to log and to decide which surface (toast, inline block, nothing)
//! reports it.

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Error)]
pub enum WebError {
    /// Exception thrown by a browser API, including transport failures of `fetch`.
    #[error("js: {0}")]
    Js(String),
    /// Non-2xx HTTP status.
    #[error("http status {status}")]
    Http { status: u16 },
    /// Server answered but flagged the operation as failed.
    #[error("rejected: {0}")]
    Rejected(String),
    /// Body did not match the expected shape.
    #[error("decode: {0}")]
    Decode(String),
    #[error("missing element: {0}")]
    MissingElement(&'static str),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        let text = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{value:?}"));
        WebError::Js(text)
    }
}

impl From<garagepro_core::Error> for WebError {
    fn from(error: garagepro_core::Error) -> Self {
        WebError::Decode(error.to_string())
    }
}

impl From<WebError> for JsValue {
    fn from(error: WebError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

pub type WebResult<T> = Result<T, WebError>;
