use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures of the browser adapters. None of these are fatal: callers log
/// them and fall back to a static rendering.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,
    #[error("{context}: {message}")]
    Js {
        context: &'static str,
        message: String,
    },
    #[error("stylesheet rejected: {0}")]
    Style(String),
}

impl DomError {
    pub fn js(context: &'static str, err: JsValue) -> Self {
        let message = err.as_string().unwrap_or_else(|| format!("{:?}", err));
        DomError::Js { context, message }
    }
}

impl From<stylist::Error> for DomError {
    fn from(err: stylist::Error) -> Self {
        DomError::Style(err.to_string())
    }
}
