//! Error kinds surfaced by the page wiring.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Attach steps report an `FxError` to the log and
//! leave the page interactive; the contact form turns transport and response
//! errors into the fallback-contact notice.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure kinds encountered while wiring or running page behaviors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FxError {
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("network request failed: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    BadResponse(String),
    #[error("invalid config: {0}")]
    Config(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for FxError {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(e) => Self::BadResponse(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

#[cfg(feature = "hydrate")]
impl From<FxError> for wasm_bindgen::JsValue {
    fn from(value: FxError) -> Self {
        Self::from_str(&value.to_string())
    }
}
