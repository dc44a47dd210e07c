use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::DomException;

/// Failures of a single request against the grit backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered, but not with a success status.
    #[error("{body}\n({status_text})")]
    Server {
        status: u16,
        status_text: String,
        body: String,
    },

    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("network failure: {0}")]
    Network(String),

    /// The request was aborted because the view it belonged to was left.
    #[error("request aborted")]
    Aborted,

    /// The response body was not the expected JSON shape.
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Classify a rejected `fetch` promise.
    pub fn from_rejection(value: JsValue) -> Self {
        match value.dyn_ref::<DomException>() {
            Some(exception) if exception.name() == "AbortError" => Self::Aborted,
            _ => Self::Network(describe(&value)),
        }
    }

    /// Text shown to the user by the global failure handler. Mirrors the backend's own error
    /// pages: response body first, status text in parentheses.
    pub fn alert_message(&self) -> String {
        self.to_string()
    }
}

/// Crate level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The HTML template does not contain an element the controller relies on.
    #[error("missing element `{0}`")]
    MissingElement(String),

    /// A DOM call threw.
    #[error("javascript error: {0}")]
    Js(String),
}

impl Error {
    pub fn is_aborted(&self) -> bool {
        matches!(self, Error::Api(ApiError::Aborted))
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Js(describe(&value))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Best effort string form of a thrown JS value.
fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|error| String::from(error.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
