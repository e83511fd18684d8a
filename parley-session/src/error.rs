use crate::settings::Backend;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Error {
    #[display("Storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },
    #[display("{_0} storage is unavailable")]
    Unavailable(Backend),
    #[display("Storage error: {_0}")]
    Js(String),
    #[display("Bad settings: {_0}")]
    Settings(String),
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Settings(e.to_string())
    }
}

#[cfg(feature = "web")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Error {
        use gloo_utils::errors::JsError;
        match JsError::try_from(value) {
            Ok(e) => Error::Js(e.to_string()),
            Err(e) => Error::Js(e.to_string()),
        }
    }
}
