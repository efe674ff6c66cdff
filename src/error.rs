use std::hash::{Hash, Hasher};
use wasm_bindgen::{JsCast as _, JsValue};

#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// The adapter was asked to do something that needs the Sodium wallet
    /// while it is not (or not yet) running inside the wallet context.
    ///
    /// The label identifies which guard failed.
    #[error("The app is loaded outside sodium context {0}")]
    NoSodiumContext(&'static str),

    /// Raised by the Sodium SDK itself.
    #[error(transparent)]
    Sdk(#[from] SdkError),
}

/// An error thrown by the Sodium SDK.
///
/// The SDK throws regular JavaScript `Error` objects, often carrying an
/// EIP-1193 `code` (`4001` when the user rejected the request). The value
/// that was thrown is kept as is so it can be rethrown unchanged to the
/// JavaScript caller; equality and hashing only consider `name`, `message`
/// and `code`.
#[derive(Debug, Clone, thiserror::Error, serde::Deserialize)]
#[error("{name}: {message}")]
pub struct SdkError {
    #[serde(default = "default_error_name")]
    pub name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(skip)]
    thrown: Option<JsValue>,
}

fn default_error_name() -> String {
    "Error".to_owned()
}

impl PartialEq for SdkError {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.message == other.message && self.code == other.code
    }
}

impl Eq for SdkError {}

impl Hash for SdkError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.message.hash(state);
        self.code.hash(state);
    }
}

impl Error {
    /// the name given to the JavaScript error when crossing back the
    /// wasm boundary
    pub fn name(&self) -> &str {
        match self {
            Self::NoSodiumContext(_) => "NoSodiumContext",
            Self::Sdk(error) => &error.name,
        }
    }
}

impl SdkError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            code: None,
            thrown: None,
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::new("InternalError", message)
    }

    /// the value originally thrown by the JavaScript side, if any
    pub fn thrown(&self) -> Option<&JsValue> {
        self.thrown.as_ref()
    }

    /// decode whatever value was thrown (or rejected) by the JavaScript side
    pub fn from_js(error: JsValue) -> Self {
        let decoded = if let Some(js_error) = error.dyn_ref::<js_sys::Error>() {
            let code = js_sys::Reflect::get(js_error, &JsValue::from_str("code"))
                .ok()
                .and_then(|code| code.as_f64())
                .map(|code| code as i64);
            Self {
                code,
                ..Self::new(String::from(js_error.name()), String::from(js_error.message()))
            }
        } else if let Some(message) = error.as_string() {
            Self::new(default_error_name(), message)
        } else {
            serde_wasm_bindgen::from_value(error.clone()).unwrap_or_else(|decode_error| {
                Self::internal(format!(
                    "Couldn't decode the error content `{error:?}': {decode_error}"
                ))
            })
        };

        Self {
            thrown: Some(error),
            ..decoded
        }
    }
}

impl From<Error> for JsValue {
    fn from(error: Error) -> Self {
        match error {
            Error::Sdk(SdkError {
                thrown: Some(thrown),
                ..
            }) => thrown,
            error => {
                let js_error = js_sys::Error::new(&error.to_string());
                js_error.set_name(error.name());
                js_error.into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn no_sodium_context_display() {
        assert_eq!(
            Error::NoSodiumContext("activate").to_string(),
            "The app is loaded outside sodium context activate"
        );
        assert_eq!(Error::NoSodiumContext("no sdk").name(), "NoSodiumContext");
    }

    #[test]
    fn sdk_error_is_transparent() {
        let error = Error::from(SdkError::new("UserRejected", "User closed the wallet"));

        assert_eq!(error.to_string(), "UserRejected: User closed the wallet");
        assert_eq!(error.name(), "UserRejected");
    }

    #[test]
    fn sdk_error_json() {
        assert_eq!(
            serde_json::from_value::<SdkError>(json! { {
                "name": "WalletLocked",
                "message": "The wallet is locked.",
            }})
            .unwrap(),
            SdkError::new("WalletLocked", "The wallet is locked.")
        );

        assert_eq!(
            serde_json::from_value::<SdkError>(json! { {
                "message": "User rejected the request.",
                "code": 4001,
            }})
            .unwrap(),
            SdkError::new("Error", "User rejected the request.").with_code(4001)
        );
    }

    #[test]
    fn sdk_error_keeps_the_code() {
        let error: SdkError = serde_json::from_value(json! { {
            "name": "Error",
            "message": "User rejected the request.",
            "code": 4001,
        }})
        .unwrap();

        assert_eq!(error.code, Some(4001));
        assert!(format!("{:?}", Error::Sdk(error.clone())).contains("4001"));
        assert_ne!(error, SdkError::new("Error", "User rejected the request."));
        assert!(error.thrown().is_none());
    }
}
