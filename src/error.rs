pub type Result<T> = core::result::Result<T, Error>;

pub struct Error {
    pub inner: Box<ErrorKind>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(kind),
        }
    }

    /// HTTP status of a rejected API call, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match *self.inner {
            ErrorKind::ApiError { status, .. } => Some(status),
            _ => None,
        }
    }

    /// Non-empty `error` field the server put in its response body.
    pub fn server_message(&self) -> Option<&str> {
        match *self.inner {
            ErrorKind::ApiError {
                message: Some(ref message),
                ..
            } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}

#[cfg(feature = "no-wasm")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::new(ErrorKind::ReqwestError(e))
    }
}

#[cfg(feature = "wasm")]
impl From<gloo_net::Error> for Error {
    fn from(e: gloo_net::Error) -> Error {
        Error::new(ErrorKind::GlooNetError(e))
    }
}

#[cfg(feature = "wasm")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(e: wasm_bindgen::JsValue) -> Error {
        Error::new(ErrorKind::DomError(format!("{e:?}")))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::new(ErrorKind::SerdeJsonError(e))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::new(ErrorKind::StdIoError(e))
    }
}

pub enum ErrorKind {
    #[cfg(feature = "no-wasm")]
    ReqwestError(reqwest::Error),
    #[cfg(feature = "wasm")]
    GlooNetError(gloo_net::Error),
    #[cfg(feature = "wasm")]
    DomError(String),
    SerdeJsonError(serde_json::Error),
    StdIoError(std::io::Error),
    ParseError(String),
    ApiError {
        status: u16,
        message: Option<String>,
    },
}

impl std::fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "ReqwestError: {e:?}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "GlooNetError: {e:?}"),
            #[cfg(feature = "wasm")]
            ErrorKind::DomError(ref e) => write!(f, "DomError: {e:?}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "SerdeJsonError: {e:?}"),
            ErrorKind::StdIoError(ref e) => write!(f, "StdIoError: {e:?}"),
            ErrorKind::ParseError(ref e) => write!(f, "ParseError: {e:?}"),
            ErrorKind::ApiError {
                status,
                ref message,
            } => write!(f, "ApiError: status {status}, message {message:?}"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            #[cfg(feature = "no-wasm")]
            ErrorKind::ReqwestError(ref e) => write!(f, "request failed: {e}"),
            #[cfg(feature = "wasm")]
            ErrorKind::GlooNetError(ref e) => write!(f, "request failed: {e}"),
            #[cfg(feature = "wasm")]
            ErrorKind::DomError(ref e) => write!(f, "page error: {e}"),
            ErrorKind::SerdeJsonError(ref e) => write!(f, "invalid JSON: {e}"),
            ErrorKind::StdIoError(ref e) => write!(f, "io error: {e}"),
            ErrorKind::ParseError(ref e) => write!(f, "parse error: {e}"),
            ErrorKind::ApiError {
                status,
                message: Some(ref message),
            } => write!(f, "server answered {status}: {message}"),
            ErrorKind::ApiError { status, .. } => write!(f, "server answered {status}"),
        }
    }
}
