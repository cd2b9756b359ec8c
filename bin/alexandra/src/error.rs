use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    UnsupportedNamespace(String),
    UnsupportedOperation(String),
    Json(serde_json::Error),
    Io(std::io::Error),
    AddrParse(std::net::AddrParseError),
    EmptyCatalog(PathBuf),
}

impl Error {
    pub fn is_unsupported_directive(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedNamespace(_) | Self::UnsupportedOperation(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<std::net::AddrParseError> for Error {
    fn from(err: std::net::AddrParseError) -> Self {
        Self::AddrParse(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedNamespace(namespace) => {
                write!(f, "No supported namespace: {namespace}")
            }
            Self::UnsupportedOperation(name) => write!(f, "No supported name: {name}"),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::AddrParse(err) => write!(f, "invalid address: {err}"),
            Self::EmptyCatalog(path) => write!(f, "no endpoints in {}", path.display()),
        }
    }
}

impl std::error::Error for Error {}
