use thiserror::Error;

/// Failure raised by the remote query service.
#[derive(Debug, Error)]
pub enum QuranError {
    /// Displays the remote message only.
    #[error("{message}")]
    Upstream { status: u16, message: String },
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for QuranError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            QuranError::Decode(e.to_string())
        } else {
            QuranError::Request(e.to_string())
        }
    }
}

/// Anything a tool handler can fail with.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Remote(#[from] QuranError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate tool name: {0}")]
    DuplicateTool(&'static str),
}
