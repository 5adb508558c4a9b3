use std::io;
use thiserror::Error;

/// Custom error type for the ppicalc library
#[derive(Error, Debug)]
pub enum PpiError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias for the ppicalc library
pub type Result<T> = std::result::Result<T, PpiError>;

impl PpiError {
    /// Create a clipboard error
    pub fn clipboard<S: Into<String>>(msg: S) -> Self {
        PpiError::Clipboard(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_errors_convert() {
        let err: PpiError = url::Url::parse("not a url").unwrap_err().into();
        assert!(err.to_string().starts_with("Invalid URL"));
    }
}
