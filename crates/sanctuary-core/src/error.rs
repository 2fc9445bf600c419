//! Error types for Sanctuary

use thiserror::Error;

/// Main error type for Sanctuary operations.
///
/// Page behavior itself never fails; missing elements are skipped. Only
/// loading site content and talking to the webview can produce errors.
#[derive(Error, Debug)]
pub enum PageError {
    /// Content file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Content file is not valid JSON for the expected shape
    #[error("Content parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two releases or two devotions share an identifier
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId {
        /// "release" or "devotion"
        kind: &'static str,
        id: String,
    },

    /// A release links to a devotion that does not exist
    #[error("Release {release} links to unknown devotion: {devotion}")]
    UnknownDevotion { release: String, devotion: String },

    /// Webview evaluation failed or returned an unexpected value
    #[error("Bridge error: {0}")]
    Bridge(String),
}

/// Result type alias using PageError
pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PageError::DuplicateId {
            kind: "release",
            id: "dawn".to_string(),
        };
        assert_eq!(format!("{}", err), "Duplicate release id: dawn");

        let err = PageError::UnknownDevotion {
            release: "dawn".to_string(),
            devotion: "psalm-23".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Release dawn links to unknown devotion: psalm-23"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let page_err: PageError = io_err.into();
        assert!(matches!(page_err, PageError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let page_err: PageError = json_err.into();
        assert!(matches!(page_err, PageError::Parse(_)));
    }
}
