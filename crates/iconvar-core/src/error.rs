//! Error types for iconvar-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring the extractor or moving stylesheet text
/// in and out of storage.
///
/// Glyph rules that fail to match are never errors; they are skipped during
/// discovery.
#[derive(Debug, Error)]
pub enum StylesheetError {
    /// The stylesheet could not be read.
    #[error("failed to read stylesheet '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The transformed stylesheet could not be written back.
    #[error("failed to write stylesheet '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extractor options were rejected before any text was touched.
    #[error("invalid extractor option '{field}': {reason}")]
    InvalidOptions { field: &'static str, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_path() {
        let err = StylesheetError::Read {
            path: PathBuf::from("fonts/iconfont.css"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("fonts/iconfont.css"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn invalid_options_display() {
        let err = StylesheetError::InvalidOptions {
            field: "prefix",
            reason: "must not be empty".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid extractor option 'prefix': must not be empty"
        );
    }
}
