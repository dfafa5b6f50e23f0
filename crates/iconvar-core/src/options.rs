//! Extractor options.

use crate::error::StylesheetError;

/// Literal token shared by glyph selectors and generated variable names.
pub const DEFAULT_PREFIX: &str = "multi-pro-icon";

/// Lines searched for a `content:` declaration, selector line included.
pub const DEFAULT_LOOKAHEAD: usize = 5;

/// Comment line that opens a generated block.
pub const MARKER_COMMENT: &str = "/* CSS Variables for Web Components - Auto-generated */";

/// Substring used to recognise the marker comment when stripping.
pub(crate) const MARKER_NEEDLE: &str = "CSS Variables for Web Components";

/// Explicit configuration for a [`VariableExtractor`](crate::VariableExtractor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorOptions {
    /// Selector/variable prefix, without the leading `.` or `--`.
    pub prefix: String,
    /// Size of the lookahead window for `content:` declarations.
    pub lookahead: usize,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }
}

impl ExtractorOptions {
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Reject options that would produce selectors or variables the strip
    /// phase cannot recognise again.
    ///
    /// # Errors
    /// Returns [`StylesheetError::InvalidOptions`] naming the offending field.
    pub fn validate(&self) -> Result<(), StylesheetError> {
        if self.prefix.is_empty() {
            return Err(StylesheetError::InvalidOptions {
                field: "prefix",
                reason: "must not be empty".to_string(),
            });
        }

        if let Some(bad) = self
            .prefix
            .chars()
            .find(|&ch| ch.is_whitespace() || matches!(ch, ':' | '{' | '}' | ';' | '"'))
        {
            return Err(StylesheetError::InvalidOptions {
                field: "prefix",
                reason: format!("contains forbidden character {bad:?}"),
            });
        }

        if self.lookahead == 0 {
            return Err(StylesheetError::InvalidOptions {
                field: "lookahead",
                reason: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let options = ExtractorOptions::default();
        assert_eq!(options.prefix, "multi-pro-icon");
        assert_eq!(options.lookahead, 5);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn empty_prefix_is_rejected() {
        let err = ExtractorOptions::with_prefix("").validate().unwrap_err();
        assert!(err.to_string().contains("prefix"));
    }

    #[test]
    fn prefix_with_colon_is_rejected() {
        let err = ExtractorOptions::with_prefix("icon:x").validate().unwrap_err();
        assert!(err.to_string().contains("':'"));
    }

    #[test]
    fn zero_lookahead_is_rejected() {
        let options = ExtractorOptions {
            lookahead: 0,
            ..ExtractorOptions::default()
        };
        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("lookahead"));
    }

    #[test]
    fn marker_comment_contains_needle() {
        assert!(MARKER_COMMENT.contains(MARKER_NEEDLE));
    }
}
