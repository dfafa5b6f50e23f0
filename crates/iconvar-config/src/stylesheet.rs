//! Stylesheet location configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default stylesheet, relative to the working directory.
fn default_input() -> PathBuf {
    PathBuf::from("iconfont.css")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StylesheetConfig {
    /// Stylesheet to read.
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Where to write the result. Unset means rewrite `input` in place.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl Default for StylesheetConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: None,
        }
    }
}

impl StylesheetConfig {
    /// Resolved output path.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| self.input.clone())
    }

    #[must_use]
    pub fn is_in_place(&self) -> bool {
        self.output.as_ref().is_none_or(|output| *output == self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_in_place() {
        let config = StylesheetConfig::default();
        assert_eq!(config.input, PathBuf::from("iconfont.css"));
        assert!(config.is_in_place());
        assert_eq!(config.output_path(), PathBuf::from("iconfont.css"));
    }

    #[test]
    fn explicit_output_is_used() {
        let config = StylesheetConfig {
            output: Some(PathBuf::from("dist/iconfont.css")),
            ..Default::default()
        };
        assert!(!config.is_in_place());
        assert_eq!(config.output_path(), PathBuf::from("dist/iconfont.css"));
    }
}
