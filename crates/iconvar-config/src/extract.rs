//! Glyph extraction configuration.

use iconvar_core::{DEFAULT_LOOKAHEAD, DEFAULT_PREFIX, ExtractorOptions};
use serde::{Deserialize, Serialize};

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

const fn default_lookahead() -> usize {
    DEFAULT_LOOKAHEAD
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractConfig {
    /// Selector and variable prefix (e.g., "multi-pro-icon").
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Lines searched for `content:` after a selector, selector included.
    #[serde(default = "default_lookahead")]
    pub lookahead: usize,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            lookahead: default_lookahead(),
        }
    }
}

impl From<&ExtractConfig> for ExtractorOptions {
    fn from(config: &ExtractConfig) -> Self {
        Self {
            prefix: config.prefix.clone(),
            lookahead: config.lookahead,
        }
    }
}
