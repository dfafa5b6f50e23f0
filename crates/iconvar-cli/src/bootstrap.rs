use anyhow::Context;
use iconvar_config::{ConfigOverrides, IconvarConfig};
use iconvar_core::VariableExtractor;

use crate::cli::GlobalFlags;

/// Load layered config with `.env` support and command-line overrides on top.
pub fn load_config(
    flags: &GlobalFlags,
    overrides: &ConfigOverrides,
) -> anyhow::Result<IconvarConfig> {
    let config = IconvarConfig::load_with_overrides(flags.config.as_deref(), overrides)
        .context("failed to load iconvar configuration")?;

    tracing::debug!(
        input = %config.stylesheet.input.display(),
        output = %config.stylesheet.output_path().display(),
        prefix = %config.extract.prefix,
        lookahead = config.extract.lookahead,
        "configuration loaded"
    );
    Ok(config)
}

pub fn extractor(config: &IconvarConfig) -> anyhow::Result<VariableExtractor> {
    VariableExtractor::new(config.extractor_options()).context("failed to build extractor")
}
