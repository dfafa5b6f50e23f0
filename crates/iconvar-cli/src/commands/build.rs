use anyhow::Context;
use iconvar_core::{FileStylesheet, build_stylesheet};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::BuildArgs;
use crate::output::output;

/// Handle `iconvar build`.
pub fn handle(args: &BuildArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(flags, &args.overrides())?;
    let extractor = bootstrap::extractor(&config)?;
    let sheet = FileStylesheet::new(
        config.stylesheet.input.clone(),
        config.stylesheet.output.clone(),
    );

    let report = build_stylesheet(&sheet, &extractor, args.dry_run)
        .context("css variable extraction failed")?;

    if report.variable_count == 0 {
        tracing::warn!(
            file = %report.file.display(),
            prefix = extractor.prefix(),
            "no glyph rules found; stylesheet left without a generated block"
        );
    }

    output(&report, flags.format)
}
