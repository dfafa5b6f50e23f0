use anyhow::Context;
use iconvar_core::{FileStylesheet, strip_stylesheet};

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::StripArgs;
use crate::output::output;

/// Handle `iconvar strip`.
pub fn handle(args: &StripArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(flags, &args.overrides())?;
    let sheet = FileStylesheet::new(
        config.stylesheet.input.clone(),
        config.stylesheet.output.clone(),
    );

    let report = strip_stylesheet(&sheet, args.dry_run).context("failed to strip stylesheet")?;
    output(&report, flags.format)
}
