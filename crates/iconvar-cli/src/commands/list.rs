use anyhow::Context;
use iconvar_core::{FileStylesheet, StylesheetStore};
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ListedVariable {
    property: String,
    value: String,
}

/// Handle `iconvar list`.
pub fn handle(args: &ListArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = bootstrap::load_config(flags, &args.overrides())?;
    let extractor = bootstrap::extractor(&config)?;
    let path = args
        .stylesheet
        .clone()
        .unwrap_or_else(|| config.stylesheet.output_path());

    let content = FileStylesheet::in_place(path)
        .read()
        .context("failed to list css variables")?;

    let listed = extractor
        .list_variables(&content)
        .into_iter()
        .map(|var| ListedVariable {
            property: var.property(extractor.prefix()),
            value: var.value,
        })
        .collect::<Vec<_>>();

    output(&listed, flags.format)
}
