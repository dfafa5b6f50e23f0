//! Stylesheet storage and the read-transform-write cycle.
//!
//! The transform itself never performs I/O. Callers hand a
//! [`StylesheetStore`] to [`build_stylesheet`] or [`strip_stylesheet`];
//! [`FileStylesheet`] is the filesystem implementation used by the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::StylesheetError;
use crate::extractor::VariableExtractor;
use crate::strip::strip_generated_block;
use crate::variables::Variable;

/// Source and sink of stylesheet text.
pub trait StylesheetStore {
    /// Where the text is written, for reporting.
    fn location(&self) -> &Path;

    /// Read the full stylesheet.
    ///
    /// # Errors
    /// Returns [`StylesheetError::Read`] if the text cannot be loaded.
    fn read(&self) -> Result<String, StylesheetError>;

    /// Replace the stylesheet with `content`.
    ///
    /// # Errors
    /// Returns [`StylesheetError::Write`] if the text cannot be stored.
    fn write(&self, content: &str) -> Result<(), StylesheetError>;
}

/// A UTF-8 stylesheet on disk. Output defaults to the input path.
#[derive(Debug, Clone)]
pub struct FileStylesheet {
    input: PathBuf,
    output: PathBuf,
}

impl FileStylesheet {
    #[must_use]
    pub fn in_place(path: impl Into<PathBuf>) -> Self {
        let input = path.into();
        Self {
            output: input.clone(),
            input,
        }
    }

    #[must_use]
    pub fn new(input: impl Into<PathBuf>, output: Option<PathBuf>) -> Self {
        let input = input.into();
        Self {
            output: output.unwrap_or_else(|| input.clone()),
            input,
        }
    }

    #[must_use]
    pub fn input(&self) -> &Path {
        &self.input
    }
}

impl StylesheetStore for FileStylesheet {
    fn location(&self) -> &Path {
        &self.output
    }

    fn read(&self) -> Result<String, StylesheetError> {
        fs::read_to_string(&self.input).map_err(|source| StylesheetError::Read {
            path: self.input.clone(),
            source,
        })
    }

    fn write(&self, content: &str) -> Result<(), StylesheetError> {
        fs::write(&self.output, content).map_err(|source| StylesheetError::Write {
            path: self.output.clone(),
            source,
        })
    }
}

/// Summary of a build run.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub file: PathBuf,
    pub changed: bool,
    pub written: bool,
    pub rules_found: usize,
    pub variable_count: usize,
    pub variables: Vec<Variable>,
}

/// Summary of a strip run.
#[derive(Debug, Clone, Serialize)]
pub struct StripReport {
    pub file: PathBuf,
    pub changed: bool,
    pub written: bool,
}

/// Read, transform and (unless `dry_run`) write back a stylesheet.
///
/// The text is written even when unchanged, so a run always leaves the
/// output path holding the transformed stylesheet.
///
/// # Errors
/// Propagates the store's read or write failure; nothing is retried.
pub fn build_stylesheet<S: StylesheetStore + ?Sized>(
    store: &S,
    extractor: &VariableExtractor,
    dry_run: bool,
) -> Result<BuildReport, StylesheetError> {
    let file = store.location().to_path_buf();
    tracing::info!(file = %file.display(), prefix = extractor.prefix(), "extracting css variables");

    let content = store.read()?;
    let outcome = extractor.transform_with_outcome(&content);

    if !dry_run {
        store.write(&outcome.text)?;
    }

    let variables = extractor.list_variables(&outcome.text);
    let variable_count = extractor.count_variables(&outcome.text);
    tracing::info!(
        file = %file.display(),
        variable_count,
        changed = outcome.changed,
        dry_run,
        "css variables extracted"
    );

    Ok(BuildReport {
        file,
        changed: outcome.changed,
        written: !dry_run,
        rules_found: outcome.rules.len(),
        variable_count,
        variables,
    })
}

/// Remove any generated block from a stylesheet.
///
/// # Errors
/// Propagates the store's read or write failure.
pub fn strip_stylesheet<S: StylesheetStore + ?Sized>(
    store: &S,
    dry_run: bool,
) -> Result<StripReport, StylesheetError> {
    let file = store.location().to_path_buf();
    let content = store.read()?;
    let stripped = strip_generated_block(&content);
    let changed = stripped != content;

    if !dry_run {
        store.write(&stripped)?;
    }
    tracing::info!(file = %file.display(), changed, dry_run, "generated block stripped");

    Ok(StripReport {
        file,
        changed,
        written: !dry_run,
    })
}
