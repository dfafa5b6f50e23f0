use std::path::PathBuf;

use clap::{Args, Subcommand};
use iconvar_config::ConfigOverrides;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Mirror glyph rules into a generated `:root` block of CSS variables.
    Build(BuildArgs),
    /// List the CSS variables currently declared in a stylesheet.
    List(ListArgs),
    /// Remove the generated block from a stylesheet.
    Strip(StripArgs),
}

#[derive(Clone, Debug, Args)]
pub struct BuildArgs {
    /// Stylesheet to rewrite (defaults to config `stylesheet.input`).
    pub stylesheet: Option<PathBuf>,
    /// Write the result here instead of rewriting the input.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Selector and variable prefix.
    #[arg(long)]
    pub prefix: Option<String>,
    /// Lines searched for `content:` after each selector.
    #[arg(long)]
    pub lookahead: Option<usize>,
    /// Report what would change without writing.
    #[arg(long)]
    pub dry_run: bool,
}

impl BuildArgs {
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input: self.stylesheet.clone(),
            output: self.output.clone(),
            prefix: self.prefix.clone(),
            lookahead: self.lookahead,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Stylesheet to read (defaults to config `stylesheet.output`, else input).
    pub stylesheet: Option<PathBuf>,
    /// Selector and variable prefix.
    #[arg(long)]
    pub prefix: Option<String>,
}

impl ListArgs {
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            prefix: self.prefix.clone(),
            ..ConfigOverrides::default()
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct StripArgs {
    /// Stylesheet to clean (defaults to config `stylesheet.input`).
    pub stylesheet: Option<PathBuf>,
    /// Write the result here instead of rewriting the input.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Report what would change without writing.
    #[arg(long)]
    pub dry_run: bool,
}

impl StripArgs {
    #[must_use]
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            input: self.stylesheet.clone(),
            output: self.output.clone(),
            ..ConfigOverrides::default()
        }
    }
}
