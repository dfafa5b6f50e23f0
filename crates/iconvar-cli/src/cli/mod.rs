use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `iconvar` binary.
#[derive(Debug, Parser)]
#[command(
    name = "iconvar",
    version,
    about = "Expose icon-font glyphs as CSS custom properties"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ./iconvar.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn build_parses_stylesheet_and_overrides() {
        let cli = Cli::try_parse_from([
            "iconvar",
            "build",
            "fonts/iconfont.css",
            "--prefix",
            "brand",
            "--lookahead",
            "3",
            "--dry-run",
        ])
        .expect("cli should parse");

        let Commands::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.stylesheet, Some(PathBuf::from("fonts/iconfont.css")));
        assert!(args.dry_run);

        let overrides = args.overrides();
        assert_eq!(overrides.prefix.as_deref(), Some("brand"));
        assert_eq!(overrides.lookahead, Some(3));
        assert!(overrides.output.is_none());
    }

    #[test]
    fn build_without_arguments_uses_config() {
        let cli = Cli::try_parse_from(["iconvar", "build"]).expect("cli should parse");
        let Commands::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert!(args.stylesheet.is_none());
        assert!(!args.dry_run);
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["iconvar", "list", "--format", "table", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["iconvar", "--format", "xml", "build"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn lookahead_must_be_a_number() {
        let parsed = Cli::try_parse_from(["iconvar", "build", "--lookahead", "five"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn strip_accepts_output() {
        let cli = Cli::try_parse_from(["iconvar", "strip", "a.css", "-o", "b.css"])
            .expect("cli should parse");
        let Commands::Strip(args) = cli.command else {
            panic!("expected strip");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.input, Some(PathBuf::from("a.css")));
        assert_eq!(overrides.output, Some(PathBuf::from("b.css")));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["iconvar", "--config", "ci/iconvar.toml", "build"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.config, Some(PathBuf::from("ci/iconvar.toml")));
        assert_eq!(flags.format, OutputFormat::Json);
    }
}
