//! # iconvar-core
//!
//! Glyph rule discovery and CSS variable generation for icon-font
//! stylesheets.
//!
//! Icon fonts ship a stylesheet with one rule per glyph:
//!
//! ```css
//! .multi-pro-icon-home:before {
//!   content: "\e001";
//! }
//! ```
//!
//! [`VariableExtractor::transform`] mirrors every such rule into a
//! `:root` block of custom properties placed just before the first glyph
//! rule, so components can look a glyph up by name:
//!
//! ```css
//! /* CSS Variables for Web Components - Auto-generated */
//! :root {
//!   --multi-pro-icon-home: \e001;
//! }
//! ```
//!
//! The transform is pure and idempotent: any previous generated block is
//! stripped before a new one is synthesised, so
//! `transform(transform(s)) == transform(s)`.
//!
//! ```
//! use iconvar_core::transform;
//!
//! let css = ".multi-pro-icon-home:before {\n  content: \"\\e001\";\n}";
//! let once = transform(css);
//! assert!(once.contains("--multi-pro-icon-home: \\e001;"));
//! assert_eq!(transform(&once), once);
//! ```
//!
//! File access lives behind [`StylesheetStore`]; see [`build_stylesheet`].

mod error;
mod extractor;
mod options;
mod store;
mod strip;
mod variables;

pub use error::StylesheetError;
pub use extractor::{Discovery, GlyphRule, TransformOutcome, VariableExtractor, transform};
pub use options::{DEFAULT_LOOKAHEAD, DEFAULT_PREFIX, ExtractorOptions, MARKER_COMMENT};
pub use store::{
    BuildReport, FileStylesheet, StripReport, StylesheetStore, build_stylesheet, strip_stylesheet,
};
pub use strip::strip_generated_block;
pub use variables::Variable;
