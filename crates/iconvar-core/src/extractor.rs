//! Glyph rule discovery and generated-block synthesis.
//!
//! The extractor is a line-window heuristic, not a CSS parser: a selector
//! line of the form `.{prefix}-{glyph}:before` is paired with the first
//! `content: "..."` declaration found within the lookahead window that
//! starts at the selector line.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::StylesheetError;
use crate::options::{ExtractorOptions, MARKER_COMMENT};
use crate::strip::strip_generated_block;
use crate::variables::Variable;

static CONTENT_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"content:\s*"([^"]+)""#).expect("content pattern is valid"));

/// A selector/content pair discovered in a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlyphRule {
    pub glyph_name: String,
    pub content_value: String,
    /// Zero-based index of the selector line in the cleaned stylesheet.
    pub line: usize,
}

/// Result of the discovery phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Rules in source order, duplicates included.
    pub rules: Vec<GlyphRule>,
    /// Candidate selectors with no `content:` inside the window.
    pub skipped: usize,
}

impl Discovery {
    /// Line index of the first successfully extracted rule.
    #[must_use]
    pub fn first_rule_line(&self) -> Option<usize> {
        self.rules.first().map(|rule| rule.line)
    }
}

/// Transformed text together with what was found on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutcome {
    pub text: String,
    pub rules: Vec<GlyphRule>,
    /// Unique declarations written into the generated block, in order.
    pub declarations: Vec<String>,
    /// Whether `text` differs from the input.
    pub changed: bool,
}

/// Rewrites stylesheets so every glyph rule is mirrored by a custom property.
#[derive(Debug, Clone)]
pub struct VariableExtractor {
    options: ExtractorOptions,
    selector: Regex,
    variable: Regex,
    declaration_line: Regex,
}

impl VariableExtractor {
    /// Build an extractor for the given options.
    ///
    /// # Errors
    /// Returns [`StylesheetError::InvalidOptions`] if the options fail
    /// validation.
    pub fn new(options: ExtractorOptions) -> Result<Self, StylesheetError> {
        options.validate()?;
        let prefix = regex::escape(&options.prefix);

        let selector = compile("prefix", &format!(r"\.{prefix}-([^:]+):before"))?;
        let variable = compile("prefix", &format!(r"--{prefix}-[^:\n]+:"))?;
        let declaration_line =
            compile("prefix", &format!(r"^\s*--{prefix}-([^:\n]+?):\s*(.+?)\s*;\s*$"))?;

        Ok(Self {
            options,
            selector,
            variable,
            declaration_line,
        })
    }

    #[must_use]
    pub const fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.options.prefix
    }

    /// Transform stylesheet text. Pure; never touches the filesystem.
    #[must_use]
    pub fn transform(&self, content: &str) -> String {
        self.transform_with_outcome(content).text
    }

    /// Transform stylesheet text and report the rules and declarations used.
    #[must_use]
    pub fn transform_with_outcome(&self, content: &str) -> TransformOutcome {
        let cleaned = strip_generated_block(content);
        let lines: Vec<&str> = cleaned.split('\n').collect();
        let discovery = self.discover(&lines);
        let declarations = self.unique_declarations(&discovery.rules);

        let text = match discovery.first_rule_line() {
            Some(first) if !declarations.is_empty() => {
                let mut out: Vec<&str> = Vec::with_capacity(lines.len() + declarations.len() + 4);
                out.extend_from_slice(&lines[..first]);
                out.push(MARKER_COMMENT);
                out.push(":root {");
                out.extend(declarations.iter().map(String::as_str));
                out.push("}");
                out.push("");
                out.extend_from_slice(&lines[first..]);
                out.join("\n")
            }
            _ => cleaned.clone(),
        };

        tracing::debug!(
            rules = discovery.rules.len(),
            skipped = discovery.skipped,
            declarations = declarations.len(),
            "transformed stylesheet"
        );

        TransformOutcome {
            changed: text != content,
            text,
            rules: discovery.rules,
            declarations,
        }
    }

    /// Scan cleaned lines for glyph rules.
    #[must_use]
    pub fn discover(&self, lines: &[&str]) -> Discovery {
        let selector_start = format!(".{}-", self.options.prefix);
        let mut discovery = Discovery::default();

        for (index, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            if !trimmed.starts_with(&selector_start) {
                continue;
            }
            let Some(glyph_name) = self
                .selector
                .captures(trimmed)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
            else {
                continue;
            };

            match self.content_within_window(lines, index) {
                Some(content_value) => discovery.rules.push(GlyphRule {
                    glyph_name: glyph_name.to_string(),
                    content_value: content_value.to_string(),
                    line: index,
                }),
                None => {
                    tracing::debug!(
                        line = index + 1,
                        glyph = glyph_name,
                        "no content declaration within lookahead window"
                    );
                    discovery.skipped += 1;
                }
            }
        }

        discovery
    }

    /// Format the custom-property declaration for a rule.
    ///
    /// The captured `content` value is emitted as-is, without quotes, so
    /// consumers read `\e001` rather than `"\e001"`.
    #[must_use]
    pub fn declaration(&self, rule: &GlyphRule) -> String {
        format!(
            "  --{}-{}: {};",
            self.options.prefix, rule.glyph_name, rule.content_value
        )
    }

    /// Count `--{prefix}-<name>:` occurrences in `content`.
    #[must_use]
    pub fn count_variables(&self, content: &str) -> usize {
        self.variable.find_iter(content).count()
    }

    /// Read generated declarations back out of `content`.
    ///
    /// One entry per variable name, first occurrence wins. Values are
    /// returned without surrounding double quotes.
    #[must_use]
    pub fn list_variables(&self, content: &str) -> Vec<Variable> {
        let mut seen = HashSet::new();
        content
            .lines()
            .filter_map(|line| self.declaration_line.captures(line))
            .filter_map(|caps| {
                let name = caps.get(1)?.as_str();
                let value = caps.get(2)?.as_str();
                seen.insert(name.to_string()).then(|| Variable {
                    name: name.to_string(),
                    value: unquote(value).to_string(),
                })
            })
            .collect()
    }

    fn content_within_window<'a>(&self, lines: &[&'a str], start: usize) -> Option<&'a str> {
        let end = start.saturating_add(self.options.lookahead).min(lines.len());
        lines[start..end].iter().find_map(|&line| {
            CONTENT_DECLARATION
                .captures(line)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str())
        })
    }

    fn unique_declarations(&self, rules: &[GlyphRule]) -> Vec<String> {
        let mut seen = HashSet::new();
        rules
            .iter()
            .map(|rule| self.declaration(rule))
            .filter(|decl| seen.insert(decl.clone()))
            .collect()
    }
}

impl Default for VariableExtractor {
    fn default() -> Self {
        Self::new(ExtractorOptions::default()).expect("default extractor options are valid")
    }
}

static DEFAULT_EXTRACTOR: LazyLock<VariableExtractor> = LazyLock::new(VariableExtractor::default);

/// Transform with the default prefix and lookahead.
#[must_use]
pub fn transform(content: &str) -> String {
    DEFAULT_EXTRACTOR.transform(content)
}

fn compile(field: &'static str, pattern: &str) -> Result<Regex, StylesheetError> {
    Regex::new(pattern).map_err(|error| StylesheetError::InvalidOptions {
        field,
        reason: error.to_string(),
    })
}

fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(value)
}
