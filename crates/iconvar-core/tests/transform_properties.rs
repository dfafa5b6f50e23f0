//! Behavioural properties of the transform over a range of stylesheets.

use std::collections::HashSet;

use iconvar_core::{MARKER_COMMENT, VariableExtractor, strip_generated_block, transform};
use pretty_assertions::assert_eq;
use rstest::rstest;

const ICONFONT: &str = r#"@font-face {
  font-family: "multi-pro-iconfont";
  src: url('iconfont.woff2') format('woff2');
}

.multi-pro-iconfont {
  font-family: "multi-pro-iconfont" !important;
  font-style: normal;
}


.multi-pro-icon-home:before {
  content: "\e001";
}

.multi-pro-icon-user:before {
  content: "\e002";
}

.multi-pro-icon-settings:before {
  content: "\e003";
}
"#;

fn declared_names(out: &str) -> Vec<String> {
    VariableExtractor::default()
        .list_variables(out)
        .into_iter()
        .map(|var| var.name)
        .collect()
}

#[rstest]
#[case::empty("")]
#[case::only_blank_lines("\n\n\n")]
#[case::no_glyph_rules(".a {\n  color: red;\n}\n\n\n.b {}\n")]
#[case::single_rule(".multi-pro-icon-foo:before {\n  content: \"\\e001\";\n}")]
#[case::rule_after_preamble("body {}\n.multi-pro-icon-foo:before {\n  content: \"\\e001\";\n}")]
#[case::rule_after_blank_line("body {}\n\n.multi-pro-icon-foo:before { content: \"\\e001\"; }")]
#[case::leading_blank_line("\n.multi-pro-icon-foo:before { content: \"\\e001\"; }")]
#[case::full_iconfont(ICONFONT)]
#[case::crlf_line_endings(".multi-pro-icon-a:before {\r\n  content: \"\\e001\";\r\n}\r\n")]
fn transform_is_idempotent(#[case] css: &str) {
    let once = transform(css);
    let twice = transform(&once);
    assert_eq!(twice, once);
}

#[test]
fn iconfont_block_lands_before_first_glyph_rule() {
    let out = transform(ICONFONT);
    let lines: Vec<&str> = out.lines().collect();
    let marker = lines
        .iter()
        .position(|line| *line == MARKER_COMMENT)
        .expect("marker present");

    assert_eq!(lines[marker - 1], "");
    assert_eq!(lines[marker - 2], "}");
    assert_eq!(lines[marker + 1], ":root {");
    assert_eq!(lines[marker + 2], "  --multi-pro-icon-home: \\e001;");
    assert_eq!(lines[marker + 3], "  --multi-pro-icon-user: \\e002;");
    assert_eq!(lines[marker + 4], "  --multi-pro-icon-settings: \\e003;");
    assert_eq!(lines[marker + 5], "}");
    assert_eq!(lines[marker + 6], "");
    assert_eq!(lines[marker + 7], ".multi-pro-icon-home:before {");
}

#[test]
fn declarations_follow_source_order() {
    let css = ".multi-pro-icon-zeta:before { content: \"\\e009\"; }\n\
               .multi-pro-icon-alpha:before { content: \"\\e001\"; }\n\
               .multi-pro-icon-mid:before { content: \"\\e005\"; }";
    assert_eq!(declared_names(&transform(css)), vec!["zeta", "alpha", "mid"]);
}

#[test]
fn repeated_rules_never_duplicate_a_variable() {
    let rule = ".multi-pro-icon-dup:before {\n  content: \"\\e010\";\n}";
    let css = format!("{rule}\n{rule}\n\n{rule}");
    let out = transform(&css);

    let declarations: Vec<&str> = out
        .lines()
        .filter(|line| line.trim_start().starts_with("--multi-pro-icon-"))
        .collect();
    let unique: HashSet<&&str> = declarations.iter().collect();
    assert_eq!(declarations.len(), 1);
    assert_eq!(unique.len(), declarations.len());
}

#[test]
fn content_six_lines_after_selector_is_ignored() {
    let css = ".multi-pro-icon-late:before {\n  a: 1;\n  b: 2;\n  c: 3;\n  d: 4;\n  e: 5;\n  content: \"\\e0aa\";\n}";
    let out = transform(css);
    assert!(!out.contains(MARKER_COMMENT));
    assert_eq!(out, css);
}

#[test]
fn no_match_output_is_normalised_input() {
    let css = ".a {}\n\n\n\n.b {}\n\n\n";
    assert_eq!(transform(css), ".a {}\n\n.b {}");
}

#[test]
fn stale_block_is_replaced_not_duplicated() {
    let stale = format!(
        "{MARKER_COMMENT}\n:root {{\n  --multi-pro-icon-gone: \\e999;\n}}\n\n\
         .multi-pro-icon-new:before {{ content: \"\\e123\"; }}"
    );
    let out = transform(&stale);

    assert_eq!(out.matches(MARKER_COMMENT).count(), 1);
    assert!(!out.contains("gone"));
    assert!(out.contains("  --multi-pro-icon-new: \\e123;"));
}

#[test]
fn block_moves_when_first_rule_moves() {
    let first = transform("body {}\n.multi-pro-icon-a:before { content: \"\\e001\"; }");
    let edited = first.replacen("body {}", "body {}\nhtml {}", 1);
    let second = transform(&edited);

    let lines: Vec<&str> = second.lines().collect();
    assert_eq!(lines[0], "body {}");
    assert_eq!(lines[1], "html {}");
    assert_eq!(lines[2], MARKER_COMMENT);
}

#[test]
fn strip_of_transform_equals_normalised_input() {
    assert_eq!(
        strip_generated_block(&transform(ICONFONT)),
        strip_generated_block(ICONFONT)
    );
}
