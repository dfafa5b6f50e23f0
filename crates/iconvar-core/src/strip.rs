//! Removal of a previously generated block and blank-line normalisation.

use crate::options::MARKER_NEEDLE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    PassThrough,
    InBlock,
    /// The closing `}` was just swallowed; one blank separator may follow.
    AfterBlock,
}

/// Strip every generated block from `content` and normalise blank lines.
///
/// - A line containing the marker comment starts a block; everything up to
///   and including the first bare `}` is dropped, together with the single
///   blank separator line written after it.
/// - Outside blocks, runs of blank lines collapse into one.
/// - Trailing blank lines are removed.
///
/// Lines are split on `\n` and rejoined with `\n`; whitespace inside kept
/// lines is never altered.
#[must_use]
pub fn strip_generated_block(content: &str) -> String {
    let mut kept: Vec<&str> = Vec::new();
    let mut scan = Scan::PassThrough;
    let mut previous_blank = false;

    for line in content.split('\n') {
        let trimmed = line.trim();

        if scan == Scan::AfterBlock {
            scan = Scan::PassThrough;
            if trimmed.is_empty() {
                continue;
            }
        }

        if scan == Scan::InBlock {
            if trimmed == "}" {
                scan = Scan::AfterBlock;
            }
            continue;
        }

        if trimmed.contains(MARKER_NEEDLE) {
            scan = Scan::InBlock;
            continue;
        }

        if trimmed.is_empty() {
            if previous_blank {
                continue;
            }
            previous_blank = true;
        } else {
            previous_blank = false;
        }
        kept.push(line);
    }

    while kept.last().is_some_and(|line| line.trim().is_empty()) {
        kept.pop();
    }

    kept.join("\n")
}
