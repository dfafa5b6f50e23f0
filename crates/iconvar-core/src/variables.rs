//! Variables read back from a generated block.

use serde::Serialize;

/// A `--{prefix}-{name}: {value};` declaration found in a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    /// Glyph name, without the prefix.
    pub name: String,
    pub value: String,
}

impl Variable {
    /// Full custom-property name, e.g. `--multi-pro-icon-home`.
    #[must_use]
    pub fn property(&self, prefix: &str) -> String {
        format!("--{prefix}-{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_joins_prefix_and_name() {
        let var = Variable {
            name: "home".into(),
            value: "\\e001".into(),
        };
        assert_eq!(var.property("multi-pro-icon"), "--multi-pro-icon-home");
    }
}
