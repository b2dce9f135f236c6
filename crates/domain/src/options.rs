//! Render options

use serde::{Deserialize, Serialize};

/// Behavioral switches fixed when a template is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOptions {
    /// Leave references to missing variables untouched instead of failing.
    #[serde(alias = "ignoreUnset")]
    pub ignore_unset: bool,
}

impl TemplateOptions {
    /// Creates the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ignore_unset: false,
        }
    }

    /// Sets whether unset variables are ignored.
    #[must_use]
    pub const fn ignore_unset(mut self, ignore: bool) -> Self {
        self.ignore_unset = ignore;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert!(!TemplateOptions::default().ignore_unset);
        assert_eq!(TemplateOptions::new(), TemplateOptions::default());
    }

    #[test]
    fn test_builder() {
        assert!(TemplateOptions::new().ignore_unset(true).ignore_unset);
    }

    #[test]
    fn test_deserialize_accepts_both_spellings() {
        let a: TemplateOptions = serde_json::from_str(r#"{"ignore_unset": true}"#).unwrap();
        let b: TemplateOptions = serde_json::from_str(r#"{"ignoreUnset": true}"#).unwrap();
        let c: TemplateOptions = serde_json::from_str("{}").unwrap();
        assert!(a.ignore_unset);
        assert!(b.ignore_unset);
        assert!(!c.ignore_unset);
    }
}
