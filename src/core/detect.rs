//! Script detection: decides whether a value is localizable text.

use anyhow::{Context, Result};
use regex::Regex;

/// Default detection pattern: the CJK Unified Ideographs range U+4E00..=U+9FA5.
pub const DEFAULT_SCRIPT_PATTERN: &str = r"[\x{4E00}-\x{9FA5}]";

const CJK_START: char = '\u{4E00}';
const CJK_END: char = '\u{9FA5}';

/// Checks if the text contains at least one CJK ideograph (U+4E00..=U+9FA5).
///
/// # Examples
///
/// ```
/// use zhscan::core::detect::contains_cjk;
///
/// assert!(contains_cjk("你好"));
/// assert!(contains_cjk("Hello 世界"));
/// assert!(!contains_cjk("Hello"));
/// assert!(!contains_cjk("こんにちは"));
/// assert!(!contains_cjk(""));
/// ```
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| (CJK_START..=CJK_END).contains(&c))
}

/// Predicate over candidate values.
///
/// `Cjk` is the built-in range check; `Pattern` uses a configured regex.
#[derive(Debug, Clone, Default)]
pub enum TextDetector {
    #[default]
    Cjk,
    Pattern(Regex),
}

impl TextDetector {
    pub fn from_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid script detection pattern: \"{}\"", pattern))?;
        Ok(TextDetector::Pattern(regex))
    }

    pub fn is_match(&self, text: &str) -> bool {
        match self {
            TextDetector::Cjk => contains_cjk(text),
            TextDetector::Pattern(regex) => regex.is_match(text),
        }
    }

    /// `None` stands for any non-string value (absent, numeric, nested expression)
    /// and never matches.
    pub fn detect(&self, value: Option<&str>) -> bool {
        value.is_some_and(|text| self.is_match(text))
    }
}
