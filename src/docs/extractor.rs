//! Documentation-comment extraction.
//!
//! A shallow text match, not a parse: `def name(...):` followed by an indented
//! triple-quoted block. Decorated functions and signatures that break the
//! shape are missed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::DEFAULT_DOC_PATTERN;
use crate::error::Result;
use crate::model::DocEntry;

static DEFAULT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_DOC_PATTERN).expect("default doc pattern is valid"));

#[derive(Debug, Clone)]
pub struct DocExtractor {
    pattern: Regex,
}

impl Default for DocExtractor {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.clone(),
        }
    }
}

impl DocExtractor {
    /// Build an extractor from a pattern whose group 1 captures the function
    /// name and group 2 the documentation body.
    pub fn new(pattern: &str) -> Result<Self> {
        if pattern == DEFAULT_DOC_PATTERN {
            return Ok(Self::default());
        }
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Number of capture groups, not counting the whole match
    pub fn group_count(&self) -> usize {
        self.pattern.captures_len() - 1
    }

    /// Extract `(name, body)` pairs in file order. Bodies are trimmed.
    pub fn extract(&self, content: &str) -> Vec<DocEntry> {
        self.pattern
            .captures_iter(content)
            .filter_map(|caps| {
                let name = caps.get(1)?.as_str();
                let body = caps.get(2)?.as_str().trim();
                Some(DocEntry::new(name, body))
            })
            .collect()
    }
}
