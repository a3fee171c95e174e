use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{CaptionError, Result};

/// Top-level keys starting with this marker are comments or metadata.
pub const COMMENT_MARKER: char = '_';

/// A literal old-text to new-text pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementRule {
    pub old: String,
    pub new: String,
}

/// Ordered, key-deduplicated set of replacement rules for one run.
///
/// Rules keep the position at which their key was first seen; a later
/// duplicate only overwrites the replacement text.
#[derive(Debug, Clone, Default)]
pub struct ReplacementTable {
    rules: Vec<ReplacementRule>,
    index: HashMap<String, usize>,
    categories: Vec<(String, usize)>,
}

impl ReplacementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from pairs in order, later duplicates overriding earlier ones.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (old, new) in pairs {
            table.insert(old, new);
        }
        table
    }

    /// Load and flatten a replacement document from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CaptionError::ReplacementTable(format!(
                "replacement file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            CaptionError::ReplacementTable(format!("failed to read {}: {}", path.display(), e))
        })?;

        let table = Self::from_json_str(&content)?;
        info!("Loaded {} replacement rules from {}", table.len(), path.display());
        for (category, count) in &table.categories {
            info!("  - {}: {} rules", category, count);
        }
        Ok(table)
    }

    /// Parse a replacement document.
    ///
    /// The document is an object whose values are either categories
    /// (objects of string pairs) or legacy flat string rules. Categories are
    /// flattened in document order.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(content).map_err(|e| {
            CaptionError::ReplacementTable(format!("malformed JSON: {}", e))
        })?;

        let Value::Object(entries) = document else {
            return Err(CaptionError::ReplacementTable(
                "top level must be a JSON object".to_string(),
            ));
        };

        let mut table = Self::new();
        for (key, value) in entries {
            if key.starts_with(COMMENT_MARKER) {
                continue;
            }
            match value {
                Value::Object(rules) => table.merge_category(&key, rules)?,
                Value::String(new) => {
                    table.insert_checked(key, new);
                }
                other => {
                    return Err(CaptionError::ReplacementTable(format!(
                        "entry '{}' must be a category object or a string, found {}",
                        key,
                        json_kind(&other)
                    )));
                }
            }
        }

        Ok(table)
    }

    fn merge_category(&mut self, category: &str, rules: Map<String, Value>) -> Result<()> {
        let count = rules.len();
        for (old, value) in rules {
            match value {
                Value::String(new) => self.insert_checked(old, new),
                other => {
                    return Err(CaptionError::ReplacementTable(format!(
                        "rule '{}' in category '{}' must map to a string, found {}",
                        old,
                        category,
                        json_kind(&other)
                    )));
                }
            }
        }
        self.categories.push((category.to_string(), count));
        Ok(())
    }

    fn insert_checked(&mut self, old: String, new: String) {
        if old.is_empty() {
            warn!("Skipping replacement rule with empty search text");
            return;
        }
        self.insert(old, new);
    }

    /// Insert or override a rule. Empty search text is ignored.
    pub fn insert(&mut self, old: impl Into<String>, new: impl Into<String>) {
        let old = old.into();
        let new = new.into();
        if old.is_empty() {
            return;
        }
        match self.index.get(&old) {
            Some(&position) => self.rules[position].new = new,
            None => {
                self.index.insert(old.clone(), self.rules.len());
                self.rules.push(ReplacementRule { old, new });
            }
        }
    }

    /// Rules in application order.
    pub fn rules(&self) -> &[ReplacementRule] {
        &self.rules
    }

    pub fn get(&self, old: &str) -> Option<&str> {
        self.index.get(old).map(|&position| self.rules[position].new.as_str())
    }

    /// Category names with the number of rules each declared, in document order.
    pub fn categories(&self) -> &[(String, usize)] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
