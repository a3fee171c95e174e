use std::collections::HashMap;

use crate::replacements::ReplacementTable;

/// Per-rule occurrence counts keyed by the rule's search text.
pub type Occurrences = HashMap<String, usize>;

/// Result of running the replacement table over one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    pub occurrences: Occurrences,
    /// True iff at least one rule changed the text
    pub changed: bool,
}

/// Apply every rule in table order as a literal replace-all.
///
/// Rules run sequentially: each rule sees the output of the previous one.
/// Occurrences are the non-overlapping matches counted before each replace.
pub fn apply(text: &str, table: &ReplacementTable) -> Substitution {
    let mut current = text.to_string();
    let mut occurrences = Occurrences::new();
    let mut changed = false;

    for rule in table.rules() {
        let count = current.matches(rule.old.as_str()).count();
        if count == 0 {
            continue;
        }
        *occurrences.entry(rule.old.clone()).or_insert(0) += count;
        if rule.old != rule.new {
            current = current.replace(rule.old.as_str(), &rule.new);
            changed = true;
        }
    }

    Substitution {
        text: current,
        occurrences,
        changed,
    }
}

/// Fold `from` into `into`.
pub fn merge_occurrences(into: &mut Occurrences, from: Occurrences) {
    for (old, count) in from {
        *into.entry(old).or_insert(0) += count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_replace_all() {
        let table = ReplacementTable::from_pairs([("hello", "hi")]);
        let result = apply("hello world, hello", &table);
        assert_eq!(result.text, "hi world, hi");
        assert_eq!(result.occurrences.get("hello"), Some(&2));
        assert!(result.changed);
    }

    #[test]
    fn test_rules_apply_sequentially() {
        let table = ReplacementTable::from_pairs([("a", "b"), ("b", "c")]);
        let result = apply("a", &table);
        assert_eq!(result.text, "c");
        assert_eq!(result.occurrences.get("a"), Some(&1));
        assert_eq!(result.occurrences.get("b"), Some(&1));
    }

    #[test]
    fn test_order_matters() {
        let table = ReplacementTable::from_pairs([("b", "c"), ("a", "b")]);
        assert_eq!(apply("a", &table).text, "b");
    }

    #[test]
    fn test_patterns_are_not_regex() {
        let table = ReplacementTable::from_pairs([(".*", "X"), ("(", "")]);
        let result = apply("a.*b (c)", &table);
        assert_eq!(result.text, "aXb c)");
    }

    #[test]
    fn test_non_overlapping_count() {
        let table = ReplacementTable::from_pairs([("aa", "b")]);
        let result = apply("aaaaa", &table);
        assert_eq!(result.text, "bba");
        assert_eq!(result.occurrences.get("aa"), Some(&2));
    }

    #[test]
    fn test_no_match_is_unchanged() {
        let table = ReplacementTable::from_pairs([("xyz", "")]);
        let result = apply("nothing here", &table);
        assert_eq!(result.text, "nothing here");
        assert!(result.occurrences.is_empty());
        assert!(!result.changed);
    }

    #[test]
    fn test_identity_rule_counts_but_does_not_change() {
        let table = ReplacementTable::from_pairs([("same", "same")]);
        let result = apply("same same", &table);
        assert_eq!(result.occurrences.get("same"), Some(&2));
        assert!(!result.changed);
    }

    #[test]
    fn test_merge_occurrences() {
        let mut total = Occurrences::new();
        merge_occurrences(&mut total, Occurrences::from([("x".to_string(), 2)]));
        merge_occurrences(&mut total, Occurrences::from([("x".to_string(), 1), ("y".to_string(), 4)]));
        assert_eq!(total.get("x"), Some(&3));
        assert_eq!(total.get("y"), Some(&4));
    }
}
