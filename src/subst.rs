//! Ordered literal substitution rules.
//! A SubstMap is built once from the command line and then shared read-only by
//! every path rewrite and content rewrite in the run.

use crate::errors::{CrrError, Result};

/// One literal find/replace pair. No pattern syntax of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub find: String,
    pub replace: String,
}

/// Insertion-ordered map of unique-keyed substitution rules.
///
/// Application order is first-seen registration order; re-registering a key
/// updates its replacement in place without moving it. Registration volume is
/// CLI-argument scale, so a linear key scan at `set` time is fine — the
/// ordering contract is what matters here.
#[derive(Debug, Clone, Default)]
pub struct SubstMap {
    rules: Vec<Rule>,
}

impl SubstMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule, overwriting the replacement if `find` is already
    /// present. An empty `find` is rejected here: replace-all with an empty
    /// needle is undefined and must never reach `apply`.
    pub fn set(&mut self, find: impl Into<String>, replace: impl Into<String>) -> Result<()> {
        let find = find.into();
        if find.is_empty() {
            return Err(CrrError::InvalidName(find));
        }
        let replace = replace.into();
        if let Some(rule) = self.rules.iter_mut().find(|r| r.find == find) {
            rule.replace = replace;
        } else {
            self.rules.push(Rule { find, replace });
        }
        Ok(())
    }

    /// Apply every rule in registration order. Each rule performs a global
    /// left-to-right replacement of non-overlapping occurrences; later rules
    /// see the output of earlier rules, and replacement text is never
    /// re-scanned within the same rule (`str::replace` semantics).
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            out = out.replace(&rule.find, &rule.replace);
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_is_sequential_composition() {
        let mut map = SubstMap::new();
        map.set("foo", "bar").unwrap();
        map.set("bar", "baz").unwrap();
        // The second rule sees the output of the first.
        assert_eq!(map.apply("foo"), "baz");

        let mut r1 = SubstMap::new();
        r1.set("foo", "bar").unwrap();
        let mut r2 = SubstMap::new();
        r2.set("bar", "baz").unwrap();
        assert_eq!(map.apply("x foo y bar z"), r2.apply(&r1.apply("x foo y bar z")));
    }

    #[test]
    fn reregister_keeps_position_updates_value() {
        let mut map = SubstMap::new();
        map.set("a", "1").unwrap();
        map.set("b", "2").unwrap();
        map.set("a", "b").unwrap();
        assert_eq!(map.len(), 2);
        let rules: Vec<_> = map.iter().collect();
        assert_eq!(rules[0].find, "a");
        assert_eq!(rules[0].replace, "b");
        assert_eq!(rules[1].find, "b");
        // "a" still runs first, so its output "b" is rewritten by rule two.
        assert_eq!(map.apply("a"), "2");
    }

    #[test]
    fn empty_find_rejected_at_registration() {
        let mut map = SubstMap::new();
        let err = map.set("", "anything").unwrap_err();
        assert!(matches!(err, CrrError::InvalidName(_)));
        assert!(map.is_empty());
    }

    #[test]
    fn replacement_not_rescanned_within_one_rule() {
        let mut map = SubstMap::new();
        map.set("a", "aa").unwrap();
        // Each original 'a' is replaced exactly once.
        assert_eq!(map.apply("aaa"), "aaaaaa");
    }

    #[test]
    fn empty_map_is_identity() {
        let map = SubstMap::new();
        assert_eq!(map.apply("untouched/text$"), "untouched/text$");
    }
}
