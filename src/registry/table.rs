//! Ordered pattern tables for wildcard and regular-expression commands.

use glob::{MatchOptions, Pattern};
use regex::{Regex, RegexBuilder};

/// A compiled command pattern.
pub(super) trait Matcher: Sized {
    /// Compile `pattern`, or describe why it cannot be compiled.
    fn compile(pattern: &str) -> Result<Self, String>;

    /// Whether the whole command token matches.
    fn is_match(&self, command: &str) -> bool;

    /// Whether two pattern strings name the same table entry.
    fn same_pattern(a: &str, b: &str) -> bool {
        a == b
    }
}

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

impl Matcher for Pattern {
    fn compile(pattern: &str) -> Result<Self, String> {
        Pattern::new(pattern).map_err(|e| e.to_string())
    }

    fn is_match(&self, command: &str) -> bool {
        self.matches_with(command, GLOB_OPTIONS)
    }

    // Matching ignores case, so keys do too.
    fn same_pattern(a: &str, b: &str) -> bool {
        a.eq_ignore_ascii_case(b)
    }
}

impl Matcher for Regex {
    fn compile(pattern: &str) -> Result<Self, String> {
        RegexBuilder::new(&format!("^(?:{})$", pattern))
            .case_insensitive(true)
            .build()
            .map_err(|e| e.to_string())
    }

    fn is_match(&self, command: &str) -> bool {
        Regex::is_match(self, command)
    }
}

struct Entry<M, V> {
    pattern: String,
    /// `None` when the pattern failed to compile; such entries never match.
    matcher: Option<M>,
    value: V,
}

/// Patterns evaluated in registration order, first match wins.
pub(super) struct PatternTable<M, V> {
    entries: Vec<Entry<M, V>>,
}

impl<M: Matcher, V: Clone> PatternTable<M, V> {
    pub(super) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace the value for `pattern`.
    ///
    /// A replaced entry keeps its position. Returns the compile error of a
    /// pattern that will never match.
    pub(super) fn insert(&mut self, pattern: &str, value: V) -> Option<String> {
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| M::same_pattern(&e.pattern, pattern))
        {
            entry.value = value;
            return None;
        }

        let (matcher, error) = match M::compile(pattern) {
            Ok(m) => (Some(m), None),
            Err(e) => (None, Some(e)),
        };
        self.entries.push(Entry {
            pattern: pattern.to_owned(),
            matcher,
            value,
        });
        error
    }

    /// Remove `pattern`, returning whether it was present.
    pub(super) fn remove(&mut self, pattern: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| !M::same_pattern(&e.pattern, pattern));
        self.entries.len() != before
    }

    /// The value of the first entry matching `command`.
    pub(super) fn find(&self, command: &str) -> Option<V> {
        self.entries
            .iter()
            .find(|e| e.matcher.as_ref().is_some_and(|m| m.is_match(command)))
            .map(|e| e.value.clone())
    }

    /// Registered patterns in evaluation order.
    pub(super) fn patterns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.pattern.as_str())
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }
}
