// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The token table: the registry of known symbols.
//!
//! Rill has no fixed keyword set. Keywords and operators are registered in
//! a [`TokenTable`] by the surrounding parser framework (ultimately from
//! user declarations), each with a binding power for the expression
//! grammar. The table may grow between tokenization passes but is read-only
//! during a single pass.
//!
//! Lookup is longest-prefix: given the remaining input, the table returns
//! the longest registered symbol text that prefixes it. The table is a
//! prefix tree keyed by character, walked greedily while remembering the
//! deepest node that ends a registered symbol.

use std::collections::HashMap;

use ecow::EcoString;

/// A variable-length symbol matching rule.
///
/// Some symbols' matched length depends on additional parsing rules beyond
/// exact text match (string interpolation openers, for example). This core
/// does not implement any such rule: recognizing a symbol whose entry
/// carries an extension fails with
/// [`TokenErrorKind::UnsupportedExtension`](super::TokenErrorKind::UnsupportedExtension).
/// The type exists so the registry can round-trip such entries without
/// losing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserExtension {
    name: EcoString,
}

impl ParserExtension {
    /// Creates an extension marker with the given rule name.
    #[must_use]
    pub fn new(name: impl Into<EcoString>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name of the extension rule.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A registered symbol and its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntry {
    text: EcoString,
    binding_power: u32,
    extension: Option<ParserExtension>,
}

impl TokenEntry {
    /// Creates an entry for a constant-length symbol.
    #[must_use]
    pub fn new(text: impl Into<EcoString>, binding_power: u32) -> Self {
        Self {
            text: text.into(),
            binding_power,
            extension: None,
        }
    }

    /// Creates an entry whose matched length depends on an extension rule.
    #[must_use]
    pub fn with_extension(
        text: impl Into<EcoString>,
        binding_power: u32,
        extension: ParserExtension,
    ) -> Self {
        Self {
            text: text.into(),
            binding_power,
            extension: Some(extension),
        }
    }

    /// Returns the symbol text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the binding power of this symbol.
    #[must_use]
    pub const fn binding_power(&self) -> u32 {
        self.binding_power
    }

    /// Returns the extension rule, if any.
    #[must_use]
    pub const fn extension(&self) -> Option<&ParserExtension> {
        self.extension.as_ref()
    }
}

/// One node of the prefix tree.
#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<char, Node>,
    /// Set when the path from the root to this node spells a registered
    /// symbol.
    entry: Option<TokenEntry>,
}

/// The set of registered symbols, with longest-prefix lookup.
///
/// # Examples
///
/// ```
/// use rill_core::tokenize::TokenTable;
///
/// let mut table = TokenTable::new();
/// table.insert(":=", 0);
/// table.insert(":", 0);
///
/// let entry = table.lookup_longest_prefix(":= x").unwrap();
/// assert_eq!(entry.text(), ":=");
/// let entry = table.lookup_longest_prefix(": x").unwrap();
/// assert_eq!(entry.text(), ":");
/// assert!(table.lookup_longest_prefix("x").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenTable {
    root: Node,
    len: usize,
}

impl TokenTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from `(text, binding_power)` pairs.
    #[must_use]
    pub fn with_symbols<'a>(symbols: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        let mut table = Self::new();
        for (text, binding_power) in symbols {
            table.insert(text, binding_power);
        }
        table
    }

    /// Registers a constant-length symbol.
    ///
    /// Registering the same text again replaces the previous entry; which
    /// declaration wins is the registry's concern, not the tokenizer's.
    pub fn insert(&mut self, text: impl Into<EcoString>, binding_power: u32) {
        self.insert_entry(TokenEntry::new(text, binding_power));
    }

    /// Registers a full entry, extension rule included.
    ///
    /// Empty symbol text is never matchable (a zero-length token would let
    /// recognition stall); such an entry is stored but never returned by
    /// lookup.
    pub fn insert_entry(&mut self, entry: TokenEntry) {
        debug_assert!(!entry.text.is_empty(), "symbol text must be non-empty");
        let mut node = &mut self.root;
        for c in entry.text.chars() {
            node = node.children.entry(c).or_default();
        }
        if node.entry.replace(entry).is_none() {
            self.len += 1;
        }
    }

    /// Returns the entry for the longest registered symbol that is a prefix
    /// of `input`, or `None` if no registered symbol prefixes it.
    #[must_use]
    pub fn lookup_longest_prefix(&self, input: &str) -> Option<&TokenEntry> {
        let mut node = &self.root;
        let mut deepest = None;
        for c in input.chars() {
            match node.children.get(&c) {
                Some(child) => {
                    node = child;
                    if let Some(entry) = &node.entry {
                        deepest = Some(entry);
                    }
                }
                None => break,
            }
        }
        deepest
    }

    /// Returns `true` if `text` is registered exactly.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.lookup_longest_prefix(text)
            .is_some_and(|entry| entry.text() == text)
    }

    /// Returns the number of registered symbols.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no symbols are registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_matches_nothing() {
        let table = TokenTable::new();
        assert!(table.is_empty());
        assert!(table.lookup_longest_prefix("anything").is_none());
    }

    #[test]
    fn longest_prefix_wins() {
        let table = TokenTable::with_symbols([("-", 65), ("->", 25), ("-->", 24)]);
        assert_eq!(table.lookup_longest_prefix("-").unwrap().text(), "-");
        assert_eq!(table.lookup_longest_prefix("->").unwrap().text(), "->");
        assert_eq!(table.lookup_longest_prefix("-->x").unwrap().text(), "-->");
        // prefix of a registered symbol with no entry of its own
        let table = TokenTable::with_symbols([("-->", 24)]);
        assert!(table.lookup_longest_prefix("->").is_none());
    }

    #[test]
    fn lookup_stops_at_input_end() {
        let table = TokenTable::with_symbols([(":=", 0), (":", 0)]);
        assert_eq!(table.lookup_longest_prefix(":").unwrap().text(), ":");
    }

    #[test]
    fn insert_replaces_existing_entry() {
        let mut table = TokenTable::new();
        table.insert("if", 10);
        table.insert("if", 20);
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.lookup_longest_prefix("if").unwrap().binding_power(),
            20
        );
    }

    #[test]
    fn contains_is_exact() {
        let table = TokenTable::with_symbols([("if", 0)]);
        assert!(table.contains("if"));
        assert!(!table.contains("i"));
        assert!(!table.contains("ifx"));
    }

    #[test]
    fn extension_entries_round_trip() {
        let mut table = TokenTable::new();
        table.insert_entry(TokenEntry::with_extension(
            "s!",
            0,
            ParserExtension::new("interpolated-string"),
        ));
        let entry = table.lookup_longest_prefix("s!...").unwrap();
        assert_eq!(entry.extension().unwrap().name(), "interpolated-string");
    }

    #[test]
    fn keyword_lookup_ignores_identifier_tail() {
        // The table matches by prefix only; `ifx` still finds `if` here.
        // Rejecting that reading in favour of the longer identifier is the
        // dispatcher's job, not the table's.
        let table = TokenTable::with_symbols([("if", 0)]);
        assert_eq!(table.lookup_longest_prefix("ifx").unwrap().text(), "if");
    }
}
