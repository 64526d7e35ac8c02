//! Symbol table for identifier interning.
//!
//! Converts identifier text into cheap integer handles (`Symbol`).
//! Comparing two symbols is O(1) integer comparison.
//!
//! Text is only accepted while it is shorter than [`MAX_SYMBOL_LENGTH`] bytes.
//! Callers that must always produce a symbol use [`SymbolTable::intern_truncated`]
//! and report the truncation themselves.

use indexmap::IndexSet;

use crate::invariants::ensure_interned;

/// Exclusive upper bound on the byte length of an interned symbol.
pub const MAX_SYMBOL_LENGTH: usize = 1024;

/// A lightweight handle to an interned string.
///
/// Symbols are ordered by insertion order, not lexicographically.
/// Use `SymbolTable::resolve` if you need string ordering.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Symbol(u32);

impl Symbol {
    /// Raw index for debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn from_raw(index: u32) -> Self {
        Self(index)
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

/// Deduplicating identifier store.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    strings: IndexSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `text` is short enough to be interned.
    #[inline]
    pub fn accepts(text: &str) -> bool {
        text.len() < MAX_SYMBOL_LENGTH
    }

    /// Intern `text`, or return `None` when it is too long.
    /// Already-interned text returns the existing symbol.
    pub fn try_intern(&mut self, text: &str) -> Option<Symbol> {
        if !Self::accepts(text) {
            return None;
        }
        if let Some(index) = self.strings.get_index_of(text) {
            return Some(Symbol(index as u32));
        }
        let (index, _) = self.strings.insert_full(text.to_owned());
        Some(Symbol(index as u32))
    }

    /// Intern text the caller knows to be short, such as built-in names.
    ///
    /// # Panics
    /// Panics if `text` is not shorter than [`MAX_SYMBOL_LENGTH`].
    pub fn intern(&mut self, text: &str) -> Symbol {
        let symbol = self.try_intern(text);
        ensure_interned(symbol, text)
    }

    /// Intern `text`, cutting it down to the longest acceptable prefix first.
    ///
    /// Returns the symbol and whether truncation happened. The cut is moved
    /// back to the nearest character boundary so the stored text stays valid UTF-8.
    pub fn intern_truncated(&mut self, text: &str) -> (Symbol, bool) {
        if let Some(symbol) = self.try_intern(text) {
            return (symbol, false);
        }
        let mut end = MAX_SYMBOL_LENGTH - 1;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        let symbol = self.try_intern(&text[..end]);
        (ensure_interned(symbol, &text[..end]), true)
    }

    /// Look up already-interned text without inserting it.
    pub fn get(&self, text: &str) -> Option<Symbol> {
        self.strings.get_index_of(text).map(|i| Symbol(i as u32))
    }

    /// Resolve a Symbol back to its string.
    ///
    /// # Panics
    /// Panics if the symbol was not created by this table.
    #[inline]
    pub fn resolve(&self, symbol: Symbol) -> &str {
        &self.strings[symbol.0 as usize]
    }

    #[inline]
    pub fn try_resolve(&self, symbol: Symbol) -> Option<&str> {
        self.strings.get_index(symbol.0 as usize).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over all interned strings with their symbols, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.strings
            .iter()
            .enumerate()
            .map(|(i, s)| (Symbol(i as u32), s.as_str()))
    }
}
