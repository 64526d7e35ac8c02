//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::Symbol;

#[inline]
pub(crate) fn ensure_interned(symbol: Option<Symbol>, text: &str) -> Symbol {
    symbol.unwrap_or_else(|| {
        panic!(
            "SymbolTable: `{}...` ({} bytes) exceeds the symbol length limit \
             (callers with user text must use try_intern or intern_truncated)",
            text.chars().take(16).collect::<String>(),
            text.len()
        )
    })
}
