#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by the ulang front-end.
//!
//! - [`SymbolTable`] interns identifier text into cheap [`Symbol`] handles,
//!   refusing text longer than [`MAX_SYMBOL_LENGTH`].
//! - [`TextPosition`] and [`TextRange`] locate nodes in source text.

mod interner;
mod invariants;
mod text;


pub use interner::{MAX_SYMBOL_LENGTH, Symbol, SymbolTable};
pub use text::{TextPosition, TextRange};
