//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::catalog::CatalogError;

#[cold]
pub(super) fn panic_invalid_catalog(err: &CatalogError) -> ! {
    panic!("diagnostic catalog: {err} (fix the CATALOG table)")
}

#[cold]
pub(super) fn panic_unknown_diagnostic(index: usize, len: usize) -> ! {
    panic!("diagnostic catalog: index {index} out of range (table has {len} entries)")
}
