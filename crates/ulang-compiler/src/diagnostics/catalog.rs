//! Static table of every diagnostic the front-end can report.
//!
//! The table is indexed by [`DiagnosticKind`] and sorted strictly ascending by
//! reference code, which lets [`lookup_by_reference_code`] binary-search it.
//! Both properties are checked once, on first lookup.

use std::fmt;
use std::sync::OnceLock;

use super::invariants::panic_invalid_catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Ok,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Ok => write!(f, "ok"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Diagnostic kinds in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    Ok,

    // System
    InvalidVerseVersion,

    // Syntax
    ExpectedExpression,

    // Semantic, tool limitations
    Internal,
    Unimplemented,
    Unsupported,

    // Semantic, project structure
    UnknownPackageDependency,
    TooLongIdentifier,

    // Semantic, expression shape
    ExpectedSingleExpression,
    UnexpectedNumberOfArguments,
    BinaryOpNoOperands,
    BinaryOpExpectedTwoOperands,
    PrefixOpNoOperand,
    MalformedConditional,
    MalformedMacro,
    AttributeNotAllowed,
    CharLiteralDoesNotContainOneChar,

    // Semantic, localization
    LocalizesMustSpecifyType,
    LocalizesRhsMustBeString,
    LocalizesEscape,

    // Warnings
    StricterErrorCheck,
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticInfo {
    pub kind: DiagnosticKind,
    pub code: u16,
    pub severity: Severity,
    pub description: &'static str,
}

const fn entry(
    kind: DiagnosticKind,
    code: u16,
    severity: Severity,
    description: &'static str,
) -> DiagnosticInfo {
    DiagnosticInfo {
        kind,
        code,
        severity,
        description,
    }
}

use DiagnosticKind as K;
use Severity::{Error as E, Ok as O, Warning as W};

pub static CATALOG: [DiagnosticInfo; 21] = [
    entry(K::Ok, 0, O, "Success"),
    entry(K::InvalidVerseVersion, 1001, E, "Invalid language version."),
    entry(K::ExpectedExpression, 2001, E, "Expected an expression."),
    entry(K::Internal, 3001, E, "Internal compiler error."),
    entry(K::Unimplemented, 3002, E, "This feature is not implemented yet."),
    entry(K::Unsupported, 3003, E, "This construct is not supported."),
    entry(K::UnknownPackageDependency, 3010, E, "Unknown package dependency."),
    entry(K::TooLongIdentifier, 3020, E, "Identifier is too long and was truncated."),
    entry(K::ExpectedSingleExpression, 3030, E, "Expected a single expression."),
    entry(K::UnexpectedNumberOfArguments, 3031, E, "Unexpected number of arguments."),
    entry(K::BinaryOpNoOperands, 3040, E, "Binary operator has no operands."),
    entry(K::BinaryOpExpectedTwoOperands, 3041, E, "Binary operator expects exactly two operands."),
    entry(K::PrefixOpNoOperand, 3042, E, "Prefix operator has no operand."),
    entry(K::MalformedConditional, 3050, E, "Malformed conditional."),
    entry(K::MalformedMacro, 3051, E, "Malformed macro."),
    entry(K::AttributeNotAllowed, 3052, E, "Attributes are not allowed here."),
    entry(K::CharLiteralDoesNotContainOneChar, 3060, E, "Character literal must contain exactly one character."),
    entry(K::LocalizesMustSpecifyType, 3070, E, "Localized messages must specify a type, e.g. `Msg<localizes>:message = \"text\"`."),
    entry(K::LocalizesRhsMustBeString, 3071, E, "The value of a localized message must be a string literal."),
    entry(K::LocalizesEscape, 3072, E, "Invalid content in a localized message string."),
    entry(K::StricterErrorCheck, 4001, W, "This construct will be rejected by a future language version."),
];

/// Why a table failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("entry {index} describes {found:?} but the table is indexed by kind")]
    KindOutOfPlace { index: usize, found: DiagnosticKind },
    #[error("reference code {code} at entry {index} does not ascend past {previous}")]
    CodeNotAscending { index: usize, code: u16, previous: u16 },
}

/// Check that `table` is indexed by kind and strictly ascending by code.
pub fn validate_catalog(table: &[DiagnosticInfo]) -> Result<(), CatalogError> {
    for (index, info) in table.iter().enumerate() {
        if info.kind as usize != index {
            return Err(CatalogError::KindOutOfPlace {
                index,
                found: info.kind,
            });
        }
        if index > 0 {
            let previous = table[index - 1].code;
            if info.code <= previous {
                return Err(CatalogError::CodeNotAscending {
                    index,
                    code: info.code,
                    previous,
                });
            }
        }
    }
    Ok(())
}

fn catalog() -> &'static [DiagnosticInfo] {
    static VALIDATED: OnceLock<()> = OnceLock::new();
    VALIDATED.get_or_init(|| {
        if let Err(err) = validate_catalog(&CATALOG) {
            panic_invalid_catalog(&err);
        }
    });
    &CATALOG
}

/// Look up a catalog row by its index.
///
/// # Panics
/// Panics when `index` is outside the table.
pub fn lookup(index: usize) -> &'static DiagnosticInfo {
    let table = catalog();
    match table.get(index) {
        Some(info) => info,
        None => super::invariants::panic_unknown_diagnostic(index, table.len()),
    }
}

/// Find the kind carrying `code`, if any.
pub fn lookup_by_reference_code(code: u16) -> Option<DiagnosticKind> {
    let table = catalog();
    table
        .binary_search_by_key(&code, |info| info.code)
        .ok()
        .map(|index| table[index].kind)
}

impl DiagnosticKind {
    pub fn info(self) -> &'static DiagnosticInfo {
        lookup(self as usize)
    }

    pub fn code(self) -> u16 {
        self.info().code
    }

    pub fn default_severity(self) -> Severity {
        self.info().severity
    }

    pub fn description(self) -> &'static str {
        self.info().description
    }
}

/// Render a diagnostic as one tool-parseable line:
/// `path(beginRow,beginCol, endRow,endCol): <category> <code>: <message>`.
///
/// The reference code is left out for `Severity::Ok`.
pub fn format_message(
    message: &str,
    path: &str,
    range: ulang_core::TextRange,
    severity: Severity,
    kind: DiagnosticKind,
) -> String {
    if severity == Severity::Ok {
        format!("{path}({range}): {severity}: {message}")
    } else {
        format!("{path}({range}): {severity} {}: {message}", kind.code())
    }
}
