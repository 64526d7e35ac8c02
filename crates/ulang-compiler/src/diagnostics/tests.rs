use ulang_core::TextRange;

use super::*;

fn locus(path: &str, range: TextRange) -> GlitchLocus {
    GlitchLocus {
        snippet_path: path.to_owned(),
        range,
        result_position: range.begin,
        node: None,
    }
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
    insta::assert_snapshot!(format!("{}", Severity::Ok), @"ok");
}

#[test]
fn catalog_is_indexed_by_kind_and_ascending() {
    assert_eq!(validate_catalog(&CATALOG), Ok(()));
    for (index, info) in CATALOG.iter().enumerate() {
        assert_eq!(lookup(index), info);
        assert_eq!(info.kind.code(), info.code);
    }
}

#[test]
fn validation_rejects_misordered_tables() {
    let mut swapped = CATALOG;
    swapped.swap(1, 2);
    assert_eq!(
        validate_catalog(&swapped),
        Err(CatalogError::KindOutOfPlace {
            index: 1,
            found: DiagnosticKind::ExpectedExpression,
        })
    );

    let mut descending = CATALOG;
    descending[2].code = 900;
    let err = validate_catalog(&descending).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"reference code 900 at entry 2 does not ascend past 1001");
}

#[test]
#[should_panic(expected = "out of range")]
fn lookup_out_of_range_panics() {
    lookup(CATALOG.len());
}

#[test]
fn lookup_by_code() {
    assert_eq!(
        lookup_by_reference_code(3041),
        Some(DiagnosticKind::BinaryOpExpectedTwoOperands)
    );
    assert_eq!(
        lookup_by_reference_code(4001),
        Some(DiagnosticKind::StricterErrorCheck)
    );
    assert_eq!(lookup_by_reference_code(0), Some(DiagnosticKind::Ok));
    assert_eq!(lookup_by_reference_code(3999), None);
}

#[test]
fn severities_follow_the_catalog() {
    assert_eq!(
        DiagnosticKind::StricterErrorCheck.default_severity(),
        Severity::Warning
    );
    assert_eq!(DiagnosticKind::Internal.default_severity(), Severity::Error);
    assert_eq!(DiagnosticKind::Ok.default_severity(), Severity::Ok);
}

#[test]
fn formatted_line() {
    let line = format_message(
        "msg",
        "a.verse",
        TextRange::from_coords(0, 4, 0, 8),
        Severity::Error,
        DiagnosticKind::BinaryOpExpectedTwoOperands,
    );
    insta::assert_snapshot!(line, @"a.verse(1,5, 1,9): error 3041: msg");

    let ok = format_message(
        "fine",
        "a.verse",
        TextRange::INVALID,
        Severity::Ok,
        DiagnosticKind::Ok,
    );
    insta::assert_snapshot!(ok, @"a.verse(0,0, 0,0): ok: fine");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::BinaryOpNoOperands,
            locus("a.verse", TextRange::from_coords(0, 0, 0, 3)),
        )
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    assert!(!diagnostics.has_warnings());
    let glitch = diagnostics.iter().next().unwrap();
    assert_eq!(glitch.message(), "Binary operator has no operands.");
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::StricterErrorCheck, GlitchLocus::default())
        .message("wrap it in a block")
        .emit();

    assert_eq!(diagnostics.error_count(), 0);
    assert_eq!(diagnostics.warning_count(), 1);
    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::StricterErrorCheck]);
    insta::assert_snapshot!(diagnostics.render(), @"(0,0, 0,0): warning 4001: wrap it in a block");
}

#[test]
fn extend_keeps_report_order() {
    let mut first = Diagnostics::new();
    first
        .report(DiagnosticKind::Internal, GlitchLocus::default())
        .emit();
    let mut second = Diagnostics::new();
    second
        .report(DiagnosticKind::Unsupported, GlitchLocus::default())
        .emit();
    second
        .report(DiagnosticKind::MalformedMacro, GlitchLocus::default())
        .emit();

    first.extend(second);

    assert_eq!(
        first.kinds(),
        vec![
            DiagnosticKind::Internal,
            DiagnosticKind::Unsupported,
            DiagnosticKind::MalformedMacro,
        ]
    );
}

#[test]
fn render_plain_lines() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::ExpectedExpression,
            locus("m/a.verse", TextRange::from_coords(2, 0, 2, 4)),
        )
        .emit();
    diagnostics
        .report(
            DiagnosticKind::TooLongIdentifier,
            locus("m/b.verse", TextRange::from_coords(0, 0, 0, 1)),
        )
        .emit();

    insta::assert_snapshot!(diagnostics.render(), @r"
    m/a.verse(3,1, 3,5): error 2001: Expected an expression.
    m/b.verse(1,1, 1,2): error 3020: Identifier is too long and was truncated.
    ");
}

#[test]
fn render_with_source() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::BinaryOpExpectedTwoOperands,
            locus("", TextRange::from_coords(0, 0, 0, 5)),
        )
        .message("primary")
        .emit();

    let result = diagnostics.render_with_source("hello world!");
    insta::assert_snapshot!(result, @r"
    error: [3041] primary
      |
    1 | hello world!
      | ^^^^^ primary
    ");
}

#[test]
fn render_with_source_names_the_file() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(
            DiagnosticKind::Unsupported,
            locus("pkg/a.verse", TextRange::from_coords(1, 2, 1, 4)),
        )
        .emit();

    let result = diagnostics.render_with_source("x := 1\ny := ^z\n");
    assert!(result.contains("pkg/a.verse"));
    assert!(result.contains("[3003] This construct is not supported."));
}

#[test]
fn unresolved_range_falls_back_to_line() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::Internal, locus("a.verse", TextRange::INVALID))
        .emit();

    let result = diagnostics.printer().source("abc").render();
    insta::assert_snapshot!(result, @"a.verse(0,0, 0,0): error 3001: Internal compiler error.");
}
