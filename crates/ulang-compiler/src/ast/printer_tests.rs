use indoc::indoc;
use ulang_core::SymbolTable;

use super::*;
use crate::syntax::CompareOp;

fn ident(ast: &mut Ast, symbols: &mut SymbolTable, name: &str) -> AstId {
    let symbol = symbols.intern(name);
    ast.add(AstKind::Identifier {
        kind: IdentifierKind::Unresolved,
        symbol,
        context: None,
        qualifier: None,
        unrestricted_access: false,
    })
}

#[test]
fn nested_expression() {
    let mut ast = Ast::new();
    let mut symbols = SymbolTable::new();
    let a = ident(&mut ast, &mut symbols, "a");
    let b = ident(&mut ast, &mut symbols, "b");
    let tuple = ast.add(AstKind::MakeTuple { elements: vec![a, b] });
    let cmp = ast.add(AstKind::Comparison {
        op: CompareOp::LtEq,
        argument: tuple,
    });

    insta::assert_snapshot!(ast.printer(&symbols, cmp).dump(), @r"
    Comparison <=
      MakeTuple
        Identifier a
        Identifier b
    ");
}

#[test]
fn empty_if_slots_are_marked() {
    let mut ast = Ast::new();
    let symbols = SymbolTable::new();
    let cond = ast.add(AstKind::Logic { value: true });
    let block = ast.add(AstKind::CodeBlock { exprs: vec![cond] });
    let if_ = ast.add(AstKind::If {
        condition: block,
        then: None,
        else_: None,
    });

    let expected = indoc! {"
        If
          CodeBlock
            Logic true
          _
          _
    "};
    assert_eq!(ast.printer(&symbols, if_).dump(), expected);
}

#[test]
fn literals_and_names() {
    let mut ast = Ast::new();
    let mut symbols = SymbolTable::new();
    let x = symbols.intern("x");
    let text = ast.add(AstKind::String {
        text: "a\"b".into(),
    });
    let ch = ast.add(AstKind::Char {
        code_point: 0x1F600,
        ty: CharType::UnicodeCodePoint,
    });
    let byte = ast.add(AstKind::Char {
        code_point: 0x61,
        ty: CharType::Utf8CodeUnit,
    });
    let num = ast.add(AstKind::Number {
        text: "42".into(),
        is_float: false,
    });
    let tuple = ast.add(AstKind::MakeTuple {
        elements: vec![text, ch, byte, num],
    });
    let named = ast.add(AstKind::MakeNamed {
        name: x,
        value: tuple,
    });

    insta::assert_snapshot!(ast.printer(&symbols, named).dump(), @r#"
    MakeNamed x
      MakeTuple
        String "a\"b"
        Char U+1F600
        Char 0x61
        Number 42
    "#);
}

#[test]
fn macro_clauses_and_attributes() {
    let mut ast = Ast::new();
    let mut symbols = SymbolTable::new();
    let name = ident(&mut ast, &mut symbols, "for");
    let item = ident(&mut ast, &mut symbols, "item");
    let body = ident(&mut ast, &mut symbols, "body");
    let native = ident(&mut ast, &mut symbols, "native");
    let call = ast.add(AstKind::MacroCall {
        name,
        clauses: vec![
            MacroClause {
                tag: MacroClauseTag::None,
                form: crate::syntax::ClauseForm::NoSemicolonOrNewline,
                exprs: vec![item],
            },
            MacroClause {
                tag: MacroClauseTag::Do,
                form: crate::syntax::ClauseForm::HasSemicolonOrNewline,
                exprs: vec![body],
            },
        ],
    });
    ast.append_attributes(
        call,
        [Attribute {
            kind: AttributeKind::Attribute,
            expr: native,
        }],
    );

    insta::assert_snapshot!(ast.printer(&symbols, call).dump(), @r"
    MacroCall
      Identifier for
      clause
        Identifier item
      clause do
        Identifier body
      @attribute
        Identifier native
    ");

    let plain = ast.printer(&symbols, call).with_attributes(false).dump();
    assert!(!plain.contains("@attribute"));
}

#[test]
fn project_queries() {
    let mut ast = Ast::new();
    let package = |name: &str| {
        AstKind::Package(Box::new(PackageNode {
            name: name.to_owned(),
            verse_path: String::new(),
            verse_scope: Default::default(),
            role: Default::default(),
            effective_verse_version: 0,
            uploaded_at_fn_version: 0,
            allow_native: false,
            treat_modules_as_implicit: false,
            allow_experimental: false,
            enable_scene_graph: false,
            members: Vec::new(),
            dependencies: Vec::new(),
            compilation_unit: None,
        }))
    };
    let a = ast.add(package("a"));
    let b = ast.add(package("b"));
    let c = ast.add(package("c"));
    let first = ast.add(AstKind::CompilationUnit { packages: vec![a] });
    let second = ast.add(AstKind::CompilationUnit {
        packages: vec![b, c],
    });
    let project = ast.add(AstKind::Project {
        name: "demo".into(),
        compilation_units: vec![first, second],
    });

    assert_eq!(ast.package_count(project), 3);
    assert_eq!(ast.find_package_by_name(project, "c"), Some(c));
    assert_eq!(ast.find_package_by_name(project, "zzz"), None);
    assert_eq!(ast.package_count(a), 0);
    assert!(!ast.kind(project).is_expression());
    assert!(ast.kind(first).children().contains(&a));
}
