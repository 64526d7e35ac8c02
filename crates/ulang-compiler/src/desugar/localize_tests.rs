use crate::diagnostics::DiagnosticKind;
use crate::syntax::{ClauseForm, NodeId, PackageInfo, SyntaxKind};
use crate::test_utils::TreeBuilder;

/// `Msg<localizes>(Name:string):message = "Hello {Name}"`
fn message_function(t: &mut TreeBuilder) -> NodeId {
    let msg = t.ident("Msg");
    t.attribute(msg, "localizes");
    let name = t.ident("Name");
    let string = t.ident("string");
    let parameter = t.type_spec(Some(name), string);
    let target = t.call(msg, &[parameter]);
    let message = t.ident("message");
    let lhs = t.type_spec(Some(target), message);

    let hello = t.string("Hello ");
    let argument = t.ident("Name");
    let argument = t.braces(&[argument]);
    let argument = t.node(SyntaxKind::Interpolant, &[argument]);
    let text = t.node(SyntaxKind::InterpolatedString, &[hello, argument]);
    t.definition(lhs, text)
}

/// `Greeting<localizes>:message = value`
fn plain_message(t: &mut TreeBuilder, value: NodeId) -> NodeId {
    let key = t.ident("Greeting");
    t.attribute(key, "localizes");
    let message = t.ident("message");
    let lhs = t.type_spec(Some(key), message);
    t.definition(lhs, value)
}

#[test]
fn message_function_builds_substitution_map() {
    let mut t = TreeBuilder::new();
    let node = message_function(&mut t);

    insta::assert_snapshot!(t.dump(node), @r#"
    Definition
      Invocation ()
        Identifier Msg
          @attribute
            Identifier localizes
        Definition
          Identifier Name
          Identifier string
          _
      Identifier message
      Invocation ()
        Identifier MakeMessageInternal (unrestricted)
        MakeTuple
          PathPlusSymbol
          String "Hello {Name}"
          MacroCall
            Identifier map
            clause
              FunctionLiteral
                String "Name"
                Invocation ()
                  Identifier MakeLocalizableValue (unrestricted)
                  Identifier Name
    "#);
}

#[test]
fn legacy_packages_rebuild_parameters_from_syntax() {
    let mut current = TreeBuilder::new();
    let node = message_function(&mut current);
    let expected = current.dump(node);

    let mut t = TreeBuilder::new();
    let node = message_function(&mut t);
    let snippet = t.snippet("/pkg/messages.verse", &[node]);
    let mut info = PackageInfo::new("pkg");
    info.uploaded_at_fn_version = 2000;
    let package = t.package(info, &[snippet]);

    let (output, diagnostics) = t.desugar(package);

    assert!(diagnostics.is_empty());
    let definition = t.tree.mapped_ast(node).expect("definition is mapped");
    assert_eq!(output.ast.printer(&output.symbols, definition).dump(), expected);
}

#[test]
fn plain_message_names_its_path() {
    let mut t = TreeBuilder::new();
    let text = t.string("Hi");
    let node = plain_message(&mut t, text);

    insta::assert_snapshot!(t.dump(node), @r#"
    Definition
      Identifier Greeting
        @attribute
          Identifier localizes
      Identifier message
      Invocation ()
        Identifier MakeMessageInternal (unrestricted)
        MakeTuple
          PathPlusSymbol Greeting
          String "Hi"
          MacroCall
            Identifier map
            clause
    "#);
}

#[test]
fn single_expression_clause_value_is_unwrapped() {
    let mut t = TreeBuilder::new();
    let text = t.string("Hi");
    let value = t.block(&[text]);
    let node = plain_message(&mut t, value);

    let (output, diagnostics) = t.desugar(node);

    assert!(diagnostics.is_empty());
    assert!(output.dump().contains("String \"Hi\""));
}

#[test]
fn external_message_stays_an_ordinary_definition() {
    let mut t = TreeBuilder::new();
    let external = t.tree.add(SyntaxKind::Macro);
    let name = t.ident("external");
    t.tree.append_child(external, name);
    let body = t.clause(ClauseForm::NoSemicolonOrNewline, &[]);
    t.tree.append_child(external, body);
    let node = plain_message(&mut t, external);

    insta::assert_snapshot!(t.dump(node), @r"
    Definition
      Identifier Greeting
        @attribute
          Identifier localizes
      Identifier message
      MacroCall
        Identifier external
        clause
    ");
}

#[test]
fn message_without_type_is_reported() {
    let mut t = TreeBuilder::new();
    let key = t.ident("Greeting");
    t.attribute(key, "localizes");
    let text = t.string("Hi");
    let node = t.definition(key, text);

    let (output, diagnostics) = t.desugar(node);

    insta::assert_snapshot!(output.dump(), @"Error");
    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::LocalizesMustSpecifyType]);
}

#[test]
fn non_string_message_is_reported() {
    let mut t = TreeBuilder::new();
    let value = t.int("42");
    let node = plain_message(&mut t, value);

    let (output, diagnostics) = t.desugar(node);

    insta::assert_snapshot!(output.dump(), @"Error");
    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::LocalizesRhsMustBeString]);
}

#[test]
fn interpolated_number_is_reported_but_lowered() {
    let mut t = TreeBuilder::new();
    let number = t.int("1");
    let number = t.braces(&[number]);
    let number = t.node(SyntaxKind::Interpolant, &[number]);
    let text = t.node(SyntaxKind::InterpolatedString, &[number]);
    let node = plain_message(&mut t, text);

    let (output, diagnostics) = t.desugar(node);

    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::LocalizesEscape]);
    insta::assert_snapshot!(output.dump(), @r#"
    Definition
      Identifier Greeting
        @attribute
          Identifier localizes
      Identifier message
      Invocation ()
        Identifier MakeMessageInternal (unrestricted)
        MakeTuple
          PathPlusSymbol Greeting
          String ""
          MacroCall
            Identifier map
            clause
    "#);
}

#[test]
fn argument_without_parameters_is_reported() {
    let mut t = TreeBuilder::new();
    let hello = t.string("Hello ");
    let argument = t.ident("Name");
    let argument = t.braces(&[argument]);
    let argument = t.node(SyntaxKind::Interpolant, &[argument]);
    let text = t.node(SyntaxKind::InterpolatedString, &[hello, argument]);
    let node = plain_message(&mut t, text);

    let (output, diagnostics) = t.desugar(node);

    insta::assert_snapshot!(output.dump(), @"Error");
    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::LocalizesRhsMustBeString]);
}

#[test]
fn invalid_content_in_message_function_is_still_lowered() {
    let mut t = TreeBuilder::new();
    let msg = t.ident("Msg");
    t.attribute(msg, "localizes");
    let name = t.ident("Name");
    let string = t.ident("string");
    let parameter = t.type_spec(Some(name), string);
    let target = t.call(msg, &[parameter]);
    let message = t.ident("message");
    let lhs = t.type_spec(Some(target), message);
    let number = t.int("1");
    let number = t.braces(&[number]);
    let number = t.node(SyntaxKind::Interpolant, &[number]);
    let text = t.node(SyntaxKind::InterpolatedString, &[number]);
    let node = t.definition(lhs, text);

    let (output, diagnostics) = t.desugar(node);

    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::LocalizesEscape]);
    assert!(output.dump().contains("Identifier MakeMessageInternal"));
}

#[test]
fn qualified_argument_without_parameters_is_reported() {
    let mut t = TreeBuilder::new();
    let argument = t.ident("Name");
    let qualifier = t.ident("M");
    t.tree.append_child(argument, qualifier);
    let argument = t.braces(&[argument]);
    let argument = t.node(SyntaxKind::Interpolant, &[argument]);
    let text = t.node(SyntaxKind::InterpolatedString, &[argument]);
    let node = plain_message(&mut t, text);

    let (output, diagnostics) = t.desugar(node);

    insta::assert_snapshot!(output.dump(), @"Error");
    assert_eq!(
        diagnostics.kinds(),
        vec![
            DiagnosticKind::LocalizesEscape,
            DiagnosticKind::LocalizesRhsMustBeString
        ]
    );
}

#[test]
fn definitions_without_the_attribute_are_untouched() {
    let mut t = TreeBuilder::new();
    let key = t.ident("Greeting");
    let message = t.ident("message");
    let lhs = t.type_spec(Some(key), message);
    let text = t.string("Hi");
    let node = t.definition(lhs, text);

    insta::assert_snapshot!(t.dump(node), @r#"
    Definition
      Identifier Greeting
      Identifier message
      String "Hi"
    "#);
}
