//! `<localizes>` message definitions.
//!
//! `Greeting<localizes>(Name:string):message = "Hello {Name}"` lowers to a
//! definition whose value builds the message at runtime:
//!
//! ```text
//! Greeting(Name:string):message =
//!     MakeMessageInternal(path, "Hello {Name}", map{"Name" => MakeLocalizableValue(Name)})
//! ```
//!
//! Packages uploaded before named localize parameters existed spell each
//! parameter as `name:type` identifiers; those are rebuilt from the syntax.

use crate::ast::{AstId, AstKind, CallStyle, IdentifierKind, MacroClause, MacroClauseTag};
use crate::diagnostics::{DiagnosticKind, GlitchLocus};
use crate::syntax::{ClauseForm, NodeId, SyntaxKind};

use super::Desugarer;
use super::invariants::{expect_interpolant_clause, required_child};

const LOCALIZES: &str = "localizes";

/// Syntax pieces of a `<localizes>` definition target.
#[derive(Debug, Clone, Copy)]
struct LocalizableShape {
    /// The message name, carrying the attribute.
    key: NodeId,
    ty: Option<NodeId>,
    /// Parameter clause of a message function.
    args: Option<NodeId>,
}

enum MessageText {
    Text(String),
    /// `external{}`: the message is defined elsewhere.
    External,
    Invalid,
}

impl Desugarer<'_> {
    /// Lower `definition` as a localized message when its target carries
    /// `<localizes>`. `None` means it is an ordinary definition.
    pub(super) fn try_desugar_localizable(&mut self, definition: NodeId) -> Option<AstId> {
        let lhs = required_child(self.tree, definition, 0);
        let shape = self.localizable_shape(lhs)?;
        if !self.tree.is_attribute_present(shape.key, LOCALIZES) {
            return None;
        }
        log::trace!("lowering localized message at node {}", definition.index());

        let Some(ty) = shape.ty else {
            self.report(DiagnosticKind::LocalizesMustSpecifyType, definition).emit();
            return Some(self.error_at(definition, false));
        };

        let rhs = required_child(self.tree, definition, 1);
        let value = match self.tree.kind(rhs) {
            SyntaxKind::Clause { .. } => match *self.tree.children(rhs) {
                [single] => Some(single),
                _ => None,
            },
            _ => Some(rhs),
        };
        let message = match value {
            Some(value) => self.message_text(value, shape.args.is_some()),
            None => MessageText::Invalid,
        };

        match message {
            MessageText::Text(text) => {
                let message = self.lower_message(definition, shape, ty, text);
                Some(self.map(definition, message))
            }
            MessageText::External => None,
            MessageText::Invalid => {
                self.report(DiagnosticKind::LocalizesRhsMustBeString, definition).emit();
                Some(self.error_at(definition, false))
            }
        }
    }

    /// `Msg`, `Msg:t` or `Msg(args):t`.
    fn localizable_shape(&self, lhs: NodeId) -> Option<LocalizableShape> {
        let (target, ty) = match self.tree.kind(lhs) {
            SyntaxKind::TypeSpec => match *self.tree.children(lhs) {
                [target, ty, ..] => (target, Some(ty)),
                _ => return None,
            },
            _ => (lhs, None),
        };

        match self.tree.kind(target) {
            SyntaxKind::Identifier { .. } => Some(LocalizableShape {
                key: target,
                ty,
                args: None,
            }),
            SyntaxKind::PrePostCall => {
                let [key, args, ..] = *self.tree.children(target) else {
                    return None;
                };
                if !matches!(self.tree.kind(key), SyntaxKind::Identifier { .. }) {
                    return None;
                }
                let args = matches!(self.tree.kind(args), SyntaxKind::Clause { .. }).then_some(args);
                Some(LocalizableShape { key, ty, args })
            }
            _ => None,
        }
    }

    fn message_text(&mut self, value: NodeId, has_parameters: bool) -> MessageText {
        match self.tree.kind(value) {
            SyntaxKind::StringLiteral { text } => MessageText::Text(text.clone()),
            SyntaxKind::InterpolatedString => self.interpolated_message_text(value, has_parameters),
            SyntaxKind::Macro
                if self
                    .tree
                    .child(value, 0)
                    .is_some_and(|name| self.tree.text(name) == Some("external")) =>
            {
                MessageText::External
            }
            _ => MessageText::Invalid,
        }
    }

    /// Flatten an interpolated message into its template text, where each
    /// argument reads `{name}`.
    ///
    /// Arguments need a parameter clause to bind them; a message without
    /// parameters must be plain text.
    fn interpolated_message_text(&mut self, node: NodeId, has_parameters: bool) -> MessageText {
        let mut text = String::new();
        let mut has_arguments = false;

        for child in self.tree.children(node).to_vec() {
            match self.tree.kind(child) {
                SyntaxKind::StringLiteral { text: literal } => text.push_str(literal),
                SyntaxKind::Interpolant => {
                    let clause = expect_interpolant_clause(self.tree, child);
                    let args = self.desugar_children(clause);
                    let arg = match args[..] {
                        [] => continue,
                        [arg] => arg,
                        _ => {
                            self.report_invalid_message_content(child);
                            continue;
                        }
                    };
                    if let Some(ch) = self.char_text(arg) {
                        text.push_str(&ch);
                        continue;
                    }
                    let AstKind::Identifier {
                        kind: IdentifierKind::Unresolved,
                        symbol,
                        context,
                        qualifier,
                        ..
                    } = *self.ast.kind(arg)
                    else {
                        self.report_invalid_message_content(child);
                        continue;
                    };
                    if context.is_some() || qualifier.is_some() {
                        self.diag
                            .report(
                                DiagnosticKind::LocalizesEscape,
                                GlitchLocus::from_ast(&self.ast, self.tree, arg),
                            )
                            .message(
                                "Localized message string interpolated arguments must not be qualified.",
                            )
                            .emit();
                    }
                    text.push('{');
                    text.push_str(self.symbols.resolve(symbol));
                    text.push('}');
                    has_arguments = true;
                }
                _ => self.report_invalid_message_content(child),
            }
        }

        if has_parameters || !has_arguments {
            MessageText::Text(text)
        } else {
            MessageText::Invalid
        }
    }

    fn report_invalid_message_content(&mut self, node: NodeId) {
        self.report(DiagnosticKind::LocalizesEscape, node)
            .message(
                "Localized message strings may only contain string and character literals, \
                 and interpolated arguments.",
            )
            .emit();
    }

    /// Build `key(params):ty = MakeMessageInternal(path, text, map{...})`.
    fn lower_message(
        &mut self,
        definition: NodeId,
        shape: LocalizableShape,
        ty: NodeId,
        text: String,
    ) -> AstId {
        let key_symbol = self.symbol_of(shape.key);
        let named_parameters = match self.package {
            None => true,
            Some(package) => self
                .config
                .uses_named_localize_parameters(package.uploaded_at_fn_version),
        };

        let mut substitutions = Vec::new();
        let parameters = match shape.args {
            None => None,
            Some(args) if named_parameters => {
                let parameters = self.desugar_children(args);
                self.collect_substitutions(definition, &parameters, &mut substitutions);
                Some(self.parameters_from_list(parameters, definition))
            }
            Some(args) => {
                let mut parameters = Vec::new();
                for (name, ty) in self.legacy_parameter_pairs(args) {
                    parameters.push(self.legacy_parameter(definition, name, ty, &mut substitutions));
                }
                Some(self.parameters_from_list(parameters, definition))
            }
        };

        let path = self.add(AstKind::PathPlusSymbol {
            symbol: parameters.is_none().then_some(key_symbol),
        });
        let path = self.non_recip(shape.key, path);
        let default_text = self.add(AstKind::String { text });
        let default_text = self.non_recip(definition, default_text);
        let map = self.unrestricted_map(definition, substitutions);
        let arguments = self.wrap_in_tuple(vec![path, default_text, map], definition, false);
        let make_message = self.unrestricted_identifier("MakeMessageInternal", definition);
        let value = self.add(AstKind::Invocation {
            style: CallStyle::Parentheses,
            callee: make_message,
            argument: arguments,
        });
        let value = self.non_recip(definition, value);

        let key = self.identifier(key_symbol);
        let key = self.map(shape.key, key);
        if self.tree.has_attributes(shape.key) {
            let attributes = self.desugar_attributes(shape.key);
            self.ast.set_attributes(key, attributes);
        }
        let element = match parameters {
            Some(argument) => {
                let call = self.add(AstKind::Invocation {
                    style: CallStyle::Parentheses,
                    callee: key,
                    argument,
                });
                self.non_recip(definition, call)
            }
            None => key,
        };

        let value_domain = self.desugar_expr(ty);
        self.add(AstKind::Definition {
            element: Some(element),
            value_domain: Some(value_domain),
            value: Some(value),
            name: None,
        })
    }

    fn parameters_from_list(&mut self, parameters: Vec<AstId>, definition: NodeId) -> AstId {
        if let [single] = parameters[..] {
            return single;
        }
        self.wrap_in_tuple(parameters, definition, false)
    }

    fn unrestricted_map(&mut self, definition: NodeId, entries: Vec<AstId>) -> AstId {
        let name = self.symbols.intern("map");
        let name = self.identifier(name);
        let name = self.non_recip(definition, name);
        let map = self.add(AstKind::MacroCall {
            name,
            clauses: vec![MacroClause {
                tag: MacroClauseTag::None,
                form: ClauseForm::Synthetic,
                exprs: entries,
            }],
        });
        self.non_recip(definition, map)
    }

    /// One `"name" => MakeLocalizableValue(name)` entry per named parameter,
    /// looking through nested tuples.
    fn collect_substitutions(
        &mut self,
        definition: NodeId,
        parameters: &[AstId],
        substitutions: &mut Vec<AstId>,
    ) {
        for &parameter in parameters {
            match self.ast.kind(parameter) {
                AstKind::Definition {
                    element: Some(element),
                    ..
                } => {
                    let element = *element;
                    let AstKind::Identifier {
                        kind: IdentifierKind::Unresolved,
                        symbol,
                        ..
                    } = *self.ast.kind(element)
                    else {
                        continue;
                    };
                    let origin = self.ast.mapped_syntax(element).unwrap_or(definition);
                    let name = self.identifier(symbol);
                    let name = self.non_recip(origin, name);
                    let label = self.symbols.resolve(symbol).to_owned();
                    let entry = self.substitution(definition, origin, label, name);
                    substitutions.push(entry);
                }
                AstKind::MakeTuple { elements } => {
                    let elements = elements.clone();
                    self.collect_substitutions(definition, &elements, substitutions);
                }
                _ => {}
            }
        }
    }

    /// `"label" => MakeLocalizableValue(value)`
    fn substitution(
        &mut self,
        definition: NodeId,
        origin: NodeId,
        label: String,
        value: AstId,
    ) -> AstId {
        let make_value = self.unrestricted_identifier("MakeLocalizableValue", definition);
        let localized = self.add(AstKind::Invocation {
            style: CallStyle::Parentheses,
            callee: make_value,
            argument: value,
        });
        let localized = self.non_recip(origin, localized);
        let label = self.add(AstKind::String { text: label });
        let label = self.non_recip(origin, label);
        let entry = self.add(AstKind::FunctionLiteral {
            domain: label,
            range: localized,
        });
        self.non_recip(definition, entry)
    }

    /// `name:type` parameters written with plain identifiers on both sides.
    fn legacy_parameter_pairs(&self, args: NodeId) -> Vec<(NodeId, NodeId)> {
        self.tree
            .children(args)
            .iter()
            .filter(|&&child| matches!(self.tree.kind(child), SyntaxKind::TypeSpec))
            .filter_map(|&child| match *self.tree.children(child) {
                [name, ty, ..]
                    if matches!(self.tree.kind(name), SyntaxKind::Identifier { .. })
                        && matches!(self.tree.kind(ty), SyntaxKind::Identifier { .. }) =>
                {
                    Some((name, ty))
                }
                _ => None,
            })
            .collect()
    }

    /// Rebuild a `name:type` parameter from its syntax and record its substitution.
    fn legacy_parameter(
        &mut self,
        definition: NodeId,
        name_node: NodeId,
        type_node: NodeId,
        substitutions: &mut Vec<AstId>,
    ) -> AstId {
        let name_symbol = self.symbol_of(name_node);
        let type_symbol = self.symbol_of(type_node);
        let name = self.identifier(name_symbol);
        let name = self.map(name_node, name);
        let ty = self.identifier(type_symbol);
        let ty = self.map(type_node, ty);
        let parameter = self.add(AstKind::Definition {
            element: Some(name),
            value_domain: Some(ty),
            value: None,
            name: None,
        });
        let parameter = self.non_recip(definition, parameter);

        let value = self.identifier(name_symbol);
        let value = self.non_recip(name_node, value);
        let label = self.tree.text(name_node).unwrap_or_default().to_owned();
        let entry = self.substitution(definition, name_node, label, value);
        substitutions.push(entry);
        parameter
    }
}
