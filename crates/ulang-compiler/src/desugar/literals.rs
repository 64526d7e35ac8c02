//! Number, character, string and path literals, and interpolated strings.

use crate::ast::{AstId, AstKind, CallStyle, CharType};
use crate::diagnostics::DiagnosticKind;
use crate::syntax::{CharFormat, NodeId, SyntaxKind};

use super::Desugarer;
use super::invariants::expect_interpolant_clause;

impl Desugarer<'_> {
    pub(super) fn desugar_number(&mut self, node: NodeId, is_float: bool) -> AstId {
        let text = self.tree.text(node).unwrap_or_default().to_owned();
        let number = self.add(AstKind::Number { text, is_float });
        self.map(node, number)
    }

    pub(super) fn desugar_char(&mut self, node: NodeId, format: CharFormat) -> AstId {
        let text = self.tree.text(node).unwrap_or_default();
        let Some(first) = text.chars().next() else {
            self.report(DiagnosticKind::CharLiteralDoesNotContainOneChar, node).emit();
            return self.error_at(node, false);
        };

        let (code_point, ty, extra) = match format {
            CharFormat::Utf8CodeUnit => (
                u32::from(text.as_bytes()[0]),
                CharType::Utf8CodeUnit,
                false,
            ),
            CharFormat::UnicodeCodePoint => (
                u32::from(first),
                CharType::UnicodeCodePoint,
                first.len_utf8() != text.len(),
            ),
        };
        if extra {
            self.report(DiagnosticKind::CharLiteralDoesNotContainOneChar, node).emit();
        }
        let literal = self.add(AstKind::Char { code_point, ty });
        self.map(node, literal)
    }

    pub(super) fn desugar_string(&mut self, node: NodeId) -> AstId {
        let text = self.tree.text(node).unwrap_or_default().to_owned();
        let string = self.add(AstKind::String { text });
        self.map(node, string)
    }

    pub(super) fn desugar_path(&mut self, node: NodeId) -> AstId {
        let text = self.tree.text(node).unwrap_or_default().to_owned();
        let path = self.add(AstKind::Path { text });
        self.map(node, path)
    }

    /// `"a{x}b"` becomes `Concatenate("a", ToString(x), "b")`.
    ///
    /// Adjacent literal text, including interpolated character literals, is
    /// merged into one string; empty interpolants vanish.
    pub(super) fn desugar_interpolated_string(&mut self, node: NodeId) -> AstId {
        let to_string = self.symbols.intern("ToString");
        let concatenate = self.symbols.intern("Concatenate");

        let mut segments = Vec::new();
        // String segment that following literal text is appended to.
        let mut tail: Option<AstId> = None;
        for child in self.tree.children(node).to_vec() {
            match self.tree.kind(child) {
                SyntaxKind::StringLiteral { text } => match tail {
                    Some(tail) => {
                        if let AstKind::String { text: existing } = self.ast.kind_mut(tail) {
                            existing.push_str(text);
                        }
                    }
                    None => {
                        let string = self.desugar_string(child);
                        segments.push(string);
                        tail = Some(string);
                    }
                },
                SyntaxKind::Interpolant => {
                    let clause = expect_interpolant_clause(self.tree, child);
                    let args = self.desugar_children(clause);
                    if args.is_empty() {
                        continue;
                    }
                    if let [arg] = args[..]
                        && let Some(text) = self.char_text(arg)
                    {
                        match tail {
                            Some(tail) => {
                                if let AstKind::String { text: existing } = self.ast.kind_mut(tail)
                                {
                                    existing.push_str(&text);
                                }
                            }
                            None => {
                                let string = self.add(AstKind::String { text });
                                segments.push(string);
                                tail = Some(string);
                            }
                        }
                        continue;
                    }

                    let form = self.tree.kind(clause).clause_form().unwrap_or_default();
                    let argument = self.expression_from_list(args, form, clause, false);
                    let callee = self.identifier(to_string);
                    let invocation = self.add(AstKind::Invocation {
                        style: CallStyle::Parentheses,
                        callee,
                        argument,
                    });
                    segments.push(self.map(child, invocation));
                    tail = None;
                }
                kind => {
                    let message = format!("Unexpected InterpolatedString child node {}", kind.name());
                    self.report(DiagnosticKind::Internal, child)
                        .message(message)
                        .emit();
                }
            }
        }

        match segments.len() {
            1 => segments[0],
            0 => {
                let empty = self.add(AstKind::String {
                    text: String::new(),
                });
                self.map(node, empty)
            }
            _ => {
                let callee = self.identifier(concatenate);
                let argument = self.add(AstKind::MakeTuple { elements: segments });
                let invocation = self.add(AstKind::Invocation {
                    style: CallStyle::Parentheses,
                    callee,
                    argument,
                });
                self.map(node, invocation)
            }
        }
    }

    /// Text of a character literal node, as it reads inside a string.
    pub(super) fn char_text(&self, id: AstId) -> Option<String> {
        let AstKind::Char { code_point, ty } = *self.ast.kind(id) else {
            return None;
        };
        let ch = match ty {
            CharType::UnicodeCodePoint => char::from_u32(code_point),
            CharType::Utf8CodeUnit => u8::try_from(code_point)
                .ok()
                .filter(u8::is_ascii)
                .map(char::from),
        };
        Some(ch.unwrap_or(char::REPLACEMENT_CHARACTER).to_string())
    }
}
