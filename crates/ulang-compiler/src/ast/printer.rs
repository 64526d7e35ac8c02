//! Indented text dump of an AST, used by tests and debugging output.

use std::fmt::Write;

use ulang_core::SymbolTable;

use crate::syntax::{AssignmentOp, CompareOp};

use super::{
    Ast, AstId, AstKind, AttributeKind, CallStyle, CharType, IdentifierKind, MacroClauseTag,
    SyntaxMapping,
};

pub struct AstPrinter<'a> {
    ast: &'a Ast,
    symbols: &'a SymbolTable,
    root: AstId,
    mapping: bool,
    attributes: bool,
}

impl<'a> AstPrinter<'a> {
    pub fn new(ast: &'a Ast, symbols: &'a SymbolTable, root: AstId) -> Self {
        Self {
            ast,
            symbols,
            root,
            mapping: false,
            attributes: true,
        }
    }

    /// Append the syntax mapping of each node: `[=N]` reciprocal, `[~N]` one-way.
    pub fn with_mapping(mut self, value: bool) -> Self {
        self.mapping = value;
        self
    }

    pub fn with_attributes(mut self, value: bool) -> Self {
        self.attributes = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.root, 0, w)
    }

    fn format_node(&self, id: AstId, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        write!(w, "{prefix}")?;
        self.format_header(id, w)?;
        if self.mapping {
            self.format_mapping(id, w)?;
        }
        writeln!(w)?;

        match self.ast.kind(id) {
            AstKind::MacroCall { name, clauses } => {
                self.format_node(*name, indent + 1, w)?;
                for clause in clauses {
                    writeln!(w, "{prefix}  {}", clause_header(clause.tag))?;
                    for &expr in &clause.exprs {
                        self.format_node(expr, indent + 2, w)?;
                    }
                }
            }
            kind => {
                for slot in kind.slots() {
                    match slot {
                        Some(child) => self.format_node(child, indent + 1, w)?,
                        None => writeln!(w, "{prefix}  _")?,
                    }
                }
            }
        }

        if self.attributes {
            for attribute in self.ast.attributes(id) {
                let label = match attribute.kind {
                    AttributeKind::Attribute => "@attribute",
                    AttributeKind::Specifier => "@specifier",
                };
                writeln!(w, "{prefix}  {label}")?;
                self.format_node(attribute.expr, indent + 2, w)?;
            }
        }
        Ok(())
    }

    fn format_mapping(&self, id: AstId, w: &mut impl Write) -> std::fmt::Result {
        match self.ast.mapping(id) {
            SyntaxMapping::None => Ok(()),
            SyntaxMapping::Reciprocal(node) => write!(w, " [={}]", node.index()),
            SyntaxMapping::NonReciprocal(node) => write!(w, " [~{}]", node.index()),
            SyntaxMapping::Ir(node) => write!(w, " [ir {}]", node.index()),
        }
    }

    fn format_header(&self, id: AstId, w: &mut impl Write) -> std::fmt::Result {
        let kind = self.ast.kind(id);
        let name = kind.name();
        match kind {
            AstKind::Error { can_fail, .. } => {
                write!(w, "{name}")?;
                if *can_fail {
                    write!(w, " can_fail")?;
                }
                Ok(())
            }
            AstKind::PathPlusSymbol { symbol } => match symbol {
                Some(symbol) => write!(w, "{name} {}", self.symbols.resolve(*symbol)),
                None => write!(w, "{name}"),
            },
            AstKind::Logic { value } => write!(w, "{name} {value}"),
            AstKind::Number { text, .. } => write!(w, "{name} {text}"),
            AstKind::Char { code_point, ty } => match ty {
                CharType::Utf8CodeUnit => write!(w, "{name} 0x{code_point:02X}"),
                CharType::UnicodeCodePoint => write!(w, "{name} U+{code_point:04X}"),
            },
            AstKind::String { text } => write!(w, "{name} {text:?}"),
            AstKind::Path { text } => write!(w, "{name} {text}"),
            AstKind::EnumLiteral { symbol }
            | AstKind::ModuleDefinition { name: symbol, legacy_public: false, .. }
            | AstKind::EnumDefinition { name: symbol, .. }
            | AstKind::InterfaceDefinition { name: symbol, .. }
            | AstKind::ClassDefinition { name: symbol, .. }
            | AstKind::MakeNamed { name: symbol, .. } => {
                write!(w, "{name} {}", self.symbols.resolve(*symbol))
            }
            AstKind::ModuleDefinition { name: symbol, .. } => {
                write!(w, "{name} {} (legacy public)", self.symbols.resolve(*symbol))
            }
            AstKind::Identifier {
                kind,
                symbol,
                unrestricted_access,
                ..
            } => {
                write!(w, "{name}")?;
                if *kind != IdentifierKind::Unresolved {
                    write!(w, "({kind:?})")?;
                }
                write!(w, " {}", self.symbols.resolve(*symbol))?;
                if *unrestricted_access {
                    write!(w, " (unrestricted)")?;
                }
                Ok(())
            }
            AstKind::Definition { name: Some(symbol), .. } => {
                write!(w, "{name} {}", self.symbols.resolve(*symbol))
            }
            AstKind::Invocation { style, .. } => match style {
                CallStyle::Parentheses => write!(w, "{name} ()"),
                CallStyle::SquareBrackets => write!(w, "{name} []"),
            },
            AstKind::InvokeType { is_fallible: true, .. } => write!(w, "{name} []"),
            AstKind::UnaryArithmetic { .. } => write!(w, "{name} -"),
            AstKind::BinaryArithmetic { op, .. } => write!(w, "{name} {}", op.symbol()),
            AstKind::Comparison { op, .. } => write!(w, "{name} {}", compare_symbol(*op)),
            AstKind::Assignment { op, .. } => write!(w, "{name} {}", assignment_symbol(*op)),
            AstKind::TupleElement { index, .. } => write!(w, "{name} #{index}"),
            AstKind::Project { name: project, .. } => write!(w, "{name} {project}"),
            AstKind::Package(package) => write!(w, "{name} {}", package.name),
            AstKind::Snippet { path, .. } => write!(w, "{name} {path}"),
            _ => write!(w, "{name}"),
        }
    }
}

fn clause_header(tag: MacroClauseTag) -> &'static str {
    match tag {
        MacroClauseTag::None => "clause",
        MacroClauseTag::Of => "clause of",
        MacroClauseTag::Do => "clause do",
    }
}

fn compare_symbol(op: CompareOp) -> &'static str {
    match op {
        CompareOp::Lt => "<",
        CompareOp::LtEq => "<=",
        CompareOp::Gt => ">",
        CompareOp::GtEq => ">=",
        CompareOp::Eq => "=",
        CompareOp::NotEq => "<>",
    }
}

fn assignment_symbol(op: AssignmentOp) -> &'static str {
    match op {
        AssignmentOp::Assign => "=",
        AssignmentOp::AddAssign => "+=",
        AssignmentOp::SubAssign => "-=",
        AssignmentOp::MulAssign => "*=",
        AssignmentOp::DivAssign => "/=",
    }
}

impl Ast {
    pub fn printer<'a>(&'a self, symbols: &'a SymbolTable, root: AstId) -> AstPrinter<'a> {
        AstPrinter::new(self, symbols, root)
    }
}
