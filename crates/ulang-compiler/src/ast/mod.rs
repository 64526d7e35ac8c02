//! Abstract syntax tree.
//!
//! Nodes live in an [`Ast`] arena and are addressed by [`AstId`]. A node may
//! point back at the syntax node it was produced from; see
//! [`crate::mapping`] for the rules that keep both directions consistent.

mod kind;
mod printer;

#[cfg(test)]
mod printer_tests;

use crate::syntax::NodeId;

pub use kind::{
    ArithmeticOp, AstKind, Attribute, AttributeKind, CallStyle, CharType, IdentifierKind,
    MacroClause, MacroClauseTag, PackageNode, UnaryOp,
};
pub use printer::AstPrinter;

/// Stable handle of a node in an [`Ast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AstId(u32);

impl AstId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Opaque handle to a semantic type, filled in by later passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeHandle(pub u32);

/// Link from an AST node back to the syntax tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SyntaxMapping {
    #[default]
    None,
    /// Both directions agree: the syntax node maps back to this AST node.
    Reciprocal(NodeId),
    /// This AST node points at the syntax node, but the syntax node maps elsewhere.
    NonReciprocal(NodeId),
    /// Lowered node that borrows the location of a syntax node.
    Ir(NodeId),
}

impl SyntaxMapping {
    pub fn node(self) -> Option<NodeId> {
        match self {
            SyntaxMapping::None => None,
            SyntaxMapping::Reciprocal(node)
            | SyntaxMapping::NonReciprocal(node)
            | SyntaxMapping::Ir(node) => Some(node),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AstNode {
    kind: AstKind,
    mapping: SyntaxMapping,
    result_type: Option<TypeHandle>,
    attributes: Vec<Attribute>,
}

impl AstNode {
    pub fn kind(&self) -> &AstKind {
        &self.kind
    }

    pub fn mapping(&self) -> SyntaxMapping {
        self.mapping
    }

    pub fn result_type(&self) -> Option<TypeHandle> {
        self.result_type
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}

/// Arena holding every AST node produced by a pass.
#[derive(Debug, Clone, Default)]
pub struct Ast {
    nodes: Vec<AstNode>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add(&mut self, kind: AstKind) -> AstId {
        let id = AstId(self.nodes.len() as u32);
        self.nodes.push(AstNode {
            kind,
            mapping: SyntaxMapping::None,
            result_type: None,
            attributes: Vec::new(),
        });
        id
    }

    #[inline]
    pub fn node(&self, id: AstId) -> &AstNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: AstId) -> &AstKind {
        &self.node(id).kind
    }

    pub fn kind_mut(&mut self, id: AstId) -> &mut AstKind {
        &mut self.nodes[id.index()].kind
    }

    pub fn children(&self, id: AstId) -> Vec<AstId> {
        self.kind(id).children()
    }

    pub fn mapping(&self, id: AstId) -> SyntaxMapping {
        self.node(id).mapping
    }

    /// Syntax node this AST node was produced from, whatever the mapping flavor.
    pub fn mapped_syntax(&self, id: AstId) -> Option<NodeId> {
        self.mapping(id).node()
    }

    pub(crate) fn set_mapping(&mut self, id: AstId, mapping: SyntaxMapping) {
        self.nodes[id.index()].mapping = mapping;
    }

    pub fn result_type(&self, id: AstId) -> Option<TypeHandle> {
        self.node(id).result_type
    }

    pub fn set_result_type(&mut self, id: AstId, ty: Option<TypeHandle>) {
        self.nodes[id.index()].result_type = ty;
    }

    pub fn attributes(&self, id: AstId) -> &[Attribute] {
        &self.node(id).attributes
    }

    /// Replace the attributes of `id`.
    pub fn set_attributes(&mut self, id: AstId, attributes: Vec<Attribute>) {
        self.nodes[id.index()].attributes = attributes;
    }

    pub fn append_attributes(&mut self, id: AstId, attributes: impl IntoIterator<Item = Attribute>) {
        self.nodes[id.index()].attributes.extend(attributes);
    }

    /// Package named `name` among the compilation units of `project`.
    pub fn find_package_by_name(&self, project: AstId, name: &str) -> Option<AstId> {
        self.packages(project)
            .find(|&p| matches!(self.kind(p), AstKind::Package(pkg) if pkg.name == name))
    }

    /// Number of packages across all compilation units of `project`.
    pub fn package_count(&self, project: AstId) -> usize {
        self.packages(project).count()
    }

    fn packages(&self, project: AstId) -> impl Iterator<Item = AstId> + '_ {
        let units: &[AstId] = match self.kind(project) {
            AstKind::Project {
                compilation_units, ..
            } => compilation_units,
            _ => &[],
        };
        units.iter().flat_map(move |&unit| {
            let packages: &[AstId] = match self.kind(unit) {
                AstKind::CompilationUnit { packages } => packages,
                _ => &[],
            };
            packages.iter().copied()
        })
    }

    pub fn package(&self, id: AstId) -> Option<&PackageNode> {
        match self.kind(id) {
            AstKind::Package(package) => Some(package),
            _ => None,
        }
    }

    pub fn package_mut(&mut self, id: AstId) -> Option<&mut PackageNode> {
        match self.kind_mut(id) {
            AstKind::Package(package) => Some(package),
            _ => None,
        }
    }
}
