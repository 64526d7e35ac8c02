//! AST node kinds and their payloads.

use ulang_core::Symbol;

use crate::syntax::{AssignmentOp, ClauseForm, CompareOp, PackageRole, VerseScope};

use super::AstId;

/// Bracket style of a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallStyle {
    /// `f(x)`: cannot fail.
    Parentheses,
    /// `f[x]`: may fail.
    SquareBrackets,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithmeticOp {
    pub fn symbol(self) -> &'static str {
        match self {
            ArithmeticOp::Add => "+",
            ArithmeticOp::Sub => "-",
            ArithmeticOp::Mul => "*",
            ArithmeticOp::Div => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Utf8CodeUnit,
    UnicodeCodePoint,
}

/// What an identifier refers to. Everything starts `Unresolved`; semantic
/// analysis picks one of the other variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    Unresolved,
    Class,
    Module,
    ModuleAlias,
    Enum,
    Interface,
    Data,
    TypeAlias,
    TypeVariable,
    Function,
    OverloadedFunction,
    SelfRef,
    Local,
    BuiltInMacro,
}

/// Reserved word heading a macro clause, as in `for (x) do {...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MacroClauseTag {
    None,
    Of,
    Do,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroClause {
    pub tag: MacroClauseTag,
    pub form: ClauseForm,
    pub exprs: Vec<AstId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// `<attr>` written before the name.
    Attribute,
    /// Written after the name, as in `class<final>`.
    Specifier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub kind: AttributeKind,
    pub expr: AstId,
}

/// Desugared package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageNode {
    pub name: String,
    pub verse_path: String,
    pub verse_scope: VerseScope,
    pub role: PackageRole,
    pub effective_verse_version: u32,
    pub uploaded_at_fn_version: u32,
    pub allow_native: bool,
    pub treat_modules_as_implicit: bool,
    pub allow_experimental: bool,
    pub enable_scene_graph: bool,
    pub members: Vec<AstId>,
    /// Packages this one depends on, in declaration order.
    pub dependencies: Vec<AstId>,
    /// Compilation unit that owns the package, set once units are formed.
    pub compilation_unit: Option<AstId>,
}

/// AST node kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstKind {
    // Helpers
    Error { children: Vec<AstId>, can_fail: bool },
    Placeholder,
    External,
    PathPlusSymbol { symbol: Option<Symbol> },

    // Literals
    Logic { value: bool },
    Number { text: String, is_float: bool },
    Char { code_point: u32, ty: CharType },
    String { text: String },
    Path { text: String },
    EnumLiteral { symbol: Symbol },
    TypeLiteral { ty: AstId },
    FunctionLiteral { domain: AstId, range: AstId },

    // Identifiers
    Identifier {
        kind: IdentifierKind,
        symbol: Symbol,
        context: Option<AstId>,
        qualifier: Option<AstId>,
        unrestricted_access: bool,
    },

    // Definitions and macros
    Definition {
        element: Option<AstId>,
        value_domain: Option<AstId>,
        value: Option<AstId>,
        name: Option<Symbol>,
    },
    MacroCall { name: AstId, clauses: Vec<MacroClause> },

    // Invocations
    Invocation { style: CallStyle, callee: AstId, argument: AstId },
    UnaryArithmetic { op: UnaryOp, operand: AstId },
    BinaryArithmetic { op: ArithmeticOp, argument: AstId },
    ShortCircuitAnd { lhs: AstId, rhs: AstId },
    ShortCircuitOr { lhs: AstId, rhs: AstId },
    LogicalNot { operand: AstId },
    Comparison { op: CompareOp, argument: AstId },
    QueryValue { operand: AstId },
    MakeOption { value: Option<AstId> },
    MakeArray { elements: Vec<AstId> },
    MakeMap { entries: Vec<AstId> },
    MakeTuple { elements: Vec<AstId> },
    TupleElement { tuple: AstId, index: usize },
    MakeRange { lhs: AstId, rhs: AstId },
    InvokeType { ty: AstId, argument: AstId, is_fallible: bool },
    PointerToReference { operand: AstId },
    Set { operand: AstId },
    NewPointer { ty: AstId, value: AstId },
    ReferenceToValue { operand: AstId },
    Assignment { op: AssignmentOp, lhs: AstId, rhs: AstId },

    // Type formers
    ArrayTypeFormer { element: AstId },
    GeneratorTypeFormer { element: AstId },
    MapTypeFormer { keys: Vec<AstId>, value: AstId },
    OptionTypeFormer { element: AstId },
    SubtypeFormer { element: AstId },
    TupleTypeFormer { elements: Vec<AstId> },
    ArrowTypeFormer { domain: AstId, range: AstId },
    ArchetypeInstantiation { class: AstId, body: Vec<AstId> },

    // Flow control
    CodeBlock { exprs: Vec<AstId> },
    Let { exprs: Vec<AstId> },
    Defer { exprs: Vec<AstId> },
    If { condition: AstId, then: Option<AstId>, else_: Option<AstId> },
    Iteration { generators: Vec<AstId>, body: AstId },
    Loop { body: AstId },
    Break,
    Return { result: Option<AstId> },
    ProfileBlock { user_tag: Option<AstId>, body: AstId },

    // Lowered forms produced after semantic analysis
    IrFor { definition: AstId, body: AstId },
    IrForBody { body: AstId },
    IrArrayAdd { source: AstId },
    IrMapAdd { key: AstId, value: AstId },
    IrArrayLength { array: AstId },
    IrArrayUnsafeCall { callee: AstId, argument: AstId },
    IrConvertToDynamic { value: AstId },
    IrConvertFromDynamic { value: AstId },

    // Concurrency
    Sync { exprs: Vec<AstId> },
    Rush { exprs: Vec<AstId> },
    Race { exprs: Vec<AstId> },
    SyncIterated { generators: Vec<AstId>, body: AstId },
    RushIterated { generators: Vec<AstId>, body: AstId },
    RaceIterated { generators: Vec<AstId>, body: AstId },
    Branch { body: AstId },
    Spawn { body: AstId },

    // Definitions
    ModuleDefinition { name: Symbol, members: Vec<AstId>, legacy_public: bool },
    EnumDefinition { name: Symbol, enumerators: Vec<AstId> },
    InterfaceDefinition { name: Symbol, super_interfaces: Vec<AstId>, members: Vec<AstId> },
    ClassDefinition { name: Symbol, super_types: Vec<AstId>, members: Vec<AstId> },
    DataDefinition { element: AstId, value: Option<AstId> },
    IterationPairDefinition { key: AstId, value: AstId, source: AstId },
    FunctionDefinition { element: AstId, body: Option<AstId> },
    TypeAliasDefinition { element: AstId, ty: AstId },
    Using { context: AstId },
    Import { path: AstId },
    Where { lhs: AstId, rhs: Vec<AstId> },
    Var { operand: AstId },
    ScopedAccessLevelDefinition { scopes: Vec<AstId> },
    MakeNamed { name: Symbol, value: AstId },

    // Context
    Project { name: String, compilation_units: Vec<AstId> },
    CompilationUnit { packages: Vec<AstId> },
    Package(Box<PackageNode>),
    Snippet { path: String, members: Vec<AstId> },
}

impl AstKind {
    pub fn name(&self) -> &'static str {
        match self {
            AstKind::Error { .. } => "Error",
            AstKind::Placeholder => "Placeholder",
            AstKind::External => "External",
            AstKind::PathPlusSymbol { .. } => "PathPlusSymbol",
            AstKind::Logic { .. } => "Logic",
            AstKind::Number { .. } => "Number",
            AstKind::Char { .. } => "Char",
            AstKind::String { .. } => "String",
            AstKind::Path { .. } => "Path",
            AstKind::EnumLiteral { .. } => "EnumLiteral",
            AstKind::TypeLiteral { .. } => "TypeLiteral",
            AstKind::FunctionLiteral { .. } => "FunctionLiteral",
            AstKind::Identifier { .. } => "Identifier",
            AstKind::Definition { .. } => "Definition",
            AstKind::MacroCall { .. } => "MacroCall",
            AstKind::Invocation { .. } => "Invocation",
            AstKind::UnaryArithmetic { .. } => "UnaryArithmetic",
            AstKind::BinaryArithmetic { .. } => "BinaryArithmetic",
            AstKind::ShortCircuitAnd { .. } => "ShortCircuitAnd",
            AstKind::ShortCircuitOr { .. } => "ShortCircuitOr",
            AstKind::LogicalNot { .. } => "LogicalNot",
            AstKind::Comparison { .. } => "Comparison",
            AstKind::QueryValue { .. } => "QueryValue",
            AstKind::MakeOption { .. } => "MakeOption",
            AstKind::MakeArray { .. } => "MakeArray",
            AstKind::MakeMap { .. } => "MakeMap",
            AstKind::MakeTuple { .. } => "MakeTuple",
            AstKind::TupleElement { .. } => "TupleElement",
            AstKind::MakeRange { .. } => "MakeRange",
            AstKind::InvokeType { .. } => "InvokeType",
            AstKind::PointerToReference { .. } => "PointerToReference",
            AstKind::Set { .. } => "Set",
            AstKind::NewPointer { .. } => "NewPointer",
            AstKind::ReferenceToValue { .. } => "ReferenceToValue",
            AstKind::Assignment { .. } => "Assignment",
            AstKind::ArrayTypeFormer { .. } => "ArrayTypeFormer",
            AstKind::GeneratorTypeFormer { .. } => "GeneratorTypeFormer",
            AstKind::MapTypeFormer { .. } => "MapTypeFormer",
            AstKind::OptionTypeFormer { .. } => "OptionTypeFormer",
            AstKind::SubtypeFormer { .. } => "SubtypeFormer",
            AstKind::TupleTypeFormer { .. } => "TupleTypeFormer",
            AstKind::ArrowTypeFormer { .. } => "ArrowTypeFormer",
            AstKind::ArchetypeInstantiation { .. } => "ArchetypeInstantiation",
            AstKind::CodeBlock { .. } => "CodeBlock",
            AstKind::Let { .. } => "Let",
            AstKind::Defer { .. } => "Defer",
            AstKind::If { .. } => "If",
            AstKind::Iteration { .. } => "Iteration",
            AstKind::Loop { .. } => "Loop",
            AstKind::Break => "Break",
            AstKind::Return { .. } => "Return",
            AstKind::ProfileBlock { .. } => "ProfileBlock",
            AstKind::IrFor { .. } => "IrFor",
            AstKind::IrForBody { .. } => "IrForBody",
            AstKind::IrArrayAdd { .. } => "IrArrayAdd",
            AstKind::IrMapAdd { .. } => "IrMapAdd",
            AstKind::IrArrayLength { .. } => "IrArrayLength",
            AstKind::IrArrayUnsafeCall { .. } => "IrArrayUnsafeCall",
            AstKind::IrConvertToDynamic { .. } => "IrConvertToDynamic",
            AstKind::IrConvertFromDynamic { .. } => "IrConvertFromDynamic",
            AstKind::Sync { .. } => "Sync",
            AstKind::Rush { .. } => "Rush",
            AstKind::Race { .. } => "Race",
            AstKind::SyncIterated { .. } => "SyncIterated",
            AstKind::RushIterated { .. } => "RushIterated",
            AstKind::RaceIterated { .. } => "RaceIterated",
            AstKind::Branch { .. } => "Branch",
            AstKind::Spawn { .. } => "Spawn",
            AstKind::ModuleDefinition { .. } => "ModuleDefinition",
            AstKind::EnumDefinition { .. } => "EnumDefinition",
            AstKind::InterfaceDefinition { .. } => "InterfaceDefinition",
            AstKind::ClassDefinition { .. } => "ClassDefinition",
            AstKind::DataDefinition { .. } => "DataDefinition",
            AstKind::IterationPairDefinition { .. } => "IterationPairDefinition",
            AstKind::FunctionDefinition { .. } => "FunctionDefinition",
            AstKind::TypeAliasDefinition { .. } => "TypeAliasDefinition",
            AstKind::Using { .. } => "Using",
            AstKind::Import { .. } => "Import",
            AstKind::Where { .. } => "Where",
            AstKind::Var { .. } => "Var",
            AstKind::ScopedAccessLevelDefinition { .. } => "ScopedAccessLevelDefinition",
            AstKind::MakeNamed { .. } => "MakeNamed",
            AstKind::Project { .. } => "Project",
            AstKind::CompilationUnit { .. } => "CompilationUnit",
            AstKind::Package(_) => "Package",
            AstKind::Snippet { .. } => "Snippet",
        }
    }

    /// Context nodes group code but cannot stand where a value is expected.
    pub fn is_expression(&self) -> bool {
        !matches!(
            self,
            AstKind::Project { .. } | AstKind::CompilationUnit { .. } | AstKind::Package(_)
        )
    }

    /// Child slots in source order. `None` marks an optional slot left empty,
    /// so positional meaning survives printing.
    pub fn slots(&self) -> Vec<Option<AstId>> {
        fn all(ids: &[AstId]) -> Vec<Option<AstId>> {
            ids.iter().copied().map(Some).collect()
        }
        fn one_then(first: AstId, rest: &[AstId]) -> Vec<Option<AstId>> {
            std::iter::once(Some(first)).chain(rest.iter().copied().map(Some)).collect()
        }

        match self {
            AstKind::Placeholder
            | AstKind::External
            | AstKind::PathPlusSymbol { .. }
            | AstKind::Logic { .. }
            | AstKind::Number { .. }
            | AstKind::Char { .. }
            | AstKind::String { .. }
            | AstKind::Path { .. }
            | AstKind::EnumLiteral { .. }
            | AstKind::Break => Vec::new(),

            AstKind::Error { children: ids, .. }
            | AstKind::MakeArray { elements: ids }
            | AstKind::MakeMap { entries: ids }
            | AstKind::MakeTuple { elements: ids }
            | AstKind::TupleTypeFormer { elements: ids }
            | AstKind::CodeBlock { exprs: ids }
            | AstKind::Let { exprs: ids }
            | AstKind::Defer { exprs: ids }
            | AstKind::Sync { exprs: ids }
            | AstKind::Rush { exprs: ids }
            | AstKind::Race { exprs: ids }
            | AstKind::EnumDefinition { enumerators: ids, .. }
            | AstKind::ScopedAccessLevelDefinition { scopes: ids }
            | AstKind::ModuleDefinition { members: ids, .. }
            | AstKind::Project { compilation_units: ids, .. }
            | AstKind::CompilationUnit { packages: ids }
            | AstKind::Snippet { members: ids, .. } => all(ids),

            AstKind::Package(package) => all(&package.members),

            AstKind::TypeLiteral { ty: a }
            | AstKind::UnaryArithmetic { operand: a, .. }
            | AstKind::BinaryArithmetic { argument: a, .. }
            | AstKind::LogicalNot { operand: a }
            | AstKind::Comparison { argument: a, .. }
            | AstKind::QueryValue { operand: a }
            | AstKind::PointerToReference { operand: a }
            | AstKind::Set { operand: a }
            | AstKind::ReferenceToValue { operand: a }
            | AstKind::ArrayTypeFormer { element: a }
            | AstKind::GeneratorTypeFormer { element: a }
            | AstKind::OptionTypeFormer { element: a }
            | AstKind::SubtypeFormer { element: a }
            | AstKind::Loop { body: a }
            | AstKind::IrForBody { body: a }
            | AstKind::IrArrayAdd { source: a }
            | AstKind::IrArrayLength { array: a }
            | AstKind::IrConvertToDynamic { value: a }
            | AstKind::IrConvertFromDynamic { value: a }
            | AstKind::Branch { body: a }
            | AstKind::Spawn { body: a }
            | AstKind::Using { context: a }
            | AstKind::Import { path: a }
            | AstKind::Var { operand: a }
            | AstKind::MakeNamed { value: a, .. }
            | AstKind::TupleElement { tuple: a, .. } => vec![Some(*a)],

            AstKind::FunctionLiteral { domain: a, range: b }
            | AstKind::Invocation { callee: a, argument: b, .. }
            | AstKind::ShortCircuitAnd { lhs: a, rhs: b }
            | AstKind::ShortCircuitOr { lhs: a, rhs: b }
            | AstKind::MakeRange { lhs: a, rhs: b }
            | AstKind::InvokeType { ty: a, argument: b, .. }
            | AstKind::NewPointer { ty: a, value: b }
            | AstKind::Assignment { lhs: a, rhs: b, .. }
            | AstKind::ArrowTypeFormer { domain: a, range: b }
            | AstKind::IrFor { definition: a, body: b }
            | AstKind::IrMapAdd { key: a, value: b }
            | AstKind::IrArrayUnsafeCall { callee: a, argument: b }
            | AstKind::TypeAliasDefinition { element: a, ty: b } => vec![Some(*a), Some(*b)],

            AstKind::MakeOption { value } => vec![*value],
            AstKind::Return { result } => vec![*result],

            AstKind::Identifier {
                context, qualifier, ..
            } => context.iter().chain(qualifier).copied().map(Some).collect(),

            AstKind::Definition {
                element,
                value_domain,
                value,
                ..
            } => vec![*element, *value_domain, *value],

            AstKind::MacroCall { name, clauses } => std::iter::once(Some(*name))
                .chain(clauses.iter().flat_map(|c| c.exprs.iter().copied().map(Some)))
                .collect(),

            AstKind::MapTypeFormer { keys, value } => {
                let mut slots = all(keys);
                slots.push(Some(*value));
                slots
            }

            AstKind::ArchetypeInstantiation { class, body } => one_then(*class, body),
            AstKind::Iteration { generators, body }
            | AstKind::SyncIterated { generators, body }
            | AstKind::RushIterated { generators, body }
            | AstKind::RaceIterated { generators, body } => {
                let mut slots = all(generators);
                slots.push(Some(*body));
                slots
            }

            AstKind::If {
                condition,
                then,
                else_,
            } => vec![Some(*condition), *then, *else_],

            AstKind::ProfileBlock { user_tag, body } => vec![*user_tag, Some(*body)],

            AstKind::InterfaceDefinition {
                super_interfaces: a,
                members: b,
                ..
            }
            | AstKind::ClassDefinition {
                super_types: a,
                members: b,
                ..
            } => all(a).into_iter().chain(all(b)).collect(),

            AstKind::DataDefinition { element, value } => vec![Some(*element), *value],
            AstKind::FunctionDefinition { element, body } => vec![Some(*element), *body],
            AstKind::IterationPairDefinition { key, value, source } => {
                vec![Some(*key), Some(*value), Some(*source)]
            }
            AstKind::Where { lhs, rhs } => one_then(*lhs, rhs),
        }
    }

    /// Children in source order, skipping empty optional slots.
    pub fn children(&self) -> Vec<AstId> {
        self.slots().into_iter().flatten().collect()
    }
}
