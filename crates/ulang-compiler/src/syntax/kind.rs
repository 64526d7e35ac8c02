//! Node kinds of the syntax tree and their payloads.

/// How a clause was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClauseForm {
    /// Not present in source; groups subexpressions.
    #[default]
    Synthetic,
    /// `x`, `{x}` or `{x, y}` but not `{x;}`.
    NoSemicolonOrNewline,
    /// `{x;}`, `{x; y, z}` or an indented block.
    HasSemicolonOrNewline,
    /// Wrapper of one `<attr>` written before the name.
    PrependAttributeHolder,
    /// Wrapper of one specifier written after the name, as in `class<final>`.
    AppendAttributeHolder,
}

impl ClauseForm {
    pub fn is_attribute_holder(self) -> bool {
        matches!(
            self,
            ClauseForm::PrependAttributeHolder | ClauseForm::AppendAttributeHolder
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClausePunctuation {
    #[default]
    Unknown,
    Braces,
    Colon,
    Indentation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentStyle {
    Block,
    Line,
    Indented,
    Fragment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKeyword {
    Var,
    Set,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKeyword {
    Return,
    Break,
    Yield,
    Continue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FloatFormat {
    #[default]
    Unspecified,
    F16,
    F32,
    F64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharFormat {
    /// `char8`: a single UTF-8 code unit.
    Utf8CodeUnit,
    /// `char32`: a single Unicode code point.
    UnicodeCodePoint,
}

/// Position of a child inside a `FlowIf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IfClause {
    IfIdentifier,
    Condition,
    ThenBody,
    ElseBody,
}

/// Position of a child inside an arithmetic or comparison operator node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandRole {
    Operator,
    Operand,
}

/// Position of a child inside a `PrePostCall`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallRole {
    Expression,
    /// `?`
    Option,
    /// `^`
    Pointer,
    /// `.name`
    DotIdentifier,
    /// `(...)`
    SureCall,
    /// `[...]`
    FailCall,
}

/// Reserved word that introduced a macro clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    None,
    Of,
    Do,
    If,
    Else,
    Upon,
    Where,
    Catch,
    Then,
    Until,
    Return,
    Yield,
    Break,
    Continue,
    At,
    Var,
    Set,
    And,
    Or,
    Not,
}

/// What a node means to its parent.
///
/// The variant is chosen by the parent's kind, so a role can never be read
/// with the wrong interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    None,
    If(IfClause),
    BinaryOp(OperandRole),
    Call(CallRole),
    Keyword(Keyword),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PackageRole {
    #[default]
    Source,
    External,
    GeneralCompatConstraint,
    PersistenceCompatConstraint,
    PersistenceSoftCompatConstraint,
}

impl PackageRole {
    /// Constraint packages may name dependencies that are not part of the project.
    pub fn is_constraint(self) -> bool {
        matches!(
            self,
            PackageRole::GeneralCompatConstraint
                | PackageRole::PersistenceCompatConstraint
                | PackageRole::PersistenceSoftCompatConstraint
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerseScope {
    #[default]
    PublicApi,
    InternalApi,
    PublicUser,
    InternalUser,
}

/// Everything the driver knows about a package.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PackageInfo {
    pub name: String,
    pub dir_path: String,
    pub file_path: String,
    pub verse_path: String,
    pub dependency_packages: Vec<String>,
    /// Native code is allowed when a destination directory is configured.
    pub vni_dest_dir: Option<String>,
    pub role: PackageRole,
    pub verse_scope: VerseScope,
    /// Language version override; `None` means the configured default.
    pub verse_version: Option<u32>,
    /// Release the package was published with, encoded as `major * 100 + minor`.
    pub uploaded_at_fn_version: u32,
    pub treat_modules_as_implicit: bool,
    pub allow_experimental: bool,
    pub enable_scene_graph: bool,
}

impl PackageInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uploaded_at_fn_version: crate::desugar::fn_version::LATEST,
            ..Self::default()
        }
    }
}

/// Syntax node kinds. Kind-specific data lives on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxKind {
    // Structure
    Project { name: String, file_path: String },
    Package(Box<PackageInfo>),
    Module { name: String, file_path: String },
    Snippet { path: String, form: ClauseForm },
    Clause { form: ClauseForm, punctuation: ClausePunctuation },
    Comment { style: CommentStyle, text: String },

    // Definitions and flow
    Definition,
    Assignment { op: AssignmentOp },
    FlowIf,
    LogicalOr,
    LogicalAnd,
    PrefixNot,
    Compare { op: CompareOp },
    Where,
    Mutation { keyword: MutationKeyword },
    TypeSpec,

    // Operators and calls
    Identifier { name: String },
    Operator { text: String },
    AddSub,
    MulDivInfix,
    Range,
    Arrow,
    PrePostCall,

    // Literals
    IntLiteral { text: String },
    FloatLiteral { text: String, format: FloatFormat },
    CharLiteral { text: String, format: CharFormat },
    StringLiteral { text: String },
    PathLiteral { text: String },
    Interpolant,
    InterpolatedString,

    // Everything else
    Lambda,
    Control { keyword: ControlKeyword },
    Macro,
    Parens { form: ClauseForm },
    Commas,
    Placeholder,
    ParseError { message: String },
    Escape,
}

impl SyntaxKind {
    pub fn name(&self) -> &'static str {
        match self {
            SyntaxKind::Project { .. } => "Project",
            SyntaxKind::Package(_) => "Package",
            SyntaxKind::Module { .. } => "Module",
            SyntaxKind::Snippet { .. } => "Snippet",
            SyntaxKind::Clause { .. } => "Clause",
            SyntaxKind::Comment { .. } => "Comment",
            SyntaxKind::Definition => "Definition",
            SyntaxKind::Assignment { .. } => "Assignment",
            SyntaxKind::FlowIf => "FlowIf",
            SyntaxKind::LogicalOr => "LogicalOr",
            SyntaxKind::LogicalAnd => "LogicalAnd",
            SyntaxKind::PrefixNot => "PrefixNot",
            SyntaxKind::Compare { .. } => "Compare",
            SyntaxKind::Where => "Where",
            SyntaxKind::Mutation { .. } => "Mutation",
            SyntaxKind::TypeSpec => "TypeSpec",
            SyntaxKind::Identifier { .. } => "Identifier",
            SyntaxKind::Operator { .. } => "Operator",
            SyntaxKind::AddSub => "AddSub",
            SyntaxKind::MulDivInfix => "MulDivInfix",
            SyntaxKind::Range => "Range",
            SyntaxKind::Arrow => "Arrow",
            SyntaxKind::PrePostCall => "PrePostCall",
            SyntaxKind::IntLiteral { .. } => "IntLiteral",
            SyntaxKind::FloatLiteral { .. } => "FloatLiteral",
            SyntaxKind::CharLiteral { .. } => "CharLiteral",
            SyntaxKind::StringLiteral { .. } => "StringLiteral",
            SyntaxKind::PathLiteral { .. } => "PathLiteral",
            SyntaxKind::Interpolant => "Interpolant",
            SyntaxKind::InterpolatedString => "InterpolatedString",
            SyntaxKind::Lambda => "Lambda",
            SyntaxKind::Control { .. } => "Control",
            SyntaxKind::Macro => "Macro",
            SyntaxKind::Parens { .. } => "Parens",
            SyntaxKind::Commas => "Commas",
            SyntaxKind::Placeholder => "Placeholder",
            SyntaxKind::ParseError { .. } => "ParseError",
            SyntaxKind::Escape => "Escape",
        }
    }

    /// Nodes whose children carry `Role::BinaryOp`.
    pub fn is_operator_node(&self) -> bool {
        matches!(
            self,
            SyntaxKind::AddSub | SyntaxKind::MulDivInfix | SyntaxKind::Compare { .. }
        )
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, SyntaxKind::Comment { .. })
    }

    /// Source text carried by atom-like kinds.
    pub fn text(&self) -> Option<&str> {
        match self {
            SyntaxKind::Identifier { name } => Some(name),
            SyntaxKind::Operator { text }
            | SyntaxKind::IntLiteral { text }
            | SyntaxKind::FloatLiteral { text, .. }
            | SyntaxKind::CharLiteral { text, .. }
            | SyntaxKind::StringLiteral { text }
            | SyntaxKind::PathLiteral { text }
            | SyntaxKind::Comment { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Form of a clause-like node.
    pub fn clause_form(&self) -> Option<ClauseForm> {
        match self {
            SyntaxKind::Clause { form, .. }
            | SyntaxKind::Parens { form }
            | SyntaxKind::Snippet { form, .. } => Some(*form),
            _ => None,
        }
    }

    pub fn clause(form: ClauseForm) -> Self {
        SyntaxKind::Clause {
            form,
            punctuation: ClausePunctuation::Unknown,
        }
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        SyntaxKind::Identifier { name: name.into() }
    }

    pub fn string(text: impl Into<String>) -> Self {
        SyntaxKind::StringLiteral { text: text.into() }
    }
}
