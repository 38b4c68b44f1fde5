//! Statement kinds of the Python abstract grammar, plus the module and the
//! helper nodes that only appear inside statements.

use serde::Deserialize;

use super::expression::*;
use super::numbers::small;
use super::operators::*;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Module {
    pub body: Vec<Statement>,
    #[serde(default)]
    pub type_ignores: Vec<TypeIgnore>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "_type")]
pub enum Statement {
    FunctionDef(FunctionDef),
    AsyncFunctionDef(FunctionDef),
    ClassDef {
        name: String,
        #[serde(default)]
        bases: Vec<Expression>,
        #[serde(default)]
        keywords: Vec<Keyword>,
        body: Vec<Statement>,
        #[serde(default)]
        decorator_list: Vec<Expression>,
        #[serde(default)]
        type_params: Vec<TypeParam>,
    },
    Return {
        #[serde(default)]
        value: Option<Expression>,
    },
    Delete {
        targets: Vec<Expression>,
    },
    Assign {
        targets: Vec<Expression>,
        value: Expression,
        #[serde(default)]
        type_comment: Option<String>,
    },
    TypeAlias {
        name: Expression,
        #[serde(default)]
        type_params: Vec<TypeParam>,
        value: Expression,
    },
    AugAssign {
        target: Expression,
        op: BinaryOperator,
        value: Expression,
    },
    AnnAssign {
        target: Expression,
        annotation: Expression,
        #[serde(default)]
        value: Option<Expression>,
        #[serde(deserialize_with = "small")]
        simple: u8,
    },
    For(For),
    AsyncFor(For),
    While {
        test: Expression,
        body: Vec<Statement>,
        #[serde(default)]
        orelse: Vec<Statement>,
    },
    // `elif` is not a node of its own: it is an `If` alone in the `orelse` of
    // the previous one.
    If {
        test: Expression,
        body: Vec<Statement>,
        #[serde(default)]
        orelse: Vec<Statement>,
    },
    With(With),
    AsyncWith(With),
    Match {
        subject: Expression,
        cases: Vec<MatchCase>,
    },
    Raise {
        #[serde(default)]
        exc: Option<Expression>,
        #[serde(default)]
        cause: Option<Expression>,
    },
    Try(Try),
    TryStar(Try),
    Assert {
        test: Expression,
        #[serde(default)]
        msg: Option<Expression>,
    },
    Import {
        names: Vec<Alias>,
    },
    ImportFrom {
        #[serde(default)]
        module: Option<String>,
        names: Vec<Alias>,
        #[serde(default, deserialize_with = "small")]
        level: u32,
    },
    Global {
        names: Vec<String>,
    },
    Nonlocal {
        names: Vec<String>,
    },
    Expr {
        value: Expression,
    },
    Pass,
    Break,
    Continue,
}

impl Statement {
    /// The grammar name of this node's kind, as reported in errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::FunctionDef(_) => "FunctionDef",
            Statement::AsyncFunctionDef(_) => "AsyncFunctionDef",
            Statement::ClassDef { .. } => "ClassDef",
            Statement::Return { .. } => "Return",
            Statement::Delete { .. } => "Delete",
            Statement::Assign { .. } => "Assign",
            Statement::TypeAlias { .. } => "TypeAlias",
            Statement::AugAssign { .. } => "AugAssign",
            Statement::AnnAssign { .. } => "AnnAssign",
            Statement::For(_) => "For",
            Statement::AsyncFor(_) => "AsyncFor",
            Statement::While { .. } => "While",
            Statement::If { .. } => "If",
            Statement::With(_) => "With",
            Statement::AsyncWith(_) => "AsyncWith",
            Statement::Match { .. } => "Match",
            Statement::Raise { .. } => "Raise",
            Statement::Try(_) => "Try",
            Statement::TryStar(_) => "TryStar",
            Statement::Assert { .. } => "Assert",
            Statement::Import { .. } => "Import",
            Statement::ImportFrom { .. } => "ImportFrom",
            Statement::Global { .. } => "Global",
            Statement::Nonlocal { .. } => "Nonlocal",
            Statement::Expr { .. } => "Expr",
            Statement::Pass => "Pass",
            Statement::Break => "Break",
            Statement::Continue => "Continue",
        }
    }

    /// The text of a bare string statement, which is how documentation
    /// blocks appear in the tree.
    pub fn as_docstring(&self) -> Option<&str> {
        match self {
            Statement::Expr { value } => value.as_str(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    pub args: Arguments,
    pub body: Vec<Statement>,
    #[serde(default)]
    pub decorator_list: Vec<Expression>,
    #[serde(default)]
    pub returns: Option<Expression>,
    #[serde(default)]
    pub type_comment: Option<String>,
    #[serde(default)]
    pub type_params: Vec<TypeParam>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct For {
    pub target: Expression,
    pub iter: Expression,
    pub body: Vec<Statement>,
    #[serde(default)]
    pub orelse: Vec<Statement>,
    #[serde(default)]
    pub type_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct With {
    pub items: Vec<WithItem>,
    pub body: Vec<Statement>,
    #[serde(default)]
    pub type_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Try {
    pub body: Vec<Statement>,
    #[serde(default)]
    pub handlers: Vec<ExceptHandler>,
    #[serde(default)]
    pub orelse: Vec<Statement>,
    #[serde(default)]
    pub finalbody: Vec<Statement>,
}

/// Parameter list of a function or lambda. Defaults belong to the last
/// entries of `args`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Arguments {
    #[serde(default)]
    pub posonlyargs: Vec<Arg>,
    #[serde(default)]
    pub args: Vec<Arg>,
    #[serde(default)]
    pub vararg: Option<Arg>,
    #[serde(default)]
    pub kwonlyargs: Vec<Arg>,
    #[serde(default)]
    pub kw_defaults: Vec<Option<Expression>>,
    #[serde(default)]
    pub kwarg: Option<Arg>,
    #[serde(default)]
    pub defaults: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Arg {
    pub arg: String,
    #[serde(default)]
    pub annotation: Option<Expression>,
    #[serde(default)]
    pub type_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Alias {
    pub name: String,
    #[serde(default)]
    pub asname: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WithItem {
    pub context_expr: Expression,
    #[serde(default)]
    pub optional_vars: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchCase {
    pub pattern: Pattern,
    #[serde(default)]
    pub guard: Option<Expression>,
    pub body: Vec<Statement>,
}

// match patterns look like expressions but are a grammar of their own
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "_type")]
pub enum Pattern {
    MatchValue {
        value: Expression,
    },
    MatchSingleton {
        value: Literal,
    },
    MatchSequence {
        patterns: Vec<Pattern>,
    },
    MatchMapping {
        keys: Vec<Expression>,
        patterns: Vec<Pattern>,
        #[serde(default)]
        rest: Option<String>,
    },
    MatchClass {
        cls: Expression,
        #[serde(default)]
        patterns: Vec<Pattern>,
        #[serde(default)]
        kwd_attrs: Vec<String>,
        #[serde(default)]
        kwd_patterns: Vec<Pattern>,
    },
    MatchStar {
        #[serde(default)]
        name: Option<String>,
    },
    MatchAs {
        #[serde(default)]
        pattern: Option<Box<Pattern>>,
        #[serde(default)]
        name: Option<String>,
    },
    MatchOr {
        patterns: Vec<Pattern>,
    },
}

impl Pattern {
    pub fn kind(&self) -> &'static str {
        match self {
            Pattern::MatchValue { .. } => "MatchValue",
            Pattern::MatchSingleton { .. } => "MatchSingleton",
            Pattern::MatchSequence { .. } => "MatchSequence",
            Pattern::MatchMapping { .. } => "MatchMapping",
            Pattern::MatchClass { .. } => "MatchClass",
            Pattern::MatchStar { .. } => "MatchStar",
            Pattern::MatchAs { .. } => "MatchAs",
            Pattern::MatchOr { .. } => "MatchOr",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExceptHandler {
    #[serde(default, rename = "type")]
    pub kind: Option<Expression>,
    #[serde(default)]
    pub name: Option<String>,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "_type")]
pub enum TypeParam {
    TypeVar {
        name: String,
        #[serde(default)]
        bound: Option<Expression>,
    },
    ParamSpec {
        name: String,
    },
    TypeVarTuple {
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeIgnore {
    #[serde(deserialize_with = "small")]
    pub lineno: u32,
    #[serde(default)]
    pub tag: String,
}
