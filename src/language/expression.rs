//! Expression kinds of the Python abstract grammar

use serde::Deserialize;
use serde_json::Number;

use super::numbers::small;
use super::operators::*;
use super::statement::Arguments;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "_type")]
pub enum Expression {
    BoolOp {
        op: BooleanOperator,
        values: Vec<Expression>,
    },
    NamedExpr {
        target: Box<Expression>,
        value: Box<Expression>,
    },
    BinOp {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expression>,
    },
    Lambda {
        args: Box<Arguments>,
        body: Box<Expression>,
    },
    IfExp {
        test: Box<Expression>,
        body: Box<Expression>,
        orelse: Box<Expression>,
    },
    Dict {
        // a missing key is `**mapping` unpacking
        keys: Vec<Option<Expression>>,
        values: Vec<Expression>,
    },
    Set {
        elts: Vec<Expression>,
    },
    ListComp {
        elt: Box<Expression>,
        generators: Vec<Comprehension>,
    },
    SetComp {
        elt: Box<Expression>,
        generators: Vec<Comprehension>,
    },
    DictComp {
        key: Box<Expression>,
        value: Box<Expression>,
        generators: Vec<Comprehension>,
    },
    GeneratorExp {
        elt: Box<Expression>,
        generators: Vec<Comprehension>,
    },
    Await {
        value: Box<Expression>,
    },
    Yield {
        #[serde(default)]
        value: Option<Box<Expression>>,
    },
    YieldFrom {
        value: Box<Expression>,
    },
    // `a < b < c` is one node: a left operand, then k operators against k
    // comparators.
    Compare {
        left: Box<Expression>,
        ops: Vec<ComparisonOperator>,
        comparators: Vec<Expression>,
    },
    Call {
        func: Box<Expression>,
        #[serde(default)]
        args: Vec<Expression>,
        #[serde(default)]
        keywords: Vec<Keyword>,
    },
    FormattedValue {
        value: Box<Expression>,
        #[serde(default = "unspecified", deserialize_with = "small")]
        conversion: i32,
        #[serde(default)]
        format_spec: Option<Box<Expression>>,
    },
    JoinedStr {
        values: Vec<Expression>,
    },
    Constant {
        value: Literal,
        #[serde(default)]
        kind: Option<String>,
    },
    Attribute {
        value: Box<Expression>,
        attr: String,
    },
    Subscript {
        value: Box<Expression>,
        slice: Box<Expression>,
    },
    Starred {
        value: Box<Expression>,
    },
    Name {
        id: String,
    },
    List {
        elts: Vec<Expression>,
    },
    Tuple {
        elts: Vec<Expression>,
    },
    Slice {
        #[serde(default)]
        lower: Option<Box<Expression>>,
        #[serde(default)]
        upper: Option<Box<Expression>>,
        #[serde(default)]
        step: Option<Box<Expression>>,
    },
}

fn unspecified() -> i32 {
    -1
}

impl Expression {
    /// The grammar name of this node's kind, as reported in errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::BoolOp { .. } => "BoolOp",
            Expression::NamedExpr { .. } => "NamedExpr",
            Expression::BinOp { .. } => "BinOp",
            Expression::UnaryOp { .. } => "UnaryOp",
            Expression::Lambda { .. } => "Lambda",
            Expression::IfExp { .. } => "IfExp",
            Expression::Dict { .. } => "Dict",
            Expression::Set { .. } => "Set",
            Expression::ListComp { .. } => "ListComp",
            Expression::SetComp { .. } => "SetComp",
            Expression::DictComp { .. } => "DictComp",
            Expression::GeneratorExp { .. } => "GeneratorExp",
            Expression::Await { .. } => "Await",
            Expression::Yield { .. } => "Yield",
            Expression::YieldFrom { .. } => "YieldFrom",
            Expression::Compare { .. } => "Compare",
            Expression::Call { .. } => "Call",
            Expression::FormattedValue { .. } => "FormattedValue",
            Expression::JoinedStr { .. } => "JoinedStr",
            Expression::Constant { .. } => "Constant",
            Expression::Attribute { .. } => "Attribute",
            Expression::Subscript { .. } => "Subscript",
            Expression::Starred { .. } => "Starred",
            Expression::Name { .. } => "Name",
            Expression::List { .. } => "List",
            Expression::Tuple { .. } => "Tuple",
            Expression::Slice { .. } => "Slice",
        }
    }

    /// Shorthand used heavily when assembling trees by hand.
    pub fn name(id: &str) -> Expression {
        Expression::Name { id: id.to_string() }
    }

    pub fn constant(value: Literal) -> Expression {
        Expression::Constant { value, kind: None }
    }

    /// Is this a plain string constant (the shape of a docstring)? Prefixed
    /// strings are not plain.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Expression::Constant {
                value: Literal::String(text),
                kind: None,
            } => Some(text),
            _ => None,
        }
    }
}

/// Primitive values carried by constants. JSON `null` is Python's `None`.
/// Integers keep the digits they were written with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Scalar")]
pub enum Literal {
    None,
    Bool(bool),
    Integer(String),
    Float(f64),
    String(String),
}

impl Literal {
    pub fn integer(digits: impl Into<String>) -> Literal {
        Literal::Integer(digits.into())
    }
}

// the JSON shape, before numbers are told apart
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    None,
    Bool(bool),
    Number(Number),
    String(String),
}

impl From<Scalar> for Literal {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::None => Literal::None,
            Scalar::Bool(value) => Literal::Bool(value),
            Scalar::Number(number) => match number.as_f64() {
                Some(value) if number.is_f64() => Literal::Float(value),
                _ => Literal::Integer(number.to_string()),
            },
            Scalar::String(text) => Literal::String(text),
        }
    }
}

/// A `name=value` argument; `arg` is absent for `**mapping`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Keyword {
    #[serde(default)]
    pub arg: Option<String>,
    pub value: Expression,
}

/// One `for target in iter if ...` clause of a comprehension.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comprehension {
    pub target: Expression,
    pub iter: Expression,
    #[serde(default)]
    pub ifs: Vec<Expression>,
    #[serde(default, deserialize_with = "small")]
    pub is_async: u8,
}
