//! Vocabulary of layout tags attached to presentation nodes

use serde::{Serialize, Serializer};

/// Semantic tags a host turns into styling. Tags never carry structure: a
/// host must not look nodes up by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    // layout
    Row,
    Gap,
    Block,
    Module,
    Empty,
    EmptyLine,

    // enclosures
    Parens,
    Brackets,
    Braces,
    Quotes,

    // separators between children
    CommaSep,
    ColonSep,
    EqualSep,
    DotSep,
    InSep,
    AsSep,
    PipeSep,
    AndSep,
    OrSep,
    ReturnTypeArrowSep,

    // suffixes
    ColonSuffix,

    // keyword and sigil prefixes
    IfPrefix,
    ElifPrefix,
    ElsePrefix,
    ForPrefix,
    WhilePrefix,
    WithPrefix,
    MatchPrefix,
    CasePrefix,
    DefPrefix,
    ClassPrefix,
    ReturnPrefix,
    DelPrefix,
    RaisePrefix,
    AssertPrefix,
    ImportPrefix,
    FromPrefix,
    GlobalPrefix,
    NonlocalPrefix,
    YieldPrefix,
    YieldFromPrefix,
    StarPrefix,
    DoubleStarPrefix,
    FPrefix,

    // what a node is
    Symbol,
    Literal,
    String,
    Number,
    Boolean,
    None,
    Keyword,
    Operation,
    Unary,
    Compare,
    Comparator,
    Ternary,
    Call,
    Attribute,
    Subscript,
    Slice,
    Comprehension,
    Formatted,
    StrConversion,
    ReprConversion,
    AsciiConversion,
    Fragment,
    Docstring,
    Line,
    FunctionDef,
    ClassDef,
    Assign,
    AugAssign,
    Expression,
    If,
    For,
    While,
    With,
    Match,
    Case,
    Import,
    ImportFrom,
    Aliases,
    Alias,
    NamedAlias,
    UnnamedAlias,
    Parameter,
}

impl Tag {
    /// The class name a host uses for this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Row => "row",
            Tag::Gap => "gap",
            Tag::Block => "block",
            Tag::Module => "module",
            Tag::Empty => "empty",
            Tag::EmptyLine => "empty-line",
            Tag::Parens => "parens",
            Tag::Brackets => "brackets",
            Tag::Braces => "braces",
            Tag::Quotes => "quotes",
            Tag::CommaSep => "comma-sep",
            Tag::ColonSep => "colon-sep",
            Tag::EqualSep => "equal-sep",
            Tag::DotSep => "dot-sep",
            Tag::InSep => "in-sep",
            Tag::AsSep => "as-sep",
            Tag::PipeSep => "pipe-sep",
            Tag::AndSep => "and-sep",
            Tag::OrSep => "or-sep",
            Tag::ReturnTypeArrowSep => "return-type-arrow-sep",
            Tag::ColonSuffix => "colon-suffix",
            Tag::IfPrefix => "if-prefix",
            Tag::ElifPrefix => "elif-prefix",
            Tag::ElsePrefix => "else-prefix",
            Tag::ForPrefix => "for-prefix",
            Tag::WhilePrefix => "while-prefix",
            Tag::WithPrefix => "with-prefix",
            Tag::MatchPrefix => "match-prefix",
            Tag::CasePrefix => "case-prefix",
            Tag::DefPrefix => "def-prefix",
            Tag::ClassPrefix => "class-prefix",
            Tag::ReturnPrefix => "return-prefix",
            Tag::DelPrefix => "del-prefix",
            Tag::RaisePrefix => "raise-prefix",
            Tag::AssertPrefix => "assert-prefix",
            Tag::ImportPrefix => "import-prefix",
            Tag::FromPrefix => "from-prefix",
            Tag::GlobalPrefix => "global-prefix",
            Tag::NonlocalPrefix => "nonlocal-prefix",
            Tag::YieldPrefix => "yield-prefix",
            Tag::YieldFromPrefix => "yield-from-prefix",
            Tag::StarPrefix => "star-prefix",
            Tag::DoubleStarPrefix => "double-star-prefix",
            Tag::FPrefix => "f-prefix",
            Tag::Symbol => "symbol",
            Tag::Literal => "literal",
            Tag::String => "string",
            Tag::Number => "number",
            Tag::Boolean => "boolean",
            Tag::None => "none",
            Tag::Keyword => "keyword",
            Tag::Operation => "operation",
            Tag::Unary => "unary",
            Tag::Compare => "compare",
            Tag::Comparator => "comparator",
            Tag::Ternary => "ternary",
            Tag::Call => "call",
            Tag::Attribute => "attribute",
            Tag::Subscript => "subscript",
            Tag::Slice => "slice",
            Tag::Comprehension => "comprehension",
            Tag::Formatted => "formatted",
            Tag::StrConversion => "str-conversion",
            Tag::ReprConversion => "repr-conversion",
            Tag::AsciiConversion => "ascii-conversion",
            Tag::Fragment => "fragment",
            Tag::Docstring => "docstring",
            Tag::Line => "line",
            Tag::FunctionDef => "funcdef",
            Tag::ClassDef => "classdef",
            Tag::Assign => "assign",
            Tag::AugAssign => "augassign",
            Tag::Expression => "expression",
            Tag::If => "if",
            Tag::For => "for",
            Tag::While => "while",
            Tag::With => "with",
            Tag::Match => "match",
            Tag::Case => "case",
            Tag::Import => "import",
            Tag::ImportFrom => "importfrom",
            Tag::Aliases => "aliases",
            Tag::Alias => "alias",
            Tag::NamedAlias => "named-alias",
            Tag::UnnamedAlias => "unnamed-alias",
            Tag::Parameter => "parameter",
        }
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
