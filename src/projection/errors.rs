use thiserror::Error;

/// Why a projection failed. Either way the whole projection call fails; no
/// partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// The input uses a construct, or a variant of one, that the engine does
    /// not display yet. Expected, and reportable as "not yet supported".
    #[error("{kind} is not supported yet{}", suffix(.detail))]
    UnsupportedConstruct {
        kind: &'static str,
        detail: Option<&'static str>,
    },

    /// The tree breaks an assumption about its shape. Points at the parser
    /// or at a grammar change, never at the user's code.
    #[error("malformed syntax tree: {0}")]
    MalformedInput(Malformed),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("the final else branch of a conditional chain starts with an if statement")]
    Chain,
    #[error("expected an if statement, found {0}")]
    NotConditional(&'static str),
    #[error("{keys} dictionary keys for {values} values")]
    DictMismatch { keys: usize, values: usize },
    #[error("{operators} comparison operators for {comparators} comparators")]
    CompareMismatch {
        operators: usize,
        comparators: usize,
    },
    #[error("{defaults} default values for {parameters} parameters")]
    DefaultsMismatch { defaults: usize, parameters: usize },
    #[error("an f-string piece is a {0}, expected a formatted value or a string")]
    JoinedStrPiece(&'static str),
    #[error("unknown conversion code {0} in a formatted value")]
    Conversion(i32),
    #[error("a capture pattern with a sub-pattern has no name")]
    AnonymousCapture,
}

impl ProjectionError {
    pub fn unsupported(kind: &'static str) -> ProjectionError {
        ProjectionError::UnsupportedConstruct { kind, detail: None }
    }

    pub fn unsupported_with(kind: &'static str, detail: &'static str) -> ProjectionError {
        ProjectionError::UnsupportedConstruct {
            kind,
            detail: Some(detail),
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, ProjectionError::UnsupportedConstruct { .. })
    }
}

impl From<Malformed> for ProjectionError {
    fn from(malformed: Malformed) -> Self {
        ProjectionError::MalformedInput(malformed)
    }
}

fn suffix(detail: &Option<&'static str>) -> String {
    match detail {
        Some(detail) => format!(" ({})", detail),
        None => String::new(),
    }
}
