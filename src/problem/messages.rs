use untext::projection::{Malformed, ProjectionError};

/// Generate problem and detail messages for projection errors
pub fn generate_error_message(error: &ProjectionError) -> (String, String) {
    match error {
        ProjectionError::UnsupportedConstruct { kind, detail } => {
            let problem = match detail {
                Some(detail) => format!("{} ({}) not yet supported", kind, detail),
                None => format!("{} not yet supported", kind),
            };
            (
                problem,
                r#"
The code uses a construct that cannot be displayed structurally yet. Nothing
is wrong with the program itself; the region containing it has to be shown
by other means until support for it is added.
                "#
                .trim_ascii()
                .to_string(),
            )
        }
        ProjectionError::MalformedInput(malformed) => {
            let details = match malformed {
                Malformed::Chain => r#"
A conditional chain ends in an else branch whose first statement is an if
statement followed by further statements. That is valid Python, but the
conditional layout here only knows if, elif and plain else branches, so the
shape is rejected on purpose instead of being displayed some other way.
                "#
                .trim_ascii()
                .to_string(),
                _ => r#"
The syntax tree breaks an assumption about its shape. This points at the
parser that produced it, or at a grammar version this program does not know,
not at the code being displayed.
                "#
                .trim_ascii()
                .to_string(),
            };
            (format!("Malformed syntax tree: {}", malformed), details)
        }
    }
}
