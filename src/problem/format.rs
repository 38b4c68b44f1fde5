use owo_colors::OwoColorize;
use std::path::Path;
use untext::{loading::LoadingError, projection::ProjectionError};

use super::messages::generate_error_message;

/// Format a projection error with the explanation that goes with it
pub fn full_projection_error(error: &ProjectionError, filename: &Path) -> String {
    let (problem, details) = generate_error_message(error);

    format!(
        r#"
{}: {}: {}

{}
        "#,
        "error".bright_red(),
        filename.to_string_lossy(),
        problem.bold(),
        details
    )
    .trim_ascii()
    .to_string()
}

/// Format a projection error with concise single-line output
pub fn concise_projection_error(error: &ProjectionError, filename: &Path) -> String {
    let (problem, _) = generate_error_message(error);

    format!(
        "{}: {}: {}",
        "error".bright_red(),
        filename.to_string_lossy(),
        problem.bold(),
    )
}

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    )
}

/// Format a LoadingError with the underlying cause
pub fn full_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}\n\n{}",
        concise_loading_error(error),
        error.details
    )
}
