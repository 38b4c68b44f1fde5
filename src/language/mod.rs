// Types representing the abstract syntax of Python source, as handed over by
// an external parser.

mod expression;
mod numbers;
mod operators;
mod statement;

// Re-export all public symbols
pub use expression::*;
pub use operators::*;
pub use statement::*;
