//! Views of a presentation tree for looking at projections outside a host

mod html;
mod outline;
mod terminal;

// Re-export all public symbols
pub use html::*;
pub use outline::*;
pub use terminal::*;

/// The parts of a node that a renderer may embellish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    Neutral, // default
    Tags,
    Identifier,
    Operator,
    Text,
}

/// Trait for different rendering backends (the no-op no-markup one, ANSI
/// escapes for terminal colouring)
pub trait Render {
    /// Render content with the specified type/style
    fn style(&self, element: Element, content: &str) -> String;
}

/// Returns content unchanged, with no markup applied
pub struct Identity;

impl Render for Identity {
    fn style(&self, _element: Element, content: &str) -> String {
        content.to_string()
    }
}
