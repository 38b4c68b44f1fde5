//! Presentation trees: generic taggable containers that a host mounts and
//! lets the user click on.

mod node;
pub mod registry;
mod tags;

// Re-export all public symbols
pub use node::*;
pub use registry::{LookupError, NodeId, Registry, Syntax};
pub use tags::*;
