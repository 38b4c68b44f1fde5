//! Identity registry linking syntax nodes to the presentation nodes built
//! for them.
//!
//! A registry is one projection session: identifiers start at 1, increase
//! strictly and are never reused while it is alive. Projecting again means
//! starting a new registry, so identifiers from an earlier tree can never
//! resolve against a later one.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::trace;

use super::node::Node;
use crate::language::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no node registered under identifier {0}")]
    NotFound(NodeId),
}

/// A borrowed reference to any kind of syntax node that can be projected.
/// Equality is identity: two values are equal only if they point at the
/// very same node.
#[derive(Debug, Clone, Copy)]
pub enum Syntax<'i> {
    Module(&'i Module),
    Statement(&'i Statement),
    Expression(&'i Expression),
    Arg(&'i Arg),
    Keyword(&'i Keyword),
    Alias(&'i Alias),
    WithItem(&'i WithItem),
    MatchCase(&'i MatchCase),
    Pattern(&'i Pattern),
    Comprehension(&'i Comprehension),
}

impl<'i> Syntax<'i> {
    /// The grammar name of the referenced node.
    pub fn kind(&self) -> &'static str {
        match self {
            Syntax::Module(_) => "Module",
            Syntax::Statement(statement) => statement.kind(),
            Syntax::Expression(expression) => expression.kind(),
            Syntax::Arg(_) => "arg",
            Syntax::Keyword(_) => "keyword",
            Syntax::Alias(_) => "alias",
            Syntax::WithItem(_) => "withitem",
            Syntax::MatchCase(_) => "match_case",
            Syntax::Pattern(pattern) => pattern.kind(),
            Syntax::Comprehension(_) => "comprehension",
        }
    }

    // Nested nodes can share an address with their container (a struct and
    // its first field), so identity is the category plus the address.
    fn key(&self) -> (u8, usize) {
        match self {
            Syntax::Module(node) => (0, *node as *const Module as usize),
            Syntax::Statement(node) => (1, *node as *const Statement as usize),
            Syntax::Expression(node) => (2, *node as *const Expression as usize),
            Syntax::Arg(node) => (3, *node as *const Arg as usize),
            Syntax::Keyword(node) => (4, *node as *const Keyword as usize),
            Syntax::Alias(node) => (5, *node as *const Alias as usize),
            Syntax::WithItem(node) => (6, *node as *const WithItem as usize),
            Syntax::MatchCase(node) => (7, *node as *const MatchCase as usize),
            Syntax::Pattern(node) => (8, *node as *const Pattern as usize),
            Syntax::Comprehension(node) => (9, *node as *const Comprehension as usize),
        }
    }
}

impl PartialEq for Syntax<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Syntax<'_> {}

pub struct Registry<'i> {
    counter: u64,
    nodes: HashMap<NodeId, Syntax<'i>>,
    identities: HashMap<(u8, usize), NodeId>,
}

impl<'i> Registry<'i> {
    pub fn new() -> Registry<'i> {
        Registry {
            counter: 0,
            nodes: HashMap::new(),
            identities: HashMap::new(),
        }
    }

    /// Issue the next identifier of this session.
    pub fn allocate(&mut self) -> NodeId {
        self.counter += 1;
        NodeId(self.counter)
    }

    /// Link a syntax node with the presentation node built for it: allocate
    /// an identifier, stamp it on the presentation node and index both
    /// directions.
    pub fn register(&mut self, syntax: Syntax<'i>, node: &mut Node) -> NodeId {
        let id = self.allocate();
        trace!(%id, kind = syntax.kind(), "register");

        node.identify(id);
        self.nodes
            .insert(id, syntax);
        self.identities
            .insert(syntax.key(), id);
        id
    }

    pub fn lookup_syntax(&self, id: NodeId) -> Result<Syntax<'i>, LookupError> {
        self.nodes
            .get(&id)
            .copied()
            .ok_or(LookupError::NotFound(id))
    }

    /// The identifier attached to a syntax node, if it has been projected in
    /// this session.
    pub fn identify(&self, syntax: Syntax<'i>) -> Option<NodeId> {
        self.identities
            .get(&syntax.key())
            .copied()
    }

    pub fn len(&self) -> usize {
        self.nodes
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes
            .is_empty()
    }
}

impl Default for Registry<'_> {
    fn default() -> Self {
        Registry::new()
    }
}
