//! Projection of syntax trees into presentation trees

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, info};

use crate::encoding::{Encoder, Layers};
use crate::language::Module;
use crate::presentation::{LookupError, Node, NodeId, Registry, Syntax, Tag};

mod branches;
mod errors;
mod expression;
mod statement;

// Re-export all public symbols
pub use branches::*;
pub use errors::*;

/// Knobs a host sets once per session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub layers: Layers,
}

/// Project a whole module. Every call starts a fresh identity registry, so
/// identifiers handed out for an earlier tree mean nothing to this one.
pub fn project_module<'i>(
    module: &'i Module,
    settings: &Settings,
) -> Result<Projection<'i>, ProjectionError> {
    let mut projector = Projector::new(settings);
    let root = projector.project_module(module)?;
    let projection = projector.finish(root);

    info!(
        "Projected module of {} statements into {} identified nodes",
        module
            .body
            .len(),
        projection.len()
    );

    Ok(projection)
}

/// The recursive builder. Each `project_*` method returns a finished subtree
/// that the caller appends where it belongs.
pub struct Projector<'i> {
    registry: Registry<'i>,
    encoder: Encoder,
}

impl<'i> Projector<'i> {
    pub fn new(settings: &Settings) -> Projector<'i> {
        Projector {
            registry: Registry::new(),
            encoder: Encoder::new(settings.layers),
        }
    }

    /// Attach the syntax node's identity to a freshly made presentation
    /// node, before any children are added to it.
    fn register(&mut self, syntax: Syntax<'i>, mut node: Node) -> Node {
        self.registry
            .register(syntax, &mut node);
        node
    }

    // the ubiquitous single-child row
    fn wrapped(tags: &[Tag], child: Node) -> Node {
        Node::container(tags).with(child)
    }

    /// Close the session, indexing every identified node of the finished
    /// tree.
    pub fn finish(self, root: Node) -> Projection<'i> {
        Projection::new(root, self.registry)
    }

    pub fn project_module(&mut self, module: &'i Module) -> Result<Node, ProjectionError> {
        if !module
            .type_ignores
            .is_empty()
        {
            return Err(self.reject("Module", Some("type ignores")));
        }

        let mut node = self.register(Syntax::Module(module), Node::container(&[Tag::Module]));

        for statement in &module.body {
            let child = match statement.as_docstring() {
                Some(text) => self.project_docstring(statement, text),
                None => self.project_statement(statement)?,
            };
            node.append(child);
        }

        debug!(
            "Module of {} statements projected",
            module
                .body
                .len()
        );
        Ok(node)
    }

    fn reject(&self, kind: &'static str, detail: Option<&'static str>) -> ProjectionError {
        debug!(kind, detail, "Rejecting unsupported construct");
        ProjectionError::UnsupportedConstruct { kind, detail }
    }
}

/// A finished projection: the root the host mounts, and the identity links
/// between it and the syntax tree it came from.
pub struct Projection<'i> {
    root: Node,
    registry: Registry<'i>,
    paths: HashMap<NodeId, Vec<usize>>,
}

impl<'i> Projection<'i> {
    fn new(root: Node, registry: Registry<'i>) -> Projection<'i> {
        let mut paths = HashMap::new();
        let mut pending: Vec<(&Node, Vec<usize>)> = vec![(&root, Vec::new())];

        while let Some((node, path)) = pending.pop() {
            if let Some(id) = node.id() {
                let previous = paths.insert(id, path.clone());
                debug_assert!(previous.is_none(), "identifier {} appears twice", id);
            }
            for (index, child) in node
                .children()
                .iter()
                .enumerate()
            {
                let mut path = path.clone();
                path.push(index);
                pending.push((child, path));
            }
        }

        debug_assert_eq!(
            paths.len(),
            registry.len(),
            "every registered identifier must be on exactly one node"
        );

        Projection {
            root,
            registry,
            paths,
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn lookup_syntax(&self, id: NodeId) -> Result<Syntax<'i>, LookupError> {
        self.registry
            .lookup_syntax(id)
    }

    pub fn lookup_presentation(&self, id: NodeId) -> Result<&Node, LookupError> {
        let path = self
            .paths
            .get(&id)
            .ok_or(LookupError::NotFound(id))?;

        let mut node = &self.root;
        for index in path {
            node = node
                .child(*index)
                .ok_or(LookupError::NotFound(id))?;
        }
        Ok(node)
    }

    /// The identifier a syntax node was given in this projection, if any.
    pub fn identify(&self, syntax: Syntax<'i>) -> Option<NodeId> {
        self.registry
            .identify(syntax)
    }

    /// Number of identified nodes.
    pub fn len(&self) -> usize {
        self.paths
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths
            .is_empty()
    }
}
