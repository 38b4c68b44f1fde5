//! The generic container every projection builds

use serde::Serialize;

use super::registry::NodeId;
use super::tags::Tag;

/// What a node holds: either ordered children or a fixed piece of text.
/// Never both.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Content {
    Children(Vec<Node>),
    Text(String),
}

/// One element of the presentation tree. Children are owned, so a node can
/// only ever sit under one parent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<NodeId>,
    tags: Vec<Tag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operator: Option<&'static str>,
    #[serde(flatten)]
    content: Content,
}

impl Node {
    /// A childless container carrying the given tags.
    pub fn container(tags: &[Tag]) -> Node {
        Node {
            id: None,
            tags: dedup(tags),
            operator: None,
            content: Content::Children(Vec::new()),
        }
    }

    /// A leaf with fixed text. Empty text is allowed and still present.
    pub fn leaf(tags: &[Tag], text: impl Into<String>) -> Node {
        Node {
            id: None,
            tags: dedup(tags),
            operator: None,
            content: Content::Text(text.into()),
        }
    }

    /// Add a child at the end and hand it back for further nesting.
    ///
    /// # Panics
    ///
    /// Panics if this node is a text leaf. Leaves and containers are fixed
    /// when a node is made, so only nodes from [`Node::container`] accept
    /// children.
    pub fn append(&mut self, child: Node) -> &mut Node {
        match &mut self.content {
            Content::Children(children) => {
                let index = children.len();
                children.push(child);
                &mut children[index]
            }
            Content::Text(_) => {
                panic!("Cannot append a child to a text leaf");
            }
        }
    }

    /// Builder form of append(), for composing a node in one expression.
    pub fn with(mut self, child: Node) -> Node {
        self.append(child);
        self
    }

    /// Mark this node as standing for an operator. The symbol is data of the
    /// join point, not a child.
    pub fn with_operator(mut self, symbol: &'static str) -> Node {
        self.operator = Some(symbol);
        self
    }

    pub fn tag(&mut self, tag: Tag) {
        if !self
            .tags
            .contains(&tag)
        {
            self.tags
                .push(tag);
        }
    }

    pub(crate) fn identify(&mut self, id: NodeId) {
        self.id = Some(id);
    }

    pub fn id(&self) -> Option<NodeId> {
        self.id
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn has(&self, tag: Tag) -> bool {
        self.tags
            .contains(&tag)
    }

    pub fn operator(&self) -> Option<&'static str> {
        self.operator
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn children(&self) -> &[Node] {
        match &self.content {
            Content::Children(children) => children,
            Content::Text(_) => &[],
        }
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children()
            .get(index)
    }

    pub fn text(&self) -> Option<&str> {
        match &self.content {
            Content::Children(_) => None,
            Content::Text(text) => Some(text),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.content, Content::Text(_))
    }

    /// Every node of this subtree, depth first, parents before children.
    pub fn walk(&self) -> Vec<&Node> {
        let mut result = Vec::new();
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            result.push(node);
            for child in node
                .children()
                .iter()
                .rev()
            {
                pending.push(child);
            }
        }

        result
    }
}

fn dedup(tags: &[Tag]) -> Vec<Tag> {
    let mut result: Vec<Tag> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !result.contains(tag) {
            result.push(*tag);
        }
    }
    result
}
