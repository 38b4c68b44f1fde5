//! Indented dump of a presentation tree, one node per line.
//!
//! Each line shows the node's tags as a class selector, then its identifier,
//! its operator, and for leaves the text it carries:
//!
//! ```text
//! .operation.row.gap #3 +
//!   .row.gap
//!     .symbol #4 a
//! ```

use crate::presentation::Node;

use super::{Element, Render};

/// We render in two passes. First the tree is flattened into lines of
/// (depth, fragments); then the renderer styles each fragment.
pub fn outline(root: &Node, renderer: &impl Render) -> String {
    let mut output = String::new();

    for (depth, fragments) in flatten(root) {
        for _ in 0..depth {
            output.push_str("  ");
        }
        for (index, (element, content)) in fragments
            .iter()
            .enumerate()
        {
            if index > 0 {
                output.push(' ');
            }
            output.push_str(&renderer.style(*element, content));
        }
        output.push('\n');
    }

    output
}

fn flatten(root: &Node) -> Vec<(usize, Vec<(Element, String)>)> {
    let mut lines = Vec::new();
    let mut pending = vec![(root, 0)];

    while let Some((node, depth)) = pending.pop() {
        lines.push((depth, describe(node)));
        for child in node
            .children()
            .iter()
            .rev()
        {
            pending.push((child, depth + 1));
        }
    }

    lines
}

fn describe(node: &Node) -> Vec<(Element, String)> {
    let mut fragments = Vec::new();

    let selector: String = node
        .tags()
        .iter()
        .map(|tag| format!(".{}", tag.as_str()))
        .collect();
    if selector.is_empty() {
        fragments.push((Element::Tags, "*".to_string()));
    } else {
        fragments.push((Element::Tags, selector));
    }

    if let Some(id) = node.id() {
        fragments.push((Element::Identifier, format!("#{}", id)));
    }
    if let Some(symbol) = node.operator() {
        fragments.push((Element::Operator, symbol.to_string()));
    }
    if let Some(text) = node.text() {
        if !text.is_empty() {
            fragments.push((Element::Text, text.to_string()));
        }
    }

    fragments
}
