//! Static HTML page of a presentation tree.
//!
//! One `<div>` per node: tags become CSS classes, identifiers become `id`
//! attributes and operators a `data-operator` attribute. A host script can
//! turn a click on any element back into a syntax node by handing the
//! nearest `id` to the projection's lookup.

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::debug;

use crate::presentation::Node;

static TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{stylesheet | unescaped}
</style>
</head>
<body>
{body | unescaped}
</body>
</html>
"#;

static STYLESHEET: &str = r#"
div { display: inline-flex; align-items: baseline; }
.block, .module, .docstring { display: flex; flex-direction: column; }
.block { padding-left: 2em; }
.gap { gap: 0.4em; }
.line { white-space: pre; }
.parens::before { content: "("; } .parens::after { content: ")"; }
.brackets::before { content: "["; } .brackets::after { content: "]"; }
.braces::before { content: "{"; } .braces::after { content: "}"; }
.quotes::before, .quotes::after { content: "\""; }
.colon-suffix::after { content: ":"; }
.comma-sep > :not(:last-child)::after { content: ","; }
.colon-sep > :not(:last-child)::after { content: ":"; }
.dot-sep > :not(:last-child)::after { content: "."; }
.equal-sep > :not(:last-child)::after { content: "="; }
.if-prefix::before { content: "if"; }
.elif-prefix::before { content: "elif"; }
.else-prefix::before { content: "else"; }
.for-prefix::before { content: "for"; }
.while-prefix::before { content: "while"; }
.with-prefix::before { content: "with"; }
.def-prefix::before { content: "def "; }
.class-prefix::before { content: "class"; }
.return-prefix::before { content: "return"; }
.import-prefix::before { content: "import"; }
.from-prefix::before { content: "from"; }
.star-prefix::before { content: "*"; }
.double-star-prefix::before { content: "**"; }
.f-prefix::before { content: "f"; }
.symbol { color: #3465a4; }
.literal { color: #4e9a06; }
.keyword { color: #75507b; font-weight: bold; }
"#;

#[derive(Serialize)]
struct Context<'a> {
    title: &'a str,
    stylesheet: &'a str,
    body: String,
}

/// A complete page around the tree.
pub fn page(root: &Node, title: &str) -> Result<String, tinytemplate::error::Error> {
    let mut tt = TinyTemplate::new();
    tt.add_template("page", TEMPLATE)?;

    let context = Context {
        title,
        stylesheet: STYLESHEET,
        body: markup(root),
    };

    let rendered = tt.render("page", &context)?;
    debug!("Rendered page of {} bytes", rendered.len());
    Ok(rendered)
}

/// The nested `<div>` markup for a tree, without a surrounding page.
pub fn markup(root: &Node) -> String {
    let mut output = String::new();
    append_node(&mut output, root);
    output
}

fn append_node(output: &mut String, node: &Node) {
    output.push_str("<div");

    let classes: Vec<&str> = node
        .tags()
        .iter()
        .map(|tag| tag.as_str())
        .collect();
    if !classes.is_empty() {
        output.push_str(" class=\"");
        output.push_str(&classes.join(" "));
        output.push('"');
    }
    if let Some(id) = node.id() {
        output.push_str(&format!(" id=\"{}\"", id));
    }
    if let Some(symbol) = node.operator() {
        output.push_str(" data-operator=\"");
        output.push_str(&escape(symbol));
        output.push('"');
    }
    output.push('>');

    match node.text() {
        Some(text) => output.push_str(&escape(text)),
        None => {
            for child in node.children() {
                append_node(output, child);
            }
        }
    }

    output.push_str("</div>");
}

fn escape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}
