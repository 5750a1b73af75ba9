//! Minimal hosting adapter: flattens a render-node tree to an HTML string.
//!
//! Plain text and attribute values are entity-escaped; raw markup content
//! passes through verbatim, exactly as the engine emitted it. No
//! sanitization happens here — trust in raw fragments is established
//! upstream of the engine.

use gutenblocks_engine::{NodeContent, RenderNode};

// Void elements the render tree can actually produce.
const VOID_TAGS: &[&str] = &["img", "hr", "br"];

/// Writes a sequence of sibling nodes.
pub fn write_html(nodes: &[RenderNode]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

/// Writes one node and its subtree.
pub fn write_node_html(node: &RenderNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node);
    out
}

fn write_node(out: &mut String, node: &RenderNode) {
    out.push('<');
    out.push_str(node.tag);

    if let Some(class) = &node.class {
        push_attr(out, "class", class);
    }
    for (name, value) in &node.attrs {
        push_attr(out, name, value);
    }
    if !node.style.is_empty() {
        let css = node
            .style
            .iter()
            .map(|(property, value)| format!("{property}:{value}"))
            .collect::<Vec<_>>()
            .join(";");
        push_attr(out, "style", &css);
    }

    if VOID_TAGS.contains(&node.tag) {
        out.push_str(" />");
        return;
    }
    out.push('>');

    match &node.content {
        NodeContent::Empty => {}
        NodeContent::RawHtml(html) => out.push_str(html),
        NodeContent::Text(text) => out.push_str(&html_escape::encode_text(text)),
        NodeContent::Children(children) => {
            for child in children {
                write_node(out, child);
            }
        }
    }

    out.push_str("</");
    out.push_str(node.tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    if value.is_empty() {
        return;
    }
    out.push_str("=\"");
    out.push_str(&html_escape::encode_double_quoted_attribute(value));
    out.push('"');
}
