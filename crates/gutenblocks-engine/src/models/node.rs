use serde::Serialize;

/// What a render node holds inside its element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NodeContent {
    /// Nothing between the tags (or a void element).
    Empty,
    /// A markup fragment injected verbatim, without escaping. Trust in
    /// these fragments is established upstream, not here.
    RawHtml(String),
    /// Plain text the consumer is expected to escape.
    Text(String),
    /// Ordered child nodes. An empty vec is still a rendered container.
    Children(Vec<RenderNode>),
}

/// The rendered representation of one content block, ready for a hosting
/// layer that supports keyed ordered children, inline styling, and
/// raw-markup injection.
///
/// `key` is the block's position among its input siblings. It exists only
/// so consumers can key their child lists; it carries no semantic meaning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderNode {
    pub key: usize,
    pub tag: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub style: Vec<(&'static str, String)>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(&'static str, String)>,
    pub content: NodeContent,
}

impl RenderNode {
    pub fn new(key: usize, tag: &'static str) -> Self {
        Self {
            key,
            tag,
            class: None,
            style: Vec::new(),
            attrs: Vec::new(),
            content: NodeContent::Empty,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.style.push((property, value.into()));
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn raw_html(mut self, html: impl Into<String>) -> Self {
        self.content = NodeContent::RawHtml(html.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = NodeContent::Text(text.into());
        self
    }

    pub fn children(mut self, nodes: Vec<RenderNode>) -> Self {
        self.content = NodeContent::Children(nodes);
        self
    }

    /// Child nodes, if this node is a container.
    pub fn child_nodes(&self) -> Option<&[RenderNode]> {
        match &self.content {
            NodeContent::Children(nodes) => Some(nodes),
            _ => None,
        }
    }
}
