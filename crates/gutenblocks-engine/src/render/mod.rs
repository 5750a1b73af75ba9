pub mod embed;
pub mod image;
pub mod kind;

pub use embed::{EmbedProvider, EmbedWidget, PrivacyIframe};
pub use kind::BlockKind;

use crate::models::{AttrValue, Block, RenderNode};

/// Knobs for a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Blocks nested deeper than this render nothing. Bounds stack usage
    /// against adversarially deep input.
    pub max_depth: usize,
    /// Display height handed to the embed widget.
    pub embed_height: u32,
    /// Player parameter string handed to the embed widget.
    pub embed_params: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: 64,
            embed_height: 400,
            embed_params: "rel=0".to_string(),
        }
    }
}

/// Renders a block tree with default options and the stock embed widget.
pub fn render_blocks(blocks: &[Block]) -> Vec<RenderNode> {
    render_blocks_with(blocks, &RenderOptions::default(), &PrivacyIframe)
}

/// Renders a block tree. Pure: same input, same output, no shared state.
///
/// Sibling output order matches input order; blocks that resolve to empty
/// content are skipped without leaving gaps. Never fails — malformed input
/// degrades to omission, a documented default, or verbatim markup.
pub fn render_blocks_with(
    blocks: &[Block],
    options: &RenderOptions,
    widget: &dyn EmbedWidget,
) -> Vec<RenderNode> {
    compose(blocks, 0, options, widget)
}

/// Renders a whole document: the block tree inside the standard content
/// wrapper.
pub fn render_document(blocks: &[Block]) -> RenderNode {
    RenderNode::new(0, "div")
        .class("gutenberg-content")
        .children(render_blocks(blocks))
}

fn compose(
    blocks: &[Block],
    depth: usize,
    options: &RenderOptions,
    widget: &dyn EmbedWidget,
) -> Vec<RenderNode> {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(index, block)| render_block(block, index, depth, options, widget))
        .collect()
}

fn render_block(
    block: &Block,
    index: usize,
    depth: usize,
    options: &RenderOptions,
    widget: &dyn EmbedWidget,
) -> Option<RenderNode> {
    if depth > options.max_depth {
        return None;
    }

    let Some(tag) = block.block_name.as_deref() else {
        // Plain markup leaf.
        if block.inner_html.is_empty() {
            return None;
        }
        return Some(
            RenderNode::new(index, "div")
                .class("prose-content")
                .raw_html(block.inner_html.clone()),
        );
    };

    match BlockKind::from_tag(tag) {
        BlockKind::Paragraph => {
            let mut class = String::from("mb-4 text-gray-700 leading-relaxed");
            if let Some(align) = block.str_attr("align") {
                class.push_str(" text-");
                class.push_str(align);
            }
            Some(
                RenderNode::new(index, "p")
                    .class(class)
                    .raw_html(block.inner_html.clone()),
            )
        }

        BlockKind::Heading => {
            let level = heading_level(block);
            Some(
                RenderNode::new(index, heading_tag(level))
                    .class(heading_class(level))
                    .raw_html(block.inner_html.clone()),
            )
        }

        BlockKind::List => {
            let ordered = block.attr("ordered").is_some_and(AttrValue::is_truthy);
            let (tag, class) = if ordered {
                ("ol", "list-decimal list-inside mb-4 space-y-2 text-gray-700")
            } else {
                ("ul", "list-disc list-inside mb-4 space-y-2 text-gray-700")
            };
            Some(
                RenderNode::new(index, tag)
                    .class(class)
                    .raw_html(block.inner_html.clone()),
            )
        }

        BlockKind::Quote => Some(
            RenderNode::new(index, "blockquote")
                .class("border-l-4 border-primary-500 pl-4 py-2 mb-4 italic text-gray-700 bg-gray-50")
                .raw_html(block.inner_html.clone()),
        ),

        BlockKind::Code => Some(
            RenderNode::new(index, "pre")
                .class("bg-gray-900 text-gray-100 p-4 rounded-lg mb-4 overflow-x-auto")
                .children(vec![
                    RenderNode::new(0, "code").raw_html(block.inner_html.clone()),
                ]),
        ),

        BlockKind::Preformatted => Some(
            RenderNode::new(index, "pre")
                .class("bg-gray-100 text-gray-800 p-4 rounded-lg mb-4 overflow-x-auto whitespace-pre-wrap")
                .raw_html(block.inner_html.clone()),
        ),

        BlockKind::Image => {
            let img = image::resolve(block)?;
            let mut element = RenderNode::new(0, "img")
                .class(img.class)
                .attr("src", img.url)
                .attr("alt", img.alt);
            if let Some(width) = img.width {
                element = element.attr("width", width);
            }
            if let Some(height) = img.height {
                element = element.attr("height", height);
            }
            let mut parts = vec![element];
            if let Some(caption) = img.caption {
                parts.push(figcaption(1, caption));
            }
            Some(RenderNode::new(index, "figure").class("mb-6").children(parts))
        }

        BlockKind::Video => {
            // Structured attributes only; no markup fallback, unlike image.
            let mut video = RenderNode::new(0, "video")
                .class("w-full rounded-lg")
                .attr("controls", "");
            if let Some(src) = block.str_attr("src") {
                video = video.attr("src", src);
            }
            if let Some(poster) = block.str_attr("poster") {
                video = video.attr("poster", poster);
            }
            let mut parts = vec![video];
            if let Some(caption) = block.attr("caption").filter(|v| v.is_truthy()) {
                parts.push(figcaption(1, caption.to_text()));
            }
            Some(RenderNode::new(index, "figure").class("mb-6").children(parts))
        }

        BlockKind::Separator => Some(
            RenderNode::new(index, "hr").class("my-8 border-t border-gray-300"),
        ),

        BlockKind::Spacer => {
            // The only block type with a forced default instead of
            // omit-if-absent.
            let height = block
                .attr("height")
                .and_then(AttrValue::as_css_size)
                .unwrap_or_else(|| "50px".to_string());
            Some(
                RenderNode::new(index, "div")
                    .class("block")
                    .style("height", height),
            )
        }

        BlockKind::Table => Some(
            RenderNode::new(index, "div")
                .class("overflow-x-auto mb-6")
                .children(vec![
                    RenderNode::new(0, "table")
                        .class("min-w-full divide-y divide-gray-200 border border-gray-200")
                        .children(vec![
                            RenderNode::new(0, "tbody")
                                .class("bg-white divide-y divide-gray-200")
                                .raw_html(block.inner_html.clone()),
                        ]),
                ]),
        ),

        BlockKind::Button => Some(
            RenderNode::new(index, "div")
                .class("inline-block")
                .raw_html(block.inner_html.clone()),
        ),

        BlockKind::Buttons => Some(container(
            block,
            index,
            "flex flex-wrap gap-3 mb-4",
            depth,
            options,
            widget,
        )),

        BlockKind::Columns => Some(container(
            block,
            index,
            "grid md:grid-cols-2 gap-6 mb-6",
            depth,
            options,
            widget,
        )),

        BlockKind::Column => Some(container(
            block,
            index,
            "flex flex-col",
            depth,
            options,
            widget,
        )),

        BlockKind::Group => Some(container(block, index, "mb-4", depth, options, widget)),

        BlockKind::Embed => match embed::classify(&block.inner_html) {
            EmbedProvider::YouTube { id } => {
                let player = widget.embed(&id, options.embed_height, &options.embed_params);
                Some(
                    RenderNode::new(index, "div")
                        .class("aspect-video mb-6 max-w-4xl")
                        .children(vec![player]),
                )
            }
            EmbedProvider::Unsupported => Some(
                RenderNode::new(index, "div")
                    .class("aspect-video mb-6")
                    .children(vec![
                        RenderNode::new(0, "div").raw_html(block.inner_html.clone()),
                    ]),
            ),
        },

        BlockKind::Unknown => {
            if !block.inner_html.is_empty() {
                Some(
                    RenderNode::new(index, "div")
                        .class("mb-4")
                        .raw_html(block.inner_html.clone()),
                )
            } else if !block.inner_blocks.is_empty() {
                Some(container(block, index, "mb-4", depth, options, widget))
            } else {
                None
            }
        }
    }
}

/// Composes a container block: children rendered in order, empty results
/// dropped. An empty result set still produces the container wrapper.
fn container(
    block: &Block,
    index: usize,
    class: &str,
    depth: usize,
    options: &RenderOptions,
    widget: &dyn EmbedWidget,
) -> RenderNode {
    RenderNode::new(index, "div")
        .class(class)
        .children(compose(&block.inner_blocks, depth + 1, options, widget))
}

fn figcaption(key: usize, text: String) -> RenderNode {
    RenderNode::new(key, "figcaption")
        .class("text-sm text-gray-600 mt-2 text-center")
        .text(text)
}

/// Level attribute mapped to one of the six tiers; anything missing,
/// wrong-typed, or out of range falls back to 2. Never fails.
fn heading_level(block: &Block) -> u8 {
    match block.attr("level") {
        Some(AttrValue::Num(n)) if n.fract() == 0.0 && (1.0..=6.0).contains(n) => *n as u8,
        _ => 2,
    }
}

fn heading_tag(level: u8) -> &'static str {
    match level {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    }
}

fn heading_class(level: u8) -> &'static str {
    match level {
        1 => "text-4xl font-bold text-gray-900 mb-6 mt-8",
        2 => "text-3xl font-bold text-gray-900 mb-5 mt-7",
        3 => "text-2xl font-semibold text-gray-900 mb-4 mt-6",
        4 => "text-xl font-semibold text-gray-800 mb-3 mt-5",
        5 => "text-lg font-semibold text-gray-800 mb-2 mt-4",
        _ => "text-base font-semibold text-gray-800 mb-2 mt-3",
    }
}
