use crate::models::{AttrValue, Block};
use regex::Regex;
use std::sync::OnceLock;

/// Image attributes after the fallback chain has run.
///
/// Serialized image blocks are not guaranteed to carry structured
/// attributes; older content often has the data only inside the markup
/// fragment. Each field therefore resolves from `attrs` first and falls
/// back to extracting from `inner_html` where documented.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedImage {
    pub url: String,
    pub alt: String,
    pub width: Option<String>,
    pub height: Option<String>,
    pub caption: Option<String>,
    pub class: String,
}

fn src_regex() -> &'static Regex {
    static SRC_REGEX: OnceLock<Regex> = OnceLock::new();
    SRC_REGEX.get_or_init(|| Regex::new(r#"<img[^>]+src="([^"]+)""#).expect("invalid src regex"))
}

fn alt_regex() -> &'static Regex {
    static ALT_REGEX: OnceLock<Regex> = OnceLock::new();
    ALT_REGEX.get_or_init(|| Regex::new(r#"<img[^>]+alt="([^"]*)""#).expect("invalid alt regex"))
}

fn first_capture(re: &Regex, markup: &str) -> Option<String> {
    re.captures(markup).map(|caps| caps[1].to_string())
}

/// Runs the image fallback chain. Returns `None` when no source URL can
/// be resolved from either attributes or markup; the block then renders
/// nothing, with no placeholder.
pub fn resolve(block: &Block) -> Option<ResolvedImage> {
    let url = block
        .str_attr("url")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| first_capture(src_regex(), &block.inner_html))?;

    let alt = block
        .str_attr("alt")
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| first_capture(alt_regex(), &block.inner_html))
        .unwrap_or_default();

    // Width and height pass through only as string or number; anything
    // else stays unset rather than getting a default.
    let width = block.attr("width").and_then(AttrValue::as_size);
    let height = block.attr("height").and_then(AttrValue::as_size);

    let caption = block
        .attr("caption")
        .filter(|v| v.is_truthy())
        .map(AttrValue::to_text);

    let mut class = String::from("rounded-lg");
    if let Some(align) = block.str_attr("align") {
        if align == "center" {
            class.push_str(" mx-auto");
        } else {
            class.push_str(" mx-");
            class.push_str(align);
        }
    }
    if let Some(extra) = block.str_attr("className").filter(|s| !s.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }

    Some(ResolvedImage {
        url,
        alt,
        width,
        height,
        caption,
        class,
    })
}
