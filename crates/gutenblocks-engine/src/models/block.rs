use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scalar attribute value as it appears in serialized block content.
///
/// Attribute sets are defined per block type, not globally, so every
/// consumer asks narrow questions ("string or not", "usable as a size or
/// not") via the helpers below. A wrong-typed value answers the same way
/// an absent one does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Str(String),
    Num(f64),
    Bool(bool),
    Null,
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// String or number, rendered as a plain length (`"120"`, `"40%"`).
    pub fn as_size(&self) -> Option<String> {
        match self {
            AttrValue::Str(s) => Some(s.clone()),
            AttrValue::Num(n) => Some(format_number(*n)),
            _ => None,
        }
    }

    /// String or number, rendered as a CSS length. Bare numbers mean
    /// pixels in the originating editor, so they get a `px` suffix.
    pub fn as_css_size(&self) -> Option<String> {
        match self {
            AttrValue::Str(s) => Some(s.clone()),
            AttrValue::Num(n) => Some(format!("{}px", format_number(*n))),
            _ => None,
        }
    }

    /// Truthiness as the originating editor's scripting runtime defines it:
    /// non-empty string, non-zero number, `true`.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Str(s) => !s.is_empty(),
            AttrValue::Num(n) => *n != 0.0,
            AttrValue::Bool(b) => *b,
            AttrValue::Null => false,
        }
    }

    /// Display text for values that passed a truthiness check.
    pub fn to_text(&self) -> String {
        match self {
            AttrValue::Str(s) => s.clone(),
            AttrValue::Num(n) => format_number(*n),
            AttrValue::Bool(b) => b.to_string(),
            AttrValue::Null => String::new(),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

/// One node of the structured content tree emitted by a block editor's
/// serializer, in the standard wire shape (`blockName`, `attrs`,
/// `innerBlocks`, `innerHTML`, `innerContent`).
///
/// The tree is produced upstream and read-only here. A block with no
/// `block_name` is a plain markup leaf carrying only `inner_html`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Block {
    /// Type tag selecting the rendering strategy; `None` for plain markup.
    pub block_name: Option<String>,
    /// Type-tag-specific scalar attributes; keys are not guaranteed present.
    pub attrs: BTreeMap<String, AttrValue>,
    /// Ordered nested blocks (recursive).
    pub inner_blocks: Vec<Block>,
    /// Markup fragment embedded verbatim when the strategy calls for it.
    #[serde(rename = "innerHTML")]
    pub inner_html: String,
    /// Accompanying raw fragments; carried through, never transformed.
    pub inner_content: Vec<Option<String>>,
}

impl Block {
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    pub fn str_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).and_then(AttrValue::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserializes_wire_format() {
        let block: Block = serde_json::from_value(json!({
            "blockName": "core/heading",
            "attrs": { "level": 3 },
            "innerBlocks": [],
            "innerHTML": "<h3>Title</h3>",
            "innerContent": ["<h3>Title</h3>"]
        }))
        .unwrap();

        assert_eq!(block.block_name.as_deref(), Some("core/heading"));
        assert_eq!(block.attr("level"), Some(&AttrValue::Num(3.0)));
        assert_eq!(block.inner_html, "<h3>Title</h3>");
        assert_eq!(block.inner_content, vec![Some("<h3>Title</h3>".to_string())]);
    }

    #[test]
    fn missing_fields_default() {
        let block: Block = serde_json::from_value(json!({
            "blockName": null,
            "innerHTML": "<p>loose</p>"
        }))
        .unwrap();

        assert_eq!(block.block_name, None);
        assert!(block.attrs.is_empty());
        assert!(block.inner_blocks.is_empty());
    }

    #[test]
    fn attr_scalars_deserialize_untagged() {
        let block: Block = serde_json::from_value(json!({
            "blockName": "core/image",
            "attrs": { "url": "a.jpg", "width": 640, "sizeSlug": null, "linked": false }
        }))
        .unwrap();

        assert_eq!(block.attr("url"), Some(&AttrValue::Str("a.jpg".into())));
        assert_eq!(block.attr("width"), Some(&AttrValue::Num(640.0)));
        assert_eq!(block.attr("sizeSlug"), Some(&AttrValue::Null));
        assert_eq!(block.attr("linked"), Some(&AttrValue::Bool(false)));
    }

    #[test]
    fn size_helpers_reject_wrong_types() {
        assert_eq!(AttrValue::Bool(true).as_size(), None);
        assert_eq!(AttrValue::Null.as_css_size(), None);
        assert_eq!(AttrValue::Num(120.0).as_css_size(), Some("120px".into()));
        assert_eq!(AttrValue::Str("4rem".into()).as_css_size(), Some("4rem".into()));
        assert_eq!(AttrValue::Num(640.0).as_size(), Some("640".into()));
    }

    #[test]
    fn truthiness_follows_scripting_rules() {
        assert!(AttrValue::Str("x".into()).is_truthy());
        assert!(!AttrValue::Str(String::new()).is_truthy());
        assert!(AttrValue::Num(1.5).is_truthy());
        assert!(!AttrValue::Num(0.0).is_truthy());
        assert!(!AttrValue::Bool(false).is_truthy());
        assert!(!AttrValue::Null.is_truthy());
    }
}
