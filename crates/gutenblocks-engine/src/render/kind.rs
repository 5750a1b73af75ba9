/// The closed set of recognized block type tags, plus the default entry
/// every unrecognized tag routes to.
///
/// `core/group` and `core/block` render identically and share a variant,
/// as do `core/embed` and its named provider aliases (provider handling
/// happens after dispatch, see [`crate::render::embed`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading,
    List,
    Quote,
    Code,
    Preformatted,
    Image,
    Video,
    Separator,
    Spacer,
    Table,
    Buttons,
    Button,
    Columns,
    Column,
    Group,
    Embed,
    Unknown,
}

impl BlockKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "core/paragraph" => Self::Paragraph,
            "core/heading" => Self::Heading,
            "core/list" => Self::List,
            "core/quote" => Self::Quote,
            "core/code" => Self::Code,
            "core/preformatted" => Self::Preformatted,
            "core/image" => Self::Image,
            "core/video" => Self::Video,
            "core/separator" => Self::Separator,
            "core/spacer" => Self::Spacer,
            "core/table" => Self::Table,
            "core/buttons" => Self::Buttons,
            "core/button" => Self::Button,
            "core/columns" => Self::Columns,
            "core/column" => Self::Column,
            "core/group" | "core/block" => Self::Group,
            "core/embed" | "core-embed/youtube" | "core-embed/vimeo" => Self::Embed,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_tags_map_exactly() {
        assert_eq!(BlockKind::from_tag("core/paragraph"), BlockKind::Paragraph);
        assert_eq!(BlockKind::from_tag("core/heading"), BlockKind::Heading);
        assert_eq!(BlockKind::from_tag("core/spacer"), BlockKind::Spacer);
        assert_eq!(BlockKind::from_tag("core/columns"), BlockKind::Columns);
        assert_eq!(BlockKind::from_tag("core/column"), BlockKind::Column);
    }

    #[test]
    fn group_and_block_share_a_strategy() {
        assert_eq!(BlockKind::from_tag("core/group"), BlockKind::Group);
        assert_eq!(BlockKind::from_tag("core/block"), BlockKind::Group);
    }

    #[test]
    fn provider_aliases_dispatch_to_embed() {
        assert_eq!(BlockKind::from_tag("core/embed"), BlockKind::Embed);
        assert_eq!(BlockKind::from_tag("core-embed/youtube"), BlockKind::Embed);
        assert_eq!(BlockKind::from_tag("core-embed/vimeo"), BlockKind::Embed);
    }

    #[test]
    fn dispatch_is_exact_match() {
        assert_eq!(BlockKind::from_tag("core/Paragraph"), BlockKind::Unknown);
        assert_eq!(BlockKind::from_tag("core/paragraph "), BlockKind::Unknown);
        assert_eq!(BlockKind::from_tag("acme/timeline"), BlockKind::Unknown);
        assert_eq!(BlockKind::from_tag(""), BlockKind::Unknown);
    }
}
