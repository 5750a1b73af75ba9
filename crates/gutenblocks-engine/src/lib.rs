pub mod models;
pub mod render;

// Re-export key types for easier usage
pub use models::{AttrValue, Block, NodeContent, RenderNode};
pub use render::{
    BlockKind, EmbedProvider, EmbedWidget, PrivacyIframe, RenderOptions, render_blocks,
    render_blocks_with, render_document,
};
