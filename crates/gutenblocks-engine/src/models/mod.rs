pub mod block;
pub mod node;

pub use block::{AttrValue, Block};
pub use node::{NodeContent, RenderNode};
