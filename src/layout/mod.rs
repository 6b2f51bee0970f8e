//! Single-page layout: document model + theme → drawing ops.

mod engine;

pub use engine::{lay_out, LayoutResult};
