//! Line-oriented markup parsing.

mod markup;

pub use markup::{parse, MarkupParser};
