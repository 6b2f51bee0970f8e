//! Content block types.

use serde::{Deserialize, Serialize};

/// A single content block within a section.
///
/// The set is closed so the layout engine's dispatch is exhaustive: adding
/// a new block kind forces every renderer to handle it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "text", rename_all = "snake_case")]
pub enum Block {
    /// A plain paragraph of running text
    Paragraph(String),

    /// A bulleted list item (marker stripped)
    Bullet(String),

    /// A numbered list item, pre-formatted with its literal ordinal
    /// (e.g. `"3. ship it"`)
    Numbered(String),

    /// One UI screen summary, flattened from a 3-column table row into
    /// `"<screen> - <description> (<vibe>)"`
    ScreenItem(String),
}

impl Block {
    /// The block's text content, regardless of kind.
    pub fn text(&self) -> &str {
        match self {
            Block::Paragraph(t) | Block::Bullet(t) | Block::Numbered(t) | Block::ScreenItem(t) => t,
        }
    }

    /// Check if this is a screen-summary item.
    pub fn is_screen_item(&self) -> bool {
        matches!(self, Block::ScreenItem(_))
    }
}
