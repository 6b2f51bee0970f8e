//! Document-level types.

use super::Block;
use serde::{Deserialize, Serialize};

/// A parsed brief document.
///
/// Produced once by the parser and read-only thereafter; the layout engine
/// never mutates it, which is what makes rendering the same document against
/// several themes in parallel safe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document title, taken from the first `# ` line (empty if absent)
    pub title: String,

    /// Optional tagline, taken from the first emphasis-wrapped line
    /// before any section
    pub tagline: Option<String>,

    /// Sections in source order
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            tagline: None,
            sections: Vec::new(),
        }
    }

    /// Get the number of sections in the document.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Check if the document holds no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        let mut parts = Vec::new();
        if !self.title.is_empty() {
            parts.push(self.title.clone());
        }
        if let Some(ref tagline) = self.tagline {
            parts.push(tagline.clone());
        }
        for section in &self.sections {
            parts.push(section.plain_text());
        }
        parts.join("\n\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A named section holding an ordered run of content blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Section heading (remainder of the `## ` line)
    pub heading: String,

    /// Content blocks in source order
    pub blocks: Vec<Block>,
}

impl Section {
    /// Create a new section with an empty block list.
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            blocks: Vec::new(),
        }
    }

    /// Append a block, preserving source order.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// The screen-summary items in this section, in order.
    pub fn screen_items(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::ScreenItem(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Get plain text of the section (heading plus block texts).
    pub fn plain_text(&self) -> String {
        let mut out = self.heading.clone();
        for block in &self.blocks {
            out.push('\n');
            out.push_str(block.text());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.section_count(), 0);
        assert!(doc.title.is_empty());
        assert!(doc.tagline.is_none());
    }

    #[test]
    fn test_section_order_preserved() {
        let mut sec = Section::new("Flow");
        sec.add_block(Block::Bullet("first".to_string()));
        sec.add_block(Block::Paragraph("second".to_string()));
        sec.add_block(Block::Numbered("1. third".to_string()));

        let texts: Vec<_> = sec.blocks.iter().map(|b| b.text()).collect();
        assert_eq!(texts, vec!["first", "second", "1. third"]);
    }

    #[test]
    fn test_screen_items_filter() {
        let mut sec = Section::new("Screens");
        sec.add_block(Block::Paragraph("intro".to_string()));
        sec.add_block(Block::ScreenItem("home - landing (calm)".to_string()));
        sec.add_block(Block::ScreenItem("voting - rating (playful)".to_string()));

        assert_eq!(
            sec.screen_items(),
            vec!["home - landing (calm)", "voting - rating (playful)"]
        );
    }

    #[test]
    fn test_plain_text() {
        let mut doc = Document::new();
        doc.title = "Brief".to_string();
        doc.tagline = Some("small but mighty".to_string());
        let mut sec = Section::new("Idea");
        sec.add_block(Block::Paragraph("one page only".to_string()));
        doc.add_section(sec);

        let text = doc.plain_text();
        assert!(text.contains("Brief"));
        assert!(text.contains("small but mighty"));
        assert!(text.contains("one page only"));
    }
}
