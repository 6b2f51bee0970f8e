//! # onesheet
//!
//! Deterministic single-page PDF rendering of lightweight Markdown briefs.
//!
//! This library parses a small line-oriented markup dialect (headings,
//! paragraphs, bullet and numbered lists, and a 3-column screen table) and
//! lays the result onto exactly one PDF page, driven by an interchangeable
//! visual theme. If the content doesn't fit, the theme is uniformly shrunk
//! and layout retried a bounded number of times.
//!
//! ## Quick Start
//!
//! ```
//! use onesheet::{parse, render, FitOptions, Theme};
//!
//! fn main() -> onesheet::Result<()> {
//!     let doc = parse("# Demo\n*small but complete*\n## Idea\nOne page only.\n");
//!     let bytes = render(&doc, &Theme::minimal(), &FitOptions::default())?;
//!     assert!(bytes.starts_with(b"%PDF-1.4"));
//!     Ok(())
//! }
//! ```
//!
//! ## Properties
//!
//! - **Deterministic**: same markup + theme means byte-identical output
//! - **Self-contained**: base-14 Type1 fonts only, no font files, no network
//! - **Single page**: overflow triggers bounded uniform rescaling, never a
//!   second page
//! - **Permissive parsing**: malformed lines are dropped, never an error

pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod pdf;
pub mod render;
pub mod text;
pub mod theme;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Block, Document, Section};
pub use parser::MarkupParser;
pub use render::{render, render_many, FitOptions};
pub use theme::{Color, LayoutOptions, PageGeometry, Palette, Theme, TitleAlign, TypeScale};

/// Parse markup text into a structured document.
///
/// Parsing is permissive and never fails; see [`parser`] for the line
/// classification rules.
pub fn parse(markup: &str) -> Document {
    parser::parse(markup)
}

/// Parse markup and render it against a theme in one call.
pub fn render_markup(markup: &str, theme: &Theme) -> Result<Vec<u8>> {
    let doc = parse(markup);
    render(&doc, theme, &FitOptions::default())
}

/// Builder for rendering briefs with custom fit behavior.
///
/// # Example
///
/// ```
/// use onesheet::{Onesheet, Theme};
///
/// let bytes = Onesheet::new()
///     .with_theme(Theme::designed())
///     .with_shrink_factor(0.92)
///     .with_max_attempts(8)
///     .render_markup("# T\n## S\nhello\n")?;
/// # Ok::<(), onesheet::Error>(())
/// ```
pub struct Onesheet {
    theme: Theme,
    fit: FitOptions,
}

impl Onesheet {
    /// Create a builder with the minimal theme and default fit options.
    pub fn new() -> Self {
        Self {
            theme: Theme::minimal(),
            fit: FitOptions::default(),
        }
    }

    /// Select the theme to render with.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the per-retry shrink factor.
    pub fn with_shrink_factor(mut self, factor: f64) -> Self {
        self.fit = self.fit.with_shrink_factor(factor);
        self
    }

    /// Set the layout attempt bound.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.fit = self.fit.with_max_attempts(attempts);
        self
    }

    /// Parse markup and render it to PDF bytes.
    pub fn render_markup(&self, markup: &str) -> Result<Vec<u8>> {
        self.render(&parse(markup))
    }

    /// Render an already-parsed document to PDF bytes.
    pub fn render(&self, doc: &Document) -> Result<Vec<u8>> {
        render(doc, &self.theme, &self.fit)
    }
}

impl Default for Onesheet {
    fn default() -> Self {
        Self::new()
    }
}
