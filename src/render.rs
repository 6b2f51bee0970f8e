//! Rendering orchestration: shrink-to-fit retries and PDF assembly.

use log::debug;
use rayon::prelude::*;

use crate::error::Result;
use crate::layout::{lay_out, LayoutResult};
use crate::model::Document;
use crate::pdf;
use crate::theme::Theme;

/// Policy for the bounded shrink-to-fit loop.
#[derive(Debug, Clone, Copy)]
pub struct FitOptions {
    /// Uniform factor applied to the theme's type sizes and gaps per retry
    pub shrink_factor: f64,

    /// Maximum number of layout attempts, the first included
    pub max_attempts: u32,
}

impl FitOptions {
    /// Create fit options with defaults (shrink 0.94, six attempts).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shrink factor.
    pub fn with_shrink_factor(mut self, factor: f64) -> Self {
        self.shrink_factor = factor;
        self
    }

    /// Set the attempt bound.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            shrink_factor: 0.94,
            max_attempts: 6,
        }
    }
}

/// Render a document against a theme into complete PDF bytes.
///
/// Runs layout with the base theme; on overflow, derives a uniformly
/// rescaled copy and retries, up to the attempt bound. Exhausting the bound
/// accepts the last attempt's output — overflow past the bound is tolerated,
/// never an error.
pub fn render(doc: &Document, theme: &Theme, options: &FitOptions) -> Result<Vec<u8>> {
    theme.validate()?;

    let margin = theme.page.margin;
    let mut current = theme.clone();
    let mut result = lay_out(doc, &current);

    let mut attempt = 1;
    while result.overflows(margin) && attempt < options.max_attempts {
        debug!(
            "layout attempt {attempt} overflowed (cursor {:.1} < margin {margin:.1}), \
             shrinking by {:.2}",
            result.cursor, options.shrink_factor
        );
        current = current.scaled(options.shrink_factor);
        result = lay_out(doc, &current);
        attempt += 1;
    }
    if result.overflows(margin) {
        debug!("still overflowing after {attempt} attempts; accepting last layout");
    }

    Ok(assemble(&result, &current))
}

/// Render one document against several themes in parallel.
///
/// Each (document, theme) pair is an independent pure computation over
/// read-only inputs, so the pairs are fanned out across the Rayon pool.
/// Output order matches theme order.
pub fn render_many(doc: &Document, themes: &[Theme], options: &FitOptions) -> Result<Vec<Vec<u8>>> {
    themes
        .par_iter()
        .map(|theme| render(doc, theme, options))
        .collect()
}

fn assemble(result: &LayoutResult, theme: &Theme) -> Vec<u8> {
    let stream = pdf::encode_stream(&result.ops);
    let bytes = pdf::encode_latin1(&stream);
    let out = pdf::assemble_document(&bytes, theme.page.width, theme.page.height);
    debug!("assembled {} byte PDF ({} ops)", out.len(), result.ops.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Section};
    use crate::parser;

    fn short_doc() -> Document {
        parser::parse("# T\n*tag*\n## One\nA single paragraph.\n")
    }

    fn long_doc() -> Document {
        let mut doc = short_doc();
        let mut section = Section::new("Everything else");
        for i in 0..150 {
            section.add_block(Block::Paragraph(format!(
                "paragraph {i} that carries enough words to occupy a full wrapped line or two"
            )));
        }
        doc.add_section(section);
        doc
    }

    #[test]
    fn test_render_deterministic() {
        let doc = short_doc();
        let theme = Theme::minimal();
        let options = FitOptions::default();
        let a = render(&doc, &theme, &options).unwrap();
        let b = render(&doc, &theme, &options).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_rejects_invalid_theme() {
        let mut theme = Theme::minimal();
        theme.type_scale.leading = -1.0;
        assert!(render(&short_doc(), &theme, &FitOptions::default()).is_err());
    }

    #[test]
    fn test_overflowing_document_still_renders() {
        let doc = long_doc();
        let bytes = render(&doc, &Theme::minimal(), &FitOptions::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4\n"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_shrinking_reduces_overflow() {
        let doc = long_doc();
        let theme = Theme::minimal();
        let base = crate::layout::lay_out(&doc, &theme);
        let shrunk = crate::layout::lay_out(&doc, &theme.scaled(0.94f64.powi(5)));
        assert!(shrunk.cursor > base.cursor);
    }

    #[test]
    fn test_single_attempt_bound_respected() {
        let doc = long_doc();
        let theme = Theme::minimal();
        let one = FitOptions::new().with_max_attempts(1);
        let six = FitOptions::default();
        // One attempt keeps the base type scale; six attempts shrink it, so
        // the outputs differ.
        let a = render(&doc, &theme, &one).unwrap();
        let b = render(&doc, &theme, &six).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_render_many_matches_sequential() {
        let doc = short_doc();
        let themes = [Theme::minimal(), Theme::designed()];
        let options = FitOptions::default();

        let parallel = render_many(&doc, &themes, &options).unwrap();
        assert_eq!(parallel.len(), 2);
        for (theme, bytes) in themes.iter().zip(&parallel) {
            let sequential = render(&doc, theme, &options).unwrap();
            assert_eq!(&sequential, bytes);
        }
        // Different themes produce different documents.
        assert_ne!(parallel[0], parallel[1]);
    }
}
