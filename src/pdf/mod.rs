//! Minimal PDF container assembly.
//!
//! One page, three base-14 Type1 fonts, one content stream. No compression,
//! no metadata, no timestamps: the same content stream always assembles to
//! the same bytes.

mod content;
mod writer;

pub use content::{encode_stream, escape_string, Font, Op};
pub use writer::PdfWriter;

/// Encode text to Latin-1, replacing unmappable characters with `?`.
///
/// The sanitizer keeps body text ASCII-safe, but pass-through characters
/// outside the charmap (accented letters, say) still have to land in a
/// single byte each.
pub fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if (c as u32) <= 0xFF { c as u8 } else { b'?' })
        .collect()
}

/// Assemble a complete single-page PDF around an encoded content stream.
///
/// Object order is fixed: catalog, page tree, page, the three font
/// descriptors, then the content stream. The page dictionary references
/// them by those positions, so the order is an invariant, not a choice.
pub fn assemble_document(stream: &[u8], page_width: f64, page_height: f64) -> Vec<u8> {
    let mut pdf = PdfWriter::new();

    let catalog = pdf.add_object(b"<< /Type /Catalog /Pages 2 0 R >>".to_vec());
    debug_assert_eq!(catalog, 1);

    let pages = pdf.add_object(b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_vec());
    debug_assert_eq!(pages, 2);

    let page = pdf.add_object(
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {page_width:.0} {page_height:.0}] \
             /Resources << /Font << /F1 4 0 R /F2 5 0 R /F3 6 0 R >> >> \
             /Contents 7 0 R >>"
        )
        .into_bytes(),
    );
    debug_assert_eq!(page, 3);

    for font in [Font::Body, Font::Bold, Font::Mono] {
        pdf.add_object(
            format!(
                "<< /Type /Font /Subtype /Type1 /BaseFont /{} >>",
                font.base_font()
            )
            .into_bytes(),
        );
    }

    let mut content = format!("<< /Length {} >>\nstream\n", stream.len()).into_bytes();
    content.extend_from_slice(stream);
    content.extend_from_slice(b"endstream");
    let content_id = pdf.add_object(content);
    debug_assert_eq!(content_id, 7);

    pdf.finish()
}
