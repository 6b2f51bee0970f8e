//! Text processing: sanitization, approximate metrics, and word wrapping.
//!
//! Everything downstream of the parser goes through this module. The width
//! model is an approximation tuned for the base-14 Helvetica faces, not a
//! real metrics table; what matters is that it is stable and self-consistent
//! so wrapping and layout are deterministic.

mod metrics;
mod sanitize;
mod wrap;

pub use metrics::estimate_width;
pub use sanitize::sanitize;
pub use wrap::wrap_words;
