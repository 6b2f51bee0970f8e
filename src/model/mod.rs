//! Document model types for parsed brief content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! markup parsing and page layout. The model is theme-agnostic: it records
//! structure and text only, never geometry.

mod block;
mod document;

pub use block::Block;
pub use document::{Document, Section};
