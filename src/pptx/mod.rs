//! PPTX writing and read-back.
//!
//! The writer side models a presentation as slides holding shapes (text
//! boxes and auto shapes) whose text is an append-only list of paragraphs
//! and runs. [`Presentation::save`] assembles the full presentationML
//! package and writes it as a ZIP archive. The reader side
//! ([`reader::open`]) re-opens a written package and reports its declared
//! geometry and content.

pub mod format;
pub mod package;
pub mod pres;
pub mod reader;
pub mod shape;
pub mod slide;
pub(crate) mod template;

// Re-export main types
pub use format::{Alignment, TextFormat};
pub use pres::Presentation;
pub use shape::{Autofit, Geometry, Paragraph, Run, Shape};
pub use slide::Slide;
