//! Deckforge - programmatic slide composition and PPTX generation
//!
//! This library builds fixed-layout presentation slides from structured
//! content and serializes them as Office Open XML (.pptx) packages.
//!
//! # Features
//!
//! - **Grid allocation**: Pure region arithmetic in EMUs (margins, column
//!   splitting with gaps) that fails fast on degenerate geometry
//! - **Styled text**: Append-only paragraphs and runs with indent levels,
//!   per-level spacing, and typography attributes
//! - **Shapes**: Text boxes, filled rectangles, and rounded-rectangle badges
//! - **Package writer**: Emits a minimal valid presentationML package as a
//!   ZIP archive
//! - **Read-back**: Inspect a written deck (slide size, shape counts, text)
//!
//! # Example - Composing and saving a deck
//!
//! ```no_run
//! use deckforge::compose::{self, Column, Panel, Section, SlideContent, Theme};
//! use deckforge::compose::theme::{PASTEL_BLUE, PASTEL_GREEN};
//! use deckforge::pptx::Presentation;
//!
//! # fn main() -> deckforge::Result<()> {
//! let content = SlideContent {
//!     left: Panel::new("Strengths", PASTEL_GREEN)
//!         .section(Section::new("Fast").sub_item("Benchmarks beat baseline")),
//!     right: Panel::new("Limitations", PASTEL_BLUE)
//!         .section(Section::new("Data hungry")),
//!     bottom: vec![Column::new("Takeaway", PASTEL_BLUE).item("Ship it")],
//! };
//!
//! let mut pres = Presentation::new();
//! compose::compose_key_insights(&mut pres, &content, &Theme::default())?;
//! pres.save("summary.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Inspecting a written deck
//!
//! ```no_run
//! # fn main() -> deckforge::Result<()> {
//! let summary = deckforge::pptx::reader::open("summary.pptx")?;
//! println!("{} x {} EMU", summary.slide_width, summary.slide_height);
//! for slide in &summary.slides {
//!     println!("{} shapes", slide.shape_count);
//! }
//! # Ok(())
//! # }
//! ```

/// Shared primitives: errors, colors, unit conversion, XML escaping.
pub mod common;

/// Section composition: themes, content records, and the layout routines
/// that arrange badges, outlines, and column rows on a slide.
pub mod compose;

/// Canvas/grid allocation: rectangular regions in EMUs and the column
/// splitting arithmetic.
pub mod layout;

/// PPTX writing and read-back: the shape/paragraph model, part templates,
/// package assembly, and deck inspection.
pub mod pptx;

// Re-export the unified error type for convenience
pub use common::{Error, Result};
