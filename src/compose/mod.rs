//! Section composition.
//!
//! This module arranges structured slide content (badged panels of bulleted
//! sections and rows of badged columns) on a slide using the grid
//! allocator. The literal content is data supplied by the caller; the
//! functions here only compute geometry and append shapes.

pub mod composer;
pub mod content;
pub mod theme;

// Re-export main types
pub use composer::{
    compose_key_insights, render_badge, render_column_row, render_divider, render_outline,
};
pub use content::{Column, Panel, Section, SlideContent};
pub use theme::Theme;
