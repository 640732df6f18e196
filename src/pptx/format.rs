//! Formatting attributes for text runs and paragraphs.

use crate::common::RgbColor;

/// Typography attributes applied to a text run.
///
/// Unset fields inherit from the slide master's defaults.
#[derive(Debug, Clone, Default)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Text color
    pub color: Option<RgbColor>,
}

impl TextFormat {
    /// Create an empty format that inherits everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set font family.
    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    /// Builder method: set font size in points.
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Builder method: set italic.
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Builder method: set text color.
    pub fn color(mut self, color: RgbColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Inherit the default (left for the styles this crate emits)
    #[default]
    Left,
    /// Centered
    Center,
}

impl Alignment {
    /// The `algn` attribute value, if one must be written.
    pub(crate) fn as_attr(self) -> Option<&'static str> {
        match self {
            Self::Left => None,
            Self::Center => Some("ctr"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let fmt = TextFormat::new()
            .font("Segoe UI")
            .size(18.0)
            .bold(true)
            .color(RgbColor::new(0x22, 0x22, 0x22));
        assert_eq!(fmt.font.as_deref(), Some("Segoe UI"));
        assert_eq!(fmt.size, Some(18.0));
        assert_eq!(fmt.bold, Some(true));
        assert_eq!(fmt.italic, None);
    }

    #[test]
    fn test_alignment_attr() {
        assert_eq!(Alignment::Left.as_attr(), None);
        assert_eq!(Alignment::Center.as_attr(), Some("ctr"));
    }
}
