//! Palette and typography of the composed deck.

use crate::common::RgbColor;
use crate::pptx::format::TextFormat;

pub const PASTEL_BLUE: RgbColor = RgbColor::new(0xA7, 0xD3, 0xF1);
pub const PASTEL_GREEN: RgbColor = RgbColor::new(0xBF, 0xE7, 0xC6);
pub const TEXT_DARK: RgbColor = RgbColor::new(0x22, 0x22, 0x22);
pub const LINE_LIGHT: RgbColor = RgbColor::new(0xCC, 0xCC, 0xCC);

/// Typography and palette settings shared by all composition routines.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Font family for every run
    pub font: String,
    /// Body text color
    pub text_color: RgbColor,
    /// Divider fill color
    pub divider_color: RgbColor,
    /// Section title size in points
    pub title_size: f64,
    /// Section sub-item size in points
    pub sub_item_size: f64,
    /// Bottom-column item size in points
    pub column_item_size: f64,
    /// Badge label size in points
    pub badge_size: f64,
    /// Spacing after a section title in points
    pub title_space_after: f64,
    /// Spacing after a sub-item or column item in points
    pub item_space_after: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font: "Segoe UI".to_string(),
            text_color: TEXT_DARK,
            divider_color: LINE_LIGHT,
            title_size: 18.0,
            sub_item_size: 14.0,
            column_item_size: 16.0,
            badge_size: 18.0,
            title_space_after: 4.0,
            item_space_after: 2.0,
        }
    }
}

impl Theme {
    /// Format for a section title run.
    pub fn title_format(&self) -> TextFormat {
        self.base_format().size(self.title_size).bold(true)
    }

    /// Format for a section sub-item run.
    pub fn sub_item_format(&self) -> TextFormat {
        self.base_format().size(self.sub_item_size)
    }

    /// Format for a bottom-column item run.
    pub fn column_item_format(&self) -> TextFormat {
        self.base_format().size(self.column_item_size)
    }

    /// Format for a badge label run.
    pub fn badge_format(&self) -> TextFormat {
        self.base_format().size(self.badge_size).bold(true)
    }

    fn base_format(&self) -> TextFormat {
        TextFormat::new().font(&self.font).color(self.text_color)
    }
}
