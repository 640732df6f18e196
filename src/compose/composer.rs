//! Layout routines that place badges, outlines, and column rows.
//!
//! All routines are free functions mutating the slide they are given, so
//! callers keep ownership of the presentation throughout the single
//! composition pass. Geometry comes from the fixed deck layout below;
//! content comes from the caller's [`SlideContent`].

use crate::common::unit::inches_to_emu;
use crate::common::{Result, RgbColor};
use crate::compose::content::{Column, Section, SlideContent};
use crate::compose::theme::Theme;
use crate::layout::Rect;
use crate::pptx::format::Alignment;
use crate::pptx::pres::Presentation;
use crate::pptx::shape::Geometry;
use crate::pptx::slide::Slide;
use log::debug;

/// Slide width in inches (16:9).
const SLIDE_WIDTH_IN: f64 = 13.333;
/// Slide height in inches.
const SLIDE_HEIGHT_IN: f64 = 7.5;
/// Horizontal page margin.
const MARGIN_IN: f64 = 0.5;
/// Top edge of the panel badges.
const BADGE_TOP_IN: f64 = 0.3;
/// Badge height, panels and bottom row alike.
const BADGE_HEIGHT_IN: f64 = 0.5;
/// Top edge of the panel outlines.
const CONTENT_TOP_IN: f64 = 0.9;
/// Height of the panel outlines.
const COLUMN_HEIGHT_IN: f64 = 4.6;
/// Gap between the two panels.
const COLUMN_GAP_IN: f64 = 0.4;
/// Vertical clearance above and below the divider.
const DIVIDER_CLEARANCE_IN: f64 = 0.2;
/// Divider thickness.
const DIVIDER_HEIGHT_IN: f64 = 0.02;
/// Bottom page margin under the column row.
const BOTTOM_MARGIN_IN: f64 = 0.4;
/// Gap between bottom-row columns.
const COLUMN_ROW_GAP_IN: f64 = 0.25;
/// Strip reserved for a column's badge before its items start.
const BADGE_STRIP_IN: f64 = 0.6;

/// Draw a badge: a filled rounded rectangle spanning `frame` with one
/// centered bold label run. Calling twice appends two overlapping shapes.
pub fn render_badge(slide: &mut Slide, frame: Rect, label: &str, fill: RgbColor, theme: &Theme) {
    let badge = slide.add_auto_shape(Geometry::RoundedRectangle, frame, Some(fill));
    badge
        .add_paragraph()
        .align(Alignment::Center)
        .add_run(label, theme.badge_format());
}

/// Render a titled outline into one text box at `region`.
///
/// Each section contributes a top-level bulleted title paragraph followed
/// by one nested paragraph per sub-item, all in input order.
pub fn render_outline(slide: &mut Slide, region: Rect, sections: &[Section], theme: &Theme) {
    debug!("outlining {} section(s)", sections.len());
    let text_box = slide.add_text_box(region);
    for section in sections {
        text_box
            .add_paragraph()
            .space_after(theme.title_space_after)
            .bullet('•')
            .add_run(&section.title, theme.title_format());
        for sub_item in &section.sub_items {
            text_box
                .add_paragraph()
                .level(1)
                .space_after(theme.item_space_after)
                .bullet('•')
                .add_run(sub_item, theme.sub_item_format());
        }
    }
}

/// Render a row of equal-width columns into `region`.
///
/// The region is split with a fixed gap; each column gets its badge in the
/// top strip and its items, prefixed with a bullet glyph, in a text box
/// below.
pub fn render_column_row(
    slide: &mut Slide,
    region: Rect,
    columns: &[Column],
    theme: &Theme,
) -> Result<()> {
    let cells = region.split_columns(columns.len(), inches_to_emu(COLUMN_ROW_GAP_IN))?;
    let badge_height = inches_to_emu(BADGE_HEIGHT_IN);
    let badge_strip = inches_to_emu(BADGE_STRIP_IN);

    for (cell, column) in cells.iter().zip(columns) {
        render_badge(
            slide,
            Rect::new(cell.x, cell.y, cell.w, badge_height),
            &column.badge_label,
            column.badge_fill,
            theme,
        );

        let items_frame = cell.inset(0, badge_strip, 0, 0)?;
        let text_box = slide.add_text_box(items_frame);
        for item in &column.items {
            text_box
                .add_paragraph()
                .space_after(theme.item_space_after)
                .add_run(&format!("• {item}"), theme.column_item_format());
        }
    }
    Ok(())
}

/// Draw a thin horizontal divider spanning `frame`.
pub fn render_divider(slide: &mut Slide, frame: Rect, theme: &Theme) {
    slide.add_auto_shape(Geometry::Rectangle, frame, Some(theme.divider_color));
}

/// Compose the full key-insights slide: two badged half-slide panels, a
/// divider, and a bottom row of badged columns.
///
/// Sets the canvas to 13.333" x 7.5" and appends one slide to `pres`.
pub fn compose_key_insights(
    pres: &mut Presentation,
    content: &SlideContent,
    theme: &Theme,
) -> Result<()> {
    pres.set_slide_size(
        inches_to_emu(SLIDE_WIDTH_IN),
        inches_to_emu(SLIDE_HEIGHT_IN),
    );
    let page = Rect::new(0, 0, pres.slide_width(), pres.slide_height());
    let margin = inches_to_emu(MARGIN_IN);
    let frame = page.inset(margin, 0, margin, 0)?;

    let panel_band = Rect::new(
        frame.x,
        inches_to_emu(CONTENT_TOP_IN),
        frame.w,
        inches_to_emu(COLUMN_HEIGHT_IN),
    );
    let halves = panel_band.split_columns(2, inches_to_emu(COLUMN_GAP_IN))?;

    let slide = pres.add_slide();

    let badge_y = inches_to_emu(BADGE_TOP_IN);
    let badge_height = inches_to_emu(BADGE_HEIGHT_IN);
    for (half, panel) in halves.iter().zip([&content.left, &content.right]) {
        render_badge(
            slide,
            Rect::new(half.x, badge_y, half.w, badge_height),
            &panel.badge_label,
            panel.badge_fill,
            theme,
        );
        render_outline(slide, *half, &panel.sections, theme);
    }

    let divider_y = panel_band.bottom() + inches_to_emu(DIVIDER_CLEARANCE_IN);
    render_divider(
        slide,
        Rect::new(frame.x, divider_y, frame.w, inches_to_emu(DIVIDER_HEIGHT_IN)),
        theme,
    );

    let bottom_top = divider_y + inches_to_emu(DIVIDER_CLEARANCE_IN);
    let bottom_band = Rect::new(
        frame.x,
        bottom_top,
        frame.w,
        page.h - bottom_top - inches_to_emu(BOTTOM_MARGIN_IN),
    )
    .validated()?;
    render_column_row(slide, bottom_band, &content.bottom, theme)?;

    debug!(
        "composed key-insights slide with {} shapes",
        pres.slide(0).map(Slide::shape_count).unwrap_or(0)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::content::Panel;
    use crate::compose::theme::{PASTEL_BLUE, PASTEL_GREEN};
    use crate::pptx::reader;

    fn sample_content() -> SlideContent {
        SlideContent {
            left: Panel::new("Advantages / Strengths", PASTEL_GREEN)
                .section(Section::new("High recall"))
                .section(Section::new("Modular").sub_item("Parts work independently")),
            right: Panel::new("Limitations / Recommendations", PASTEL_BLUE)
                .section(Section::new("Weak decoder").sub_item("Hurts standalone use")),
            bottom: vec![
                Column::new("Dataset", PASTEL_BLUE).item("Handles day and night"),
                Column::new("Model Choice", PASTEL_GREEN).item("Lightweight wins"),
                Column::new("Takeaway", PASTEL_BLUE).item("Ship the small model"),
            ],
        }
    }

    #[test]
    fn test_render_outline_preserves_order() {
        let mut slide = Slide::new(256);
        let theme = Theme::default();
        let sections = vec![
            Section::new("alpha"),
            Section::new("beta").sub_item("beta-1"),
            Section::new("gamma").sub_item("gamma-1").sub_item("gamma-2"),
        ];
        render_outline(
            &mut slide,
            Rect::from_inches(0.5, 0.9, 5.0, 4.6),
            &sections,
            &theme,
        );

        assert_eq!(slide.shape_count(), 1);
        let paragraphs = slide.shapes()[0].paragraphs();
        let rendered: Vec<(u8, &str)> = paragraphs
            .iter()
            .map(|p| (p.indent_level(), p.runs()[0].text.as_str()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                (0, "alpha"),
                (0, "beta"),
                (1, "beta-1"),
                (0, "gamma"),
                (1, "gamma-1"),
                (1, "gamma-2"),
            ]
        );
    }

    #[test]
    fn test_outline_spacing_convention() {
        let mut slide = Slide::new(256);
        let theme = Theme::default();
        render_outline(
            &mut slide,
            Rect::from_inches(0.5, 0.9, 5.0, 4.6),
            &[Section::new("title").sub_item("sub")],
            &theme,
        );
        let paragraphs = slide.shapes()[0].paragraphs();
        assert_eq!(paragraphs[0].space_after_pt, Some(4.0));
        assert_eq!(paragraphs[1].space_after_pt, Some(2.0));
    }

    #[test]
    fn test_column_row_badges_align() {
        let mut slide = Slide::new(256);
        let theme = Theme::default();
        let region = Rect::from_inches(0.5, 5.9, 12.333, 1.2);
        let columns = sample_content().bottom;
        render_column_row(&mut slide, region, &columns, &theme).unwrap();

        // One badge and one text box per column
        assert_eq!(slide.shape_count(), 6);
        let badges: Vec<Rect> = slide
            .shapes()
            .iter()
            .filter(|s| s.is_auto_shape())
            .map(|s| s.frame())
            .collect();
        assert_eq!(badges.len(), 3);
        assert!(badges.iter().all(|b| b.y == badges[0].y));
        for pair in badges.windows(2) {
            assert!(pair[0].right() <= pair[1].x);
        }
        let total: i64 = badges.iter().map(|b| b.w).sum();
        assert_eq!(total + 2 * inches_to_emu(0.25), region.w);
    }

    #[test]
    fn test_column_row_items_carry_bullet_glyph() {
        let mut slide = Slide::new(256);
        let theme = Theme::default();
        let region = Rect::from_inches(0.5, 5.9, 12.333, 1.2);
        let columns = vec![Column::new("Only", PASTEL_BLUE).item("one item")];
        render_column_row(&mut slide, region, &columns, &theme).unwrap();

        let text_box = &slide.shapes()[1];
        assert_eq!(text_box.paragraphs()[0].runs()[0].text, "• one item");
    }

    #[test]
    fn test_column_row_rejects_degenerate_region() {
        let mut slide = Slide::new(256);
        let theme = Theme::default();
        // Three gaps of 0.25" cannot fit into half an inch of width
        let region = Rect::from_inches(0.5, 5.9, 0.5, 1.2);
        let columns = sample_content().bottom;
        assert!(render_column_row(&mut slide, region, &columns, &theme).is_err());
    }

    #[test]
    fn test_compose_shape_inventory() {
        let mut pres = Presentation::new();
        compose_key_insights(&mut pres, &sample_content(), &Theme::default()).unwrap();

        assert_eq!(pres.slide_count(), 1);
        let slide = pres.slide(0).unwrap();
        // 2 panel badges + 1 divider + 3 column badges
        let auto_shapes = slide.shapes().iter().filter(|s| s.is_auto_shape()).count();
        assert_eq!(auto_shapes, 6);
        // 2 outlines + 3 column item boxes
        assert_eq!(slide.shape_count() - auto_shapes, 5);
        // Exactly one of the auto shapes is the divider
        let dividers = slide
            .shapes()
            .iter()
            .filter(|s| s.fill() == Some(crate::compose::theme::LINE_LIGHT))
            .count();
        assert_eq!(dividers, 1);
    }

    #[test]
    fn test_compose_canvas_dimensions() {
        let mut pres = Presentation::new();
        compose_key_insights(&mut pres, &sample_content(), &Theme::default()).unwrap();
        assert_eq!(pres.slide_width(), inches_to_emu(13.333));
        assert_eq!(pres.slide_height(), inches_to_emu(7.5));
    }

    #[test]
    fn test_end_to_end_save_and_inspect() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key-insights.pptx");

        let mut pres = Presentation::new();
        compose_key_insights(&mut pres, &sample_content(), &Theme::default()).unwrap();
        pres.save(&path).unwrap();

        let summary = reader::open(&path).unwrap();
        assert_eq!(summary.slide_width, inches_to_emu(13.333));
        assert_eq!(summary.slide_height, inches_to_emu(7.5));
        assert_eq!(summary.slides.len(), 1);
        assert_eq!(summary.slides[0].shape_count, 11);
        let texts = &summary.slides[0].texts;
        assert!(texts.iter().any(|t| t == "Advantages / Strengths"));
        assert!(texts.iter().any(|t| t == "• Ship the small model"));
    }
}
