//! Shape types and their XML generation.
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::common::{Error, RgbColor, Result};
use crate::layout::Rect;
use crate::pptx::format::{Alignment, TextFormat};
use std::fmt::Write as FmtWrite;

/// A single run of text with uniform formatting.
///
/// Runs are immutable once appended to a paragraph.
#[derive(Debug, Clone)]
pub struct Run {
    /// Text content (an empty string is legal and produces an empty run)
    pub text: String,
    /// Typography attributes
    pub format: TextFormat,
}

/// A paragraph inside a shape's text body.
///
/// Paragraphs are append-only: runs keep the order in which they were
/// added, and a paragraph never moves within its shape.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub(crate) level: u8,
    pub(crate) space_after_pt: Option<f64>,
    pub(crate) alignment: Alignment,
    pub(crate) bullet: Option<char>,
    pub(crate) runs: Vec<Run>,
}

impl Paragraph {
    /// Set the indent level (0 = top level, 1 = sub level).
    pub fn level(&mut self, level: u8) -> &mut Self {
        self.level = level;
        self
    }

    /// Set the spacing after the paragraph in points.
    pub fn space_after(&mut self, pt: f64) -> &mut Self {
        self.space_after_pt = Some(pt);
        self
    }

    /// Set the horizontal alignment.
    pub fn align(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = alignment;
        self
    }

    /// Set an explicit bullet character for the paragraph.
    pub fn bullet(&mut self, glyph: char) -> &mut Self {
        self.bullet = Some(glyph);
        self
    }

    /// Append a text run, preserving any previously appended runs.
    pub fn add_run(&mut self, text: &str, format: TextFormat) -> &mut Self {
        self.runs.push(Run {
            text: text.to_string(),
            format,
        });
        self
    }

    /// Runs appended so far, in order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// The paragraph's indent level.
    pub fn indent_level(&self) -> u8 {
        self.level
    }

    /// Generate the `a:p` element for this paragraph.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        xml.push_str("<a:pPr");
        if self.level > 0 {
            write!(xml, r#" lvl="{}""#, self.level).map_err(|e| Error::Xml(e.to_string()))?;
        }
        if let Some(algn) = self.alignment.as_attr() {
            write!(xml, r#" algn="{}""#, algn).map_err(|e| Error::Xml(e.to_string()))?;
        }
        xml.push('>');
        if let Some(pt) = self.space_after_pt {
            write!(
                xml,
                r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
                pt_to_centipoints(pt)
            )
            .map_err(|e| Error::Xml(e.to_string()))?;
        }
        if let Some(glyph) = self.bullet {
            write!(
                xml,
                r#"<a:buChar char="{}"/>"#,
                escape_xml(&glyph.to_string())
            )
            .map_err(|e| Error::Xml(e.to_string()))?;
        }
        xml.push_str("</a:pPr>");

        for run in &self.runs {
            run_to_xml(run, xml)?;
        }

        xml.push_str("</a:p>");
        Ok(())
    }
}

/// Generate the `a:r` element for a run.
fn run_to_xml(run: &Run, xml: &mut String) -> Result<()> {
    xml.push_str("<a:r>");

    xml.push_str(r#"<a:rPr lang="en-US" dirty="0""#);

    if let Some(size) = run.format.size {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))
            .map_err(|e| Error::Xml(e.to_string()))?;
    }

    if let Some(true) = run.format.bold {
        xml.push_str(r#" b="1""#);
    }

    if let Some(true) = run.format.italic {
        xml.push_str(r#" i="1""#);
    }

    xml.push('>');

    // Child order is fixed by the schema: fill before the latin font
    if let Some(color) = run.format.color {
        write!(
            xml,
            r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
            color.to_hex()
        )
        .map_err(|e| Error::Xml(e.to_string()))?;
    }

    if let Some(ref font) = run.format.font {
        write!(xml, r#"<a:latin typeface="{}"/>"#, escape_xml(font))
            .map_err(|e| Error::Xml(e.to_string()))?;
    }

    xml.push_str("</a:rPr>");

    write!(xml, "<a:t>{}</a:t>", escape_xml(&run.text)).map_err(|e| Error::Xml(e.to_string()))?;
    xml.push_str("</a:r>");

    Ok(())
}

/// Preset geometry of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Rectangle,
    RoundedRectangle,
}

impl Geometry {
    /// The `prstGeom prst` attribute value.
    fn preset(self) -> &'static str {
        match self {
            Self::Rectangle => "rect",
            Self::RoundedRectangle => "roundRect",
        }
    }

    /// Shape name prefix used in `cNvPr`.
    fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::RoundedRectangle => "Rounded Rectangle",
        }
    }
}

/// Body autofit policy for a text box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Autofit {
    /// Leave overflowing text as-is
    #[default]
    None,
    /// Shrink text to fit the frame
    Normal,
}

/// A shape on a slide.
#[derive(Debug, Clone)]
pub struct Shape {
    pub(crate) shape_id: u32,
    pub(crate) kind: ShapeKind,
}

#[derive(Debug, Clone)]
pub(crate) enum ShapeKind {
    TextBox {
        frame: Rect,
        word_wrap: bool,
        autofit: Autofit,
        paragraphs: Vec<Paragraph>,
    },
    Auto {
        geometry: Geometry,
        frame: Rect,
        fill: Option<RgbColor>,
        paragraphs: Vec<Paragraph>,
    },
}

impl Shape {
    /// Create a new text box shape.
    pub(crate) fn new_text_box(shape_id: u32, frame: Rect, word_wrap: bool, autofit: Autofit) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::TextBox {
                frame,
                word_wrap,
                autofit,
                paragraphs: Vec::new(),
            },
        }
    }

    /// Create a new auto shape (filled rectangle or rounded rectangle).
    ///
    /// Auto shapes are drawn without an outline.
    pub(crate) fn new_auto(
        shape_id: u32,
        geometry: Geometry,
        frame: Rect,
        fill: Option<RgbColor>,
    ) -> Self {
        Self {
            shape_id,
            kind: ShapeKind::Auto {
                geometry,
                frame,
                fill,
                paragraphs: Vec::new(),
            },
        }
    }

    /// The shape ID, unique within its slide.
    pub fn id(&self) -> u32 {
        self.shape_id
    }

    /// The shape's frame on the slide.
    pub fn frame(&self) -> Rect {
        match &self.kind {
            ShapeKind::TextBox { frame, .. } | ShapeKind::Auto { frame, .. } => *frame,
        }
    }

    /// Whether this is an auto shape (as opposed to a text box).
    pub fn is_auto_shape(&self) -> bool {
        matches!(self.kind, ShapeKind::Auto { .. })
    }

    /// The auto shape's solid fill, if any.
    pub fn fill(&self) -> Option<RgbColor> {
        match &self.kind {
            ShapeKind::Auto { fill, .. } => *fill,
            ShapeKind::TextBox { .. } => None,
        }
    }

    /// Append a paragraph to the shape's text body and return it for
    /// configuration. Existing paragraphs are preserved.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        let paragraphs = match &mut self.kind {
            ShapeKind::TextBox { paragraphs, .. } | ShapeKind::Auto { paragraphs, .. } => paragraphs,
        };
        paragraphs.push(Paragraph::default());
        paragraphs.last_mut().unwrap()
    }

    /// Paragraphs appended so far, in order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        match &self.kind {
            ShapeKind::TextBox { paragraphs, .. } | ShapeKind::Auto { paragraphs, .. } => paragraphs,
        }
    }

    /// Generate the `p:sp` element for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        match &self.kind {
            ShapeKind::TextBox {
                frame,
                word_wrap,
                autofit,
                paragraphs,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="Text Box {}"/>"#,
                    self.shape_id, self.shape_id
                )
                .map_err(|e| Error::Xml(e.to_string()))?;
                xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, frame)?;
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("</p:spPr>");

                xml.push_str("<p:txBody>");
                write!(
                    xml,
                    r#"<a:bodyPr wrap="{}" rtlCol="0">"#,
                    if *word_wrap { "square" } else { "none" }
                )
                .map_err(|e| Error::Xml(e.to_string()))?;
                if *autofit == Autofit::Normal {
                    xml.push_str("<a:normAutofit/>");
                }
                xml.push_str("</a:bodyPr>");
                xml.push_str("<a:lstStyle/>");
                write_paragraphs(xml, paragraphs)?;
                xml.push_str("</p:txBody>");

                xml.push_str("</p:sp>");
            },
            ShapeKind::Auto {
                geometry,
                frame,
                fill,
                paragraphs,
            } => {
                xml.push_str("<p:sp>");
                xml.push_str("<p:nvSpPr>");
                write!(
                    xml,
                    r#"<p:cNvPr id="{}" name="{} {}"/>"#,
                    self.shape_id,
                    geometry.name(),
                    self.shape_id
                )
                .map_err(|e| Error::Xml(e.to_string()))?;
                xml.push_str("<p:cNvSpPr/>");
                xml.push_str("<p:nvPr/>");
                xml.push_str("</p:nvSpPr>");

                xml.push_str("<p:spPr>");
                write_xfrm(xml, frame)?;
                write!(
                    xml,
                    r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
                    geometry.preset()
                )
                .map_err(|e| Error::Xml(e.to_string()))?;

                if let Some(color) = fill {
                    write!(
                        xml,
                        r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                        color.to_hex()
                    )
                    .map_err(|e| Error::Xml(e.to_string()))?;
                }

                // No outline on auto shapes
                xml.push_str("<a:ln><a:noFill/></a:ln>");
                xml.push_str("</p:spPr>");

                if !paragraphs.is_empty() {
                    xml.push_str("<p:txBody>");
                    xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0" anchor="ctr"/>"#);
                    xml.push_str("<a:lstStyle/>");
                    write_paragraphs(xml, paragraphs)?;
                    xml.push_str("</p:txBody>");
                }

                xml.push_str("</p:sp>");
            },
        }

        Ok(())
    }
}

/// Write the `a:xfrm` offset/extent pair for a frame.
fn write_xfrm(xml: &mut String, frame: &Rect) -> Result<()> {
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, frame.x, frame.y)
        .map_err(|e| Error::Xml(e.to_string()))?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, frame.w, frame.h)
        .map_err(|e| Error::Xml(e.to_string()))?;
    xml.push_str("</a:xfrm>");
    Ok(())
}

/// Write a text body's paragraph list. A body must contain at least one
/// paragraph, so an empty list produces a single empty one.
fn write_paragraphs(xml: &mut String, paragraphs: &[Paragraph]) -> Result<()> {
    if paragraphs.is_empty() {
        xml.push_str("<a:p/>");
        return Ok(());
    }
    for paragraph in paragraphs {
        paragraph.to_xml(xml)?;
    }
    Ok(())
}
