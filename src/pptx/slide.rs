//! Slide model and XML generation.
use crate::common::{Result, RgbColor};
use crate::layout::Rect;
use crate::pptx::shape::{Autofit, Geometry, Shape};

/// A slide in a presentation.
///
/// A slide exclusively owns its shape list; composition routines append
/// shapes through a mutable reference and never remove or reorder them.
#[derive(Debug, Clone)]
pub struct Slide {
    pub(crate) slide_id: u32,
    pub(crate) shapes: Vec<Shape>,
}

impl Slide {
    /// Create a new empty slide.
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Add an empty text box spanning `frame` and return it for filling.
    ///
    /// The body wraps its text and shrinks it to fit the frame on overflow.
    pub fn add_text_box(&mut self, frame: Rect) -> &mut Shape {
        // IDs: 1 = the spTree group shape, 2+ = user shapes
        let shape_id = (self.shapes.len() + 2) as u32;
        let shape = Shape::new_text_box(shape_id, frame, true, Autofit::Normal);
        self.shapes.push(shape);
        self.shapes.last_mut().unwrap()
    }

    /// Add a filled auto shape with no outline and return it.
    pub fn add_auto_shape(
        &mut self,
        geometry: Geometry,
        frame: Rect,
        fill: Option<RgbColor>,
    ) -> &mut Shape {
        let shape_id = (self.shapes.len() + 2) as u32;
        let shape = Shape::new_auto(shape_id, geometry, frame, fill);
        self.shapes.push(shape);
        self.shapes.last_mut().unwrap()
    }

    /// Get the number of shapes on the slide.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Shapes on the slide, in z-order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);

        xml.push_str(
            r#"<p:sld xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" "#,
        );
        xml.push_str(r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#);
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
        );

        xml.push_str("<p:cSld>");
        xml.push_str("<p:spTree>");

        // Group shape properties (required)
        xml.push_str("<p:nvGrpSpPr>");
        xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
        xml.push_str("<p:cNvGrpSpPr/>");
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvGrpSpPr>");
        xml.push_str("<p:grpSpPr>");
        xml.push_str("<a:xfrm>");
        xml.push_str(r#"<a:off x="0" y="0"/>"#);
        xml.push_str(r#"<a:ext cx="0" cy="0"/>"#);
        xml.push_str(r#"<a:chOff x="0" y="0"/>"#);
        xml.push_str(r#"<a:chExt cx="0" cy="0"/>"#);
        xml.push_str("</a:xfrm>");
        xml.push_str("</p:grpSpPr>");

        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");

        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pptx::format::TextFormat;

    #[test]
    fn test_shape_ids_start_after_group_shape() {
        let mut slide = Slide::new(256);
        let first = slide.add_text_box(Rect::new(0, 0, 100, 100)).id();
        let second = slide
            .add_auto_shape(Geometry::Rectangle, Rect::new(0, 0, 100, 100), None)
            .id();
        assert_eq!(first, 2);
        assert_eq!(second, 3);
    }

    #[test]
    fn test_slide_xml_structure() {
        let mut slide = Slide::new(256);
        slide
            .add_text_box(Rect::new(0, 0, 100, 100))
            .add_paragraph()
            .add_run("content", TextFormat::new());

        let xml = slide.to_xml().unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
        assert!(xml.contains("<p:spTree>"));
        assert!(xml.contains(r#"<p:cNvPr id="1" name=""/>"#));
        assert!(xml.contains("<a:t>content</a:t>"));
        assert!(xml.contains("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"));
        assert!(xml.ends_with("</p:sld>"));
    }

    #[test]
    fn test_two_badges_are_two_shapes() {
        let mut slide = Slide::new(256);
        let frame = Rect::new(0, 0, 1_000, 500);
        slide.add_auto_shape(Geometry::RoundedRectangle, frame, None);
        slide.add_auto_shape(Geometry::RoundedRectangle, frame, None);
        assert_eq!(slide.shape_count(), 2);
    }
}
