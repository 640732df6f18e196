//! Presentation model and presentation.xml generation.
use crate::common::{Error, Result};
use crate::layout::Emu;
use crate::pptx::package;
use crate::pptx::slide::Slide;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// Default slide width: 13.333 inches (16:9).
pub const DEFAULT_SLIDE_WIDTH: Emu = 12_192_000;
/// Default slide height: 7.5 inches.
pub const DEFAULT_SLIDE_HEIGHT: Emu = 6_858_000;

/// A presentation being composed for writing.
///
/// The presentation is the single mutable drawing surface of a composition
/// pass: slides and shapes are appended, never updated or removed, and the
/// finished object flows straight into [`Presentation::save`].
#[derive(Debug)]
pub struct Presentation {
    pub(crate) slides: Vec<Slide>,
    slide_width: Emu,
    slide_height: Emu,
}

impl Presentation {
    /// Create a new empty presentation with default 16:9 dimensions
    /// (13.333" x 7.5").
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
        }
    }

    /// Add a new slide and return it for composition.
    pub fn add_slide(&mut self) -> &mut Slide {
        let slide_id = (self.slides.len() + 256) as u32;
        self.slides.push(Slide::new(slide_id));
        self.slides.last_mut().unwrap()
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Get a mutable reference to a slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut Slide> {
        self.slides.get_mut(index)
    }

    /// Get the slide width in EMUs.
    pub fn slide_width(&self) -> Emu {
        self.slide_width
    }

    /// Get the slide height in EMUs.
    pub fn slide_height(&self) -> Emu {
        self.slide_height
    }

    /// Set the slide dimensions in EMUs.
    pub fn set_slide_size(&mut self, width: Emu, height: Emu) {
        self.slide_width = width;
        self.slide_height = height;
    }

    /// Generate presentation.xml with the relationship IDs the package
    /// writer assigned to the slides.
    pub(crate) fn presentation_xml(&self, slide_rel_ids: &[String]) -> Result<String> {
        let mut xml = String::with_capacity(2048);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#);

        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if !self.slides.is_empty() {
            if slide_rel_ids.len() != self.slides.len() {
                return Err(Error::Xml(
                    "slide relationship IDs must be provided for every slide".to_string(),
                ));
            }
            xml.push_str("<p:sldIdLst>");
            for (slide, rel_id) in self.slides.iter().zip(slide_rel_ids) {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="{}"/>"#,
                    slide.slide_id(),
                    rel_id
                )
                .map_err(|e| Error::Xml(e.to_string()))?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}"/>"#,
            self.slide_width, self.slide_height
        )
        .map_err(|e| Error::Xml(e.to_string()))?;

        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Serialize the presentation to package bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        package::package_bytes(self)
    }

    /// Serialize the presentation and write it to a file, overwriting any
    /// existing file at `path`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use deckforge::pptx::Presentation;
    ///
    /// # fn main() -> deckforge::Result<()> {
    /// let mut pres = Presentation::new();
    /// pres.add_slide();
    /// pres.save("deck.pptx")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_presentation() {
        let pres = Presentation::new();
        assert_eq!(pres.slide_count(), 0);
        assert_eq!(pres.slide_width(), 12_192_000);
        assert_eq!(pres.slide_height(), 6_858_000);
    }

    #[test]
    fn test_add_slide_assigns_ids() {
        let mut pres = Presentation::new();
        let first = pres.add_slide().slide_id();
        let second = pres.add_slide().slide_id();
        assert_eq!(first, 256);
        assert_eq!(second, 257);
        assert_eq!(pres.slide_count(), 2);
    }

    #[test]
    fn test_presentation_xml() {
        let mut pres = Presentation::new();
        pres.set_slide_size(12_192_475, 6_858_000);
        pres.add_slide();

        let xml = pres.presentation_xml(&["rId2".to_string()]).unwrap();
        assert!(xml.contains("<p:sldMasterIdLst>"));
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId2"/>"#));
        assert!(xml.contains(r#"<p:sldSz cx="12192475" cy="6858000"/>"#));
    }

    #[test]
    fn test_presentation_xml_requires_rel_ids() {
        let mut pres = Presentation::new();
        pres.add_slide();
        assert!(pres.presentation_xml(&[]).is_err());
    }
}
