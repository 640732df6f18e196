//! Read-back inspection of written packages.
//!
//! Opens a .pptx package and reports its declared geometry and content.
//! This is a deliberately small surface: enough to verify that a composed
//! deck landed on disk with the expected dimensions, shapes, and text.

use crate::common::{Error, Result};
use crate::layout::Emu;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::{Cursor, Read};
use std::path::Path;
use zip::ZipArchive;
use zip::result::ZipError;

/// Summary of a written presentation package.
#[derive(Debug, Clone)]
pub struct DeckSummary {
    /// Declared slide width in EMUs
    pub slide_width: Emu,
    /// Declared slide height in EMUs
    pub slide_height: Emu,
    /// Per-slide summaries, in presentation order
    pub slides: Vec<SlideSummary>,
}

/// Summary of a single slide part.
#[derive(Debug, Clone)]
pub struct SlideSummary {
    /// Number of `sp` shape elements on the slide (text boxes and auto
    /// shapes; the spTree group container is not counted)
    pub shape_count: usize,
    /// Text content of every run, in document order
    pub texts: Vec<String>,
}

/// Open and summarize a .pptx package from a file path.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> deckforge::Result<()> {
/// let summary = deckforge::pptx::reader::open("deck.pptx")?;
/// println!("{} slide(s)", summary.slides.len());
/// # Ok(())
/// # }
/// ```
pub fn open<P: AsRef<Path>>(path: P) -> Result<DeckSummary> {
    let data = std::fs::read(path)?;
    from_bytes(data)
}

/// Summarize a .pptx package from owned bytes.
pub fn from_bytes(data: Vec<u8>) -> Result<DeckSummary> {
    let mut archive = ZipArchive::new(Cursor::new(data))?;

    let presentation_xml = read_part(&mut archive, "ppt/presentation.xml")?;
    let (slide_width, slide_height, slide_count) = parse_presentation(&presentation_xml)?;

    let mut slides = Vec::with_capacity(slide_count);
    for index in 0..slide_count {
        let name = format!("ppt/slides/slide{}.xml", index + 1);
        let slide_xml = read_part(&mut archive, &name)?;
        slides.push(parse_slide(&slide_xml)?);
    }

    Ok(DeckSummary {
        slide_width,
        slide_height,
        slides,
    })
}

/// Read a part from the archive, reporting a missing entry by part name.
fn read_part<R: Read + std::io::Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> Result<Vec<u8>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Err(Error::PartNotFound(name.to_string())),
        Err(err) => return Err(err.into()),
    };
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Extract slide size and slide count from presentation.xml.
fn parse_presentation(xml: &[u8]) -> Result<(Emu, Emu, usize)> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut slide_width = None;
    let mut slide_height = None;
    let mut slide_count = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"sldSz" => {
                    for attr in e.attributes() {
                        let attr = attr?;
                        match attr.key.as_ref() {
                            b"cx" => slide_width = Some(parse_emu(&attr.value)?),
                            b"cy" => slide_height = Some(parse_emu(&attr.value)?),
                            _ => {},
                        }
                    }
                },
                b"sldId" => slide_count += 1,
                _ => {},
            },
            Ok(Event::Eof) => break,
            Err(err) => return Err(err.into()),
            _ => {},
        }
    }

    match (slide_width, slide_height) {
        (Some(cx), Some(cy)) => Ok((cx, cy, slide_count)),
        _ => Err(Error::InvalidFormat(
            "presentation.xml declares no slide size".to_string(),
        )),
    }
}

/// Count shapes and collect run text from a slide part.
fn parse_slide(xml: &[u8]) -> Result<SlideSummary> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut shape_count = 0usize;
    let mut texts = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"sp" => shape_count += 1,
                b"t" => in_text = true,
                _ => {},
            },
            Ok(Event::Text(ref t)) => {
                if in_text {
                    let decoded = t.decode().map_err(|e| Error::Xml(e.to_string()))?;
                    let unescaped = quick_xml::escape::unescape(&decoded)
                        .map_err(|e| Error::Xml(e.to_string()))?;
                    texts.push(unescaped.into_owned());
                }
            },
            Ok(Event::End(ref e)) => {
                if e.local_name().as_ref() == b"t" {
                    in_text = false;
                }
            },
            Ok(Event::Eof) => break,
            Err(err) => return Err(err.into()),
            _ => {},
        }
    }

    Ok(SlideSummary { shape_count, texts })
}

/// Parse an EMU attribute value.
fn parse_emu(value: &[u8]) -> Result<Emu> {
    std::str::from_utf8(value)
        .ok()
        .and_then(|s| s.parse::<Emu>().ok())
        .ok_or_else(|| Error::InvalidFormat("malformed EMU attribute value".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;
    use crate::pptx::format::TextFormat;
    use crate::pptx::pres::Presentation;
    use crate::pptx::shape::Geometry;

    #[test]
    fn test_round_trip_through_writer() {
        let mut pres = Presentation::new();
        pres.set_slide_size(12_192_475, 6_858_000);
        let slide = pres.add_slide();
        slide
            .add_text_box(Rect::new(457_200, 274_320, 5_000_000, 4_000_000))
            .add_paragraph()
            .add_run("first", TextFormat::new());
        slide.add_auto_shape(
            Geometry::RoundedRectangle,
            Rect::new(457_200, 274_320, 5_000_000, 457_200),
            None,
        );

        let summary = from_bytes(pres.to_bytes().unwrap()).unwrap();
        assert_eq!(summary.slide_width, 12_192_475);
        assert_eq!(summary.slide_height, 6_858_000);
        assert_eq!(summary.slides.len(), 1);
        assert_eq!(summary.slides[0].shape_count, 2);
        assert_eq!(summary.slides[0].texts, vec!["first".to_string()]);
    }

    #[test]
    fn test_not_a_package() {
        assert!(from_bytes(b"not a zip archive".to_vec()).is_err());
    }

    #[test]
    fn test_missing_presentation_part() {
        use std::io::Write;
        use zip::ZipWriter;
        use zip::write::SimpleFileOptions;

        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("unrelated.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"hello").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = from_bytes(bytes).unwrap_err();
        assert!(matches!(err, Error::PartNotFound(_)));
    }
}
