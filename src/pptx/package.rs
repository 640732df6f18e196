//! Package assembly and serialization.
//!
//! This module turns a [`Presentation`](crate::pptx::Presentation) into a
//! complete presentationML package: it lays out the part inventory,
//! generates [Content_Types].xml and every relationship part, and writes
//! the whole set into a ZIP archive.

use crate::common::Result;
use crate::pptx::pres::Presentation;
use crate::pptx::template;
use log::debug;
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Content types used by the parts this crate writes.
pub(crate) mod content_type {
    pub const OPC_RELATIONSHIPS: &str =
        "application/vnd.openxmlformats-package.relationships+xml";
    pub const XML: &str = "application/xml";
    pub const PML_PRESENTATION_MAIN: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml";
    pub const PML_SLIDE: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slide+xml";
    pub const PML_SLIDE_MASTER: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml";
    pub const PML_SLIDE_LAYOUT: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml";
    pub const PML_PRES_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.presProps+xml";
    pub const PML_VIEW_PROPS: &str =
        "application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml";
    pub const OFC_THEME: &str = "application/vnd.openxmlformats-officedocument.theme+xml";
    pub const OPC_CORE_PROPERTIES: &str =
        "application/vnd.openxmlformats-package.core-properties+xml";
    pub const OFC_EXTENDED_PROPERTIES: &str =
        "application/vnd.openxmlformats-officedocument.extended-properties+xml";
}

/// Relationship types used by the parts this crate writes.
pub(crate) mod relationship_type {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
    pub const SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    pub const PRES_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";
    pub const VIEW_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/viewProps";
}

/// A relationship entry within a `.rels` part.
struct Relationship {
    r_id: String,
    reltype: &'static str,
    target: String,
}

impl Relationship {
    fn new(r_id: impl Into<String>, reltype: &'static str, target: impl Into<String>) -> Self {
        Self {
            r_id: r_id.into(),
            reltype,
            target: target.into(),
        }
    }
}

/// Generate the XML body of a `.rels` part.
fn relationships_xml(rels: &[Relationship]) -> String {
    let mut xml = String::with_capacity(1024);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for rel in rels {
        // Relationship ids and targets are generated internally and contain
        // no characters needing escape
        let _ = write!(
            xml,
            r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
            rel.r_id, rel.reltype, rel.target
        );
    }
    xml.push_str("</Relationships>");
    xml
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
struct ContentTypes {
    /// Default content types by extension
    defaults: BTreeMap<&'static str, &'static str>,
    /// Override content types by part name
    overrides: BTreeMap<String, &'static str>,
}

impl ContentTypes {
    fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels", content_type::OPC_RELATIONSHIPS);
        defaults.insert("xml", content_type::XML);
        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Register an override for a part name (with leading slash).
    fn add_override(&mut self, partname: impl Into<String>, content_type: &'static str) {
        self.overrides.insert(partname.into(), content_type);
    }

    /// Generate the XML for [Content_Types].xml. Entries are emitted in
    /// sorted order for deterministic output.
    fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(2048);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        for (ext, ct) in &self.defaults {
            let _ = write!(xml, r#"<Default Extension="{}" ContentType="{}"/>"#, ext, ct);
        }
        for (partname, ct) in &self.overrides {
            let _ = write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                partname, ct
            );
        }
        xml.push_str("</Types>");
        xml
    }
}

/// Serialize a presentation to package bytes.
///
/// The part inventory is fixed: one presentation part, one slide master
/// with one blank layout and one theme, the property parts, and one slide
/// part per slide.
pub(crate) fn package_bytes(pres: &Presentation) -> Result<Vec<u8>> {
    let slide_count = pres.slide_count();

    // Presentation relationships: rId1 is the master, slides follow from
    // rId2, then the property parts
    let mut pres_rels = vec![Relationship::new(
        "rId1",
        relationship_type::SLIDE_MASTER,
        "slideMasters/slideMaster1.xml",
    )];
    let mut slide_rel_ids = Vec::with_capacity(slide_count);
    for index in 0..slide_count {
        let r_id = format!("rId{}", index + 2);
        pres_rels.push(Relationship::new(
            r_id.clone(),
            relationship_type::SLIDE,
            format!("slides/slide{}.xml", index + 1),
        ));
        slide_rel_ids.push(r_id);
    }
    pres_rels.push(Relationship::new(
        format!("rId{}", slide_count + 2),
        relationship_type::PRES_PROPS,
        "presProps.xml",
    ));
    pres_rels.push(Relationship::new(
        format!("rId{}", slide_count + 3),
        relationship_type::VIEW_PROPS,
        "viewProps.xml",
    ));

    let package_rels = vec![
        Relationship::new(
            "rId1",
            relationship_type::OFFICE_DOCUMENT,
            "ppt/presentation.xml",
        ),
        Relationship::new("rId2", relationship_type::CORE_PROPERTIES, "docProps/core.xml"),
        Relationship::new("rId3", relationship_type::EXTENDED_PROPERTIES, "docProps/app.xml"),
    ];

    let master_rels = vec![
        Relationship::new(
            "rId1",
            relationship_type::SLIDE_LAYOUT,
            "../slideLayouts/slideLayout1.xml",
        ),
        Relationship::new("rId2", relationship_type::THEME, "../theme/theme1.xml"),
    ];

    let layout_rels = vec![Relationship::new(
        "rId1",
        relationship_type::SLIDE_MASTER,
        "../slideMasters/slideMaster1.xml",
    )];

    let slide_rels = vec![Relationship::new(
        "rId1",
        relationship_type::SLIDE_LAYOUT,
        "../slideLayouts/slideLayout1.xml",
    )];

    // Content types for every part in the inventory
    let mut content_types = ContentTypes::new();
    content_types.add_override("/ppt/presentation.xml", content_type::PML_PRESENTATION_MAIN);
    content_types.add_override(
        "/ppt/slideMasters/slideMaster1.xml",
        content_type::PML_SLIDE_MASTER,
    );
    content_types.add_override(
        "/ppt/slideLayouts/slideLayout1.xml",
        content_type::PML_SLIDE_LAYOUT,
    );
    content_types.add_override("/ppt/theme/theme1.xml", content_type::OFC_THEME);
    content_types.add_override("/ppt/presProps.xml", content_type::PML_PRES_PROPS);
    content_types.add_override("/ppt/viewProps.xml", content_type::PML_VIEW_PROPS);
    content_types.add_override("/docProps/core.xml", content_type::OPC_CORE_PROPERTIES);
    content_types.add_override("/docProps/app.xml", content_type::OFC_EXTENDED_PROPERTIES);
    for index in 0..slide_count {
        content_types.add_override(
            format!("/ppt/slides/slide{}.xml", index + 1),
            content_type::PML_SLIDE,
        );
    }

    // Assemble the part list
    let mut parts: Vec<(String, Vec<u8>)> = Vec::new();
    parts.push(("[Content_Types].xml".to_string(), content_types.to_xml().into_bytes()));
    parts.push(("_rels/.rels".to_string(), relationships_xml(&package_rels).into_bytes()));
    parts.push((
        "ppt/presentation.xml".to_string(),
        pres.presentation_xml(&slide_rel_ids)?.into_bytes(),
    ));
    parts.push((
        "ppt/_rels/presentation.xml.rels".to_string(),
        relationships_xml(&pres_rels).into_bytes(),
    ));
    parts.push((
        "ppt/slideMasters/slideMaster1.xml".to_string(),
        template::SLIDE_MASTER_XML.as_bytes().to_vec(),
    ));
    parts.push((
        "ppt/slideMasters/_rels/slideMaster1.xml.rels".to_string(),
        relationships_xml(&master_rels).into_bytes(),
    ));
    parts.push((
        "ppt/slideLayouts/slideLayout1.xml".to_string(),
        template::SLIDE_LAYOUT_XML.as_bytes().to_vec(),
    ));
    parts.push((
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels".to_string(),
        relationships_xml(&layout_rels).into_bytes(),
    ));
    parts.push((
        "ppt/theme/theme1.xml".to_string(),
        template::THEME_XML.as_bytes().to_vec(),
    ));
    parts.push((
        "ppt/presProps.xml".to_string(),
        template::PRES_PROPS_XML.as_bytes().to_vec(),
    ));
    parts.push((
        "ppt/viewProps.xml".to_string(),
        template::VIEW_PROPS_XML.as_bytes().to_vec(),
    ));
    parts.push((
        "docProps/core.xml".to_string(),
        template::core_props_xml("Key Insights").into_bytes(),
    ));
    parts.push((
        "docProps/app.xml".to_string(),
        template::app_props_xml(slide_count).into_bytes(),
    ));
    for (index, slide) in pres.slides.iter().enumerate() {
        parts.push((
            format!("ppt/slides/slide{}.xml", index + 1),
            slide.to_xml()?.into_bytes(),
        ));
        parts.push((
            format!("ppt/slides/_rels/slide{}.xml.rels", index + 1),
            relationships_xml(&slide_rels).into_bytes(),
        ));
    }

    // Write the ZIP archive
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    for (name, bytes) in &parts {
        debug!("writing part {} ({} bytes)", name, bytes.len());
        writer.start_file(name.as_str(), options)?;
        writer.write_all(bytes)?;
    }
    let cursor = writer.finish()?;

    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationships_xml() {
        let rels = vec![
            Relationship::new("rId1", relationship_type::SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
            Relationship::new("rId2", relationship_type::SLIDE, "slides/slide1.xml"),
        ];
        let xml = relationships_xml(&rels);
        assert!(xml.contains(r#"<Relationship Id="rId1""#));
        assert!(xml.contains(r#"Target="slides/slide1.xml"/>"#));
        assert!(xml.ends_with("</Relationships>"));
    }

    #[test]
    fn test_content_types_xml() {
        let mut ct = ContentTypes::new();
        ct.add_override("/ppt/presentation.xml", content_type::PML_PRESENTATION_MAIN);
        let xml = ct.to_xml();
        assert!(xml.contains(r#"<Default Extension="rels""#));
        assert!(xml.contains(r#"<Default Extension="xml""#));
        assert!(xml.contains(r#"<Override PartName="/ppt/presentation.xml""#));
    }

    #[test]
    fn test_package_bytes_is_a_zip() {
        let mut pres = Presentation::new();
        pres.add_slide();
        let bytes = package_bytes(&pres).unwrap();
        // ZIP local file header signature
        assert_eq!(&bytes[0..4], b"PK\x03\x04");
    }

    #[test]
    fn test_package_contains_all_parts() {
        let mut pres = Presentation::new();
        pres.add_slide();
        pres.add_slide();
        let bytes = package_bytes(&pres).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/presProps.xml",
            "ppt/viewProps.xml",
            "docProps/core.xml",
            "docProps/app.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide2.xml.rels",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part {name}");
        }
    }
}
