//! Unified error types for deckforge.
//!
//! A single error enum covers both failure classes the crate can hit:
//! structurally invalid geometry raised by the layout allocator, and
//! serialization failures raised while writing or reading back a package.
use thiserror::Error;

/// Result type for deckforge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for deckforge operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Computed region has a non-positive extent
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML generation or parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Package part not found
    #[error("part not found: {0}")]
    PartNotFound(String),

    /// Invalid package content
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::Xml(err.to_string())
    }
}
