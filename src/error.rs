//! Unified error types for the pzfx library.
//!
//! A single error enum covers document-level failures (wrong file type,
//! unsupported version, unsupported table kind) as well as errors coming
//! from the XML tokenizer, the filesystem and the XLSX writer. Per-point
//! parse failures use [`Error::InvalidNumber`] internally but are caught at
//! the column level and never abort a whole load.

use thiserror::Error;

/// Main error type for pzfx operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// The document is not a Prism file (wrong root tag or namespace)
    #[error("Not a Prism file: {0}")]
    NotPrismFile(String),

    /// Unsupported `PrismXMLVersion` value
    #[error("Can only load Prism files with XML version 5.00, got {0}")]
    UnsupportedVersion(String),

    /// Table type outside the supported set (`XY`, `TwoWay`, `OneWay`)
    #[error("Cannot parse {0} tables")]
    UnsupportedTableType(String),

    /// Structurally malformed document (missing required child or attribute)
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A data point's text is not a parseable number
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// XLSX writing error
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

/// Result type for pzfx operations.
pub type Result<T> = std::result::Result<T, Error>;
