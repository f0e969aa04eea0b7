//! Spreadsheet export.
//!
//! Thin adapters that write an extracted [`crate::prism::PrismFile`] out to
//! other formats. The parsing core never depends on these; they only
//! consume the finished title→table mapping.

pub mod xlsx;

// Re-exports
pub use xlsx::{sanitize_sheet_name, write_xlsx};
