//! GraphPad Prism `.pzfx` document parsing.
//!
//! A Prism file is an XML document whose root `GraphPadPrismFile` element
//! (bare or namespaced) holds a sequence of `Table` elements. Each table
//! groups X and Y columns of one or more subcolumns; every subcolumn is an
//! ordered list of `d` data points. Extraction turns each table into a
//! [`DataTable`]: equally-long columns of nullable floats named
//! `<column title>_<subcolumn discriminator>`, optionally indexed by the
//! labels of a `RowTitlesColumn`.
//!
//! # Example
//!
//! ```no_run
//! use pzfx::PrismFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = PrismFile::open("experiment.pzfx")?;
//! for title in file.titles() {
//!     let table = file.table(title).unwrap();
//!     println!("{}: {} columns x {} rows", title, table.columns().len(), table.row_count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod document;
mod extract;
pub mod table;

// Re-exports
pub use document::{PrismFile, PRISM_NAMESPACE, ROOT_TAG, SUPPORTED_VERSION};
pub use table::{Column, ColumnDiagnostic, DataTable};
