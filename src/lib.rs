//! pzfx - A Rust library for parsing GraphPad Prism `.pzfx` files
//!
//! This library parses the XML-based `.pzfx` file format produced by the
//! GraphPad Prism statistical graphing application, converting its data
//! tables into rectangular in-memory structures and optionally exporting
//! them to an XLSX workbook.
//!
//! # Features
//!
//! - **Table extraction**: XY, TwoWay and OneWay tables become columns of
//!   nullable floats, ragged subcolumns padded to one shared row count
//! - **Faithful missingness**: excluded points (NaN), empty points (null)
//!   and parsed numbers stay distinguishable
//! - **Subcolumn naming**: `Mean`/`SEM`/`N` and `Mean`/`Lower`/`Upper`
//!   discriminators selected by the table's `YFormat`
//! - **Namespace aware**: bare and namespaced Prism documents are
//!   equivalent
//! - **Graceful degradation**: a corrupt column degrades to NaN padding
//!   with a structured diagnostic instead of aborting the load
//! - **XLSX export**: one worksheet per table, sheet names sanitized
//!
//! # Example - Reading a pzfx file
//!
//! ```no_run
//! use pzfx::PrismFile;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = PrismFile::open("experiment.pzfx")?;
//!
//! for title in file.titles() {
//!     let table = file.table(title).unwrap();
//!     println!("{title}: {} rows", table.row_count());
//!     for column in table.columns() {
//!         println!("  {}", column.name());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Converting to XLSX
//!
//! ```no_run
//! use pzfx::{export, PrismFile};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = PrismFile::open("experiment.pzfx")?;
//! export::write_xlsx(&file, "experiment.xlsx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Parsing from a string
//!
//! ```
//! use pzfx::PrismFile;
//!
//! let xml = r#"<GraphPadPrismFile PrismXMLVersion="5.00">
//!     <Table TableType="OneWay"><Title>T</Title>
//!       <YColumn><Title>Y</Title>
//!         <Subcolumn><d>1</d><d>2</d></Subcolumn>
//!       </YColumn>
//!     </Table>
//!   </GraphPadPrismFile>"#;
//!
//! let file = PrismFile::parse(xml).unwrap();
//! let table = file.table("T").unwrap();
//! assert_eq!(table.column("Y_0").unwrap().values(), &[Some(1.0), Some(2.0)]);
//! ```

pub mod error;
pub mod export;
pub mod prism;
pub mod xml;

// Re-exports
pub use error::{Error, Result};
pub use prism::{Column, ColumnDiagnostic, DataTable, PrismFile};
