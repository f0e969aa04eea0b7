//! Convert a GraphPad Prism pzfx file to an XLSX workbook.
//!
//! Run with:
//! ```bash
//! cargo run --example convert -- experiment.pzfx experiment.xlsx
//! ```

use std::path::PathBuf;

use clap::Parser;
use pzfx::{export, PrismFile};

#[derive(Parser)]
#[command(about = "Convert a Prism pzfx file to an XLSX workbook")]
struct Args {
    /// Input .pzfx file
    input: PathBuf,

    /// Output .xlsx file
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let file = PrismFile::open(&args.input)?;
    println!("Parsed {} table(s) from {}", file.len(), args.input.display());

    for title in file.titles() {
        let table = file.table(title).unwrap();
        println!(
            "  {title}: {} columns x {} rows",
            table.columns().len(),
            table.row_count()
        );
        for diagnostic in table.diagnostics() {
            eprintln!(
                "  warning: column {} degraded: {}",
                diagnostic.column, diagnostic.message
            );
        }
    }

    export::write_xlsx(&file, &args.output)?;
    println!("Wrote {}", args.output.display());
    Ok(())
}
