//! XLSX export adapter over rust_xlsxwriter.

use std::path::Path;

use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::prism::{DataTable, PrismFile};

/// Characters Excel forbids in worksheet names.
const SHEET_NAME_ILLEGAL: &[char] = &['\\', '/', '*', '[', ']', ':', '?'];

/// Maximum worksheet name length Excel accepts.
const SHEET_NAME_MAX: usize = 31;

/// Turn a table title into a legal worksheet name: strip the characters
/// Excel forbids and truncate to 31 characters.
pub fn sanitize_sheet_name(title: &str) -> String {
    title
        .chars()
        .filter(|c| !SHEET_NAME_ILLEGAL.contains(c))
        .take(SHEET_NAME_MAX)
        .collect()
}

/// Write one worksheet per table to an `.xlsx` workbook at `path`.
///
/// Sheets appear in sorted-title order so output is deterministic. The
/// first row holds column names; a row-label index, when present, fills the
/// first column. Null and NaN cells are both left blank, so the export
/// flattens the in-memory null/NaN distinction the way the source
/// application's own spreadsheet export does.
pub fn write_xlsx<P: AsRef<Path>>(file: &PrismFile, path: P) -> Result<()> {
    let mut workbook = Workbook::new();

    let mut entries: Vec<(&String, &DataTable)> = file.tables().iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (title, table) in entries {
        let sheet = workbook.add_worksheet();

        let name = sanitize_sheet_name(title);
        if !name.is_empty() {
            sheet.set_name(&name)?;
        }

        let label_offset = u16::from(table.row_titles().is_some());

        if let Some(labels) = table.row_titles() {
            for (row, label) in labels.iter().enumerate() {
                sheet.write_string(row as u32 + 1, 0, label)?;
            }
        }

        for (index, column) in table.columns().iter().enumerate() {
            let col = label_offset + index as u16;
            sheet.write_string(0, col, column.name())?;
            for (row, value) in column.values().iter().enumerate() {
                if let Some(number) = value
                    && !number.is_nan()
                {
                    sheet.write_number(row as u32 + 1, col, *number)?;
                }
            }
        }
    }

    workbook.save(path.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_sheet_name_strips_illegal_characters() {
        assert_eq!(sanitize_sheet_name(r"a\b/c*d[e]f:g?h"), "abcdefgh");
        assert_eq!(sanitize_sheet_name("plain title"), "plain title");
    }

    #[test]
    fn test_sanitize_sheet_name_truncates() {
        let long = "x".repeat(40);
        assert_eq!(sanitize_sheet_name(&long).len(), SHEET_NAME_MAX);
    }

    #[test]
    fn test_export_writes_a_workbook() {
        let xml = r#"<GraphPadPrismFile PrismXMLVersion="5.00">
            <Table TableType="XY">
              <Title>Results: run 1</Title>
              <RowTitlesColumn>
                <Subcolumn><d>control</d><d>treated</d></Subcolumn>
              </RowTitlesColumn>
              <XColumn><Title>X</Title>
                <Subcolumn><d>1</d><d>2</d></Subcolumn>
              </XColumn>
              <YColumn><Title>Y</Title>
                <Subcolumn><d>10</d><d Excluded="1">20</d></Subcolumn>
              </YColumn>
            </Table>
          </GraphPadPrismFile>"#;
        let file = PrismFile::parse(xml).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        write_xlsx(&file, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }
}
