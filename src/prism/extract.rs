//! Table extraction: dispatch by table type, column naming, value parsing
//! and length normalization.

use crate::error::{Error, Result};
use crate::prism::table::{ColumnDiagnostic, DataTable};
use crate::xml::{NsContext, XmlElement};

/// Subcolumn discriminator generator.
///
/// Each table gets two independent generators: X subcolumns always count
/// `0, 1, 2, …`; Y subcolumns count the same way unless `YFormat` selects
/// one of the cyclic three-label schemes.
#[derive(Debug)]
pub(crate) enum SubcolumnNamer {
    Sequential(u32),
    Cyclic {
        labels: [&'static str; 3],
        next: usize,
    },
}

impl SubcolumnNamer {
    pub(crate) fn sequential() -> Self {
        SubcolumnNamer::Sequential(0)
    }

    pub(crate) fn for_y_format(y_format: Option<&str>) -> Self {
        match y_format {
            Some("SEN") => SubcolumnNamer::Cyclic {
                labels: ["Mean", "SEM", "N"],
                next: 0,
            },
            Some("upper-lower-limits") => SubcolumnNamer::Cyclic {
                labels: ["Mean", "Lower", "Upper"],
                next: 0,
            },
            _ => Self::sequential(),
        }
    }

    pub(crate) fn next_name(&mut self) -> String {
        match self {
            SubcolumnNamer::Sequential(n) => {
                let name = n.to_string();
                *n += 1;
                name
            }
            SubcolumnNamer::Cyclic { labels, next } => {
                let name = labels[*next].to_string();
                *next = (*next + 1) % labels.len();
                name
            }
        }
    }
}

/// Extract one `Table` element into a [`DataTable`], dispatching on its
/// `TableType` attribute. Only `XY`, `TwoWay` and `OneWay` tables are
/// supported; Prism's other table kinds fail the whole load.
pub(crate) fn extract_table(table: &XmlElement, ns: &NsContext) -> Result<DataTable> {
    let table_type = table.attribute("TableType").ok_or_else(|| {
        Error::InvalidFormat("Table is missing the TableType attribute".to_string())
    })?;

    match table_type {
        "XY" | "TwoWay" | "OneWay" => extract_xy_table(table, ns),
        other => Err(Error::UnsupportedTableType(other.to_string())),
    }
}

fn extract_xy_table(table: &XmlElement, ns: &NsContext) -> Result<DataTable> {
    let mut out = DataTable::new();
    out.x_format = table.attribute("XFormat").map(str::to_string);
    out.y_format = table.attribute("YFormat").map(str::to_string);
    out.ev_format = table.attribute("EVFormat").map(str::to_string);

    let mut x_names = SubcolumnNamer::sequential();
    let mut y_names = SubcolumnNamer::for_y_format(out.y_format.as_deref());

    // Row labels come from the single subcolumn of the RowTitlesColumn.
    if let Some(row_titles) = ns.find_child(table, "RowTitlesColumn")
        && let Some(subcolumn) = ns.find_child(row_titles, "Subcolumn")
    {
        let labels: Vec<String> = ns
            .children(subcolumn, "d")
            .map(|d| d.flat_text())
            .collect();
        out.row_titles = Some(labels);
    }

    for kind in ["XColumn", "XAdvancedColumn"] {
        for column in ns.children(table, kind) {
            collect_column(column, ns, &mut x_names, &mut out);
        }
    }
    for kind in ["YColumn", "YAdvancedColumn"] {
        for column in ns.children(table, kind) {
            collect_column(column, ns, &mut y_names, &mut out);
        }
    }

    out.pad_columns();
    Ok(out)
}

/// Extract every subcolumn of one column element into the table.
///
/// A failed subcolumn degrades to an empty column (later NaN-padded to the
/// table's row count) with a structured diagnostic instead of aborting the
/// load; one corrupt column must not discard the rest of the file.
fn collect_column(
    column: &XmlElement,
    ns: &NsContext,
    names: &mut SubcolumnNamer,
    out: &mut DataTable,
) {
    let title = ns
        .find_child(column, "Title")
        .map(|t| t.flat_text())
        .unwrap_or_default();

    for subcolumn in ns.children(column, "Subcolumn") {
        let name = format!("{}_{}", title, names.next_name());
        match subcolumn_values(subcolumn, ns) {
            Ok(values) => out.insert_column(name, values),
            Err(err) => {
                log::warn!("column {name:?} could not be extracted: {err}");
                out.diagnostics.push(ColumnDiagnostic {
                    column: name.clone(),
                    message: err.to_string(),
                });
                out.insert_column(name, Vec::new());
            }
        }
    }
}

/// Extract one subcolumn's data points in document order.
///
/// Excluded points become NaN regardless of their text; empty points become
/// null; anything else must parse as a float.
fn subcolumn_values(subcolumn: &XmlElement, ns: &NsContext) -> Result<Vec<Option<f64>>> {
    let mut values = Vec::new();
    for point in ns.children(subcolumn, "d") {
        if point.attribute("Excluded") == Some("1") {
            values.push(Some(f64::NAN));
            continue;
        }
        let text = point.flat_text();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            values.push(None);
            continue;
        }
        let number: f64 = fast_float2::parse(trimmed)
            .map_err(|_| Error::InvalidNumber(trimmed.to_string()))?;
        values.push(Some(number));
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> XmlElement {
        XmlElement::parse(xml).unwrap()
    }

    #[test]
    fn test_sequential_namer() {
        let mut namer = SubcolumnNamer::sequential();
        assert_eq!(namer.next_name(), "0");
        assert_eq!(namer.next_name(), "1");
        assert_eq!(namer.next_name(), "2");
    }

    #[test]
    fn test_sen_namer_cycles() {
        let mut namer = SubcolumnNamer::for_y_format(Some("SEN"));
        let names: Vec<_> = (0..5).map(|_| namer.next_name()).collect();
        assert_eq!(names, vec!["Mean", "SEM", "N", "Mean", "SEM"]);
    }

    #[test]
    fn test_upper_lower_namer() {
        let mut namer = SubcolumnNamer::for_y_format(Some("upper-lower-limits"));
        assert_eq!(namer.next_name(), "Mean");
        assert_eq!(namer.next_name(), "Lower");
        assert_eq!(namer.next_name(), "Upper");
    }

    #[test]
    fn test_unknown_y_format_counts() {
        let mut namer = SubcolumnNamer::for_y_format(Some("replicates"));
        assert_eq!(namer.next_name(), "0");
        let mut namer = SubcolumnNamer::for_y_format(None);
        assert_eq!(namer.next_name(), "0");
    }

    #[test]
    fn test_subcolumn_values_three_way_missingness() {
        let subcolumn = parse(
            r#"<Subcolumn>
                 <d>1.5</d>
                 <d Excluded="1">99</d>
                 <d></d>
                 <d> 2 </d>
               </Subcolumn>"#,
        );
        let values = subcolumn_values(&subcolumn, &NsContext::none()).unwrap();
        assert_eq!(values.len(), 4);
        assert_eq!(values[0], Some(1.5));
        assert!(values[1].unwrap().is_nan());
        assert_eq!(values[2], None);
        assert_eq!(values[3], Some(2.0));
    }

    #[test]
    fn test_subcolumn_values_unparseable_text_fails() {
        let subcolumn = parse("<Subcolumn><d>abc</d></Subcolumn>");
        let err = subcolumn_values(&subcolumn, &NsContext::none()).unwrap_err();
        assert!(matches!(err, Error::InvalidNumber(ref s) if s == "abc"));
    }

    #[test]
    fn test_point_text_split_across_markup() {
        let subcolumn = parse("<Subcolumn><d><Run>1</Run><Run>25</Run></d></Subcolumn>");
        let values = subcolumn_values(&subcolumn, &NsContext::none()).unwrap();
        assert_eq!(values, vec![Some(125.0)]);
    }

    #[test]
    fn test_unsupported_table_type() {
        let table = parse(r#"<Table TableType="ColumnStats"><Title>t</Title></Table>"#);
        let err = extract_table(&table, &NsContext::none()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedTableType(ref t) if t == "ColumnStats"));
        assert!(err.to_string().contains("ColumnStats"));
    }

    #[test]
    fn test_missing_table_type_is_fatal() {
        let table = parse("<Table><Title>t</Title></Table>");
        assert!(matches!(
            extract_table(&table, &NsContext::none()),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_x_and_y_namers_are_independent() {
        let table = parse(
            r#"<Table TableType="XY" YFormat="SEN">
                 <XColumn><Title>X</Title>
                   <Subcolumn><d>1</d></Subcolumn>
                 </XColumn>
                 <YColumn><Title>Y</Title>
                   <Subcolumn><d>10</d></Subcolumn>
                   <Subcolumn><d>0.5</d></Subcolumn>
                   <Subcolumn><d>3</d></Subcolumn>
                 </YColumn>
               </Table>"#,
        );
        let data = extract_table(&table, &NsContext::none()).unwrap();
        let names: Vec<_> = data.column_names().collect();
        assert_eq!(names, vec!["X_0", "Y_Mean", "Y_SEM", "Y_N"]);
    }

    #[test]
    fn test_advanced_columns_share_the_generators() {
        let table = parse(
            r#"<Table TableType="XY">
                 <XColumn><Title>A</Title><Subcolumn><d>1</d></Subcolumn></XColumn>
                 <XAdvancedColumn><Title>B</Title><Subcolumn><d>2</d></Subcolumn></XAdvancedColumn>
                 <YColumn><Title>C</Title><Subcolumn><d>3</d></Subcolumn></YColumn>
               </Table>"#,
        );
        let data = extract_table(&table, &NsContext::none()).unwrap();
        let names: Vec<_> = data.column_names().collect();
        // X numbering continues across plain and advanced columns; Y restarts.
        assert_eq!(names, vec!["A_0", "B_1", "C_0"]);
    }

    #[test]
    fn test_corrupt_column_degrades_and_pads() {
        let table = parse(
            r#"<Table TableType="OneWay">
                 <YColumn><Title>Good</Title>
                   <Subcolumn><d>1</d><d>2</d></Subcolumn>
                 </YColumn>
                 <YColumn><Title>Bad</Title>
                   <Subcolumn><d>oops</d></Subcolumn>
                 </YColumn>
               </Table>"#,
        );
        let data = extract_table(&table, &NsContext::none()).unwrap();
        assert_eq!(data.column("Good_0").unwrap().values(), &[Some(1.0), Some(2.0)]);

        let bad = data.column("Bad_1").unwrap().values();
        assert_eq!(bad.len(), 2);
        assert!(bad.iter().all(|v| v.unwrap().is_nan()));

        assert_eq!(data.diagnostics().len(), 1);
        assert_eq!(data.diagnostics()[0].column, "Bad_1");
        assert!(data.diagnostics()[0].message.contains("oops"));
    }

    #[test]
    fn test_row_titles_become_index() {
        let table = parse(
            r#"<Table TableType="OneWay">
                 <RowTitlesColumn>
                   <Subcolumn><d>first</d><d>second</d></Subcolumn>
                 </RowTitlesColumn>
                 <YColumn><Title>Y</Title>
                   <Subcolumn><d>1</d><d>2</d><d>3</d></Subcolumn>
                 </YColumn>
               </Table>"#,
        );
        let data = extract_table(&table, &NsContext::none()).unwrap();
        assert_eq!(data.row_count(), 3);
        assert_eq!(
            data.row_titles(),
            Some(&["first".to_string(), "second".to_string(), String::new()][..])
        );
    }

    #[test]
    fn test_format_attributes_captured() {
        let table = parse(
            r#"<Table TableType="XY" XFormat="numbers" YFormat="SEN" EVFormat="AsteriskAfterNumber">
                 <Title>t</Title>
               </Table>"#,
        );
        let data = extract_table(&table, &NsContext::none()).unwrap();
        assert_eq!(data.x_format(), Some("numbers"));
        assert_eq!(data.y_format(), Some("SEN"));
        assert_eq!(data.ev_format(), Some("AsteriskAfterNumber"));
        assert!(data.columns().is_empty());
    }
}
