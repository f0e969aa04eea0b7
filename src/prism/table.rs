//! In-memory table model produced by extraction.

/// One named output column of nullable floats.
///
/// Two distinct missing-value markers flow through a column:
/// `None` means "no data entered" (an empty data point), while
/// `Some(f64::NAN)` means "numerically indeterminate" (a point excluded in
/// Prism, or padding added to equalize column lengths). Collapsing the two
/// would lose information the format intentionally encodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub(crate) name: String,
    pub(crate) values: Vec<Option<f64>>,
}

impl Column {
    /// Column name, `<column title>_<subcolumn discriminator>`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Values in row order.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }
}

/// Structured record of a column that degraded during extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDiagnostic {
    /// Name of the degraded column
    pub column: String,
    /// What went wrong
    pub message: String,
}

/// One extracted data table: equally-long nullable-float columns keyed by
/// name, an optional row-label index, and the table's format attributes.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    pub(crate) columns: Vec<Column>,
    pub(crate) row_titles: Option<Vec<String>>,
    pub(crate) x_format: Option<String>,
    pub(crate) y_format: Option<String>,
    pub(crate) ev_format: Option<String>,
    pub(crate) diagnostics: Vec<ColumnDiagnostic>,
}

impl DataTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a column. Column names are unique within a table; inserting a
    /// duplicate name replaces the existing column in place (last write
    /// wins, matching the source format's behavior).
    pub(crate) fn insert_column(&mut self, name: String, values: Vec<Option<f64>>) {
        if let Some(existing) = self.columns.iter_mut().find(|c| c.name == name) {
            existing.values = values;
        } else {
            self.columns.push(Column { name, values });
        }
    }

    /// Right-pad every column with NaN up to the longest column's length,
    /// and resize the row-label index to match.
    pub(crate) fn pad_columns(&mut self) {
        let max = self
            .columns
            .iter()
            .map(|c| c.values.len())
            .max()
            .unwrap_or(0);
        for column in &mut self.columns {
            column.values.resize(max, Some(f64::NAN));
        }
        if let Some(labels) = &mut self.row_titles {
            labels.resize(max, String::new());
        }
    }

    /// Columns in insertion order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Shared row count of all columns.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    /// Row labels from the table's `RowTitlesColumn`, if present.
    pub fn row_titles(&self) -> Option<&[String]> {
        self.row_titles.as_deref()
    }

    /// The table's `XFormat` attribute, if present.
    pub fn x_format(&self) -> Option<&str> {
        self.x_format.as_deref()
    }

    /// The table's `YFormat` attribute, if present.
    pub fn y_format(&self) -> Option<&str> {
        self.y_format.as_deref()
    }

    /// The table's `EVFormat` attribute, if present.
    pub fn ev_format(&self) -> Option<&str> {
        self.ev_format.as_deref()
    }

    /// Diagnostics for columns that degraded to empty during extraction.
    pub fn diagnostics(&self) -> &[ColumnDiagnostic] {
        &self.diagnostics
    }
}
