use anyhow::{Result, bail};

// ---------------------------------------------------------------------------
// Record – one row of the table
// ---------------------------------------------------------------------------

/// A single row, one text cell per column.
///
/// Cells hold the text exactly as read from the source so the raw copy can be
/// written back unmodified.
pub type Record = Vec<String>;

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full table held in memory: named columns plus rectangular rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Dataset {
    /// Build a dataset, rejecting rows whose width differs from the header.
    pub fn new(columns: Vec<String>, rows: Vec<Record>) -> Result<Self> {
        for (row_no, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                bail!(
                    "Row {row_no}: expected {} fields but found {}",
                    columns.len(),
                    row.len()
                );
            }
        }
        Ok(Dataset { columns, rows })
    }

    /// Ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows in source order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Copy of this dataset holding only the rows at `indices`, in that order.
    ///
    /// An index past the end is an error.
    pub fn select(&self, indices: &[usize]) -> Result<Dataset> {
        let mut rows = Vec::with_capacity(indices.len());
        for &i in indices {
            match self.rows.get(i) {
                Some(row) => rows.push(row.clone()),
                None => bail!("Row index {i} out of range for {} rows", self.rows.len()),
            }
        }
        Ok(Dataset {
            columns: self.columns.clone(),
            rows,
        })
    }
}
