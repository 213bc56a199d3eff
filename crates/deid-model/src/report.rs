use serde::{Deserialize, Serialize};

/// How a sheet's data rows were masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaskMode {
    /// Rows keyed by a detected identifier column.
    IdentifierColumn,
    /// One random identity per row.
    SyntheticPerRow,
    /// Whole sheet collapsed to the external subject key's identity.
    SubjectKeyCollapse,
    /// Zero-row sheet passed through unclassified.
    Passthrough,
}

/// Per-sheet outcome of one transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetReport {
    pub name: String,
    pub mode: MaskMode,
    pub data_rows: usize,
    pub masked_columns: usize,
    pub masked_cells: usize,
}

/// Workbook-wide outcome of one transform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransformReport {
    pub sheets: Vec<SheetReport>,
    /// Size of the global identifier set when the collection phase
    /// closed.
    pub identifiers_collected: usize,
}

impl TransformReport {
    pub fn total_data_rows(&self) -> usize {
        self.sheets.iter().map(|sheet| sheet.data_rows).sum()
    }

    pub fn total_masked_cells(&self) -> usize {
        self.sheets.iter().map(|sheet| sheet.masked_cells).sum()
    }
}
