use deid_model::CellValue;

/// Per-sheet classification, decided once from the header row only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetClassification {
    /// Rows are keyed by the subject identifier in this column.
    IdentifierColumn { index: usize },
    /// No identifier column was detected; rows get synthetic identity.
    SyntheticIdentity,
}

/// Detect the subject-identifier column from a sheet's header row.
///
/// A text header qualifies when its lower-cased form contains both
/// "patient" and "id", independently of each other. When several
/// headers qualify the last one wins.
pub fn classify_header(header: &[CellValue]) -> SheetClassification {
    let mut detected = None;
    for (index, cell) in header.iter().enumerate() {
        if let CellValue::Text(text) = cell {
            let lowered = text.to_lowercase();
            if lowered.contains("patient") && lowered.contains("id") {
                detected = Some(index);
            }
        }
    }
    match detected {
        Some(index) => SheetClassification::IdentifierColumn { index },
        None => SheetClassification::SyntheticIdentity,
    }
}
