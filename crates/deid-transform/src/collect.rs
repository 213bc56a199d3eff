use std::collections::BTreeSet;

use uuid::Uuid;

use deid_model::{CellValue, Row, Sheet};

use crate::classify::SheetClassification;

/// Workbook-global deduplicated set of canonicalized identifiers.
///
/// The set is consumed to build the pseudonym map, so mapping can only
/// start once collection has closed over every sheet.
#[derive(Debug, Default)]
pub struct IdentifierSet {
    identifiers: BTreeSet<String>,
}

impl IdentifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, identifier: String) {
        self.identifiers.insert(identifier);
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.identifiers.contains(identifier)
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub(crate) fn into_sorted(self) -> Vec<String> {
        self.identifiers.into_iter().collect()
    }
}

/// Collect one sheet's identifiers into the global set.
///
/// Identifier-column sheets contribute the canonical form of every
/// present identifier cell. Synthetic-identity sheets contribute one
/// random entry per populated row; masking draws fresh identities per
/// row, so these entries are never looked up again.
pub fn collect_sheet(
    sheet: &Sheet,
    classification: SheetClassification,
    set: &mut IdentifierSet,
) {
    match classification {
        SheetClassification::IdentifierColumn { index } => {
            for row in sheet.data_rows() {
                if let Some(identifier) = row.get(index).and_then(CellValue::canonical) {
                    set.insert(identifier);
                }
            }
        }
        SheetClassification::SyntheticIdentity => {
            for row in sheet.data_rows() {
                if has_present_cell(row) {
                    set.insert(Uuid::new_v4().to_string());
                }
            }
        }
    }
}

pub(crate) fn has_present_cell(row: &Row) -> bool {
    row.iter().any(CellValue::is_present)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    fn sheet_with_rows(rows: Vec<Row>) -> Sheet {
        let mut sheet = Sheet::new("S");
        for row in rows {
            sheet.push_row(row);
        }
        sheet
    }

    #[test]
    fn identifier_cells_are_canonicalized_and_deduplicated() {
        let sheet = sheet_with_rows(vec![
            vec![text("PatientID")],
            vec![text("P1")],
            vec![text(" p1 ")],
            vec![text("P2")],
        ]);
        let mut set = IdentifierSet::new();
        collect_sheet(
            &sheet,
            SheetClassification::IdentifierColumn { index: 0 },
            &mut set,
        );
        assert_eq!(set.len(), 2);
        assert!(set.contains("p1"));
        assert!(set.contains("p2"));
    }

    #[test]
    fn absent_identifier_cells_are_skipped() {
        let sheet = sheet_with_rows(vec![
            vec![text("PatientID"), text("Note")],
            vec![CellValue::Empty, text("kept")],
            vec![CellValue::Number(0.0), text("kept")],
        ]);
        let mut set = IdentifierSet::new();
        collect_sheet(
            &sheet,
            SheetClassification::IdentifierColumn { index: 0 },
            &mut set,
        );
        assert!(set.is_empty());
    }

    #[test]
    fn synthetic_sheets_add_one_entry_per_populated_row() {
        let sheet = sheet_with_rows(vec![
            vec![text("Name")],
            vec![text("Alice")],
            vec![CellValue::Empty],
            vec![text("Bob")],
        ]);
        let mut set = IdentifierSet::new();
        collect_sheet(&sheet, SheetClassification::SyntheticIdentity, &mut set);
        assert_eq!(set.len(), 2);
    }
}
