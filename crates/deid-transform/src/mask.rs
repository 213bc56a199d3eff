use std::collections::BTreeSet;

use uuid::Uuid;

use deid_model::{CellValue, MaskMode, Row, Sheet, SheetReport, TransformOptions};

use crate::classify::SheetClassification;
use crate::collect::has_present_cell;
use crate::policy::is_phi_header;
use crate::pseudonym::{PseudonymMap, surrogate_token};

/// Columns that must be overwritten for a sheet: the detected
/// identifier column (if any) plus every column whose text header
/// matches the keyword policy.
pub fn columns_to_mask(
    header: &[CellValue],
    classification: SheetClassification,
) -> BTreeSet<usize> {
    let mut columns = BTreeSet::new();
    for (index, cell) in header.iter().enumerate() {
        let CellValue::Text(text) = cell else {
            continue;
        };
        let is_identifier_column = matches!(
            classification,
            SheetClassification::IdentifierColumn { index: detected } if detected == index
        );
        if is_identifier_column || is_phi_header(text) {
            columns.insert(index);
        }
    }
    columns
}

/// Mask one sheet's data rows according to its classification.
///
/// Identifier-column sheets key every row on the canonical identifier
/// and overwrite the flagged columns with its surrogate; rows whose
/// identifier cell is absent pass through untouched, flagged columns
/// included. Synthetic-identity sheets give each populated row its own
/// random identity, unless the caller's options collapse the sheet to
/// the external subject key's identity.
pub fn mask_sheet(
    sheet: &Sheet,
    classification: SheetClassification,
    pseudonyms: &PseudonymMap,
    options: &TransformOptions,
) -> (Sheet, SheetReport) {
    let header = sheet.header().cloned().unwrap_or_default();
    let columns = columns_to_mask(&header, classification);
    let mut masked = Sheet::new(sheet.name.clone());
    masked.push_row(header);
    let mut masked_cells = 0usize;

    let mode = match classification {
        SheetClassification::IdentifierColumn { index } => {
            for row in sheet.data_rows() {
                let token = row
                    .get(index)
                    .and_then(CellValue::canonical)
                    .and_then(|identifier| pseudonyms.get(&identifier));
                let row = match token {
                    Some(token) => overwrite_columns(row, &columns, token, &mut masked_cells),
                    None => row.clone(),
                };
                masked.push_row(row);
            }
            MaskMode::IdentifierColumn
        }
        SheetClassification::SyntheticIdentity => {
            let collapse_key = options.collapse_key();
            for row in sheet.data_rows() {
                if !has_present_cell(row) {
                    masked.push_row(row.clone());
                    continue;
                }
                let token = match collapse_key {
                    Some(key) => surrogate_token(key),
                    None => surrogate_token(&Uuid::new_v4().to_string()),
                };
                masked.push_row(overwrite_columns(row, &columns, &token, &mut masked_cells));
            }
            if collapse_key.is_some() {
                MaskMode::SubjectKeyCollapse
            } else {
                MaskMode::SyntheticPerRow
            }
        }
    };

    let report = SheetReport {
        name: sheet.name.clone(),
        mode,
        data_rows: sheet.data_rows().len(),
        masked_columns: columns.len(),
        masked_cells,
    };
    (masked, report)
}

/// Overwrite the flagged columns of one row with the surrogate. Blank
/// cells stay blank; masking never materializes values into them.
fn overwrite_columns(
    row: &Row,
    columns: &BTreeSet<usize>,
    token: &str,
    masked_cells: &mut usize,
) -> Row {
    row.iter()
        .enumerate()
        .map(|(index, cell)| {
            if columns.contains(&index) && !matches!(cell, CellValue::Empty) {
                *masked_cells += 1;
                CellValue::Text(token.to_string())
            } else {
                cell.clone()
            }
        })
        .collect()
}
