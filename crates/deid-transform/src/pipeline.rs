//! Three-phase orchestrator: classify and collect, map, mask.

use std::time::Instant;

use tracing::{info, info_span};

use deid_model::{MaskMode, Result, SheetReport, TransformOptions, TransformReport, Workbook};

use crate::classify::{SheetClassification, classify_header};
use crate::collect::{IdentifierSet, collect_sheet};
use crate::mask::mask_sheet;
use crate::pseudonym::PseudonymMap;

/// Run the de-identification transform over a decoded workbook.
///
/// The phases are strictly sequenced: the pseudonym map is derived only
/// after collection has closed over every sheet, and masking only
/// consults the closed map. Sheet names, order, and all unmasked cells
/// are preserved verbatim; zero-row sheets pass through unclassified.
pub fn anonymize_workbook(
    workbook: &Workbook,
    options: &TransformOptions,
) -> (Workbook, TransformReport) {
    let span = info_span!("anonymize", sheets = workbook.sheets.len());
    let _guard = span.enter();

    // Phase 1: classify every sheet and collect the global identifier set.
    let collect_start = Instant::now();
    let classifications: Vec<Option<SheetClassification>> = workbook
        .sheets
        .iter()
        .map(|sheet| sheet.header().map(|header| classify_header(header)))
        .collect();
    let mut identifiers = IdentifierSet::new();
    for (sheet, classification) in workbook.sheets.iter().zip(&classifications) {
        if let Some(classification) = classification {
            collect_sheet(sheet, *classification, &mut identifiers);
        }
    }
    let identifiers_collected = identifiers.len();
    info!(
        identifiers = identifiers_collected,
        duration_ms = collect_start.elapsed().as_millis(),
        "collection complete"
    );

    // Phase 2: the set is closed; derive the pseudonym map from it.
    let pseudonyms = PseudonymMap::from_identifiers(identifiers);

    // Phase 3: re-walk every sheet applying the masking policy.
    let mask_start = Instant::now();
    let mut sanitized = Workbook::new();
    let mut reports = Vec::with_capacity(workbook.sheets.len());
    for (sheet, classification) in workbook.sheets.iter().zip(&classifications) {
        match classification {
            Some(classification) => {
                let (masked, report) = mask_sheet(sheet, *classification, &pseudonyms, options);
                sanitized.push_sheet(masked);
                reports.push(report);
            }
            None => {
                sanitized.push_sheet(sheet.clone());
                reports.push(SheetReport {
                    name: sheet.name.clone(),
                    mode: MaskMode::Passthrough,
                    data_rows: 0,
                    masked_columns: 0,
                    masked_cells: 0,
                });
            }
        }
    }
    let report = TransformReport {
        sheets: reports,
        identifiers_collected,
    };
    info!(
        masked_cells = report.total_masked_cells(),
        duration_ms = mask_start.elapsed().as_millis(),
        "masking complete"
    );

    (sanitized, report)
}

/// Bytes-to-bytes entry point: decode the upload, anonymize it, and
/// re-encode the sanitized workbook.
///
/// All-or-nothing: any decode or encode failure aborts the transform
/// with no partial output.
pub fn anonymize_xlsx(
    bytes: &[u8],
    options: &TransformOptions,
) -> Result<(Vec<u8>, TransformReport)> {
    let workbook = deid_ingest::decode_workbook(bytes)?;
    let (sanitized, report) = anonymize_workbook(&workbook, options);
    let encoded = deid_output::encode_workbook(&sanitized)?;
    Ok((encoded, report))
}
