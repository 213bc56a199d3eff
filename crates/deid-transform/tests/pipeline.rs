//! Bytes-to-bytes pipeline behavior through the real codec.

use deid_ingest::decode_workbook;
use deid_model::{CellValue, DeidError, MaskMode, Sheet, TransformOptions, Workbook};
use deid_output::encode_workbook;
use deid_transform::anonymize_xlsx;

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

fn encoded_fixture() -> Vec<u8> {
    let mut workbook = Workbook::new();

    let mut patients = Sheet::new("Patients");
    patients.push_row(vec![
        text("PatientID"),
        text("Name"),
        text("DOB"),
        text("Diagnosis"),
    ]);
    patients.push_row(vec![
        text("P1"),
        text("Alice"),
        text("1990-01-01"),
        text("Flu"),
    ]);
    patients.push_row(vec![
        text("P2"),
        text("Bob"),
        text("1985-05-05"),
        text("Cold"),
    ]);
    workbook.push_sheet(patients);

    let mut metrics = Sheet::new("Metrics");
    metrics.push_row(vec![text("Visits"), text("Active")]);
    metrics.push_row(vec![CellValue::Number(3.0), CellValue::Bool(true)]);
    workbook.push_sheet(metrics);

    workbook.push_sheet(Sheet::new("Blank"));

    encode_workbook(&workbook).expect("encode fixture")
}

#[test]
fn transform_masks_through_real_spreadsheet_bytes() {
    let bytes = encoded_fixture();
    let (sanitized_bytes, report) =
        anonymize_xlsx(&bytes, &TransformOptions::new()).expect("anonymize");
    let sanitized = decode_workbook(&sanitized_bytes).expect("decode output");

    let sheet_names: Vec<&str> = sanitized
        .sheets
        .iter()
        .map(|sheet| sheet.name.as_str())
        .collect();
    assert_eq!(sheet_names, vec!["Patients", "Metrics", "Blank"]);

    let patients = &sanitized.sheets[0];
    for column in 0..3 {
        assert_eq!(patients.rows[1][column], text("WID_f64551fc"));
        assert_eq!(patients.rows[2][column], text("WID_3946ca64"));
    }
    assert_eq!(patients.rows[1][3], text("Flu"));
    assert_eq!(patients.rows[2][3], text("Cold"));

    // Two patient identifiers plus the inert entry contributed by the
    // populated row of the synthetic-identity "Metrics" sheet.
    assert_eq!(report.identifiers_collected, 3);
    assert_eq!(report.sheets[0].mode, MaskMode::IdentifierColumn);
    assert_eq!(report.sheets[1].mode, MaskMode::SyntheticPerRow);
    assert_eq!(report.sheets[2].mode, MaskMode::Passthrough);
}

#[test]
fn unmasked_cell_types_survive_the_full_round_trip() {
    let bytes = encoded_fixture();
    let (sanitized_bytes, _) =
        anonymize_xlsx(&bytes, &TransformOptions::new()).expect("anonymize");
    let sanitized = decode_workbook(&sanitized_bytes).expect("decode output");

    // "Metrics" has no identifier column; its headers match no keyword,
    // so per-row identities exist but nothing is overwritten.
    let metrics = &sanitized.sheets[1];
    assert_eq!(metrics.rows[1][0], CellValue::Number(3.0));
    assert_eq!(metrics.rows[1][1], CellValue::Bool(true));
}

#[test]
fn zero_row_sheet_passes_through_unclassified() {
    let bytes = encoded_fixture();
    let (sanitized_bytes, report) =
        anonymize_xlsx(&bytes, &TransformOptions::new()).expect("anonymize");
    let sanitized = decode_workbook(&sanitized_bytes).expect("decode output");

    assert!(sanitized.sheets[2].rows.is_empty());
    let blank = &report.sheets[2];
    assert_eq!(blank.mode, MaskMode::Passthrough);
    assert_eq!(blank.data_rows, 0);
    assert_eq!(blank.masked_cells, 0);
}

#[test]
fn undecodable_input_aborts_with_no_output() {
    let result = anonymize_xlsx(b"definitely not a workbook", &TransformOptions::new());
    assert!(matches!(result, Err(DeidError::Decode(_))));
}
