pub mod cell;
pub mod error;
pub mod options;
pub mod report;
pub mod workbook;

pub use cell::{CellValue, canonicalize};
pub use error::{DeidError, ErrorBody, GENERIC_FAULT_MESSAGE, Result};
pub use options::TransformOptions;
pub use report::{MaskMode, SheetReport, TransformReport};
pub use workbook::{Row, Sheet, Workbook};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes() {
        let report = TransformReport {
            sheets: vec![SheetReport {
                name: "Patients".to_string(),
                mode: MaskMode::IdentifierColumn,
                data_rows: 2,
                masked_columns: 3,
                masked_cells: 6,
            }],
            identifiers_collected: 2,
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: TransformReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round.sheets.len(), 1);
        assert_eq!(round.total_masked_cells(), 6);
    }

    #[test]
    fn error_body_matches_wire_shape() {
        let body = ErrorBody {
            error: "no file supplied".to_string(),
        };
        let json = serde_json::to_string(&body).expect("serialize body");
        assert_eq!(json, r#"{"error":"no file supplied"}"#);
    }
}
