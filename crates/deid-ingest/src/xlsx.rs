use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use tracing::debug;

use deid_model::{CellValue, DeidError, Result, Row, Sheet, Workbook};

/// Decode uploaded spreadsheet bytes into ordered, named sheets of rows.
///
/// Handles both xlsx and legacy xls containers. Sheets keep workbook
/// order; rows are padded to the sheet's used width, so blank cells
/// arrive as [`CellValue::Empty`].
pub fn decode_workbook(bytes: &[u8]) -> Result<Workbook> {
    let cursor = Cursor::new(bytes.to_vec());
    let mut reader =
        open_workbook_auto_from_rs(cursor).map_err(|error| DeidError::Decode(error.to_string()))?;
    let mut workbook = Workbook::new();
    for name in reader.sheet_names().to_owned() {
        let range = reader
            .worksheet_range(&name)
            .map_err(|error| DeidError::Decode(format!("sheet `{name}`: {error}")))?;
        let mut sheet = Sheet::new(&name);
        for row in range.rows() {
            sheet.push_row(convert_row(row));
        }
        debug!(sheet = %name, rows = sheet.rows.len(), "decoded sheet");
        workbook.push_sheet(sheet);
    }
    Ok(workbook)
}

fn convert_row(cells: &[Data]) -> Row {
    cells.iter().map(convert_cell).collect()
}

fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Float(value) => CellValue::Number(*value),
        Data::Bool(flag) => CellValue::Bool(*flag),
        Data::DateTime(datetime) => CellValue::Number(datetime.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::Text(text.clone()),
        // Formula error cells carry nothing worth preserving.
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_as_decode_error() {
        let result = decode_workbook(b"not a spreadsheet");
        assert!(matches!(result, Err(DeidError::Decode(_))));
    }

    #[test]
    fn cell_conversion_preserves_types() {
        assert_eq!(
            convert_cell(&Data::String("Flu".to_string())),
            CellValue::Text("Flu".to_string())
        );
        assert_eq!(convert_cell(&Data::Int(3)), CellValue::Number(3.0));
        assert_eq!(convert_cell(&Data::Float(1.5)), CellValue::Number(1.5));
        assert_eq!(convert_cell(&Data::Bool(true)), CellValue::Bool(true));
        assert_eq!(convert_cell(&Data::Empty), CellValue::Empty);
    }
}
