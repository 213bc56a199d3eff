use rust_xlsxwriter::{Workbook as XlsxWorkbook, Worksheet, XlsxError};
use tracing::debug;

use deid_model::{CellValue, DeidError, Result, Workbook};

/// Encode a sheet sequence back into spreadsheet bytes.
///
/// The output is always an xlsx container regardless of the uploaded
/// variant, matching the download contract. Empty cells are not
/// materialized.
pub fn encode_workbook(workbook: &Workbook) -> Result<Vec<u8>> {
    let mut output = XlsxWorkbook::new();
    for sheet in &workbook.sheets {
        let worksheet = output.add_worksheet();
        worksheet
            .set_name(&sheet.name)
            .map_err(|error| encode_error(&sheet.name, &error))?;
        for (row_index, row) in sheet.rows.iter().enumerate() {
            for (col_index, cell) in row.iter().enumerate() {
                write_cell(worksheet, row_index as u32, col_index as u16, cell)
                    .map_err(|error| encode_error(&sheet.name, &error))?;
            }
        }
        debug!(sheet = %sheet.name, rows = sheet.rows.len(), "encoded sheet");
    }
    output
        .save_to_buffer()
        .map_err(|error| DeidError::Encode(error.to_string()))
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &CellValue,
) -> std::result::Result<(), XlsxError> {
    match cell {
        CellValue::Text(text) => worksheet.write_string(row, col, text).map(|_| ()),
        CellValue::Number(value) => worksheet.write_number(row, col, *value).map(|_| ()),
        CellValue::Bool(flag) => worksheet.write_boolean(row, col, *flag).map(|_| ()),
        CellValue::Empty => Ok(()),
    }
}

fn encode_error(sheet: &str, error: &XlsxError) -> DeidError {
    DeidError::Encode(format!("sheet `{sheet}`: {error}"))
}
