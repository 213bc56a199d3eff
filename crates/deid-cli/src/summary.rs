use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use deid_model::MaskMode;

use crate::types::AnonymizeResult;

pub fn print_summary(result: &AnonymizeResult) {
    println!("Input: {}", result.input.display());
    println!("Output: {}", result.output_path.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Mode"),
        header_cell("Rows"),
        header_cell("Masked columns"),
        header_cell("Masked cells"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for sheet in &result.report.sheets {
        table.add_row(vec![
            Cell::new(&sheet.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            mode_cell(sheet.mode),
            Cell::new(sheet.data_rows),
            Cell::new(sheet.masked_columns),
            Cell::new(sheet.masked_cells),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!(
            "{} identifiers",
            result.report.identifiers_collected
        )),
        Cell::new(result.report.total_data_rows()).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.report.total_masked_cells()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn mode_cell(mode: MaskMode) -> Cell {
    match mode {
        MaskMode::IdentifierColumn => Cell::new("identifier"),
        MaskMode::SyntheticPerRow => Cell::new("synthetic"),
        MaskMode::SubjectKeyCollapse => Cell::new("subject key"),
        MaskMode::Passthrough => dim_cell("passthrough"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
