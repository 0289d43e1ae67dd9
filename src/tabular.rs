//! Flattening of `.xlsx` exports into rows of strings.

use bytes::Bytes;
use std::io::Cursor;

/// Rows of cells, each cell as the workbook renders it.
pub type Table = Vec<Vec<String>>;

/// The bytes are not a workbook which can be read.
#[derive(thiserror::Error, Debug)]
#[error("cannot read workbook: {0}")]
pub struct UnreadableWorkbook(String);

/// Read every worksheet of a workbook and concatenate their rows in file order.
///
/// No header detection or type inference is done. A cell becomes the text
/// its number format renders it as, so dates and percentages appear the way
/// a spreadsheet program shows them. Rows and columns are counted from `A1`,
/// blank cells up to the last used row and column of a sheet become empty
/// strings.
pub fn extract(workbook: Bytes) -> Result<Table, UnreadableWorkbook> {
    let book = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(workbook), true)
        .map_err(|e| UnreadableWorkbook(e.to_string()))?;
    let mut table = Table::new();
    for sheet in book.get_sheet_collection() {
        let (last_col, last_row) = sheet.get_highest_column_and_row();
        table.extend((1..=last_row).map(|row| {
            (1..=last_col)
                .map(|col| sheet.get_formatted_value((col, row)))
                .collect::<Vec<_>>()
        }));
    }
    Ok(table)
}
