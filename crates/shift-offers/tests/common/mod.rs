#![allow(dead_code)]

use rust_xlsxwriter::{Format, Workbook};
use shift_offers::offers::OfferColumn;
use std::path::{Path, PathBuf};

/// Excel serial for 2024-01-01 00:00.
pub const JAN_1_2024: f64 = 45292.0;
/// Excel serial for 2024-02-01 00:00.
pub const FEB_1_2024: f64 = 45323.0;

#[derive(Debug, Clone)]
pub enum Cell {
    Blank,
    Text(String),
    Number(f64),
    Date(f64),
    Bool(bool),
}

pub fn text(value: &str) -> Cell {
    Cell::Text(value.to_string())
}

/// Builder for one spreadsheet row; unset columns stay blank.
#[derive(Debug, Clone)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn offer(shift: &str, worker: &str, workplace: &str) -> Self {
        let mut cells = vec![Cell::Blank; OfferColumn::COUNT];
        cells[OfferColumn::ShiftId as usize] = text(shift);
        cells[OfferColumn::WorkerId as usize] = text(worker);
        cells[OfferColumn::WorkplaceId as usize] = text(workplace);
        Self { cells }
    }

    pub fn blank() -> Self {
        Self {
            cells: vec![Cell::Blank; OfferColumn::COUNT],
        }
    }

    pub fn set(mut self, column: OfferColumn, cell: Cell) -> Self {
        self.cells[column as usize] = cell;
        self
    }

    pub fn truncated(mut self, width: usize) -> Self {
        self.cells.truncate(width);
        self
    }
}

pub fn header() -> Vec<Cell> {
    OfferColumn::ordered()
        .into_iter()
        .map(|column| text(column.label()))
        .collect()
}

pub fn workbook_bytes(rows: &[Row]) -> Vec<u8> {
    workbook_with_header(header(), rows)
}

pub fn workbook_with_header(header: Vec<Cell>, rows: &[Row]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");
    {
        let worksheet = workbook.add_worksheet();
        let all_rows = std::iter::once(header).chain(rows.iter().map(|row| row.cells.clone()));
        for (row_index, cells) in all_rows.enumerate() {
            let row = row_index as u32;
            for (col_index, cell) in cells.iter().enumerate() {
                let col = col_index as u16;
                match cell {
                    Cell::Blank => {}
                    Cell::Text(value) => {
                        worksheet.write_string(row, col, value).expect("write text");
                    }
                    Cell::Number(value) => {
                        worksheet.write_number(row, col, *value).expect("write number");
                    }
                    Cell::Date(serial) => {
                        worksheet
                            .write_number_with_format(row, col, *serial, &date_format)
                            .expect("write date");
                    }
                    Cell::Bool(value) => {
                        worksheet.write_boolean(row, col, *value).expect("write bool");
                    }
                }
            }
        }
    }
    workbook.save_to_buffer().expect("workbook serializes")
}

pub fn write_workbook(dir: &Path, name: &str, rows: &[Row]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, workbook_bytes(rows)).expect("fixture written");
    path
}
