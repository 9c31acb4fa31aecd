use crate::error::{ApkFileError, Result};
use crate::models::FileRecord;
use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};

const ROW_SELECTOR: &str = ".pure-table tr";
const CELL_SELECTOR: &str = "td";

/// A column of the contents result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Path,
    Package,
    Branch,
    Repository,
    Architecture,
}

/// Position of each column in a result row.
pub const COLUMNS: [Column; 5] = [
    Column::Path,
    Column::Package,
    Column::Branch,
    Column::Repository,
    Column::Architecture,
];

impl Column {
    pub fn field_mut(self, record: &mut FileRecord) -> &mut String {
        match self {
            Column::Path => &mut record.path,
            Column::Package => &mut record.package,
            Column::Branch => &mut record.branch,
            Column::Repository => &mut record.repository,
            Column::Architecture => &mut record.architecture,
        }
    }
}

/// Parse a result page and extract its rows.
pub fn extract_from_html(body: &str) -> Result<Vec<FileRecord>> {
    let document = Html::parse_document(body);
    extract_records(&document)
}

/// Read every data row of the result table, in document order.
///
/// Rows without `td` cells (the header) are skipped. A missing table yields
/// no records rather than an error.
pub fn extract_records(document: &Html) -> Result<Vec<FileRecord>> {
    let rows = selector(ROW_SELECTOR)?;
    let cells = selector(CELL_SELECTOR)?;

    let records: Vec<FileRecord> = document
        .select(&rows)
        .filter_map(|row| read_row(row, &cells))
        .collect();

    debug!("Extracted {} records", records.len());
    Ok(records)
}

fn read_row(row: ElementRef<'_>, cells: &Selector) -> Option<FileRecord> {
    let values: Vec<String> = row
        .select(cells)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect();

    if values.is_empty() {
        return None;
    }

    Some(record_from_cells(values))
}

/// Map cell values onto a record by position.
///
/// Extra cells are dropped with a warning; missing cells leave their
/// fields empty.
pub fn record_from_cells(values: Vec<String>) -> FileRecord {
    let mut record = FileRecord::default();

    for (index, value) in values.into_iter().enumerate() {
        match COLUMNS.get(index) {
            Some(column) => *column.field_mut(&mut record) = value,
            None => warn!("Unmapped value for column {index} with value {value}"),
        }
    }

    record
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ApkFileError::Document(format!("invalid selector '{css}': {e}")))
}
