mod extractor;

pub use extractor::{COLUMNS, Column, extract_from_html, extract_records, record_from_cells};
