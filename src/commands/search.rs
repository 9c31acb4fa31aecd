use crate::api::{ContentsClient, ContentsQuery};
use crate::config::SearchConfig;
use crate::error::Result;
use crate::models::FileRecord;
use crate::search::extract_from_html;
use comfy_table::{ColumnConstraint, Table, Width, presets::NOTHING};
use log::debug;
use std::io::{self, Write};

const HEADERS: [&str; 5] = ["FILE", "PACKAGE", "BRANCH", "REPOSITORY", "ARCHITECTURE"];
const MIN_FILE_COLUMN_WIDTH: u16 = 20;
const COLUMN_PADDING: (u16, u16) = (0, 3);
const LAST_COLUMN_PADDING: (u16, u16) = (0, 0);

pub struct SearchCommand<'a> {
    config: &'a SearchConfig,
    client: ContentsClient,
}

impl<'a> SearchCommand<'a> {
    pub fn new(config: &'a SearchConfig) -> Result<Self> {
        Ok(Self {
            config,
            client: ContentsClient::new(),
        })
    }

    pub fn with_client(mut self, client: ContentsClient) -> Self {
        self.client = client;
        self
    }

    pub fn execute(&self, file: &str) -> Result<()> {
        let records = self.search(file)?;
        write_table(&mut io::stdout().lock(), &records)
    }

    /// Query the contents search for `file` and return the matching rows.
    pub fn search(&self, file: &str) -> Result<Vec<FileRecord>> {
        let query = ContentsQuery::for_config(file, self.config);
        debug!(
            "Searching for file pattern {:?} in path pattern {:?}",
            query.file, query.path
        );

        let body = self.client.search(&query)?;
        extract_from_html(&body)
    }
}

/// Render records as aligned, borderless columns under a header line.
pub fn render_table(records: &[FileRecord]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(HEADERS.to_vec());

    for record in records {
        table.add_row(vec![
            record.path.as_str(),
            record.package.as_str(),
            record.branch.as_str(),
            record.repository.as_str(),
            record.architecture.as_str(),
        ]);
    }

    for column in table.column_iter_mut() {
        column.set_padding(COLUMN_PADDING);
    }
    if let Some(column) = table.column_mut(HEADERS.len() - 1) {
        column.set_padding(LAST_COLUMN_PADDING);
    }
    if let Some(column) = table.column_mut(0) {
        column.set_constraint(ColumnConstraint::LowerBoundary(Width::Fixed(
            MIN_FILE_COLUMN_WIDTH,
        )));
    }

    // Shorter values in the last column are still filled to its width
    table
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write the rendered table, treating a closed pipe (`apk-file bash | head`)
/// as the end of output.
pub fn write_table<W: Write>(out: &mut W, records: &[FileRecord]) -> Result<()> {
    let result = writeln!(out, "{}", render_table(records)).and_then(|()| out.flush());

    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Output closed early: {e}");
            Ok(())
        }
        other => other.map_err(Into::into),
    }
}
