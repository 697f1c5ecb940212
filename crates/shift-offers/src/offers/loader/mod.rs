mod cell;
mod schema;

use crate::offers::domain::{OfferRecord, OfferTable};
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::{debug, info};

use cell::RawCell;
use schema::CoercionStats;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Csv(csv::Error),
    Workbook(calamine::Error),
    NoWorksheet,
    Schema {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "failed to read offer export: {}", err),
            LoadError::Csv(err) => write!(f, "invalid offer CSV data: {}", err),
            LoadError::Workbook(err) => write!(f, "invalid offer workbook: {}", err),
            LoadError::NoWorksheet => write!(f, "offer workbook contains no worksheet"),
            LoadError::Schema {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} columns but the offer schema expects {}",
                row, found, expected
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Csv(err) => Some(err),
            LoadError::Workbook(err) => Some(err),
            LoadError::NoWorksheet | LoadError::Schema { .. } => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<calamine::Error> for LoadError {
    fn from(err: calamine::Error) -> Self {
        Self::Workbook(err)
    }
}

/// Reads shift-offer exports into an [`OfferTable`].
///
/// The first row of the source is a header and is skipped; the remaining
/// rows are mapped onto the fifteen offer columns by position. Timestamp
/// cells that cannot be parsed are loaded as missing.
pub struct OfferLoader;

impl OfferLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<OfferTable, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;

        let table = if is_csv(path) {
            Self::from_csv_reader(bytes.as_slice())?
        } else {
            Self::from_workbook_reader(Cursor::new(bytes.as_slice()))?
        };

        info!(path = %path.display(), rows = table.len(), "loaded shift offers");
        Ok(table)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<OfferTable, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let header_width = csv_reader.headers()?.len();
        if header_width == 0 {
            return Ok(OfferTable::default());
        }
        schema::check_width(1, header_width)?;

        let mut stats = CoercionStats::default();
        let mut records = Vec::new();
        for (index, result) in csv_reader.records().enumerate() {
            let row = result?;
            schema::check_width(index + 2, row.len())?;
            let cells: Vec<RawCell> = row.iter().map(RawCell::from_text).collect();
            if cells.iter().all(RawCell::is_empty) {
                continue;
            }
            records.push(schema::build_record(&cells, &mut stats));
        }

        Ok(finish(records, stats))
    }

    pub fn from_workbook_reader<RS>(reader: RS) -> Result<OfferTable, LoadError>
    where
        RS: Read + Seek + Clone,
    {
        let mut workbook = open_workbook_auto_from_rs(reader)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(LoadError::NoWorksheet)??;
        records_from_range(&range)
    }
}

fn records_from_range(range: &Range<Data>) -> Result<OfferTable, LoadError> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        debug!("offer worksheet is empty");
        return Ok(OfferTable::default());
    };
    schema::check_width(1, header.len())?;

    let mut stats = CoercionStats::default();
    let mut records = Vec::new();
    for (index, row) in rows.enumerate() {
        schema::check_width(index + 2, row.len())?;
        let cells: Vec<RawCell> = row.iter().map(RawCell::from).collect();
        if cells.iter().all(RawCell::is_empty) {
            continue;
        }
        records.push(schema::build_record(&cells, &mut stats));
    }

    Ok(finish(records, stats))
}

fn finish(records: Vec<OfferRecord>, stats: CoercionStats) -> OfferTable {
    if stats.unparsed_timestamps > 0 {
        debug!(
            unparsed = stats.unparsed_timestamps,
            "timestamp cells coerced to missing"
        );
    }
    OfferTable::new(records)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
