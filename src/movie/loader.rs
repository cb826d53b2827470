//! CSV ingestion for the movie list

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use super::models::MovieRecord;
use crate::error::{Error, Result};

const DELIMITER: u8 = b';';

/// Accepted calendar years, inclusive
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Raw row as it appears in the file, before normalization
#[derive(Debug, Deserialize)]
struct CsvRow {
    year: String,
    title: String,
    studios: String,
    producers: String,
    #[serde(default)]
    winner: Option<String>,
}

impl CsvRow {
    fn into_record(self, line: u64) -> Result<MovieRecord> {
        let year = self.year.parse::<i32>().map_err(|e| {
            Error::Parse(format!("Invalid year '{}' on line {}: {}", self.year, line, e))
        })?;

        if !YEAR_RANGE.contains(&year) {
            return Err(Error::Parse(format!(
                "Year {} on line {} is outside {}..={}",
                year,
                line,
                YEAR_RANGE.start(),
                YEAR_RANGE.end()
            )));
        }

        let winner = self
            .winner
            .as_deref()
            .is_some_and(|value| value.eq_ignore_ascii_case("yes"));

        Ok(MovieRecord {
            year,
            title: self.title,
            studios: self.studios,
            producers: self.producers,
            winner,
        })
    }
}

/// Load movie records from a `;`-delimited CSV file with a header row
pub fn load_movies_from_path(path: impl AsRef<Path>) -> Result<Vec<MovieRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to open movie list {}: {}", path.display(), e),
        ))
    })?;

    let movies = load_movies_from_reader(file)?;
    debug!("Parsed {} movies from {}", movies.len(), path.display());
    Ok(movies)
}

pub fn load_movies_from_reader<R: Read>(reader: R) -> Result<Vec<MovieRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut record = csv::StringRecord::new();
    let mut movies = Vec::new();

    while reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |position| position.line());
        let row: CsvRow = record.deserialize(Some(&headers))?;
        movies.push(row.into_record(line)?);
    }

    Ok(movies)
}
