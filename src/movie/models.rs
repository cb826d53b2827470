//! Data models for movie award records and producer intervals

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single row of the movie list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub year: i32,
    pub title: String,
    pub studios: String,
    /// Raw producer credit, possibly listing several names
    pub producers: String,
    pub winner: bool,
}

impl MovieRecord {
    pub fn new(
        year: i32,
        title: impl Into<String>,
        studios: impl Into<String>,
        producers: impl Into<String>,
        winner: bool,
    ) -> Self {
        Self {
            year,
            title: title.into(),
            studios: studios.into(),
            producers: producers.into(),
            winner,
        }
    }
}

/// One producer credited on one winning movie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProducerWin {
    pub year: i32,
    pub producer: String,
}

/// Win years per producer, iterated in the order producers were first seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProducerWinYears {
    entries: Vec<(String, Vec<i32>)>,
    index: HashMap<String, usize>,
}

impl ProducerWinYears {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a win year for `producer`, creating the entry on first sight
    pub fn push(&mut self, producer: &str, year: i32) {
        match self.index.get(producer) {
            Some(&position) => self.entries[position].1.push(year),
            None => {
                self.index.insert(producer.to_string(), self.entries.len());
                self.entries.push((producer.to_string(), vec![year]));
            }
        }
    }

    pub fn get(&self, producer: &str) -> Option<&[i32]> {
        self.index
            .get(producer)
            .map(|&position| self.entries[position].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[i32])> {
        self.entries
            .iter()
            .map(|(producer, years)| (producer.as_str(), years.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Gap between two consecutive wins of the same producer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerInterval {
    pub producer: String,
    /// Widened so the difference of any two `i32` years cannot overflow
    pub interval: i64,
    pub previous_win: i32,
    pub following_win: i32,
}

impl ProducerInterval {
    pub fn new(producer: impl Into<String>, previous_win: i32, following_win: i32) -> Self {
        Self {
            producer: producer.into(),
            interval: i64::from(following_win) - i64::from(previous_win),
            previous_win,
            following_win,
        }
    }
}

/// Producers with the shortest and the longest interval between wins
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardIntervalResult {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}
