//! Producer award interval aggregation
//!
//! Turns a list of movie records into the producers with the shortest and
//! longest gap between two consecutive wins. Every stage is a pure function
//! over borrowed input.

use std::collections::HashMap;
use tracing::debug;

use super::models::{
    AwardIntervalResult, MovieRecord, ProducerInterval, ProducerWin, ProducerWinYears,
};

/// Interval length to the intervals of that length, in received order
pub type IntervalBuckets = HashMap<i64, Vec<ProducerInterval>>;

const AND_SEPARATOR: &str = " and ";

/// Compute the min and max award interval buckets for `records`
pub fn compute_award_intervals(records: &[MovieRecord]) -> AwardIntervalResult {
    let winners = filter_winners(records);
    let wins = producer_wins(&winners);
    let grouped = group_years_by_producer(&wins);
    let intervals = producer_intervals(&grouped);
    let buckets = group_by_interval(&intervals);

    debug!(
        "Computed {} intervals for {} producers across {} winning movies",
        intervals.len(),
        grouped.len(),
        winners.len()
    );

    select_extremes(&buckets)
}

/// Split a raw producer credit into individual names
///
/// Only the exact token `" and "` is treated as a separator besides commas,
/// so names like "Anderson" are left intact.
pub fn split_producer_names(producers: &str) -> Vec<String> {
    producers
        .replace(AND_SEPARATOR, ",")
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn filter_winners(records: &[MovieRecord]) -> Vec<&MovieRecord> {
    records.iter().filter(|record| record.winner).collect()
}

/// Flatten movies into one entry per credited producer
pub fn producer_wins(movies: &[&MovieRecord]) -> Vec<ProducerWin> {
    movies
        .iter()
        .flat_map(|movie| {
            split_producer_names(&movie.producers)
                .into_iter()
                .map(move |producer| ProducerWin {
                    year: movie.year,
                    producer,
                })
        })
        .collect()
}

/// Group win years by producer without sorting them
pub fn group_years_by_producer(wins: &[ProducerWin]) -> ProducerWinYears {
    let mut grouped = ProducerWinYears::new();
    for win in wins {
        grouped.push(&win.producer, win.year);
    }
    grouped
}

/// Intervals between chronologically consecutive wins of each producer
pub fn producer_intervals(grouped: &ProducerWinYears) -> Vec<ProducerInterval> {
    let mut intervals = Vec::new();

    for (producer, years) in grouped.iter() {
        if years.len() < 2 {
            continue;
        }

        let mut sorted = years.to_vec();
        sorted.sort();

        intervals.extend(
            sorted
                .windows(2)
                .map(|pair| ProducerInterval::new(producer, pair[0], pair[1])),
        );
    }

    intervals
}

pub fn group_by_interval(intervals: &[ProducerInterval]) -> IntervalBuckets {
    let mut buckets = IntervalBuckets::new();
    for interval in intervals {
        buckets
            .entry(interval.interval)
            .or_default()
            .push(interval.clone());
    }
    buckets
}

/// Pick the buckets with the numerically smallest and largest keys
pub fn select_extremes(buckets: &IntervalBuckets) -> AwardIntervalResult {
    let mut keys: Vec<i64> = buckets.keys().copied().collect();
    keys.sort_unstable();

    let bucket_at = |key: Option<&i64>| {
        key.and_then(|key| buckets.get(key))
            .cloned()
            .unwrap_or_default()
    };

    AwardIntervalResult {
        min: bucket_at(keys.first()),
        max: bucket_at(keys.last()),
    }
}
