//! Win-interval report per producer.
//!
//! Records are ordered by year, grouped by the raw `producers` string, and each
//! group whose rows are all wins yields one entry. The combined entries are
//! sorted by interval and split in half into `min` and `max`.

use std::collections::BTreeMap;

use awards_core::AwardRecord;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One producer group's line in the report.
///
/// `interval` is the largest gap in the group, `previous_win` the year of the
/// record with the smallest gap, `following_win` the year of the record with
/// the largest gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProducerIntervalEntry {
    pub producer: String,
    pub interval: i32,
    pub previous_win: i32,
    pub following_win: i32,
}

/// The lower and upper halves of the interval-sorted entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProducerIntervalReport {
    pub min: Vec<ProducerIntervalEntry>,
    pub max: Vec<ProducerIntervalEntry>,
}

impl ProducerIntervalReport {
    /// Split interval-sorted entries at `len / 2`; an odd extra lands in `max`.
    fn split(mut entries: Vec<ProducerIntervalEntry>) -> Self {
        let max = entries.split_off(entries.len() / 2);
        Self { min: entries, max }
    }

    /// Total entries across both halves.
    pub fn len(&self) -> usize {
        self.min.len() + self.max.len()
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}

/// Build the report from the full table. Total over any input.
pub fn producer_intervals(records: &[AwardRecord]) -> ProducerIntervalReport {
    let mut by_year: Vec<&AwardRecord> = records.iter().collect();
    by_year.sort_by_key(|r| r.year);

    let mut groups: BTreeMap<&str, Vec<&AwardRecord>> = BTreeMap::new();
    for record in by_year {
        groups.entry(record.producers.as_str()).or_default().push(record);
    }

    let mut entries: Vec<ProducerIntervalEntry> = groups
        .into_iter()
        .filter_map(|(producer, group)| group_entry(producer, &group))
        .collect();
    entries.sort_by_key(|e| e.interval);

    ProducerIntervalReport::split(entries)
}

/// `group` is already in year order. A single non-winning row disqualifies it.
fn group_entry(producer: &str, group: &[&AwardRecord]) -> Option<ProducerIntervalEntry> {
    if group.len() < 2 || !group.iter().all(|r| r.winner) {
        return None;
    }

    // Gap to the previous row in the group; the first row has none.
    let gaps: Vec<i32> = std::iter::once(0)
        .chain(group.windows(2).map(|pair| pair[1].year - pair[0].year))
        .collect();

    let min_at = first_extreme(&gaps, |candidate, best| candidate < best);
    let max_at = first_extreme(&gaps, |candidate, best| candidate > best);

    Some(ProducerIntervalEntry {
        producer: producer.to_string(),
        interval: gaps[max_at],
        previous_win: group[min_at].year,
        following_win: group[max_at].year,
    })
}

/// Index of the first value that no later value beats.
fn first_extreme(values: &[i32], beats: impl Fn(i32, i32) -> bool) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if beats(v, values[best]) {
            best = i;
        }
    }
    best
}
