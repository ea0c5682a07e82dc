//! The point-value index: every distinct (date, plays) combination across
//! all series, for cross-series hover lookups.
//!
//! When two tracks were played the same number of times on the same day,
//! their chart points coincide exactly; hovering that point should highlight
//! and list all of them. The index deduplicates such combinations under a
//! composite `date:plays` key and records which series exhibit each one.

use crate::error::ChartError;
use crate::models::{DataPoint, DataSet};
use crate::time::{format_ymd, parse_ymd};
use ahash::AHashMap;
use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// A distinct (date, plays) combination and the series that exhibit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointValue {
    pub date: NaiveDate,
    pub plays: u32,
    /// Indexes into the chart's data set list, in encounter order.
    pub indexes: Vec<usize>,
    pub value_key: String,
}

/// A resolved hover target: a point value joined with the titles of the
/// series that share it. This is the tooltip payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedValue {
    pub date: NaiveDate,
    pub plays: u32,
    pub indexes: Vec<usize>,
    pub value_key: String,
    pub titles: Vec<String>,
}

/// Encode a (date, plays) pair as its composite string key.
pub fn value_key(date: NaiveDate, plays: u32) -> String {
    format!("{}:{}", format_ymd(date), plays)
}

/// Decode a composite key back into its (date, plays) pair. Exact inverse of
/// [`value_key`]: the date part never contains `:`, so the first `:` splits.
pub fn value_from_key(key: &str) -> Result<DataPoint, ChartError> {
    let err = || ChartError::MalformedValueKey(key.to_string());
    let (date, plays) = key.split_once(':').ok_or_else(err)?;
    Ok(DataPoint {
        date: parse_ymd(date).map_err(|_| err())?,
        plays: plays.parse().map_err(|_| err())?,
    })
}

/// Deduplicated point values over all padded series, with O(1) key lookup.
#[derive(Debug, Clone, Default)]
pub struct PointValueIndex {
    values: Vec<PointValue>,
    slots: AHashMap<String, usize>,
}

impl PointValueIndex {
    /// Index every positive-plays point of every series. Zero days are
    /// padding; they carry no highlight semantics and are skipped.
    ///
    /// Values come out in first-seen order, which keeps the output
    /// deterministic for a given input.
    pub fn build<S: AsRef<[DataPoint]>>(padded_lists: &[S]) -> Self {
        let mut index = Self::default();

        for (series_index, padded) in padded_lists.iter().enumerate() {
            for point in padded.as_ref() {
                if point.plays == 0 {
                    continue;
                }

                let key = value_key(point.date, point.plays);
                match index.slots.get(&key) {
                    Some(&slot) => index.values[slot].indexes.push(series_index),
                    None => {
                        index.slots.insert(key.clone(), index.values.len());
                        index.values.push(PointValue {
                            date: point.date,
                            plays: point.plays,
                            indexes: vec![series_index],
                            value_key: key,
                        });
                    }
                }
            }
        }

        index
    }

    /// Look up a point value by its composite key.
    pub fn get(&self, key: &str) -> Option<&PointValue> {
        self.slots.get(key).map(|&slot| &self.values[slot])
    }

    /// All point values, in first-seen order.
    pub fn values(&self) -> &[PointValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Resolve a hovered key into its tooltip payload, joining the series
    /// indexes with their titles. `None` when the key is not in the index.
    pub fn highlighted(&self, key: &str, data_sets: &[DataSet]) -> Option<HighlightedValue> {
        self.get(key).map(|value| HighlightedValue {
            date: value.date,
            plays: value.plays,
            indexes: value.indexes.clone(),
            value_key: value.value_key.clone(),
            titles: value
                .indexes
                .iter()
                .filter_map(|&i| data_sets.get(i))
                .map(|ds| ds.title.clone())
                .collect(),
        })
    }
}

/// Serializes as the plain list of point values; the lookup map is a
/// runtime-only acceleration.
impl Serialize for PointValueIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_ymd(s).unwrap()
    }

    #[test]
    fn key_codec_is_an_exact_inverse() {
        let key = value_key(d("2022-05-08"), 5);
        assert_eq!(key, "2022-05-08:5");
        assert_eq!(value_from_key(&key).unwrap(), DataPoint::new(d("2022-05-08"), 5));

        assert!(value_from_key("2022-05-08").is_err());
        assert!(value_from_key("not-a-date:5").is_err());
        assert!(value_from_key("2022-05-08:many").is_err());
    }

    #[test]
    fn shared_combinations_collect_all_series_indexes() {
        let lists = vec![
            vec![DataPoint::new(d("2022-05-08"), 5), DataPoint::new(d("2022-05-09"), 2)],
            vec![DataPoint::new(d("2022-05-08"), 5)],
        ];
        let index = PointValueIndex::build(&lists);

        assert_eq!(index.len(), 2);
        let shared = index.get("2022-05-08:5").unwrap();
        assert_eq!(shared.indexes, vec![0, 1]);
        let solo = index.get("2022-05-09:2").unwrap();
        assert_eq!(solo.indexes, vec![0]);
    }

    #[test]
    fn zero_days_are_not_indexed() {
        let lists = vec![vec![
            DataPoint::new(d("2022-05-08"), 0),
            DataPoint::new(d("2022-05-09"), 1),
            DataPoint::new(d("2022-05-10"), 0),
        ]];
        let index = PointValueIndex::build(&lists);
        assert_eq!(index.len(), 1);
        assert!(index.get("2022-05-08:0").is_none());
    }

    #[test]
    fn values_keep_first_seen_order() {
        let lists = vec![
            vec![DataPoint::new(d("2022-05-09"), 2), DataPoint::new(d("2022-05-10"), 4)],
            vec![DataPoint::new(d("2022-05-08"), 7), DataPoint::new(d("2022-05-09"), 2)],
        ];
        let index = PointValueIndex::build(&lists);
        let keys: Vec<&str> = index.values().iter().map(|v| v.value_key.as_str()).collect();
        assert_eq!(keys, vec!["2022-05-09:2", "2022-05-10:4", "2022-05-08:7"]);
    }

    #[test]
    fn no_duplicate_keys_and_indexes_cover_positive_days() {
        let lists = vec![
            vec![DataPoint::new(d("2022-05-08"), 5), DataPoint::new(d("2022-05-09"), 5)],
            vec![DataPoint::new(d("2022-05-08"), 5)],
        ];
        let index = PointValueIndex::build(&lists);

        let mut seen = std::collections::HashSet::new();
        for value in index.values() {
            assert!(seen.insert(value.value_key.clone()), "duplicate key");
        }

        // Union of indexes-sets for series 1 is exactly its positive days.
        let dates_for_series_1: Vec<NaiveDate> = index
            .values()
            .iter()
            .filter(|v| v.indexes.contains(&1))
            .map(|v| v.date)
            .collect();
        assert_eq!(dates_for_series_1, vec![d("2022-05-08")]);
    }

    #[test]
    fn highlight_joins_titles() {
        let make_set = |title: &str| DataSet {
            title: title.into(),
            artists: None,
            url: None,
            data_points: vec![],
        };
        let sets = vec![make_set("First Track"), make_set("Second Track")];
        let lists = vec![
            vec![DataPoint::new(d("2022-05-08"), 5)],
            vec![DataPoint::new(d("2022-05-08"), 5)],
        ];
        let index = PointValueIndex::build(&lists);

        let hit = index.highlighted("2022-05-08:5", &sets).unwrap();
        assert_eq!(hit.titles, vec!["First Track", "Second Track"]);
        assert_eq!(hit.plays, 5);
        assert!(index.highlighted("2022-05-08:9", &sets).is_none());
    }
}
