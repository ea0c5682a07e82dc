//! Series padding and filtering: from sparse observations to dense,
//! date-complete lists, minus the series too sparse to draw.

use crate::models::{DataPoint, DataSet};
use crate::range::ChartWindow;
use ahash::AHashMap;
use chrono::NaiveDate;

/// Expand a sparse series into one entry per calendar day of the window,
/// filling missing days with zero plays.
///
/// Days outside the window are cut off. Duplicate dates are a caller error;
/// the last occurrence wins. Returns `None` for an empty input series, which
/// is distinct from a series that pads to all zeros: the former has no data
/// at all and is excluded from rendering.
pub fn pad_series(points: &[DataPoint], window: &ChartWindow) -> Option<Vec<DataPoint>> {
    if points.is_empty() {
        return None;
    }

    let mut plays_by_date: AHashMap<NaiveDate, u32> = AHashMap::with_capacity(points.len());
    for p in points {
        plays_by_date.insert(p.date, p.plays);
    }

    Some(
        window
            .iter_days()
            .map(|date| DataPoint {
                date,
                plays: plays_by_date.get(&date).copied().unwrap_or(0),
            })
            .collect(),
    )
}

/// Drop data sets whose padded series has fewer than `min_values` non-zero
/// days, keeping sets and padded lists in lockstep and in original order.
///
/// A series with one or two plays somewhere in the window is hard to tell
/// from noise and only clutters the legend.
pub fn filter_data_sets(
    data_sets: Vec<DataSet>,
    padded_lists: Vec<Vec<DataPoint>>,
    min_values: usize,
) -> (Vec<DataSet>, Vec<Vec<DataPoint>>) {
    debug_assert_eq!(data_sets.len(), padded_lists.len());

    let mut kept_sets = Vec::with_capacity(data_sets.len());
    let mut kept_lists = Vec::with_capacity(padded_lists.len());

    for (data_set, padded) in data_sets.into_iter().zip(padded_lists) {
        let values = padded.iter().filter(|p| p.plays > 0).count();
        if values >= min_values {
            kept_sets.push(data_set);
            kept_lists.push(padded);
        }
    }

    (kept_sets, kept_lists)
}
