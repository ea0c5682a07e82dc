//! The pipeline driver: raw data sets in, chart-ready facts out.

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::models::{DataPoint, DataSet};
use crate::pad::{filter_data_sets, pad_series};
use crate::point_values::PointValueIndex;
use crate::range::resolve_window;
use crate::segment::segments;
use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

/// Everything a renderer needs, as plain data: the kept data sets, their
/// dense padded series, per-series drawable segments, the point-value index,
/// and the resolved scope of the chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartFacts {
    /// Data sets that survived padding and filtering, original order.
    pub data_sets: Vec<DataSet>,
    /// One dense, date-complete list per kept data set, same order.
    pub data_point_lists: Vec<Vec<DataPoint>>,
    /// Drawable segments per kept data set, same order.
    pub segments: Vec<Vec<Vec<DataPoint>>>,
    /// Distinct (date, plays) combinations across all kept series.
    pub values: PointValueIndex,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Days between the window bounds; the chart spans `total_days + 1` dates.
    pub total_days: i64,
    /// Highest play count in the window, floored at `min_max_plays`.
    pub max_value: u32,
}

/// Run the full preparation pipeline: resolve the shared window, pad each
/// series, drop empty and too-sparse series (together with their data sets),
/// then derive segments, point values, and the chart scope.
///
/// Returns `Ok(None)` when there is nothing to render: no input, no series
/// with any data points, or nothing left after filtering. The computation is
/// pure; callers re-invoke it whenever inputs change and may memoize.
pub fn chart_facts(
    data_sets: Vec<DataSet>,
    config: &ChartConfig,
) -> Result<Option<ChartFacts>, ChartError> {
    config.validate()?;

    let window = {
        let lists: Vec<&[DataPoint]> =
            data_sets.iter().map(|ds| ds.data_points.as_slice()).collect();
        resolve_window(&lists, config)?
    };
    let Some(window) = window else {
        debug!("no data points in any series; nothing to render");
        return Ok(None);
    };
    debug!(
        "resolved window {} to {} ({} days)",
        window.start_date,
        window.end_date,
        window.total_days() + 1
    );

    // Pad each series; series with no data at all drop out here, taking
    // their data sets with them so indexes stay aligned.
    let total = data_sets.len();
    let mut padded_sets = Vec::with_capacity(total);
    let mut padded_lists = Vec::with_capacity(total);
    for data_set in data_sets {
        if let Some(padded) = pad_series(&data_set.data_points, &window) {
            padded_sets.push(data_set);
            padded_lists.push(padded);
        }
    }

    let (data_sets, data_point_lists) =
        filter_data_sets(padded_sets, padded_lists, config.min_values);
    debug!("kept {} of {} data sets after filtering", data_sets.len(), total);

    if data_sets.is_empty() {
        return Ok(None);
    }

    let segments = data_point_lists.iter().map(|list| segments(list)).collect();
    let values = PointValueIndex::build(&data_point_lists);

    let max_value = data_point_lists
        .iter()
        .flatten()
        .map(|p| p.plays)
        .max()
        .unwrap_or(0)
        .max(config.min_max_plays);

    Ok(Some(ChartFacts {
        data_sets,
        data_point_lists,
        segments,
        values,
        start_date: window.start_date,
        end_date: window.end_date,
        total_days: window.total_days(),
        max_value,
    }))
}
