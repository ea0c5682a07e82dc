//! Range resolution: one shared date window for all series in a chart.

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::models::DataPoint;
use crate::time::{add_days, days_between, next_day, prev_day, today};
use chrono::NaiveDate;
use serde::Serialize;

/// The inclusive date range the chart displays. Invariant: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl ChartWindow {
    /// Days between the bounds; the window covers `total_days() + 1` dates.
    pub fn total_days(&self) -> i64 {
        days_between(self.start_date, self.end_date)
    }

    /// Every date in the window, in order. The iterator owns its bounds and
    /// outlives the window borrow.
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let (start, end) = (self.start_date, self.end_date);
        std::iter::successors(Some(start), move |&d| {
            if d < end { Some(next_day(d)) } else { None }
        })
    }
}

/// Resolve the shared `[start, end]` window for a list of raw series.
///
/// With both override dates set, the window is taken verbatim. Otherwise the
/// window is derived from the overall earliest and latest observations:
///
/// - the end extends up to `max_end_padding_days` past the last observation,
///   but never past "today";
/// - the start lands one lead-in day before the earliest observation, pushed
///   later if that would exceed `max_days` and earlier if the window would
///   fall short of `min_days`.
///
/// Returns `Ok(None)` when no series has any data points: nothing to render.
pub fn resolve_window<S: AsRef<[DataPoint]>>(
    lists: &[S],
    config: &ChartConfig,
) -> Result<Option<ChartWindow>, ChartError> {
    config.validate()?;

    if let (Some(start_date), Some(end_date)) = (config.override_start_ymd, config.override_end_ymd)
    {
        return Ok(Some(ChartWindow {
            start_date,
            end_date,
        }));
    }

    // Series dates are strictly increasing, so first/last entries are the extremes.
    let earliest = lists
        .iter()
        .filter_map(|l| l.as_ref().first())
        .map(|p| p.date)
        .min();
    let latest = lists
        .iter()
        .filter_map(|l| l.as_ref().last())
        .map(|p| p.date)
        .max();
    let (Some(earliest), Some(latest)) = (earliest, latest) else {
        return Ok(None);
    };

    let today = config.today_ymd.unwrap_or_else(today);

    // End padding is only drawn while it stays within scope; the hard "today"
    // cutoff is visualized by the padding's absence.
    let end_date = add_days(latest, i64::from(config.max_end_padding_days)).min(today);

    let min_days_ago = add_days(end_date, -i64::from(config.min_days));
    let max_days_ago = add_days(end_date, -i64::from(config.max_days));

    // One lead-in day before the first observation gives the area fill a
    // taper; max/min nesting keeps the window length within [min, max] days.
    let start_date = min_days_ago.min(max_days_ago.max(prev_day(earliest)));

    Ok(Some(ChartWindow {
        start_date,
        end_date,
    }))
}
