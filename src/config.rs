//! Chart configuration: the pipeline-relevant knobs and their defaults.

use crate::error::ChartError;
use crate::time::{parse_ymd, Language};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Configuration for the data-preparation pipeline.
///
/// Consumers usually supply a partial config over the wire; every field has a
/// serde default, so `{}` deserializes to [`ChartConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    /// Maximum amount of days displayed, even if the data sets go back
    /// further. The default of 183 is roughly half a year.
    pub max_days: u32,

    /// Display no less than this amount of days, even for very tiny data
    /// sets. Prevents very stretched small charts.
    pub min_days: u32,

    /// If all data sets end before "today", extend the window past the last
    /// data point by at most this many empty days, to show that some time
    /// has passed since the last play.
    pub max_end_padding_days: u32,

    /// Drop data sets with fewer than this many non-zero days in the window.
    pub min_values: usize,

    /// The chart's maximum value is never reported lower than this, so data
    /// sets with very low values don't look like they peak.
    pub min_max_plays: u32,

    /// Explicit window start (`YYYY-MM-DD`). Only honored together with
    /// [`ChartConfig::override_end_ymd`]; overrides all range inference.
    #[serde(deserialize_with = "de_opt_ymd")]
    pub override_start_ymd: Option<NaiveDate>,

    /// Explicit window end (`YYYY-MM-DD`). Only honored together with
    /// [`ChartConfig::override_start_ymd`].
    #[serde(deserialize_with = "de_opt_ymd")]
    pub override_end_ymd: Option<NaiveDate>,

    /// "Today" override (`YYYY-MM-DD`), for deterministic output in tests and
    /// for rendering historical snapshots. Defaults to the real current date.
    #[serde(deserialize_with = "de_opt_ymd")]
    pub today_ymd: Option<NaiveDate>,

    /// Label language; affects formatting only, never the data.
    pub language: Language,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            max_days: 183,
            min_days: 10,
            max_end_padding_days: 5,
            min_values: 2,
            min_max_plays: 4,
            override_start_ymd: None,
            override_end_ymd: None,
            today_ymd: None,
            language: Language::En,
        }
    }
}

impl ChartConfig {
    /// Check the config for internal consistency.
    ///
    /// Inconsistent configs are always rejected here rather than clamped, so
    /// every pipeline entry point fails the same way.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.min_days == 0 {
            return Err(ChartError::Config("minDays must be at least 1".into()));
        }
        if self.max_days < self.min_days {
            return Err(ChartError::Config(format!(
                "maxDays ({}) must not be less than minDays ({})",
                self.max_days, self.min_days
            )));
        }
        if let (Some(start), Some(end)) = (self.override_start_ymd, self.override_end_ymd) {
            if end < start {
                return Err(ChartError::Config(format!(
                    "overrideEndYmd ({end}) is before overrideStartYmd ({start})"
                )));
            }
        }
        Ok(())
    }
}

/// Serde helper: accept a missing field, `null`, or `""` as "unset", and
/// otherwise require a well-formed `YYYY-MM-DD` string. Web consumers send
/// the empty string for unset date options.
fn de_opt_ymd<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    match s.as_deref() {
        None | Some("") => Ok(None),
        Some(v) => parse_ymd(v).map(Some).map_err(serde::de::Error::custom),
    }
}
