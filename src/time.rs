//! Gregorian day arithmetic and locale-aware date labels.
//!
//! Everything here works on [`chrono::NaiveDate`]: a plain calendar date with
//! no time-of-day and no timezone, so day offsets can never be skewed by DST.
//! The `YYYY-MM-DD` string form is the wire format used throughout the crate.

use crate::error::ChartError;
use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_EN_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_DA: [&str; 12] = [
    "januar",
    "februar",
    "marts",
    "april",
    "maj",
    "juni",
    "juli",
    "august",
    "september",
    "oktober",
    "november",
    "december",
];

const MONTHS_DA_SHORT: [&str; 12] = [
    "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

/// Display language for month and date labels.
///
/// Adding a language means adding two month-name tables and a branch in
/// [`format_full_date`]; nothing else in the crate is locale-sensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Da,
}

impl Language {
    fn month_names(self, short: bool) -> &'static [&'static str; 12] {
        match (self, short) {
            (Language::En, false) => &MONTHS_EN,
            (Language::En, true) => &MONTHS_EN_SHORT,
            (Language::Da, false) => &MONTHS_DA,
            (Language::Da, true) => &MONTHS_DA_SHORT,
        }
    }
}

/// How much room an axis tick label has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelStyle {
    /// Long month name, year appended when it changes.
    #[default]
    Normal,
    /// Abbreviated month name, year appended when it changes.
    Small,
    /// Year only when it changes, otherwise the abbreviated month name.
    Tiny,
}

impl LabelStyle {
    /// Pick a style dense enough for the number of month ticks on the axis.
    pub fn for_month_count(count: usize) -> Self {
        if count >= 20 {
            LabelStyle::Tiny
        } else if count >= 12 {
            LabelStyle::Small
        } else {
            LabelStyle::Normal
        }
    }
}

/// One calendar month touched by a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthInfo {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    /// First day of the month, for axis positioning.
    pub first_day: NaiveDate,
}

/// Parse a strict `YYYY-MM-DD` string.
pub fn parse_ymd(s: &str) -> Result<NaiveDate, ChartError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ChartError::MalformedDate(s.to_string()))
}

/// Format a date as `YYYY-MM-DD`. Exact inverse of [`parse_ymd`].
pub fn format_ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Offset a date by a number of days, saturating at the representable range.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(TimeDelta::days(days)).unwrap_or(if days >= 0 {
        NaiveDate::MAX
    } else {
        NaiveDate::MIN
    })
}

/// The day after `date`.
pub fn next_day(date: NaiveDate) -> NaiveDate {
    add_days(date, 1)
}

/// The day before `date`.
pub fn prev_day(date: NaiveDate) -> NaiveDate {
    add_days(date, -1)
}

/// Absolute number of days between two dates.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

/// Today's local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).expect("month in 1..=12")
}

/// Every calendar month touched by the inclusive range `[first, last]`,
/// in chronological order. Empty when `last < first`.
pub fn months_between(first: NaiveDate, last: NaiveDate) -> Vec<MonthInfo> {
    let mut out = Vec::new();
    if last < first {
        return out;
    }

    let (mut year, mut month) = (first.year(), first.month());
    loop {
        out.push(MonthInfo {
            year,
            month,
            first_day: first_of_month(year, month),
        });

        if (year, month) == (last.year(), last.month()) {
            return out;
        }

        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
    }
}

/// Render a time-axis tick label for a month.
///
/// `month` is 1-based and must be in `1..=12` (as produced by
/// [`months_between`]); anything else is a caller error and panics.
/// `prev_year` is the year of the preceding tick; the year is only appended
/// (or, for [`LabelStyle::Tiny`], shown at all) when it differs. Pass `0` to
/// always show the year.
pub fn format_month_label(
    year: i32,
    month: u32,
    prev_year: i32,
    language: Language,
    style: LabelStyle,
) -> String {
    let short = !matches!(style, LabelStyle::Normal);
    let name = month
        .checked_sub(1)
        .and_then(|i| language.month_names(short).get(i as usize))
        .unwrap_or_else(|| panic!("month {month} out of range 1..=12"));

    match style {
        LabelStyle::Normal | LabelStyle::Small => {
            if year != prev_year {
                format!("{name} {year}")
            } else {
                name.to_string()
            }
        }
        LabelStyle::Tiny => {
            if year != prev_year {
                year.to_string()
            } else {
                name.to_string()
            }
        }
    }
}

/// Long-form date for tooltips, e.g. `May 8, 2022` / `8. maj 2022`.
pub fn format_full_date(date: NaiveDate, language: Language) -> String {
    let name = language.month_names(false)[(date.month() - 1) as usize];

    match language {
        Language::Da => format!("{}. {} {}", date.day(), name, date.year()),
        Language::En => format!("{} {}, {}", name, date.day(), date.year()),
    }
}
