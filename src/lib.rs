//! plays-chart
//!
//! A lightweight Rust library for turning sparse, irregularly-dated play-count
//! records into dense, chart-ready time series. Pairs with the `plays-chart`
//! CLI.
//!
//! ### Features
//! - Resolve one shared date window across all series, with min/max length
//!   and end-padding rules
//! - Pad each series to one entry per calendar day, zero-filling gaps
//! - Drop series too sparse to draw, split the rest into drawable segments
//!   around long zero runs
//! - Index every distinct (date, plays) combination for cross-series hover
//!   lookups
//! - Locale-aware month and date labels (English, Danish)
//!
//! ### Example
//! ```
//! use plays_chart::{chart_facts, ChartConfig, DataPoint, DataSet};
//! use chrono::NaiveDate;
//!
//! let date = |s: &str| s.parse::<NaiveDate>().unwrap();
//! let track = DataSet {
//!     title: "Example Track".into(),
//!     artists: None,
//!     url: None,
//!     data_points: vec![
//!         DataPoint::new(date("2022-05-06"), 4),
//!         DataPoint::new(date("2022-05-08"), 7),
//!     ],
//! };
//! let config = ChartConfig {
//!     today_ymd: Some(date("2022-05-10")),
//!     ..ChartConfig::default()
//! };
//!
//! let facts = chart_facts(vec![track], &config)?.expect("chart has data");
//! assert_eq!(facts.data_sets.len(), 1);
//! assert_eq!(facts.total_days, 10);
//! # Ok::<(), plays_chart::ChartError>(())
//! ```

pub mod config;
pub mod error;
pub mod facts;
pub mod models;
pub mod pad;
pub mod point_values;
pub mod range;
pub mod segment;
pub mod time;

pub use config::ChartConfig;
pub use error::ChartError;
pub use facts::{chart_facts, ChartFacts};
pub use models::{ChartInput, CompressedDataPoint, CompressedDataSet, DataPoint, DataSet};
pub use point_values::{HighlightedValue, PointValue, PointValueIndex};
pub use range::{resolve_window, ChartWindow};
pub use time::Language;
