//! Data model: play-count observations, data sets, and the compact wire form.

use crate::config::ChartConfig;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day's play-count observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub plays: u32,
}

impl DataPoint {
    pub fn new(date: NaiveDate, plays: u32) -> Self {
        Self { date, plays }
    }
}

/// Compact wire form of a data point: a `[date, plays]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompressedDataPoint(pub NaiveDate, pub u32);

impl From<CompressedDataPoint> for DataPoint {
    fn from(p: CompressedDataPoint) -> Self {
        Self {
            date: p.0,
            plays: p.1,
        }
    }
}

/// A musical artist credited on a track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
    pub id: u64,
}

/// The artist relationships a track can carry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackArtists {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main: Option<Vec<TrackArtist>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with: Option<Vec<TrackArtist>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feat: Option<Vec<TrackArtist>>,
    /// "X as Y" alias credit.
    #[serde(rename = "as", skip_serializing_if = "Option::is_none")]
    pub alias: Option<TrackArtist>,
}

/// One track's ordered play-count history.
///
/// Identity is positional: a data set is referenced everywhere (point-value
/// indexes, highlight state) by its index in the input list. Dates in
/// `data_points` are expected to be strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSet {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artists: Option<TrackArtists>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub data_points: Vec<DataPoint>,
}

/// A data set as it arrives over the wire, with compressed data points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressedDataSet {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artists: Option<TrackArtists>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub data_points: Vec<CompressedDataPoint>,
}

impl From<CompressedDataSet> for DataSet {
    fn from(ds: CompressedDataSet) -> Self {
        Self {
            title: ds.title,
            artists: ds.artists,
            url: ds.url,
            data_points: ds.data_points.into_iter().map(DataPoint::from).collect(),
        }
    }
}

/// The full input envelope a consumer supplies: a partial config plus the
/// compressed data sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInput {
    #[serde(default)]
    pub config: ChartConfig,
    pub data_sets: Vec<CompressedDataSet>,
}

impl ChartInput {
    /// Expand the compressed data points, yielding pipeline-ready inputs.
    pub fn unpack(self) -> (ChartConfig, Vec<DataSet>) {
        let data_sets = self.data_sets.into_iter().map(DataSet::from).collect();
        (self.config, data_sets)
    }
}
