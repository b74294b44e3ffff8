//! Declarative configuration tree committed to a graphics engine in one piece.
//!
//! Field names serialize in camelCase and absent optionals are omitted, so
//! the JSON form can be handed to a web engine as-is.

mod components;
mod series;

pub use components::{
    AreaStyle, Axis, AxisKind, AxisLabel, AxisPointer, AxisPointerKind, AxisPosition, AxisStroke,
    Grid, Legend, LineStyle, Orient, RadarCoordinate, RadarIndicator, SplitArea, TextStyle, Title,
    Tooltip, TooltipFormatter, TooltipTrigger, VisualMap, VisualMapKind,
};
pub use series::{
    BarDatum, BarSeries, BorderRadius, Emphasis, EmphasisFocus, HeatmapDatum, HeatmapSeries,
    ItemStyle, Label, LineSeries, PieDatum, PieSeries, RadarDatum, RadarSeries, Series,
};

use serde::{Deserialize, Serialize};

use crate::core::Palette;
use crate::error::{ChartError, ChartResult};

/// Complete description of one plot.
///
/// The default value is the blank configuration: no components, no series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<Tooltip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<Axis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radar: Option<RadarCoordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_map: Option<VisualMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Palette>,
    #[serde(default)]
    pub series: Vec<Series>,
}

impl ChartOption {
    #[must_use]
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Drawable items across every series.
    #[must_use]
    pub fn data_item_count(&self) -> usize {
        self.series.iter().map(Series::data_len).sum()
    }

    /// The axis carrying category labels, checked x first.
    #[must_use]
    pub fn category_axis(&self) -> Option<&Axis> {
        [self.x_axis.as_ref(), self.y_axis.as_ref()]
            .into_iter()
            .flatten()
            .find(|axis| axis.is_category())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart option: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart option: {e}")))
    }
}
