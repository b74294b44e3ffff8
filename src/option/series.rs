use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, RingRadius, Sample};

use super::{AreaStyle, LineStyle};

/// Corner rounding: one radius for every corner, or `[tl, tr, br, bl]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BorderRadius {
    Uniform(f64),
    Corners([f64; 4]),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadius>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_blur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Label {
    pub show: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Label {
    #[must_use]
    pub fn hidden() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmphasisFocus {
    Series,
    #[serde(rename = "self")]
    Datum,
}

/// Styling applied while a datum or series is hovered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emphasis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Label>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_style: Option<ItemStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<EmphasisFocus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieDatum {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSeries {
    pub radius: RingRadius,
    pub avoid_label_overlap: bool,
    pub item_style: ItemStyle,
    pub label: Label,
    pub emphasis: Emphasis,
    pub label_line: Label,
    pub data: Vec<PieDatum>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDatum {
    pub value: f64,
    pub item_style: ItemStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub data: Vec<BarDatum>,
    pub emphasis: Emphasis,
}

/// One grid cell as handed to the engine, metadata preserved for tooltips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapDatum {
    pub value: GridCoord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<Sample>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapSeries {
    pub data: Vec<HeatmapDatum>,
    pub label: Label,
    pub item_style: ItemStyle,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarDatum {
    pub value: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarSeries {
    pub data: Vec<RadarDatum>,
    pub area_style: AreaStyle,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub name: String,
    pub data: Vec<f64>,
    pub smooth: bool,
    pub emphasis: Emphasis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Series {
    Pie(PieSeries),
    Bar(BarSeries),
    Heatmap(HeatmapSeries),
    Radar(RadarSeries),
    Line(LineSeries),
}

impl Series {
    /// Number of drawable data items (segments, bars, cells, polygons, points).
    #[must_use]
    pub fn data_len(&self) -> usize {
        match self {
            Self::Pie(series) => series.data.len(),
            Self::Bar(series) => series.data.len(),
            Self::Heatmap(series) => series.data.len(),
            Self::Radar(series) => series.data.len(),
            Self::Line(series) => series.data.len(),
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Pie(_) => "pie",
            Self::Bar(_) => "bar",
            Self::Heatmap(_) => "heatmap",
            Self::Radar(_) => "radar",
            Self::Line(_) => "line",
        }
    }
}
