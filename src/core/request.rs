use serde::{Deserialize, Serialize};

use crate::core::Palette;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_CHART_HEIGHT: &str = "400px";

/// One chart to draw: a kind-tagged payload plus container display options.
///
/// The JSON form carries the discriminant in `kind`
/// (`distribution`, `ranking`, `intensity-grid`, `profile`, `timeseries`)
/// next to the payload and display fields. Any other `kind` deserializes to
/// [`ChartKind::Unknown`], which resolves to a blank surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    #[serde(flatten)]
    pub kind: ChartKind,
    #[serde(flatten)]
    pub display: DisplayOptions,
}

impl ChartRequest {
    #[must_use]
    pub fn new(kind: impl Into<ChartKind>) -> Self {
        Self {
            kind: kind.into(),
            display: DisplayOptions::default(),
        }
    }

    #[must_use]
    pub fn with_loading(mut self, loading: bool) -> Self {
        self.display.loading = loading;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.display.height = height.into();
        self
    }

    #[must_use]
    pub fn with_container_class(mut self, container_class: impl Into<String>) -> Self {
        self.display.container_class = container_class.into();
        self
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.display.loading
    }

    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart request: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart request: {e}"))
        })
    }
}

/// Container-level options shared by every chart kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    #[serde(default = "default_height")]
    pub height: String,
    #[serde(default, alias = "className")]
    pub container_class: String,
    #[serde(default)]
    pub loading: bool,
}

impl DisplayOptions {
    /// Parses `height` as whole pixels (`"400px"` or `"400"`).
    ///
    /// Relative units (`%`, `vh`, ...) are left to the host layout and yield `None`.
    #[must_use]
    pub fn height_px(&self) -> Option<u32> {
        let trimmed = self.height.trim();
        let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
        digits.parse().ok()
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            height: default_height(),
            container_class: String::new(),
            loading: false,
        }
    }
}

fn default_height() -> String {
    DEFAULT_CHART_HEIGHT.to_owned()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ChartKind {
    Distribution(DistributionChart),
    Ranking(RankingChart),
    IntensityGrid(IntensityGridChart),
    Profile(ProfileChart),
    Timeseries(TimeseriesChart),
    #[serde(other)]
    Unknown,
}

impl ChartKind {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Distribution(_) => "distribution",
            Self::Ranking(_) => "ranking",
            Self::IntensityGrid(_) => "intensity-grid",
            Self::Profile(_) => "profile",
            Self::Timeseries(_) => "timeseries",
            Self::Unknown => "unknown",
        }
    }
}

impl From<DistributionChart> for ChartKind {
    fn from(chart: DistributionChart) -> Self {
        Self::Distribution(chart)
    }
}

impl From<RankingChart> for ChartKind {
    fn from(chart: RankingChart) -> Self {
        Self::Ranking(chart)
    }
}

impl From<IntensityGridChart> for ChartKind {
    fn from(chart: IntensityGridChart) -> Self {
        Self::IntensityGrid(chart)
    }
}

impl From<ProfileChart> for ChartKind {
    fn from(chart: ProfileChart) -> Self {
        Self::Profile(chart)
    }
}

impl From<TimeseriesChart> for ChartKind {
    fn from(chart: TimeseriesChart) -> Self {
        Self::Timeseries(chart)
    }
}

/// Labeled magnitude used by distribution and ranking charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryValue {
    #[serde(alias = "name")]
    pub label: String,
    #[serde(alias = "value")]
    pub magnitude: f64,
}

impl CategoryValue {
    #[must_use]
    pub fn new(label: impl Into<String>, magnitude: f64) -> Self {
        Self {
            label: label.into(),
            magnitude,
        }
    }
}

/// Inner/outer ring radius, in engine units (`"40%"`, `"120"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingRadius(pub String, pub String);

impl RingRadius {
    #[must_use]
    pub fn new(inner: impl Into<String>, outer: impl Into<String>) -> Self {
        Self(inner.into(), outer.into())
    }

    #[must_use]
    pub fn inner(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn outer(&self) -> &str {
        &self.1
    }
}

impl Default for RingRadius {
    fn default() -> Self {
        Self::new("40%", "70%")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionChart {
    #[serde(default)]
    pub data: Vec<CategoryValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<RingRadius>,
    #[serde(default, alias = "colors", skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
}

impl DistributionChart {
    #[must_use]
    pub fn new(data: Vec<CategoryValue>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: RingRadius) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingChart {
    #[serde(default)]
    pub data: Vec<CategoryValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub horizontal: bool,
    #[serde(default, alias = "colors", skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
}

impl RankingChart {
    #[must_use]
    pub fn new(data: Vec<CategoryValue>) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }
}

/// `(x index, y index, intensity)` triple addressing one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(usize, usize, f64)", into = "(usize, usize, f64)")]
pub struct GridCoord {
    pub x: usize,
    pub y: usize,
    pub intensity: f64,
}

impl GridCoord {
    #[must_use]
    pub fn new(x: usize, y: usize, intensity: f64) -> Self {
        Self { x, y, intensity }
    }
}

impl From<(usize, usize, f64)> for GridCoord {
    fn from((x, y, intensity): (usize, usize, f64)) -> Self {
        Self::new(x, y, intensity)
    }
}

impl From<GridCoord> for (usize, usize, f64) {
    fn from(coord: GridCoord) -> Self {
        (coord.x, coord.y, coord.intensity)
    }
}

/// Named weight attached to a grid cell (e.g. one scan and its exploit count).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub name: String,
    #[serde(alias = "exploits")]
    pub weight: f64,
}

impl Sample {
    #[must_use]
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// Intensity-grid cell. Accepts either the compact `[x, y, intensity]` form
/// or the extended object form carrying sample metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "GridCellWire")]
pub struct GridCell {
    pub coord: GridCoord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<Sample>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl GridCell {
    #[must_use]
    pub fn new(x: usize, y: usize, intensity: f64) -> Self {
        Self {
            coord: GridCoord::new(x, y, intensity),
            sample_count: None,
            samples: None,
            date: None,
        }
    }

    #[must_use]
    pub fn with_samples(mut self, samples: Vec<Sample>) -> Self {
        self.samples = Some(samples);
        self
    }

    #[must_use]
    pub fn with_sample_count(mut self, sample_count: u32) -> Self {
        self.sample_count = Some(sample_count);
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GridCellWire {
    Compact(GridCoord),
    Extended(ExtendedGridCell),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtendedGridCell {
    #[serde(alias = "value")]
    coord: GridCoord,
    #[serde(default, alias = "scanCount")]
    sample_count: Option<u32>,
    #[serde(default, alias = "scans")]
    samples: Option<Vec<Sample>>,
    #[serde(default)]
    date: Option<String>,
}

impl From<GridCellWire> for GridCell {
    fn from(wire: GridCellWire) -> Self {
        match wire {
            GridCellWire::Compact(coord) => Self {
                coord,
                sample_count: None,
                samples: None,
                date: None,
            },
            GridCellWire::Extended(cell) => Self {
                coord: cell.coord,
                sample_count: cell.sample_count,
                samples: cell.samples,
                date: cell.date,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntensityGridChart {
    #[serde(default, alias = "xAxisData")]
    pub x_labels: Vec<String>,
    #[serde(default, alias = "yAxisData")]
    pub y_labels: Vec<String>,
    #[serde(default, alias = "data")]
    pub cells: Vec<GridCell>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, alias = "colors", skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
}

impl IntensityGridChart {
    #[must_use]
    pub fn new(x_labels: Vec<String>, y_labels: Vec<String>, cells: Vec<GridCell>) -> Self {
        Self {
            x_labels,
            y_labels,
            cells,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }
}

/// One radial dimension of a profile chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileAxis {
    pub name: String,
    pub max: f64,
}

impl ProfileAxis {
    #[must_use]
    pub fn new(name: impl Into<String>, max: f64) -> Self {
        Self {
            name: name.into(),
            max,
        }
    }
}

/// Values are positional: `value[i]` belongs to `axes[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSeries {
    pub value: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ProfileSeries {
    #[must_use]
    pub fn new(value: Vec<f64>) -> Self {
        Self { value, name: None }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileChart {
    #[serde(default, alias = "indicator")]
    pub axes: Vec<ProfileAxis>,
    #[serde(default, alias = "data")]
    pub series: Vec<ProfileSeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, alias = "colors", skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
}

impl ProfileChart {
    #[must_use]
    pub fn new(axes: Vec<ProfileAxis>, series: Vec<ProfileSeries>) -> Self {
        Self {
            axes,
            series,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesSeries {
    pub name: String,
    #[serde(alias = "data")]
    pub values: Vec<f64>,
}

impl TimeseriesSeries {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeseriesChart {
    #[serde(default, alias = "xAxisData")]
    pub x_labels: Vec<String>,
    #[serde(default)]
    pub series: Vec<TimeseriesSeries>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, alias = "colors", skip_serializing_if = "Option::is_none")]
    pub palette: Option<Palette>,
}

impl TimeseriesChart {
    #[must_use]
    pub fn new(x_labels: Vec<String>, series: Vec<TimeseriesSeries>) -> Self {
        Self {
            x_labels,
            series,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartKind, ChartRequest, DisplayOptions, GridCell};

    #[test]
    fn display_height_parses_pixel_forms() {
        let mut display = DisplayOptions::default();
        assert_eq!(display.height_px(), Some(400));
        display.height = "320".to_owned();
        assert_eq!(display.height_px(), Some(320));
        display.height = "60vh".to_owned();
        assert_eq!(display.height_px(), None);
    }

    #[test]
    fn compact_and_extended_cells_parse_alike() {
        let compact: GridCell = serde_json::from_str("[2, 1, 7]").expect("compact cell");
        let extended: GridCell =
            serde_json::from_str(r#"{"coord": [2, 1, 7]}"#).expect("extended cell");
        assert_eq!(compact, extended);
        assert_eq!(compact.coord.intensity, 7.0);
    }

    #[test]
    fn unrecognized_kind_maps_to_unknown() {
        let request = ChartRequest::from_json_str(r#"{"kind": "sankey", "height": "200px"}"#)
            .expect("unknown kinds still parse");
        assert_eq!(request.kind, ChartKind::Unknown);
        assert_eq!(request.display.height, "200px");
    }
}
