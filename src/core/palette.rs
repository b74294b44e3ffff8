use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Ordered color sequence applied to series/segments by index.
///
/// Dashboard palettes rarely exceed five hues, so they stay inline.
pub type Palette = SmallVec<[String; 5]>;

/// Single accent used for bars when no palette override is supplied.
pub const BAR_ACCENT: &str = "#ef4444";

/// Multi-hue default for ring/donut segments.
pub const DISTRIBUTION_PALETTE: [&str; 5] = ["#ef4444", "#eab308", "#06b6d4", "#8b5cf6", "#10b981"];

/// Multi-hue default for polygon and line series.
pub const SERIES_PALETTE: [&str; 3] = ["#ef4444", "#eab308", "#06b6d4"];

/// Returns the caller override when present and non-empty, otherwise `defaults`.
#[must_use]
pub fn palette_or_default(colors: Option<&Palette>, defaults: &[&str]) -> Palette {
    match colors {
        Some(colors) if !colors.is_empty() => colors.clone(),
        _ => defaults.iter().map(|color| (*color).to_owned()).collect(),
    }
}

/// Color roles shared by every chart kind.
///
/// The default is the dark dashboard theme; engines receive it at instance
/// creation and builders read it when styling axes, titles and tooltips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_theme_name")]
    pub name: String,
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_muted_text")]
    pub muted_text: String,
    #[serde(default = "default_axis_line")]
    pub axis_line: String,
    #[serde(default = "default_split_line")]
    pub split_line: String,
    #[serde(default = "default_tooltip_background")]
    pub tooltip_background: String,
    #[serde(default = "default_accent")]
    pub tooltip_border: String,
    #[serde(default = "default_accent")]
    pub accent: String,
    #[serde(default = "default_segment_border")]
    pub segment_border: String,
}

impl Theme {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            name: default_theme_name(),
            text: default_text(),
            muted_text: default_muted_text(),
            axis_line: default_axis_line(),
            split_line: default_split_line(),
            tooltip_background: default_tooltip_background(),
            tooltip_border: default_accent(),
            accent: default_accent(),
            segment_border: default_segment_border(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

fn default_theme_name() -> String {
    "dark".to_owned()
}

fn default_text() -> String {
    "#ffffff".to_owned()
}

fn default_muted_text() -> String {
    "#9ca3af".to_owned()
}

fn default_axis_line() -> String {
    "#4b5563".to_owned()
}

fn default_split_line() -> String {
    "#374151".to_owned()
}

fn default_tooltip_background() -> String {
    "rgba(0, 0, 0, 0.8)".to_owned()
}

fn default_accent() -> String {
    BAR_ACCENT.to_owned()
}

fn default_segment_border() -> String {
    "#1a1a1a".to_owned()
}
