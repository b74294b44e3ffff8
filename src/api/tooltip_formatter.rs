use std::fmt;

use serde::{Deserialize, Serialize};

use crate::option::{ChartOption, Series, TooltipFormatter, TooltipTrigger};

/// What the pointer is over when the engine asks for tooltip content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverTarget {
    /// One datum of one series (segment, cell, polygon).
    Item {
        series_index: usize,
        data_index: usize,
    },
    /// A category position shared by every series.
    Axis { data_index: usize },
}

/// Composed tooltip content: an optional bold heading followed by lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipText {
    pub heading: Option<String>,
    pub lines: Vec<String>,
}

impl TooltipText {
    #[must_use]
    pub fn has_line(&self, line: &str) -> bool {
        self.lines.iter().any(|candidate| candidate == line)
    }

    /// Markup form for engines that render HTML tooltips.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if let Some(heading) = &self.heading {
            out.push_str(&format!("<strong>{heading}</strong><br/>"));
        }
        for line in &self.lines {
            out.push_str(line);
            out.push_str("<br/>");
        }
        out
    }
}

impl fmt::Display for TooltipText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for line in self.heading.iter().chain(self.lines.iter()) {
            if !first {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
            first = false;
        }
        Ok(())
    }
}

impl ChartOption {
    /// Tooltip content for `target`, composed from this configuration tree.
    ///
    /// Returns `None` when the tree has no tooltip, the target does not match
    /// the tooltip trigger, or the target indexes past the data.
    #[must_use]
    pub fn tooltip_text(&self, target: HoverTarget) -> Option<TooltipText> {
        let tooltip = self.tooltip.as_ref()?;
        match (tooltip.formatter, target) {
            (
                TooltipFormatter::IntensityCell,
                HoverTarget::Item {
                    series_index,
                    data_index,
                },
            ) => self.intensity_cell_text(series_index, data_index),
            (
                TooltipFormatter::ProfileAxes,
                HoverTarget::Item {
                    series_index,
                    data_index,
                },
            ) => self.profile_axes_text(series_index, data_index),
            (TooltipFormatter::Default, HoverTarget::Item { series_index, data_index })
                if tooltip.trigger != Some(TooltipTrigger::Axis) =>
            {
                self.item_text(series_index, data_index)
            }
            (TooltipFormatter::Default, HoverTarget::Axis { data_index })
                if tooltip.trigger == Some(TooltipTrigger::Axis) =>
            {
                self.axis_text(data_index)
            }
            _ => None,
        }
    }

    fn intensity_cell_text(&self, series_index: usize, data_index: usize) -> Option<TooltipText> {
        let Series::Heatmap(series) = self.series.get(series_index)? else {
            return None;
        };
        let datum = series.data.get(data_index)?;
        let x_label = self
            .x_axis
            .as_ref()
            .and_then(|axis| axis.label_at(datum.value.x))
            .unwrap_or_default();
        let y_label = self
            .y_axis
            .as_ref()
            .and_then(|axis| axis.label_at(datum.value.y))
            .unwrap_or_default();

        let mut lines = vec![format!("Intensity: {}", datum.value.intensity)];
        if let Some(sample_count) = datum.sample_count {
            lines.push(format!("Samples: {sample_count}"));
        }
        if let Some(samples) = datum.samples.as_ref().filter(|samples| !samples.is_empty()) {
            // Blank separator between the summary and per-sample lines.
            lines.push(String::new());
            lines.extend(
                samples
                    .iter()
                    .map(|sample| format!("{}: {}", sample.name, sample.weight)),
            );
        }
        Some(TooltipText {
            heading: Some(format!("{x_label} - {y_label}")),
            lines,
        })
    }

    fn profile_axes_text(&self, series_index: usize, data_index: usize) -> Option<TooltipText> {
        let Series::Radar(series) = self.series.get(series_index)? else {
            return None;
        };
        let datum = series.data.get(data_index)?;
        let indicators = self
            .radar
            .as_ref()
            .map(|radar| radar.indicator.as_slice())
            .unwrap_or_default();

        let lines = indicators
            .iter()
            .zip(datum.value.iter())
            .map(|(indicator, value)| {
                if *value == 0.0 {
                    format!("{}: N/A", indicator.name)
                } else {
                    format!("{}: {value}", indicator.name)
                }
            })
            .collect();
        Some(TooltipText {
            heading: datum.name.clone(),
            lines,
        })
    }

    fn item_text(&self, series_index: usize, data_index: usize) -> Option<TooltipText> {
        let line = match self.series.get(series_index)? {
            Series::Pie(series) => {
                let datum = series.data.get(data_index)?;
                format!("{}: {}", datum.name, datum.value)
            }
            Series::Bar(series) => {
                let datum = series.data.get(data_index)?;
                match self
                    .category_axis()
                    .and_then(|axis| axis.label_at(data_index))
                {
                    Some(label) => format!("{label}: {}", datum.value),
                    None => datum.value.to_string(),
                }
            }
            Series::Line(series) => {
                let value = series.data.get(data_index)?;
                format!("{}: {value}", series.name)
            }
            Series::Heatmap(series) => {
                let datum = series.data.get(data_index)?;
                datum.value.intensity.to_string()
            }
            Series::Radar(series) => {
                let datum = series.data.get(data_index)?;
                datum.name.clone().unwrap_or_default()
            }
        };
        Some(TooltipText {
            heading: None,
            lines: vec![line],
        })
    }

    fn axis_text(&self, data_index: usize) -> Option<TooltipText> {
        let lines: Vec<String> = self
            .series
            .iter()
            .filter_map(|series| match series {
                Series::Bar(bar) => bar
                    .data
                    .get(data_index)
                    .map(|datum| datum.value.to_string()),
                Series::Line(line) => line
                    .data
                    .get(data_index)
                    .map(|value| format!("{}: {value}", line.name)),
                Series::Pie(_) | Series::Heatmap(_) | Series::Radar(_) => None,
            })
            .collect();
        if lines.is_empty() {
            return None;
        }
        let heading = self
            .category_axis()
            .and_then(|axis| axis.label_at(data_index))
            .map(str::to_owned);
        Some(TooltipText { heading, lines })
    }
}
