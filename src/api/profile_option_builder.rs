use crate::core::{ProfileChart, SERIES_PALETTE, palette_or_default};
use crate::option::{
    AreaStyle, AxisStroke, ChartOption, Emphasis, LineStyle, RadarCoordinate, RadarDatum,
    RadarIndicator, RadarSeries, Series, SplitArea, TextStyle, TooltipFormatter,
};

use super::option_styles::{OptionContext, bottom_legend, centered_title, themed_tooltip};

/// One translucent polygon per series across the declared axes.
///
/// Every axis starts at zero; `max` comes from the payload as declared.
pub(crate) fn build_profile_option(chart: &ProfileChart, context: &OptionContext<'_>) -> ChartOption {
    let theme = context.theme;
    let indicator = chart
        .axes
        .iter()
        .map(|axis| RadarIndicator {
            name: axis.name.clone(),
            min: 0.0,
            max: axis.max,
        })
        .collect();
    let data = chart
        .series
        .iter()
        .map(|series| RadarDatum {
            value: series.value.clone(),
            name: series.name.clone(),
        })
        .collect();

    let mut tooltip = themed_tooltip(theme, None);
    tooltip.formatter = TooltipFormatter::ProfileAxes;

    ChartOption {
        title: centered_title(chart.title.as_deref(), theme),
        tooltip: Some(tooltip),
        legend: Some(bottom_legend(theme)),
        color: Some(palette_or_default(chart.palette.as_ref(), &SERIES_PALETTE)),
        radar: Some(RadarCoordinate {
            indicator,
            split_area: SplitArea {
                show: None,
                area_style: AreaStyle {
                    color: vec![
                        "rgba(239, 68, 68, 0.05)".to_owned(),
                        "rgba(239, 68, 68, 0.1)".to_owned(),
                    ],
                    opacity: None,
                },
            },
            axis_line: AxisStroke::colored(&theme.axis_line),
            split_line: AxisStroke::colored(&theme.split_line),
            axis_name: TextStyle::colored(&theme.muted_text).with_font_size(11.0),
        }),
        series: vec![Series::Radar(RadarSeries {
            data,
            area_style: AreaStyle {
                color: Vec::new(),
                opacity: Some(0.3),
            },
            emphasis: Emphasis {
                line_style: Some(LineStyle {
                    color: None,
                    width: Some(4.0),
                }),
                ..Emphasis::default()
            },
        })],
        ..ChartOption::default()
    }
}
