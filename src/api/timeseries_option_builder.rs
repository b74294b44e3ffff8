use crate::core::{SERIES_PALETTE, TimeseriesChart, palette_or_default};
use crate::option::{
    ChartOption, Emphasis, EmphasisFocus, Grid, LineSeries, Series, TooltipTrigger,
};

use super::option_styles::{
    OptionContext, bottom_legend, centered_title, themed_category_axis, themed_tooltip,
    themed_value_axis,
};

/// Smoothed lines sharing one category x axis.
pub(crate) fn build_timeseries_option(
    chart: &TimeseriesChart,
    context: &OptionContext<'_>,
) -> ChartOption {
    let theme = context.theme;
    let mut x_axis = themed_category_axis(chart.x_labels.clone(), theme);
    x_axis.boundary_gap = Some(false);

    ChartOption {
        title: centered_title(chart.title.as_deref(), theme),
        tooltip: Some(themed_tooltip(theme, Some(TooltipTrigger::Axis))),
        legend: Some(bottom_legend(theme)),
        grid: Some(Grid {
            left: Some("3%".to_owned()),
            right: Some("4%".to_owned()),
            bottom: Some("10%".to_owned()),
            top: None,
            contain_label: Some(true),
        }),
        x_axis: Some(x_axis),
        y_axis: Some(themed_value_axis(theme)),
        color: Some(palette_or_default(chart.palette.as_ref(), &SERIES_PALETTE)),
        series: chart
            .series
            .iter()
            .map(|series| {
                Series::Line(LineSeries {
                    name: series.name.clone(),
                    data: series.values.clone(),
                    smooth: true,
                    emphasis: Emphasis {
                        focus: Some(EmphasisFocus::Series),
                        ..Emphasis::default()
                    },
                })
            })
            .collect(),
        ..ChartOption::default()
    }
}
