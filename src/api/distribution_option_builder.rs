use crate::core::{DISTRIBUTION_PALETTE, DistributionChart, palette_or_default};
use crate::option::{
    BorderRadius, ChartOption, Emphasis, ItemStyle, Label, PieDatum, PieSeries, Series,
    TooltipTrigger,
};

use super::option_styles::{OptionContext, centered_title, responsive_legend, themed_tooltip};

/// Ring/donut: one sector per entry, labels only on emphasis.
pub(crate) fn build_distribution_option(
    chart: &DistributionChart,
    context: &OptionContext<'_>,
) -> ChartOption {
    let theme = context.theme;
    let data = chart
        .data
        .iter()
        .map(|entry| PieDatum {
            name: entry.label.clone(),
            value: entry.magnitude,
        })
        .collect();

    ChartOption {
        title: centered_title(chart.title.as_deref(), theme),
        tooltip: Some(themed_tooltip(theme, Some(TooltipTrigger::Item))),
        legend: Some(responsive_legend(context)),
        color: Some(palette_or_default(
            chart.palette.as_ref(),
            &DISTRIBUTION_PALETTE,
        )),
        series: vec![Series::Pie(PieSeries {
            radius: chart.radius.clone().unwrap_or_default(),
            avoid_label_overlap: false,
            item_style: ItemStyle {
                border_radius: Some(BorderRadius::Uniform(10.0)),
                border_color: Some(theme.segment_border.clone()),
                border_width: Some(2.0),
                ..ItemStyle::default()
            },
            label: Label::hidden(),
            emphasis: Emphasis {
                label: Some(Label {
                    show: true,
                    font_size: Some(16.0),
                    font_weight: Some("bold".to_owned()),
                    color: Some(theme.text.clone()),
                }),
                ..Emphasis::default()
            },
            label_line: Label::hidden(),
            data,
        })],
        ..ChartOption::default()
    }
}
