use crate::core::{BAR_ACCENT, RankingChart, palette_or_default};
use crate::option::{
    AxisPointer, AxisPointerKind, BarDatum, BarSeries, BorderRadius, ChartOption, Emphasis, Grid,
    ItemStyle, Series, TooltipTrigger,
};

use super::option_styles::{
    OptionContext, centered_title, themed_category_axis, themed_tooltip, themed_value_axis,
};

/// Single bar series; `horizontal` swaps the category and value axes.
pub(crate) fn build_ranking_option(chart: &RankingChart, context: &OptionContext<'_>) -> ChartOption {
    let theme = context.theme;
    let horizontal = chart.horizontal;
    let labels: Vec<String> = chart.data.iter().map(|entry| entry.label.clone()).collect();
    let fallback = chart
        .palette
        .as_ref()
        .and_then(|palette| palette.first())
        .map_or(BAR_ACCENT, String::as_str);
    let corners = if horizontal {
        [0.0, 4.0, 4.0, 0.0]
    } else {
        [4.0, 4.0, 0.0, 0.0]
    };

    let data = chart
        .data
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let color = chart
                .palette
                .as_ref()
                .and_then(|palette| palette.get(index))
                .map_or(fallback, String::as_str);
            BarDatum {
                value: entry.magnitude,
                item_style: ItemStyle {
                    color: Some(color.to_owned()),
                    border_radius: Some(BorderRadius::Corners(corners)),
                    ..ItemStyle::default()
                },
            }
        })
        .collect();

    let mut tooltip = themed_tooltip(theme, Some(TooltipTrigger::Axis));
    tooltip.axis_pointer = Some(AxisPointer {
        kind: AxisPointerKind::Shadow,
    });

    let category_axis = themed_category_axis(labels, theme).with_every_label();
    let (x_axis, y_axis) = if horizontal {
        (themed_value_axis(theme), category_axis)
    } else {
        (category_axis, themed_value_axis(theme))
    };

    ChartOption {
        title: centered_title(chart.title.as_deref(), theme),
        tooltip: Some(tooltip),
        grid: Some(Grid {
            left: Some(if horizontal { "15%" } else { "3%" }.to_owned()),
            right: Some("4%".to_owned()),
            bottom: Some("3%".to_owned()),
            top: None,
            contain_label: Some(true),
        }),
        x_axis: Some(x_axis),
        y_axis: Some(y_axis),
        color: Some(palette_or_default(chart.palette.as_ref(), &[BAR_ACCENT])),
        series: vec![Series::Bar(BarSeries {
            data,
            emphasis: Emphasis {
                item_style: Some(ItemStyle {
                    shadow_blur: Some(10.0),
                    shadow_color: Some("rgba(0, 0, 0, 0.5)".to_owned()),
                    ..ItemStyle::default()
                }),
                ..Emphasis::default()
            },
        })],
        ..ChartOption::default()
    }
}
