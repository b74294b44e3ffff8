use crate::core::{GridCoord, IntensityGridChart, PiecewiseScale, Theme};
use crate::option::{
    AreaStyle, Axis, AxisLabel, AxisPosition, AxisStroke, BorderRadius, ChartOption, Emphasis,
    Grid, HeatmapDatum, HeatmapSeries, ItemStyle, Label, Orient, Series, SplitArea, TextStyle,
    TooltipFormatter, VisualMap, VisualMapKind,
};

use super::option_styles::{OptionContext, centered_title, themed_tooltip};

const CELL_GAP_COLOR: &str = "#040810";

/// Heat cells over `x_labels` x `y_labels` with a five-step piecewise legend.
///
/// Supplied cells keep their order and metadata. Every other in-range
/// `(x, y)` position is appended at zero intensity, so the lowest bucket
/// paints it and it still gets a tooltip. A palette override recolors the
/// buckets lowest first.
pub(crate) fn build_intensity_grid_option(
    chart: &IntensityGridChart,
    context: &OptionContext<'_>,
) -> ChartOption {
    let theme = context.theme;
    let mut pieces = PiecewiseScale::intensity().buckets().to_vec();
    if let Some(palette) = chart.palette.as_ref() {
        for (piece, color) in pieces.iter_mut().zip(palette.iter()) {
            piece.color = color.clone();
        }
    }

    let data = dense_cells(chart);

    let mut tooltip = themed_tooltip(theme, None);
    tooltip.position = Some("top".to_owned());
    tooltip.formatter = TooltipFormatter::IntensityCell;

    ChartOption {
        title: centered_title(chart.title.as_deref(), theme),
        tooltip: Some(tooltip),
        grid: Some(Grid {
            left: Some("5%".to_owned()),
            right: Some("10%".to_owned()),
            top: Some("10%".to_owned()),
            bottom: Some("25%".to_owned()),
            contain_label: None,
        }),
        x_axis: Some(grid_axis(chart.x_labels.clone(), None, theme)),
        y_axis: Some(grid_axis(
            chart.y_labels.clone(),
            Some(AxisPosition::Right),
            theme,
        )),
        visual_map: Some(VisualMap {
            kind: VisualMapKind::Piecewise,
            orient: Orient::Horizontal,
            left: Some("center".to_owned()),
            bottom: Some("2%".to_owned()),
            item_width: 12.0,
            item_height: 12.0,
            item_gap: 4.0,
            pieces,
            text_style: TextStyle::colored(&theme.muted_text).with_font_size(10.0),
            show_label: true,
        }),
        series: vec![Series::Heatmap(HeatmapSeries {
            data,
            label: Label::hidden(),
            item_style: ItemStyle {
                border_width: Some(8.0),
                border_radius: Some(BorderRadius::Uniform(4.0)),
                border_color: Some(CELL_GAP_COLOR.to_owned()),
                ..ItemStyle::default()
            },
            emphasis: Emphasis {
                item_style: Some(ItemStyle {
                    shadow_blur: Some(10.0),
                    shadow_color: Some("rgba(143, 70, 70, 0.5)".to_owned()),
                    ..ItemStyle::default()
                }),
                ..Emphasis::default()
            },
        })],
        ..ChartOption::default()
    }
}

fn dense_cells(chart: &IntensityGridChart) -> Vec<HeatmapDatum> {
    let width = chart.x_labels.len();
    let height = chart.y_labels.len();
    let mut covered = vec![false; width * height];
    let mut data = Vec::with_capacity(chart.cells.len().max(width * height));

    for cell in &chart.cells {
        let GridCoord { x, y, .. } = cell.coord;
        if x < width && y < height {
            covered[y * width + x] = true;
        }
        data.push(HeatmapDatum {
            value: cell.coord,
            sample_count: cell.sample_count,
            samples: cell.samples.clone(),
            date: cell.date.clone(),
        });
    }

    for y in 0..height {
        for x in 0..width {
            if !covered[y * width + x] {
                data.push(HeatmapDatum {
                    value: GridCoord::new(x, y, 0.0),
                    sample_count: None,
                    samples: None,
                    date: None,
                });
            }
        }
    }
    data
}

fn grid_axis(
    labels: Vec<String>,
    position: Option<AxisPosition>,
    theme: &Theme,
) -> Axis {
    Axis {
        position,
        split_area: Some(SplitArea {
            show: Some(true),
            area_style: AreaStyle {
                color: vec!["transparent".to_owned(), "transparent".to_owned()],
                opacity: None,
            },
        }),
        axis_line: Some(AxisStroke::colored("transparent")),
        axis_label: Some(AxisLabel::colored(&theme.muted_text)),
        ..Axis::category(labels)
    }
}
