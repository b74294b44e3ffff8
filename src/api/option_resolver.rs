use tracing::{trace, warn};

use crate::core::{ChartKind, ChartRequest};
use crate::option::ChartOption;

use super::RendererConfig;
use super::distribution_option_builder::build_distribution_option;
use super::intensity_grid_option_builder::build_intensity_grid_option;
use super::option_styles::OptionContext;
use super::profile_option_builder::build_profile_option;
use super::ranking_option_builder::build_ranking_option;
use super::timeseries_option_builder::build_timeseries_option;

/// Resolves the configuration tree for `request`.
///
/// Pure in `(request, config, viewport_width)`: the same inputs always yield
/// an identical tree. Unknown kinds resolve to the blank configuration.
/// `display.loading` is not consulted here; the renderer decides whether to
/// resolve at all.
#[must_use]
pub fn resolve_chart_option(
    request: &ChartRequest,
    config: &RendererConfig,
    viewport_width: u32,
) -> ChartOption {
    let context = OptionContext {
        theme: &config.theme,
        viewport_width,
        responsive_breakpoint_px: config.responsive_breakpoint_px,
    };

    let option = match &request.kind {
        ChartKind::Distribution(chart) => build_distribution_option(chart, &context),
        ChartKind::Ranking(chart) => build_ranking_option(chart, &context),
        ChartKind::IntensityGrid(chart) => build_intensity_grid_option(chart, &context),
        ChartKind::Profile(chart) => build_profile_option(chart, &context),
        ChartKind::Timeseries(chart) => build_timeseries_option(chart, &context),
        ChartKind::Unknown => {
            warn!("unknown chart kind; resolving blank configuration");
            ChartOption::default()
        }
    };

    trace!(
        kind = request.kind_name(),
        viewport_width,
        series = option.series_count(),
        items = option.data_item_count(),
        "resolved chart option"
    );
    option
}
