mod chart_renderer;
mod distribution_option_builder;
mod intensity_grid_option_builder;
mod option_resolver;
mod option_styles;
mod profile_option_builder;
mod ranking_option_builder;
mod renderer_config;
mod timeseries_option_builder;
mod tooltip_formatter;

pub use chart_renderer::{ChartRenderer, RenderOutcome, SkipReason};
pub use option_resolver::resolve_chart_option;
pub use renderer_config::{DEFAULT_RESPONSIVE_BREAKPOINT_PX, RendererConfig};
pub use tooltip_formatter::{HoverTarget, TooltipText};
