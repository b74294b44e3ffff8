pub mod palette;
pub mod piecewise;
pub mod request;
pub mod types;

pub use palette::{
    BAR_ACCENT, DISTRIBUTION_PALETTE, Palette, SERIES_PALETTE, Theme, palette_or_default,
};
pub use piecewise::{ColorBucket, PiecewiseScale};
pub use request::{
    CategoryValue, ChartKind, ChartRequest, DisplayOptions, DistributionChart, GridCell,
    GridCoord, IntensityGridChart, ProfileAxis, ProfileChart, ProfileSeries, RankingChart,
    RingRadius, Sample, TimeseriesChart, TimeseriesSeries,
};
pub use types::Viewport;
