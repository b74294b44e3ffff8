//! dashboard-charts: typed chart requests rendered through an owned engine.
//!
//! A [`ChartRequest`](crate::core::ChartRequest) names one of five chart kinds and
//! carries its payload. [`api::resolve_chart_option`] turns it into a
//! declarative [`ChartOption`](crate::option::ChartOption) tree, and
//! [`ChartRenderer`] commits that tree to an engine instance it owns for the
//! lifetime of one mounted surface.

pub mod api;
pub mod core;
pub mod error;
pub mod option;
pub mod platform;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartRenderer, RendererConfig};
pub use error::{ChartError, ChartResult};
