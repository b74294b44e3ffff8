mod engine_handle;
mod headless_engine;
mod loading_overlay;

pub use engine_handle::EngineHandle;
pub use headless_engine::{EngineEvent, EngineJournal, HeadlessEngine, HeadlessInstance, InstanceId};
pub use loading_overlay::LoadingOverlay;

use crate::core::{Theme, Viewport};
use crate::error::ChartResult;
use crate::option::ChartOption;
use crate::platform::SurfaceId;

/// Factory for engine instances, implemented by any graphics backend.
///
/// One instance is bound to exactly one drawing surface; callers own it
/// through an [`EngineHandle`] so disposal happens exactly once.
pub trait Engine {
    type Instance: EngineInstance;

    fn init(&mut self, surface: &SurfaceId, theme: &Theme) -> ChartResult<Self::Instance>;
}

/// Stateful painter bound to one drawing surface.
pub trait EngineInstance {
    /// Replaces the whole current configuration. No merge with previous state.
    fn set_option(&mut self, option: &ChartOption) -> ChartResult<()>;

    fn show_loading(&mut self, overlay: &LoadingOverlay);

    fn hide_loading(&mut self);

    /// Re-fits the already committed configuration to new container dimensions.
    fn resize(&mut self, viewport: Viewport) -> ChartResult<()>;

    fn dispose(&mut self);
}
