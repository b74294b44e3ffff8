use tracing::debug;

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::option::ChartOption;
use crate::platform::SurfaceId;

use super::{EngineInstance, LoadingOverlay};

/// Exclusive owner of one engine instance.
///
/// `dispose` runs exactly once: on [`EngineHandle::close`] or on drop,
/// whichever comes first. Every operation after that is rejected.
#[derive(Debug)]
pub struct EngineHandle<I: EngineInstance> {
    surface: SurfaceId,
    instance: Option<I>,
}

impl<I: EngineInstance> EngineHandle<I> {
    #[must_use]
    pub fn new(surface: SurfaceId, instance: I) -> Self {
        Self {
            surface,
            instance: Some(instance),
        }
    }

    #[must_use]
    pub fn surface(&self) -> &SurfaceId {
        &self.surface
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.instance.is_some()
    }

    /// Fully replaces the instance configuration with `option`.
    pub fn commit(&mut self, option: &ChartOption) -> ChartResult<()> {
        self.instance_mut()?.set_option(option)
    }

    pub fn show_loading(&mut self, overlay: &LoadingOverlay) -> ChartResult<()> {
        self.instance_mut()?.show_loading(overlay);
        Ok(())
    }

    pub fn hide_loading(&mut self) -> ChartResult<()> {
        self.instance_mut()?.hide_loading();
        Ok(())
    }

    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.instance_mut()?.resize(viewport)
    }

    /// Disposes the instance now instead of waiting for drop.
    pub fn close(mut self) {
        self.release();
    }

    fn instance_mut(&mut self) -> ChartResult<&mut I> {
        self.instance.as_mut().ok_or(ChartError::Disposed)
    }

    fn release(&mut self) {
        if let Some(mut instance) = self.instance.take() {
            instance.dispose();
            debug!(surface = %self.surface, "engine instance disposed");
        }
    }
}

impl<I: EngineInstance> Drop for EngineHandle<I> {
    fn drop(&mut self) {
        self.release();
    }
}
