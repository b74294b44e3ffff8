use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::core::{ChartRequest, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::platform::{ResizeBus, ResizeSubscription, Surface, SurfaceId};
use crate::render::{Engine, EngineHandle};

use super::{RendererConfig, resolve_chart_option};

/// Why a render pass did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    SurfaceUnbound,
    Disposed,
}

/// Result of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Skipped(SkipReason),
    /// The loading overlay is shown; no configuration was resolved.
    Loading,
    /// A full configuration tree replaced the previous one.
    Committed { series: usize },
}

struct MountState {
    surface_id: SurfaceId,
    bus: ResizeBus,
}

type EngineSlot<I> = Rc<RefCell<Option<EngineHandle<I>>>>;

/// Owns one engine instance for one mounted drawing surface.
///
/// Lifecycle: [`mount`](Self::mount) binds a surface, every
/// [`render`](Self::render) resolves and commits a full configuration (the
/// instance is created lazily on the first pass), and
/// [`unmount`](Self::unmount) (or drop) removes the resize listener and
/// disposes the instance exactly once. Nothing reaches the engine afterwards.
pub struct ChartRenderer<E: Engine> {
    engine: E,
    config: RendererConfig,
    mount: Option<MountState>,
    viewport: Rc<Cell<Viewport>>,
    slot: EngineSlot<E::Instance>,
    resize_subscription: Option<ResizeSubscription>,
    overlay_visible: bool,
    disposed: bool,
}

impl<E> ChartRenderer<E>
where
    E: Engine,
    E::Instance: 'static,
{
    pub fn new(engine: E, config: RendererConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            engine,
            config,
            mount: None,
            viewport: Rc::new(Cell::new(Viewport::default())),
            slot: Rc::new(RefCell::new(None)),
            resize_subscription: None,
            overlay_visible: false,
            disposed: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn surface_id(&self) -> Option<&SurfaceId> {
        self.mount.as_ref().map(|mount| &mount.surface_id)
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport.get()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    #[must_use]
    pub fn has_engine_instance(&self) -> bool {
        self.slot.borrow().is_some()
    }

    #[must_use]
    pub fn has_resize_subscription(&self) -> bool {
        self.resize_subscription
            .as_ref()
            .is_some_and(ResizeSubscription::is_active)
    }

    /// Binds `surface` and the host's resize source.
    ///
    /// Re-mounting the same surface refreshes the viewport and moves a live
    /// resize listener onto `bus`. Mounting a different surface disposes the
    /// instance bound to the previous one.
    pub fn mount(&mut self, surface: Surface, bus: &ResizeBus) -> ChartResult<()> {
        if self.disposed {
            return Err(ChartError::Disposed);
        }

        let rebinding = self
            .mount
            .as_ref()
            .is_some_and(|mount| mount.surface_id != surface.id);
        let bus_changed = self
            .mount
            .as_ref()
            .is_some_and(|mount| !mount.bus.same_bus(bus));
        if rebinding {
            self.release_instance();
            debug!(surface = %surface.id, "rebinding chart renderer to new surface");
        } else if bus_changed && self.resize_subscription.take().is_some() {
            self.resize_subscription = Some(self.subscribe_resize(bus));
            debug!(surface = %surface.id, "resize listener moved to new bus");
        }

        self.viewport.set(surface.viewport);
        self.mount = Some(MountState {
            surface_id: surface.id,
            bus: bus.clone(),
        });
        Ok(())
    }

    /// Host-driven viewport update for the next resolution pass.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport.set(viewport);
    }

    /// Runs one full render pass for `request`.
    ///
    /// Unbound or disposed renderers skip silently. Loading requests show
    /// the overlay and resolve nothing. Otherwise the resolved configuration
    /// fully replaces the engine state.
    pub fn render(&mut self, request: &ChartRequest) -> ChartResult<RenderOutcome> {
        if self.disposed {
            trace!("render after unmount ignored");
            return Ok(RenderOutcome::Skipped(SkipReason::Disposed));
        }
        let Some(mount) = self.mount.as_ref() else {
            trace!("render before surface bind ignored");
            return Ok(RenderOutcome::Skipped(SkipReason::SurfaceUnbound));
        };
        let surface_id = mount.surface_id.clone();
        let bus = mount.bus.clone();

        // The request changed: swap in a fresh listener before anything can fail.
        self.resize_subscription = None;
        self.resize_subscription = Some(self.subscribe_resize(&bus));
        self.ensure_instance(&surface_id)?;

        let outcome = {
            let mut slot = self.slot.borrow_mut();
            let Some(handle) = slot.as_mut() else {
                return Ok(RenderOutcome::Skipped(SkipReason::Disposed));
            };

            if request.is_loading() {
                handle.show_loading(&self.config.loading_overlay)?;
                self.overlay_visible = true;
                debug!(surface = %surface_id, kind = request.kind_name(), "loading overlay shown");
                RenderOutcome::Loading
            } else {
                if self.overlay_visible {
                    handle.hide_loading()?;
                    self.overlay_visible = false;
                    debug!(surface = %surface_id, "loading overlay cleared");
                }
                let option = resolve_chart_option(request, &self.config, self.viewport.get().width);
                handle.commit(&option)?;
                debug!(
                    surface = %surface_id,
                    kind = request.kind_name(),
                    series = option.series_count(),
                    "chart option committed"
                );
                RenderOutcome::Committed {
                    series: option.series_count(),
                }
            }
        };

        Ok(outcome)
    }

    /// Removes the resize listener and disposes the engine instance.
    ///
    /// Idempotent. The renderer cannot be mounted or rendered again.
    pub fn unmount(&mut self) {
        if self.disposed {
            return;
        }
        self.release_instance();
        self.mount = None;
        self.disposed = true;
        debug!("chart renderer unmounted");
    }

    fn ensure_instance(&mut self, surface_id: &SurfaceId) -> ChartResult<()> {
        if self.slot.borrow().is_some() {
            trace!(surface = %surface_id, "reusing engine instance");
            return Ok(());
        }
        let instance = self.engine.init(surface_id, &self.config.theme)?;
        *self.slot.borrow_mut() = Some(EngineHandle::new(surface_id.clone(), instance));
        debug!(surface = %surface_id, theme = %self.config.theme.name, "engine instance created");
        Ok(())
    }

    fn release_instance(&mut self) {
        self.resize_subscription = None;
        self.overlay_visible = false;
        let handle = self.slot.borrow_mut().take();
        if let Some(handle) = handle {
            handle.close();
        }
    }

    /// Fits the already committed state on resize; never re-resolves.
    fn subscribe_resize(&self, bus: &ResizeBus) -> ResizeSubscription {
        let slot = Rc::downgrade(&self.slot);
        let viewport = Rc::downgrade(&self.viewport);
        bus.subscribe(move |size| {
            if let Some(viewport) = viewport.upgrade() {
                viewport.set(size);
            }
            let Some(slot) = slot.upgrade() else {
                return;
            };
            let Ok(mut guard) = slot.try_borrow_mut() else {
                return;
            };
            if let Some(handle) = guard.as_mut() {
                if let Err(err) = handle.resize(size) {
                    warn!(error = %err, "engine resize failed");
                }
            }
        })
    }
}

impl<E: Engine> Drop for ChartRenderer<E> {
    fn drop(&mut self) {
        if self.disposed {
            return;
        }
        self.resize_subscription = None;
        if let Ok(mut slot) = self.slot.try_borrow_mut() {
            if let Some(handle) = slot.take() {
                handle.close();
            }
        }
        self.disposed = true;
    }
}
