use std::cell::{Ref, RefCell};
use std::rc::Rc;

use indexmap::IndexMap;

use crate::core::{Theme, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::option::ChartOption;
use crate::platform::SurfaceId;

use super::{Engine, EngineInstance, LoadingOverlay};

pub type InstanceId = u64;

/// One call observed by the headless engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Init {
        instance: InstanceId,
        surface: SurfaceId,
        theme: String,
    },
    SetOption {
        instance: InstanceId,
        option: Box<ChartOption>,
    },
    ShowLoading {
        instance: InstanceId,
        text: String,
    },
    HideLoading {
        instance: InstanceId,
    },
    Resize {
        instance: InstanceId,
        viewport: Viewport,
    },
    Dispose {
        instance: InstanceId,
    },
}

/// Append-only record of engine calls plus the live instance table.
#[derive(Debug, Default)]
pub struct EngineJournal {
    events: Vec<EngineEvent>,
    live: IndexMap<InstanceId, SurfaceId>,
    next_instance: InstanceId,
}

impl EngineJournal {
    #[must_use]
    pub fn events(&self) -> &[EngineEvent] {
        &self.events
    }

    #[must_use]
    pub fn init_count(&self) -> usize {
        self.count(|event| matches!(event, EngineEvent::Init { .. }))
    }

    #[must_use]
    pub fn dispose_count(&self) -> usize {
        self.count(|event| matches!(event, EngineEvent::Dispose { .. }))
    }

    #[must_use]
    pub fn resize_count(&self) -> usize {
        self.count(|event| matches!(event, EngineEvent::Resize { .. }))
    }

    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.count(|event| matches!(event, EngineEvent::SetOption { .. }))
    }

    /// Every committed configuration, oldest first.
    #[must_use]
    pub fn committed_options(&self) -> Vec<&ChartOption> {
        self.events
            .iter()
            .filter_map(|event| match event {
                EngineEvent::SetOption { option, .. } => Some(option.as_ref()),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn last_option(&self) -> Option<&ChartOption> {
        self.committed_options().last().copied()
    }

    #[must_use]
    pub fn last_event(&self) -> Option<&EngineEvent> {
        self.events.last()
    }

    /// Surfaces with an instance that has not been disposed yet.
    #[must_use]
    pub fn live_surfaces(&self) -> Vec<&SurfaceId> {
        self.live.values().collect()
    }

    fn count(&self, predicate: impl Fn(&EngineEvent) -> bool) -> usize {
        self.events.iter().filter(|event| predicate(event)).count()
    }
}

/// In-memory engine for tests and headless hosts.
///
/// Clones share one journal, so a test can keep a clone while the renderer
/// owns the engine and still inspect every call after unmount.
#[derive(Debug, Clone, Default)]
pub struct HeadlessEngine {
    journal: Rc<RefCell<EngineJournal>>,
}

impl HeadlessEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn journal(&self) -> Ref<'_, EngineJournal> {
        self.journal.borrow()
    }
}

impl Engine for HeadlessEngine {
    type Instance = HeadlessInstance;

    fn init(&mut self, surface: &SurfaceId, theme: &Theme) -> ChartResult<Self::Instance> {
        let mut journal = self.journal.borrow_mut();
        if journal.live.values().any(|live| live == surface) {
            return Err(ChartError::Engine(format!(
                "surface `{surface}` already has a live engine instance"
            )));
        }
        let id = journal.next_instance;
        journal.next_instance += 1;
        journal.live.insert(id, surface.clone());
        journal.events.push(EngineEvent::Init {
            instance: id,
            surface: surface.clone(),
            theme: theme.name.clone(),
        });
        Ok(HeadlessInstance {
            id,
            journal: Rc::clone(&self.journal),
            current: None,
            loading: false,
            disposed: false,
        })
    }
}

#[derive(Debug)]
pub struct HeadlessInstance {
    id: InstanceId,
    journal: Rc<RefCell<EngineJournal>>,
    current: Option<ChartOption>,
    loading: bool,
    disposed: bool,
}

impl HeadlessInstance {
    #[must_use]
    pub fn id(&self) -> InstanceId {
        self.id
    }

    #[must_use]
    pub fn current_option(&self) -> Option<&ChartOption> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    fn record(&self, event: EngineEvent) {
        self.journal.borrow_mut().events.push(event);
    }

    fn ensure_live(&self) -> ChartResult<()> {
        if self.disposed {
            return Err(ChartError::Disposed);
        }
        Ok(())
    }
}

impl EngineInstance for HeadlessInstance {
    fn set_option(&mut self, option: &ChartOption) -> ChartResult<()> {
        self.ensure_live()?;
        self.current = Some(option.clone());
        self.record(EngineEvent::SetOption {
            instance: self.id,
            option: Box::new(option.clone()),
        });
        Ok(())
    }

    fn show_loading(&mut self, overlay: &LoadingOverlay) {
        if self.disposed {
            return;
        }
        self.loading = true;
        self.record(EngineEvent::ShowLoading {
            instance: self.id,
            text: overlay.text.clone(),
        });
    }

    fn hide_loading(&mut self) {
        if self.disposed {
            return;
        }
        self.loading = false;
        self.record(EngineEvent::HideLoading { instance: self.id });
    }

    fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.ensure_live()?;
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.record(EngineEvent::Resize {
            instance: self.id,
            viewport,
        });
        Ok(())
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.current = None;
        let mut journal = self.journal.borrow_mut();
        journal.live.shift_remove(&self.id);
        journal
            .events
            .push(EngineEvent::Dispose { instance: self.id });
    }
}
