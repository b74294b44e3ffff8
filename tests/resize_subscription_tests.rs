use std::cell::Cell;
use std::rc::Rc;

use dashboard_charts::api::{ChartRenderer, RendererConfig};
use dashboard_charts::core::{
    CategoryValue, ChartRequest, DistributionChart, RankingChart, Theme, Viewport,
};
use dashboard_charts::option::{ChartOption, Orient};
use dashboard_charts::platform::{ResizeBus, Surface, SurfaceId};
use dashboard_charts::render::{
    Engine, EngineEvent, EngineInstance, HeadlessEngine, HeadlessInstance, LoadingOverlay,
};
use dashboard_charts::{ChartError, ChartResult};

/// Headless engine whose commits can be switched to fail.
#[derive(Clone, Default)]
struct RejectingEngine {
    inner: HeadlessEngine,
    reject_commits: Rc<Cell<bool>>,
}

struct RejectingInstance {
    inner: HeadlessInstance,
    reject_commits: Rc<Cell<bool>>,
}

impl Engine for RejectingEngine {
    type Instance = RejectingInstance;

    fn init(&mut self, surface: &SurfaceId, theme: &Theme) -> ChartResult<Self::Instance> {
        Ok(RejectingInstance {
            inner: self.inner.init(surface, theme)?,
            reject_commits: Rc::clone(&self.reject_commits),
        })
    }
}

impl EngineInstance for RejectingInstance {
    fn set_option(&mut self, option: &ChartOption) -> ChartResult<()> {
        if self.reject_commits.get() {
            return Err(ChartError::Engine("commit rejected".to_owned()));
        }
        self.inner.set_option(option)
    }

    fn show_loading(&mut self, overlay: &LoadingOverlay) {
        self.inner.show_loading(overlay);
    }

    fn hide_loading(&mut self) {
        self.inner.hide_loading();
    }

    fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.inner.resize(viewport)
    }

    fn dispose(&mut self) {
        self.inner.dispose();
    }
}

fn ring() -> ChartRequest {
    ChartRequest::new(DistributionChart::new(vec![
        CategoryValue::new("Blocked", 7.0),
        CategoryValue::new("Allowed", 3.0),
    ]))
}

#[test]
fn resize_fits_committed_state_without_recommitting() {
    let engine = HeadlessEngine::new();
    let recorder = engine.clone();
    let bus = ResizeBus::new();
    let mut renderer = ChartRenderer::new(engine, RendererConfig::default()).expect("init");
    renderer
        .mount(Surface::new("movements", Viewport::new(1280, 800)), &bus)
        .expect("mount");
    renderer.render(&ring()).expect("render");
    assert!(renderer.has_resize_subscription());

    assert_eq!(bus.emit(Viewport::new(900, 600)), 1);

    let journal = recorder.journal();
    assert_eq!(journal.commit_count(), 1);
    assert_eq!(journal.resize_count(), 1);
    assert!(matches!(
        journal.last_event(),
        Some(EngineEvent::Resize { viewport, .. }) if *viewport == Viewport::new(900, 600)
    ));
}

#[test]
fn each_render_replaces_the_resize_listener() {
    let bus = ResizeBus::new();
    let mut renderer =
        ChartRenderer::new(HeadlessEngine::new(), RendererConfig::default()).expect("init");
    renderer
        .mount(Surface::new("movements", Viewport::new(1280, 800)), &bus)
        .expect("mount");

    for _ in 0..4 {
        renderer.render(&ring()).expect("render");
        assert_eq!(bus.listener_count(), 1);
    }
}

#[test]
fn resize_after_unmount_never_reaches_engine() {
    let engine = HeadlessEngine::new();
    let recorder = engine.clone();
    let bus = ResizeBus::new();
    let mut renderer = ChartRenderer::new(engine, RendererConfig::default()).expect("init");
    renderer
        .mount(Surface::new("movements", Viewport::new(1280, 800)), &bus)
        .expect("mount");
    renderer.render(&ring()).expect("render");

    renderer.unmount();
    assert_eq!(bus.listener_count(), 0);
    assert_eq!(bus.emit(Viewport::new(320, 240)), 0);

    let journal = recorder.journal();
    assert_eq!(journal.resize_count(), 0);
    assert!(matches!(journal.last_event(), Some(EngineEvent::Dispose { .. })));
}

#[test]
fn resized_viewport_feeds_next_resolution() {
    let engine = HeadlessEngine::new();
    let recorder = engine.clone();
    let bus = ResizeBus::new();
    let mut renderer = ChartRenderer::new(engine, RendererConfig::default()).expect("init");
    renderer
        .mount(Surface::new("movements", Viewport::new(1280, 800)), &bus)
        .expect("mount");
    renderer.render(&ring()).expect("wide render");

    bus.emit(Viewport::new(400, 700));
    assert_eq!(renderer.viewport(), Viewport::new(400, 700));
    renderer.render(&ring()).expect("narrow render");

    let journal = recorder.journal();
    let options = journal.committed_options();
    let orient = |index: usize| options[index].legend.as_ref().and_then(|l| l.orient);
    assert_eq!(orient(0), Some(Orient::Vertical));
    assert_eq!(orient(1), Some(Orient::Horizontal));
}

#[test]
fn renderers_on_one_bus_keep_separate_instances() {
    let engine = HeadlessEngine::new();
    let recorder = engine.clone();
    let bus = ResizeBus::new();
    let mut left = ChartRenderer::new(engine.clone(), RendererConfig::default()).expect("init");
    let mut right = ChartRenderer::new(engine, RendererConfig::default()).expect("init");
    left.mount(Surface::new("left", Viewport::new(1280, 800)), &bus)
        .expect("mount left");
    right
        .mount(Surface::new("right", Viewport::new(1280, 800)), &bus)
        .expect("mount right");

    left.render(&ring()).expect("render left");
    right
        .render(&ChartRequest::new(RankingChart::new(vec![CategoryValue::new("x", 1.0)])))
        .expect("render right");
    assert_eq!(bus.emit(Viewport::new(1000, 700)), 2);

    left.unmount();
    assert_eq!(bus.emit(Viewport::new(1100, 700)), 1);

    let journal = recorder.journal();
    assert_eq!(journal.init_count(), 2);
    assert_eq!(journal.resize_count(), 3);
    assert_eq!(journal.live_surfaces().len(), 1);
}

#[test]
fn failed_commit_keeps_resize_listener_alive() {
    let engine = RejectingEngine::default();
    let recorder = engine.inner.clone();
    let reject = Rc::clone(&engine.reject_commits);
    let bus = ResizeBus::new();
    let mut renderer = ChartRenderer::new(engine, RendererConfig::default()).expect("init");
    renderer
        .mount(Surface::new("movements", Viewport::new(1280, 800)), &bus)
        .expect("mount");
    renderer.render(&ring()).expect("first render");

    reject.set(true);
    let err = renderer.render(&ring()).expect_err("commit rejected");
    assert!(matches!(err, ChartError::Engine(_)));

    assert!(renderer.is_mounted());
    assert!(renderer.has_resize_subscription());
    assert_eq!(bus.listener_count(), 1);
    assert_eq!(bus.emit(Viewport::new(900, 600)), 1);

    let journal = recorder.journal();
    assert_eq!(journal.commit_count(), 1);
    assert_eq!(journal.resize_count(), 1);
}

#[test]
fn remounting_with_new_bus_moves_the_listener() {
    let engine = HeadlessEngine::new();
    let recorder = engine.clone();
    let old_bus = ResizeBus::new();
    let new_bus = ResizeBus::new();
    let mut renderer = ChartRenderer::new(engine, RendererConfig::default()).expect("init");
    renderer
        .mount(Surface::new("movements", Viewport::new(1280, 800)), &old_bus)
        .expect("mount");
    renderer.render(&ring()).expect("render");

    renderer
        .mount(Surface::new("movements", Viewport::new(1280, 800)), &new_bus)
        .expect("remount");
    assert!(renderer.has_resize_subscription());
    assert_eq!(old_bus.emit(Viewport::new(640, 480)), 0);
    assert_eq!(new_bus.emit(Viewport::new(1000, 700)), 1);

    let journal = recorder.journal();
    assert_eq!(journal.init_count(), 1);
    assert_eq!(journal.commit_count(), 1);
    assert!(matches!(
        journal.last_event(),
        Some(EngineEvent::Resize { viewport, .. }) if *viewport == Viewport::new(1000, 700)
    ));
}
