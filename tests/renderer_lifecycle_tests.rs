use dashboard_charts::ChartError;
use dashboard_charts::api::{ChartRenderer, RenderOutcome, RendererConfig, SkipReason};
use dashboard_charts::core::{CategoryValue, ChartRequest, RankingChart, Viewport};
use dashboard_charts::platform::{ResizeBus, Surface};
use dashboard_charts::render::{EngineEvent, HeadlessEngine};

fn ranking_request() -> ChartRequest {
    ChartRequest::new(RankingChart::new(vec![
        CategoryValue::new("A", 5.0),
        CategoryValue::new("B", 3.0),
    ]))
}

fn mounted_renderer() -> (ChartRenderer<HeadlessEngine>, HeadlessEngine, ResizeBus) {
    let engine = HeadlessEngine::new();
    let recorder = engine.clone();
    let bus = ResizeBus::new();
    let mut renderer =
        ChartRenderer::new(engine, RendererConfig::default()).expect("renderer init");
    renderer
        .mount(Surface::new("alerts", Viewport::new(1280, 800)), &bus)
        .expect("mount");
    (renderer, recorder, bus)
}

#[test]
fn render_before_mount_is_a_silent_noop() {
    let engine = HeadlessEngine::new();
    let recorder = engine.clone();
    let mut renderer =
        ChartRenderer::new(engine, RendererConfig::default()).expect("renderer init");

    let outcome = renderer.render(&ranking_request()).expect("render");
    assert_eq!(outcome, RenderOutcome::Skipped(SkipReason::SurfaceUnbound));
    assert!(recorder.journal().events().is_empty());
    assert!(!renderer.has_engine_instance());
}

#[test]
fn engine_instance_is_created_lazily_and_reused() {
    let (mut renderer, recorder, _bus) = mounted_renderer();
    assert!(!renderer.has_engine_instance());

    renderer.render(&ranking_request()).expect("first render");
    renderer.render(&ranking_request()).expect("second render");

    let journal = recorder.journal();
    assert_eq!(journal.init_count(), 1);
    assert_eq!(journal.commit_count(), 2);
    assert!(matches!(
        journal.events().first(),
        Some(EngineEvent::Init { theme, .. }) if theme == "dark"
    ));
}

#[test]
fn identical_requests_commit_identical_trees() {
    let (mut renderer, recorder, _bus) = mounted_renderer();
    let outcome = renderer.render(&ranking_request()).expect("render");
    assert_eq!(outcome, RenderOutcome::Committed { series: 1 });
    renderer.render(&ranking_request()).expect("render again");

    let journal = recorder.journal();
    let options = journal.committed_options();
    assert_eq!(options.len(), 2);
    assert_eq!(options[0], options[1]);
}

#[test]
fn loading_shows_overlay_without_committing() {
    let (mut renderer, recorder, _bus) = mounted_renderer();
    let outcome = renderer
        .render(&ranking_request().with_loading(true))
        .expect("render");
    assert_eq!(outcome, RenderOutcome::Loading);

    let journal = recorder.journal();
    assert_eq!(journal.commit_count(), 0);
    assert!(matches!(
        journal.last_event(),
        Some(EngineEvent::ShowLoading { text, .. }) if text == "Loading..."
    ));
}

#[test]
fn leaving_loading_clears_overlay_before_commit() {
    let (mut renderer, recorder, _bus) = mounted_renderer();
    renderer
        .render(&ranking_request().with_loading(true))
        .expect("loading pass");
    renderer.render(&ranking_request()).expect("data pass");

    let journal = recorder.journal();
    let tail: Vec<_> = journal.events().iter().rev().take(2).collect();
    assert!(matches!(tail[0], EngineEvent::SetOption { .. }));
    assert!(matches!(tail[1], EngineEvent::HideLoading { .. }));
}

#[test]
fn unmount_disposes_exactly_once_and_blocks_further_renders() {
    let (mut renderer, recorder, _bus) = mounted_renderer();
    renderer.render(&ranking_request()).expect("render");

    renderer.unmount();
    renderer.unmount();
    assert!(renderer.is_disposed());
    assert!(!renderer.has_engine_instance());

    let outcome = renderer.render(&ranking_request()).expect("render after unmount");
    assert_eq!(outcome, RenderOutcome::Skipped(SkipReason::Disposed));

    let remount = renderer.mount(Surface::new("alerts", Viewport::new(10, 10)), &ResizeBus::new());
    assert!(matches!(remount, Err(ChartError::Disposed)));

    drop(renderer);
    let journal = recorder.journal();
    assert_eq!(journal.dispose_count(), 1);
    assert_eq!(journal.commit_count(), 1);
    assert!(journal.live_surfaces().is_empty());
}

#[test]
fn dropping_renderer_disposes_instance() {
    let (mut renderer, recorder, bus) = mounted_renderer();
    renderer.render(&ranking_request()).expect("render");
    drop(renderer);

    assert_eq!(recorder.journal().dispose_count(), 1);
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn mounting_another_surface_releases_previous_instance() {
    let (mut renderer, recorder, bus) = mounted_renderer();
    renderer.render(&ranking_request()).expect("render");

    renderer
        .mount(Surface::new("drift", Viewport::new(1280, 800)), &bus)
        .expect("rebind");
    assert!(!renderer.has_engine_instance());
    renderer.render(&ranking_request()).expect("render on new surface");

    let journal = recorder.journal();
    assert_eq!(journal.init_count(), 2);
    assert_eq!(journal.dispose_count(), 1);
    assert_eq!(journal.live_surfaces().len(), 1);
    assert_eq!(journal.live_surfaces()[0].as_str(), "drift");
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = RendererConfig::default().with_responsive_breakpoint_px(0);
    let result = ChartRenderer::new(HeadlessEngine::new(), config);
    assert!(matches!(result, Err(ChartError::InvalidConfig(_))));
}
