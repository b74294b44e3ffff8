use dashboard_charts::api::{ChartRenderer, RenderOutcome, RendererConfig};
use dashboard_charts::core::{
    CategoryValue, ChartRequest, DistributionChart, GridCell, IntensityGridChart, ProfileAxis,
    ProfileChart, ProfileSeries, RankingChart, TimeseriesChart, TimeseriesSeries, Viewport,
};
use dashboard_charts::platform::{ResizeBus, Surface};
use dashboard_charts::render::HeadlessEngine;

#[test]
fn dashboard_smoke_flow() {
    let engine = HeadlessEngine::new();
    let recorder = engine.clone();
    let bus = ResizeBus::new();
    let mut renderer =
        ChartRenderer::new(engine, RendererConfig::default()).expect("renderer init");
    renderer
        .mount(Surface::new("home", Viewport::new(1440, 900)), &bus)
        .expect("mount");

    let requests = [
        ChartRequest::new(DistributionChart::new(vec![CategoryValue::new("a", 1.0)])),
        ChartRequest::new(RankingChart::new(vec![CategoryValue::new("b", 2.0)])),
        ChartRequest::new(IntensityGridChart::new(
            vec!["Mon".to_owned()],
            vec!["W1".to_owned()],
            vec![GridCell::new(0, 0, 5.0)],
        )),
        ChartRequest::new(ProfileChart::new(
            vec![ProfileAxis::new("Recon", 10.0)],
            vec![ProfileSeries::new(vec![3.0])],
        )),
        ChartRequest::new(TimeseriesChart::new(
            vec!["t0".to_owned()],
            vec![TimeseriesSeries::new("s", vec![1.0])],
        )),
    ];

    for request in &requests {
        let outcome = renderer.render(request).expect("render");
        assert!(matches!(outcome, RenderOutcome::Committed { series } if series >= 1));
    }
    bus.emit(Viewport::new(800, 600));
    renderer.unmount();

    let journal = recorder.journal();
    assert_eq!(journal.init_count(), 1);
    assert_eq!(journal.commit_count(), requests.len());
    assert_eq!(journal.resize_count(), 1);
    assert_eq!(journal.dispose_count(), 1);
}
