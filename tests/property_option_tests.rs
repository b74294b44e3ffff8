use dashboard_charts::api::{ChartRenderer, RenderOutcome, RendererConfig, resolve_chart_option};
use dashboard_charts::core::{
    CategoryValue, ChartRequest, DistributionChart, PiecewiseScale, ProfileAxis, ProfileChart,
    ProfileSeries, RankingChart, Viewport,
};
use dashboard_charts::api::HoverTarget;
use dashboard_charts::platform::{ResizeBus, Surface};
use dashboard_charts::render::HeadlessEngine;
use proptest::prelude::*;

fn category_values() -> impl Strategy<Value = Vec<CategoryValue>> {
    prop::collection::vec(
        ("[a-z]{1,8}", -1_000.0f64..1_000.0)
            .prop_map(|(label, magnitude)| CategoryValue::new(label, magnitude)),
        0..24,
    )
}

proptest! {
    #[test]
    fn ranking_bar_count_matches_payload(
        data in category_values(),
        horizontal in any::<bool>(),
        viewport_width in 200u32..3_000
    ) {
        let len = data.len();
        let request = ChartRequest::new(RankingChart::new(data).with_horizontal(horizontal));
        let option = resolve_chart_option(&request, &RendererConfig::default(), viewport_width);
        prop_assert_eq!(option.series.len(), 1);
        prop_assert_eq!(option.data_item_count(), len);
        let labels = option
            .category_axis()
            .and_then(|axis| axis.data.as_ref())
            .map(Vec::len);
        prop_assert_eq!(labels, Some(len));
    }

    #[test]
    fn distribution_segment_count_matches_payload(
        data in category_values(),
        viewport_width in 200u32..3_000
    ) {
        let len = data.len();
        let request = ChartRequest::new(DistributionChart::new(data));
        let option = resolve_chart_option(&request, &RendererConfig::default(), viewport_width);
        prop_assert_eq!(option.data_item_count(), len);
    }

    #[test]
    fn resolution_is_pure(data in category_values(), viewport_width in 200u32..3_000) {
        let request = ChartRequest::new(DistributionChart::new(data));
        let config = RendererConfig::default();
        prop_assert_eq!(
            resolve_chart_option(&request, &config, viewport_width),
            resolve_chart_option(&request, &config, viewport_width)
        );
    }

    #[test]
    fn loading_never_commits_data(data in category_values(), horizontal in any::<bool>()) {
        let engine = HeadlessEngine::new();
        let recorder = engine.clone();
        let bus = ResizeBus::new();
        let mut renderer = ChartRenderer::new(engine, RendererConfig::default()).expect("init");
        renderer
            .mount(Surface::new("prop", Viewport::new(1024, 768)), &bus)
            .expect("mount");

        let request = ChartRequest::new(RankingChart::new(data).with_horizontal(horizontal))
            .with_loading(true);
        let outcome = renderer.render(&request).expect("render");
        prop_assert_eq!(outcome, RenderOutcome::Loading);
        prop_assert_eq!(recorder.journal().commit_count(), 0);
    }

    #[test]
    fn bucket_classification_is_total_and_ordered(a in -50.0f64..50.0, b in -50.0f64..50.0) {
        let scale = PiecewiseScale::intensity();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_bucket = scale.classify(low).expect("bucket");
        let high_bucket = scale.classify(high).expect("bucket");
        prop_assert!(low_bucket <= high_bucket);
        prop_assert!(high_bucket < scale.buckets().len());
    }

    #[test]
    fn only_exact_zero_reads_not_available(value in -100.0f64..100.0) {
        let request = ChartRequest::new(ProfileChart::new(
            vec![ProfileAxis::new("Axis", 100.0)],
            vec![ProfileSeries::new(vec![value])],
        ));
        let option = resolve_chart_option(&request, &RendererConfig::default(), 1280);
        let text = option
            .tooltip_text(HoverTarget::Item { series_index: 0, data_index: 0 })
            .expect("tooltip");
        let expected = if value == 0.0 { "Axis: N/A".to_owned() } else { format!("Axis: {value}") };
        prop_assert_eq!(text.lines, vec![expected]);
    }
}
