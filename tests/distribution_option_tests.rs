use dashboard_charts::api::{HoverTarget, RendererConfig, resolve_chart_option};
use dashboard_charts::core::{
    CategoryValue, ChartRequest, DISTRIBUTION_PALETTE, DistributionChart, RingRadius,
};
use dashboard_charts::option::{Orient, Series, TooltipTrigger};

fn severity_mix() -> DistributionChart {
    DistributionChart::new(vec![
        CategoryValue::new("Critical", 12.0),
        CategoryValue::new("High", 30.0),
        CategoryValue::new("Medium", 41.0),
    ])
}

#[test]
fn ring_defaults_to_forty_seventy_with_hidden_labels() {
    let request = ChartRequest::new(severity_mix().with_title("Severity"));
    let option = resolve_chart_option(&request, &RendererConfig::default(), 1280);

    let Series::Pie(pie) = &option.series[0] else {
        panic!("expected pie series");
    };
    assert_eq!(pie.radius, RingRadius::new("40%", "70%"));
    assert_eq!(pie.data.len(), 3);
    assert!(!pie.label.show);
    assert!(!pie.label_line.show);
    assert!(pie.emphasis.label.as_ref().is_some_and(|label| label.show));
    assert_eq!(
        option.title.as_ref().map(|t| t.text.as_str()),
        Some("Severity")
    );

    let palette = option.color.as_ref().expect("palette");
    assert_eq!(palette.len(), DISTRIBUTION_PALETTE.len());
    assert_eq!(palette[2], "#06b6d4");
}

#[test]
fn custom_radius_is_respected() {
    let request =
        ChartRequest::new(severity_mix().with_radius(RingRadius::new("0%", "80%")));
    let option = resolve_chart_option(&request, &RendererConfig::default(), 1280);
    let Series::Pie(pie) = &option.series[0] else {
        panic!("expected pie series");
    };
    assert_eq!(pie.radius.inner(), "0%");
    assert_eq!(pie.radius.outer(), "80%");
}

#[test]
fn legend_switches_to_bottom_strip_below_breakpoint() {
    let request = ChartRequest::new(severity_mix());
    let config = RendererConfig::default();

    let wide = resolve_chart_option(&request, &config, 768);
    let wide_legend = wide.legend.as_ref().expect("legend");
    assert_eq!(wide_legend.orient, Some(Orient::Vertical));
    assert_eq!(wide_legend.right.as_deref(), Some("10%"));
    assert_eq!(wide_legend.top.as_deref(), Some("center"));

    let narrow = resolve_chart_option(&request, &config, 767);
    let narrow_legend = narrow.legend.as_ref().expect("legend");
    assert_eq!(narrow_legend.orient, Some(Orient::Horizontal));
    assert_eq!(narrow_legend.bottom.as_deref(), Some("0%"));
    assert!(narrow_legend.top.is_none());
}

#[test]
fn breakpoint_comes_from_config() {
    let request = ChartRequest::new(severity_mix());
    let config = RendererConfig::default().with_responsive_breakpoint_px(1440);
    let option = resolve_chart_option(&request, &config, 1280);
    assert_eq!(
        option.legend.as_ref().and_then(|l| l.orient),
        Some(Orient::Horizontal)
    );
}

#[test]
fn item_tooltip_reports_segment_name_and_value() {
    let option = resolve_chart_option(
        &ChartRequest::new(severity_mix()),
        &RendererConfig::default(),
        1280,
    );
    assert_eq!(
        option.tooltip.as_ref().and_then(|t| t.trigger),
        Some(TooltipTrigger::Item)
    );
    let text = option
        .tooltip_text(HoverTarget::Item {
            series_index: 0,
            data_index: 1,
        })
        .expect("tooltip");
    assert_eq!(text.to_string(), "High: 30");
}

#[test]
fn empty_payload_renders_empty_ring() {
    let option = resolve_chart_option(
        &ChartRequest::new(DistributionChart::new(Vec::new())),
        &RendererConfig::default(),
        1280,
    );
    assert_eq!(option.series.len(), 1);
    assert_eq!(option.data_item_count(), 0);
    assert!(!option.is_blank());
}
