#![cfg(feature = "cairo-backend")]

use offer_chart::ChartError;
use offer_chart::api::{BarChart, BarChartConfig};
use offer_chart::core::{Viewport, default_weekly_offers};
use offer_chart::platform::Document;
use offer_chart::render::CairoRenderer;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_every_chart_primitive() {
    let renderer = CairoRenderer::new(700, 400).expect("renderer");
    let mut chart = BarChart::new(renderer, BarChartConfig::default()).expect("chart init");
    let mut document = Document::new().with_container(".weekly-chart", Viewport::new(700, 400));

    chart
        .render(&mut document, ".weekly-chart", &default_weekly_offers())
        .expect("render");
    let stats = chart.renderer().last_stats();

    assert_eq!(stats.rects_drawn, 5);
    assert_eq!(stats.lines_drawn, 24);
    assert_eq!(stats.texts_drawn, 26);
}

#[test]
fn cairo_surface_follows_container_size() {
    let renderer = CairoRenderer::new(10, 10).expect("renderer");
    let mut chart = BarChart::new(renderer, BarChartConfig::default()).expect("chart init");
    let mut document = Document::new().with_container(".weekly-chart", Viewport::new(640, 360));

    chart
        .render(&mut document, ".weekly-chart", &default_weekly_offers())
        .expect("render");

    let surface = chart.renderer().surface();
    assert_eq!((surface.width(), surface.height()), (640, 360));
}
