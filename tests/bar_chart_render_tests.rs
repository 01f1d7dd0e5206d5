use approx::assert_relative_eq;
use offer_chart::ChartError;
use offer_chart::api::{BarChart, BarChartConfig};
use offer_chart::core::{DataPoint, Margins, Viewport, default_weekly_offers};
use offer_chart::platform::Document;
use offer_chart::render::{CanvasLayerKind, FontWeight, NullRenderer, SvgRenderer, TextHAlign};

const SELECTOR: &str = ".weekly-chart";

fn weekly_document() -> Document {
    Document::new().with_container(SELECTOR, Viewport::new(700, 400))
}

fn weekly_chart() -> BarChart<NullRenderer> {
    BarChart::new(NullRenderer::default(), BarChartConfig::default()).expect("chart init")
}

#[test]
fn weekly_offers_end_to_end_geometry() {
    let chart = weekly_chart();
    let snapshot = chart
        .snapshot(Viewport::new(700, 400), &default_weekly_offers())
        .expect("snapshot");

    assert_eq!(snapshot.drawable.width, 620.0);
    assert_eq!(snapshot.drawable.height, 250.0);
    assert_eq!(snapshot.value_domain, (0.0, 120.0));

    let tallest = snapshot.tallest_bar().expect("tallest");
    let shortest = snapshot.shortest_bar().expect("shortest");
    assert_eq!(tallest.label, "Fri 07");
    assert_eq!(shortest.label, "Wed 05\n12 PM");

    for bar in &snapshot.bars {
        assert_relative_eq!(bar.height / 250.0, bar.value / 120.0, epsilon = 1e-12);
        assert_relative_eq!(bar.width, 620.0 / 5.4 * 0.6, epsilon = 1e-9);
    }
}

#[test]
fn render_mounts_exactly_one_surface_per_container() {
    let mut chart = weekly_chart();
    let mut document = weekly_document();
    let data = default_weekly_offers();

    chart.render(&mut document, SELECTOR, &data).expect("first render");
    chart.render(&mut document, SELECTOR, &data).expect("second render");

    let container = document.container(SELECTOR).expect("container");
    assert_eq!(container.surface_count(), 1);
    assert_eq!(chart.renderer().render_count, 2);
}

#[test]
fn repeated_renders_are_deterministic() {
    let mut chart = weekly_chart();
    let mut document = weekly_document();
    let data = default_weekly_offers();

    chart.render(&mut document, SELECTOR, &data).expect("first render");
    let first = document
        .container(SELECTOR)
        .expect("container")
        .surface()
        .cloned()
        .expect("surface");
    chart.render(&mut document, SELECTOR, &data).expect("second render");
    let second = document
        .container(SELECTOR)
        .expect("container")
        .surface()
        .cloned()
        .expect("surface");

    assert_eq!(first, second);
}

#[test]
fn surface_carries_every_chart_element() {
    let chart = weekly_chart();
    let frame = chart
        .build_frame(Viewport::new(700, 400), &default_weekly_offers())
        .expect("frame");

    assert_eq!(frame.viewport, Viewport::new(700, 400));
    assert_eq!((frame.origin_x, frame.origin_y), (60.0, 50.0));

    let title = frame.layer(CanvasLayerKind::Title).expect("title layer");
    assert_eq!(title.texts.len(), 1);
    assert_eq!(title.texts[0].text, "Liczba ofert w ostatnich 7 dniach");
    assert_eq!(title.texts[0].weight, FontWeight::Bold);
    assert_eq!((title.texts[0].x, title.texts[0].y), (310.0, -10.0));

    let bars = frame.layer(CanvasLayerKind::Bars).expect("bars layer");
    assert_eq!(bars.rects.len(), 5);
    assert!(bars.rects.iter().all(|rect| rect.fill_color.to_hex() == "#0096c7"));

    let labels = frame.layer(CanvasLayerKind::BarLabels).expect("labels layer");
    let texts: Vec<&str> = labels.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["98", "86", "68", "105", "111"]);
    for (rect, label) in bars.rects.iter().zip(&labels.texts) {
        assert_relative_eq!(label.x, rect.x + rect.width / 2.0, epsilon = 1e-9);
        assert_relative_eq!(label.y, rect.y - 5.0, epsilon = 1e-9);
        assert_eq!(label.h_align, TextHAlign::Center);
    }

    let captions = frame.layer(CanvasLayerKind::AxisTitles).expect("captions");
    let x_caption = &captions.texts[0];
    assert_eq!(x_caption.text, "Data");
    assert_eq!((x_caption.x, x_caption.y), (310.0, 310.0));
    let y_caption = &captions.texts[1];
    assert_eq!(y_caption.text, "Liczba ofert");
    assert_eq!(y_caption.rotation_deg, -90.0);
    assert_relative_eq!(y_caption.x, -40.0, epsilon = 1e-9);
    assert_relative_eq!(y_caption.y, 125.0, epsilon = 1e-9);
}

#[test]
fn category_axis_labels_are_rotated_and_end_anchored() {
    let chart = weekly_chart();
    let frame = chart
        .build_frame(Viewport::new(700, 400), &default_weekly_offers())
        .expect("frame");
    let axis = frame.layer(CanvasLayerKind::CategoryAxis).expect("x axis");

    assert_eq!(axis.texts.len(), 5);
    assert_eq!(axis.lines.len(), 3 + 5);
    assert_eq!(axis.texts[0].text, "Mon 03\n12 PM");
    assert_eq!(axis.texts[0].lines().len(), 2);
    for text in &axis.texts {
        assert_eq!(text.rotation_deg, -45.0);
        assert_eq!(text.h_align, TextHAlign::Right);
        assert!(text.y > 250.0);
    }
}

#[test]
fn value_axis_ticks_cover_nice_domain() {
    let chart = weekly_chart();
    let frame = chart
        .build_frame(Viewport::new(700, 400), &default_weekly_offers())
        .expect("frame");
    let axis = frame.layer(CanvasLayerKind::ValueAxis).expect("y axis");

    let labels: Vec<&str> = axis.texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels.first(), Some(&"0"));
    assert_eq!(labels.last(), Some(&"120"));
    assert_eq!(labels.len(), 13);
    assert_eq!(axis.texts[0].y, 250.0);
    assert_eq!(axis.texts[12].y, 0.0);
}

#[test]
fn missing_container_is_reported() {
    let mut chart = weekly_chart();
    let mut document = weekly_document();

    let err = chart
        .render(&mut document, "#nope", &default_weekly_offers())
        .expect_err("missing container");
    assert!(matches!(err, ChartError::ContainerNotFound { .. }));
    assert_eq!(chart.renderer().render_count, 0);
}

#[test]
fn failed_render_keeps_previous_surface() {
    let mut chart = weekly_chart();
    let mut document = weekly_document();
    chart
        .render(&mut document, SELECTOR, &default_weekly_offers())
        .expect("initial render");

    let err = chart
        .render(&mut document, SELECTOR, &[])
        .expect_err("empty data");
    assert!(matches!(err, ChartError::EmptyData));

    let err = chart
        .render(&mut document, SELECTOR, &[DataPoint::new("Mon", -3.0)])
        .expect_err("negative value");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let surface = document
        .container(SELECTOR)
        .expect("container")
        .surface()
        .expect("surface kept");
    assert_eq!(surface.rects().count(), 5);
}

#[test]
fn undersized_container_is_reported() {
    let mut chart = weekly_chart();
    let mut document = Document::new().with_container(SELECTOR, Viewport::new(700, 120));

    let err = chart
        .render(&mut document, SELECTOR, &default_weekly_offers())
        .expect_err("too short");
    assert!(matches!(err, ChartError::DrawableRegionTooSmall { .. }));
    assert_eq!(
        document.container(SELECTOR).expect("container").surface_count(),
        0
    );
}

#[test]
fn empty_label_draws_tick_and_bar_without_text() {
    let data = vec![DataPoint::new("", 5.0), DataPoint::new("Tue", 7.0)];

    let mut chart = weekly_chart();
    let mut document = weekly_document();
    chart
        .render(&mut document, SELECTOR, &data)
        .expect("render with empty label");

    let frame = document
        .container(SELECTOR)
        .expect("container")
        .surface()
        .expect("surface");
    let axis = frame.layer(CanvasLayerKind::CategoryAxis).expect("x axis");
    assert_eq!(axis.lines.len(), 3 + 2);
    assert_eq!(axis.texts.len(), 1);
    assert_eq!(axis.texts[0].text, "Tue");
    assert_eq!(frame.layer(CanvasLayerKind::Bars).expect("bars").rects.len(), 2);

    let mut svg_chart =
        BarChart::new(SvgRenderer::new(), BarChartConfig::default()).expect("chart init");
    let mut svg_document = weekly_document();
    svg_chart
        .render(&mut svg_document, SELECTOR, &data)
        .expect("svg render with empty label");
    let svg = svg_chart.into_renderer().into_document().expect("svg");
    assert_eq!(svg.matches("<rect ").count(), 2);
}

#[test]
fn zero_sized_container_is_reported() {
    let chart = weekly_chart();
    let err = chart
        .build_frame(Viewport::new(0, 0), &default_weekly_offers())
        .expect_err("zero viewport");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn custom_margins_shift_the_origin() {
    let config = BarChartConfig::default().with_margins(Margins::new(10.0, 10.0, 10.0, 10.0));
    let chart = BarChart::new(NullRenderer::default(), config).expect("chart init");
    let snapshot = chart
        .snapshot(Viewport::new(200, 100), &default_weekly_offers())
        .expect("snapshot");
    assert_eq!(snapshot.drawable.width, 180.0);
    assert_eq!(snapshot.drawable.height, 80.0);
    assert_eq!((snapshot.drawable.origin_x, snapshot.drawable.origin_y), (10.0, 10.0));
}

#[test]
fn repeated_values_share_bar_height() {
    let data = vec![
        DataPoint::new("Mon", 98.0),
        DataPoint::new("Tue", 40.0),
        DataPoint::new("Wed", 98.0),
    ];
    let snapshot = weekly_chart()
        .snapshot(Viewport::new(700, 400), &data)
        .expect("snapshot");

    assert_eq!(snapshot.bars[0].height, snapshot.bars[2].height);
    assert!(snapshot.bars[1].height < snapshot.bars[0].height);
}
