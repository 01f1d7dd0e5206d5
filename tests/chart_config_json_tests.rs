use offer_chart::ChartError;
use offer_chart::api::{
    BarChart, BarChartConfig, CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot,
    ChartSnapshotJsonContractV1,
};
use offer_chart::core::{Margins, Viewport, default_weekly_offers};
use offer_chart::render::NullRenderer;

#[test]
fn partial_config_json_keeps_defaults() {
    let config = BarChartConfig::from_json_str(
        r#"{
            "band_padding": 0.25,
            "captions": { "title": "Offers" },
            "margins": { "left": 80.0 }
        }"#,
    )
    .expect("config");

    let defaults = BarChartConfig::default();
    assert_eq!(config.band_padding, 0.25);
    assert_eq!(config.captions.title, "Offers");
    assert_eq!(config.captions.x_axis_title, defaults.captions.x_axis_title);
    assert_eq!(config.margins, Margins::new(50.0, 20.0, 100.0, 80.0));
    assert_eq!(config.fonts, defaults.fonts);
    assert_eq!(config.bar_color, defaults.bar_color);
}

#[test]
fn config_json_round_trip_preserves_every_field() {
    let config = BarChartConfig::default()
        .with_title("Weekly")
        .with_band_padding(0.2);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = BarChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn malformed_config_json_is_a_serialization_error() {
    let err = BarChartConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(matches!(err, ChartError::Serialization(_)));
}

#[test]
fn invalid_config_values_are_rejected_after_parsing() {
    let err = BarChartConfig::from_json_str(r#"{ "band_padding": 1.5 }"#).expect_err("padding");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = BarChartConfig::from_json_str(r#"{ "margins": { "top": -1.0 } }"#)
        .expect_err("margin");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = BarChartConfig::from_json_str(r#"{ "axis": { "value_tick_count": 1000000000 } }"#)
        .expect_err("tick count");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

fn weekly_snapshot() -> ChartSnapshot {
    BarChart::new(NullRenderer::default(), BarChartConfig::default())
        .expect("chart init")
        .snapshot(Viewport::new(700, 400), &default_weekly_offers())
        .expect("snapshot")
}

#[test]
fn snapshot_contract_carries_schema_version() {
    let snapshot = weekly_snapshot();
    let json = snapshot.to_json_contract_v1_pretty().expect("contract json");

    let contract: ChartSnapshotJsonContractV1 = serde_json::from_str(&json).expect("contract");
    assert_eq!(contract.schema_version, CHART_SNAPSHOT_JSON_SCHEMA_V1);
    assert_eq!(contract.snapshot, snapshot);
    assert_eq!(
        ChartSnapshot::from_json_compat_str(&json).expect("compat"),
        snapshot
    );
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let snapshot = weekly_snapshot();
    let json = serde_json::to_string(&snapshot).expect("bare json");
    assert_eq!(
        ChartSnapshot::from_json_compat_str(&json).expect("compat"),
        snapshot
    );
}

#[test]
fn unknown_schema_version_is_rejected() {
    let snapshot = weekly_snapshot();
    let payload = ChartSnapshotJsonContractV1 {
        schema_version: 99,
        snapshot,
    };
    let json = serde_json::to_string(&payload).expect("json");

    let err = ChartSnapshot::from_json_compat_str(&json).expect_err("unsupported version");
    assert!(matches!(err, ChartError::Serialization(message) if message.contains("99")));
}
