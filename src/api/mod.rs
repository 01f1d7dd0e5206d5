mod axis_frame_builder;
mod bar_chart;
mod bar_frame_builder;
mod bar_layout;
mod chart_config;
mod chart_snapshot;
mod json_contract;

pub use bar_chart::BarChart;
pub use bar_frame_builder::format_bar_value;
pub use bar_layout::{BarChartLayout, BarGeometry};
pub use chart_config::{
    AxisStyle, BarChartConfig, CaptionConfig, FontSizes, MAX_VALUE_TICK_COUNT,
};
pub use chart_snapshot::ChartSnapshot;
pub use json_contract::{CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshotJsonContractV1};
