//! offer-chart: headless bar chart renderer for daily job-offer counts.
//!
//! Layout math lives in `core`, chart assembly in `api`, backends in `render`
//! and the page/resize lifecycle in `platform`.

pub mod api;
pub mod core;
pub mod error;
pub mod platform;
pub mod render;
pub mod telemetry;

pub use api::{BarChart, BarChartConfig};
pub use error::{ChartError, ChartResult};
