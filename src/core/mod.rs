pub mod band_scale;
pub mod scale;
pub mod ticks;
pub mod types;

pub use band_scale::BandScale;
pub use scale::LinearScale;
pub use types::{DataPoint, DrawableRegion, Margins, Viewport, default_weekly_offers};
