use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("no container matches selector `{selector}`")]
    ContainerNotFound { selector: String },

    #[error("bar chart requires at least one data point")]
    EmptyData,

    #[error("drawable region is not positive after margins: width={width}, height={height}")]
    DrawableRegionTooSmall { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}
