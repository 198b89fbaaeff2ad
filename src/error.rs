// error.rs

/// Errors produced while loading, sizing, summarizing or exporting yield data.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// Reading the dataset or writing an export failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset is not valid JSON, or not shaped like GeoJSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document root is a bare geometry, so there are no properties to map.
    #[error("GeoJSON root is a {0}, expected a FeatureCollection")]
    NotAFeatureCollection(String),

    /// A summary was requested over zero features.
    #[error("cannot summarize an empty dataset")]
    EmptyDataset,

    /// Features exist but none carries a numeric value for the attribute.
    #[error("no numeric values for attribute '{attribute}'")]
    NoValues { attribute: String },

    /// The value has no real radius under the area scale.
    #[error("value {value} is outside the symbol radius domain")]
    OutOfDomain { value: f64 },

    /// No attribute carries the requested year label.
    #[error("no yield attribute for year '{0}'")]
    UnknownAttribute(String),

    /// A slider position outside `0..len`.
    #[error("index {index} is out of range for {len} attributes")]
    IndexOutOfRange { index: usize, len: usize },

    /// Drawing the PNG export failed.
    #[error("plot error: {0}")]
    Plot(String),

    /// Terminal setup, drawing or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(String),
}

pub type Result<T> = std::result::Result<T, MapError>;
