// filter.rs

use geojson::JsonObject;
use serde_json::Value;
use std::fmt;

use crate::data::Feature;

/// Which markers are visible. Applied when markers are redrawn, never by
/// removing features from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeatureFilter {
    #[default]
    All,
    /// Only features whose property is the boolean `true`.
    Flag(String),
}

impl FeatureFilter {
    pub fn matches(&self, feature: &Feature) -> bool {
        match self {
            FeatureFilter::All => true,
            FeatureFilter::Flag(key) => {
                matches!(feature.properties.get(key), Some(Value::Bool(true)))
            }
        }
    }
}

impl fmt::Display for FeatureFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureFilter::All => write!(f, "all"),
            FeatureFilter::Flag(key) => write!(f, "{}", key),
        }
    }
}

/// `All`, then one flag filter per boolean property of `sample`.
pub fn discover_flags(sample: &JsonObject) -> Vec<FeatureFilter> {
    std::iter::once(FeatureFilter::All)
        .chain(
            sample
                .iter()
                .filter(|(_, v)| v.is_boolean())
                .map(|(k, _)| FeatureFilter::Flag(k.clone())),
        )
        .collect()
}
