// data.rs

use geojson::{GeoJson, JsonObject, Value};
use serde_json::Value as JsonValue;
use std::fs;
use std::io;
use std::path::Path;

use crate::config::IDENTITY_FIELD;
use crate::error::{MapError, Result};

/// One mapped point: its flat property set and, for point geometries, where
/// to draw it.
#[derive(Debug, Clone, Default)]
pub struct Feature {
    pub properties: JsonObject,
    pub location: Option<(f64, f64)>, // (lon, lat)
}

impl Feature {
    pub fn new(properties: JsonObject, location: Option<(f64, f64)>) -> Self {
        Self {
            properties,
            location,
        }
    }

    pub fn state_name(&self) -> Option<&str> {
        self.properties.get(IDENTITY_FIELD)?.as_str()
    }

    /// Reads `attribute` as a number. Numbers and numeric strings coerce;
    /// anything else, including NaN and infinities, counts as absent.
    pub fn value(&self, attribute: &str) -> Option<f64> {
        let number = match self.properties.get(attribute)? {
            JsonValue::Number(n) => n.as_f64()?,
            JsonValue::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return None;
                }
                trimmed.parse::<f64>().ok()?
            }
            _ => return None,
        };
        number.is_finite().then_some(number)
    }
}

/// The loaded feature collection. Immutable after load.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub features: Vec<Feature>,
}

impl Dataset {
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }

    pub fn from_geojson(geojson: GeoJson) -> Result<Self> {
        let features = match geojson {
            GeoJson::FeatureCollection(collection) => collection
                .features
                .into_iter()
                .map(convert_feature)
                .collect(),
            GeoJson::Feature(feature) => vec![convert_feature(feature)],
            GeoJson::Geometry(geometry) => {
                return Err(MapError::NotAFeatureCollection(
                    geometry.value.type_name().to_string(),
                ));
            }
        };
        Ok(Self { features })
    }

    /// Properties of the first feature, the authoritative schema sample.
    pub fn sample_properties(&self) -> Option<&JsonObject> {
        self.features.first().map(|f| &f.properties)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// `[min_lon, min_lat, max_lon, max_lat]` over point locations.
    pub fn bbox(&self) -> Option<[f64; 4]> {
        let mut points = self.features.iter().filter_map(|f| f.location);
        let (lon, lat) = points.next()?;
        let init = [lon, lat, lon, lat];
        Some(points.fold(init, |[min_lon, min_lat, max_lon, max_lat], (lon, lat)| {
            [
                min_lon.min(lon),
                min_lat.min(lat),
                max_lon.max(lon),
                max_lat.max(lat),
            ]
        }))
    }
}

fn convert_feature(feature: geojson::Feature) -> Feature {
    let location = match feature.geometry.as_ref().map(|g| &g.value) {
        Some(Value::Point(c)) if c.len() >= 2 => Some((c[0], c[1])),
        Some(other) => {
            log::warn!(
                "Feature has {} geometry, no marker will be drawn",
                other.type_name()
            );
            None
        }
        None => None,
    };
    Feature {
        properties: feature.properties.unwrap_or_default(),
        location,
    }
}

pub fn read_geojson(filepath: &Path) -> Result<GeoJson> {
    let file = fs::File::open(filepath)?;
    let reader = io::BufReader::new(file);
    let geojson = GeoJson::from_reader(reader)?;
    Ok(geojson)
}

/// File-level details shown next to the map.
#[derive(Debug, Default, Clone)]
pub struct DatasetInfo {
    pub file_name: String,
    pub file_size_kb: u64,
    pub modified_time: String,
    pub feature_count: usize,
    pub bbox: Option<[f64; 4]>, // [min_lon, min_lat, max_lon, max_lat]
}

impl DatasetInfo {
    pub fn collect(path: &Path, dataset: &Dataset) -> Self {
        let mut info = DatasetInfo {
            file_name: path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string(),
            feature_count: dataset.len(),
            bbox: dataset.bbox(),
            modified_time: String::from("N/A"),
            ..Default::default()
        };

        if let Ok(metadata) = fs::metadata(path) {
            info.file_size_kb = metadata.len() / 1024;
            if let Ok(time) = metadata.modified() {
                let datetime: chrono::DateTime<chrono::Local> = time.into();
                info.modified_time = format!("{}", datetime.format("%Y-%m-%d %H:%M"));
            }
        }
        info
    }
}

/// A dataset together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub dataset: Dataset,
    pub info: DatasetInfo,
}

pub fn load_dataset(path: &Path) -> Result<LoadedData> {
    let dataset = Dataset::from_geojson(read_geojson(path)?)?;
    let info = DatasetInfo::collect(path, &dataset);
    log::info!(
        "Loaded {} features from {}",
        dataset.len(),
        path.display()
    );
    Ok(LoadedData { dataset, info })
}
