// config.rs

use plotters::prelude::RGBColor;

pub const DATA_FILE: &str = "data/corn_yield.geojson";
pub const OUTPUT_DIR: &str = "output/";

/// Substring that marks a property as a yearly yield column.
pub const ATTRIBUTE_MARKER: &str = "yr";
/// Identity property shown in popups.
pub const IDENTITY_FIELD: &str = "StateName";

/// Yield (bu/ac) that maps to a zero-area symbol.
pub const RADIUS_BASELINE: f64 = 60.0;
/// Pixels of symbol area per bu/ac above the baseline.
pub const SCALE_FACTOR: f64 = 30.0;

// Default view over the continental US, [lat, lon] and web-map zoom.
pub const MAP_CENTER: (f64, f64) = (39.0, -97.0);
pub const MAP_ZOOM: u8 = 4;
pub const TILE_SIZE: f64 = 256.0;

pub const MARKER_FILL: RGBColor = RGBColor(0xfa, 0xf3, 0x57);
pub const MARKER_STROKE: RGBColor = RGBColor(0xec, 0xd1, 0x2c);
pub const OCEAN: RGBColor = RGBColor(173, 216, 230);

pub const EXPORT_WIDTH: u32 = 1024;
pub const EXPORT_HEIGHT: u32 = 768;

pub const TICK_MS: u64 = 250;

/// Screen pixels per degree of longitude at `zoom` on a 256px tile pyramid.
pub fn pixels_per_degree(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom) / 360.0
}

/// Pads a `[min_lon, min_lat, max_lon, max_lat]` box by 10% and clamps it to
/// the globe. Without a box, falls back to the default view.
pub fn padded_view(bbox: Option<[f64; 4]>) -> ([f64; 2], [f64; 2]) {
    let Some([min_lon, min_lat, max_lon, max_lat]) = bbox else {
        let (lat, lon) = MAP_CENTER;
        return ([lon - 30.0, lon + 30.0], [lat - 15.0, lat + 15.0]);
    };

    let padding_percentage = 0.1;
    let epsilon = 0.001;

    let lon_range = (max_lon - min_lon).max(epsilon);
    let lat_range = (max_lat - min_lat).max(epsilon);
    let lon_padding = lon_range * padding_percentage;
    let lat_padding = lat_range * padding_percentage;

    (
        [
            (min_lon - lon_padding).max(-180.0),
            (max_lon + lon_padding).min(180.0),
        ],
        [
            (min_lat - lat_padding).max(-90.0),
            (max_lat + lat_padding).min(90.0),
        ],
    )
}
