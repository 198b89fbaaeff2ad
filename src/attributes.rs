// attributes.rs

use geojson::JsonObject;

use crate::config::ATTRIBUTE_MARKER;

/// Yearly yield columns of `sample`, in property order.
///
/// A key qualifies when it contains the `"yr"` marker. This is the only place
/// that convention is checked.
pub fn extract_attributes(sample: &JsonObject) -> Vec<String> {
    sample
        .keys()
        .filter(|key| key.contains(ATTRIBUTE_MARKER))
        .cloned()
        .collect()
}

/// Display label for an attribute: whatever follows the marker, so `yr07`
/// becomes `07`.
pub fn year_label(attribute: &str) -> &str {
    attribute
        .find(ATTRIBUTE_MARKER)
        .map_or(attribute, |at| &attribute[at + ATTRIBUTE_MARKER.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: serde_json::Value) -> JsonObject {
        match value {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn keeps_marked_keys_in_order() {
        let sample = object(json!({
            "StateName": "Iowa",
            "yr07": 171,
            "yr12": 137,
            "region": "Midwest",
        }));
        assert_eq!(extract_attributes(&sample), ["yr07", "yr12"]);
    }

    #[test]
    fn no_marked_keys_gives_empty_list() {
        let sample = object(json!({ "StateName": "Iowa", "region": "Midwest" }));
        assert!(extract_attributes(&sample).is_empty());
    }

    #[test]
    fn order_follows_the_file_not_the_alphabet() {
        let sample = object(json!({ "yr16": 1, "yr07": 2, "yr10": 3 }));
        assert_eq!(extract_attributes(&sample), ["yr16", "yr07", "yr10"]);
    }

    #[test]
    fn labels() {
        assert_eq!(year_label("yr07"), "07");
        assert_eq!(year_label("corn_yr12"), "12");
        assert_eq!(year_label("StateName"), "StateName");
    }
}
