// popup.rs

use crate::attributes::year_label;
use crate::data::Feature;

/// Detail lines for the selected feature under the current attribute.
pub fn popup_lines(feature: &Feature, attribute: &str) -> Vec<String> {
    let state = feature.state_name().unwrap_or("Unknown");
    let value = feature
        .value(attribute)
        .map_or_else(|| String::from("n/a"), |v| v.to_string());
    vec![
        format!("State: {}", state),
        format!("Avg. Yield in {}: {} bu/ac", year_label(attribute), value),
    ]
}
