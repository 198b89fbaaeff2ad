// summary.rs

use crate::data::Feature;
use crate::error::{MapError, Result};

/// Legend bounds for one attribute.
///
/// `mean` is the midpoint of `min` and `max`, not the average of the values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub mean: f64,
    pub max: f64,
}

/// Computes `{min, mean, max}` of `attribute` over `features`.
///
/// Values that do not coerce to a number are skipped. Fails with
/// [`MapError::EmptyDataset`] for zero features and [`MapError::NoValues`]
/// when no feature has a numeric value, rather than handing infinite bounds
/// to the radius scale.
pub fn summarize(features: &[Feature], attribute: &str) -> Result<Summary> {
    if features.is_empty() {
        return Err(MapError::EmptyDataset);
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in features.iter().filter_map(|f| f.value(attribute)) {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }

    if min > max {
        return Err(MapError::NoValues {
            attribute: attribute.to_string(),
        });
    }

    Ok(Summary {
        min,
        mean: (max + min) / 2.0,
        max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tests::feature;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn features(values: &[serde_json::Value]) -> Vec<Feature> {
        values
            .iter()
            .map(|v| feature(json!({ "StateName": "x", "yr07": v })))
            .collect()
    }

    #[test]
    fn mean_is_midpoint() {
        let s = summarize(&features(&[json!(100), json!(150), json!(120)]), "yr07").unwrap();
        assert_eq!(
            s,
            Summary {
                min: 100.0,
                mean: 125.0,
                max: 150.0
            }
        );
    }

    #[test]
    fn single_feature() {
        let s = summarize(&features(&[json!(80)]), "yr07").unwrap();
        assert_relative_eq!(s.min, 80.0);
        assert_relative_eq!(s.mean, 80.0);
        assert_relative_eq!(s.max, 80.0);
    }

    #[test]
    fn malformed_values_are_skipped() {
        let s = summarize(
            &features(&[json!("bad"), json!(90), json!(null), json!("140")]),
            "yr07",
        )
        .unwrap();
        assert_relative_eq!(s.min, 90.0);
        assert_relative_eq!(s.max, 140.0);
    }

    #[test]
    fn empty_dataset_fails() {
        assert!(matches!(summarize(&[], "yr07"), Err(MapError::EmptyDataset)));
    }

    #[test]
    fn no_numeric_values_fails() {
        let err = summarize(&features(&[json!("n/a")]), "yr07").unwrap_err();
        assert!(matches!(err, MapError::NoValues { attribute } if attribute == "yr07"));
    }
}
