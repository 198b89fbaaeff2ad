// legend.rs

use crate::attributes::year_label;
use crate::summary::Summary;
use crate::symbols::radius_for;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub name: &'static str,
    pub value: f64,
    /// Rounded for display.
    pub display: i64,
    /// `None` when the value has no radius, same as a marker.
    pub radius: Option<f64>,
}

/// Legend for the attribute on display: largest circle first.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub title: String,
    pub entries: [LegendEntry; 3],
}

impl Legend {
    pub fn build(summary: &Summary, attribute: &str) -> Self {
        let entry = |name, value: f64| LegendEntry {
            name,
            value,
            display: value.round() as i64,
            radius: radius_for(value).ok(),
        };
        Legend {
            title: format!("Avg. Yield in {}", year_label(attribute)),
            entries: [
                entry("max", summary.max),
                entry("mean", summary.mean),
                entry("min", summary.min),
            ],
        }
    }

    /// Radius of the largest drawable circle, used to lay the legend out.
    pub fn max_radius(&self) -> f64 {
        self.entries
            .iter()
            .filter_map(|e| e.radius)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn entries_are_sized_and_rounded() {
        let summary = Summary {
            min: 100.4,
            mean: 125.5,
            max: 150.6,
        };
        let legend = Legend::build(&summary, "yr12");

        assert_eq!(legend.title, "Avg. Yield in 12");
        let names: Vec<_> = legend.entries.iter().map(|e| e.name).collect();
        assert_eq!(names, ["max", "mean", "min"]);
        let displays: Vec<_> = legend.entries.iter().map(|e| e.display).collect();
        assert_eq!(displays, [151, 126, 100]);

        assert_relative_eq!(legend.entries[0].radius.unwrap(), radius_for(150.6).unwrap());
        assert_relative_eq!(legend.max_radius(), radius_for(150.6).unwrap());
    }

    #[test]
    fn out_of_domain_values_have_no_circle() {
        let summary = Summary {
            min: 40.0,
            mean: 70.0,
            max: 100.0,
        };
        let legend = Legend::build(&summary, "yr07");
        assert!(legend.entries[0].radius.is_some());
        assert!(legend.entries[1].radius.is_some());
        assert_eq!(legend.entries[2].radius, None);
        assert_eq!(legend.entries[2].display, 40);
    }
}
