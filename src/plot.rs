// plot.rs

use plotters::prelude::*;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::app::App;
use crate::config::{
    EXPORT_HEIGHT, EXPORT_WIDTH, MARKER_FILL, MARKER_STROKE, OCEAN, padded_view,
};
use crate::error::{MapError, Result};
use crate::legend::Legend;

fn plot_err<E: Display>(e: E) -> MapError {
    MapError::Plot(e.to_string())
}

/// `corn_yield_<label>_<timestamp>.png` under `output_dir`.
pub fn default_export_path(output_dir: &Path, label: Option<&str>) -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    output_dir.join(format!("corn_yield_{}_{}.png", label.unwrap_or("none"), stamp))
}

/// One legend row in pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
struct LegendMark {
    /// Center and radius; `None` when the value has no radius.
    circle: Option<((i32, i32), u32)>,
    label: String,
    label_pos: (i32, i32),
}

/// Circles sit on `base_y`, centered on `cx`. Every entry gets its value
/// label, with or without a circle.
fn legend_marks(legend: &Legend, cx: i32, base_y: i32, max_r: i32) -> Vec<LegendMark> {
    legend
        .entries
        .iter()
        .map(|entry| {
            let r = entry.radius.map(|radius| radius.round() as i32);
            LegendMark {
                circle: r.map(|r| ((cx, base_y - r), r as u32)),
                label: format!("{} bu/ac", entry.display),
                label_pos: (cx + max_r + 10, base_y - 2 * r.unwrap_or(0) - 6),
            }
        })
        .collect()
}

/// Renders the visible markers and the legend for the current attribute.
pub fn export_png(app: &App, output_filename: &Path) -> Result<()> {
    if let Some(parent) = output_filename.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let bbox = app.data.as_ref().and_then(|d| d.info.bbox);
    let (x_range, y_range) = padded_view(bbox);
    let chart_caption = app
        .legend
        .as_ref()
        .map_or_else(|| String::from("Corn Yield"), |l| l.title.clone());

    let root = BitMapBackend::new(output_filename, (EXPORT_WIDTH, EXPORT_HEIGHT))
        .into_drawing_area();
    root.fill(&OCEAN).map_err(plot_err)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(&chart_caption, ("sans-serif", 40).into_font())
        .build_cartesian_2d(x_range[0]..x_range[1], y_range[0]..y_range[1])
        .map_err(plot_err)?;

    chart.configure_mesh().draw().map_err(plot_err)?;

    let markers = app.visible_markers();
    chart
        .draw_series(markers.iter().map(|m| {
            Circle::new(
                (m.lon, m.lat),
                m.radius.round() as u32,
                MARKER_FILL.mix(0.8).filled(),
            )
        }))
        .map_err(plot_err)?;
    chart
        .draw_series(markers.iter().map(|m| {
            Circle::new(
                (m.lon, m.lat),
                m.radius.round() as u32,
                MARKER_STROKE.stroke_width(1),
            )
        }))
        .map_err(plot_err)?;

    if let Some(legend) = &app.legend {
        // Circles share a baseline, biggest at the back, values to the right.
        let max_r = legend.max_radius().ceil() as i32;
        let box_w = 2 * max_r + 110;
        let box_h = 2 * max_r + 50;
        let right = EXPORT_WIDTH as i32 - 20;
        let bottom = EXPORT_HEIGHT as i32 - 20;
        let left = right - box_w;
        let top = bottom - box_h;

        root.draw(&Rectangle::new(
            [(left, top), (right, bottom)],
            WHITE.mix(0.9).filled(),
        ))
        .map_err(plot_err)?;
        root.draw(&Text::new(
            legend.title.clone(),
            (left + 10, top + 8),
            ("sans-serif", 16).into_font(),
        ))
        .map_err(plot_err)?;

        let cx = left + 10 + max_r;
        let base_y = bottom - 10;
        for mark in legend_marks(legend, cx, base_y, max_r) {
            if let Some((center, r)) = mark.circle {
                root.draw(&Circle::new(center, r, MARKER_FILL.mix(0.8).filled()))
                    .map_err(plot_err)?;
                root.draw(&Circle::new(center, r, MARKER_STROKE.stroke_width(1)))
                    .map_err(plot_err)?;
            }
            root.draw(&Text::new(
                mark.label,
                mark.label_pos,
                ("sans-serif", 13).into_font(),
            ))
            .map_err(plot_err)?;
        }
    }

    root.present().map_err(plot_err)?;
    log::info!("Map exported to {}", output_filename.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::Summary;

    #[test]
    fn export_name_carries_year_label() {
        let path = default_export_path(Path::new("output"), Some("07"));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("corn_yield_07_"));
        assert!(name.ends_with(".png"));
        assert_eq!(path.parent(), Some(Path::new("output")));
    }

    #[test]
    fn legend_labels_every_entry_even_without_a_circle() {
        let summary = Summary {
            min: 40.0,
            mean: 95.0,
            max: 150.0,
        };
        let legend = Legend::build(&summary, "yr07");
        let marks = legend_marks(&legend, 100, 500, 34);

        let labels: Vec<_> = marks.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, ["150 bu/ac", "95 bu/ac", "40 bu/ac"]);

        let max_r = legend.entries[0].radius.unwrap().round() as i32;
        assert_eq!(marks[0].circle, Some(((100, 500 - max_r), max_r as u32)));
        assert_eq!(marks[0].label_pos, (144, 500 - 2 * max_r - 6));
        assert!(marks[1].circle.is_some());

        assert_eq!(marks[2].circle, None);
        assert_eq!(marks[2].label_pos, (144, 494));
    }
}
