// app.rs

use crate::attributes::{extract_attributes, year_label};
use crate::data::{Feature, LoadedData};
use crate::error::{MapError, Result};
use crate::filter::{FeatureFilter, discover_flags};
use crate::legend::Legend;
use crate::popup::popup_lines;
use crate::sequence::SequenceIndex;
use crate::summary::summarize;
use crate::symbols::radius_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Map,
    Help,
}

#[derive(Debug, Clone, Copy)]
pub enum TerminalEvent {
    Resize,
}

/// A marker ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub feature: usize,
    pub lon: f64,
    pub lat: f64,
    /// Pixels.
    pub radius: f64,
}

/// Everything the map shows, owned in one place. Core calculations take their
/// inputs from here explicitly.
pub struct App {
    pub current_screen: CurrentScreen,
    pub quit: bool,

    // Set once the load completes
    pub data: Option<LoadedData>,
    pub attributes: Vec<String>,
    pub sequence: SequenceIndex,

    // Derived on every attribute change
    pub radii: Vec<Option<f64>>, // per feature
    pub legend: Option<Legend>,

    pub filters: Vec<FeatureFilter>,
    pub filter_index: usize,
    pub selected_feature: Option<usize>,

    // UI related
    pub notification: String,
    pub help_keybinds: Vec<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> App {
        App {
            current_screen: CurrentScreen::Map,
            quit: false,

            data: None,
            attributes: Vec::new(),
            sequence: SequenceIndex::default(),

            radii: Vec::new(),
            legend: None,

            filters: vec![FeatureFilter::All],
            filter_index: 0,
            selected_feature: None,

            notification: String::from("Loading yield data..."),
            help_keybinds: vec![
                "Right / . : Skip forward one year".to_string(),
                "Left / , : Step back one year".to_string(),
                "0-9: Jump slider to position".to_string(),
                "Tab / Shift+Tab: Select next/previous state".to_string(),
                "F: Cycle marker filter".to_string(),
                "E: Export map to PNG".to_string(),
                "?: Toggle Help screen".to_string(),
                "Q / Esc: Quit the application".to_string(),
            ],
        }
    }

    /// Takes over a freshly loaded dataset and draws the first attribute.
    pub fn load(&mut self, data: LoadedData) {
        self.attributes = data
            .dataset
            .sample_properties()
            .map(extract_attributes)
            .unwrap_or_default();
        self.sequence = SequenceIndex::new(self.attributes.len());
        self.filters = data
            .dataset
            .sample_properties()
            .map(discover_flags)
            .unwrap_or_else(|| vec![FeatureFilter::All]);
        self.filter_index = 0;
        self.selected_feature = (!data.dataset.is_empty()).then_some(0);

        log::info!(
            "{} yield attributes found: {:?}",
            self.attributes.len(),
            self.attributes
        );
        self.notification = if self.attributes.is_empty() {
            format!(
                "{}: no yield attributes found, nothing to size",
                data.info.file_name
            )
        } else {
            format!(
                "{}: {} states, {} years",
                data.info.file_name,
                data.dataset.len(),
                self.attributes.len()
            )
        };
        self.data = Some(data);
        self.refresh();
    }

    /// The fetch failed: the map keeps its base layer and shows no markers.
    pub fn load_failed(&mut self, err: &MapError) {
        log::error!("Failed to load yield data: {}", err);
        self.notification = format!("Could not load yield data: {}", err);
    }

    pub fn features(&self) -> &[Feature] {
        match &self.data {
            Some(data) => &data.dataset.features,
            None => &[],
        }
    }

    pub fn current_attribute(&self) -> Option<&str> {
        self.sequence
            .current()
            .and_then(|i| self.attributes.get(i))
            .map(String::as_str)
    }

    pub fn current_label(&self) -> Option<&str> {
        self.current_attribute().map(year_label)
    }

    pub fn step_forward(&mut self) {
        match self.sequence.advance() {
            Some(index) => {
                log::debug!("Sequence advanced to {}", index);
                self.refresh();
            }
            None => self.notify_no_attributes(),
        }
    }

    pub fn step_back(&mut self) {
        match self.sequence.retreat() {
            Some(index) => {
                log::debug!("Sequence retreated to {}", index);
                self.refresh();
            }
            None => self.notify_no_attributes(),
        }
    }

    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        self.sequence.set_index(index)?;
        log::debug!("Sequence set to {}", index);
        self.refresh();
        Ok(())
    }

    /// Jumps to the attribute whose year label is `label`, e.g. `"12"`.
    pub fn jump_to_label(&mut self, label: &str) -> Result<()> {
        let index = self
            .attributes
            .iter()
            .position(|a| year_label(a) == label)
            .ok_or_else(|| MapError::UnknownAttribute(label.to_string()))?;
        self.jump_to(index)
    }

    /// Resizes every marker and rebuilds the legend for the current attribute.
    pub fn refresh(&mut self) {
        let Some(attribute) = self.current_attribute().map(str::to_owned) else {
            self.radii.clear();
            self.legend = None;
            return;
        };
        let Some(data) = &self.data else {
            return;
        };
        let features = &data.dataset.features;

        self.radii = features
            .iter()
            .map(|f| marker_radius(f, &attribute))
            .collect();

        self.legend = match summarize(features, &attribute) {
            Ok(summary) => Some(Legend::build(&summary, &attribute)),
            Err(e) => {
                log::warn!("No legend for {}: {}", attribute, e);
                self.notification = format!("Legend unavailable: {}", e);
                None
            }
        };
    }

    pub fn active_filter(&self) -> &FeatureFilter {
        self.filters
            .get(self.filter_index)
            .unwrap_or(&FeatureFilter::All)
    }

    pub fn cycle_filter(&mut self) {
        if self.filters.is_empty() {
            return;
        }
        self.filter_index = (self.filter_index + 1) % self.filters.len();
        self.notification = format!("Showing: {}", self.active_filter());
    }

    /// Markers that pass the filter and have a radius for the current year.
    pub fn visible_markers(&self) -> Vec<Marker> {
        let filter = self.active_filter();
        self.features()
            .iter()
            .zip(&self.radii)
            .enumerate()
            .filter(|(_, (feature, _))| filter.matches(feature))
            .filter_map(|(i, (feature, radius))| {
                let (lon, lat) = feature.location?;
                Some(Marker {
                    feature: i,
                    lon,
                    lat,
                    radius: (*radius)?,
                })
            })
            .collect()
    }

    pub fn select_next(&mut self) {
        let len = self.features().len();
        if len == 0 {
            return;
        }
        self.selected_feature = Some(self.selected_feature.map_or(0, |i| (i + 1) % len));
    }

    pub fn select_previous(&mut self) {
        let len = self.features().len();
        if len == 0 {
            return;
        }
        self.selected_feature =
            Some(self.selected_feature.map_or(0, |i| (i + len - 1) % len));
    }

    pub fn selected_popup(&self) -> Option<Vec<String>> {
        let feature = self.features().get(self.selected_feature?)?;
        Some(popup_lines(feature, self.current_attribute()?))
    }

    pub fn toggle_help(&mut self) {
        self.current_screen = match self.current_screen {
            CurrentScreen::Map => CurrentScreen::Help,
            CurrentScreen::Help => CurrentScreen::Map,
        };
    }

    fn notify_no_attributes(&mut self) {
        self.notification = String::from("No yield attributes to step through");
    }
}

/// A bad value hides this one marker and leaves the rest alone.
fn marker_radius(feature: &Feature, attribute: &str) -> Option<f64> {
    let value = feature.value(attribute)?;
    match radius_for(value) {
        Ok(radius) => Some(radius),
        Err(e) => {
            log::warn!(
                "Skipping marker for {}: {}",
                feature.state_name().unwrap_or("unnamed feature"),
                e
            );
            None
        }
    }
}
