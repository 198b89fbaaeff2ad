//! Proportional symbol map of corn yields over time.
//!
//! The core is four small pieces: [`attributes::extract_attributes`] finds the
//! yearly columns, [`symbols::radius_for`] sizes a symbol, [`summary::summarize`]
//! feeds the legend and [`sequence::SequenceIndex`] picks the year on display.
//! [`app::App`] ties them to a dataset; [`ui`] and [`plot`] draw the result.

pub mod app;
pub mod attributes;
pub mod config;
pub mod data;
pub mod error;
pub mod event;
pub mod filter;
pub mod legend;
pub mod loader;
pub mod logging;
pub mod plot;
pub mod popup;
pub mod sequence;
pub mod summary;
pub mod symbols;
pub mod ui;

pub use error::{MapError, Result};
