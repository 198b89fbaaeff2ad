// loader.rs

use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread;

use crate::data::load_dataset;
use crate::event::Event;

/// Reads the dataset off the UI thread and posts the outcome as
/// [`Event::DataLoaded`]. Runs once: no timeout, no retry.
pub fn spawn_load(path: PathBuf, sender: Sender<Event>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        log::info!("Loading yield data from {}", path.display());
        let result = load_dataset(&path);
        if sender.send(Event::DataLoaded(result)).is_err() {
            log::debug!("UI closed before the dataset finished loading");
        }
    })
}
