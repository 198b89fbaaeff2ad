// event.rs
use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::{Duration, Instant},
};

use crate::app::TerminalEvent;
use crate::data::LoadedData;
use crate::error::MapError;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

pub enum Event {
    Tick,
    Input(KeyEvent),
    TerminalEvent(TerminalEvent),
    /// The one-off dataset load finished.
    DataLoaded(Result<LoadedData, MapError>),
}

pub struct EventHandler {
    sender: Sender<Event>,
    receiver: Receiver<Event>,
    #[allow(dead_code)]
    event_thread: thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> EventHandler {
        let (sender, receiver) = mpsc::channel();
        let input_sender = sender.clone();
        let event_thread = thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or_else(|| Duration::from_secs(0));

                // Poll for a crossterm event.
                let polled = match event::poll(timeout) {
                    Ok(true) => event::read().ok(),
                    Ok(false) => None,
                    Err(e) => {
                        log::error!("Unable to poll for terminal events: {}", e);
                        return;
                    }
                };
                let forwarded = match polled {
                    Some(CrosstermEvent::Key(e)) if e.kind == KeyEventKind::Press => {
                        Some(Event::Input(e))
                    }
                    Some(CrosstermEvent::Resize(_, _)) => {
                        Some(Event::TerminalEvent(TerminalEvent::Resize))
                    }
                    _ => None,
                };
                if let Some(event) = forwarded {
                    if input_sender.send(event).is_err() {
                        return;
                    }
                }

                // If enough time has passed, send a `Tick` event.
                if last_tick.elapsed() >= tick_rate {
                    if input_sender.send(Event::Tick).is_err() {
                        return;
                    }
                    last_tick = Instant::now();
                }
            }
        });
        EventHandler {
            sender,
            receiver,
            event_thread,
        }
    }

    /// A handle for other producers, such as the dataset loader.
    pub fn sender(&self) -> Sender<Event> {
        self.sender.clone()
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}
