use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
}

/// Feeds key presses and resizes from the terminal into a channel. The reader
/// runs on a blocking thread and stops once the receiver is dropped.
#[derive(Debug)]
pub struct EventHandler {
    receiver: mpsc::UnboundedReceiver<Event>,
    _handler: tokio::task::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(poll_ms: u64) -> Self {
        let poll = Duration::from_millis(poll_ms);
        let (sender, receiver) = mpsc::unbounded_channel();

        let handler = tokio::task::spawn_blocking(move || {
            while !sender.is_closed() {
                match crossterm::event::poll(poll) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(_) => break,
                }

                let Ok(evt) = crossterm::event::read() else {
                    continue;
                };
                let event = match evt {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
                    CrosstermEvent::Resize(w, h) => Event::Resize(w, h),
                    _ => continue,
                };
                if sender.send(event).is_err() {
                    break;
                }
            }
        });

        Self {
            receiver,
            _handler: handler,
        }
    }

    pub async fn next(&mut self) -> Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_else(|| std::io::Error::other("event stream closed").into())
    }
}
