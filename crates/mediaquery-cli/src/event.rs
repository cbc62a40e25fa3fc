//! Terminal event pump.
//!
//! Forwards terminal resize events to a watcher as [`ResizeNotice`]s.

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use mediaquery::ResizeNotice;
use tokio::sync::mpsc;

/// Reads the crossterm event stream and forwards resizes.
pub struct ResizePump {
    tx: mpsc::Sender<ResizeNotice>,
}

impl ResizePump {
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<ResizeNotice>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    /// Spawn the pump task. It ends when the stream ends or the receiver is gone.
    pub fn spawn(self) -> tokio::task::JoinHandle<()> {
        let tx = self.tx;

        tokio::spawn(async move {
            let mut events = EventStream::new();

            while let Some(event) = events.next().await {
                match event {
                    Ok(Event::Resize(columns, rows)) => {
                        tracing::trace!(columns, rows, "terminal resized");
                        if tx.send(ResizeNotice).await.is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!(error = %e, "terminal event stream failed");
                        break;
                    }
                }
            }
        })
    }
}
