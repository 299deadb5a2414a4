//! Remote-control events read as JSON lines from stdin

use std::io::{BufRead, IsTerminal};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use dp_core::RemoteControlEvent;
use tracing::{info, warn};

/// Start reading events from stdin when it is piped.
///
/// Each line holds one event, e.g. `{"DPad":"Down"}`. `on_event` is called
/// after every decoded event so the UI can wake up. Returns `None` when stdin
/// is a terminal.
pub fn spawn_stdin_reader(on_event: impl Fn() + Send + 'static) -> Option<Receiver<RemoteControlEvent>> {
    if std::io::stdin().is_terminal() {
        return None;
    }

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        info!("reading remote-control events from stdin");
        for line in std::io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    warn!(%err, "stdin closed");
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            match RemoteControlEvent::from_json(&line) {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                    on_event();
                }
                Err(err) => warn!(%err, line, "invalid remote-control event"),
            }
        }
    });

    Some(rx)
}
