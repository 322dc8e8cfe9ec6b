use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use tokio::runtime::Handle;
use tokio::sync::watch;

use crate::counter::CounterSnapshot;
use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize,
    /// Holder state changed (user action or auto-increment tick). Read the
    /// holder for the current value.
    CounterChanged,
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Start the input thread. It polls crossterm, emits `Tick` every
    /// `tick_rate`, and stops once `shutdown` is signaled.
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("input".to_string())
            .spawn(move || input_loop(event_tx, tick_rate, shutdown))
            .map_err(|err| tracing::error!("Failed to spawn input thread: {}", err))
            .ok();

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

fn input_loop(event_tx: Sender<AppEvent>, tick_rate: Duration, shutdown: ShutdownHandle) {
    let mut last_tick = Instant::now();
    loop {
        if shutdown.is_shutting_down() {
            let _ = event_tx.send(AppEvent::Shutdown);
            break;
        }

        // Short poll so the shutdown flag is checked often
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        match event::poll(timeout) {
            Ok(true) => {
                let sent = match event::read() {
                    Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                    Ok(Event::Resize(..)) => event_tx.send(AppEvent::Resize),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!("Terminal read error: {}", err);
                        break;
                    }
                };
                if sent.is_err() {
                    break;
                }
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!("Terminal poll error: {}", err);
                break;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if event_tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
    tracing::debug!("Input thread stopped");
}

/// Forward holder change notifications into the event channel.
///
/// Sends one event right away, then one per observed change. Ends when the
/// holder is gone or the UI stops listening.
pub fn forward_counter(
    runtime: &Handle,
    mut updates: watch::Receiver<CounterSnapshot>,
    event_tx: Sender<AppEvent>,
) -> tokio::task::JoinHandle<()> {
    runtime.spawn(async move {
        updates.mark_unchanged();
        if event_tx.send(AppEvent::CounterChanged).is_err() {
            return;
        }
        while updates.changed().await.is_ok() {
            updates.mark_unchanged();
            if event_tx.send(AppEvent::CounterChanged).is_err() {
                break;
            }
        }
    })
}
