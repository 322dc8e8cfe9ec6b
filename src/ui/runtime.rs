use crate::config::Config;
use crate::counter::CounterHolder;
use crate::shutdown::{ShutdownCoordinator, ShutdownPhase};
use crate::ui::app::App;
use crate::ui::events::{forward_counter, AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the counter UI until the user quits or a signal arrives.
///
/// The holder's ticker runs on `runtime`; the UI loop blocks the calling
/// thread. On exit the ticker is cancelled before the terminal is restored.
pub fn run(
    config: &Config,
    start_auto: bool,
    runtime: &Handle,
    shutdown: &ShutdownCoordinator,
) -> io::Result<()> {
    let range = config.counter.range().unwrap_or_default();
    let holder = Arc::new(CounterHolder::new(
        runtime.clone(),
        range,
        config.counter.interval(),
    ));
    if start_auto {
        holder.set_auto_increment(true);
    }

    let tick_rate = config.ui.tick_rate();
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate, shutdown.handle());
    let forwarder = forward_counter(runtime, holder.subscribe(), events.sender());

    let mut app = App::new(Arc::clone(&holder));
    tracing::info!("UI started");

    let result = event_loop(&mut terminal, &mut app, &events, tick_rate);

    shutdown.signal();
    shutdown.advance(ShutdownPhase::StoppingInput);
    drop(events);

    shutdown.advance(ShutdownPhase::CancellingTasks);
    holder.shutdown();
    forwarder.abort();

    shutdown.advance(ShutdownPhase::RestoringTerminal);
    drop(guard);

    shutdown.advance(ShutdownPhase::Complete);
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &EventHandler,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // The next draw picks up the new size
            Ok(AppEvent::Resize) => {}
            Ok(AppEvent::CounterChanged) => app.on_counter_changed(),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}
