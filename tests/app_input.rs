//! Key handling on the counter and settings screens.

mod common;

use common::*;
use counterpp::ui::app::Screen;
use counterpp::ui::input::handle_key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;

// -- Counter screen -----------------------------------------------------------

#[tokio::test]
async fn counter_keys_mutate_holder() {
    let (mut app, holder) = make_app();

    handle_key(&mut app, press_key(KeyCode::Char('+')));
    handle_key(&mut app, press_key(KeyCode::Up));
    handle_key(&mut app, press_key(KeyCode::Char('-')));
    assert_eq!(holder.snapshot().count, 1);
    assert_eq!(app.snapshot().count, 1);

    handle_key(&mut app, press_key(KeyCode::Down));
    handle_key(&mut app, press_key(KeyCode::Down));
    assert_eq!(app.snapshot().count, -1);

    handle_key(&mut app, press_key(KeyCode::Char('r')));
    assert_eq!(app.snapshot().count, 0);
}

#[tokio::test]
async fn auto_key_toggles_switch() {
    let (mut app, holder) = make_app();

    handle_key(&mut app, press_key(KeyCode::Char('a')));
    assert!(holder.snapshot().auto_increment);
    assert!(holder.has_ticker());
    assert_eq!(app.snapshot().auto_label(), "ON");

    handle_key(&mut app, press_key(KeyCode::Char(' ')));
    assert!(!holder.snapshot().auto_increment);
    assert!(!holder.has_ticker());
    assert_eq!(app.snapshot().auto_label(), "OFF");
}

#[tokio::test]
async fn key_release_is_ignored() {
    let (mut app, holder) = make_app();
    let release = KeyEvent {
        kind: KeyEventKind::Release,
        ..press_key(KeyCode::Char('+'))
    };
    handle_key(&mut app, release);
    assert_eq!(holder.snapshot().count, 0);
}

#[tokio::test]
async fn quit_keys() {
    let (mut app, _holder) = make_app();
    handle_key(&mut app, press_key(KeyCode::Char('q')));
    assert!(app.should_quit());

    let (mut app, _holder) = make_app();
    handle_key(&mut app, ctrl_key('c'));
    assert!(app.should_quit());

    let (mut app, _holder) = make_app();
    handle_key(&mut app, press_key(KeyCode::Char('s')));
    handle_key(&mut app, ctrl_key('q'));
    assert!(app.should_quit());
}

// -- Settings screen ----------------------------------------------------------

#[tokio::test]
async fn settings_open_and_done() {
    let (mut app, _holder) = make_app();
    handle_key(&mut app, press_key(KeyCode::Char('s')));
    assert_eq!(app.screen(), Screen::Settings);
    assert_eq!(app.title(), "Settings");

    // Counter keys do nothing here
    handle_key(&mut app, press_key(KeyCode::Char('r')));
    handle_key(&mut app, press_key(KeyCode::Char('d')));
    assert_eq!(app.screen(), Screen::Counter);
    assert_eq!(app.title(), "Counter++");
    assert!(!app.should_quit());
}

#[tokio::test]
async fn slider_applies_only_on_enter() {
    let (mut app, holder) = make_app();
    handle_key(&mut app, press_key(KeyCode::Char('s')));

    handle_key(&mut app, press_key(KeyCode::Right));
    handle_key(&mut app, press_key(KeyCode::Right));
    assert_eq!(holder.snapshot().interval, DEFAULT_INTERVAL);
    assert!(app.settings().is_dirty());

    handle_key(&mut app, press_key(KeyCode::Enter));
    assert_eq!(holder.snapshot().interval, Duration::from_millis(5_000));
    assert!(!app.settings().is_dirty());
    assert_eq!(app.snapshot().interval, Duration::from_millis(5_000));
}

#[tokio::test]
async fn leaving_settings_discards_unapplied_move() {
    let (mut app, holder) = make_app();
    handle_key(&mut app, press_key(KeyCode::Char('s')));
    handle_key(&mut app, press_key(KeyCode::Left));
    handle_key(&mut app, press_key(KeyCode::Esc));

    assert_eq!(app.screen(), Screen::Counter);
    assert_eq!(holder.snapshot().interval, DEFAULT_INTERVAL);

    handle_key(&mut app, press_key(KeyCode::Char('s')));
    assert_eq!(app.settings().position(), Some(DEFAULT_INTERVAL));
}

#[tokio::test]
async fn external_interval_change_resyncs_slider() {
    let (mut app, holder) = make_app();
    handle_key(&mut app, press_key(KeyCode::Char('s')));
    handle_key(&mut app, press_key(KeyCode::Right));

    holder.set_interval(Duration::from_millis(8_000));
    app.on_counter_changed();

    assert_eq!(app.settings().position(), Some(Duration::from_millis(8_000)));
    assert!(!app.settings().is_dirty());
}

#[tokio::test(start_paused = true)]
async fn applying_interval_restarts_running_ticker() {
    let (mut app, holder) = make_app();
    handle_key(&mut app, press_key(KeyCode::Char('a')));
    tokio::time::sleep(Duration::from_millis(2_500)).await;

    handle_key(&mut app, press_key(KeyCode::Char('s')));
    handle_key(&mut app, press_key(KeyCode::Left));
    handle_key(&mut app, press_key(KeyCode::Left));
    handle_key(&mut app, press_key(KeyCode::Enter));
    assert_eq!(holder.snapshot().interval, Duration::from_millis(1_000));

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(holder.snapshot().count, 0);
    tokio::time::sleep(Duration::from_millis(400) + SLACK).await;
    assert_eq!(holder.snapshot().count, 1);
}

#[tokio::test(start_paused = true)]
async fn tick_catches_up_with_auto_increments() {
    let (mut app, holder) = make_app();
    handle_key(&mut app, press_key(KeyCode::Char('a')));
    tokio::time::sleep(DEFAULT_INTERVAL * 2 + SLACK).await;

    assert_eq!(holder.snapshot().count, 2);
    app.on_tick();
    assert_eq!(app.snapshot().count, 2);
}
