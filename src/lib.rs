//! Counter++: a terminal counter with an auto-increment mode.
//!
//! The [`counter`] module holds the state and the periodic task; [`ui`] is a
//! ratatui front end over it.

pub mod cli;
pub mod config;
pub mod counter;
pub mod logging;
pub mod shutdown;
pub mod ui;
