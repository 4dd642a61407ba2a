//! pomo - A Pomodoro timer for the terminal
//!
//! This crate provides the focus/break session state machine, the widget
//! state that drives it once per second, and a terminal front end.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod pomodoro;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomoError;
pub use pomodoro::{Pomodoro, Session, SessionLabel};
