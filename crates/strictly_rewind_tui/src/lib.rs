//! Terminal front end and headless replay for strictly_rewind.
//!
//! Both front ends only read [`strictly_rewind::GameView`] and forward
//! player input to a [`strictly_rewind::GameController`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod logging;
pub mod play;
pub mod replay;
pub mod settings;
pub mod ui;

pub use app::{App, Focus};
pub use cli::{Cli, Command};
pub use settings::{ConfigError, DEFAULT_CONFIG_PATH, DisplaySettings, LogSettings, Settings};
