//! Terminal client for time-travel tic-tac-toe.
//!
//! # Architecture
//!
//! - **App**: session state plus cursor, focus and history selection
//! - **Input**: key presses to [`Action`]s
//! - **View**: status text, history labels and cell highlights
//! - **UI**: ratatui rendering, returning a [`HitMap`] for mouse clicks
//! - **Replay**: the same view rendered as plain text, no terminal needed

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
pub mod logging;
pub mod replay;
pub mod tui;
mod ui;
pub mod view;

pub use app::App;
pub use cli::{Cli, Command};
pub use config::{ConfigError, RewindConfig, ThemeConfig};
pub use input::{Action, Focus};
pub use ui::{HitMap, Target};
pub use view::{CellTone, Palette};
