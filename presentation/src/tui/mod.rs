//! TUI (Text User Interface) module for podium
//!
//! A single-screen classroom view built on ratatui: presenter spotlight,
//! countdown, roster, history, groups and presentation types, driven by
//! vim-like modes.

mod app;
mod command;
mod mode;
mod presenter;
mod state;
mod widgets;

pub use app::TuiApp;
pub use command::TuiCommand;
pub use mode::{InputMode, KeyAction, handle_key_event};
pub use presenter::TuiPresenter;
pub use state::{FLASH_DURATION, IDLE_PRESENTER, TuiState};
pub use widgets::{MainLayout, help::HelpWidget};
