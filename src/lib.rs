pub mod app;
pub mod backend;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod event;
pub mod handler;
pub mod keybinds;
pub mod logging;
pub mod registry;
pub mod sync;
pub mod tui;
pub mod ui;
