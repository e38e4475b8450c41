//! ShipTalk - a terminal forum for shipping and logistics discussions
//!
//! This library exposes modules for use in integration tests and benches.

pub mod app;
pub mod cli;
pub mod error;
pub mod models;
pub mod startup;
pub mod state;
pub mod terminal;
pub mod ui;
