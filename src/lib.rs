//! socialdash - a terminal dashboard for a social-media management backend.
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod models;
pub mod query;
pub mod terminal;
pub mod traits;
pub mod ui;
