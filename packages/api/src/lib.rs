//! HTTP boundary for the summarise pipeline.
//!
//! The core exposes exactly one operation (`Pipeline::run`); this crate
//! wires it to `POST /api/summarise` and maps each pipeline failure onto a
//! stable JSON error with the matching status class (client-fault 400,
//! server-fault 500).

pub mod app;
pub mod config;
pub mod routes;

pub use app::{build_app, AppPipeline, AppState};
pub use config::Config;
