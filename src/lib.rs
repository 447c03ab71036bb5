// Library root
// -----------
// This crate exposes a small library surface for the workout CLI. The
// binary (`main.rs`) loads configuration and hands over to `ui::run`.
//
// Module responsibilities:
// - `config`: API key, service URL and output path, read once at startup.
// - `error`: typed failure modes of the library.
// - `input`: normalisation rules for the console answers.
// - `api`: blocking HTTP access to the quotes and exercises services.
// - `plan`: the workout plan model, its rendering and persistence.
// - `ui`: terminal prompts and the end-to-end flow.
pub mod api;
pub mod config;
pub mod error;
pub mod input;
pub mod plan;
pub mod ui;

pub use api::{ApiClient, WorkoutApi};
pub use config::Config;
pub use error::WorkoutError;
pub use plan::{Exercise, Quote, WorkoutPlan};
