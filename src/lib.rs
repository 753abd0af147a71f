//! rReporter library root.
//! Fluent accessors plus the validated date range / timeframe state shared
//! by report generators.

pub mod config;
pub mod errors;
pub mod fluent;
pub mod models;
pub mod reporter;
pub mod utils;

pub use config::ReporterConfig;
pub use errors::{AppError, AppResult, StateField};
pub use fluent::{Called, Fluent, FluentMethods, FluentValue};
pub use models::timeframe::Timeframe;
pub use reporter::{BasicReporter, RangeState, Reporter};
