// Library interface for liftparse modules
// This allows integration tests to access the core functionality

pub mod config;
pub mod error;
pub mod export;
pub mod fixture;
pub mod logging;
pub mod models;
pub mod parser;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::{LiftParseError, Result};
pub use export::{ExportFormat, WorkoutPayload};
pub use fixture::EXAMPLE_WORKOUT;
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::{Exercise, ExerciseSet, ParsedWorkout, Reps};
pub use parser::{parse, parse_with_warnings, ParseWarning, WarningReason};
