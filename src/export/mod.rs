use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::ParsedWorkout;

pub mod csv;
pub mod json;
pub mod text;

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Export format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Csv,
    Text,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Result<Self, ExportError> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "text" | "txt" => Ok(ExportFormat::Text),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Persistence payload for a parsed workout.
///
/// Field-for-field what the storage layer expects: exercises and sets carry
/// their 1-based textual order so insertion order survives round trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPayload {
    pub generated_at: DateTime<Utc>,
    pub total_exercises: usize,
    pub total_sets: u64,
    pub total_reps: u64,
    pub total_volume: Decimal,
    pub exercises: Vec<ExercisePayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePayload {
    pub name: String,
    pub order: u32,
    pub total_sets: u64,
    pub total_volume: Decimal,
    pub sets: Vec<SetPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetPayload {
    pub count: u32,
    pub reps: String,
    pub weight: Decimal,
    pub volume: Decimal,
    pub order: u32,
}

impl WorkoutPayload {
    pub fn from_workout(workout: &ParsedWorkout) -> Self {
        let exercises = workout
            .exercises
            .iter()
            .enumerate()
            .map(|(i, exercise)| ExercisePayload {
                name: exercise.name.clone(),
                order: i as u32 + 1,
                total_sets: exercise.total_sets,
                total_volume: exercise.total_volume,
                sets: exercise
                    .details
                    .iter()
                    .enumerate()
                    .map(|(j, set)| SetPayload {
                        count: set.sets,
                        reps: set.reps.to_string(),
                        weight: set.weight,
                        volume: set.volume,
                        order: j as u32 + 1,
                    })
                    .collect(),
            })
            .collect();

        WorkoutPayload {
            generated_at: Utc::now(),
            total_exercises: workout.exercises.len(),
            total_sets: workout.total_sets,
            total_reps: workout.total_reps,
            total_volume: workout.total_volume,
            exercises,
        }
    }
}

/// Write a parsed workout to `output_path` in the requested format.
pub fn export_workout<P: AsRef<Path>>(
    workout: &ParsedWorkout,
    output_path: P,
    format: ExportFormat,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Json => json::export_payload(&WorkoutPayload::from_workout(workout), output_path),
        ExportFormat::Csv => csv::export_payload(&WorkoutPayload::from_workout(workout), output_path),
        ExportFormat::Text => text::export_workout(workout, output_path),
    }
}
