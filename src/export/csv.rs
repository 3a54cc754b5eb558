use super::{ExportError, WorkoutPayload};
use std::path::Path;

/// Export the persistence payload to CSV, one row per set.
///
/// Exercises keep their workout order; totals are recoverable by summing
/// the volume column.
pub fn export_payload<P: AsRef<Path>>(
    payload: &WorkoutPayload,
    output_path: P,
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(output_path)?;

    writer.write_record([
        "exercise",
        "exercise_order",
        "set_order",
        "sets",
        "reps",
        "weight_kg",
        "volume_kg",
    ])?;

    for exercise in &payload.exercises {
        for set in &exercise.sets {
            writer.write_record(&[
                exercise.name.clone(),
                exercise.order.to_string(),
                set.order.to_string(),
                set.count.to_string(),
                set.reps.clone(),
                set.weight.to_string(),
                set.volume.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}
