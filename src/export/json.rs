use super::{ExportError, WorkoutPayload};
use std::io::Write;
use std::path::Path;

/// Export the persistence payload to pretty-printed JSON
pub fn export_payload<P: AsRef<Path>>(
    payload: &WorkoutPayload,
    output_path: P,
) -> Result<(), ExportError> {
    export_json(payload, output_path)
}

/// Export any serializable data structure to JSON
pub fn export_json<T, P>(data: &T, output_path: P) -> Result<(), ExportError>
where
    T: serde::Serialize,
    P: AsRef<Path>,
{
    let json_data = serde_json::to_string_pretty(data)
        .map_err(|e| ExportError::SerializationError(e.to_string()))?;

    let mut file = std::fs::File::create(output_path)?;
    file.write_all(json_data.as_bytes())?;

    Ok(())
}
