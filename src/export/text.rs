use super::ExportError;
use crate::models::ParsedWorkout;
use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

/// Render a parsed workout as a human-readable report.
///
/// Used both for terminal display and for `.txt` export, so the numbers a
/// trainer sees always come from the same aggregates.
pub fn render_report(workout: &ParsedWorkout) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "RESUMO DO TREINO");
    let _ = writeln!(out, "================");
    let _ = writeln!(out);

    for exercise in &workout.exercises {
        let _ = writeln!(
            out,
            "{} ({} séries, {:.1} kg)",
            exercise.name, exercise.total_sets, exercise.total_volume
        );
        for set in &exercise.details {
            let _ = writeln!(
                out,
                "  {}x{} @ {} kg -> {:.1} kg",
                set.sets, set.reps, set.weight, set.volume
            );
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "TOTAIS");
    let _ = writeln!(out, "------");
    let _ = writeln!(out, "Exercícios: {}", workout.exercises.len());
    let _ = writeln!(out, "Séries: {}", workout.total_sets);
    let _ = writeln!(out, "Repetições: {}", workout.total_reps);
    let _ = writeln!(out, "Volume: {:.1} kg", workout.total_volume);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", workout.summary);

    out
}

/// Export the workout report to a text file
pub fn export_workout<P: AsRef<Path>>(
    workout: &ParsedWorkout,
    output_path: P,
) -> Result<(), ExportError> {
    let mut file = std::fs::File::create(output_path)?;
    file.write_all(render_report(workout).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use tempfile::NamedTempFile;

    #[test]
    fn test_report_contains_exercises_and_totals() {
        let workout = parser::parse("Agachamento livre\n1x12x40kg\n1x10x50kg");
        let report = render_report(&workout);

        assert!(report.contains("Agachamento livre (2 séries, 980.0 kg)"));
        assert!(report.contains("1x12 @ 40 kg -> 480.0 kg"));
        assert!(report.contains("Séries: 2"));
        assert!(report.contains("Volume: 980.0 kg"));
        assert!(report.contains(&workout.summary));
    }

    #[test]
    fn test_report_for_empty_workout() {
        let workout = parser::parse("");
        let report = render_report(&workout);
        assert!(report.contains("Exercícios: 0"));
        assert!(report.contains("Volume: 0.0 kg"));
    }

    #[test]
    fn test_export_writes_file() {
        let workout = parser::parse("Supino\n3x12x20kg");
        let temp_file = NamedTempFile::new().unwrap();
        export_workout(&workout, temp_file.path()).unwrap();

        let contents = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(contents.contains("RESUMO DO TREINO"));
        assert!(contents.contains("Supino"));
    }
}
