use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Repetition count for one set-group.
///
/// Unilateral work is logged as "a/b" (one count per side). The paired form is
/// kept as its own variant so totals never have to re-split the raw string.
/// Externally (JSON, payloads) reps keep their string form ("12", "10/10").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Reps {
    Single(u32),
    Paired(u32, u32),
}

impl Reps {
    /// Repetitions performed in one pass of the set (paired sides summed).
    ///
    /// `None` when the paired sides do not fit `u32`; the parser rejects
    /// such sets instead of wrapping.
    pub fn total(&self) -> Option<u32> {
        match self {
            Reps::Single(n) => Some(*n),
            Reps::Paired(a, b) => a.checked_add(*b),
        }
    }
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reps::Single(n) => write!(f, "{}", n),
            Reps::Paired(a, b) => write!(f, "{}/{}", a, b),
        }
    }
}

impl From<Reps> for String {
    fn from(reps: Reps) -> Self {
        reps.to_string()
    }
}

impl TryFrom<String> for Reps {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Reps {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some((left, right)) = s.split_once('/') {
            if let (Ok(a), Ok(b)) = (left.trim().parse(), right.trim().parse()) {
                return Ok(Reps::Paired(a, b));
            }
        }
        s.parse()
            .map(Reps::Single)
            .map_err(|_| format!("invalid rep count: {s}"))
    }
}

/// One logged set-group within an exercise, e.g. "3x12x20kg".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSet {
    /// How many times this set-group was performed
    pub sets: u32,

    /// Repetitions per set
    pub reps: Reps,

    /// Load in kilograms
    pub weight: Decimal,

    /// Training volume, `sets * reps * weight`
    pub volume: Decimal,
}

impl ExerciseSet {
    /// Build a set with its volume derived from the raw fields.
    ///
    /// Volume is computed here and nowhere else; it is never taken from input.
    /// `None` when the rep total or the volume overflows; an overflowing set
    /// is no set at all.
    pub fn new(sets: u32, reps: Reps, weight: Decimal) -> Option<Self> {
        let reps_total = reps.total()?;
        sets.checked_mul(reps_total)?;
        let volume = Decimal::from(sets)
            .checked_mul(Decimal::from(reps_total))
            .and_then(|v| v.checked_mul(weight))?;
        Some(ExerciseSet {
            sets,
            reps,
            weight,
            volume,
        })
    }

    /// Total repetitions across all passes of this set-group.
    ///
    /// In range by construction; saturates for hand-assembled sets.
    pub fn total_reps(&self) -> u32 {
        self.reps
            .total()
            .and_then(|r| self.sets.checked_mul(r))
            .unwrap_or(u32::MAX)
    }
}

/// A named movement with its logged sets, in textual order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub details: Vec<ExerciseSet>,
    pub total_sets: u64,
    pub total_volume: Decimal,
}

impl Exercise {
    pub fn new(name: String, details: Vec<ExerciseSet>) -> Self {
        let total_sets = details.iter().map(|d| u64::from(d.sets)).sum();
        // sets are u32-bounded but a workout may log many of them
        let total_volume = details
            .iter()
            .fold(Decimal::ZERO, |acc, d| acc.saturating_add(d.volume));
        Exercise {
            name,
            details,
            total_sets,
            total_volume,
        }
    }

    pub fn total_reps(&self) -> u64 {
        self.details
            .iter()
            .map(|d| u64::from(d.total_reps()))
            .sum()
    }
}

/// Root aggregate produced by one parse invocation.
///
/// The totals are always sums over the per-set detail, so downstream
/// renderers can display them without re-validating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedWorkout {
    pub exercises: Vec<Exercise>,
    pub total_sets: u64,
    pub total_reps: u64,
    pub total_volume: Decimal,
    pub summary: String,
}

impl ParsedWorkout {
    /// Assemble the aggregate and its one-line digest from parsed exercises.
    pub fn from_exercises(exercises: Vec<Exercise>) -> Self {
        let total_sets = exercises.iter().map(|e| e.total_sets).sum();
        let total_reps = exercises.iter().map(Exercise::total_reps).sum();
        let total_volume = exercises
            .iter()
            .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.total_volume));
        let summary = format!(
            "{} exercícios • {} séries • {} repetições • {:.1} kg volume total",
            exercises.len(),
            total_sets,
            total_reps,
            total_volume
        );
        ParsedWorkout {
            exercises,
            total_sets,
            total_reps,
            total_volume,
            summary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reps_total() {
        assert_eq!(Reps::Single(12).total(), Some(12));
        assert_eq!(Reps::Paired(10, 10).total(), Some(20));
        assert_eq!(Reps::Paired(8, 6).total(), Some(14));
    }

    #[test]
    fn test_reps_total_overflow_is_none() {
        assert_eq!(Reps::Paired(u32::MAX, 1).total(), None);
        assert_eq!(Reps::Paired(3_000_000_000, 3_000_000_000).total(), None);
        assert_eq!(Reps::Single(u32::MAX).total(), Some(u32::MAX));
    }

    #[test]
    fn test_reps_parsing() {
        assert_eq!("12".parse::<Reps>(), Ok(Reps::Single(12)));
        assert_eq!("10/10".parse::<Reps>(), Ok(Reps::Paired(10, 10)));
        assert_eq!(" 8/6 ".parse::<Reps>(), Ok(Reps::Paired(8, 6)));
        assert!("abc".parse::<Reps>().is_err());
        assert!("10/x".parse::<Reps>().is_err());
    }

    #[test]
    fn test_reps_display_roundtrip() {
        assert_eq!(Reps::Single(12).to_string(), "12");
        assert_eq!(Reps::Paired(10, 8).to_string(), "10/8");
        assert_eq!("10/8".parse::<Reps>(), Ok(Reps::Paired(10, 8)));
    }

    #[test]
    fn test_reps_serializes_as_string() {
        let json = serde_json::to_string(&Reps::Paired(10, 10)).unwrap();
        assert_eq!(json, "\"10/10\"");
        let back: Reps = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Reps::Paired(10, 10));
    }

    #[test]
    fn test_set_volume_is_derived() {
        let set = ExerciseSet::new(3, Reps::Single(12), dec!(20)).unwrap();
        assert_eq!(set.volume, dec!(720));
        assert_eq!(set.total_reps(), 36);

        let unilateral = ExerciseSet::new(2, Reps::Paired(10, 10), dec!(8)).unwrap();
        assert_eq!(unilateral.volume, dec!(320));
        assert_eq!(unilateral.total_reps(), 40);
    }

    #[test]
    fn test_set_volume_with_fractional_weight() {
        let set = ExerciseSet::new(4, Reps::Single(12), dec!(7.5)).unwrap();
        assert_eq!(set.volume, dec!(360));
    }

    #[test]
    fn test_overflowing_set_is_rejected() {
        // rep total past u32
        assert!(ExerciseSet::new(4_000_000_000, Reps::Single(4_000_000_000), dec!(1)).is_none());
        // paired sides past u32
        assert!(ExerciseSet::new(3, Reps::Paired(3_000_000_000, 3_000_000_000), dec!(10)).is_none());
        // volume past the Decimal range
        assert!(ExerciseSet::new(2, Reps::Single(1), Decimal::MAX).is_none());
        // the extremes themselves are still fine
        assert!(ExerciseSet::new(4_000_000_000, Reps::Single(1), dec!(1)).is_some());
    }

    #[test]
    fn test_exercise_totals() {
        let exercise = Exercise::new(
            "Agachamento livre".to_string(),
            vec![
                ExerciseSet::new(1, Reps::Single(12), dec!(40)).unwrap(),
                ExerciseSet::new(1, Reps::Single(10), dec!(50)).unwrap(),
            ],
        );
        assert_eq!(exercise.total_sets, 2);
        assert_eq!(exercise.total_volume, dec!(980));
        assert_eq!(exercise.total_reps(), 22);
    }

    #[test]
    fn test_workout_summary_contains_all_quantities() {
        let workout = ParsedWorkout::from_exercises(vec![Exercise::new(
            "Supino".to_string(),
            vec![ExerciseSet::new(3, Reps::Single(12), dec!(20)).unwrap()],
        )]);
        assert_eq!(workout.total_sets, 3);
        assert_eq!(workout.total_reps, 36);
        assert_eq!(workout.total_volume, dec!(720));
        assert!(workout.summary.contains("1 exercícios"));
        assert!(workout.summary.contains("3 séries"));
        assert!(workout.summary.contains("36 repetições"));
        assert!(workout.summary.contains("720.0 kg"));
    }

    #[test]
    fn test_empty_workout() {
        let workout = ParsedWorkout::from_exercises(Vec::new());
        assert!(workout.is_empty());
        assert_eq!(workout.total_sets, 0);
        assert_eq!(workout.total_reps, 0);
        assert_eq!(workout.total_volume, dec!(0));
    }
}
