//! Documented example workout.
//!
//! Shown by `liftparse example` and used as a regression fixture: it covers
//! plain set lines, unilateral "a/b" reps and multi-set exercises.

pub const EXAMPLE_WORKOUT: &str = "\
Agachamento livre
1x12x40kg
1x10x50kg
1x8x60kg
1x6x70kg

Supino inclinado
3x12x20kg
1x10x20kg
1x8x20kg

Rosca direta unil.
1x12x6kg
2x10/10x8kg
1x8/8x10kg

Leg press
3x12x100kg
1x20x80kg
";
