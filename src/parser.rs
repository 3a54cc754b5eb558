//! Free-text workout parser.
//!
//! Turns a trainer's loosely-formatted notes ("Supino 3x12 com 80kg") into a
//! structured [`ParsedWorkout`]. The parser is total: malformed lines are
//! dropped, never errored on, and the same text always yields the same value.
//!
//! Each non-blank line is classified, in priority order, as a pure set line,
//! a combined name-plus-sets line, an exercise-name line, or unrecognized.
//! A single `Option<ExerciseBuilder>` accumulator is threaded over the lines;
//! opening a new exercise flushes the previous one (append-if-nonempty).

use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

use crate::models::{Exercise, ExerciseSet, ParsedWorkout, Reps};

// Pure set line: 1x12x40kg, 1x10 50kg, 1x12 - 40kg, 1x12 com 40kg
static SET_LINE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(\d+)\s*x\s*(\d+(?:/\d+)?)(?:\s*x\s*|\s+(?:-|com)?\s*|\s+)(\d+(?:[,.]\d+)?)\s*(?:kgs?)?$",
    )
    .ok()
});

// Name followed by one or more x-form set specs, optionally comma/semicolon
// separated: "Supino 3x10x20kg", "Rosca direta: 2x10/10x8kg, 1x8/8x10kg"
static COMBINED_LIST: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^([A-Za-zÀ-ÿ0-9\s.]+?)(?:\s*:|\s+)\s*(\d+\s*x\s*\d+(?:/\d+)?\s*(?:x\s*|\s+)\d+(?:[,.]\d+)?\s*(?:kg)?(?:\s*[,;]\s*\d+\s*x\s*\d+(?:/\d+)?\s*(?:x\s*|\s+)\d+(?:[,.]\d+)?\s*(?:kg)?)*)",
    )
    .ok()
});

// Traditional wording: "Supino 3x12 com 80kg", "Remada 3 vezes 10 com 60 quilos"
static COMBINED_WORDED: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^([A-Za-zÀ-ÿ0-9\s.]+?)\s+(\d+)\s*(?:x|vezes?)\s*(\d+(?:/\d+)?)\s*(?:repetições?|reps?)?\s*(?:com\s*)?(\d+(?:[,.]\d+)?)\s*(?:kg|quilos?)?$",
    )
    .ok()
});

// "Perna 3 séries de 12 com 80kg"
static COMBINED_SERIES: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^([A-Za-zÀ-ÿ0-9\s.]+?)\s+(\d+)\s*séries?\s+de\s+(\d+(?:/\d+)?)\s*(?:com\s*)?(\d+(?:[,.]\d+)?)\s*(?:kg|quilos?)?$",
    )
    .ok()
});

// One set spec inside a combined list
static LIST_ITEM: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(\d+)\s*x\s*(\d+(?:/\d+)?)(?:\s*x\s*|\s+)(\d+(?:[,.]\d+)?)").ok()
});

// Letters (with Portuguese diacritics), digits, spaces, dots, hyphens, parens
static NAME_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-zÀ-ÿ0-9\s.\-()]+$").ok());

// A name line must not start with a bare "3x12" token
static BARE_SET_PREFIX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\d+x\d+").ok());

/// Classification of one trimmed, non-blank input line.
#[derive(Debug, Clone, PartialEq)]
enum LineKind {
    /// Continuation set for the currently open exercise
    Set(ExerciseSet),
    /// Exercise name and its set(s) on a single line
    Combined { name: String, sets: Vec<ExerciseSet> },
    /// Bare exercise name, opens an empty exercise
    Name(String),
    Unrecognized,
}

/// Why a line (or a whole exercise) was dropped from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningReason {
    /// Line matched no known pattern
    UnrecognizedLine,
    /// Set line appeared before any exercise name
    SetWithoutExercise,
    /// Exercise name was never followed by a valid set line
    ExerciseWithoutSets,
}

impl fmt::Display for WarningReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            WarningReason::UnrecognizedLine => "unrecognized line",
            WarningReason::SetWithoutExercise => "set line with no open exercise",
            WarningReason::ExerciseWithoutSets => "exercise with no valid sets",
        };
        f.write_str(reason)
    }
}

/// A dropped line, reported alongside the parse result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParseWarning {
    /// 1-based line number in the input text
    pub line: usize,
    pub text: String,
    pub reason: WarningReason,
}

/// In-progress exercise: the single piece of parser state.
#[derive(Debug)]
struct ExerciseBuilder {
    name: String,
    details: Vec<ExerciseSet>,
    line: usize,
}

/// Parse free-text workout notes into a structured workout.
///
/// Total over all inputs; empty or fully unrecognized text yields an empty
/// workout with zeroed totals.
pub fn parse(text: &str) -> ParsedWorkout {
    parse_with_warnings(text).0
}

/// Like [`parse`], but also reports every dropped line with its reason.
pub fn parse_with_warnings(text: &str) -> (ParsedWorkout, Vec<ParseWarning>) {
    let mut exercises = Vec::new();
    let mut warnings = Vec::new();
    let mut current: Option<ExerciseBuilder> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let number = idx + 1;

        match classify(line) {
            LineKind::Set(set) => match current.as_mut() {
                Some(builder) => builder.details.push(set),
                None => {
                    debug!(line = number, text = line, "dangling set line dropped");
                    warnings.push(ParseWarning {
                        line: number,
                        text: line.to_string(),
                        reason: WarningReason::SetWithoutExercise,
                    });
                }
            },
            LineKind::Combined { name, sets } => {
                flush(current.take(), &mut exercises, &mut warnings);
                current = Some(ExerciseBuilder {
                    name,
                    details: sets,
                    line: number,
                });
            }
            LineKind::Name(name) => {
                flush(current.take(), &mut exercises, &mut warnings);
                current = Some(ExerciseBuilder {
                    name,
                    details: Vec::new(),
                    line: number,
                });
            }
            LineKind::Unrecognized => {
                debug!(line = number, text = line, "unrecognized line dropped");
                warnings.push(ParseWarning {
                    line: number,
                    text: line.to_string(),
                    reason: WarningReason::UnrecognizedLine,
                });
            }
        }
    }
    flush(current, &mut exercises, &mut warnings);

    (ParsedWorkout::from_exercises(exercises), warnings)
}

/// Append-if-nonempty: an exercise with zero valid sets is discarded.
fn flush(
    builder: Option<ExerciseBuilder>,
    out: &mut Vec<Exercise>,
    warnings: &mut Vec<ParseWarning>,
) {
    let Some(builder) = builder else { return };
    if builder.details.is_empty() {
        debug!(name = %builder.name, "exercise with no sets discarded");
        warnings.push(ParseWarning {
            line: builder.line,
            text: builder.name,
            reason: WarningReason::ExerciseWithoutSets,
        });
    } else {
        out.push(Exercise::new(builder.name, builder.details));
    }
}

/// Ordered matcher cascade; first match wins.
fn classify(line: &str) -> LineKind {
    if let Some(set) = match_set_line(line) {
        return LineKind::Set(set);
    }
    if let Some((name, sets)) = match_combined_line(line) {
        return LineKind::Combined { name, sets };
    }
    if let Some(name) = match_name_line(line) {
        return LineKind::Name(name);
    }
    LineKind::Unrecognized
}

fn match_set_line(line: &str) -> Option<ExerciseSet> {
    let caps = SET_LINE.as_ref()?.captures(line)?;
    build_set(&caps[1], &caps[2], &caps[3])
}

fn match_combined_line(line: &str) -> Option<(String, Vec<ExerciseSet>)> {
    if let Some(re) = COMBINED_LIST.as_ref() {
        if let Some(caps) = re.captures(line) {
            let sets = parse_set_list(&caps[2]);
            if !sets.is_empty() {
                return Some((capitalize(caps[1].trim()), sets));
            }
        }
    }
    for re in [COMBINED_WORDED.as_ref(), COMBINED_SERIES.as_ref()]
        .into_iter()
        .flatten()
    {
        if let Some(caps) = re.captures(line) {
            if let Some(set) = build_set(&caps[2], &caps[3], &caps[4]) {
                return Some((capitalize(caps[1].trim()), vec![set]));
            }
        }
    }
    None
}

fn match_name_line(line: &str) -> Option<String> {
    if !NAME_LINE.as_ref()?.is_match(line) {
        return None;
    }
    if BARE_SET_PREFIX
        .as_ref()
        .is_some_and(|re| re.is_match(line))
    {
        return None;
    }
    Some(capitalize(line))
}

/// Comma/semicolon-separated set specs; invalid items are skipped.
fn parse_set_list(spec: &str) -> Vec<ExerciseSet> {
    let Some(re) = LIST_ITEM.as_ref() else {
        return Vec::new();
    };
    spec.split([',', ';'])
        .filter_map(|part| {
            let caps = re.captures(part.trim())?;
            build_set(&caps[1], &caps[2], &caps[3])
        })
        .collect()
}

/// A set whose count, reps or weight fails numeric parsing, or whose totals
/// overflow, is no set at all.
fn build_set(sets: &str, reps: &str, weight: &str) -> Option<ExerciseSet> {
    let sets: u32 = sets.parse().ok()?;
    let reps: Reps = reps.parse().ok()?;
    let weight = parse_weight(weight)?;
    ExerciseSet::new(sets, reps, weight)
}

/// Decimal comma is normalized to a dot before conversion ("7,5" -> 7.5).
fn parse_weight(raw: &str) -> Option<Decimal> {
    raw.replace(',', ".").parse().ok()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
