//! Lookup-table gender predictor
//!
//! Uses the static table for the first two children of a couple; any other
//! child number gets a coin flip. For children 1 and 2 the predicted gender
//! is a pure function of the key. The percentage confidence is sampled from
//! a band and only meant for display.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::Serialize;

use super::gender::{normalize_all, Gender, GenderToken};
use super::table;

pub const FIRST_CHILD_CONFIDENCE: RangeInclusive<u8> = 70..=90;
pub const SECOND_CHILD_CONFIDENCE: RangeInclusive<u8> = 50..=60;
pub const LATER_CHILD_CONFIDENCE: RangeInclusive<u8> = 40..=50;
pub const DEFAULT_CONFIDENCE: RangeInclusive<u8> = 50..=60;

pub const PATTERN_NOT_FOUND_NOTE: &str = "Pattern not found in database, using default prediction";

/// Outcome of the lookup-table policy. Confidence is a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablePrediction {
    pub gender: Gender,
    pub confidence: u8,
    pub pattern_found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Predicts with the thread-local RNG.
pub fn predict<S: AsRef<str>>(wife: &[S], husband: &[S], child_number: u32) -> TablePrediction {
    predict_with(&mut rand::thread_rng(), wife, husband, child_number)
}

pub fn predict_with<R, S>(
    rng: &mut R,
    wife: &[S],
    husband: &[S],
    child_number: u32,
) -> TablePrediction
where
    R: Rng,
    S: AsRef<str>,
{
    let wife = normalize_all(wife);
    let husband = normalize_all(husband);
    predict_tokens(rng, &wife, &husband, child_number)
}

/// Predicts from already normalized tokens.
pub fn predict_tokens<R: Rng>(
    rng: &mut R,
    wife: &[GenderToken],
    husband: &[GenderToken],
    child_number: u32,
) -> TablePrediction {
    // only the first two children are covered by the table
    if !matches!(child_number, 1 | 2) {
        let gender = if rng.gen_bool(0.5) { Gender::Male } else { Gender::Female };
        return TablePrediction {
            gender,
            confidence: rng.gen_range(LATER_CHILD_CONFIDENCE),
            pattern_found: false,
            note: None,
        };
    }

    let entry = lookup_key(wife, husband).and_then(|key| table::lookup(&key));

    let Some(entry) = entry else {
        return TablePrediction {
            gender: Gender::Male,
            confidence: rng.gen_range(DEFAULT_CONFIDENCE),
            pattern_found: false,
            note: Some(PATTERN_NOT_FOUND_NOTE.to_string()),
        };
    };

    let (gender, confidence) = if child_number == 1 {
        (entry.first, rng.gen_range(FIRST_CHILD_CONFIDENCE))
    } else {
        (entry.second, rng.gen_range(SECOND_CHILD_CONFIDENCE))
    };

    TablePrediction {
        gender,
        confidence,
        pattern_found: true,
        note: None,
    }
}

/// Concatenates both patterns, or `None` if any token is outside the vocabulary.
fn lookup_key(wife: &[GenderToken], husband: &[GenderToken]) -> Option<Vec<Gender>> {
    wife.iter().chain(husband).map(GenderToken::gender).collect()
}
