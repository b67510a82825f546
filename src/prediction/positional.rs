//! Positional gender predictor
//!
//! Compares the children born at the same position in both families and
//! falls back through a fixed chain when they disagree:
//!
//! 1. same gender at the requested position → that gender, `high`
//! 2. otherwise, same gender for both first-borns → that gender, `medium`
//! 3. otherwise, majority over both families (ties go to male) → `low`
//! 4. a family without any recorded child → male, `very_low`

use serde::{Deserialize, Serialize};

use super::gender::{Gender, GenderToken};

/// Categorical confidence of the positional policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
    VeryLow,
}

impl ConfidenceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "high",
            ConfidenceTier::Medium => "medium",
            ConfidenceTier::Low => "low",
            ConfidenceTier::VeryLow => "very_low",
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One child of a family history. `order` is 1-based and may have gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub order: i64,
    pub gender: GenderToken,
}

impl Child {
    pub fn new(order: i64, gender: impl Into<GenderToken>) -> Self {
        Self { order, gender: gender.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionalPrediction {
    pub gender: GenderToken,
    pub confidence: ConfidenceTier,
    pub wife_pattern: Vec<GenderToken>,
    pub husband_pattern: Vec<GenderToken>,
}

/// Genders sorted by birth order. The sort is stable, so children sharing an
/// order value keep the order they were supplied in.
pub fn family_pattern(children: &[Child]) -> Vec<GenderToken> {
    let mut sorted: Vec<&Child> = children.iter().collect();
    sorted.sort_by_key(|c| c.order);
    sorted.into_iter().map(|c| c.gender.clone()).collect()
}

pub fn predict_by_position(
    current_order: i64,
    wife_children: &[Child],
    husband_children: &[Child],
) -> PositionalPrediction {
    let wife_pattern = family_pattern(wife_children);
    let husband_pattern = family_pattern(husband_children);

    let at_position = current_order
        .checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| Some((wife_pattern.get(index)?, husband_pattern.get(index)?)));

    let (gender, confidence) = match at_position {
        Some((wife, husband)) if wife == husband => (wife.clone(), ConfidenceTier::High),
        _ if !wife_pattern.is_empty() && !husband_pattern.is_empty() => {
            first_born_fallback(&wife_pattern, &husband_pattern)
        }
        _ => (GenderToken::Known(Gender::Male), ConfidenceTier::VeryLow),
    };

    PositionalPrediction {
        gender,
        confidence,
        wife_pattern,
        husband_pattern,
    }
}

/// Both patterns must be non-empty.
fn first_born_fallback(
    wife: &[GenderToken],
    husband: &[GenderToken],
) -> (GenderToken, ConfidenceTier) {
    if wife[0] == husband[0] {
        return (wife[0].clone(), ConfidenceTier::Medium);
    }
    (GenderToken::Known(majority_gender(wife, husband)), ConfidenceTier::Low)
}

fn majority_gender(wife: &[GenderToken], husband: &[GenderToken]) -> Gender {
    let all = || wife.iter().chain(husband);
    let males = all().filter(|g| g.is(Gender::Male)).count();
    let females = all().filter(|g| g.is(Gender::Female)).count();
    if males >= females {
        Gender::Male
    } else {
        Gender::Female
    }
}
