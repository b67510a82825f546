//! Physical trait heuristics
//!
//! Each parent's value maps to a dominance score. The child's category is
//! the band containing the average of both scores; band lower bounds are
//! inclusive and checked from the most dominant band down.

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// A categorical trait with a fixed dominance scale.
pub trait Trait: Copy + 'static {
    fn score(self) -> u8;

    /// Bands as `(inclusive lower bound, category)`, most dominant first.
    /// The last band catches everything below the previous bounds.
    fn bands() -> &'static [(f64, Self)];

    fn label(self, lang: Language) -> &'static str;

    fn inherit(mother: Self, father: Self) -> Self {
        let average = f64::from(mother.score() + father.score()) / 2.0;
        let bands = Self::bands();
        bands
            .iter()
            .find(|(lower, _)| average >= *lower)
            .map(|(_, category)| *category)
            .unwrap_or(bands[bands.len() - 1].1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HairColor {
    Black,
    Brown,
    Red,
    Blonde,
}

impl Trait for HairColor {
    fn score(self) -> u8 {
        match self {
            HairColor::Black => 4,
            HairColor::Brown => 3,
            HairColor::Red => 2,
            HairColor::Blonde => 1,
        }
    }

    fn bands() -> &'static [(f64, Self)] {
        &[
            (3.5, HairColor::Black),
            (2.5, HairColor::Brown),
            (1.5, HairColor::Red),
            (f64::NEG_INFINITY, HairColor::Blonde),
        ]
    }

    fn label(self, lang: Language) -> &'static str {
        match self {
            HairColor::Black => lang.pick("أسود", "Black"),
            HairColor::Brown => lang.pick("بني", "Brown"),
            HairColor::Red => lang.pick("أحمر", "Red"),
            HairColor::Blonde => lang.pick("أشقر", "Blonde"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EyeColor {
    DarkBrown,
    LightBrown,
    Hazel,
    Green,
    Blue,
}

impl Trait for EyeColor {
    fn score(self) -> u8 {
        match self {
            EyeColor::DarkBrown => 5,
            EyeColor::LightBrown => 4,
            EyeColor::Hazel => 3,
            EyeColor::Green => 2,
            EyeColor::Blue => 1,
        }
    }

    fn bands() -> &'static [(f64, Self)] {
        &[
            (4.5, EyeColor::DarkBrown),
            (3.5, EyeColor::LightBrown),
            (2.5, EyeColor::Hazel),
            (1.5, EyeColor::Green),
            (f64::NEG_INFINITY, EyeColor::Blue),
        ]
    }

    fn label(self, lang: Language) -> &'static str {
        match self {
            EyeColor::DarkBrown => lang.pick("بني غامق", "Dark Brown"),
            EyeColor::LightBrown => lang.pick("بني فاتح", "Light Brown"),
            EyeColor::Hazel => lang.pick("عسلي", "Hazel"),
            EyeColor::Green => lang.pick("أخضر", "Green"),
            EyeColor::Blue => lang.pick("أزرق", "Blue"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinTone {
    Dark,
    Brown,
    Olive,
    Medium,
    Fair,
    VeryFair,
}

impl Trait for SkinTone {
    fn score(self) -> u8 {
        match self {
            SkinTone::Dark => 6,
            SkinTone::Brown => 5,
            SkinTone::Olive => 4,
            SkinTone::Medium => 3,
            SkinTone::Fair => 2,
            SkinTone::VeryFair => 1,
        }
    }

    fn bands() -> &'static [(f64, Self)] {
        &[
            (5.5, SkinTone::Dark),
            (4.5, SkinTone::Brown),
            (3.5, SkinTone::Olive),
            (2.5, SkinTone::Medium),
            (1.5, SkinTone::Fair),
            (f64::NEG_INFINITY, SkinTone::VeryFair),
        ]
    }

    fn label(self, lang: Language) -> &'static str {
        match self {
            SkinTone::Dark => lang.pick("غامق", "Dark"),
            SkinTone::Brown => lang.pick("بني", "Brown"),
            SkinTone::Olive => lang.pick("زيتوني", "Olive"),
            SkinTone::Medium => lang.pick("متوسط", "Medium"),
            SkinTone::Fair => lang.pick("فاتح", "Fair"),
            SkinTone::VeryFair => lang.pick("فاتح جداً", "Very Fair"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Height {
    Tall,
    Average,
    Short,
}

impl Trait for Height {
    fn score(self) -> u8 {
        match self {
            Height::Tall => 3,
            Height::Average => 2,
            Height::Short => 1,
        }
    }

    fn bands() -> &'static [(f64, Self)] {
        &[
            (2.5, Height::Tall),
            (1.5, Height::Average),
            (f64::NEG_INFINITY, Height::Short),
        ]
    }

    fn label(self, lang: Language) -> &'static str {
        match self {
            Height::Tall => lang.pick("طويل", "Tall"),
            Height::Average => lang.pick("متوسط", "Average"),
            Height::Short => lang.pick("قصير", "Short"),
        }
    }
}

/// One parent's traits. Field names follow the client's camelCase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentTraits {
    #[serde(alias = "hair_color")]
    pub hair_color: HairColor,
    #[serde(alias = "eye_color")]
    pub eye_color: EyeColor,
    #[serde(alias = "skin_tone")]
    pub skin_tone: SkinTone,
    pub height: Height,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildTraits {
    pub hair_color: HairColor,
    pub eye_color: EyeColor,
    pub skin_tone: SkinTone,
    pub height: Height,
}

/// Localized view of [`ChildTraits`], as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedTraits {
    pub hair_color: String,
    pub eye_color: String,
    pub skin_tone: String,
    pub height: String,
}

impl ChildTraits {
    pub fn localized(&self, lang: Language) -> PredictedTraits {
        PredictedTraits {
            hair_color: self.hair_color.label(lang).to_string(),
            eye_color: self.eye_color.label(lang).to_string(),
            skin_tone: self.skin_tone.label(lang).to_string(),
            height: self.height.label(lang).to_string(),
        }
    }
}

pub fn predict_traits(mother: &ParentTraits, father: &ParentTraits) -> ChildTraits {
    ChildTraits {
        hair_color: HairColor::inherit(mother.hair_color, father.hair_color),
        eye_color: EyeColor::inherit(mother.eye_color, father.eye_color),
        skin_tone: SkinTone::inherit(mother.skin_tone, father.skin_tone),
        height: Height::inherit(mother.height, father.height),
    }
}
