//! Gender vocabulary and token normalization
//!
//! Requests arrive with gender words in Arabic or English (or single
//! letters). Everything is folded onto [`Gender`] before any policy looks at
//! it; words outside the vocabulary survive as [`GenderToken::Unrecognized`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const MALE_WORDS: [&str; 4] = ["male", "boy", "m", "ذكر"];
const FEMALE_WORDS: [&str; 4] = ["female", "girl", "f", "أنثى"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Arabic word used in prompts and templates.
    pub fn arabic(&self) -> &'static str {
        match self {
            Gender::Male => "ذكر",
            Gender::Female => "أنثى",
        }
    }

    /// "Boy" / "Girl" as shown to English readers.
    pub fn child_word(&self) -> &'static str {
        match self {
            Gender::Male => "Boy",
            Gender::Female => "Girl",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized gender word.
///
/// Unknown words are kept lower-cased instead of being rejected, so a family
/// history with a typo degrades to the fallback branches of the predictors
/// rather than failing the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenderToken {
    Known(Gender),
    Unrecognized(String),
}

impl GenderToken {
    pub fn normalize(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        if MALE_WORDS.contains(&lowered.as_str()) {
            GenderToken::Known(Gender::Male)
        } else if FEMALE_WORDS.contains(&lowered.as_str()) {
            GenderToken::Known(Gender::Female)
        } else {
            GenderToken::Unrecognized(lowered)
        }
    }

    pub fn gender(&self) -> Option<Gender> {
        match self {
            GenderToken::Known(g) => Some(*g),
            GenderToken::Unrecognized(_) => None,
        }
    }

    pub fn is(&self, gender: Gender) -> bool {
        self.gender() == Some(gender)
    }

    pub fn as_str(&self) -> &str {
        match self {
            GenderToken::Known(g) => g.as_str(),
            GenderToken::Unrecognized(s) => s.as_str(),
        }
    }
}

impl From<Gender> for GenderToken {
    fn from(g: Gender) -> Self {
        GenderToken::Known(g)
    }
}

impl fmt::Display for GenderToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for GenderToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GenderToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(GenderToken::normalize(&raw))
    }
}

/// Normalizes a slice of raw words, preserving order.
pub fn normalize_all<S: AsRef<str>>(raw: &[S]) -> Vec<GenderToken> {
    raw.iter().map(|s| GenderToken::normalize(s.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_male_vocabulary() {
        for word in ["ذكر", "male", "MALE", "Boy", "boy", "m", "M", " male "] {
            assert_eq!(GenderToken::normalize(word), GenderToken::Known(Gender::Male), "{word}");
        }
    }

    #[test]
    fn test_female_vocabulary() {
        for word in ["أنثى", "female", "Female", "GIRL", "f", "F"] {
            assert_eq!(GenderToken::normalize(word), GenderToken::Known(Gender::Female), "{word}");
        }
    }

    #[test]
    fn test_unknown_token_passes_through_lowercased() {
        let token = GenderToken::normalize("Unknown");
        assert_eq!(token, GenderToken::Unrecognized("unknown".to_string()));
        assert_eq!(token.gender(), None);
        assert_eq!(token.as_str(), "unknown");
    }

    #[test]
    fn test_deserialize_normalizes() {
        let tokens: Vec<GenderToken> = serde_json::from_str(r#"["Boy", "أنثى", "x"]"#).unwrap();
        assert_eq!(
            tokens,
            vec![
                GenderToken::Known(Gender::Male),
                GenderToken::Known(Gender::Female),
                GenderToken::Unrecognized("x".into()),
            ]
        );
        assert_eq!(serde_json::to_string(&tokens).unwrap(), r#"["male","female","x"]"#);
    }
}
