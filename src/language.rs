//! Response language

use serde::{Deserialize, Deserializer, Serialize};

/// Language of generated text. Anything other than `"ar"` is answered in
/// English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("ar") {
            Language::Ar
        } else {
            Language::En
        }
    }

    /// Name used when instructing the language model.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Ar => "Arabic",
            Language::En => "English",
        }
    }

    /// Picks the Arabic or English variant of a string.
    pub fn pick<'a>(&self, ar: &'a str, en: &'a str) -> &'a str {
        match self {
            Language::Ar => ar,
            Language::En => en,
        }
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Language::from_tag(&tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags() {
        assert_eq!(Language::from_tag("ar"), Language::Ar);
        assert_eq!(Language::from_tag("AR"), Language::Ar);
        assert_eq!(Language::from_tag("en"), Language::En);
        assert_eq!(Language::from_tag("fr"), Language::En);
    }

    #[test]
    fn test_default_is_arabic() {
        assert_eq!(Language::default(), Language::Ar);
        let lang: Language = serde_json::from_str("\"de\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
