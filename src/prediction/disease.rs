//! Hereditary disease risk heuristics
//!
//! The overall assessment only counts how many diseases both families
//! report. Each registry entry is flagged independently by a keyword search
//! over the reported names; X-linked entries additionally require a male
//! child and a mention on the mother's side.

use serde::{Deserialize, Serialize};

use super::gender::Gender;
use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inheritance {
    AutosomalRecessive,
    XLinked,
}

/// Which reported diseases a registry entry is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    BothFamilies,
    /// Only a male child, and only the wife's family history.
    MaternalMaleOnly,
}

#[derive(Debug, Clone, Copy)]
pub struct DiseaseDefinition {
    pub key: &'static str,
    pub name_ar: &'static str,
    pub name_en: &'static str,
    pub inheritance: Inheritance,
    keyword: &'static str,
    scope: Scope,
    flagged: RiskLevel,
}

impl DiseaseDefinition {
    pub fn name(&self, lang: Language) -> &'static str {
        lang.pick(self.name_ar, self.name_en)
    }
}

pub const DISEASE_REGISTRY: [DiseaseDefinition; 6] = [
    DiseaseDefinition {
        key: "thalassemia",
        name_ar: "الثلاسيميا (أنيميا البحر المتوسط)",
        name_en: "Thalassemia",
        inheritance: Inheritance::AutosomalRecessive,
        keyword: "thalassemia",
        scope: Scope::BothFamilies,
        flagged: RiskLevel::High,
    },
    DiseaseDefinition {
        key: "sickle_cell",
        name_ar: "فقر الدم المنجلي",
        name_en: "Sickle Cell Anemia",
        inheritance: Inheritance::AutosomalRecessive,
        keyword: "sickle",
        scope: Scope::BothFamilies,
        flagged: RiskLevel::High,
    },
    DiseaseDefinition {
        key: "hemophilia",
        name_ar: "الهيموفيليا (نزف الدم الوراثي)",
        name_en: "Hemophilia",
        inheritance: Inheritance::XLinked,
        keyword: "hemophilia",
        scope: Scope::MaternalMaleOnly,
        flagged: RiskLevel::High,
    },
    DiseaseDefinition {
        key: "color_blindness",
        name_ar: "عمى الألوان",
        name_en: "Color Blindness",
        inheritance: Inheritance::XLinked,
        keyword: "color",
        scope: Scope::MaternalMaleOnly,
        flagged: RiskLevel::Medium,
    },
    DiseaseDefinition {
        key: "cystic_fibrosis",
        name_ar: "التليف الكيسي",
        name_en: "Cystic Fibrosis",
        inheritance: Inheritance::AutosomalRecessive,
        keyword: "fibrosis",
        scope: Scope::BothFamilies,
        flagged: RiskLevel::High,
    },
    DiseaseDefinition {
        key: "duchenne",
        name_ar: "ضمور العضلات الدوشيني",
        name_en: "Duchenne Muscular Dystrophy",
        inheritance: Inheritance::XLinked,
        keyword: "duchenne",
        scope: Scope::MaternalMaleOnly,
        flagged: RiskLevel::High,
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseInfo {
    pub key: String,
    pub name: String,
    pub inheritance: Inheritance,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseAssessment {
    pub risk_assessment: RiskLevel,
    pub diseases_info: Vec<DiseaseInfo>,
}

/// low, then medium above 2 reported diseases, then high above 4.
pub fn overall_risk(reported: usize) -> RiskLevel {
    match reported {
        0..=2 => RiskLevel::Low,
        3..=4 => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}

pub fn assess<S: AsRef<str>>(
    wife_diseases: &[S],
    husband_diseases: &[S],
    child_gender: Option<Gender>,
    lang: Language,
) -> DiseaseAssessment {
    let maternal_text = joined_lowercase(wife_diseases.iter());
    let combined_text = joined_lowercase(wife_diseases.iter().chain(husband_diseases));
    let is_male = child_gender == Some(Gender::Male);

    let diseases_info = DISEASE_REGISTRY
        .iter()
        .map(|def| {
            let mentioned = match def.scope {
                Scope::BothFamilies => combined_text.contains(def.keyword),
                Scope::MaternalMaleOnly => is_male && maternal_text.contains(def.keyword),
            };
            DiseaseInfo {
                key: def.key.to_string(),
                name: def.name(lang).to_string(),
                inheritance: def.inheritance,
                risk_level: if mentioned { def.flagged } else { RiskLevel::Low },
            }
        })
        .collect();

    DiseaseAssessment {
        risk_assessment: overall_risk(wife_diseases.len() + husband_diseases.len()),
        diseases_info,
    }
}

pub fn recommendations(lang: Language) -> &'static str {
    lang.pick(
        "يُنصح بإجراء فحص جيني شامل واستشارة طبيب متخصص في الأمراض الوراثية قبل الحمل أو في المراحل المبكرة منه.",
        "It is recommended to undergo comprehensive genetic testing and consult a specialist in genetic diseases before pregnancy or in its early stages.",
    )
}

fn joined_lowercase<'a, S: AsRef<str> + 'a>(names: impl Iterator<Item = &'a S>) -> String {
    names
        .map(|n| n.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(a: &DiseaseAssessment, key: &str) -> RiskLevel {
        a.diseases_info
            .iter()
            .find(|d| d.key == key)
            .map(|d| d.risk_level)
            .expect("registry entry")
    }

    #[test]
    fn test_overall_risk_thresholds() {
        let none: [&str; 0] = [];
        assert_eq!(assess(&none, &none, None, Language::En).risk_assessment, RiskLevel::Low);
        assert_eq!(
            assess(&["a", "b"], &["c"], None, Language::En).risk_assessment,
            RiskLevel::Medium
        );
        assert_eq!(assess(&["a", "b"], &["c", "d"], None, Language::En).risk_assessment, RiskLevel::Medium);
        assert_eq!(assess(&["a", "b", "c"], &["d", "e"], None, Language::En).risk_assessment, RiskLevel::High);
        assert_eq!(overall_risk(2), RiskLevel::Low);
    }

    #[test]
    fn test_registry_always_listed() {
        let none: [&str; 0] = [];
        let a = assess(&none, &none, Some(Gender::Male), Language::En);
        assert_eq!(a.diseases_info.len(), 6);
        assert!(a.diseases_info.iter().all(|d| d.risk_level == RiskLevel::Low));
    }

    #[test]
    fn test_keyword_substring_matching() {
        let a = assess(
            &["Beta Thalassemia Minor"],
            &["sickle cell trait", "Cystic Fibrosis"],
            Some(Gender::Female),
            Language::En,
        );
        assert_eq!(level(&a, "thalassemia"), RiskLevel::High);
        assert_eq!(level(&a, "sickle_cell"), RiskLevel::High);
        assert_eq!(level(&a, "cystic_fibrosis"), RiskLevel::High);
        assert_eq!(level(&a, "hemophilia"), RiskLevel::Low);
    }

    #[test]
    fn test_x_linked_requires_male_and_maternal_side() {
        let wife = ["Hemophilia A", "red-green color blindness", "Duchenne"];
        let none: [&str; 0] = [];

        let male = assess(&wife, &none, Some(Gender::Male), Language::En);
        assert_eq!(level(&male, "hemophilia"), RiskLevel::High);
        assert_eq!(level(&male, "color_blindness"), RiskLevel::Medium);
        assert_eq!(level(&male, "duchenne"), RiskLevel::High);

        let female = assess(&wife, &none, Some(Gender::Female), Language::En);
        assert_eq!(level(&female, "hemophilia"), RiskLevel::Low);
        assert_eq!(level(&female, "color_blindness"), RiskLevel::Low);

        let paternal = assess(&none, &wife, Some(Gender::Male), Language::En);
        assert_eq!(level(&paternal, "hemophilia"), RiskLevel::Low);
        assert_eq!(level(&paternal, "duchenne"), RiskLevel::Low);
    }

    #[test]
    fn test_localized_names() {
        let none: [&str; 0] = [];
        let a = assess(&none, &none, None, Language::Ar);
        assert_eq!(a.diseases_info[1].name, "فقر الدم المنجلي");
        assert!(recommendations(Language::En).starts_with("It is recommended"));
    }
}
