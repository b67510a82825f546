//! Prompt and template text
//!
//! LLM prompts for the positional, disease and trait predictions, and the
//! fixed template used to explain lookup-table predictions without a model.

use crate::language::Language;
use crate::prediction::disease::DiseaseAssessment;
use crate::prediction::traits::{ParentTraits, PredictedTraits, Trait};
use crate::prediction::{Gender, GenderToken, PositionalPrediction, TablePrediction};

pub fn system_message(lang: Language) -> String {
    format!(
        "You are a helpful assistant providing information about baby gender prediction and genetics. Respond in {}.",
        lang.name()
    )
}

pub fn fallback_explanation(lang: Language) -> &'static str {
    lang.pick("تفسير غير متوفر حالياً", "Explanation not available")
}

fn token_word(token: &GenderToken, lang: Language) -> String {
    match (token.gender(), lang) {
        (Some(g), Language::Ar) => g.arabic().to_string(),
        (Some(g), Language::En) => g.child_word().to_string(),
        (None, _) => token.as_str().to_string(),
    }
}

fn pattern_words(pattern: &[GenderToken], lang: Language) -> String {
    pattern
        .iter()
        .map(|t| token_word(t, lang))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn gender_prompt(current_order: i64, prediction: &PositionalPrediction, lang: Language) -> String {
    let wife = pattern_words(&prediction.wife_pattern, lang);
    let husband = pattern_words(&prediction.husband_pattern, lang);
    let predicted = token_word(&prediction.gender, lang);
    let confidence = prediction.confidence;

    match lang {
        Language::Ar => format!(
            "بناءً على الطريقة التقليدية لتوقع نوع الجنين:\n\
             - ترتيب الحمل الحالي: {current_order}\n\
             - نمط عائلة الزوجة: {wife}\n\
             - نمط عائلة الزوج: {husband}\n\
             - التوقع: {predicted}\n\
             - مستوى الثقة: {confidence}\n\n\
             اشرح كيف تم الوصول لهذا التوقع بطريقة بسيطة ومختصرة (3-4 جمل فقط). مع التذكير أن هذه طريقة تقليدية وليست علمية."
        ),
        Language::En => format!(
            "Based on the traditional baby gender prediction method:\n\
             - Current pregnancy order: {current_order}\n\
             - Wife's family pattern: {wife}\n\
             - Husband's family pattern: {husband}\n\
             - Prediction: {predicted}\n\
             - Confidence level: {confidence}\n\n\
             Explain briefly how this prediction was reached (3-4 sentences only). Remind that this is a traditional method, not scientific."
        ),
    }
}

pub fn genetic_prompt<S: AsRef<str>>(
    wife_diseases: &[S],
    husband_diseases: &[S],
    child_gender: Option<Gender>,
    lang: Language,
) -> String {
    let list = |items: &[S]| {
        if items.is_empty() {
            lang.pick("لا توجد", "None").to_string()
        } else {
            items.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(", ")
        }
    };
    let wife = list(wife_diseases);
    let husband = list(husband_diseases);
    let male = child_gender == Some(Gender::Male);

    match lang {
        Language::Ar => format!(
            "تحليل الأمراض الوراثية:\n\
             - أمراض عائلة الزوجة: {wife}\n\
             - أمراض عائلة الزوج: {husband}\n\
             - جنس الطفل المتوقع: {}\n\n\
             قدم:\n\
             1. تقييم عام للمخاطر (منخفض/متوسط/عالي)\n\
             2. شرح مختصر للأمراض الوراثية المحتملة\n\
             3. توصيات عامة (الفحص الجيني، استشارة طبية)\n\n\
             اجعل الإجابة مطمئنة ومختصرة (5-6 جمل). مع التذكير بأهمية استشارة طبيب متخصص.",
            if male { "ذكر" } else { "أنثى" }
        ),
        Language::En => format!(
            "Genetic disease analysis:\n\
             - Wife's family diseases: {wife}\n\
             - Husband's family diseases: {husband}\n\
             - Expected baby gender: {}\n\n\
             Provide:\n\
             1. General risk assessment (low/medium/high)\n\
             2. Brief explanation of potential genetic diseases\n\
             3. General recommendations (genetic testing, medical consultation)\n\n\
             Keep the response reassuring and brief (5-6 sentences). Remind about the importance of consulting a specialist.",
            if male { "Male" } else { "Female" }
        ),
    }
}

/// Appended to the disease prompt so the model sees the computed levels.
pub fn assessment_summary(assessment: &DiseaseAssessment) -> String {
    let flagged: Vec<String> = assessment
        .diseases_info
        .iter()
        .filter(|d| d.risk_level != crate::prediction::RiskLevel::Low)
        .map(|d| format!("{} ({})", d.name, d.risk_level.as_str()))
        .collect();
    format!(
        "\n\nComputed overall risk: {}. Flagged conditions: {}.",
        assessment.risk_assessment.as_str(),
        if flagged.is_empty() { "none".to_string() } else { flagged.join(", ") }
    )
}

fn parent_line(traits: &ParentTraits, lang: Language) -> String {
    format!(
        "{}, {}, {}, {}",
        traits.hair_color.label(lang),
        traits.eye_color.label(lang),
        traits.skin_tone.label(lang),
        traits.height.label(lang)
    )
}

pub fn traits_prompt(
    mother: &ParentTraits,
    father: &ParentTraits,
    predicted: &PredictedTraits,
    lang: Language,
) -> String {
    let mother_line = parent_line(mother, lang);
    let father_line = parent_line(father, lang);
    let PredictedTraits { hair_color, eye_color, skin_tone, height } = predicted;

    match lang {
        Language::Ar => format!(
            "توقع الصفات الوراثية للطفل:\n\
             - صفات الأم (الشعر، العيون، الجلد، الطول): {mother_line}\n\
             - صفات الأب (الشعر، العيون، الجلد، الطول): {father_line}\n\
             - الصفات المتوقعة: الشعر {hair_color}، العيون {eye_color}، الجلد {skin_tone}، الطول {height}\n\n\
             اشرح بشكل علمي مبسط كيف تورث هذه الصفات (الجينات السائدة والمتنحية) في 4-5 جمل. مع التذكير أن هذا توقع تقريبي."
        ),
        Language::En => format!(
            "Child physical traits prediction:\n\
             - Mother's traits (hair, eyes, skin, height): {mother_line}\n\
             - Father's traits (hair, eyes, skin, height): {father_line}\n\
             - Predicted traits: hair {hair_color}, eyes {eye_color}, skin {skin_tone}, height {height}\n\n\
             Explain in simple scientific terms how these traits are inherited (dominant and recessive genes) in 4-5 sentences. Remind that this is an approximate prediction."
        ),
    }
}

/// "first child", "third child", ... with a generic wording past the tenth
/// and for a missing child number.
fn child_label(child_number: u32, lang: Language) -> String {
    const ORDINALS: [(&str, &str); 10] = [
        ("الأول", "first"),
        ("الثاني", "second"),
        ("الثالث", "third"),
        ("الرابع", "fourth"),
        ("الخامس", "fifth"),
        ("السادس", "sixth"),
        ("السابع", "seventh"),
        ("الثامن", "eighth"),
        ("التاسع", "ninth"),
        ("العاشر", "tenth"),
    ];
    let ordinal = usize::try_from(child_number)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| ORDINALS.get(i));
    match (ordinal, lang) {
        (Some((ar, _)), Language::Ar) => format!("للطفل {ar}"),
        (Some((_, en)), Language::En) => format!("{en} child"),
        (None, Language::Ar) if child_number == 0 => "لهذا الطفل".to_string(),
        (None, Language::En) if child_number == 0 => "this child".to_string(),
        (None, Language::Ar) => format!("للطفل رقم {child_number}"),
        (None, Language::En) => format!("child #{child_number}"),
    }
}

/// Fixed explanation for a lookup-table prediction; no model involved.
pub fn table_explanation(
    wife: &[GenderToken],
    husband: &[GenderToken],
    prediction: &TablePrediction,
    child_number: u32,
    lang: Language,
) -> String {
    let join = |tokens: &[GenderToken]| {
        tokens
            .iter()
            .map(|t| match lang {
                Language::Ar => t.gender().map(|g| g.arabic().to_string()).unwrap_or_else(|| t.to_string()),
                Language::En => t.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" - ")
    };
    let wife = join(wife);
    let husband = join(husband);

    match lang {
        Language::Ar => {
            let gender = prediction.gender.arabic();
            let order = child_label(child_number, lang);
            format!(
                "📊 التوقع بناءً على التاريخ العائلي:\n\n\
                 🔹 نمط عائلة الزوجة: {wife}\n\
                 🔹 نمط عائلة الزوج: {husband}\n\n\
                 ✨ النتيجة المتوقعة {order}: {gender}\n\n\
                 📝 ملاحظة: هذا التوقع مبني على دراسة أنماط التاريخ العائلي وليس فحصاً طبياً.\n\
                 للتأكد الدقيق، يُرجى مراجعة الطبيب المختص."
            )
        }
        Language::En => {
            let gender = prediction.gender;
            let order = child_label(child_number, lang);
            format!(
                "📊 Prediction based on family history:\n\n\
                 🔹 Wife's family pattern: {wife}\n\
                 🔹 Husband's family pattern: {husband}\n\n\
                 ✨ Predicted result for {order}: {gender}\n\n\
                 📝 Note: This prediction is based on family history patterns and is not a medical test.\n\
                 For accurate confirmation, please consult with a medical professional."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::{predict_by_position, Child};

    #[test]
    fn test_gender_prompt_english_words() {
        let p = predict_by_position(
            1,
            &[Child::new(1, Gender::Male)],
            &[Child::new(1, Gender::Female)],
        );
        let prompt = gender_prompt(1, &p, Language::En);
        assert!(prompt.contains("Wife's family pattern: Boy"));
        assert!(prompt.contains("Husband's family pattern: Girl"));
        assert!(prompt.contains("Confidence level: low"));
    }

    #[test]
    fn test_gender_prompt_arabic_words() {
        let p = predict_by_position(1, &[Child::new(1, Gender::Female)], &[Child::new(1, Gender::Female)]);
        let prompt = gender_prompt(1, &p, Language::Ar);
        assert!(prompt.contains("التوقع: أنثى"));
        assert!(prompt.contains("high"));
    }

    #[test]
    fn test_genetic_prompt_empty_lists() {
        let none: [&str; 0] = [];
        let prompt = genetic_prompt(&none, &none, Some(Gender::Male), Language::En);
        assert!(prompt.contains("Wife's family diseases: None"));
        assert!(prompt.contains("Expected baby gender: Male"));
    }

    #[test]
    fn test_table_explanation() {
        let prediction = TablePrediction {
            gender: Gender::Female,
            confidence: 80,
            pattern_found: true,
            note: None,
        };
        let wife = vec![GenderToken::Known(Gender::Male)];
        let husband = vec![GenderToken::Known(Gender::Female)];

        let en = table_explanation(&wife, &husband, &prediction, 1, Language::En);
        assert!(en.contains("Wife's family pattern: male"));
        assert!(en.contains("Predicted result for first child: female"));

        let ar = table_explanation(&wife, &husband, &prediction, 2, Language::Ar);
        assert!(ar.contains("للطفل الثاني: أنثى"));
    }

    #[test]
    fn test_table_explanation_later_children() {
        let prediction = TablePrediction {
            gender: Gender::Male,
            confidence: 45,
            pattern_found: false,
            note: None,
        };
        let family = vec![GenderToken::Known(Gender::Male)];
        let render = |n, lang| table_explanation(&family, &family, &prediction, n, lang);

        assert!(render(3, Language::En).contains("Predicted result for third child: male"));
        assert!(render(3, Language::Ar).contains("للطفل الثالث: ذكر"));
        assert!(render(0, Language::En).contains("Predicted result for this child: male"));
        assert!(render(0, Language::Ar).contains("لهذا الطفل: ذكر"));
        assert!(!render(0, Language::Ar).contains("الثاني"));
        assert!(render(12, Language::En).contains("child #12"));
    }

    #[test]
    fn test_fallback_text() {
        assert_eq!(fallback_explanation(Language::En), "Explanation not available");
        assert!(system_message(Language::Ar).ends_with("Respond in Arabic."));
    }
}
