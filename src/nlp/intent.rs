//! Regex decision lists for greeting and symptom intents.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::advice::Condition;

/// Condition keyword patterns, evaluated top to bottom.
///
/// Order encodes priority: "cold cough with gastritis" is a cold, not acidity.
const CONDITION_PATTERNS: &[(Condition, &[&str])] = &[
    (
        Condition::Headache,
        &[r"\bheadache\b", r"\bmigraine\b", r"sir\s*dard"],
    ),
    (Condition::Fever, &[r"\bfever\b", r"\bbukhar\b"]),
    (
        Condition::ColdCough,
        &[r"\bcold\b", r"\bcough\b", r"runny\s*nose", r"khansi"],
    ),
    (
        Condition::Allergy,
        &[r"\ballergy\b", r"\bsneeze\b", r"\bitch\b", r"rhinitis"],
    ),
    (
        Condition::Acidity,
        &[r"\bacidity\b", r"heartburn", r"acid\s*reflux", r"gastritis"],
    ),
    (
        Condition::Diarrhea,
        &[r"\bdiarrhea\b", r"loose\s*motions"],
    ),
];

static CONDITION_RULES: Lazy<Vec<(Condition, Vec<Regex>)>> = Lazy::new(|| {
    CONDITION_PATTERNS
        .iter()
        .map(|(condition, patterns)| {
            let compiled = patterns
                .iter()
                .map(|p| Regex::new(p).expect("valid condition regex"))
                .collect();
            (*condition, compiled)
        })
        .collect()
});

static GREETING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(hi|hello|hey|namaste|good\s*(morning|evening|afternoon))\b")
        .expect("valid greeting regex")
});

/// Whether intent-normalised text contains a greeting.
pub fn is_greeting(text: &str) -> bool {
    GREETING.is_match(text)
}

/// First condition whose pattern list matches intent-normalised text.
pub fn classify_condition(text: &str) -> Option<Condition> {
    CONDITION_RULES
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| p.is_match(text)))
        .map(|(condition, _)| *condition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greetings_need_word_boundaries() {
        assert!(is_greeting("hi there"));
        assert!(is_greeting("good  morning doc"));
        assert!(is_greeting("namaste!"));
        assert!(!is_greeting("this is which"));
    }

    #[test]
    fn transliterated_keywords_match() {
        assert_eq!(classify_condition("mujhe sir dard hai"), Some(Condition::Headache));
        assert_eq!(classify_condition("bukhar"), Some(Condition::Fever));
        assert_eq!(classify_condition("loose motions since morning"), Some(Condition::Diarrhea));
    }

    #[test]
    fn first_listed_condition_wins() {
        assert_eq!(
            classify_condition("cough and heartburn"),
            Some(Condition::ColdCough)
        );
        assert_eq!(classify_condition("fever with a headache"), Some(Condition::Headache));
    }

    #[test]
    fn unknown_text_has_no_intent() {
        assert_eq!(classify_condition("xyzxyz nonsense"), None);
    }

    #[test]
    fn every_condition_has_rules() {
        for condition in Condition::ALL {
            assert!(CONDITION_RULES.iter().any(|(c, _)| *c == condition));
        }
    }
}
