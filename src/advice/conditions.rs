//! Symptom conditions and their short self-care plans.

use serde::{Deserialize, Serialize};

use super::drugs::title_case;

/// Conditions the keyword classifier can recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Headache,
    Fever,
    ColdCough,
    Allergy,
    Acidity,
    Diarrhea,
}

impl Condition {
    pub const ALL: [Condition; 6] = [
        Self::Headache,
        Self::Fever,
        Self::ColdCough,
        Self::Allergy,
        Self::Acidity,
        Self::Diarrhea,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Headache => "headache",
            Self::Fever => "fever",
            Self::ColdCough => "cold_cough",
            Self::Allergy => "allergy",
            Self::Acidity => "acidity",
            Self::Diarrhea => "diarrhea",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Advisory plan for one condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionPlan {
    pub title: String,
    pub regimen: Vec<String>,
    pub notes: Vec<String>,
    pub red_flags: Vec<String>,
}

impl ConditionPlan {
    fn titled(key: &str) -> Self {
        Self {
            title: title_case(key),
            regimen: Vec::new(),
            notes: Vec::new(),
            red_flags: Vec::new(),
        }
    }

    /// Plan for a recognised condition.
    pub fn for_condition(condition: Condition) -> Self {
        let mut plan = Self::titled(condition.key());
        let (regimen, red_flags): (Vec<&str>, Vec<&str>) = match condition {
            Condition::Headache => (
                vec![
                    "Paracetamol 500 mg morning & night; may add midday dose if needed (max 3,000 mg/day).",
                    "If not enough: Ibuprofen 200–400 mg after food, up to every 6–8 h (max 1,200 mg/day).",
                ],
                vec![
                    "worst-ever headache",
                    "head injury",
                    "fever + neck stiffness",
                    "neurologic deficits",
                ],
            ),
            Condition::Fever => (
                vec!["Paracetamol 500 mg every 6–8 h as needed (max 3,000 mg/day)."],
                vec![],
            ),
            Condition::ColdCough => (
                vec![
                    "Steam/warm fluids; honey for throat (>1y).",
                    "Dry cough: Dextromethorphan 10–20 mg every 4–6 h.",
                    "Runny/itchy nose: Cetirizine 10 mg at night.",
                ],
                vec![],
            ),
            Condition::Allergy => (vec!["Cetirizine 10 mg once daily (prefer night)."], vec![]),
            Condition::Acidity => (
                vec!["Omeprazole 20 mg once daily before breakfast for 7–14 days."],
                vec![],
            ),
            Condition::Diarrhea => (
                vec!["WHO-ORS ~200–250 ml after each loose stool; frequent sips."],
                vec![],
            ),
        };
        plan.regimen = regimen.iter().map(|s| s.to_string()).collect();
        plan.red_flags = red_flags.iter().map(|s| s.to_string()).collect();
        plan
    }

    /// Plan by condition code; unknown codes get an explanatory note only.
    pub fn for_key(key: &str) -> Self {
        match Condition::from_key(key) {
            Some(condition) => Self::for_condition(condition),
            None => {
                let mut plan = Self::titled(key);
                plan.notes.push("No plan available.".to_string());
                plan
            }
        }
    }

    /// All regimen lines joined, for medicine mention scanning.
    pub fn regimen_text(&self) -> String {
        self.regimen.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headache_plan_mentions_both_analgesics() {
        let plan = ConditionPlan::for_condition(Condition::Headache);
        assert_eq!(plan.title, "Headache");
        assert!(plan.regimen.iter().any(|l| l.starts_with("Paracetamol")));
        assert!(plan.regimen.iter().any(|l| l.contains("Ibuprofen")));
        assert_eq!(plan.red_flags.len(), 4);
    }

    #[test]
    fn unknown_key_gets_note_and_no_regimen() {
        let plan = ConditionPlan::for_key("broken_leg");
        assert_eq!(plan.title, "Broken Leg");
        assert!(plan.regimen.is_empty());
        assert_eq!(plan.notes, vec!["No plan available.".to_string()]);
    }

    #[test]
    fn keys_round_trip() {
        for condition in Condition::ALL {
            assert_eq!(Condition::from_key(condition.key()), Some(condition));
            assert!(!ConditionPlan::for_condition(condition).regimen.is_empty());
        }
    }
}
