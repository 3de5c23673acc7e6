//! Static medicine knowledge base and alias lookup.

use serde::Serialize;

use crate::nlp::norm_intent;

/// One medicine with its dosing notes and profile-dependent warnings.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct DrugRecord {
    pub key: &'static str,
    pub aliases: &'static [&'static str],
    #[serde(rename = "class")]
    pub drug_class: &'static str,
    pub adult_dose: &'static str,
    pub notes: &'static str,
    /// Condition codes that rule the medicine out.
    pub contraindications: &'static [&'static str],
    /// Condition codes that warrant a warning.
    pub cautions: &'static [&'static str],
}

impl DrugRecord {
    /// Whether any alias occurs anywhere in already-lowercased text.
    pub fn mentioned_in(&self, lowered: &str) -> bool {
        self.aliases.iter().any(|alias| lowered.contains(alias))
    }

    /// Display name, e.g. `Paracetamol`.
    pub fn title(&self) -> String {
        title_case(self.key)
    }
}

/// Knowledge base in lookup priority order.
pub static DRUGS: &[DrugRecord] = &[
    DrugRecord {
        key: "paracetamol",
        aliases: &["paracetamol", "acetaminophen", "pcm", "crocin"],
        drug_class: "Analgesic/antipyretic",
        adult_dose: "500 mg every 6–8 hours as needed; do not exceed 3,000 mg/day.",
        notes: "Avoid combining with other acetaminophen-containing products.",
        contraindications: &["severe_liver_disease"],
        cautions: &["liver_disease", "alcohol_use"],
    },
    DrugRecord {
        key: "ibuprofen",
        aliases: &["ibuprofen", "brufen", "advil"],
        drug_class: "NSAID",
        adult_dose: "200–400 mg every 6–8 hours after food; max 1,200 mg/day.",
        notes: "May irritate stomach; avoid in active ulcers.",
        contraindications: &["active_ulcer", "severe_kidney_disease"],
        cautions: &["asthma", "gastritis"],
    },
    DrugRecord {
        key: "cetirizine",
        aliases: &["cetirizine", "cetzine", "zyrtec"],
        drug_class: "Antihistamine",
        adult_dose: "10 mg once daily (may cause drowsiness).",
        notes: "Avoid driving/operating machinery if drowsy.",
        contraindications: &[],
        cautions: &["alcohol_use"],
    },
    DrugRecord {
        key: "omeprazole",
        aliases: &["omeprazole", "omez", "prilosec"],
        drug_class: "Proton pump inhibitor",
        adult_dose: "20 mg once daily before breakfast for 7–14 days.",
        notes: "Seek care if alarm features (bleeding, black stools, severe pain).",
        contraindications: &[],
        cautions: &[],
    },
    DrugRecord {
        key: "ors",
        aliases: &["ors", "oral rehydration", "oral rehydration salts"],
        drug_class: "Rehydration solution",
        adult_dose: "Small frequent sips; ~200–250 ml after each loose stool.",
        notes: "Use WHO-ORS; avoid sugary sodas.",
        contraindications: &[],
        cautions: &[],
    },
];

/// Find the medicine a piece of text refers to.
///
/// Aliases are matched as plain substrings, first record wins; the bare key
/// is tried as a fallback. Substring matching can hit inside longer words
/// (`ors` in `doctors`).
pub fn find_drug(text: &str) -> Option<&'static DrugRecord> {
    let lowered = norm_intent(text);
    DRUGS
        .iter()
        .find(|drug| drug.mentioned_in(&lowered))
        .or_else(|| DRUGS.iter().find(|drug| lowered.contains(drug.key)))
}

/// Every medicine with an alias in `text`, in knowledge-base order.
pub fn drugs_mentioned(text: &str) -> Vec<&'static DrugRecord> {
    let lowered = text.to_lowercase();
    DRUGS
        .iter()
        .filter(|drug| drug.mentioned_in(&lowered))
        .collect()
}

pub fn drug_by_key(key: &str) -> Option<&'static DrugRecord> {
    DRUGS.iter().find(|drug| drug.key == key)
}

pub(crate) fn title_case(code: &str) -> String {
    code.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
