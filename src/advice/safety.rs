//! Cross-check a user profile against a medicine's warning lists.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{drugs::DrugRecord, profile::UserProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    Contraindication,
    Caution,
}

/// A profile attribute that matters for a given medicine.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SafetyFlag {
    pub kind: FlagKind,
    /// The condition code that triggered the flag.
    pub detail: String,
}

impl SafetyFlag {
    fn new(kind: FlagKind, detail: &str) -> Self {
        Self {
            kind,
            detail: detail.to_string(),
        }
    }
}

/// Flags for one medicine: contraindications first, then cautions, each in
/// record order.
///
/// Contraindications match conditions or allergies; cautions also match
/// current medications.
pub fn check(profile: &UserProfile, drug: &DrugRecord) -> Vec<SafetyFlag> {
    let contraindications = drug
        .contraindications
        .iter()
        .filter(|code| profile.conditions.contains(**code) || profile.allergies.contains(**code))
        .map(|code| SafetyFlag::new(FlagKind::Contraindication, code));
    let cautions = drug
        .cautions
        .iter()
        .filter(|code| {
            profile.conditions.contains(**code)
                || profile.allergies.contains(**code)
                || profile.current_meds.contains(**code)
        })
        .map(|code| SafetyFlag::new(FlagKind::Caution, code));
    contraindications.chain(cautions).collect()
}

/// Flags across several medicines, deduplicated and sorted by kind then code.
pub fn check_all<'a>(
    profile: &UserProfile,
    drugs: impl IntoIterator<Item = &'a DrugRecord>,
) -> Vec<SafetyFlag> {
    drugs
        .into_iter()
        .flat_map(|drug| check(profile, drug))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct, sorted codes of one flag kind.
pub fn details_of(flags: &[SafetyFlag], kind: FlagKind) -> Vec<&str> {
    flags
        .iter()
        .filter(|flag| flag.kind == kind)
        .map(|flag| flag.detail.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
