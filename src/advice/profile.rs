//! Session-scoped user health profile.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_AGE: u32 = 120;
pub const MAX_WEIGHT_KG: f64 = 300.0;

/// Condition codes front-ends offer as checkboxes, with display labels.
pub const KNOWN_CONDITIONS: &[(&str, &str)] = &[
    ("severe_liver_disease", "Severe liver disease"),
    ("liver_disease", "Liver disease (any)"),
    ("severe_kidney_disease", "Severe kidney disease"),
    ("active_ulcer", "Active stomach/duodenal ulcer"),
    ("gastritis", "Gastritis / acid reflux"),
    ("asthma", "Asthma"),
    ("alcohol_use", "Regular alcohol use"),
];

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("age {0} is outside 0..=120")]
    AgeOutOfRange(u32),
    #[error("weight {0} kg must be positive and at most 300")]
    WeightOutOfRange(f64),
    #[error("unknown sex {0:?}; expected female, male or other")]
    UnknownSex(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Female,
    Male,
    Other,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Female => "female",
            Self::Male => "male",
            Self::Other => "other",
        })
    }
}

impl FromStr for Sex {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" | "f" => Ok(Self::Female),
            "male" | "m" => Ok(Self::Male),
            "other" => Ok(Self::Other),
            _ => Err(ProfileError::UnknownSex(s.to_string())),
        }
    }
}

/// Health attributes the safety checker reads. Never inferred, only supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub age: Option<u32>,
    pub sex: Sex,
    pub weight_kg: Option<f64>,
    pub conditions: BTreeSet<String>,
    pub allergies: BTreeSet<String>,
    pub current_meds: BTreeSet<String>,
}

impl UserProfile {
    /// Boundary check for externally supplied values.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if let Some(age) = self.age {
            if age > MAX_AGE {
                return Err(ProfileError::AgeOutOfRange(age));
            }
        }
        if let Some(weight) = self.weight_kg {
            if !(weight > 0.0 && weight <= MAX_WEIGHT_KG) {
                return Err(ProfileError::WeightOutOfRange(weight));
            }
        }
        Ok(())
    }

    /// Short human-readable summary of the profile.
    pub fn recap(&self) -> String {
        let age = self.age.map_or_else(|| "—".to_string(), |a| a.to_string());
        let weight = self
            .weight_kg
            .map_or_else(|| "—".to_string(), |w| format!("{w} kg"));
        format!(
            "Profile received\nAge/Sex: {age} / {}\nWeight: {weight}\nConditions: {}\nAllergies: {}\nCurrent meds: {}",
            self.sex,
            join_or_dash(&self.conditions),
            join_or_dash(&self.allergies),
            join_or_dash(&self.current_meds),
        )
    }
}

/// Parse a free-text list such as `"Penicillin, sulfa drugs"` into codes.
pub fn parse_codes(text: &str) -> BTreeSet<String> {
    text.split(',')
        .map(|part| part.trim().to_lowercase().replace(' ', "_"))
        .filter(|code| !code.is_empty())
        .collect()
}

fn join_or_dash(codes: &BTreeSet<String>) -> String {
    if codes.is_empty() {
        "—".to_string()
    } else {
        codes.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}
