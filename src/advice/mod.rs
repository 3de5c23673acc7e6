//! Deterministic medicine and symptom guidance with profile safety checks.

pub mod conditions;
pub mod drugs;
pub mod profile;
pub mod safety;

pub use conditions::{Condition, ConditionPlan};
pub use drugs::{find_drug, DrugRecord, DRUGS};
pub use profile::{ProfileError, Sex, UserProfile};
pub use safety::{FlagKind, SafetyFlag};
