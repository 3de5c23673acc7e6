//! Text processing: normalisation and keyword intent classification.

pub mod intent;
pub mod normalize;

pub use normalize::{norm_compare, norm_intent};
