//! Prediction core
//!
//! Pure, synchronous heuristics. Nothing in here performs I/O; the HTTP
//! layer feeds these functions and forwards their results to the explainer
//! and the store.

pub mod disease;
pub mod gender;
pub mod lookup;
pub mod positional;
pub mod table;
pub mod traits;

pub use disease::{assess as assess_diseases, DiseaseAssessment, RiskLevel};
pub use gender::{Gender, GenderToken};
pub use lookup::TablePrediction;
pub use positional::{predict_by_position, Child, ConfidenceTier, PositionalPrediction};
pub use traits::{predict_traits, ChildTraits, ParentTraits, PredictedTraits};
