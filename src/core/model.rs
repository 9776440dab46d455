//! Wire types for the diagnosis backend.

use serde::{Deserialize, Serialize};

/// Structured advice for one diagnosed disease, as returned by the
/// backend. Each field is raw, loosely formatted prose; see
/// [`crate::core::format`] for how it is turned into display segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdviceRecord {
    pub symptoms: String,
    pub causes: String,
    pub prevention: String,
    pub treatment: String,
}

/// One successful image analysis. Field names and order match the
/// backend payload and are preserved in the JSON export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub predicted_class: String,
    /// Confidence ratio in [0, 1]. The backend does not validate the
    /// range; the presenter clamps at its boundary.
    pub confidence: f64,
    pub chatbot_answer: AdviceRecord,
}
