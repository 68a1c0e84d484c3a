//! Types for the `/labs/interpret` endpoint

use serde::{Deserialize, Serialize};

/// A single laboratory test result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabResult {
    /// Name of the test (e.g. "Hemoglobin A1c")
    pub test_name: String,
    /// Measured value
    pub value: f64,
    /// Unit of measure
    pub unit: String,
    /// Lab-provided reference range
    #[serde(default)]
    pub reference_range: String,
}

/// Patient information providing interpretation context
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientContext {
    /// Patient age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Patient gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Relevant medical history entries
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub medical_history: Vec<String>,
}

/// Request body for `POST /labs/interpret`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabInterpretRequest {
    /// Lab results to interpret
    pub lab_results: Vec<LabResult>,
    /// Optional patient context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_context: Option<PatientContext>,
    /// Whether to include actionable recommendations
    #[serde(default)]
    pub include_recommendations: bool,
}

impl LabInterpretRequest {
    /// Creates a request for the given lab results
    #[must_use]
    pub const fn new(lab_results: Vec<LabResult>) -> Self {
        Self {
            lab_results,
            patient_context: None,
            include_recommendations: false,
        }
    }

    /// Attaches patient context
    #[must_use]
    pub fn with_patient_context(mut self, ctx: PatientContext) -> Self {
        self.patient_context = Some(ctx);
        self
    }

    /// Requests actionable recommendations
    #[must_use]
    pub const fn with_recommendations(mut self) -> Self {
        self.include_recommendations = true;
        self
    }
}

/// Response from `POST /labs/interpret`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabInterpretResponse {
    /// Narrative interpretation of the results
    pub interpretation: String,
    /// Results flagged as outside their reference range
    #[serde(default)]
    pub abnormal_results: Vec<LabResult>,
    /// Recommendations, when requested
    #[serde(default)]
    pub recommendations: Vec<String>,
    /// Overall urgency ("routine", "soon", "urgent")
    #[serde(default)]
    pub urgency_level: String,
}
