//! Shared enums and value types

use serde::{Deserialize, Serialize};

/// Subscription tier attached to usage statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserTier {
    /// Developer tier (default)
    #[default]
    #[serde(rename = "Developer+")]
    Developer,
    /// Professional tier
    #[serde(rename = "Professional+")]
    Professional,
    /// Enterprise tier
    #[serde(rename = "Enterprise+")]
    Enterprise,
    /// Clinical tier
    #[serde(rename = "Clinical+")]
    Clinical,
}

/// AI model preference for answer generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelPreference {
    /// Multi-model consensus (default server behavior)
    Consensus,
    /// Claude only
    Claude,
    /// GPT-4 only
    Gpt4,
    /// MedLM only
    Medlm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_wire_strings() {
        assert_eq!(
            serde_json::to_string(&UserTier::Professional).unwrap(),
            "\"Professional+\""
        );
        assert_eq!(
            serde_json::from_str::<UserTier>("\"Clinical+\"").unwrap(),
            UserTier::Clinical
        );
    }

    #[test]
    fn model_preference_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&ModelPreference::Consensus).unwrap(),
            "\"consensus\""
        );
        assert_eq!(
            serde_json::to_string(&ModelPreference::Gpt4).unwrap(),
            "\"gpt4\""
        );
    }
}
