//! Types for the `/ask` endpoint

use serde::{Deserialize, Serialize};

use super::common::ModelPreference;

/// Request body for `POST /ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    /// The health question to answer
    pub prompt: String,

    /// Additional free-form context for the question
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Conversation to continue, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,

    /// Whether to include source citations in the answer
    #[serde(default)]
    pub include_citations: bool,

    /// Preferred model for answer generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_preference: Option<ModelPreference>,
}

impl AskRequest {
    /// Creates a new ask request with the given prompt
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            context: None,
            conversation_id: None,
            include_citations: false,
            model_preference: None,
        }
    }

    /// Sets additional context
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Continues an existing conversation
    #[must_use]
    pub fn with_conversation_id(mut self, id: impl Into<String>) -> Self {
        self.conversation_id = Some(id.into());
        self
    }

    /// Requests source citations in the answer
    #[must_use]
    pub const fn with_citations(mut self) -> Self {
        self.include_citations = true;
        self
    }

    /// Sets the model preference
    #[must_use]
    pub const fn with_model_preference(mut self, pref: ModelPreference) -> Self {
        self.model_preference = Some(pref);
        self
    }
}

/// A source citation in an answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    /// Title of the cited source
    #[serde(default)]
    pub title: String,
    /// URL of the cited source
    #[serde(default)]
    pub url: String,
    /// Relevant snippet from the source
    #[serde(default)]
    pub snippet: String,
}

/// Response from `POST /ask`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// The generated answer
    pub answer: String,
    /// Citations backing the answer, when requested
    #[serde(default)]
    pub citations: Vec<Citation>,
    /// Conversation this answer belongs to
    #[serde(default)]
    pub conversation_id: String,
    /// Model that produced the answer
    #[serde(default)]
    pub model_used: String,
    /// Model confidence in the answer, 0.0 to 1.0
    #[serde(default)]
    pub confidence: Option<f64>,
}
