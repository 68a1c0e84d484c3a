//! Types for the `/supplement/*` endpoints

use serde::{Deserialize, Serialize};

/// Request body for `POST /supplement/recommend`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementRecommendationRequest {
    /// Health goals driving the recommendation (at least one)
    pub health_goals: Vec<String>,
    /// Supplements the user already takes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub current_supplements: Vec<String>,
    /// Dietary restrictions to respect
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary_restrictions: Vec<String>,
    /// User age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// User gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl SupplementRecommendationRequest {
    /// Creates a request for the given health goals
    #[must_use]
    pub fn new<I, S>(health_goals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            health_goals: health_goals.into_iter().map(Into::into).collect(),
            current_supplements: Vec::new(),
            dietary_restrictions: Vec::new(),
            age: None,
            gender: None,
        }
    }

    /// Sets the supplements the user already takes
    #[must_use]
    pub fn with_current_supplements<I, S>(mut self, supplements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.current_supplements = supplements.into_iter().map(Into::into).collect();
        self
    }

    /// Sets dietary restrictions
    #[must_use]
    pub fn with_dietary_restrictions<I, S>(mut self, restrictions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dietary_restrictions = restrictions.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the user's age
    #[must_use]
    pub const fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }
}
