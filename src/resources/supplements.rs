use serde_json::Value;

use crate::{
    client::{Client, Envelope},
    config::Config,
    error::BondError,
    types::supplements::SupplementRecommendationRequest,
};

/// API resource for the `/supplement` endpoints
pub struct Supplements<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Supplements<'c, C> {
    /// Creates a new Supplements resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Gets supplement recommendations for the given health goals
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn recommend(
        &self,
        req: SupplementRecommendationRequest,
    ) -> Result<Envelope<Value>, BondError> {
        self.client.post("/supplement/recommend", req).await
    }

    /// Checks for supplement-drug interactions
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn check_interactions(&self, data: Value) -> Result<Envelope<Value>, BondError> {
        self.client.post("/supplement/interactions", data).await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Supplements API resource
    #[must_use]
    pub const fn supplements(&self) -> Supplements<'_, C> {
        Supplements::new(self)
    }
}
