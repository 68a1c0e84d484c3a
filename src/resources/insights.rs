use serde_json::Value;

use crate::{
    client::{Client, Envelope},
    config::Config,
    error::BondError,
};

/// API resource for health insights
pub struct Insights<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Insights<'c, C> {
    /// Creates a new Insights resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Generates health insights from the given data
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn generate(&self, data: Value) -> Result<Envelope<Value>, BondError> {
        self.client.post("/insights/generate", data).await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Insights API resource
    #[must_use]
    pub const fn insights(&self) -> Insights<'_, C> {
        Insights::new(self)
    }
}
