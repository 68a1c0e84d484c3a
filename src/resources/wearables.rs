use serde_json::Value;

use crate::{
    client::{Client, Envelope},
    config::Config,
    error::BondError,
};

/// API resource for wearable data analysis
pub struct Wearables<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Wearables<'c, C> {
    /// Creates a new Wearables resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Analyzes wearable device data
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn analyze(&self, data: Value) -> Result<Envelope<Value>, BondError> {
        self.client.post("/v1/wearable-data-insights", data).await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Wearables API resource
    #[must_use]
    pub const fn wearables(&self) -> Wearables<'_, C> {
        Wearables::new(self)
    }
}
