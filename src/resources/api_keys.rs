use serde_json::Value;

use crate::{
    client::{Client, Envelope},
    config::Config,
    error::BondError,
};

/// API resource for API key management
pub struct ApiKeys<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> ApiKeys<'c, C> {
    /// Creates a new ApiKeys resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists all API keys
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(&self) -> Result<Envelope<Value>, BondError> {
        self.client.get("/api-keys").await
    }

    /// Creates a new API key
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(&self, data: Value) -> Result<Envelope<Value>, BondError> {
        self.client.post("/api-keys", data).await
    }

    /// Revokes an API key by id
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn revoke(&self, key_id: &str) -> Result<Envelope<Value>, BondError> {
        self.client.delete(&format!("/api-keys/{key_id}")).await
    }
}

impl<C: Config> Client<C> {
    /// Returns the ApiKeys API resource
    #[must_use]
    pub const fn api_keys(&self) -> ApiKeys<'_, C> {
        ApiKeys::new(self)
    }
}
