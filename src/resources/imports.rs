use serde_json::Value;

use crate::{
    client::{Client, Envelope},
    config::Config,
    error::BondError,
};

/// API resource for data imports
pub struct Imports<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Imports<'c, C> {
    /// Creates a new Imports resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Imports data from an Oura ring
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn oura(&self, data: Value) -> Result<Envelope<Value>, BondError> {
        self.client.post("/import/oura", data).await
    }

    /// Imports Apple Health data
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn apple_health(&self, data: Value) -> Result<Envelope<Value>, BondError> {
        self.client.post("/import/apple-health", data).await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Imports API resource
    #[must_use]
    pub const fn imports(&self) -> Imports<'_, C> {
        Imports::new(self)
    }
}
