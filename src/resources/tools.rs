use serde_json::Value;

use crate::{
    client::{Client, Envelope},
    config::Config,
    error::BondError,
};

/// API resource for AI tools
pub struct Tools<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Tools<'c, C> {
    /// Creates a new Tools resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Lists available AI tools
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list_available(&self) -> Result<Envelope<Value>, BondError> {
        self.client.get("/tools/available").await
    }

    /// Executes a specific AI tool
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn execute(&self, data: Value) -> Result<Envelope<Value>, BondError> {
        self.client.post("/tools/execute", data).await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Tools API resource
    #[must_use]
    pub const fn tools(&self) -> Tools<'_, C> {
        Tools::new(self)
    }
}
