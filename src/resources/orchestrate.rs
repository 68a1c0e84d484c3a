use serde_json::Value;

use crate::{
    client::{Client, Envelope},
    config::Config,
    error::BondError,
};

/// API resource for workflow orchestration
pub struct Orchestrate<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Orchestrate<'c, C> {
    /// Creates a new Orchestrate resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Runs a predefined workflow
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn run_workflow(&self, data: Value) -> Result<Envelope<Value>, BondError> {
        self.client.post("/orchestrate/run", data).await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Orchestrate API resource
    #[must_use]
    pub const fn orchestrate(&self) -> Orchestrate<'_, C> {
        Orchestrate::new(self)
    }
}
