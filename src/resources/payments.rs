use serde_json::Value;

use crate::{
    client::{Client, Envelope},
    config::Config,
    error::BondError,
};

/// API resource for billing and usage
pub struct Payments<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Payments<'c, C> {
    /// Creates a new Payments resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Gets usage and billing information
    ///
    /// `params` are appended as query parameters (e.g. a date range).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn usage(&self, params: &[(&str, &str)]) -> Result<Envelope<Value>, BondError> {
        self.client.get_with_query("/payments/usage", params).await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Payments API resource
    #[must_use]
    pub const fn payments(&self) -> Payments<'_, C> {
        Payments::new(self)
    }
}
