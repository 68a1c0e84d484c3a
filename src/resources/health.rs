use crate::{
    client::{Client, Envelope},
    config::Config,
    error::BondError,
    types::health::HealthCheckResponse,
};

/// API resource for the `/health` endpoint
pub struct Health<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Health<'c, C> {
    /// Creates a new Health resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Performs a service health check
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn check(&self) -> Result<Envelope<HealthCheckResponse>, BondError> {
        self.client.get("/health").await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Health API resource
    #[must_use]
    pub const fn health(&self) -> Health<'_, C> {
        Health::new(self)
    }
}
