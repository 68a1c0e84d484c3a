use crate::{
    client::{Client, Envelope},
    config::Config,
    error::BondError,
    types::labs::{LabInterpretRequest, LabInterpretResponse},
};

/// API resource for the `/labs` endpoints
pub struct Labs<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Labs<'c, C> {
    /// Creates a new Labs resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Interprets laboratory results
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn interpret(
        &self,
        req: LabInterpretRequest,
    ) -> Result<Envelope<LabInterpretResponse>, BondError> {
        self.client.post("/labs/interpret", req).await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Labs API resource
    #[must_use]
    pub const fn labs(&self) -> Labs<'_, C> {
        Labs::new(self)
    }
}
