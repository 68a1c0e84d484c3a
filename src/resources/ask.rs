use crate::{
    client::{Client, Envelope},
    config::Config,
    error::BondError,
    types::ask::{AskRequest, AskResponse},
};

/// API resource for the `/ask` endpoint
pub struct Ask<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Ask<'c, C> {
    /// Creates a new Ask resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Asks a health-related question
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn query(&self, req: AskRequest) -> Result<Envelope<AskResponse>, BondError> {
        self.client.post("/ask", req).await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Ask API resource
    #[must_use]
    pub const fn ask(&self) -> Ask<'_, C> {
        Ask::new(self)
    }
}
