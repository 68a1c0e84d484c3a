use serde_json::Value;

use crate::{
    client::{Client, Envelope},
    config::Config,
    error::BondError,
};

/// API resource for conversations
pub struct Chat<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Chat<'c, C> {
    /// Creates a new Chat resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Creates a new conversation
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create_conversation(&self, data: Value) -> Result<Envelope<Value>, BondError> {
        self.client.post("/chat/conversations", data).await
    }

    /// Sends a message in an existing conversation
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn send_message(
        &self,
        conversation_id: &str,
        data: Value,
    ) -> Result<Envelope<Value>, BondError> {
        self.client
            .post(
                &format!("/chat/conversations/{conversation_id}/messages"),
                data,
            )
            .await
    }

    /// Gets conversation history
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn get_conversation(
        &self,
        conversation_id: &str,
    ) -> Result<Envelope<Value>, BondError> {
        self.client
            .get(&format!("/chat/conversations/{conversation_id}"))
            .await
    }
}

impl<C: Config> Client<C> {
    /// Returns the Chat API resource
    #[must_use]
    pub const fn chat(&self) -> Chat<'_, C> {
        Chat::new(self)
    }
}
