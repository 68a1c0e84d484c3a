use serde_json::Value;

use crate::{
    client::{Client, Envelope},
    config::Config,
    error::BondError,
};

/// API resource for medical records
pub struct MedicalRecords<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> MedicalRecords<'c, C> {
    /// Creates a new MedicalRecords resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Uploads medical record data
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn upload(&self, data: Value) -> Result<Envelope<Value>, BondError> {
        self.client.post("/medical-records/upload", data).await
    }
}

impl<C: Config> Client<C> {
    /// Returns the MedicalRecords API resource
    #[must_use]
    pub const fn medical_records(&self) -> MedicalRecords<'_, C> {
        MedicalRecords::new(self)
    }
}
