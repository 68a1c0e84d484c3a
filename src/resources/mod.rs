//! API resource implementations for the BondMCP client
//!
//! Each resource is a thin facade that builds a descriptor (method, path,
//! body) and forwards it to the client's generic typed-call helpers; all
//! retry, rate-limit, and error policy lives in one place.

/// API key management resource
pub mod api_keys;
/// AI question-answering resource
pub mod ask;
/// Conversation resource
pub mod chat;
/// Service health resource
pub mod health;
/// Data import resource
pub mod imports;
/// Health insights resource
pub mod insights;
/// Lab interpretation resource
pub mod labs;
/// Medical records resource
pub mod medical_records;
/// Workflow orchestration resource
pub mod orchestrate;
/// Billing and usage resource
pub mod payments;
/// Supplement recommendation resource
pub mod supplements;
/// AI tools resource
pub mod tools;
/// Wearable data analysis resource
pub mod wearables;

pub use api_keys::ApiKeys;
pub use ask::Ask;
pub use chat::Chat;
pub use health::Health;
pub use imports::Imports;
pub use insights::Insights;
pub use labs::Labs;
pub use medical_records::MedicalRecords;
pub use orchestrate::Orchestrate;
pub use payments::Payments;
pub use supplements::Supplements;
pub use tools::Tools;
pub use wearables::Wearables;
