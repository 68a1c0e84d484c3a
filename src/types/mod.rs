//! Request and response types for the BondMCP API

/// AI question-answering types
pub mod ask;
/// Shared enums and value types
pub mod common;
/// Health-check types
pub mod health;
/// Lab interpretation types
pub mod labs;
/// Supplement recommendation types
pub mod supplements;
