//! # Folio Shared
//!
//! Request and response bodies of the Folio HTTP API, shared by the server
//! and any Rust client.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
