//! # Folio Core
//!
//! The domain layer of the Folio blog backend.
//! This crate contains the post model, the credential gate and the blog
//! service, with storage and token signing reached only through ports.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, StoreError};
pub use services::{BlogService, CredentialGate};
