//! # Blogsmith Core
//!
//! The domain layer of the Blogsmith backend.
//! This crate contains the post model, the error taxonomy and the ports the
//! infrastructure adapters implement. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod prompts;

pub use error::DomainError;
