//! Post storage: MongoDB, in-memory and demo repositories.

mod connections;
mod demo;
mod memory;

#[cfg(feature = "mongodb")]
mod document;
#[cfg(feature = "mongodb")]
mod mongo_repo;

pub use connections::{MongoConfig, redact_uri};
pub use demo::DemoPostRepository;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "mongodb")]
pub use document::PostDocument;
#[cfg(feature = "mongodb")]
pub use mongo_repo::MongoPostRepository;
