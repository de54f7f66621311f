//! # Social Core
//!
//! The domain layer of the posts service.
//! This crate contains the `Post` entity, its lifecycle rules and the storage
//! ports, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
