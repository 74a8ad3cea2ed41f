//! Error types shared across the domain, storage, and application layers.

pub mod domain;
pub mod error_code;
pub mod store;

pub use error_code::ErrorCode;
