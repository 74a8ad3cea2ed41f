//! Scorekeeper test support utilities
//!
//! Shared helpers for integration tests, currently the logging bootstrap.

pub mod logging;
