//! Async client for the Quake game-log REST API.
//!
//! Wraps `reqwest` with one method per backend endpoint and folds every
//! non-2xx response into a single [`Error`] whose message prefers the
//! server-supplied `error` field.

pub mod client;
pub mod error;
pub mod upload;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use client::Client;
pub use error::Error;
pub use upload::LogFile;
