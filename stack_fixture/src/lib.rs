//! Fixture for integration tests that run against a deployed stack.
//!
//! The fixture shells out to an external deployment script, then uses the
//! AWS SDKs to look at what the deployment produced. There is no retry or
//! recovery logic here: SDK failures propagate verbatim and surface as
//! test failures.

pub mod config;
pub mod fixture;
pub mod functions;
pub mod process;
pub mod stacks;
pub mod storage;

/// The fixture's error type; failures from external calls propagate as-is.
pub type Error = Box<dyn std::error::Error + Send + Sync>;
