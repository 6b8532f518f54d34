//! Typed adapters between API Gateway events and plain Rust handler methods.
//!
//! The gateway event shapes are defined by the provider and consumed through
//! `aws_lambda_events`; this crate only supplies the glue that a generated
//! handler needs: parameter extraction, response envelopes, and a
//! `tower::Service` wrapper that `lambda_runtime::run` accepts.

pub mod events;
pub mod execution_env;
pub mod handler;
