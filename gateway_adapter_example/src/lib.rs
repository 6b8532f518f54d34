//! The sample application deployed by the integration-test stack.
//!
//! The handler functions are written in the exact shape the source
//! generator emits: extract the parameters, convert them, call the
//! service method, serialize the result, wrap it in the fixed envelope.

pub mod complex_calculator;
pub mod simple_calculator;
