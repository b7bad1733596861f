//! Specification Validation Module
//!
//! This module validates workflow specifications before they are accepted.
//! Checks each step's Kubernetes queue annotation against the Kueue feature
//! flag and the list of supported queues, failing on the first invalid step.

mod validator;

#[cfg(test)]
mod tests;

pub use validator::Validator;
