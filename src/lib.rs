//! This crate implements a validation service for workflow specifications.
//! It includes modules for the specification document model, YAML loading,
//! queue validation, the JSON-RPC API, and configuration.

pub mod types; // Defines the specification document model and validation errors.
pub mod api; // Handles the JSON-RPC API for submitting specifications.
pub mod validation; // Contains the Kubernetes queue validation logic.
pub mod spec; // Loads specification documents from YAML files.
pub mod config; // Defines and loads service configuration.

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use config::Config;
pub use validation::Validator;
