//! Specification Loading Module
//!
//! This module reads workflow specification documents from YAML files
//! and deserializes them into the typed document model.

mod loader;

#[cfg(test)]
mod tests;

pub use loader::{SpecError, load_spec, parse_spec};
