//! API Module
//!
//! This module handles the JSON-RPC API for validating workflow
//! specifications. It provides the HTTP endpoint that clients use to
//! submit specification documents for validation.

mod server;
pub use server::Server;
