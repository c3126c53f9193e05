//! Error handling
//!
//! Defines error types and handling for the provider and its query shell.

pub mod handlers;
pub mod types;

pub use types::*;
