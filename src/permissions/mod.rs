//! Permission model
//!
//! Permission flags, URI parsing and URI classification.

pub mod classify;
pub mod flags;
pub mod uri;

pub use classify::{ExternalPolicy, classify};
pub use flags::PermissionFlags;
pub use uri::Uri;
