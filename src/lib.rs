pub mod config;
pub mod error;
pub mod permissions;
pub mod provider;
pub mod shell;
pub mod storage;
pub mod utils;

pub use config::ProviderConfig;
pub use permissions::{PermissionFlags, Uri};
pub use provider::{FileSystemInterface, FileSystemProvider};
