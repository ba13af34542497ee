//! File System Implementations
//!
//! Concrete implementations of the FileSystem port.

mod home;
mod local;

pub use home::{user_config_dir, PLUGDEPLOY_HOME_VAR};
pub use local::LocalFs;
