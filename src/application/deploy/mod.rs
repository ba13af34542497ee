//! Deploy Module
//!
//! Copies source units (single files or folders) into the destination root.
//!
//! ## Structure
//!
//! - `options` - What to deploy and how (`DeployOptions`)
//! - `result` - Per-run report (`DeployReport`)
//! - `use_case` - Core use case logic (`SourceDeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use plugdeploy::application::deploy::{DeployOptions, SourceDeployUseCase};
//!
//! let use_case = SourceDeployUseCase::new(LocalFs::new(), layout);
//! let report = use_case.execute(&DeployOptions::all(), &NoopEventSink)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::{DeployReport, UnitFailure};
pub use use_case::SourceDeployUseCase;
