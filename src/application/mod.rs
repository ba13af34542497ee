//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `SourceDeployUseCase` - Copies source files and folders into the destination
//! - `ArtifactDeployUseCase` - Copies compiled plugin binaries
//! - `OrchestratorUseCase` - Runs the external build orchestrator
//! - `ConfigPatchUseCase` - Rewrites the build path placeholder in an IDE config
//! - `StatusUseCase` - Compares sources with what is deployed

pub mod artifacts;
pub mod deploy;
pub mod orchestrate;
pub mod patch;
pub mod status;

pub use artifacts::{ArtifactDeployUseCase, NOT_BUILT};
pub use deploy::{DeployOptions, DeployReport, SourceDeployUseCase, UnitFailure};
pub use orchestrate::OrchestratorUseCase;
pub use patch::{forward_slashes, patch_placeholder, ConfigPatchUseCase, PatchOutcome};
pub use status::{StatusUseCase, UnitState, UnitStatus};
