//! Domain Entities
//!
//! Deployable units resolved against explicit source and destination roots.

mod artifact;
mod unit;

pub use artifact::{ArtifactLayout, ArtifactUnit};
pub use unit::{DeployableUnit, DestinationSlot, SourceLayout};
