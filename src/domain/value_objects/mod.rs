//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod unit_kind;
mod unit_name;

pub use unit_kind::UnitKind;
pub use unit_name::{NameError, UnitName};
