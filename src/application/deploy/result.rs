//! Deploy Report

use std::path::PathBuf;

/// A unit that could not be deployed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFailure {
    pub name: String,
    pub error: String,
}

/// Result of a deploy run
#[derive(Debug, Clone, Default)]
pub struct DeployReport {
    /// Destination paths written (or planned, in a dry run)
    pub deployed: Vec<PathBuf>,
    /// Units skipped without failing, with the reason
    pub skipped: Vec<(String, String)>,
    /// Units that failed
    pub failed: Vec<UnitFailure>,
    /// Source entries hidden by a folder of the same unit name
    pub shadowed: Vec<PathBuf>,
    /// Total units considered
    pub unit_count: usize,
    pub dry_run: bool,
    /// Fail-fast cut the run short
    pub stopped_early: bool,
}

impl DeployReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Process exit code for this report
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
