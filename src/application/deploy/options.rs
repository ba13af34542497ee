//! Deploy Options

/// Options for a deploy run
#[derive(Debug, Clone, Default)]
pub struct DeployOptions {
    /// Explicit unit names; empty means every discoverable unit
    pub names: Vec<String>,
    /// Report what would be copied without touching the destination
    pub dry_run: bool,
    /// Stop at the first failing unit
    pub fail_fast: bool,
}

impl DeployOptions {
    /// Deploy every discoverable unit
    pub fn all() -> Self {
        Self::default()
    }

    /// Deploy exactly the named units
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn is_bulk(&self) -> bool {
        self.names.is_empty()
    }

    /// Explicit runs always stop at the first failure
    pub fn stops_on_failure(&self) -> bool {
        self.fail_fast || !self.is_bulk()
    }
}
