//! Weighted progress phases reported while a finish sequence runs.

/// A named slice of the total work units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub label: &'static str,
    pub units: u64,
}

impl Phase {
    pub const fn new(label: &'static str, units: u64) -> Self {
        Self { label, units }
    }
}

/// Total work units for every finish sequence.
pub const TOTAL_UNITS: u64 = 100;

pub const ATTACH_REPOSITORY: Phase = Phase::new("Attaching git repository", 20);
pub const REFRESH_INDEX: Phase = Phase::new("Refreshing git index", 15);
pub const COMMIT_CHANGES: Phase = Phase::new("Committing changes", 10);
pub const INVOKE_REMOTE: Phase = Phase::new("Running deploy command", 55);

pub const SEND_PING: Phase = Phase::new("Contacting signup service", 40);
pub const OPEN_SIGNUP: Phase = Phase::new("Opening signup page", 60);

pub const CREATE_APP: Phase = Phase::new("Creating application", TOTAL_UNITS);
