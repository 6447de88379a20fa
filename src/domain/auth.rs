/// Outcome of a provider authentication check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated,
    Unauthenticated { reason: String },
}

impl AuthStatus {
    pub fn unauthenticated(reason: impl Into<String>) -> Self {
        AuthStatus::Unauthenticated { reason: reason.into() }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, AuthStatus::Authenticated)
    }
}
