//! Authentication checks used to pick wizard pages.

use tracing::{debug, warn};

use crate::domain::AuthStatus;
use crate::ports::{Authenticator, HerokuAccount};

/// `true` only when the provider accepts the stored credentials; check
/// failures count as unauthenticated.
pub fn is_authenticated<A: Authenticator + ?Sized>(provider: &A) -> bool {
    match provider.authenticate() {
        Ok(AuthStatus::Authenticated) => true,
        Ok(AuthStatus::Unauthenticated { reason }) => {
            debug!(provider = provider.provider_name(), %reason, "not authenticated");
            false
        }
        Err(e) => {
            warn!(provider = provider.provider_name(), error = %e, "authentication check failed");
            false
        }
    }
}

/// Heroku additionally requires a credentials file before asking the API.
pub fn heroku_authenticated(account: &dyn HerokuAccount) -> bool {
    account.has_credentials() && is_authenticated(account)
}
