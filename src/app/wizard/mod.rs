//! Deploy wizards: page selection and finish handling.

mod heroku;
mod redhat;
mod runner;

pub use heroku::HerokuDeployWizard;
pub use redhat::RedHatDeployWizard;
pub use runner::{Runnable, run_in_background};

use crate::domain::{DeployRequest, RedHatDeployRequest, SignupRequest, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    HerokuLogin,
    HerokuSignup,
    HerokuDeploy,
    RedHatSignup,
    RedHatDeploy,
}

/// Input collected on the page the user finished from.
pub enum FinishedPage {
    HerokuLogin { email: UserId, api_key: String },
    HerokuSignup(SignupRequest),
    HerokuDeploy(DeployRequest),
    RedHatDeploy(RedHatDeployRequest),
}

impl FinishedPage {
    pub fn kind(&self) -> PageKind {
        match self {
            FinishedPage::HerokuLogin { .. } => PageKind::HerokuLogin,
            FinishedPage::HerokuSignup(_) => PageKind::HerokuSignup,
            FinishedPage::HerokuDeploy(_) => PageKind::HerokuDeploy,
            FinishedPage::RedHatDeploy(_) => PageKind::RedHatDeploy,
        }
    }
}

/// Result of finishing a wizard. The wizard closes either way; failures have
/// already been logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishOutcome {
    Completed,
    Failed,
}

pub trait DeployWizard {
    /// Pages to present, in order, given the current authentication state.
    fn add_pages(&self) -> Vec<PageKind>;

    /// Persist the selection and run the finish sequence. Never propagates
    /// errors.
    fn perform_finish(&self, page: FinishedPage) -> FinishOutcome;
}
