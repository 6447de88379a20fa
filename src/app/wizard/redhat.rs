use chrono::Utc;
use tracing::{error, warn};

use super::runner::{Runnable, run_logged};
use super::{DeployWizard, FinishOutcome, FinishedPage, PageKind};
use crate::app::commands::auth::is_authenticated;
use crate::app::context::AppContext;
use crate::domain::{AppError, DeployType, Project};

pub struct RedHatDeployWizard {
    ctx: AppContext,
    project: Option<Project>,
}

impl RedHatDeployWizard {
    pub fn new(ctx: AppContext, project: Option<Project>) -> Self {
        Self { ctx, project }
    }

    fn remember_target(&self, project: &Project) -> Result<(), AppError> {
        let prefs = self.ctx.preferences();
        prefs.set_deploy_type(project, DeployType::RedHat)?;
        prefs.set_last_deployed(project, Utc::now())
    }
}

impl DeployWizard for RedHatDeployWizard {
    fn add_pages(&self) -> Vec<PageKind> {
        if is_authenticated(self.ctx.redhat().as_ref()) {
            vec![PageKind::RedHatDeploy]
        } else {
            vec![PageKind::RedHatSignup, PageKind::RedHatDeploy]
        }
    }

    fn perform_finish(&self, page: FinishedPage) -> FinishOutcome {
        let kind = page.kind();
        let FinishedPage::RedHatDeploy(request) = page else {
            error!(page = ?kind, "page does not belong to the Red Hat wizard");
            return FinishOutcome::Failed;
        };
        match &self.project {
            Some(project) => {
                if let Err(e) = self.remember_target(project) {
                    warn!(error = %e, project = %project.name(), "failed to save deploy preferences");
                }
            }
            None => warn!("no project selected, deploy type not recorded"),
        }
        run_logged(&self.ctx, Runnable::RedHatDeploy(request))
    }
}
