use chrono::Utc;
use tracing::{error, info, warn};

use super::runner::{Runnable, run_logged};
use super::{DeployWizard, FinishOutcome, FinishedPage, PageKind};
use crate::app::commands::auth::heroku_authenticated;
use crate::app::context::AppContext;
use crate::domain::{AppError, AuthStatus, DeployRequest, DeployType, Project, UserId};

pub struct HerokuDeployWizard {
    ctx: AppContext,
    project: Option<Project>,
}

impl HerokuDeployWizard {
    pub fn new(ctx: AppContext, project: Option<Project>) -> Self {
        Self { ctx, project }
    }

    /// Each write is attempted even when an earlier one fails.
    fn remember_target(&self, project: &Project, request: &DeployRequest) {
        let prefs = self.ctx.preferences();
        let writes: [(&str, Result<(), AppError>); 4] = [
            ("deploy type", prefs.set_deploy_type(project, DeployType::Heroku)),
            ("endpoint", prefs.set_deploy_endpoint(project, request.app_name.as_str())),
            ("last deployed", prefs.set_last_deployed(project, Utc::now())),
            ("auto publish", prefs.set_auto_publish(request.publish_immediately)),
        ];
        for (setting, result) in writes {
            if let Err(e) = result {
                warn!(error = %e, project = %project.name(), setting, "failed to save deploy preference");
            }
        }
    }

    fn login(&self, email: &UserId, api_key: &str) -> FinishOutcome {
        match self.ctx.heroku().login(email, api_key) {
            Ok(AuthStatus::Authenticated) => {
                info!(email = %email, "Heroku credentials saved");
                FinishOutcome::Completed
            }
            Ok(AuthStatus::Unauthenticated { reason }) => {
                error!(email = %email, %reason, "Heroku rejected the credentials");
                FinishOutcome::Failed
            }
            Err(e) => {
                error!(error = %e, "Heroku login failed");
                FinishOutcome::Failed
            }
        }
    }
}

impl DeployWizard for HerokuDeployWizard {
    fn add_pages(&self) -> Vec<PageKind> {
        if heroku_authenticated(self.ctx.heroku()) {
            vec![PageKind::HerokuDeploy]
        } else {
            vec![PageKind::HerokuLogin, PageKind::HerokuSignup]
        }
    }

    fn perform_finish(&self, page: FinishedPage) -> FinishOutcome {
        let runnable = match page {
            FinishedPage::HerokuDeploy(request) => {
                let Some(project) = self.project.clone() else {
                    error!("no project selected, nothing to deploy");
                    return FinishOutcome::Failed;
                };
                self.remember_target(&project, &request);
                Runnable::HerokuDeploy { project, request }
            }
            FinishedPage::HerokuSignup(request) => Runnable::HerokuSignup(request),
            FinishedPage::HerokuLogin { email, api_key } => return self.login(&email, &api_key),
            other => {
                error!(page = ?other.kind(), "page does not belong to the Heroku wizard");
                return FinishOutcome::Failed;
            }
        };
        run_logged(&self.ctx, runnable)
    }
}
