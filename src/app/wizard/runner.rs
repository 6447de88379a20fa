use std::thread;

use tracing::error;

use super::FinishOutcome;
use crate::app::commands::invoke_remote::invoke_remote;
use crate::app::commands::prepare_repository::prepare_repository;
use crate::app::commands::signup::run_signup;
use crate::app::context::AppContext;
use crate::app::dispatch::sync_call;
use crate::app::progress::WeightedProgress;
use crate::domain::progress::{CREATE_APP, INVOKE_REMOTE};
use crate::domain::{AppError, DeployRequest, Project, RedHatDeployRequest, SignupRequest};

/// Work built on finish and consumed once by a background worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Runnable {
    HerokuDeploy { project: Project, request: DeployRequest },
    HerokuSignup(SignupRequest),
    RedHatDeploy(RedHatDeployRequest),
}

impl Runnable {
    fn task_name(&self) -> String {
        match self {
            Runnable::HerokuDeploy { request, .. } => format!("Deploying {} to Heroku", request.app_name),
            Runnable::HerokuSignup(_) => "Signing up for Heroku".to_string(),
            Runnable::RedHatDeploy(request) => format!("Creating {} on Red Hat", request.app_name),
        }
    }

    pub fn run(self, ctx: &AppContext) -> Result<(), AppError> {
        let task = self.task_name();
        let mut progress = WeightedProgress::begin(ctx.progress(), &task);

        match self {
            Runnable::HerokuDeploy { project, request } => {
                prepare_repository(
                    ctx.git(),
                    &project,
                    &ctx.config().git.commit_message,
                    &mut progress,
                )?;
                // The repository may belong to an enclosing directory.
                let workdir = project.root().to_path_buf();
                let registry = ctx.registry();
                let executor = ctx.executor();
                let heroku = ctx.config().heroku.clone();

                progress.phase(INVOKE_REMOTE, || {
                    sync_call(ctx.ui(), move || {
                        invoke_remote(
                            registry.as_ref(),
                            executor.as_ref(),
                            &heroku,
                            &request,
                            Some(workdir.as_path()),
                        )
                    })
                    .and_then(|outcome| outcome)
                })?;
                Ok(())
            }
            Runnable::HerokuSignup(request) => run_signup(ctx, &request, &mut progress),
            Runnable::RedHatDeploy(request) => {
                let provisioner = ctx.redhat();
                progress.phase(CREATE_APP, || {
                    sync_call(ctx.ui(), move || provisioner.create_app(&request))
                        .and_then(|outcome| outcome)
                })
            }
        }
    }
}

/// Run on a worker thread and block until it finishes. Not cancelable.
pub fn run_in_background(ctx: &AppContext, runnable: Runnable) -> Result<(), AppError> {
    let worker_ctx = ctx.clone();
    let handle =
        thread::Builder::new().name("deploy-worker".to_string()).spawn(move || runnable.run(&worker_ctx))?;
    handle.join().map_err(|_| AppError::DispatchError("deploy worker panicked".to_string()))?
}

pub(super) fn run_logged(ctx: &AppContext, runnable: Runnable) -> FinishOutcome {
    match run_in_background(ctx, runnable) {
        Ok(()) => FinishOutcome::Completed,
        Err(e) => {
            error!(error = %e, "deploy wizard task failed");
            FinishOutcome::Failed
        }
    }
}
