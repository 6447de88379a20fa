//! CLI Adapter.

use std::io::ErrorKind;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Error as DialoguerError, Input, Password, Select};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, DeployWizard, FinishOutcome, FinishedPage, PageKind};
use crate::domain::{
    AppConfig, AppError, AppName, DeployRequest, RedHatDeployRequest, SignupRequest, UserId,
};
use crate::ports::PreferenceStore;

#[derive(Parser)]
#[command(name = "deploy-wizard")]
#[command(version)]
#[command(about = "Deploy local projects to Heroku or Red Hat cloud", long_about = None)]
struct Cli {
    /// Read configuration from this file instead of ~/.config/deploy-wizard/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Commit the project and deploy it to Heroku
    #[clap(visible_alias = "h")]
    Heroku {
        /// Project directory (defaults to the current directory)
        #[arg(short, long)]
        project: Option<PathBuf>,
        /// Heroku application name
        #[arg(short, long)]
        app: Option<String>,
        /// Deploy right after creating the app
        #[arg(long, conflicts_with = "no_publish")]
        publish: bool,
        /// Only create the app
        #[arg(long, conflicts_with = "publish")]
        no_publish: bool,
    },
    /// Sign up for a Heroku account
    Signup {
        /// E-mail address for the new account
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Create an application on Red Hat cloud
    #[clap(visible_alias = "rh")]
    Redhat {
        /// Project directory (defaults to the current directory)
        #[arg(short, long)]
        project: Option<PathBuf>,
        /// Application name
        #[arg(short, long)]
        app: Option<String>,
        /// Application type, e.g. php-5.3
        #[arg(short = 't', long = "type")]
        app_type: Option<String>,
        /// Directory the provider clones the application into
        #[arg(short, long)]
        destination: Option<PathBuf>,
    },
    /// Show the stored deploy settings for a project
    Status {
        /// Project directory (defaults to the current directory)
        #[arg(short, long)]
        project: Option<PathBuf>,
    },
    /// List bundles and the commands they provide
    Bundles,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = api::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Heroku { project, app, publish, no_publish } => {
            let publish = match (publish, no_publish) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            run_heroku(config, project, app, publish).map(report)
        }
        Commands::Signup { email } => run_signup(config, email).map(report),
        Commands::Redhat { project, app, app_type, destination } => {
            run_redhat(config, project, app, app_type, destination).map(report)
        }
        Commands::Status { project } => run_status(&config, project).map(|_| 0),
        Commands::Bundles => run_bundles(&config).map(|_| 0),
    });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("deploy_wizard={}", level)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `None` means the user cancelled a prompt.
fn report(outcome: Option<FinishOutcome>) -> i32 {
    match outcome {
        Some(FinishOutcome::Completed) => {
            println!("✅ Done");
            0
        }
        Some(FinishOutcome::Failed) => {
            eprintln!("❌ Finished with errors, see the log above");
            1
        }
        None => {
            println!("Cancelled");
            0
        }
    }
}

fn run_heroku(
    config: AppConfig,
    project: Option<PathBuf>,
    app: Option<String>,
    publish: Option<bool>,
) -> Result<Option<FinishOutcome>, AppError> {
    let project = api::open_project(project.as_deref())?;
    let ctx = api::create_context(config)?;
    let remembered_publish = ctx.preferences().auto_publish()?;
    let remembered_app = ctx.preferences().deploy_endpoint(&project)?;
    let wizard = api::heroku_wizard(ctx, Some(project));

    loop {
        if wizard.add_pages().contains(&PageKind::HerokuDeploy) {
            let app_name = match app {
                Some(value) => value,
                None => match prompt_text("Application name", remembered_app.as_deref())? {
                    Some(value) => value,
                    None => return Ok(None),
                },
            };
            let app_name = AppName::new(&app_name)?;
            let publish = match publish {
                Some(value) => value,
                None => match prompt_confirm("Deploy immediately?", remembered_publish)? {
                    Some(value) => value,
                    None => return Ok(None),
                },
            };
            let page = FinishedPage::HerokuDeploy(DeployRequest::new(app_name, publish));
            return Ok(Some(wizard.perform_finish(page)));
        }

        println!("No valid Heroku credentials found.");
        let choices = ["Log in with an existing account", "Sign up for a new account"];
        match prompt_select("Heroku account", &choices)? {
            Some(0) => {
                let Some(email) = prompt_user_id()? else {
                    return Ok(None);
                };
                let Some(api_key) = prompt_secret("API key")? else {
                    return Ok(None);
                };
                let outcome = wizard.perform_finish(FinishedPage::HerokuLogin { email, api_key });
                if outcome == FinishOutcome::Failed {
                    return Ok(Some(outcome));
                }
            }
            Some(_) => {
                let Some(email) = prompt_user_id()? else {
                    return Ok(None);
                };
                let page = FinishedPage::HerokuSignup(SignupRequest::new(email));
                return Ok(Some(wizard.perform_finish(page)));
            }
            None => return Ok(None),
        }
    }
}

fn run_signup(config: AppConfig, email: Option<String>) -> Result<Option<FinishOutcome>, AppError> {
    let email = match email {
        Some(value) => UserId::new(&value)?,
        None => match prompt_user_id()? {
            Some(value) => value,
            None => return Ok(None),
        },
    };
    let ctx = api::create_context(config)?;
    let wizard = api::heroku_wizard(ctx, None);
    Ok(Some(wizard.perform_finish(FinishedPage::HerokuSignup(SignupRequest::new(email)))))
}

fn run_redhat(
    config: AppConfig,
    project: Option<PathBuf>,
    app: Option<String>,
    app_type: Option<String>,
    destination: Option<PathBuf>,
) -> Result<Option<FinishOutcome>, AppError> {
    let project = api::open_project(project.as_deref())?;
    let ctx = api::create_context(config)?;
    let wizard = api::redhat_wizard(ctx, Some(project.clone()));

    if wizard.add_pages().contains(&PageKind::RedHatSignup) {
        println!("Red Hat credentials were not accepted. Set up an account with the provider CLI first.");
        if prompt_confirm("Continue anyway?", false)? != Some(true) {
            return Ok(None);
        }
    }

    let app_name = match app {
        Some(value) => value,
        None => match prompt_text("Application name", Some(project.name()))? {
            Some(value) => value,
            None => return Ok(None),
        },
    };
    let app_name = AppName::new(&app_name)?;
    let app_type = match app_type {
        Some(value) => value,
        None => match prompt_text("Application type", None)? {
            Some(value) => value,
            None => return Ok(None),
        },
    };
    let destination = destination.unwrap_or_else(|| project.root().join(app_name.as_str()));

    let request = RedHatDeployRequest { app_name, app_type, destination };
    Ok(Some(wizard.perform_finish(FinishedPage::RedHatDeploy(request))))
}

fn run_status(config: &AppConfig, project: Option<PathBuf>) -> Result<(), AppError> {
    let project = api::open_project(project.as_deref())?;
    let status = api::status(config, &project)?;

    println!("Project:       {} ({})", project.name(), project.root().display());
    match status.deploy_type {
        Some(deploy_type) => println!("Deploy type:   {}", deploy_type.display_name()),
        None => println!("Deploy type:   not deployed"),
    }
    if let Some(endpoint) = &status.endpoint {
        println!("Endpoint:      {}", endpoint);
    }
    if let Some(at) = status.last_deployed {
        println!("Last deployed: {}", at.to_rfc3339());
    }
    println!("Auto publish:  {}", if status.auto_publish { "on" } else { "off" });
    Ok(())
}

fn run_bundles(config: &AppConfig) -> Result<(), AppError> {
    let bundles = api::bundles(config)?;
    if bundles.is_empty() {
        println!("No bundles found in {}", config.bundles_dir.display());
        return Ok(());
    }
    for (name, commands) in bundles {
        println!("{}", name);
        for command in commands {
            println!("  • {}", command);
        }
    }
    Ok(())
}

fn prompt_user_id() -> Result<Option<UserId>, AppError> {
    loop {
        let Some(value) = prompt_text("E-mail", None)? else {
            return Ok(None);
        };
        match UserId::new(&value) {
            Ok(user) => return Ok(Some(user)),
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn prompt_text(prompt: &str, default: Option<&str>) -> Result<Option<String>, AppError> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(value) = default {
        input = input.default(value.to_string());
    }
    match input.interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read {}: {}", prompt, err))),
    }
}

fn prompt_secret(prompt: &str) -> Result<Option<String>, AppError> {
    match Password::new().with_prompt(prompt).interact() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read {}: {}", prompt, err))),
    }
}

fn prompt_confirm(prompt: &str, default: bool) -> Result<Option<bool>, AppError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to read answer: {}", err)))
}

fn prompt_select(prompt: &str, items: &[&str]) -> Result<Option<usize>, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to select {}: {}", prompt, err)))
}
