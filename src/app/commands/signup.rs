//! Heroku signup: tracking ping, then the signup page with the returned
//! script injected after the first page load.

use tracing::{debug, error, warn};
use url::Url;
use uuid::Uuid;

use crate::app::commands::application_id::application_id;
use crate::app::context::AppContext;
use crate::app::progress::WeightedProgress;
use crate::domain::progress::{OPEN_SIGNUP, SEND_PING};
use crate::domain::{AppError, SignupConfig, SignupRequest, UserId};
use crate::ports::{
    BrowserHandle, BrowserStyle, BrowserSupport, ListenerControl, PingClient, ProgressEvent,
    ScriptHost,
};

pub const PING_TYPE: &str = "signuphook";

/// `<host>/webhook/heroku?request_id=..&email=..&type=signuphook`
pub fn ping_url(host: &Url, request_id: &str, user: &UserId) -> Result<Url, AppError> {
    let mut url = host.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::config_error(format!("Ping host cannot be a base URL: {}", host)))?
        .pop_if_empty()
        .extend(["webhook", "heroku"]);
    url.query_pairs_mut()
        .clear()
        .append_pair("request_id", request_id)
        .append_pair("email", user.as_str())
        .append_pair("type", PING_TYPE);
    Ok(url)
}

/// Body of a 200 response, otherwise an empty script after one error event.
pub fn fetch_signup_script(ping: &dyn PingClient, url: &Url) -> String {
    match ping.get(url) {
        Ok(response) if response.status == 200 => response.body,
        Ok(response) => {
            error!(%url, status = response.status, "failed to fetch Heroku signup script");
            String::new()
        }
        Err(e) => {
            error!(%url, error = %e, "failed to fetch Heroku signup script");
            String::new()
        }
    }
}

/// Register `action` to run on the first completed load only.
pub fn on_first_load_complete<F>(handle: &dyn BrowserHandle, action: F)
where
    F: FnOnce(&dyn ScriptHost) + Send + 'static,
{
    let mut action = Some(action);
    handle.add_progress_listener(Box::new(move |event, host| match event {
        ProgressEvent::Completed => {
            if let Some(action) = action.take() {
                action(host);
            }
            ListenerControl::Remove
        }
        ProgressEvent::Changed { .. } => ListenerControl::Keep,
    }));
}

/// Open the signup page in the shared signup session and arrange for
/// `script` to run once it has loaded. Must run on the UI thread.
pub fn open_signup(
    browser: &dyn BrowserSupport,
    signup: &SignupConfig,
    script: String,
) -> Result<(), AppError> {
    let view = browser.open(&signup.signup_url, BrowserStyle::FULL_CHROME, &signup.browser_id)?;

    let Some(handle) = view.browser_handle() else {
        warn!(session = view.session_id(), "browser view has no page control, skipping script injection");
        return Ok(());
    };

    on_first_load_complete(handle, move |host| {
        if host.execute(&script) {
            debug!("signup script injected");
        } else {
            warn!("signup page rejected the injected script");
        }
    });
    Ok(())
}

/// Ping off the UI thread, then queue the browser phase on it without waiting.
pub fn run_signup(
    ctx: &AppContext,
    request: &SignupRequest,
    progress: &mut WeightedProgress<'_>,
) -> Result<(), AppError> {
    let request_id = application_id(ctx.preferences()).unwrap_or_else(|e| {
        warn!(error = %e, "application id unavailable, pinging with a temporary one");
        Uuid::new_v4().to_string()
    });
    let url = ping_url(&ctx.config().signup.ping_host, &request_id, &request.user_id)?;
    let script = progress.phase(SEND_PING, || Ok(fetch_signup_script(ctx.ping(), &url)))?;

    progress.phase(OPEN_SIGNUP, || {
        let browser = ctx.browser();
        let signup = ctx.config().signup.clone();
        ctx.ui().async_exec(Box::new(move || {
            if let Err(e) = open_signup(browser.as_ref(), &signup, script) {
                error!(error = %e, "failed to open Heroku signup page");
            }
        }))
    })
}
