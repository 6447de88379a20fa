//! Browser support that hands URLs to the desktop's default browser.
//!
//! External browsers expose no page control, so views opened here have no
//! browser handle and cannot run injected scripts.

use std::collections::HashMap;
use std::process::Command;
use std::sync::{Arc, Mutex};

use tracing::debug;
use url::Url;

use crate::domain::AppError;
use crate::ports::{BrowserHandle, BrowserStyle, BrowserSupport, BrowserView};

#[derive(Debug)]
pub struct SystemBrowserView {
    session_id: String,
    url: Mutex<Url>,
}

impl BrowserView for SystemBrowserView {
    fn session_id(&self) -> &str {
        &self.session_id
    }

    fn url(&self) -> Url {
        match self.url.lock() {
            Ok(url) => url.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn browser_handle(&self) -> Option<&dyn BrowserHandle> {
        None
    }
}

#[derive(Debug)]
pub struct SystemBrowser {
    opener: Vec<String>,
    sessions: Mutex<HashMap<String, Arc<SystemBrowserView>>>,
}

impl SystemBrowser {
    /// Use `$BROWSER` when set, otherwise the platform opener.
    pub fn new() -> Self {
        let opener = match std::env::var("BROWSER") {
            Ok(browser) if !browser.trim().is_empty() => vec![browser],
            _ => platform_opener(),
        };
        Self::with_opener(opener)
    }

    pub fn with_opener(opener: Vec<String>) -> Self {
        Self { opener, sessions: Mutex::new(HashMap::new()) }
    }

    fn launch(&self, url: &Url) -> Result<(), AppError> {
        let (program, args) = self
            .opener
            .split_first()
            .ok_or_else(|| AppError::BrowserError("no browser opener configured".to_string()))?;

        debug!(%program, %url, "launching browser");
        let status = Command::new(program)
            .args(args)
            .arg(url.as_str())
            .status()
            .map_err(|e| AppError::BrowserError(format!("failed to run '{}': {}", program, e)))?;

        if !status.success() {
            return Err(AppError::BrowserError(format!("'{}' exited with {}", program, status)));
        }
        Ok(())
    }
}

impl Default for SystemBrowser {
    fn default() -> Self {
        Self::new()
    }
}

fn platform_opener() -> Vec<String> {
    if cfg!(target_os = "macos") {
        vec!["open".to_string()]
    } else if cfg!(windows) {
        vec!["cmd".to_string(), "/C".to_string(), "start".to_string(), String::new()]
    } else {
        vec!["xdg-open".to_string()]
    }
}

impl BrowserSupport for SystemBrowser {
    fn open(
        &self,
        url: &Url,
        _style: BrowserStyle,
        session_id: &str,
    ) -> Result<Arc<dyn BrowserView>, AppError> {
        self.launch(url)?;

        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| AppError::BrowserError("browser session lock poisoned".to_string()))?;
        let view = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                Arc::new(SystemBrowserView {
                    session_id: session_id.to_string(),
                    url: Mutex::new(url.clone()),
                })
            })
            .clone();
        if let Ok(mut current) = view.url.lock() {
            *current = url.clone();
        }
        Ok(view)
    }
}
