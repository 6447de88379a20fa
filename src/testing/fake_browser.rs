use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use url::Url;

use crate::domain::AppError;
use crate::ports::{
    BrowserHandle, BrowserStyle, BrowserSupport, BrowserView, ListenerControl, LoadListener,
    ProgressEvent, ScriptHost,
};

#[derive(Default)]
pub struct FakeBrowserHandle {
    listeners: Mutex<Vec<LoadListener>>,
    executed: Mutex<Vec<String>>,
}

impl FakeBrowserHandle {
    /// Deliver a load event the way a browser widget would.
    pub fn fire(&self, event: ProgressEvent) {
        let listeners = std::mem::take(&mut *self.listeners.lock().unwrap());
        let mut kept = Vec::new();
        for mut listener in listeners {
            if listener(&event, self) == ListenerControl::Keep {
                kept.push(listener);
            }
        }
        let mut current = self.listeners.lock().unwrap();
        kept.append(&mut current);
        *current = kept;
    }

    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }
}

impl ScriptHost for FakeBrowserHandle {
    fn execute(&self, script: &str) -> bool {
        self.executed.lock().unwrap().push(script.to_string());
        true
    }
}

impl BrowserHandle for FakeBrowserHandle {
    fn add_progress_listener(&self, listener: LoadListener) {
        self.listeners.lock().unwrap().push(listener);
    }
}

pub struct FakeView {
    session_id: String,
    url: Mutex<Url>,
    handle: Option<Arc<FakeBrowserHandle>>,
}

impl BrowserView for FakeView {
    fn session_id(&self) -> &str {
        &self.session_id
    }

    fn url(&self) -> Url {
        self.url.lock().unwrap().clone()
    }

    fn browser_handle(&self) -> Option<&dyn BrowserHandle> {
        self.handle.as_deref().map(|h| h as &dyn BrowserHandle)
    }
}

/// Browser that keeps one view per session and records every open call.
pub struct FakeBrowser {
    with_handle: bool,
    views: Mutex<HashMap<String, Arc<FakeView>>>,
    opened: Mutex<Vec<(Url, BrowserStyle, String)>>,
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self { with_handle: true, views: Mutex::new(HashMap::new()), opened: Mutex::new(Vec::new()) }
    }

    pub fn without_handle() -> Self {
        Self { with_handle: false, ..Self::new() }
    }

    pub fn opened(&self) -> Vec<(Url, BrowserStyle, String)> {
        self.opened.lock().unwrap().clone()
    }

    pub fn view(&self, session_id: &str) -> Option<Arc<FakeView>> {
        self.views.lock().unwrap().get(session_id).cloned()
    }

    pub fn handle(&self, session_id: &str) -> Option<Arc<FakeBrowserHandle>> {
        self.view(session_id).and_then(|v| v.handle.clone())
    }
}

impl BrowserSupport for FakeBrowser {
    fn open(
        &self,
        url: &Url,
        style: BrowserStyle,
        session_id: &str,
    ) -> Result<Arc<dyn BrowserView>, AppError> {
        self.opened.lock().unwrap().push((url.clone(), style, session_id.to_string()));
        let mut views = self.views.lock().unwrap();
        let view = views
            .entry(session_id.to_string())
            .or_insert_with(|| {
                Arc::new(FakeView {
                    session_id: session_id.to_string(),
                    url: Mutex::new(url.clone()),
                    handle: self.with_handle.then(|| Arc::new(FakeBrowserHandle::default())),
                })
            })
            .clone();
        *view.url.lock().unwrap() = url.clone();
        Ok(view)
    }
}
