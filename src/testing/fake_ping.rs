use std::sync::Mutex;

use url::Url;

use crate::domain::AppError;
use crate::ports::{PingClient, PingResponse};

pub struct FakePing {
    response: Mutex<Result<PingResponse, String>>,
    requests: Mutex<Vec<Url>>,
}

impl FakePing {
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            response: Mutex::new(Ok(PingResponse { status, body: body.to_string() })),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self { response: Mutex::new(Err("connection refused".into())), requests: Mutex::new(Vec::new()) }
    }

    /// `Err` holds the transport failure message.
    pub fn set_response(&self, response: Result<PingResponse, String>) {
        *self.response.lock().unwrap() = response;
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }
}

impl PingClient for FakePing {
    fn get(&self, url: &Url) -> Result<PingResponse, AppError> {
        self.requests.lock().unwrap().push(url.clone());
        self.response
            .lock()
            .unwrap()
            .clone()
            .map_err(|message| AppError::HttpError { message, status: None })
    }
}
