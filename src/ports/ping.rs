use url::Url;

use crate::domain::AppError;

/// Raw result of a tracking ping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingResponse {
    pub status: u16,
    pub body: String,
}

/// Port for the signup tracking request.
pub trait PingClient: Send + Sync {
    /// Issue an uncached GET. Transport failures are errors; any HTTP status is
    /// returned as a response.
    fn get(&self, url: &Url) -> Result<PingResponse, AppError>;
}
