use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{AppError, AuthStatus, RedHatDeployRequest, UserId};
use crate::ports::{AppProvisioner, Authenticator, HerokuAccount};

pub struct FakeHerokuAccount {
    has_credentials: Mutex<bool>,
    status: Mutex<AuthStatus>,
    auth_calls: AtomicUsize,
    logins: Mutex<Vec<(String, String)>>,
}

impl FakeHerokuAccount {
    pub fn new(has_credentials: bool, status: AuthStatus) -> Self {
        Self {
            has_credentials: Mutex::new(has_credentials),
            status: Mutex::new(status),
            auth_calls: AtomicUsize::new(0),
            logins: Mutex::new(Vec::new()),
        }
    }

    pub fn auth_calls(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst)
    }

    pub fn logins(&self) -> Vec<(String, String)> {
        self.logins.lock().unwrap().clone()
    }
}

impl Authenticator for FakeHerokuAccount {
    fn provider_name(&self) -> &str {
        "Heroku"
    }

    fn authenticate(&self) -> Result<AuthStatus, AppError> {
        self.auth_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.status.lock().unwrap().clone())
    }
}

impl HerokuAccount for FakeHerokuAccount {
    fn has_credentials(&self) -> bool {
        *self.has_credentials.lock().unwrap()
    }

    /// Accepts any key equal to "good-key".
    fn login(&self, email: &UserId, api_key: &str) -> Result<AuthStatus, AppError> {
        self.logins.lock().unwrap().push((email.as_str().to_string(), api_key.to_string()));
        if api_key != "good-key" {
            return Ok(AuthStatus::unauthenticated("Invalid credentials provided."));
        }
        *self.has_credentials.lock().unwrap() = true;
        *self.status.lock().unwrap() = AuthStatus::Authenticated;
        Ok(AuthStatus::Authenticated)
    }
}

pub struct FakeProvisioner {
    status: AuthStatus,
    fail_auth: bool,
    fail_create: bool,
    created: Mutex<Vec<RedHatDeployRequest>>,
}

impl FakeProvisioner {
    pub fn new(status: AuthStatus) -> Self {
        Self { status, fail_auth: false, fail_create: false, created: Mutex::new(Vec::new()) }
    }

    pub fn failing_auth(self) -> Self {
        Self { fail_auth: true, ..self }
    }

    pub fn failing_create(self) -> Self {
        Self { fail_create: true, ..self }
    }

    pub fn created(&self) -> Vec<RedHatDeployRequest> {
        self.created.lock().unwrap().clone()
    }
}

impl Authenticator for FakeProvisioner {
    fn provider_name(&self) -> &str {
        "Red Hat"
    }

    fn authenticate(&self) -> Result<AuthStatus, AppError> {
        if self.fail_auth {
            return Err(AppError::CloudError {
                provider: "Red Hat".into(),
                message: "rhc not installed".into(),
            });
        }
        Ok(self.status.clone())
    }
}

impl AppProvisioner for FakeProvisioner {
    fn create_app(&self, request: &RedHatDeployRequest) -> Result<(), AppError> {
        self.created.lock().unwrap().push(request.clone());
        if self.fail_create {
            return Err(AppError::CloudError {
                provider: "Red Hat".into(),
                message: "application already exists".into(),
            });
        }
        Ok(())
    }
}
