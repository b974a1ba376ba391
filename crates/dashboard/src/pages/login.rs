use std::sync::Arc;

use crate::api::ApiError;
use crate::services::AuthService;
use crate::session::{Route, Session};

#[derive(Debug)]
pub struct LoginPage {
    auth: AuthService,
    session: Arc<Session>,
    pub email: String,
    pub password: String,
    error: Option<String>,
    submitting: bool,
}

impl LoginPage {
    pub fn new(auth: AuthService, session: Arc<Session>) -> Self {
        Self {
            auth,
            session,
            email: String::new(),
            password: String::new(),
            error: None,
            submitting: false,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Log in and go to the dashboard. Returns whether it succeeded.
    pub async fn submit(&mut self) -> bool {
        let email = self.email.trim().to_string();
        if email.is_empty() || self.password.is_empty() {
            self.error = Some("Email and password are required".to_string());
            return false;
        }

        self.submitting = true;
        self.error = None;
        let result = self.auth.login(&email, &self.password).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                self.password.clear();
                self.session.guard(Route::Dashboard);
                true
            }
            Err(e) => {
                tracing::warn!(%email, error = %e, "login failed");
                self.error = Some(login_error_message(&e));
                false
            }
        }
    }
}

fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { status: 401, .. } => "Invalid email or password".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_credentials_get_a_friendly_message() {
        let err = ApiError::Http {
            status: 401,
            message: "invalid credentials".into(),
        };
        assert_eq!(login_error_message(&err), "Invalid email or password");

        let err = ApiError::Network("connection refused".into());
        assert_eq!(login_error_message(&err), "network error: connection refused");
    }
}
