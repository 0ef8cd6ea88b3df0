//! Mock login for the demo account
//!
//! There are no users, tokens or sessions. A login request waits for the
//! configured delay and then compares the credentials with the demo pair.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::Config;
use crate::error::{AppError, AppResult};

pub const DEMO_EMAIL: &str = "demo@agri.com";
pub const DEMO_PASSWORD: &str = "demo";

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    login_delay: Duration,
}

/// Login form
#[derive(Debug, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(length(max = 254))]
    pub email: String,
    #[validate(length(max = 128))]
    pub password: String,
}

/// Result of a successful login
#[derive(Debug, Serialize, PartialEq)]
pub struct LoginResponse {
    pub success: bool,
    pub redirect: String,
}

impl AuthService {
    pub fn new(config: &Config) -> Self {
        Self {
            login_delay: Duration::from_millis(config.auth.login_delay_ms),
        }
    }

    /// Whether the pair is the demo account
    pub fn credentials_match(email: &str, password: &str) -> bool {
        email == DEMO_EMAIL && password == DEMO_PASSWORD
    }

    /// Answer a login attempt after the simulated round trip
    pub async fn login(&self, input: LoginInput) -> AppResult<LoginResponse> {
        input.validate()?;

        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }

        if !Self::credentials_match(&input.email, &input.password) {
            tracing::warn!(email = %input.email, "Login rejected");
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(email = %input.email, "Demo login");
        Ok(LoginResponse {
            success: true,
            redirect: "/".to_string(),
        })
    }
}
