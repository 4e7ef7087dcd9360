//! HTTP client for the auth endpoints.
//!
//! One request per operation: 2xx is success, any other status is a
//! rejection carrying the server's message, and a transport failure is a
//! network error. No retries.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::client::error::AuthError;

/// JSON body for `POST /api/login`.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// JSON body for `POST /api/logout`. No password.
#[derive(Debug, Serialize)]
struct LogoutRequest<'a> {
    email: &'a str,
}

/// The `{message}` body every auth endpoint answers with.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthOutcome {
    pub message: String,
}

pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>, connect_timeout: Duration) -> Self {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .expect("Failed to build auth client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome, AuthError> {
        self.post("/api/login", &LoginRequest { email, password })
            .await
    }

    pub async fn logout(&self, email: &str) -> Result<AuthOutcome, AuthError> {
        self.post("/api/logout", &LogoutRequest { email }).await
    }

    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<AuthOutcome, AuthError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| AuthError::Network { source })?;

        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|source| AuthError::Network { source });
        }

        // Non-2xx: pull the server's message out of the body when it has
        // the expected shape, fall back to the status reason.
        let message = response
            .json::<AuthOutcome>()
            .await
            .map(|outcome| outcome.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        if status.is_server_error() {
            Err(AuthError::Server {
                status: status.as_u16(),
                message,
            })
        } else {
            Err(AuthError::Credentials { message })
        }
    }
}
