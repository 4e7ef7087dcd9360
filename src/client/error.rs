//! Error types for the auth client.
//!
//! Every failure is terminal for its call and recoverable at the reducer
//! boundary: it only ever becomes the form's `error_message`.

use thiserror::Error;

/// Errors that can occur during a login or logout call.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Server rejected the credentials (4xx).
    #[error("Credentials rejected: {message}")]
    Credentials { message: String },

    /// Server failed on its side (5xx).
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    /// No usable response reached the client.
    #[error("Connection failed: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },
}

impl AuthError {
    /// The message shown in the form's error slot.
    ///
    /// Rejections surface the server-provided message verbatim; transport
    /// failures get a connectivity prefix.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Credentials { message } => message.clone(),
            AuthError::Server { message, .. } => message.clone(),
            AuthError::Network { source } => format!("Network error: {source}"),
        }
    }

    pub fn is_credential_rejection(&self) -> bool {
        matches!(self, AuthError::Credentials { .. })
    }
}
