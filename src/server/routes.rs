//! Route table and handlers for the auth server.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::server::store::{CredentialCheck, UserStore};

#[derive(Debug, Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

#[derive(Debug, Deserialize)]
struct LogoutBody {
    email: String,
}

/// The `{message}` body every endpoint answers with.
#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

impl MessageBody {
    fn json(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

#[derive(Debug, Serialize)]
struct HealthBody {
    status: String,
    service: String,
}

pub fn build_router(store: Arc<UserStore>) -> Router {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/health", get(health))
        .with_state(store)
}

async fn login(
    State(store): State<Arc<UserStore>>,
    Json(body): Json<LoginBody>,
) -> (StatusCode, Json<MessageBody>) {
    let request_id = Uuid::new_v4();

    match store.check(&body.email, &body.password) {
        CredentialCheck::Valid => {
            tracing::info!(%request_id, email = %body.email, "login accepted");
            (StatusCode::OK, MessageBody::json("Login successful"))
        }
        CredentialCheck::UnknownUser => {
            tracing::info!(%request_id, email = %body.email, "login rejected: unknown user");
            (
                StatusCode::UNAUTHORIZED,
                MessageBody::json("Invalid user credentials"),
            )
        }
        CredentialCheck::WrongPassword => {
            tracing::info!(%request_id, email = %body.email, "login rejected: wrong password");
            (
                StatusCode::UNAUTHORIZED,
                MessageBody::json("Invalid pwd credentials"),
            )
        }
    }
}

/// Logout succeeds for any email; the server keeps no session state.
async fn logout(Json(body): Json<LogoutBody>) -> (StatusCode, Json<MessageBody>) {
    let request_id = Uuid::new_v4();
    tracing::info!(%request_id, email = %body.email, "logout");
    (StatusCode::OK, MessageBody::json("Logout successful"))
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody {
        status: "healthy".to_string(),
        service: "loginflow".to_string(),
    })
}
