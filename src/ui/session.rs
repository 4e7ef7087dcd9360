//! Effect runtime for the login flow.
//!
//! The hosting UI owns one session per screen instance; the session owns
//! the form state and the auth client. Replaces the ambient view-model
//! lifecycle of typical mobile frameworks with explicit ownership.

use crate::client::AuthClient;
use crate::ui::login::{LoginEffect, LoginFormState, LoginIntent, LoginReducer};
use crate::ui::mvi::Reducer;

pub struct LoginSession {
    state: LoginFormState,
    client: AuthClient,
}

impl LoginSession {
    pub fn new(client: AuthClient) -> Self {
        Self {
            state: LoginFormState::default(),
            client,
        }
    }

    /// Current form state, read-only. The session is the sole writer.
    pub fn state(&self) -> &LoginFormState {
        &self.state
    }

    /// Process one intent, running any requested network call to
    /// completion before returning. `&mut self` guarantees at most one
    /// call is in flight per session.
    pub async fn dispatch(&mut self, intent: LoginIntent) {
        let (state, effect) = LoginReducer::reduce(self.state.clone(), intent);
        self.state = state;

        if let Some(effect) = effect {
            let completion = self.run_effect(effect).await;
            // Completion intents never request further effects.
            let (state, _) = LoginReducer::reduce(self.state.clone(), completion);
            self.state = state;
        }
    }

    async fn run_effect(&self, effect: LoginEffect) -> LoginIntent {
        match effect {
            LoginEffect::SubmitLogin { email, password } => {
                tracing::debug!(%email, "submitting login");
                match self.client.login(&email, &password).await {
                    Ok(outcome) => {
                        tracing::info!(%email, message = %outcome.message, "login succeeded");
                        LoginIntent::LoginSucceeded
                    }
                    Err(err) => {
                        tracing::warn!(%email, error = %err, "login failed");
                        LoginIntent::LoginFailed {
                            message: err.user_message(),
                        }
                    }
                }
            }
            LoginEffect::SubmitLogout { email } => {
                tracing::debug!(%email, "submitting logout");
                match self.client.logout(&email).await {
                    Ok(_) => LoginIntent::LogoutSucceeded,
                    Err(err) => {
                        tracing::warn!(%email, error = %err, "logout failed");
                        LoginIntent::LogoutFailed {
                            message: err.user_message(),
                        }
                    }
                }
            }
        }
    }
}
