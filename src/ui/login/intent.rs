use crate::ui::mvi::Intent;

/// User actions and network-completion events for the login flow.
#[derive(Debug, Clone)]
pub enum LoginIntent {
    EmailChanged(String),
    PasswordChanged(String),
    LoginClicked,
    LogoutClicked,
    /// The login call resolved successfully.
    LoginSucceeded,
    /// The login call failed; `message` is already user-facing.
    LoginFailed { message: String },
    LogoutSucceeded,
    LogoutFailed { message: String },
}

impl Intent for LoginIntent {}
