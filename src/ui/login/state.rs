use crate::ui::mvi::UiState;

/// Which screen the flow is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Profile,
}

/// Complete state of the login/profile flow.
///
/// Owned exclusively by the reducer; the view reads it and never writes.
/// `current_screen == Profile` holds exactly when `is_authenticated`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
    /// Set on a failed submit validation, cleared on the next edit.
    pub is_email_error: bool,
    pub is_password_error: bool,
    /// Derived: both fields non-blank. A liveness check for the submit
    /// button, not full validity.
    pub is_login_enabled: bool,
    /// True only between a submit intent and its completion intent.
    pub is_loading: bool,
    /// Last server/network failure, cleared on the next edit or submit.
    pub error_message: Option<String>,
    pub current_screen: Screen,
    pub is_authenticated: bool,
}

impl UiState for LoginFormState {}
