use crate::ui::login::effect::LoginEffect;
use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::{LoginFormState, Screen};
use crate::ui::mvi::Reducer;
use crate::validation::{is_non_blank, is_valid_email, is_valid_password};

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginFormState;
    type Intent = LoginIntent;
    type Effect = LoginEffect;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Option<Self::Effect>) {
        match intent {
            LoginIntent::EmailChanged(email) => {
                let is_login_enabled = is_non_blank(&email) && is_non_blank(&state.password);
                (
                    LoginFormState {
                        email,
                        is_email_error: false,
                        error_message: None,
                        is_login_enabled,
                        ..state
                    },
                    None,
                )
            }
            LoginIntent::PasswordChanged(password) => {
                let is_login_enabled = is_non_blank(&state.email) && is_non_blank(&password);
                (
                    LoginFormState {
                        password,
                        is_password_error: false,
                        error_message: None,
                        is_login_enabled,
                        ..state
                    },
                    None,
                )
            }
            LoginIntent::LoginClicked => {
                // The view disables controls while loading; drop duplicate
                // submits anyway so one call is in flight at a time.
                if state.is_loading || state.current_screen != Screen::Login {
                    return (state, None);
                }

                let email_valid = is_valid_email(&state.email);
                let password_valid = is_valid_password(&state.password);

                if !email_valid || !password_valid {
                    return (
                        LoginFormState {
                            is_email_error: !email_valid,
                            is_password_error: !password_valid,
                            ..state
                        },
                        None,
                    );
                }

                let effect = LoginEffect::SubmitLogin {
                    email: state.email.clone(),
                    password: state.password.clone(),
                };
                (
                    LoginFormState {
                        is_loading: true,
                        error_message: None,
                        ..state
                    },
                    Some(effect),
                )
            }
            LoginIntent::LoginSucceeded => (
                LoginFormState {
                    is_loading: false,
                    error_message: None,
                    current_screen: Screen::Profile,
                    is_authenticated: true,
                    ..state
                },
                None,
            ),
            LoginIntent::LoginFailed { message } => (
                LoginFormState {
                    is_loading: false,
                    error_message: Some(message),
                    ..state
                },
                None,
            ),
            LoginIntent::LogoutClicked => {
                if state.is_loading || state.current_screen != Screen::Profile {
                    return (state, None);
                }

                let effect = LoginEffect::SubmitLogout {
                    email: state.email.clone(),
                };
                (
                    LoginFormState {
                        is_loading: true,
                        error_message: None,
                        ..state
                    },
                    Some(effect),
                )
            }
            LoginIntent::LogoutSucceeded => (
                LoginFormState {
                    email: String::new(),
                    password: String::new(),
                    is_login_enabled: false,
                    is_loading: false,
                    error_message: None,
                    current_screen: Screen::Login,
                    is_authenticated: false,
                    ..state
                },
                None,
            ),
            LoginIntent::LogoutFailed { message } => (
                LoginFormState {
                    is_loading: false,
                    error_message: Some(message),
                    ..state
                },
                None,
            ),
        }
    }
}
