//! In-memory user table for the demo auth server.

use crate::config::UserRecord;

/// Outcome of a credential check.
///
/// Unknown-user and wrong-password map to the same HTTP status; they
/// differ only in the message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialCheck {
    Valid,
    UnknownUser,
    WrongPassword,
}

/// Fixed user list seeded at startup. Passwords are compared as plaintext;
/// this server exists to exercise the client, nothing more.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Vec<UserRecord>,
}

impl UserStore {
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users }
    }

    pub fn check(&self, email: &str, password: &str) -> CredentialCheck {
        let Some(user) = self.users.iter().find(|u| u.email == email) else {
            return CredentialCheck::UnknownUser;
        };

        if user.password == password {
            CredentialCheck::Valid
        } else {
            CredentialCheck::WrongPassword
        }
    }
}
