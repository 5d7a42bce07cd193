use core::fmt;

use serde::{Deserialize, Serialize};

use roster_core::{Report, Validate};

use crate::person::PASSWORD_MIN_CHARS;

pub const USERNAME_MAX_CHARS: usize = 20;
pub const LOGIN_MESSAGE: &str = "Login Succesfuly..!";

/// Login form fields. Credentials are only checked for shape.
#[derive(Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Validate for LoginForm {
    fn validate_into(&self, report: &mut Report) {
        report.length("username", &self.username, 1, USERNAME_MAX_CHARS);
        report.min_length("password", &self.password, PASSWORD_MIN_CHARS);
    }
}

impl LoginForm {
    /// Accept the login, discarding the password.
    pub fn accept(self) -> LoginResult {
        LoginResult::for_user(self.username)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResult {
    pub username: String,
    pub message: String,
}

impl LoginResult {
    pub fn for_user(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            message: LOGIN_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_echoes_username_only() {
        let form = LoginForm {
            username: "Miguel2021".to_string(),
            password: "hunter2hunter2".to_string(),
        };
        assert!(form.validate().is_ok());

        let json = serde_json::to_value(form.accept()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "username": "Miguel2021", "message": LOGIN_MESSAGE })
        );
    }

    #[test]
    fn long_username_and_short_password_are_rejected() {
        let form = LoginForm {
            username: "u".repeat(21),
            password: "1234567".to_string(),
        };
        assert_eq!(form.validate().unwrap_err().field_errors().len(), 2);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any password of 8+ chars logs in with the fixed message.
            #[test]
            fn password_value_does_not_matter(
                username in "[A-Za-z0-9]{1,20}",
                password in "\\PC{8,40}",
            ) {
                let form = LoginForm { username: username.clone(), password };
                prop_assert!(form.validate().is_ok());
                let result = form.accept();
                prop_assert_eq!(result.username, username);
                prop_assert_eq!(result.message, LOGIN_MESSAGE);
            }
        }
    }
}
