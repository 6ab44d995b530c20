//! Password challenge state.

/// Local state of the password dialog.
///
/// `field_empty_error` and `wrong_password_error` never hold together within
/// one submission: a submission either fails validation locally or is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChallenge {
    password: String,
    dialog_visible: bool,
    field_empty_error: bool,
    wrong_password_error: bool,
}

impl PasswordChallenge {
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn dialog_visible(&self) -> bool {
        self.dialog_visible
    }

    /// Inline "Required" marker on the password field.
    pub fn field_empty_error(&self) -> bool {
        self.field_empty_error
    }

    /// "Incorrect password" banner.
    pub fn wrong_password_error(&self) -> bool {
        self.wrong_password_error
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Back to the closed, empty defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn open(&mut self, wrong_password: bool) {
        self.dialog_visible = true;
        if wrong_password {
            self.wrong_password_error = true;
            self.field_empty_error = false;
        }
    }

    /// Validates the current input and returns it when it may be sent.
    ///
    /// `field_empty_error` is flipped only when it disagrees with the
    /// validity of this submission; it is not simply set on invalid input.
    pub(crate) fn validate_submission(&mut self) -> Option<String> {
        let is_valid = !self.password.is_empty();
        if is_valid == self.field_empty_error {
            self.field_empty_error = !self.field_empty_error;
        }

        self.wrong_password_error = false;
        is_valid.then(|| self.password.clone())
    }
}
