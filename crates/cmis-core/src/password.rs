#![forbid(unsafe_code)]

//! Submit-time password checks for the registration and reset forms.

/// Minimum password length, in UTF-16 code units (what `input.value.length`
/// reports in the browser).
pub const MIN_PASSWORD_LEN: usize = 8;

/// Why a password pair was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordError {
    /// The two fields differ.
    Mismatch,
    /// The fields agree but the password is too short.
    TooShort { len: usize, min: usize },
}

impl PasswordError {
    /// Text shown to the user in the blocking alert.
    #[must_use]
    pub const fn alert_message(self) -> &'static str {
        match self {
            Self::Mismatch => "Passwords do not match!",
            Self::TooShort { .. } => "Password must be at least 8 characters long!",
        }
    }
}

impl core::fmt::Display for PasswordError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Mismatch => f.write_str("passwords do not match"),
            Self::TooShort { len, min } => {
                write!(f, "password has {len} characters, need at least {min}")
            }
        }
    }
}

impl std::error::Error for PasswordError {}

/// Length as the browser counts it.
#[must_use]
pub fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Mismatch is checked first, so a pair that is both different and short
/// reports [`PasswordError::Mismatch`].
pub fn validate_password_pair(password: &str, confirm: &str) -> Result<(), PasswordError> {
    if password != confirm {
        return Err(PasswordError::Mismatch);
    }
    let len = utf16_len(password);
    if len < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort {
            len,
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}
