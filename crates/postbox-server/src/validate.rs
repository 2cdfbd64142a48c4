//! Submission validation.
//!
//! Rules run in a fixed order (name, then email, then message) so a record
//! failing several rules always reports the same reason.  Every check trims
//! surrounding whitespace first and counts characters, not bytes.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Minimum trimmed length of `name`.
const MIN_NAME_CHARS: usize = 2;
/// Minimum trimmed length of `message`.
const MIN_MESSAGE_CHARS: usize = 10;

/// ASCII `local@domain.tld` shape: alnum/`._%+-` local part, dotted domain,
/// final label of at least two letters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email regex should compile")
});

/// Why a submission was rejected.
///
/// The display text is the exact reason returned to the client.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name too short")]
    NameTooShort,

    #[error("invalid email")]
    InvalidEmail,

    #[error("message too short")]
    MessageTooShort,
}

/// Check an untrusted submission, returning the first failing rule.
///
/// Pure: no side effects, accepts any string input.  Absent HTTP fields
/// arrive here as empty strings and fail the relevant length rule rather
/// than being a distinct error class.
pub fn validate_submission(
    name: &str,
    email: &str,
    message: &str,
) -> Result<(), ValidationError> {
    if name.trim().chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }

    if !EMAIL_RE.is_match(email.trim()) {
        return Err(ValidationError::InvalidEmail);
    }

    if message.trim().chars().count() < MIN_MESSAGE_CHARS {
        return Err(ValidationError::MessageTooShort);
    }

    Ok(())
}
