use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::validation::ValidationError;

static SENDER_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[\w\s.-]{{1,{}}}$", SenderName::MAX_CHARS))
        .expect("sender name pattern must compile")
});

static PHONE_NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^380[0-9]{9}$").expect("phone number pattern must compile"));

#[derive(Clone, PartialEq, Eq, Hash)]
/// SMS Club API token, sent as `Authorization: Bearer <token>`.
///
/// Invariant: non-empty. The value is kept exactly as provided.
pub struct ApiToken(String);

impl ApiToken {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "token";

    /// Create a validated [`ApiToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Partner identifier forwarded as `integration_id`.
///
/// Zero means "not set" and the field is omitted from requests.
pub struct IntegrationId(u64);

impl IntegrationId {
    /// JSON field name used by SMS Club (`integration_id`).
    pub const FIELD: &'static str = "integration_id";

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Parse the textual form; surrounding whitespace is ignored.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = value.as_ref();
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NotNumeric {
                field: Self::FIELD,
                input: raw.to_owned(),
            });
        }
        trimmed
            .parse::<u64>()
            .map(Self)
            .map_err(|_| ValidationError::NotNumeric {
                field: Self::FIELD,
                input: raw.to_owned(),
            })
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_set(self) -> bool {
        self.0 != 0
    }
}

impl From<u64> for IntegrationId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for IntegrationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender alpha-name (`src_addr`).
///
/// Invariant: 1 to 11 characters, each a word character, whitespace, `.` or `-`.
/// The name must also be registered for your account; see
/// [`crate::SmsClubClient::get_signatures`].
pub struct SenderName(String);

impl SenderName {
    /// JSON field name used by SMS Club (`src_addr`).
    pub const FIELD: &'static str = "src_addr";

    /// Maximum length in characters.
    pub const MAX_CHARS: usize = 11;

    /// Create a validated [`SenderName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !SENDER_NAME_PATTERN.is_match(&value) {
            return Err(ValidationError::InvalidSenderName { input: value });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`message`).
///
/// Any text is accepted, including the empty string.
pub struct MessageText(String);

impl MessageText {
    /// JSON field name used by SMS Club (`message`).
    pub const FIELD: &'static str = "message";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Ukrainian mobile number in `380XXXXXXXXX` form.
///
/// Invariant: exactly 12 ASCII digits starting with `380`.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// JSON field name used by SMS Club (`phone`).
    pub const FIELD: &'static str = "phone";

    /// Strip every non-digit character and validate the remainder.
    ///
    /// `"+380 (50) 123-45-67"` becomes `"380501234567"`. The error carries the
    /// input as given, not the stripped form.
    pub fn normalize(input: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = input.as_ref();
        let digits = raw
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>();
        if !PHONE_NUMBER_PATTERN.is_match(&digits) {
            return Err(ValidationError::InvalidPhoneNumber {
                input: raw.to_owned(),
            });
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// SMS Club message id as returned by `sms/send`.
///
/// Invariant: non-empty, ASCII digits only. Surrounding whitespace is trimmed.
pub struct SmsId(String);

impl SmsId {
    /// JSON field name used by SMS Club (`id_sms`).
    pub const FIELD: &'static str = "id_sms";

    /// Create a validated [`SmsId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidSmsId { input: value });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for SmsId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}
