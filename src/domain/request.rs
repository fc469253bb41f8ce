use crate::domain::validation::ValidationError;
use crate::domain::value::{MessageText, PhoneNumber, SenderName, SmsId};

/// Maximum number of phone numbers or SMS ids accepted in one request.
pub const MAX_BATCH_SIZE: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single value or a list of values.
///
/// `One` always normalizes to a one-element list and is never subject to the
/// batch limit; `Many` is checked against [`MAX_BATCH_SIZE`].
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Produce the canonical ordered list, enforcing `1..=MAX_BATCH_SIZE`.
    pub fn into_batch(self, field: &'static str) -> Result<Vec<T>, ValidationError> {
        match self {
            Self::One(value) => Ok(vec![value]),
            Self::Many(values) if values.len() > MAX_BATCH_SIZE => {
                Err(ValidationError::TooManyItems {
                    field,
                    max: MAX_BATCH_SIZE,
                    actual: values.len(),
                })
            }
            Self::Many(values) if values.is_empty() => Err(ValidationError::Empty { field }),
            Self::Many(values) => Ok(values),
        }
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        Self::One(value.to_owned())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<u64> for OneOrMany<String> {
    fn from(value: u64) -> Self {
        Self::One(value.to_string())
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for OneOrMany<String> {
    fn from(values: &[&str]) -> Self {
        Self::Many(values.iter().map(|value| (*value).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.iter().map(|value| (*value).to_owned()).collect())
    }
}

impl From<Vec<u64>> for OneOrMany<String> {
    fn from(values: Vec<u64>) -> Self {
        Self::Many(values.into_iter().map(|value| value.to_string()).collect())
    }
}

#[derive(Debug, Clone)]
/// Validated `sms/send` request.
pub struct SendSms {
    sender_name: SenderName,
    message: MessageText,
    recipients: Vec<PhoneNumber>,
}

impl SendSms {
    /// Validate and normalize a send request.
    ///
    /// Checks run in a fixed order and stop at the first failure: sender name,
    /// recipient count, each recipient in order, then duplicates.
    pub fn new(
        sender_name: impl Into<String>,
        message: impl Into<String>,
        recipients: impl Into<OneOrMany<String>>,
    ) -> Result<Self, ValidationError> {
        let sender_name = SenderName::new(sender_name)?;
        let message = MessageText::new(message);
        let recipients = recipients
            .into()
            .into_batch(PhoneNumber::FIELD)?
            .iter()
            .map(PhoneNumber::normalize)
            .collect::<Result<Vec<_>, _>>()?;

        let duplicates = find_duplicates(&recipients);
        if !duplicates.is_empty() {
            return Err(ValidationError::DuplicatePhoneNumbers { duplicates });
        }

        Ok(Self {
            sender_name,
            message,
            recipients,
        })
    }

    pub fn sender_name(&self) -> &SenderName {
        &self.sender_name
    }

    pub fn message(&self) -> &MessageText {
        &self.message
    }

    pub fn recipients(&self) -> &[PhoneNumber] {
        &self.recipients
    }
}

/// Values seen more than once, each reported once, in first-appearance order.
fn find_duplicates(phones: &[PhoneNumber]) -> Vec<String> {
    let mut duplicates = Vec::<String>::new();
    for (idx, phone) in phones.iter().enumerate() {
        let seen_before = phones[..idx].contains(phone);
        if !seen_before && phones[idx + 1..].contains(phone) {
            duplicates.push(phone.as_str().to_owned());
        }
    }
    duplicates
}

#[derive(Debug, Clone)]
/// Validated `sms/status` request.
pub struct SmsStatus {
    sms_ids: Vec<SmsId>,
}

impl SmsStatus {
    /// Validate a status request for one or more ids.
    pub fn new(sms_ids: impl Into<OneOrMany<String>>) -> Result<Self, ValidationError> {
        let sms_ids = sms_ids
            .into()
            .into_batch(SmsId::FIELD)?
            .into_iter()
            .map(SmsId::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { sms_ids })
    }

    pub fn sms_ids(&self) -> &[SmsId] {
        &self.sms_ids
    }
}
