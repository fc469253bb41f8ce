//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{MAX_BATCH_SIZE, OneOrMany, SendSms, SmsStatus};
pub use response::{Balance, DeliveryStatuses, SentMessages, Signatures};
pub use validation::ValidationError;
pub use value::{ApiToken, IntegrationId, MessageText, PhoneNumber, SenderName, SmsId};
