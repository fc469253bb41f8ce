//! Transport layer: JSON request bodies and the response envelope.

mod account;
mod envelope;
mod send_sms;
mod sms_status;

pub use account::{encode_get_balance_body, encode_get_signatures_body};
pub use envelope::decode_envelope;
pub use send_sms::{decode_send_sms_info, encode_send_sms_body};
pub use sms_status::encode_sms_status_body;
