use serde_json::{Map, Value, json};

use crate::domain::{SmsId, SmsStatus};

pub fn encode_sms_status_body(request: &SmsStatus) -> Value {
    let ids = request
        .sms_ids()
        .iter()
        .map(SmsId::as_str)
        .collect::<Vec<_>>();
    let mut body = Map::new();
    body.insert(SmsId::FIELD.to_owned(), json!(ids));
    Value::Object(body)
}
