use serde_json::{Map, Value, json};

use crate::domain::{IntegrationId, MessageText, PhoneNumber, SendSms, SenderName};

pub fn encode_send_sms_body(request: &SendSms, integration_id: IntegrationId) -> Value {
    let phones = request
        .recipients()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>();

    let mut body = Map::new();
    body.insert(PhoneNumber::FIELD.to_owned(), json!(phones));
    body.insert(
        MessageText::FIELD.to_owned(),
        json!(request.message().as_str()),
    );
    body.insert(
        SenderName::FIELD.to_owned(),
        json!(request.sender_name().as_str()),
    );
    if integration_id.is_set() {
        body.insert(
            IntegrationId::FIELD.to_owned(),
            json!(integration_id.value()),
        );
    }
    Value::Object(body)
}

/// Coerce the `info` payload into a map.
///
/// Arrays become index-keyed maps, `null` becomes empty, any other scalar is
/// stored under `"0"`.
pub fn decode_send_sms_info(info: Value) -> Map<String, Value> {
    match info {
        Value::Object(map) => map,
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| (idx.to_string(), item))
            .collect(),
        Value::Null => Map::new(),
        scalar => {
            let mut map = Map::new();
            map.insert("0".to_owned(), scalar);
            map
        }
    }
}
