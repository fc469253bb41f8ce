use serde_json::{Map, Value};

fn encode_empty_body() -> Value {
    Value::Object(Map::new())
}

pub fn encode_get_signatures_body() -> Value {
    encode_empty_body()
}

pub fn encode_get_balance_body() -> Value {
    encode_empty_body()
}
