use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response has no success_request.info")]
    MissingInfo,
}

/// Extract `success_request.info` from a response body.
///
/// A JSON `null` at either level counts as missing.
pub fn decode_envelope(body: &str) -> Result<Value, EnvelopeError> {
    let mut parsed: Value = serde_json::from_str(body)?;
    let info = parsed
        .get_mut("success_request")
        .filter(|success| !success.is_null())
        .and_then(|success| success.get_mut("info"))
        .filter(|info| !info.is_null())
        .ok_or(EnvelopeError::MissingInfo)?;
    Ok(info.take())
}
