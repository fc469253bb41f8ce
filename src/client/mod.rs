//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};

use crate::domain::{ApiToken, IntegrationId, OneOrMany, SendSms, SmsStatus, ValidationError};

const DEFAULT_BASE_URL: &str = "https://im.smsclub.mobi";
const SEND_PATH: &str = "/sms/send";
const STATUS_PATH: &str = "/sms/status";
const ORIGINATOR_PATH: &str = "/sms/originator";
const BALANCE_PATH: &str = "/sms/balance";

const TOKEN_ENV: &str = "SMSCLUB_TOKEN";
const INTEGRATION_ID_ENV: &str = "SMSCLUB_INTEGRATION_ID";

/// Boxed future returned by [`HttpTransport`].
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
/// Completed HTTP exchange as seen by the client.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// HTTP collaborator used by [`SmsClubClient`].
///
/// Implementations perform exactly one POST per call. Retries, pooling and
/// timeouts belong here, not in the client.
pub trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: Vec<(String, String)>,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.post(url).body(body);
            for (name, value) in headers {
                request = request.header(name, value);
            }
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone)]
/// Credentials and partner settings shared by every request.
///
/// Immutable once built; the client only ever reads it.
pub struct ClientConfig {
    token: ApiToken,
    integration_id: IntegrationId,
}

impl ClientConfig {
    /// Create a config with no integration id.
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            token: ApiToken::new(token)?,
            integration_id: IntegrationId::default(),
        })
    }

    /// Attach a partner integration id; zero leaves it unset.
    pub fn with_integration_id(mut self, integration_id: impl Into<IntegrationId>) -> Self {
        self.integration_id = integration_id.into();
        self
    }

    /// Read `SMSCLUB_TOKEN` and the optional `SMSCLUB_INTEGRATION_ID`.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_vars(
            std::env::var(TOKEN_ENV).ok(),
            std::env::var(INTEGRATION_ID_ENV).ok(),
        )
    }

    fn from_vars(
        token: Option<String>,
        integration_id: Option<String>,
    ) -> Result<Self, ValidationError> {
        let config = Self::new(token.unwrap_or_default())?;
        match integration_id {
            Some(raw) if !raw.trim().is_empty() => {
                Ok(config.with_integration_id(IntegrationId::parse(raw)?))
            }
            _ => Ok(config),
        }
    }

    pub fn token(&self) -> &ApiToken {
        &self.token
    }

    pub fn integration_id(&self) -> IntegrationId {
        self.integration_id
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsClubClient`].
///
/// Everything except [`SmsClubError::Transport`] and [`SmsClubError::Remote`]
/// is raised before any request is sent.
pub enum SmsClubError {
    /// Malformed input (token, integration id, sender name, phone, sms id, base URL).
    #[error("validation error: {0}")]
    Validation(#[source] ValidationError),

    /// More than [`crate::MAX_BATCH_SIZE`] phone numbers or SMS ids in one request.
    #[error("limit exceeded: at most {max} {field} entries per request, got {actual}")]
    LimitExceeded {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// The same phone number appears more than once after normalization.
    #[error("duplicate phone numbers: {}", .duplicates.join(", "))]
    Duplicate { duplicates: Vec<String> },

    /// The HTTP call did not complete (DNS, TLS, timeouts, etc). Never retried here.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The response did not carry `success_request.info`; the message is the raw body.
    #[error("{body}")]
    Remote { status: u16, body: String },
}

impl From<ValidationError> for SmsClubError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::TooManyItems { field, max, actual } => {
                Self::LimitExceeded { field, max, actual }
            }
            ValidationError::DuplicatePhoneNumbers { duplicates } => Self::Duplicate { duplicates },
            other => Self::Validation(other),
        }
    }
}

#[derive(Clone)]
/// Builder for [`SmsClubClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent, or
/// the HTTP transport itself.
pub struct SmsClubClientBuilder {
    config: ClientConfig,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl SmsClubClientBuilder {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the API host (`https://im.smsclub.mobi` by default).
    ///
    /// Endpoint paths are appended to it, so a path prefix is kept.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    ///
    /// Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom [`HttpTransport`] instead of the built-in reqwest one.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`SmsClubClient`].
    pub fn build(self) -> Result<SmsClubClient, SmsClubError> {
        let base_url = parse_base_url(&self.base_url)?;

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| SmsClubError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(SmsClubClient {
            config: self.config,
            base_url,
            http,
        })
    }
}

fn parse_base_url(raw: &str) -> Result<String, ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidBaseUrl {
        input: raw.to_owned(),
        reason,
    };
    let url = url::Url::parse(raw).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_owned()));
    }
    Ok(url.as_str().trim_end_matches('/').to_owned())
}

#[derive(Clone)]
/// High-level SMS Club client.
///
/// This type orchestrates input validation, JSON encoding, and unwrapping of the
/// `success_request.info` envelope. Every call sends a single `POST` to
/// `https://im.smsclub.mobi/sms/...` with a bearer token.
pub struct SmsClubClient {
    config: ClientConfig,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl SmsClubClient {
    /// Create a client using the default host and transport.
    ///
    /// For more customization, use [`SmsClubClient::builder`].
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(config: ClientConfig) -> SmsClubClientBuilder {
        SmsClubClientBuilder::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one message to up to 100 recipients.
    ///
    /// `recipients` may be a single number or a list; formatting characters are
    /// stripped before validation. The `info` payload is returned as a map
    /// (see [`crate::SentMessages`] for a typed view).
    ///
    /// Errors:
    /// - [`SmsClubError::Validation`] for a bad sender name or phone number,
    /// - [`SmsClubError::LimitExceeded`] for more than 100 recipients,
    /// - [`SmsClubError::Duplicate`] when a number repeats,
    /// - [`SmsClubError::Transport`] / [`SmsClubError::Remote`] for request failures.
    pub async fn send_sms(
        &self,
        sender_name: impl Into<String>,
        message: impl Into<String>,
        recipients: impl Into<OneOrMany<String>>,
    ) -> Result<Map<String, Value>, SmsClubError> {
        let request = SendSms::new(sender_name, message, recipients)?;
        self.send(&request).await
    }

    /// Send an already validated [`SendSms`] request.
    pub async fn send(&self, request: &SendSms) -> Result<Map<String, Value>, SmsClubError> {
        let body = crate::transport::encode_send_sms_body(request, self.config.integration_id);
        let info = self.post(SEND_PATH, body).await?;
        Ok(crate::transport::decode_send_sms_info(info))
    }

    /// Query delivery status for up to 100 SMS ids.
    ///
    /// Ids may be given as strings or integers, singly or as a list.
    pub async fn sms_status(
        &self,
        sms_ids: impl Into<OneOrMany<String>>,
    ) -> Result<Value, SmsClubError> {
        let request = SmsStatus::new(sms_ids)?;
        self.status(&request).await
    }

    /// Query delivery status for an already validated [`SmsStatus`] request.
    pub async fn status(&self, request: &SmsStatus) -> Result<Value, SmsClubError> {
        let body = crate::transport::encode_sms_status_body(request);
        self.post(STATUS_PATH, body).await
    }

    /// List the sender alpha-names enabled for the account.
    pub async fn get_signatures(&self) -> Result<Value, SmsClubError> {
        self.post(ORIGINATOR_PATH, crate::transport::encode_get_signatures_body())
            .await
    }

    /// Fetch the account balance.
    pub async fn get_balance(&self) -> Result<Value, SmsClubError> {
        self.post(BALANCE_PATH, crate::transport::encode_get_balance_body())
            .await
    }

    async fn post(&self, path: &'static str, body: Value) -> Result<Value, SmsClubError> {
        let url = format!("{}{}", self.base_url, path);
        let body = body.to_string().into_bytes();
        let headers = vec![
            ("Content-Type".to_owned(), "application/json".to_owned()),
            (
                "Authorization".to_owned(),
                format!("Bearer {}", self.config.token.as_str()),
            ),
        ];

        tracing::debug!(path, body_len = body.len(), "sending SMS Club request");
        let response = self
            .http
            .post_json(&url, headers, body)
            .await
            .map_err(SmsClubError::Transport)?;
        tracing::debug!(path, status = response.status, "received SMS Club response");

        match crate::transport::decode_envelope(&response.body) {
            Ok(info) => Ok(info),
            Err(err) => {
                tracing::debug!(
                    path,
                    status = response.status,
                    error = %err,
                    "unexpected response envelope"
                );
                Err(SmsClubError::Remote {
                    status: response.status,
                    body: response.body,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;

    #[derive(Debug, Clone)]
    struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug)]
    struct FakeTransportState {
        calls: usize,
        last_url: Option<String>,
        last_headers: Vec<(String, String)>,
        last_body: Option<Value>,
        response: Result<HttpResponse, String>,
    }

    impl FakeTransport {
        fn new(response_status: u16, response_body: impl Into<String>) -> Self {
            Self::with_response(Ok(HttpResponse {
                status: response_status,
                body: response_body.into(),
            }))
        }

        fn failing(message: impl Into<String>) -> Self {
            Self::with_response(Err(message.into()))
        }

        fn with_response(response: Result<HttpResponse, String>) -> Self {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    calls: 0,
                    last_url: None,
                    last_headers: Vec::new(),
                    last_body: None,
                    response,
                })),
            }
        }

        fn calls(&self) -> usize {
            self.state.lock().unwrap().calls
        }

        fn last_request(&self) -> (Option<String>, Vec<(String, String)>, Option<Value>) {
            let state = self.state.lock().unwrap();
            (
                state.last_url.clone(),
                state.last_headers.clone(),
                state.last_body.clone(),
            )
        }
    }

    impl HttpTransport for FakeTransport {
        fn post_json<'a>(
            &'a self,
            url: &'a str,
            headers: Vec<(String, String)>,
            body: Vec<u8>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let mut state = self.state.lock().unwrap();
                state.calls += 1;
                state.last_url = Some(url.to_owned());
                state.last_headers = headers;
                state.last_body = Some(serde_json::from_slice(&body).unwrap());
                match &state.response {
                    Ok(response) => Ok(response.clone()),
                    Err(message) => Err(Box::new(io::Error::new(
                        io::ErrorKind::ConnectionRefused,
                        message.clone(),
                    )) as Box<dyn StdError + Send + Sync>),
                }
            })
        }
    }

    fn assert_header(headers: &[(String, String)], key: &str, value: &str) {
        assert!(
            headers.iter().any(|(k, v)| k == key && v == value),
            "missing header {key}: {value}; got: {headers:?}"
        );
    }

    fn make_client(config: ClientConfig, transport: FakeTransport) -> SmsClubClient {
        SmsClubClient::builder(config)
            .base_url("https://example.invalid")
            .transport(Arc::new(transport))
            .build()
            .unwrap()
    }

    fn config() -> ClientConfig {
        ClientConfig::new("test_token").unwrap()
    }

    fn ok_body(info: Value) -> String {
        json!({ "success_request": { "info": info } }).to_string()
    }

    #[test]
    fn config_validates_token_and_integration_id() {
        assert!(matches!(
            ClientConfig::new(""),
            Err(ValidationError::Empty { field: "token" })
        ));
        assert!(matches!(
            IntegrationId::parse("abc"),
            Err(ValidationError::NotNumeric { .. })
        ));

        let config = ClientConfig::new("abc")
            .unwrap()
            .with_integration_id(IntegrationId::new(5));
        assert_eq!(config.token().as_str(), "abc");
        assert_eq!(config.integration_id().value(), 5);
    }

    #[test]
    fn config_from_vars() {
        let config =
            ClientConfig::from_vars(Some("abc".to_owned()), Some(" 12 ".to_owned())).unwrap();
        assert_eq!(config.integration_id().value(), 12);

        let config = ClientConfig::from_vars(Some("abc".to_owned()), Some(String::new())).unwrap();
        assert!(!config.integration_id().is_set());

        assert!(ClientConfig::from_vars(None, None).is_err());
        assert!(matches!(
            ClientConfig::from_vars(Some("abc".to_owned()), Some("x".to_owned())),
            Err(ValidationError::NotNumeric { .. })
        ));
    }

    #[tokio::test]
    async fn send_sms_posts_json_with_bearer_token() {
        let transport = FakeTransport::new(200, ok_body(json!({"1001": "380501234567"})));
        let client = make_client(config(), transport.clone());

        let info = client
            .send_sms("Acme", "Hello", "380501234567")
            .await
            .unwrap();
        assert_eq!(info.get("1001"), Some(&json!("380501234567")));

        let (url, headers, body) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/sms/send"));
        assert_header(&headers, "Content-Type", "application/json");
        assert_header(&headers, "Authorization", "Bearer test_token");
        assert_eq!(
            body,
            Some(json!({
                "phone": ["380501234567"],
                "message": "Hello",
                "src_addr": "Acme"
            }))
        );
    }

    #[tokio::test]
    async fn send_sms_includes_integration_id_when_set() {
        let transport = FakeTransport::new(200, ok_body(json!({})));
        let config = config().with_integration_id(IntegrationId::new(5));
        let client = make_client(config, transport.clone());

        client
            .send_sms("Acme", "Hello", vec!["380501234567"])
            .await
            .unwrap();

        let (_, _, body) = transport.last_request();
        assert_eq!(body.unwrap().get("integration_id"), Some(&json!(5)));
    }

    #[tokio::test]
    async fn send_sms_duplicate_error_lists_number_once() {
        let transport = FakeTransport::new(200, ok_body(json!({})));
        let client = make_client(config(), transport.clone());

        let err = client
            .send_sms("Acme", "Hello", vec!["380501234567", "380501234567"])
            .await
            .unwrap_err();
        assert!(matches!(err, SmsClubError::Duplicate { .. }));
        assert_eq!(err.to_string().matches("380501234567").count(), 1);
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn send_sms_invalid_phone_skips_network() {
        let transport = FakeTransport::new(200, ok_body(json!({})));
        let client = make_client(config(), transport.clone());

        let err = client
            .send_sms("Acme", "Hello", vec!["123"])
            .await
            .unwrap_err();
        match err {
            SmsClubError::Validation(ValidationError::InvalidPhoneNumber { input }) => {
                assert_eq!(input, "123");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn send_sms_sender_name_boundaries() {
        let transport = FakeTransport::new(200, ok_body(json!({})));
        let client = make_client(config(), transport.clone());

        let err = client
            .send_sms("TwelveChars!", "Hello", "380501234567")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SmsClubError::Validation(ValidationError::InvalidSenderName { .. })
        ));
        assert_eq!(transport.calls(), 0);

        client
            .send_sms("Acme-Store1", "Hello", "380501234567")
            .await
            .unwrap();
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn send_sms_recipient_limit_maps_to_limit_exceeded() {
        let transport = FakeTransport::new(200, ok_body(json!({})));
        let client = make_client(config(), transport.clone());

        let recipients = (0..101)
            .map(|idx| format!("3805000{idx:05}"))
            .collect::<Vec<_>>();
        let err = client
            .send_sms("Acme", "Hello", recipients)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SmsClubError::LimitExceeded {
                max: 100,
                actual: 101,
                ..
            }
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn send_sms_keeps_server_key_order() {
        let transport = FakeTransport::new(
            200,
            r#"{"success_request":{"info":{"9":"380501234567","10":"380671234567"}}}"#,
        );
        let client = make_client(config(), transport);

        let info = client
            .send_sms("Acme", "Hello", vec!["380501234567", "380671234567"])
            .await
            .unwrap();
        let keys = info.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(keys, vec!["9", "10"]);
    }

    #[tokio::test]
    async fn send_sms_coerces_array_info_to_map() {
        let transport = FakeTransport::new(200, ok_body(json!(["queued"])));
        let client = make_client(config(), transport);

        let info = client
            .send_sms("Acme", "Hello", "380501234567")
            .await
            .unwrap();
        assert_eq!(info.get("0"), Some(&json!("queued")));
    }

    #[tokio::test]
    async fn sms_status_posts_ids_and_returns_info() {
        let transport = FakeTransport::new(200, ok_body(json!({"1001": "DELIVRD"})));
        let client = make_client(config(), transport.clone());

        let info = client.sms_status(vec![1001_u64, 1002]).await.unwrap();
        assert_eq!(info, json!({"1001": "DELIVRD"}));

        let (url, _, body) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/sms/status"));
        assert_eq!(body, Some(json!({"id_sms": ["1001", "1002"]})));
    }

    #[tokio::test]
    async fn sms_status_trims_padded_ids() {
        let transport = FakeTransport::new(200, ok_body(json!({"123": "DELIVRD"})));
        let client = make_client(config(), transport.clone());

        client.sms_status(vec![" 123", "456 "]).await.unwrap();

        let (_, _, body) = transport.last_request();
        assert_eq!(body, Some(json!({"id_sms": ["123", "456"]})));
    }

    #[tokio::test]
    async fn sms_status_limit_and_format_skip_network() {
        let transport = FakeTransport::new(200, ok_body(json!({})));
        let client = make_client(config(), transport.clone());

        let ids = (0..101_u64).collect::<Vec<_>>();
        let err = client.sms_status(ids).await.unwrap_err();
        assert!(matches!(
            err,
            SmsClubError::LimitExceeded {
                field: "id_sms",
                ..
            }
        ));

        let err = client.sms_status("12x").await.unwrap_err();
        assert!(matches!(
            err,
            SmsClubError::Validation(ValidationError::InvalidSmsId { .. })
        ));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn get_balance_unwraps_info() {
        let transport = FakeTransport::new(
            200,
            r#"{"success_request":{"info":{"balance":42}}}"#,
        );
        let client = make_client(config(), transport.clone());

        let info = client.get_balance().await.unwrap();
        assert_eq!(info, json!({"balance": 42}));

        let (url, headers, body) = transport.last_request();
        assert_eq!(url.as_deref(), Some("https://example.invalid/sms/balance"));
        assert_header(&headers, "Authorization", "Bearer test_token");
        assert_eq!(body, Some(json!({})));
    }

    #[tokio::test]
    async fn get_signatures_uses_originator_endpoint() {
        let transport = FakeTransport::new(200, ok_body(json!(["Acme", "Shop"])));
        let client = make_client(config(), transport.clone());

        let info = client.get_signatures().await.unwrap();
        assert_eq!(info, json!(["Acme", "Shop"]));

        let (url, _, body) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("https://example.invalid/sms/originator")
        );
        assert_eq!(body, Some(json!({})));
    }

    #[tokio::test]
    async fn unexpected_envelope_maps_to_remote_error_with_raw_body() {
        let raw = r#"{"error":"bad token"}"#;
        let transport = FakeTransport::new(401, raw);
        let client = make_client(config(), transport);

        let err = client.get_balance().await.unwrap_err();
        assert_eq!(err.to_string(), raw);
        assert!(matches!(err, SmsClubError::Remote { status: 401, .. }));

        let err = client.get_signatures().await.unwrap_err();
        assert_eq!(err.to_string(), raw);
        let err = client.sms_status("1").await.unwrap_err();
        assert_eq!(err.to_string(), raw);
        let err = client
            .send_sms("Acme", "Hello", "380501234567")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), raw);
    }

    #[tokio::test]
    async fn invalid_json_maps_to_remote_error() {
        let transport = FakeTransport::new(502, "<html>Bad Gateway</html>");
        let client = make_client(config(), transport);

        let err = client.get_balance().await.unwrap_err();
        match err {
            SmsClubError::Remote { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body, "<html>Bad Gateway</html>");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_failure_is_not_retried() {
        let transport = FakeTransport::failing("connection refused");
        let client = make_client(config(), transport.clone());

        let err = client.get_balance().await.unwrap_err();
        match &err {
            SmsClubError::Transport(source) => {
                assert_eq!(source.to_string(), "connection refused");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "transport error: connection refused");
        assert_eq!(transport.calls(), 1);
    }

    #[test]
    fn builder_validates_and_normalizes_base_url() {
        let client = SmsClubClient::builder(config())
            .base_url("https://proxy.example.invalid/api/")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "https://proxy.example.invalid/api");

        let err = SmsClubClient::builder(config())
            .base_url("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            SmsClubError::Validation(ValidationError::InvalidBaseUrl { .. })
        ));

        let err = SmsClubClient::builder(config())
            .base_url("ftp://example.invalid")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SmsClubError::Validation(_)));
    }

    #[test]
    fn default_client_targets_sms_club_host() {
        let client = SmsClubClient::new(config());
        assert_eq!(client.base_url, "https://im.smsclub.mobi");

        let client = SmsClubClient::builder(config())
            .timeout(Duration::from_secs(5))
            .user_agent("smsclub-tests")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "https://im.smsclub.mobi");
    }
}
