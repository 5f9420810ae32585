//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    ApiKey, ApiSecret, SendSms, SendSmsResponse, TrackSms, TrackSmsResponse, VendorResponse,
};

const DEFAULT_SEND_ENDPOINT: &str =
    "https://e-amarseba.com/api/v1/http/services/bulk-sms/send-sms";
const DEFAULT_TRACK_ENDPOINT: &str =
    "https://e-amarseba.com/api/v1/http/services/bulk-sms/track-sms";

const SEND_PATH: &str = "send-sms";
const TRACK_PATH: &str = "track-sms";

const CONTENT_TYPE_HEADER: &str = "content-type";
const JSON_CONTENT_TYPE: &str = "application/json";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type Headers = Vec<(&'static str, String)>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        headers: Headers,
        body: serde_json::Value,
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
        headers: Headers,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut request = self.client.post(url);
            for (name, value) in headers {
                request = request.header(name, value);
            }
            let response = request.json(&body).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Static key/secret pair sent as `x-app-key` / `x-app-secret` on every request.
///
/// Built once at startup and handed to the client by value. Values are not
/// checked here; the vendor decides whether they are valid.
pub struct Credentials {
    api_key: ApiKey,
    api_secret: ApiSecret,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: ApiKey::new(api_key),
            api_secret: ApiSecret::new(api_secret),
        }
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn api_secret(&self) -> &ApiSecret {
        &self.api_secret
    }

    /// Whether either half is empty or still a sample placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.api_key.is_placeholder() || self.api_secret.is_placeholder()
    }

    fn push_headers(&self, headers: &mut Headers) {
        headers.push((ApiKey::HEADER, self.api_key.as_str().to_owned()));
        headers.push((ApiSecret::HEADER, self.api_secret.as_str().to_owned()));
    }
}

/// Coarse failure category of a call, used by callers to decide what to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// Network failure, timeout, or non-2xx status.
    HttpError,
    /// 2xx response whose body is not JSON.
    InvalidJson,
    /// JSON body whose own `success` field is not `true`.
    VendorReported,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`AmarsebaClient`].
///
/// The client itself only produces HTTP-level and JSON failures.
/// [`AmarsebaError::VendorReported`] comes from
/// [`VendorResponse::into_vendor_result`], which callers invoke when they
/// want the vendor's `success` flag turned into an error.
pub enum AmarsebaError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("request failed: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// 2xx response body could not be decoded as JSON.
    #[error("invalid JSON response: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The vendor answered with `success` other than `true`.
    #[error(
        "vendor reported failure: {}",
        .message.as_deref().unwrap_or("no specific error message")
    )]
    VendorReported {
        message: Option<String>,
        body: String,
    },
}

impl AmarsebaError {
    pub fn reason(&self) -> FailureReason {
        match self {
            Self::Transport(_) | Self::HttpStatus { .. } => FailureReason::HttpError,
            Self::InvalidJson { .. } => FailureReason::InvalidJson,
            Self::VendorReported { .. } => FailureReason::VendorReported,
        }
    }

    /// Response body text, when the failure happened after one was received.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::Transport(_) => None,
            Self::HttpStatus { body, .. } => body.as_deref(),
            Self::InvalidJson { body, .. } | Self::VendorReported { body, .. } => Some(body),
        }
    }
}

impl<T> VendorResponse<T> {
    /// Turn a reply whose `success` flag is not `true` into
    /// [`AmarsebaError::VendorReported`].
    pub fn into_vendor_result(self) -> Result<Self, AmarsebaError> {
        if self.is_success() {
            return Ok(self);
        }
        Err(AmarsebaError::VendorReported {
            message: self.message,
            body: self.raw.to_string(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`AmarsebaClientBuilder::build`].
pub enum BuildError {
    #[error("invalid endpoint URL {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported scheme {scheme:?} in endpoint {endpoint:?} (expected http or https)")]
    UnsupportedScheme { endpoint: String, scheme: String },

    #[error("failed to build HTTP client: {0}")]
    Http(#[source] reqwest::Error),
}

#[derive(Debug, Clone)]
/// Builder for [`AmarsebaClient`].
///
/// Use this when you need to customize the endpoints, timeout, or user-agent.
pub struct AmarsebaClientBuilder {
    credentials: Credentials,
    send_endpoint: String,
    track_endpoint: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl AmarsebaClientBuilder {
    /// Create a builder with the vendor endpoints and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            track_endpoint: DEFAULT_TRACK_ENDPOINT.to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Point both operations at `<base>/send-sms` and `<base>/track-sms`.
    pub fn endpoint_base(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        let base = base.trim_end_matches('/');
        self.send_endpoint = format!("{base}/{SEND_PATH}");
        self.track_endpoint = format!("{base}/{TRACK_PATH}");
        self
    }

    /// Override the endpoint URL for `send-sms`.
    pub fn send_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.send_endpoint = endpoint.into();
        self
    }

    /// Override the endpoint URL for `track-sms`.
    pub fn track_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.track_endpoint = endpoint.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`AmarsebaClient`], validating both endpoint URLs.
    pub fn build(self) -> Result<AmarsebaClient, BuildError> {
        validate_endpoint(&self.send_endpoint)?;
        validate_endpoint(&self.track_endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder.build().map_err(BuildError::Http)?;

        Ok(AmarsebaClient {
            credentials: self.credentials,
            send_endpoint: self.send_endpoint,
            track_endpoint: self.track_endpoint,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

fn validate_endpoint(endpoint: &str) -> Result<(), BuildError> {
    let url = url::Url::parse(endpoint).map_err(|source| BuildError::InvalidEndpoint {
        endpoint: endpoint.to_owned(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(BuildError::UnsupportedScheme {
            endpoint: endpoint.to_owned(),
            scheme: scheme.to_owned(),
        }),
    }
}

#[derive(Clone)]
/// High-level e-amarseba bulk-SMS client.
///
/// Each call is one JSON POST. The client builds the body, classifies the HTTP
/// exchange, and decodes the vendor JSON. It never retries, and it never looks
/// at the vendor's own `success` flag.
pub struct AmarsebaClient {
    credentials: Credentials,
    send_endpoint: String,
    track_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for AmarsebaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmarsebaClient")
            .field("credentials", &self.credentials)
            .field("send_endpoint", &self.send_endpoint)
            .field("track_endpoint", &self.track_endpoint)
            .finish_non_exhaustive()
    }
}

impl AmarsebaClient {
    /// Create a client using the vendor endpoints.
    ///
    /// For more customization, use [`AmarsebaClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            send_endpoint: DEFAULT_SEND_ENDPOINT.to_owned(),
            track_endpoint: DEFAULT_TRACK_ENDPOINT.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> AmarsebaClientBuilder {
        AmarsebaClientBuilder::new(credentials)
    }

    /// Send one text to every contact in `request`, with masking disabled.
    ///
    /// Contacts and text are sent verbatim; length and format checks belong to
    /// the caller (see [`crate::MessageText`] and [`crate::Contact::parse_list`]).
    ///
    /// Errors:
    /// - [`AmarsebaError::Transport`] / [`AmarsebaError::HttpStatus`] for HTTP failures,
    /// - [`AmarsebaError::InvalidJson`] when a 2xx body is not JSON.
    pub async fn send_sms(&self, request: &SendSms) -> Result<SendSmsResponse, AmarsebaError> {
        tracing::debug!(
            endpoint = %self.send_endpoint,
            contacts = request.contacts().len(),
            "sending SMS"
        );

        let body = self
            .post(
                &self.send_endpoint,
                crate::transport::encode_send_sms_json(request),
            )
            .await?;

        match crate::transport::decode_send_sms_json_response(&body) {
            Ok(parsed) => Ok(parsed),
            Err(source) => Err(invalid_json(source, body)),
        }
    }

    /// Query delivery status for one track id.
    ///
    /// Errors are the same as for [`AmarsebaClient::send_sms`].
    pub async fn track_sms(&self, request: &TrackSms) -> Result<TrackSmsResponse, AmarsebaError> {
        tracing::debug!(
            endpoint = %self.track_endpoint,
            track_id = request.track_id(),
            "tracking SMS"
        );

        let body = self
            .post(
                &self.track_endpoint,
                crate::transport::encode_track_sms_json(request),
            )
            .await?;

        match crate::transport::decode_track_sms_json_response(&body) {
            Ok(parsed) => Ok(parsed),
            Err(source) => Err(invalid_json(source, body)),
        }
    }

    async fn post(&self, endpoint: &str, body: serde_json::Value) -> Result<String, AmarsebaError> {
        let mut headers = Headers::new();
        self.credentials.push_headers(&mut headers);
        headers.push((CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE.to_owned()));

        let response = self
            .http
            .post_json(endpoint, headers, body)
            .await
            .map_err(|err| {
                tracing::warn!(endpoint, error = %err, "request to vendor failed");
                AmarsebaError::Transport(err)
            })?;

        tracing::debug!(endpoint, status = response.status, "vendor responded");

        if !(200..=299).contains(&response.status) {
            tracing::warn!(endpoint, status = response.status, "unexpected HTTP status");
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(AmarsebaError::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }
}

fn invalid_json(source: serde_json::Error, body: String) -> AmarsebaError {
    tracing::warn!(error = %source, "vendor response is not valid JSON");
    AmarsebaError::InvalidJson { source, body }
}
