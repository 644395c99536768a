//! Client layer: the request/response/error-classification pipeline.

use std::error::Error as StdError;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::{Map, Value};
use url::Url;

use crate::config;
use crate::domain::{ApiError, ApiErrorKind, ApiKey, ValidationError};
use crate::resources::{Rejects, Users};
use crate::transport::{self, TransportError};

/// Production endpoint root.
const DEFAULT_ROOT: &str = "https://mandrillapp.com/api/1.0";

/// Connect timeout applied to every call. Fixed policy, not configurable.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
/// Overall per-call timeout. Fixed policy, not configurable.
const CALL_TIMEOUT: Duration = Duration::from_secs(600);

const USER_AGENT: &str = concat!("mandrill-rs/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_json(
        &self,
        url: &str,
        body: &str,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_json(
        &self,
        url: &str,
        body: &str,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body.to_owned())
            .send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

/// Per-call diagnostics sink.
///
/// The client consults [`DebugSink::enabled`] before formatting any line, so
/// a disabled sink costs nothing per call. Implementations receive the
/// outgoing URL and body, the elapsed time, and the raw response body as
/// plain-text lines; swapping sinks never changes call semantics.
pub trait DebugSink: Send + Sync {
    /// Whether diagnostic lines should be produced at all.
    fn enabled(&self) -> bool {
        true
    }

    /// Receive one diagnostic line.
    fn line(&self, message: &str);
}

/// Default sink: reports itself disabled and drops everything.
struct DisabledSink;

impl DebugSink for DisabledSink {
    fn enabled(&self) -> bool {
        false
    }

    fn line(&self, _message: &str) {}
}

#[derive(Debug, Clone, Copy, Default)]
/// Sink that prints each diagnostic line to stderr.
pub struct StderrSink;

impl DebugSink for StderrSink {
    fn line(&self, message: &str) {
        eprintln!("{message}");
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Sink that forwards each diagnostic line to the `log` facade at debug
/// level, under the `mandrill` target.
pub struct LogSink;

impl DebugSink for LogSink {
    fn line(&self, message: &str) {
        log::debug!(target: "mandrill", "{message}");
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors surfaced by [`MandrillClient`].
///
/// Every failure propagates to the immediate caller; the client never
/// retries or suppresses one. Retry and backoff policy belong to the
/// integration layer.
pub enum MandrillError {
    /// No API key was found in the argument, environment, or key files.
    #[error(
        "no Mandrill API key available (pass one explicitly, set {env}, or create a key file)",
        env = config::ENV_API_KEY
    )]
    MissingApiKey,

    /// The blocking HTTP client could not be constructed.
    #[error("failed to initialize HTTP transport: {0}")]
    TransportInit(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured root URL is not a valid absolute URL.
    #[error("invalid API root URL: {0}")]
    InvalidRoot(#[from] url::ParseError),

    /// Network-level failure (connect, timeout, TLS, ...) while performing a
    /// call.
    #[error("API call to {path} failed: {source}")]
    Http {
        path: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The response body could not be decoded as JSON. Carries the raw body
    /// for diagnosis.
    #[error("unable to decode JSON response: {body}")]
    Decode {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    /// A failure status arrived with a body that does not follow the
    /// documented error shape. Carries the decoded body.
    #[error("unexpected error response: {body}")]
    UnexpectedResponse { body: Value },

    /// The API reported a structured error (mapped kind or generic
    /// fallback).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A decoded value did not match the shape documented for the endpoint,
    /// or the parameter map could not be serialized.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// A domain constructor rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<TransportError> for MandrillError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Json(source) => Self::Parse(Box::new(source)),
        }
    }
}

#[derive(Clone)]
/// Builder for [`MandrillClient`].
///
/// Use this to override the API root (tests against a local server) or to
/// attach a diagnostics sink.
pub struct MandrillClientBuilder {
    api_key: Option<String>,
    root: String,
    sink: Option<Arc<dyn DebugSink>>,
}

impl MandrillClientBuilder {
    /// Create a builder with the production root and diagnostics disabled.
    pub fn new() -> Self {
        Self {
            api_key: None,
            root: DEFAULT_ROOT.to_owned(),
            sink: None,
        }
    }

    /// Use this key instead of consulting the environment or key files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API root URL.
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.root = root.into();
        self
    }

    /// Enable or disable per-call diagnostics on stderr.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.sink = enabled.then(|| Arc::new(StderrSink) as Arc<dyn DebugSink>);
        self
    }

    /// Install a custom diagnostics sink.
    pub fn debug_sink(mut self, sink: impl DebugSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Resolve the API key, normalize the root, and build the HTTP
    /// transport.
    pub fn build(self) -> Result<MandrillClient, MandrillError> {
        let api_key = config::resolve_api_key(&config::default_sources(self.api_key))?;

        Url::parse(&self.root)?;
        let mut root = self.root.trim_end_matches('/').to_owned();
        root.push('/');

        let sink = self.sink.unwrap_or_else(|| Arc::new(DisabledSink));

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(CALL_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .connection_verbose(sink.enabled())
            .build()
            .map_err(|err| MandrillError::TransportInit(Box::new(err)))?;

        Ok(MandrillClient {
            api_key,
            root,
            http: Arc::new(ReqwestTransport { client }),
            debug: sink,
        })
    }
}

impl Default for MandrillClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
/// Synchronous Mandrill API client.
///
/// Owns the resolved API key and a pooled blocking HTTP transport reused
/// across calls. The transport is internally synchronized, so the client can
/// be cloned and shared across threads; each call still performs exactly one
/// HTTP request with no retrying.
pub struct MandrillClient {
    api_key: ApiKey,
    root: String,
    http: Arc<dyn HttpTransport>,
    debug: Arc<dyn DebugSink>,
}

impl std::fmt::Debug for MandrillClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MandrillClient")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl MandrillClient {
    /// Create a client with an explicit API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self, MandrillError> {
        Self::builder().api_key(api_key).build()
    }

    /// Create a client resolving the key from `MANDRILL_APIKEY` or the
    /// well-known key files (`~/.mandrill.key`, `/etc/mandrill.key`).
    pub fn from_env() -> Result<Self, MandrillError> {
        Self::builder().build()
    }

    /// Start building a client with custom settings.
    pub fn builder() -> MandrillClientBuilder {
        MandrillClientBuilder::new()
    }

    /// Rejection-blacklist operations (`rejects/*`).
    pub fn rejects(&self) -> Rejects<'_> {
        Rejects::new(self)
    }

    /// Account-level operations (`users/*`).
    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// Execute one API call.
    ///
    /// The resolved API key is injected into `params` under the reserved
    /// `"key"` field, overwriting any caller-supplied value, and the map is
    /// POSTed as JSON to `<root><path>.json`.
    ///
    /// On a 2xx/3xx status the decoded body is returned unchanged, whatever
    /// its shape (object, array, or scalar). A status of 400 or above is
    /// classified through the error map into [`MandrillError::Api`], or
    /// [`MandrillError::UnexpectedResponse`] when the body does not follow
    /// the documented error shape.
    pub fn call(&self, path: &str, params: Map<String, Value>) -> Result<Value, MandrillError> {
        let url = format!("{}{}.json", self.root, path);
        let body = transport::encode_call_body(&self.api_key, params)?;

        let debug = self.debug.enabled();
        if debug {
            self.debug.line(&format!("Call to {url}: {body}"));
        }

        let start = Instant::now();
        let response = self
            .http
            .post_json(&url, &body)
            .map_err(|source| MandrillError::Http {
                path: path.to_owned(),
                source,
            })?;

        if debug {
            let elapsed = start.elapsed().as_secs_f64() * 1000.0;
            self.debug.line(&format!("Completed in {elapsed:.2}ms"));
            self.debug.line(&format!("Got response: {}", response.body));
        }

        let decoded: Value =
            serde_json::from_str(&response.body).map_err(|source| MandrillError::Decode {
                body: response.body.clone(),
                source,
            })?;

        if response.status >= 400 {
            return Err(cast_error(decoded));
        }

        Ok(decoded)
    }
}

/// Classify a decoded failure body into a typed error.
///
/// A known `name` selects its mapped [`ApiErrorKind`]; an unknown name
/// degrades to [`ApiErrorKind::Generic`] with the message and code
/// preserved. A body that does not match the documented shape at all becomes
/// [`MandrillError::UnexpectedResponse`].
fn cast_error(decoded: Value) -> MandrillError {
    match transport::decode_error_body(&decoded) {
        Some(body) if body.status == "error" && !body.name.is_empty() => {
            let kind = ApiErrorKind::from_name(&body.name).unwrap_or(ApiErrorKind::Generic);
            MandrillError::Api(ApiError {
                kind,
                message: body.message,
                code: body.code,
            })
        }
        _ => MandrillError::UnexpectedResponse { body: decoded },
    }
}
