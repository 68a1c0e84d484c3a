use std::sync::Arc;
use std::time::{Duration, Instant};

use backon::BackoffBuilder;
use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::{Serialize, de::DeserializeOwned};
use tokio_util::sync::CancellationToken;

use crate::config::{BondConfig, Config};
use crate::error::{self, BondError};
use crate::limiter::RateLimiter;
use crate::retry;
use crate::usage::{UsageStats, UsageTracker};

/// Response header carrying the server-assigned request id
const HDR_REQUEST_ID: &str = "x-request-id";
/// Optional response header reporting the dollar cost of the request
const HDR_REQUEST_COST: &str = "x-request-cost";

/// The decoded outcome of one completed call, with attempt metadata
#[derive(Debug, Clone)]
pub struct Envelope<T> {
    /// Decoded response payload
    pub data: T,
    /// HTTP status code of the final attempt
    pub status: u16,
    /// Response headers of the final attempt
    pub headers: HeaderMap,
    /// Wall-clock time from first attempt to completion
    pub elapsed: Duration,
    /// Server-assigned request id, if present
    pub request_id: Option<String>,
    /// Whether the final status was 2xx (always true on the success path)
    pub success: bool,
}

impl<T> Envelope<T> {
    /// Consumes the envelope, returning the decoded payload
    pub fn into_inner(self) -> T {
        self.data
    }
}

struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    bytes: Bytes,
    elapsed: Duration,
}

/// BondMCP API client
///
/// The client is generic over a [`Config`] implementation that provides
/// authentication and retry/rate-limit policy. It is cheap to clone; clones
/// share the rate limiter and usage counters, and it may be used
/// concurrently from many tasks.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
    limiter: Option<Arc<RateLimiter>>,
    usage: Arc<UsageTracker>,
    cancel: CancellationToken,
}

impl Client<BondConfig> {
    /// Creates a client authenticated with the given API key
    ///
    /// # Errors
    ///
    /// Returns [`BondError::Authentication`] if the key is empty or
    /// whitespace-only.
    pub fn new(api_key: impl Into<String>) -> Result<Self, BondError> {
        let config = BondConfig::new().with_api_key(api_key);
        config.validate_auth()?;
        Ok(Self::with_config(config))
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// Credentials are validated lazily, on the first request.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        let limiter = config
            .rate_limit()
            .map(|rl| Arc::new(RateLimiter::new(rl.requests, rl.window)));
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(5))
                .timeout(config.timeout())
                .build()
                .expect("reqwest client"),
            config,
            limiter,
            usage: Arc::new(UsageTracker::default()),
            cancel: CancellationToken::new(),
        }
    }

    /// Replaces the HTTP client with a custom one
    ///
    /// Useful for setting proxies or other transport configuration. Note
    /// that the per-attempt timeout comes from the replaced client.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Binds a caller-supplied cancellation token
    ///
    /// When the token fires, every in-flight call on this client (permit
    /// waits, backoff waits, and network I/O included) returns
    /// [`BondError::Cancelled`] promptly and issues no further network I/O.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Returns a snapshot of this client's usage statistics
    ///
    /// Counters accumulate across all clones of this client for its
    /// lifetime and are read under the same lock that guards updates.
    #[must_use]
    pub fn usage(&self) -> UsageStats {
        let base = self.config.url("");
        self.usage
            .snapshot(self.config.user_tier(), base.trim_end_matches('/'))
    }

    pub(crate) async fn get<O: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Envelope<O>, BondError> {
        let mk = || {
            self.http
                .get(self.config.url(path))
                .headers(self.config.headers()?)
                .query(&self.config.query())
                .build()
                .map_err(build_error)
        };
        self.execute(mk).await
    }

    pub(crate) async fn get_with_query<Q, O>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Envelope<O>, BondError>
    where
        Q: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        let mk = || {
            self.http
                .get(self.config.url(path))
                .headers(self.config.headers()?)
                .query(&self.config.query())
                .query(query)
                .build()
                .map_err(build_error)
        };
        self.execute(mk).await
    }

    pub(crate) async fn post<I, O>(&self, path: &str, body: I) -> Result<Envelope<O>, BondError>
    where
        I: Serialize + Send + Sync,
        O: DeserializeOwned,
    {
        let mk = || {
            self.http
                .post(self.config.url(path))
                .headers(self.config.headers()?)
                .query(&self.config.query())
                .json(&body)
                .build()
                .map_err(build_error)
        };
        self.execute(mk).await
    }

    pub(crate) async fn delete<O: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Envelope<O>, BondError> {
        let mk = || {
            self.http
                .delete(self.config.url(path))
                .headers(self.config.headers()?)
                .query(&self.config.query())
                .build()
                .map_err(build_error)
        };
        self.execute(mk).await
    }

    /// Races a future against this client's cancellation token
    ///
    /// Biased so an already-fired token wins even when the future is
    /// immediately ready; a cancelled call never starts new I/O.
    async fn cancellable<T>(&self, fut: impl Future<Output = T>) -> Result<T, BondError> {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(BondError::Cancelled),
            out = fut => Ok(out),
        }
    }

    /// Single chokepoint for every resource method: runs the retry loop,
    /// decodes the body, and updates usage counters on success.
    async fn execute<O, M>(&self, mk: M) -> Result<Envelope<O>, BondError>
    where
        O: DeserializeOwned,
        M: Fn() -> Result<reqwest::Request, BondError> + Send + Sync,
    {
        // Validate auth before any request
        self.config.validate_auth()?;

        let raw = self.execute_raw(mk).await?;

        // A malformed 2xx body is never retried; the server already answered.
        let data: O = serde_json::from_slice(&raw.bytes)
            .map_err(|e| error::map_deser(&e, &raw.bytes))?;

        self.usage.record(parse_cost(&raw.headers));

        let request_id = raw
            .headers
            .get(HDR_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        Ok(Envelope {
            data,
            status: raw.status.as_u16(),
            success: raw.status.is_success(),
            headers: raw.headers,
            elapsed: raw.elapsed,
            request_id,
        })
    }

    async fn execute_raw<M>(&self, mk: M) -> Result<RawResponse, BondError>
    where
        M: Fn() -> Result<reqwest::Request, BondError> + Send + Sync,
    {
        let mut backoff =
            retry::backoff_policy(self.config.retry_delay(), self.config.max_retries()).build();
        let logging = self.config.logging();
        let started = Instant::now();
        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            // Each attempt re-acquires a rate-limit permit; the wait observes
            // cancellation and performs no I/O when it fires.
            if let Some(limiter) = &self.limiter {
                self.cancellable(limiter.acquire()).await?;
            }

            // Descriptor build/serialization failures are caller bugs, not
            // transient faults; they surface without retry.
            let request = mk()?;
            let target = logging.then(|| {
                (
                    request.method().clone(),
                    request.url().path().to_owned(),
                )
            });

            let err = match self.cancellable(self.http.execute(request)).await? {
                Ok(response) => {
                    let status = response.status();
                    let headers = response.headers().clone();
                    match self.cancellable(response.bytes()).await? {
                        Ok(bytes) if status.is_success() => {
                            let elapsed = started.elapsed();
                            if let Some((method, path)) = &target {
                                tracing::debug!(
                                    %method,
                                    path = %path,
                                    attempt,
                                    status = status.as_u16(),
                                    elapsed_ms = elapsed.as_millis() as u64,
                                    "request completed"
                                );
                            }
                            return Ok(RawResponse {
                                status,
                                headers,
                                bytes,
                                elapsed,
                            });
                        }
                        Ok(bytes) => error::classify(status, &bytes),
                        Err(e) => BondError::Transport {
                            attempts: attempt,
                            source: e,
                        },
                    }
                }
                Err(e) => BondError::Transport {
                    attempts: attempt,
                    source: e,
                },
            };

            if !err.is_retryable() {
                return Err(err);
            }

            // Retry budget exhausted: surface the last classified error. A
            // transport error already carries the final attempt count.
            let Some(delay) = backoff.next() else {
                return Err(err);
            };

            // A server retry-after hint wins over the computed backoff when larger.
            let wait = err.retry_after().map_or(delay, |hint| hint.max(delay));

            if let Some((method, path)) = &target {
                tracing::warn!(
                    %method,
                    path = %path,
                    attempt,
                    error = %err,
                    wait_ms = wait.as_millis() as u64,
                    "attempt failed; retrying"
                );
            }

            self.cancellable(tokio::time::sleep(wait)).await?;
        }
    }
}

fn build_error(e: reqwest::Error) -> BondError {
    BondError::Validation {
        message: format!("failed to build request: {e}"),
        field: None,
    }
}

fn parse_cost(headers: &HeaderMap) -> f64 {
    headers
        .get(HDR_REQUEST_COST)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|c| c.is_finite() && *c >= 0.0)
        .unwrap_or(0.0)
}
