use std::env;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Response, header};
use serde::Deserialize;
use url::Url;

use crate::client_logger::ClientLogger;
use crate::error::{Error, Result};
use crate::observability::{CLIENT_REQUEST_DURATION, CLIENT_REQUEST_ERRORS, CLIENT_REQUESTS};
use crate::types::{GenerateContentRequest, GenerateContentResponse, Model};

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

/// Client for the Generative Language API.
///
/// The credential travels as the `key` query parameter of every request,
/// which is how this endpoint authenticates. By default no request timeout
/// is configured and a call waits indefinitely for the remote endpoint;
/// pass one through [`Gemini::with_options`] to opt in.
#[derive(Clone)]
pub struct Gemini {
    api_key: String,
    client: ReqwestClient,
    base_url: String,
    logger: Option<Arc<dyn ClientLogger>>,
}

impl Gemini {
    /// Create a new Gemini client.
    ///
    /// The API key can be provided directly or read from the GEMINI_API_KEY
    /// environment variable.
    pub fn new(api_key: Option<String>) -> Result<Self> {
        Self::with_options(api_key, None, None)
    }

    /// Create a new client with custom settings.
    pub fn with_options(
        api_key: Option<String>,
        base_url: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let api_key = match api_key {
            Some(key) => key,
            None => env::var("GEMINI_API_KEY").map_err(|_| {
                Error::authentication(
                    "API key not provided and GEMINI_API_KEY environment variable not set",
                )
            })?,
        };

        let mut builder = ReqwestClient::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            Error::http_client(
                format!("Failed to build HTTP client: {}", e),
                Some(Box::new(e)),
            )
        })?;

        Ok(Self {
            api_key,
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            logger: None,
        })
    }

    /// Attach a logger that observes every request, response, and error.
    pub fn with_logger(mut self, logger: Arc<dyn ClientLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Create and return default headers for API requests.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Build the `generateContent` endpoint URL for a model, with the
    /// credential attached as the `key` query parameter.
    fn endpoint(&self, model: &Model) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;
        let mut url = base.join(&format!("models/{}:generateContent", model))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }

    /// Process API response errors and convert to our Error type
    async fn process_error_response(response: Response) -> Error {
        let status_code = response.status().as_u16();

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|val| val.to_str().ok())
            .and_then(|val| val.parse::<u64>().ok());

        let error_body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Error::http_client(
                    format!("Failed to read error response: {}", e),
                    Some(Box::new(e)),
                );
            }
        };

        classify_error(status_code, retry_after, &error_body)
    }

    /// Send a `generateContent` request and return the parsed response.
    ///
    /// A response that arrives with a 2xx status but does not match the
    /// documented schema is reported as a serialization error rather than
    /// surfacing as a missing-field panic downstream.
    pub async fn generate(
        &self,
        model: &Model,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint(model)?;

        if let Some(logger) = &self.logger {
            logger.log_request(model, &request);
        }
        CLIENT_REQUESTS.click();
        let start = Instant::now();

        let outcome = self
            .client
            .post(url)
            .headers(self.default_headers())
            .json(&request)
            .send()
            .await;
        CLIENT_REQUEST_DURATION.add(start.elapsed().as_secs_f64());

        let response = match outcome {
            Ok(response) => response,
            Err(e) => {
                let err = if e.is_timeout() {
                    Error::timeout(format!("Request timed out: {}", e))
                } else if e.is_connect() {
                    Error::connection(format!("Connection error: {}", e), Some(Box::new(e)))
                } else {
                    Error::http_client(format!("Request failed: {}", e), Some(Box::new(e)))
                };
                return Err(self.observe_error(err));
            }
        };

        if !response.status().is_success() {
            let err = Self::process_error_response(response).await;
            return Err(self.observe_error(err));
        }

        match response.json::<GenerateContentResponse>().await {
            Ok(parsed) => {
                if let Some(logger) = &self.logger {
                    logger.log_response(&parsed);
                }
                Ok(parsed)
            }
            Err(e) => {
                let err = Error::serialization(
                    format!("malformed response body: {}", e),
                    Some(Box::new(e)),
                );
                Err(self.observe_error(err))
            }
        }
    }

    fn observe_error(&self, err: Error) -> Error {
        CLIENT_REQUEST_ERRORS.click();
        if let Some(logger) = &self.logger {
            logger.log_error(&err);
        }
        err
    }
}

impl std::fmt::Debug for Gemini {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gemini")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Map an error response's status code and payload to an [`Error`].
///
/// The endpoint reports failures as `{"error": {"code", "message",
/// "status"}}`; the message is preserved verbatim so callers can surface
/// exactly what the API said.
fn classify_error(status_code: u16, retry_after: Option<u64>, body: &str) -> Error {
    #[derive(Deserialize)]
    struct ErrorResponse {
        error: Option<ErrorDetail>,
    }

    #[derive(Deserialize)]
    struct ErrorDetail {
        message: Option<String>,
        status: Option<String>,
    }

    let parsed = serde_json::from_str::<ErrorResponse>(body).ok();
    let detail = parsed.and_then(|e| e.error);
    let status = detail.as_ref().and_then(|e| e.status.clone());
    let message = detail
        .and_then(|e| e.message)
        .unwrap_or_else(|| body.to_string());

    match status_code {
        400 => Error::bad_request(message),
        401 => Error::authentication(message),
        403 => Error::permission(message),
        404 => Error::not_found(message),
        408 => Error::timeout(message),
        429 => Error::rate_limit(message, retry_after),
        500 => Error::internal_server(message),
        502..=504 => Error::service_unavailable(message, retry_after),
        _ => Error::api(status_code, status, message),
    }
}
