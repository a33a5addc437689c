//! Platform-abstracted HTTP client with Send-safe futures.
//!
//! On WASM, `reqwest::Response` is not `Send` because it wraps JS values, so:
//! - On **native**: reqwest is awaited directly
//! - On **WASM**: the request runs on the JS thread via `wasm_bindgen_futures::spawn_local`
//!   and the result comes back through a `flume` channel
//!
//! Only what the sign-in flow needs is exposed: JSON `POST` requests.

use std::collections::HashMap;

use thiserror::Error;

/// A simplified HTTP response that contains only Send-safe data.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Attempt to deserialize the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level failure: the request never produced a response.
#[derive(Debug, Clone, Error)]
#[error("HTTP error: {message}")]
pub struct HttpError {
    pub message: String,
}

impl HttpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

/// A builder for `POST` requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
}

impl RequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the request body as JSON and mark it with `Content-Type: application/json`.
    pub fn json<T: serde::Serialize>(mut self, value: &T) -> Result<Self, serde_json::Error> {
        let json_bytes = serde_json::to_vec(value)?;
        self.body = Some(json_bytes);
        Ok(self.header("Content-Type", "application/json"))
    }

    /// Send the request and return a Send-safe future.
    pub async fn send(self) -> HttpResult<Response> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            execute(self.url, self.headers, self.body).await
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.send_wasm().await
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_wasm(self) -> HttpResult<Response> {
        // flume channels are Send-safe, so this future is Send
        let (tx, rx) = flume::bounded::<HttpResult<Response>>(1);

        let Self { url, headers, body } = self;

        wasm_bindgen_futures::spawn_local(async move {
            let result = execute(url, headers, body).await;
            // Receiver may be gone if the caller was dropped
            let _ = tx.send_async(result).await;
        });

        rx.recv_async()
            .await
            .map_err(|_| HttpError::new("Request cancelled"))?
    }
}

async fn execute(
    url: String,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
) -> HttpResult<Response> {
    let client = reqwest::Client::new();
    let mut request = client.post(&url);

    for (name, value) in &headers {
        request = request.header(name, value);
    }

    if let Some(body) = body {
        request = request.body(body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?;

    let status = response.status().as_u16();

    let body = response
        .bytes()
        .await
        .map_err(|e| HttpError::new(e.to_string()))?
        .to_vec();

    Ok(Response { status, body })
}

/// HTTP client with Send-safe futures on all platforms.
///
/// ```ignore
/// use signin_business::http::Client;
///
/// async fn sign_in(credentials: &Credentials) {
///     let response = Client::post("https://dummyjson.com/auth/login")
///         .json(credentials)?
///         .send()
///         .await?;
/// }
/// ```
pub struct Client;

impl Client {
    /// Create a POST request.
    pub fn post(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }
}
