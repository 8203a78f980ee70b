use crate::casing::{camel_case_keys, snake_case_keys};
use crate::config::{create_http_client, Config};
use crate::error::Result;
use crate::response::{check_body, into_payload, Payload};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// A single call against the eversign API.
///
/// Holds the verb, access key, endpoint, query parameters and payload, and
/// dispatches in one of three modes:
///
/// - [`start_request`](Self::start_request): JSON body, JSON response
/// - [`start_multipart_upload`](Self::start_multipart_upload): local file as multipart form data
/// - [`start_download`](Self::start_download): response body streamed into a sink file
///
/// Every mode makes exactly one attempt.
#[derive(Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) access_key: String,
    pub(crate) endpoint: String,
    pub(crate) parameters: Vec<(String, String)>,
    pub(crate) payload: Option<Value>,
    pub(crate) upload_path: Option<PathBuf>,
    pub(crate) sink: Option<PathBuf>,
    pub(crate) config: Config,
    client: Option<Client>,
}

impl ApiRequest {
    /// Create a request for `endpoint` (relative to the API root)
    pub fn new(method: Method, access_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        ApiRequest {
            method,
            access_key: access_key.into(),
            endpoint: endpoint.into(),
            parameters: Vec::new(),
            payload: None,
            upload_path: None,
            sink: None,
            config: Config::default(),
            client: None,
        }
    }

    /// Use a shared HTTP client and configuration instead of building new ones
    pub fn with_client(mut self, client: Client, config: Config) -> Self {
        self.client = Some(client);
        self.config = config;
        self
    }

    /// Use a configuration; an HTTP client is built from it when the request is sent
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set a query parameter. Setting the same key twice keeps the first
    /// position and the last value.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        let key = key.into();
        let value = value.to_string();
        match self.parameters.iter_mut().find(|(k, _)| *k == key) {
            Some(existing) => existing.1 = value,
            None => self.parameters.push((key, value)),
        }
        self
    }

    /// Set the JSON payload. Keys are converted to snake_case when sent.
    pub fn payload<P>(mut self, payload: &P) -> Result<Self>
    where
        P: Serialize + ?Sized,
    {
        self.payload = Some(serde_json::to_value(payload)?);
        Ok(self)
    }

    /// Set the local file sent by [`start_multipart_upload`](Self::start_multipart_upload)
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.upload_path = Some(path.into());
        self
    }

    /// Set the destination file written by [`start_download`](Self::start_download)
    pub fn sink(mut self, path: impl Into<PathBuf>) -> Self {
        self.sink = Some(path.into());
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full request URL: API root + endpoint, then `access_key` followed by
    /// the parameters in the order they were set.
    ///
    /// An `access_key` parameter overrides the request's key in place.
    pub fn url(&self) -> Result<Url> {
        let mut url = self.config.endpoint_url(&self.endpoint)?;

        let access_key = self
            .parameters
            .iter()
            .find(|(k, _)| k == "access_key")
            .map_or(self.access_key.as_str(), |(_, v)| v.as_str());

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("access_key", access_key);
            for (key, value) in self.parameters.iter().filter(|(k, _)| k != "access_key") {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// The JSON body as sent: payload keys in snake_case, `None` without a payload
    pub fn json_body(&self) -> Result<Option<Vec<u8>>> {
        match &self.payload {
            Some(payload) => Ok(Some(serde_json::to_vec(&snake_case_keys(payload.clone()))?)),
            None => Ok(None),
        }
    }

    /// Send the request and decode the response into the hinted type.
    ///
    /// Response keys are converted to camelCase before decoding, so `T`
    /// should use `#[serde(rename_all = "camelCase")]`. A JSON array yields
    /// [`Payload::List`], anything else [`Payload::Single`].
    pub fn start_request<T>(&self) -> Result<Payload<T>>
    where
        T: DeserializeOwned,
    {
        into_payload(self.execute_json()?)
    }

    /// Send the request and return the response with its keys in camelCase
    pub fn start_request_value(&self) -> Result<Value> {
        Ok(camel_case_keys(self.execute_json()?))
    }

    fn execute_json(&self) -> Result<Value> {
        let client = self.http_client()?;
        let url = self.url()?;

        let mut request = client
            .request(self.method.clone(), url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(body) = self.json_body()? {
            request = request.body(body);
        }

        let start = std::time::Instant::now();
        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;
        self.log_exchange("json", status, start.elapsed());

        self.check(status, &body)
    }

    pub(crate) fn http_client(&self) -> Result<Client> {
        match &self.client {
            Some(client) => Ok(client.clone()),
            None => create_http_client(&self.config),
        }
    }

    pub(crate) fn check(&self, status: u16, body: &[u8]) -> Result<Value> {
        check_body(status, body).inspect_err(|e| {
            tracing::warn!(
                method = %self.method,
                endpoint = %self.endpoint,
                status,
                error = %e,
                "eversign request failed"
            );
        })
    }

    pub(crate) fn log_exchange(&self, mode: &str, status: u16, elapsed: Duration) {
        if self.config.debug {
            tracing::info!(mode, method = %self.method, endpoint = %self.endpoint, status, ?elapsed, "eversign request");
        } else {
            tracing::debug!(mode, method = %self.method, endpoint = %self.endpoint, status, ?elapsed, "eversign request");
        }
    }
}

// Keep the access key out of debug output
impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("method", &self.method)
            .field("access_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("parameters", &self.parameters)
            .field("payload", &self.payload)
            .field("upload_path", &self.upload_path)
            .field("sink", &self.sink)
            .finish()
    }
}
