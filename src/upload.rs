use crate::error::{EversignError, Result};
use crate::request::ApiRequest;
use crate::response::{into_payload, Payload};
use reqwest::blocking::multipart::Form;
use serde::de::DeserializeOwned;
use std::time::Instant;

/// Name of the form part carrying the file
pub const UPLOAD_FIELD: &str = "upload";

impl ApiRequest {
    /// Send the file set with [`file`](Self::file) as multipart form data.
    ///
    /// The file is streamed from disk under the `upload` part with its file
    /// name. The response follows the same contract as
    /// [`start_request`](Self::start_request). A missing file fails before
    /// anything is sent.
    pub fn start_multipart_upload<T>(&self) -> Result<Payload<T>>
    where
        T: DeserializeOwned,
    {
        let path = self.upload_path.as_ref().ok_or_else(|| {
            EversignError::InvalidArgument("a file path is required for a multipart upload".to_string())
        })?;

        let form = Form::new().file(UPLOAD_FIELD, path)?;
        let client = self.http_client()?;
        let url = self.url()?;

        tracing::debug!(endpoint = %self.endpoint, path = %path.display(), "uploading file");

        let start = Instant::now();
        let response = client.request(self.method.clone(), url).multipart(form).send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;
        self.log_exchange("multipart", status, start.elapsed());

        into_payload(self.check(status, &body)?)
    }
}
