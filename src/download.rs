use crate::error::{EversignError, Result};
use crate::request::ApiRequest;
use reqwest::header::CONTENT_TYPE;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Outcome of a completed download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadInfo {
    /// Where the body was written
    pub path: PathBuf,
    /// Number of bytes written
    pub bytes: u64,
    /// Content-Type reported by the server
    pub content_type: Option<String>,
}

impl ApiRequest {
    /// Stream the response body into the file set with [`sink`](Self::sink).
    ///
    /// Fails with [`EversignError::MissingSink`] before any I/O when no sink
    /// is set. Error statuses and JSON failure envelopes are reported as
    /// errors and leave no file behind; a transfer that breaks midway
    /// removes the partial file.
    pub fn start_download(&self) -> Result<DownloadInfo> {
        let sink = self.sink.as_ref().ok_or(EversignError::MissingSink)?;
        let client = self.http_client()?;
        let url = self.url()?;

        let start = Instant::now();
        let mut response = client.request(self.method.clone(), url).send()?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let is_json = content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("application/json"));

        if status >= 400 || is_json {
            let body = response.bytes()?;
            self.log_exchange("download", status, start.elapsed());
            self.check(status, &body)?;

            write_sink(sink, |file| Ok(file.write_all(&body)?))?;
            return Ok(DownloadInfo {
                path: sink.clone(),
                bytes: body.len() as u64,
                content_type,
            });
        }

        let bytes = write_sink(sink, |file| Ok(response.copy_to(file)?))?;
        self.log_exchange("download", status, start.elapsed());

        Ok(DownloadInfo {
            path: sink.clone(),
            bytes,
            content_type,
        })
    }
}

/// Create the sink, fill it with `write`, and flush it. On any failure the
/// partial file is removed.
fn write_sink<T, F>(sink: &Path, write: F) -> Result<T>
where
    F: FnOnce(&mut File) -> Result<T>,
{
    let mut file = create_sink(sink)?;
    let written = write(&mut file).and_then(|value| {
        file.flush()?;
        Ok(value)
    });
    if written.is_err() {
        drop(file);
        let _ = fs::remove_file(sink);
    }
    written
}

fn create_sink(sink: &Path) -> Result<File> {
    if let Some(parent) = sink.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(File::create(sink)?)
}
