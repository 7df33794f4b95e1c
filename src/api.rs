//! Merge service client
//!
//! Thin reqwest wrapper around the single endpoint this application
//! talks to: `POST {base}/merge`. The request is a multipart form with
//! repeated `files[]` parts, one per queued file, in queue order — the
//! server preserves that order as the page order of the merged document.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::logic::merge::MergePart;

/// Error body the merge service returns on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct MergeClient {
    base_url: String,
    client: Client,
}

impl MergeClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit the queued files and return the merged document bytes.
    ///
    /// Reads each part's bytes from disk at send time, so the request
    /// reflects the files as they are when the user triggers the merge.
    /// A non-success status is turned into an error carrying the
    /// server's `error` field when the body is the expected JSON shape,
    /// or a generic message otherwise.
    pub async fn merge(&self, parts: &[MergePart]) -> Result<Vec<u8>> {
        let url = format!("{}/merge", self.base_url);

        let mut form = reqwest::multipart::Form::new();
        for part in parts {
            let bytes = tokio::fs::read(&part.path)
                .await
                .with_context(|| format!("Failed to read {}", part.path.display()))?;
            let file_part = reqwest::multipart::Part::bytes(bytes)
                .file_name(part.file_name.clone())
                .mime_str("application/pdf")
                .context("Invalid part metadata")?;
            form = form.part("files[]", file_part);
        }

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Failed to reach merge endpoint")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("Merge failed (HTTP {})", status.as_u16()));
            anyhow::bail!("{}", message);
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read merged document")?;
        Ok(bytes.to_vec())
    }
}
