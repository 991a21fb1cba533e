//! Monitor API client
//!
//! Scenario cleanup bypasses the UI and deletes monitors straight through
//! the console API. Deletion is best effort: a 404 for a workload with no
//! monitors or a 5xx from a mid-rollout backend must not fail the run, so
//! only a sub-200 (non-HTTP) status is treated as an error.

use std::time::Duration;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{info, warn};

use crate::error::{E2eError, E2eResult};

/// Audit identity attached to destructive API calls.
#[derive(Debug, Clone)]
pub struct Author {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: "Regression".to_string(),
            email: "regression@gmail.com".to_string(),
            message: "testing!".to_string(),
        }
    }
}

pub struct MonitorApi {
    base_url: String,
    client: reqwest::Client,
    author: Author,
}

impl MonitorApi {
    pub fn new(monitor_api_url: &str, author: Author) -> E2eResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            base_url: monitor_api_url.trim_end_matches('/').to_string(),
            client,
            author,
        })
    }

    /// Delete every monitor of a workload.
    pub async fn delete_monitors_for_workload(&self, workload_id: &str) -> E2eResult<()> {
        let url = format!("{}/monitors/{}", self.base_url, workload_id);
        info!("deleting monitors for workload '{workload_id}'");

        let mut headers = HeaderMap::new();
        headers.insert(
            "Author-Name",
            HeaderValue::from_str(&self.author.name).map_err(|e| {
                E2eError::Config(format!("invalid author name header: {e}"))
            })?,
        );
        headers.insert(
            "Author-Email",
            HeaderValue::from_str(&self.author.email).map_err(|e| {
                E2eError::Config(format!("invalid author email header: {e}"))
            })?,
        );
        headers.insert(
            "Message",
            HeaderValue::from_str(&self.author.message).map_err(|e| {
                E2eError::Config(format!("invalid message header: {e}"))
            })?,
        );

        let response = self.client.delete(&url).headers(headers).send().await?;
        let status = response.status().as_u16();

        if !(200..300).contains(&status) {
            // Tolerated; leftover monitors only widen count lower bounds.
            warn!("monitor cleanup for '{workload_id}' returned {status}");
        }
        if status < 200 {
            return Err(E2eError::Cleanup {
                workload: workload_id.to_string(),
                status,
            });
        }
        Ok(())
    }
}
