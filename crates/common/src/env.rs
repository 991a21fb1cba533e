//! Deployment environment profiles
//!
//! Each target deployment of the console (local dev cluster, minikube,
//! production ingress) gets a fully-populated, immutable `Env` record. A
//! profile is resolved once at suite start from a string tag and injected
//! explicitly into the session and runner; there is no ambient global.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Minimum log level the console frontend is configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Error,
}

/// Data-resolution caps for the monitor graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxResolution {
    pub view_mode: u32,
    pub edit_mode: u32,
}

/// One target deployment of the console under test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Env {
    pub production: bool,
    pub min_log_level: LogLevel,
    pub default_http_timeout_ms: u64,

    // Feature flags
    pub convert_to_rate_enabled: bool,
    pub muting_enabled: bool,
    pub monitor_edit_enabled: bool,
    /// The backend does not support saved monitor rules yet.
    pub rule_creation_enabled: bool,
    pub show_cluster_map: bool,

    // Tuning
    pub num_data_samples: u32,
    pub default_namespace: String,
    pub graph_transition_duration_ms: u64,
    /// Seconds after which daemonized data is refreshed.
    pub data_refresh_interval_secs: u64,
    pub max_resolution: MaxResolution,

    // Endpoints
    /// Base URL the browser is pointed at.
    pub console_url: String,
    pub prometheus_api_url: String,
    pub grafana_url: String,
    pub monitor_api_url: String,
    pub kubernetes_url: String,
    pub document_root_url: String,
}

impl Env {
    /// Shared defaults every profile starts from.
    fn base() -> Self {
        Self {
            production: false,
            min_log_level: LogLevel::Info,
            default_http_timeout_ms: 10_000,
            convert_to_rate_enabled: true,
            muting_enabled: false,
            monitor_edit_enabled: true,
            rule_creation_enabled: false,
            show_cluster_map: true,
            num_data_samples: 360,
            default_namespace: "all".to_string(),
            graph_transition_duration_ms: 500,
            data_refresh_interval_secs: 10,
            max_resolution: MaxResolution {
                view_mode: 10,
                edit_mode: 10,
            },
            console_url: "http://localhost:4200".to_string(),
            prometheus_api_url: "http://192.168.99.100:30090/api/v1/".to_string(),
            grafana_url:
                "http://192.168.99.100:30030/dashboard/script/exporter-async.js".to_string(),
            monitor_api_url: "http://192.168.99.100:30080/service/console-api".to_string(),
            kubernetes_url: "http://192.168.99.100:30000/".to_string(),
            document_root_url:
                "https://developer.lightbend.com/docs/enterprisesuiteconsole/beta/user-guide/index.html"
                    .to_string(),
        }
    }

    /// Local development profile (console served by `ng serve`).
    pub fn local() -> Self {
        Self {
            monitor_api_url: "http://192.168.99.100:30080/service/console-api/".to_string(),
            grafana_url:
                "http://192.168.99.100:30080/service/grafana/dashboard/script/exporter-async.js"
                    .to_string(),
            ..Self::base()
        }
    }

    /// Minikube NodePort profile.
    pub fn minikube() -> Self {
        Self {
            console_url: "http://192.168.99.100:30080".to_string(),
            ..Self::base()
        }
    }

    /// Production ingress profile; all console services are reached through
    /// relative paths behind the same nginx front.
    pub fn prod() -> Self {
        Self {
            production: true,
            convert_to_rate_enabled: false,
            prometheus_api_url: "service/prometheus/api/v1/".to_string(),
            monitor_api_url: "service/console-api/".to_string(),
            grafana_url: "service/grafana/dashboard/script/exporter-async.js".to_string(),
            ..Self::base()
        }
    }

    /// Resolve a configuration tag to a profile.
    ///
    /// An unrecognized or empty tag resolves to the local profile rather
    /// than failing, matching how the console's own configuration selection
    /// behaves.
    pub fn resolve(tag: &str) -> Self {
        match tag {
            "minikube" => Self::minikube(),
            "prod" => Self::prod(),
            _ => Self::local(),
        }
    }

    /// Load a profile from a TOML override file, falling back to the local
    /// profile when the file does not exist.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let env: Self = toml::from_str(&content)?;
            Ok(env)
        } else {
            Ok(Self::local())
        }
    }
}
