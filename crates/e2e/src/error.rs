//! Error types for the E2E suite

use thiserror::Error;

#[derive(Error, Debug)]
pub enum E2eError {
    #[error("node not found. The scenario driver runs generated Playwright scripts with node; install it and `npm i playwright`")]
    NodeNotFound,

    #[error("console not reachable after {0} attempts")]
    ConsoleNotReady(usize),

    #[error("browser script failed: {0}")]
    Script(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("monitor cleanup failed for '{workload}': status {status}")]
    Cleanup { workload: String, status: u16 },

    #[error("scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type E2eResult<T> = Result<T, E2eError>;
