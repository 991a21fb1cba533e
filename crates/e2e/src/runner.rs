//! Scenario runner that orchestrates the driver over the scenario registry

use std::path::PathBuf;
use std::time::Instant;

use console_common::Env;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::driver::{Driver, ExpectedFailure};
use crate::error::{E2eError, E2eResult};
use crate::issues::KnownIssue;
use crate::scenarios;
use crate::session::Session;

/// A registered scenario. `build` records the UI steps against a fresh
/// session; it must not touch the network itself.
#[derive(Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub tags: &'static [&'static str],
    /// Set when the whole scenario is unrunnable until the issue is fixed,
    /// as opposed to individual assertions guarded inside the recording.
    pub skip: Option<KnownIssue>,
    pub build: fn(&mut Session),
}

impl Scenario {
    pub fn record(&self, env: &Env) -> Session {
        let mut session = Session::new(env.clone());
        (self.build)(&mut session);
        session
    }
}

/// Result of running a single scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub success: bool,
    pub skipped: bool,
    pub skip_reason: Option<String>,
    pub duration_ms: u64,
    pub expected_failures: Vec<ExpectedFailure>,
    pub error: Option<String>,
}

/// Result of running a set of scenarios
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub started_at: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub duration_ms: u64,
    pub results: Vec<ScenarioResult>,
}

/// Drives registered scenarios through the browser against one deployment.
pub struct ScenarioRunner {
    driver: Driver,
    env: Env,
    output_dir: PathBuf,
}

impl ScenarioRunner {
    pub fn new(driver: Driver, env: Env, output_dir: PathBuf) -> Self {
        Self {
            driver,
            env,
            output_dir,
        }
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    /// Run every registered scenario.
    pub async fn run_all(&self) -> E2eResult<SuiteResult> {
        self.run_scenarios(&scenarios::all()).await
    }

    /// Run scenarios matching a tag.
    pub async fn run_tagged(&self, tag: &str) -> E2eResult<SuiteResult> {
        let filtered: Vec<Scenario> = scenarios::all()
            .into_iter()
            .filter(|s| s.tags.contains(&tag))
            .collect();
        self.run_scenarios(&filtered).await
    }

    /// Run a specific scenario by name.
    pub async fn run_named(&self, name: &str) -> E2eResult<SuiteResult> {
        let scenario = scenarios::all()
            .into_iter()
            .find(|s| s.name == name)
            .ok_or_else(|| E2eError::ScenarioNotFound(name.to_string()))?;
        self.run_scenarios(&[scenario]).await
    }

    /// Run a list of scenarios and aggregate the results.
    pub async fn run_scenarios(&self, list: &[Scenario]) -> E2eResult<SuiteResult> {
        let start = Instant::now();
        let started_at = chrono::Utc::now().to_rfc3339();
        let mut results = Vec::new();
        let mut passed = 0;
        let mut failed = 0;
        let mut skipped = 0;

        info!("Running {} scenario(s)...", list.len());

        for scenario in list {
            let result = self.run_scenario(scenario).await;
            if result.skipped {
                skipped += 1;
                warn!(
                    "- {} skipped: {}",
                    result.name,
                    result.skip_reason.as_deref().unwrap_or("unknown reason")
                );
            } else if result.success {
                passed += 1;
                if result.expected_failures.is_empty() {
                    info!("✓ {} ({} ms)", result.name, result.duration_ms);
                } else {
                    info!(
                        "✓ {} ({} ms, {} expected failure(s))",
                        result.name,
                        result.duration_ms,
                        result.expected_failures.len()
                    );
                }
            } else {
                failed += 1;
                error!(
                    "✗ {} - {}",
                    result.name,
                    result.error.as_deref().unwrap_or("unknown error")
                );
            }
            results.push(result);
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        info!("");
        info!(
            "Scenario results: {} passed, {} failed, {} skipped ({} ms)",
            passed, failed, skipped, duration_ms
        );

        Ok(SuiteResult {
            started_at,
            total: list.len(),
            passed,
            failed,
            skipped,
            duration_ms,
            results,
        })
    }

    /// Run a single scenario: record its steps, then hand the recording to
    /// the driver. Driver-level failures become a failed result rather than
    /// aborting the suite.
    pub async fn run_scenario(&self, scenario: &Scenario) -> ScenarioResult {
        if let Some(issue) = scenario.skip {
            return ScenarioResult {
                name: scenario.name.to_string(),
                success: false,
                skipped: true,
                skip_reason: Some(format!("{}: {}", issue.id, issue.summary)),
                duration_ms: 0,
                expected_failures: Vec::new(),
                error: None,
            };
        }

        let start = Instant::now();
        debug!("Running scenario: {}", scenario.name);

        let session = scenario.record(&self.env);
        let outcome = self.driver.run(session.recorded()).await;
        let duration_ms = start.elapsed().as_millis() as u64;

        match outcome {
            Ok(report) => {
                for failure in &report.expected_failures {
                    warn!(
                        "  expected failure [{}] in {}: {}",
                        failure.issue, scenario.name, failure.error
                    );
                }
                ScenarioResult {
                    name: scenario.name.to_string(),
                    success: true,
                    skipped: false,
                    skip_reason: None,
                    duration_ms,
                    expected_failures: report.expected_failures,
                    error: None,
                }
            }
            Err(e) => ScenarioResult {
                name: scenario.name.to_string(),
                success: false,
                skipped: false,
                skip_reason: None,
                duration_ms,
                expected_failures: Vec::new(),
                error: Some(e.to_string()),
            },
        }
    }

    /// Write suite results to a JSON file in the output directory.
    pub fn write_results(&self, results: &SuiteResult) -> E2eResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join("test-results.json");
        let json = serde_json::to_string_pretty(results)?;
        std::fs::write(&path, json)?;

        info!("Results written to: {}", path.display());
        Ok(path)
    }
}
