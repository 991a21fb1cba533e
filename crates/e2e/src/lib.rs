//! Enterprise Suite Console E2E Framework
//!
//! This crate drives browser scenarios against a running Enterprise Suite
//! console and validates the rendered state:
//! - Page-object helpers record typed UI steps into a `Session`
//! - Recorded steps render to a Playwright script executed via `node`
//! - Known console defects are tagged per assertion and reported as
//!   expected failures instead of aborting the scenario
//! - Monitor cleanup goes straight to the console API, bypassing the UI
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Scenario Runner (Rust)                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ScenarioRunner                                              │
//! │    ├── wait_until_ready(env) -> console reachable           │
//! │    ├── run_scenario(Scenario) -> ScenarioResult             │
//! │    └── write_results() -> test-results.json                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Session (step recorder, Env injected)                      │
//! │    ├── pages::navigation / action / form / health / ...     │
//! │    └── known_issue(issue, |s| ...) -> expected failure      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Driver                                                      │
//! │    ├── build_script(&[Recorded]) -> Playwright JS           │
//! │    └── run(&[Recorded]) -> RunReport                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod console;
pub mod driver;
pub mod error;
pub mod issues;
pub mod pages;
pub mod runner;
pub mod scenarios;
pub mod session;
pub mod step;

pub use driver::{Browser, Driver, DriverConfig, RunReport};
pub use error::{E2eError, E2eResult};
pub use issues::KnownIssue;
pub use runner::{Scenario, ScenarioRunner, ScenarioResult, SuiteResult};
pub use session::Session;
pub use step::UiStep;
