//! Scenario registry
//!
//! Each submodule covers one console page or monitor workflow and exposes
//! its scenarios as plain [`Scenario`] values. `all` is the single
//! registration point the runner iterates.

use crate::runner::Scenario;

pub mod cluster_page;
pub mod create_monitor;
pub mod grafana;
pub mod monitor_history;
pub mod threshold_health;
pub mod workload_page;

/// Every registered scenario, in suite order: read-only page checks first,
/// then the mutating monitor workflows.
pub fn all() -> Vec<Scenario> {
    let mut scenarios = Vec::new();
    scenarios.extend(cluster_page::scenarios());
    scenarios.extend(workload_page::scenarios());
    scenarios.extend(create_monitor::scenarios());
    scenarios.extend(monitor_history::scenarios());
    scenarios.extend(threshold_health::scenarios());
    scenarios.extend(grafana::scenarios());
    scenarios
}
