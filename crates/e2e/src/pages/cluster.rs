//! Cluster page and cluster detail panels

use console_common::HealthState;

use crate::session::Session;
use crate::step::Assertion;

const WORKLOAD_ROW: &str = "rc-workload-table .workload-row";
const INFRA_PANEL: &str = "rc-panel[title=\"Infrastructure\"]";
const HEALTH_PANEL: &str = "rc-panel[title=\"Workload Health\"]";

pub fn validate_workload_count_gte(s: &mut Session, count: usize) {
    s.assert(Assertion::on(WORKLOAD_ROW).count_gte(count).timeout_ms(10_000));
}

pub fn validate_workload_count_lte(s: &mut Session, count: usize) {
    s.assert(Assertion::on(WORKLOAD_ROW).count_lte(count).timeout_ms(10_000));
}

/// Assert the `nodes : pods : containers` cell of a workload row.
pub fn validate_node_pod_container_count(
    s: &mut Session,
    workload: &str,
    node_count: u32,
    pod_count: u32,
    container_count: u32,
) {
    s.assert(
        Assertion::on(format!("[workloadname=\"{workload}\"] > :nth-child(4)"))
            .text(format!("{node_count} : {pod_count} : {container_count}")),
    );
}

pub fn switch_namespace(s: &mut Session, namespace: &str) {
    s.select_label("select.namespace", namespace);
}

/// Assert a key/value pair in the Infrastructure panel. Key and value are
/// siblings within one label row.
pub fn infra_contains(s: &mut Session, key: &str, value: &str) {
    s.assert(
        Assertion::on(format!(
            "{INFRA_PANEL} .label-key:has-text(\"{key}\") ~ .label-value"
        ))
        .contains(value)
        .timeout_ms(10_000),
    );
}

/// Assert at least `count` workloads carry the given health severity in
/// the Workload Health panel.
pub fn workload_health_gte(s: &mut Session, severity: HealthSeverityLabel, count: u32) {
    s.assert(
        Assertion::on(format!(
            "{HEALTH_PANEL} .label-key:has-text(\"{}\") ~ .label-value .right-count",
            severity.label()
        ))
        .number_gte(count as f64),
    );
}

/// Severity labels as the Workload Health panel titles them; distinct from
/// the CSS classification of [`HealthState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthSeverityLabel {
    Healthy,
    Warning,
    Critical,
    Unknown,
}

impl HealthSeverityLabel {
    pub fn label(&self) -> &'static str {
        match self {
            HealthSeverityLabel::Healthy => "Healthy",
            HealthSeverityLabel::Warning => "Warning",
            HealthSeverityLabel::Critical => "Critical",
            HealthSeverityLabel::Unknown => "Unknown",
        }
    }
}

impl From<HealthState> for HealthSeverityLabel {
    fn from(state: HealthState) -> Self {
        match state {
            HealthState::Ok => HealthSeverityLabel::Healthy,
            HealthState::Warning => HealthSeverityLabel::Warning,
            HealthState::Critical => HealthSeverityLabel::Critical,
            HealthState::Unknown => HealthSeverityLabel::Unknown,
        }
    }
}
