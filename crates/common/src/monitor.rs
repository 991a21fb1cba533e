//! Threshold-monitor value model
//!
//! Scenario-scoped value records describing the monitor a test intends to
//! create and later re-read from the console. All enums are closed sets
//! mirroring the console's form controls; the label/control-value mappings
//! are exactly what the UI renders and submits.

use serde::{Deserialize, Serialize};

/// Comparison operator of a severity rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparator {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
}

impl Comparator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Ne => "!=",
            Comparator::Gt => ">",
            Comparator::Lt => "<",
            Comparator::Ge => ">=",
            Comparator::Le => "<=",
        }
    }
}

/// Dimension-reduction function applied when a group-by label is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregator {
    Avg,
    Min,
    Max,
    Sum,
}

impl Aggregator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Aggregator::Avg => "avg",
            Aggregator::Min => "min",
            Aggregator::Max => "max",
            Aggregator::Sum => "sum",
        }
    }
}

/// The eight fixed trigger time windows the console offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeWindow {
    OneMinute,
    FiveMinutes,
    TenMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    OneHour,
    TwoHours,
    FourHours,
}

impl TimeWindow {
    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::OneMinute => "1 minute",
            TimeWindow::FiveMinutes => "5 minutes",
            TimeWindow::TenMinutes => "10 minutes",
            TimeWindow::FifteenMinutes => "15 minutes",
            TimeWindow::ThirtyMinutes => "30 minutes",
            TimeWindow::OneHour => "1 hour",
            TimeWindow::TwoHours => "2 hours",
            TimeWindow::FourHours => "4 hours",
        }
    }
}

/// How often the condition must hold within the window before triggering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occurrence {
    Once,
    Pct25,
    Pct50,
    Pct75,
    Pct95,
    Pct100,
}

impl Occurrence {
    pub fn label(&self) -> &'static str {
        match self {
            Occurrence::Once => "once",
            Occurrence::Pct25 => "25%",
            Occurrence::Pct50 => "50%",
            Occurrence::Pct75 => "75%",
            Occurrence::Pct95 => "95%",
            Occurrence::Pct100 => "100%",
        }
    }

    /// Value the `#trigger-at-least` select actually carries. "once" is the
    /// smallest positive double, i.e. any single occurrence.
    pub fn control_value(&self) -> &'static str {
        match self {
            Occurrence::Once => "5e-324",
            Occurrence::Pct25 => "0.25",
            Occurrence::Pct50 => "0.50",
            Occurrence::Pct75 => "0.75",
            Occurrence::Pct95 => "0.95",
            Occurrence::Pct100 => "1",
        }
    }
}

/// Monitor rule kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonitorType {
    Threshold,
    SimpleMovingAverage,
    GrowthRate,
}

impl MonitorType {
    pub fn label(&self) -> &'static str {
        match self {
            MonitorType::Threshold => "threshold",
            MonitorType::SimpleMovingAverage => "simple moving average",
            MonitorType::GrowthRate => "growth rate",
        }
    }

    /// Value the `#monitor-type` select carries.
    pub fn control_value(&self) -> &'static str {
        match self {
            MonitorType::Threshold => "threshold",
            MonitorType::SimpleMovingAverage => "sma",
            MonitorType::GrowthRate => "growthrate",
        }
    }
}

/// Group-by dimension. `None` means the aggregator control does not exist
/// in the form at all, so set/validate paths must skip it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupBy {
    None,
    Label(String),
}

impl GroupBy {
    /// Sentinel value the `#agg-label` select carries for "no grouping".
    pub const NONE_VALUE: &'static str = "__none__";

    pub fn label(label: impl Into<String>) -> Self {
        GroupBy::Label(label.into())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, GroupBy::None)
    }

    pub fn control_value(&self) -> &str {
        match self {
            GroupBy::None => Self::NONE_VALUE,
            GroupBy::Label(l) => l,
        }
    }
}

/// Severity classification rendered in a health bar segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl HealthState {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthState::Ok => "ok",
            HealthState::Warning => "warning",
            HealthState::Critical => "critical",
            HealthState::Unknown => "unknown",
        }
    }

    /// CSS class the console puts on a health bar segment.
    pub fn bar_class(&self) -> String {
        format!("health-{}-bar", self.as_str())
    }
}

/// One severity rule (critical or warning) of a monitor.
///
/// The two instances on a monitor are independently toggleable. Precedence
/// between simultaneously enabled critical and warning rules is an open
/// product decision; scenarios exercising it are tracked as known issues.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Severity {
    pub enabled: bool,
    pub comparator: Comparator,
    pub value: f64,
}

impl Severity {
    pub fn enabled(comparator: Comparator, value: f64) -> Self {
        Self {
            enabled: true,
            comparator,
            value,
        }
    }

    pub fn disabled(comparator: Comparator, value: f64) -> Self {
        Self {
            enabled: false,
            comparator,
            value,
        }
    }
}

/// Intended (or observed) state of a threshold monitor.
///
/// Filter-by tags are driven separately by the form helpers; they are an
/// add-only control rather than a field of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdMonitor {
    pub monitor_name: Option<String>,
    pub metric: Option<String>,
    pub group_by: GroupBy,
    pub time_window: TimeWindow,
    pub trigger_occurrence: Occurrence,
    pub critical: Severity,
    pub warning: Severity,
    pub aggregator: Aggregator,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Occurrence::Once, "5e-324")]
    #[test_case(Occurrence::Pct25, "0.25")]
    #[test_case(Occurrence::Pct50, "0.50")]
    #[test_case(Occurrence::Pct75, "0.75")]
    #[test_case(Occurrence::Pct95, "0.95")]
    #[test_case(Occurrence::Pct100, "1")]
    fn occurrence_control_values(occ: Occurrence, expected: &str) {
        assert_eq!(occ.control_value(), expected);
    }

    #[test_case(MonitorType::Threshold, "threshold")]
    #[test_case(MonitorType::SimpleMovingAverage, "sma")]
    #[test_case(MonitorType::GrowthRate, "growthrate")]
    fn monitor_type_control_values(ty: MonitorType, expected: &str) {
        assert_eq!(ty.control_value(), expected);
    }

    #[test_case(Comparator::Eq, "=")]
    #[test_case(Comparator::Ne, "!=")]
    #[test_case(Comparator::Gt, ">")]
    #[test_case(Comparator::Lt, "<")]
    #[test_case(Comparator::Ge, ">=")]
    #[test_case(Comparator::Le, "<=")]
    fn comparator_symbols(cmp: Comparator, expected: &str) {
        assert_eq!(cmp.symbol(), expected);
    }

    #[test_case(HealthState::Ok, "health-ok-bar")]
    #[test_case(HealthState::Warning, "health-warning-bar")]
    #[test_case(HealthState::Critical, "health-critical-bar")]
    #[test_case(HealthState::Unknown, "health-unknown-bar")]
    fn health_bar_classes(state: HealthState, expected: &str) {
        assert_eq!(state.bar_class(), expected);
    }

    #[test]
    fn group_by_sentinel() {
        assert!(GroupBy::None.is_none());
        assert_eq!(GroupBy::None.control_value(), "__none__");
        let by_pod = GroupBy::label("pod");
        assert!(!by_pod.is_none());
        assert_eq!(by_pod.control_value(), "pod");
    }

    #[test]
    fn time_window_labels_are_distinct() {
        let all = [
            TimeWindow::OneMinute,
            TimeWindow::FiveMinutes,
            TimeWindow::TenMinutes,
            TimeWindow::FifteenMinutes,
            TimeWindow::ThirtyMinutes,
            TimeWindow::OneHour,
            TimeWindow::TwoHours,
            TimeWindow::FourHours,
        ];
        let mut labels: Vec<_> = all.iter().map(|w| w.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), all.len());
    }
}
