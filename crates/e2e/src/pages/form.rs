//! Monitor form
//!
//! Symmetric set/validate operations for every field of a threshold
//! monitor, plus composites that sequence them in UI dependency order: the
//! monitor type gates which trigger controls exist, and group-by goes last
//! because changing it resets the aggregator options. When group-by is the
//! "none" sentinel the aggregator control is absent from the form, so both
//! composites skip it.

use console_common::{
    Aggregator, Comparator, GroupBy, MonitorType, Occurrence, ThresholdMonitor, TimeWindow,
};

use crate::session::Session;
use crate::step::Assertion;

const METRIC_CAPSULE: &str = "rc-capsule.metric";
const MONITOR_NAME: &str = "#mon-name";
const MONITOR_TYPE: &str = "#monitor-type";
const TRIGGER_OCCURRENCE: &str = "#trigger-at-least";
const TRIGGER_WINDOW: &str = "#trigger-within";
const CRITICAL_TOGGLE: &str = "rc-ui-switch.critical-enable";
const WARNING_TOGGLE: &str = "rc-ui-switch.warning-enable";
const AGGREGATE_USING: &str = "#aggregation";
const GROUP_BY: &str = "#agg-label";

/// Expand the metric dropdown when it is collapsed.
pub fn click_metric_selector(s: &mut Session) {
    s.click(METRIC_CAPSULE);
}

pub fn set_metric_name(s: &mut Session, value: &str) {
    // The capsule must already be in edit mode with the dropdown expanded.
    s.assert(Assertion::on(format!("{METRIC_CAPSULE} .capsule-view")).with_attr("hidden"));
    s.assert(Assertion::on(format!("{METRIC_CAPSULE} .capsule-edit")).without_attr("hidden"));
    s.fill(format!("{METRIC_CAPSULE} .capsule-edit .tag-name-input"), value);
    // The metric list repopulates from prometheus label data; give it room.
    s.sleep(2_000);
    s.click_text_within(
        format!("{METRIC_CAPSULE} .capsule-edit .capsule-wrapper .tag-name-list a[title=\"{value}\"]"),
        value,
        60_000,
    );
    s.sleep(2_000);
    validate_metric_name(s, value);
}

pub fn validate_metric_name(s: &mut Session, value: &str) {
    s.assert(Assertion::on(format!("{METRIC_CAPSULE} .capsule-view")).without_attr("hidden"));
    s.assert(Assertion::on(format!("{METRIC_CAPSULE} .capsule-edit")).with_attr("hidden"));
    s.assert(
        Assertion::on(format!("{METRIC_CAPSULE} .capsule-view label.button-key"))
            .text(value)
            .timeout_ms(20_000),
    );
}

pub fn set_monitor_name(s: &mut Session, value: &str) {
    s.fill(MONITOR_NAME, value);
}

pub fn validate_monitor_name(s: &mut Session, value: &str) {
    s.assert(Assertion::on(MONITOR_NAME).value(value).timeout_ms(5_000));
}

pub fn set_monitor_type(s: &mut Session, value: MonitorType) {
    s.select_label(MONITOR_TYPE, value.label());
    s.assert(Assertion::on(MONITOR_TYPE).value(value.control_value()));
}

pub fn validate_monitor_type(s: &mut Session, value: MonitorType) {
    s.assert(Assertion::on(MONITOR_TYPE).value(value.control_value()));
}

pub fn set_trigger_occurrence(s: &mut Session, value: Occurrence) {
    s.select_label(TRIGGER_OCCURRENCE, value.label());
}

pub fn validate_trigger_occurrence(s: &mut Session, value: Occurrence) {
    s.assert(Assertion::on(TRIGGER_OCCURRENCE).value(value.control_value()));
}

pub fn set_time_window(s: &mut Session, value: TimeWindow) {
    s.select_label(TRIGGER_WINDOW, value.label());
}

pub fn validate_time_window(s: &mut Session, value: TimeWindow) {
    s.assert(Assertion::on(TRIGGER_WINDOW).selected_label(value.label()));
}

pub fn enable_critical(s: &mut Session, enable: bool) {
    s.set_toggle(CRITICAL_TOGGLE, enable);
}

pub fn enable_warning(s: &mut Session, enable: bool) {
    s.set_toggle(WARNING_TOGGLE, enable);
}

pub fn set_critical(s: &mut Session, comparator: Comparator, value: f64) {
    s.select_label("#critical-comparator", comparator.symbol());
    s.fill("#critical-threshold", value.to_string());
}

pub fn set_warning(s: &mut Session, comparator: Comparator, value: f64) {
    s.select_label("#warning-comparator", comparator.symbol());
    s.fill("#warning-threshold", value.to_string());
}

pub fn validate_critical(s: &mut Session, enabled: bool, comparator: Comparator, value: f64) {
    s.assert(
        Assertion::on(".critical-enable > span").text(if enabled { "Enabled" } else { "Disabled" }),
    );
    s.assert(Assertion::on("#critical-comparator").selected_label(comparator.symbol()));
    s.assert(Assertion::on("#critical-threshold").value(value.to_string()));
}

pub fn validate_warning(s: &mut Session, enabled: bool, comparator: Comparator, value: f64) {
    s.assert(
        Assertion::on(".warning-enable > span").text(if enabled { "Enabled" } else { "Disabled" }),
    );
    s.assert(Assertion::on("#warning-comparator").selected_label(comparator.symbol()));
    s.assert(Assertion::on("#warning-threshold").value(value.to_string()));
}

pub fn set_aggregate_using(s: &mut Session, value: Aggregator) {
    s.select(AGGREGATE_USING, value.as_str());
}

pub fn validate_aggregate_using(s: &mut Session, value: Aggregator) {
    s.assert(Assertion::on(AGGREGATE_USING).value(value.as_str()));
}

pub fn set_group_by(s: &mut Session, value: &GroupBy) {
    let control = value.control_value();
    // The label list is fetched from prometheus and can take a long time to
    // appear in create mode.
    s.assert(
        Assertion::on(format!("{GROUP_BY} option[value=\"{control}\"]"))
            .count_gte(1)
            .timeout_ms(40_000),
    );
    s.sleep(2_000);
    s.select(GROUP_BY, control);
}

pub fn validate_group_by(s: &mut Session, value: &GroupBy) {
    s.assert(Assertion::on(format!(".form-container {GROUP_BY}")).value(value.control_value()));
}

pub fn validate_group_by_none(s: &mut Session) {
    s.assert(Assertion::on(format!(".form-container {GROUP_BY}")).value(GroupBy::NONE_VALUE));
    s.assert(Assertion::on(".form-container .label").not_contains("Aggregate Using"));
}

pub fn add_filter_by(s: &mut Session, key: &str, value: &str) {
    s.click(".form-container button.add");
    s.click(format!(".form-container .tag-name-list a[title=\"{key}\"]"));
    s.click(format!(".form-container .tag-value-list a[title=\"{value}\"]"));
}

pub fn validate_filter_by_count(s: &mut Session, count: usize) {
    s.assert(Assertion::on(".capsule-group rc-capsule").count_eq(count));
}

pub fn validate_filter_by_contains(s: &mut Session, key: &str, value: &str) {
    s.assert(Assertion::on(".capsule-group rc-capsule .capsule-view > .button-key").contains(key));
    s.assert(
        Assertion::on(".capsule-group rc-capsule .capsule-view > .button-value").contains(value),
    );
}

/// Drive every field of a threshold monitor in dependency order.
pub fn set_threshold_monitor(s: &mut Session, m: &ThresholdMonitor) {
    if let Some(metric) = &m.metric {
        set_metric_name(s, metric);
    }
    if let Some(name) = &m.monitor_name {
        set_monitor_name(s, name);
    }

    set_monitor_type(s, MonitorType::Threshold);
    s.sleep(2_000);
    // The type control sometimes rolls back to growth rate while the form
    // settles; setting it twice pins it.
    set_monitor_type(s, MonitorType::Threshold);
    s.sleep(1_000);
    set_time_window(s, m.time_window);
    enable_critical(s, m.critical.enabled);
    set_critical(s, m.critical.comparator, m.critical.value);
    enable_warning(s, m.warning.enabled);
    set_warning(s, m.warning.comparator, m.warning.value);
    set_trigger_occurrence(s, m.trigger_occurrence);
    set_group_by(s, &m.group_by);
    if !m.group_by.is_none() {
        set_aggregate_using(s, m.aggregator);
    }
}

/// Re-read every field and compare with the intended monitor.
pub fn validate_threshold_monitor(s: &mut Session, m: &ThresholdMonitor) {
    if let Some(metric) = &m.metric {
        validate_metric_name(s, metric);
    }
    if let Some(name) = &m.monitor_name {
        validate_monitor_name(s, name);
    }

    validate_monitor_type(s, MonitorType::Threshold);
    validate_time_window(s, m.time_window);
    validate_critical(s, m.critical.enabled, m.critical.comparator, m.critical.value);
    validate_warning(s, m.warning.enabled, m.warning.comparator, m.warning.value);
    validate_trigger_occurrence(s, m.trigger_occurrence);
    if m.group_by.is_none() {
        validate_group_by_none(s);
    } else {
        validate_group_by(s, &m.group_by);
        validate_aggregate_using(s, m.aggregator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::UiStep;
    use console_common::{Env, Severity};

    fn sample(group_by: GroupBy) -> ThresholdMonitor {
        ThresholdMonitor {
            monitor_name: Some("regression_test_42".to_string()),
            metric: Some("kube_pod_failed".to_string()),
            group_by,
            time_window: TimeWindow::OneMinute,
            trigger_occurrence: Occurrence::Once,
            critical: Severity::enabled(Comparator::Lt, 3.0),
            warning: Severity::disabled(Comparator::Gt, 1.2),
            aggregator: Aggregator::Max,
        }
    }

    fn selects_of(s: &Session) -> Vec<String> {
        s.recorded()
            .iter()
            .filter_map(|r| match &r.step {
                UiStep::Select { selector, .. } | UiStep::SelectLabel { selector, .. } => {
                    Some(selector.clone())
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn aggregator_is_set_when_grouped() {
        let mut s = Session::new(Env::local());
        set_threshold_monitor(&mut s, &sample(GroupBy::label("pod")));
        assert!(selects_of(&s).iter().any(|sel| sel == "#aggregation"));
    }

    #[test]
    fn aggregator_is_skipped_for_group_by_none() {
        let mut s = Session::new(Env::local());
        set_threshold_monitor(&mut s, &sample(GroupBy::None));
        assert!(!selects_of(&s).iter().any(|sel| sel == "#aggregation"));

        let mut s = Session::new(Env::local());
        validate_threshold_monitor(&mut s, &sample(GroupBy::None));
        let asserted: Vec<_> = s
            .recorded()
            .iter()
            .filter_map(|r| match &r.step {
                UiStep::Assert(a) => Some(a.selector.clone()),
                _ => None,
            })
            .collect();
        assert!(!asserted.iter().any(|sel| sel == "#aggregation"));
        // The none sentinel is validated instead.
        assert!(asserted.iter().any(|sel| sel.contains("#agg-label")));
    }

    #[test]
    fn group_by_is_set_after_all_trigger_fields() {
        let mut s = Session::new(Env::local());
        set_threshold_monitor(&mut s, &sample(GroupBy::label("pod")));
        let selects = selects_of(&s);
        let group_pos = selects.iter().position(|s| s == "#agg-label").unwrap();
        let occurrence_pos = selects
            .iter()
            .position(|s| s == "#trigger-at-least")
            .unwrap();
        let window_pos = selects.iter().position(|s| s == "#trigger-within").unwrap();
        assert!(group_pos > occurrence_pos);
        assert!(group_pos > window_pos);
    }

    #[test]
    fn monitor_type_is_pinned_twice() {
        let mut s = Session::new(Env::local());
        set_threshold_monitor(&mut s, &sample(GroupBy::None));
        let type_sets = selects_of(&s)
            .iter()
            .filter(|sel| *sel == "#monitor-type")
            .count();
        assert_eq!(type_sets, 2);
    }

    #[test]
    fn set_and_validate_cover_the_same_fields() {
        for group_by in [GroupBy::None, GroupBy::label("instance")] {
            let m = sample(group_by);
            let mut set = Session::new(Env::local());
            set_threshold_monitor(&mut set, &m);
            let mut val = Session::new(Env::local());
            validate_threshold_monitor(&mut val, &m);
            assert!(!set.recorded().is_empty());
            assert!(!val.recorded().is_empty());
        }
    }

    #[test]
    fn filter_by_adds_one_capsule() {
        let mut s = Session::new(Env::local());
        validate_filter_by_count(&mut s, 0);
        add_filter_by(&mut s, "app", "es-demo");
        validate_filter_by_count(&mut s, 1);

        let counts: Vec<_> = s
            .recorded()
            .iter()
            .filter_map(|r| match &r.step {
                UiStep::Assert(a) => a.count.map(|c| c.n),
                _ => None,
            })
            .collect();
        assert_eq!(counts, vec![0, 1]);
    }
}
