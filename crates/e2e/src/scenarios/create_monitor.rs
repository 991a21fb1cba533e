//! Monitor create / validate / remove round trips
//!
//! Each scenario drives the full lifecycle against the es-demo workload:
//! create a uniquely named monitor, save, reopen it in edit mode, compare
//! every form field with what was entered, then remove it and confirm it is
//! gone. Validation steps hit by tracked console defects run under
//! known-issue guards so the rest of the round trip still executes.

use console_common::{routes, Aggregator, Comparator, GroupBy, Occurrence, Severity,
    ThresholdMonitor, TimeWindow};

use crate::issues;
use crate::pages::{action, form, navigation, util};
use crate::runner::Scenario;
use crate::session::Session;

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "create-monitor-default-group-by",
            tags: &["monitor", "smoke"],
            skip: None,
            build: default_group_by,
        },
        Scenario {
            name: "create-monitor-group-by-pod",
            tags: &["monitor"],
            skip: Some(issues::GROUP_BY_DROPDOWN_STALE),
            build: group_by_pod,
        },
        Scenario {
            name: "create-monitor-group-by-actor",
            tags: &["monitor"],
            skip: Some(issues::GROUP_BY_DROPDOWN_SLOW),
            build: group_by_actor,
        },
    ]
}

fn default_group_by(s: &mut Session) {
    round_trip(s, "kube_pod_failed", GroupBy::None, ("app", "prometheus"));
}

fn group_by_pod(s: &mut Session) {
    round_trip(
        s,
        "kube_pod_failed",
        GroupBy::label("pod"),
        ("app", "prometheus"),
    );
}

fn group_by_actor(s: &mut Session) {
    round_trip(
        s,
        "akka_actor_mailbox_size",
        GroupBy::label("actor"),
        ("app", "es-demo"),
    );
}

/// The shared lifecycle; only the metric, grouping, and filter vary.
fn round_trip(s: &mut Session, metric: &str, group_by: GroupBy, filter: (&str, &str)) {
    let name = util::random_monitor_name();
    let monitor = ThresholdMonitor {
        monitor_name: Some(name.clone()),
        metric: Some(metric.to_string()),
        group_by,
        time_window: TimeWindow::OneMinute,
        trigger_occurrence: Occurrence::Once,
        critical: Severity::enabled(Comparator::Lt, 3.0),
        warning: Severity::disabled(Comparator::Gt, 1.2),
        aggregator: Aggregator::Max,
    };

    navigation::go_workload_page_by_click(s, "es-demo");
    action::create_monitor(s);
    form::click_metric_selector(s);
    form::set_threshold_monitor(s, &monitor);
    form::add_filter_by(s, filter.0, filter.1);
    action::save_monitor(s);
    util::validate_url_path(s, &routes::workload("es-demo"));
    util::validate_monitor_count_gte(s, 3);

    navigation::click_monitor_by_name(s, &name);
    util::validate_url_path(s, &routes::monitor("es-demo", &name));
    action::edit_monitor(s);
    s.known_issue(issues::SEVERITY_VALUE_RESET, |s| {
        form::validate_threshold_monitor(s, &monitor);
    });
    s.known_issue(issues::SPURIOUS_WORKLOAD_FILTER, |s| {
        form::validate_filter_by_count(s, 1);
    });
    form::validate_filter_by_contains(s, filter.0, filter.1);

    action::remove_monitor(s);
    util::validate_url_path(s, &routes::workload("es-demo"));
    util::validate_monitor_count_gte(s, 3);
    util::validate_no_monitor(s, &name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::UiStep;
    use console_common::Env;

    fn record(build: fn(&mut Session)) -> Session {
        let mut s = Session::new(Env::local());
        build(&mut s);
        s
    }

    #[test]
    fn round_trip_ends_with_removal_checks() {
        let session = record(default_group_by);
        let last = session.recorded().last().unwrap();
        match &last.step {
            UiStep::Assert(a) => {
                assert_eq!(a.selector, ".monitor-list");
                assert!(a.not_contains_text.as_deref().unwrap().starts_with("regression_test_"));
            }
            other => panic!("unexpected final step: {other:?}"),
        }
    }

    #[test]
    fn severity_validation_is_guarded_by_the_reset_issue() {
        let session = record(default_group_by);
        let guarded: Vec<_> = session
            .recorded()
            .iter()
            .filter(|r| r.issue.map(|i| i.id) == Some("console-home#324"))
            .collect();
        assert!(!guarded.is_empty());
        // The threshold value reads are inside the guard.
        assert!(guarded.iter().any(|r| matches!(&r.step,
            UiStep::Assert(a) if a.selector == "#critical-threshold")));
    }

    #[test]
    fn filter_count_check_is_guarded_but_membership_is_not() {
        let session = record(group_by_pod);
        let count_issue = session
            .recorded()
            .iter()
            .find(|r| matches!(&r.step, UiStep::Assert(a) if a.count.is_some()
                && a.selector == ".capsule-group rc-capsule"))
            .and_then(|r| r.issue);
        assert_eq!(count_issue.map(|i| i.id), Some("console-home#260"));

        let membership_issue = session
            .recorded()
            .iter()
            .find(|r| matches!(&r.step, UiStep::Assert(a)
                if a.selector.ends_with(".button-key")))
            .and_then(|r| r.issue);
        assert!(membership_issue.is_none());
    }

    #[test]
    fn grouped_variants_are_skipped_for_dropdown_issues() {
        let all = scenarios();
        assert!(all[0].skip.is_none());
        assert_eq!(all[1].skip.map(|i| i.id), Some("console-home#323"));
        assert_eq!(all[2].skip.map(|i| i.id), Some("console-home#322"));
    }

    #[test]
    fn aggregator_only_set_for_grouped_monitors() {
        let grouped = record(group_by_actor);
        assert!(grouped.recorded().iter().any(|r| matches!(&r.step,
            UiStep::Select { selector, .. } if selector == "#aggregation")));

        let ungrouped = record(default_group_by);
        assert!(!ungrouped.recorded().iter().any(|r| matches!(&r.step,
            UiStep::Select { selector, .. } if selector == "#aggregation")));
    }
}
