//! Threshold severity and health propagation scenarios
//!
//! Each scenario opens the shared akka_inbox_growth monitor on es-demo in
//! edit mode, rewrites the thresholds so the live metric falls on a known
//! side of them, waits for the health recalculation, and reads the
//! resulting severity from all three health regions. Nothing is saved, so
//! the shared monitor is left untouched.
//!
//! Precedence between simultaneously enabled critical and warning rules is
//! an open product decision; those variants stay registered but skipped so
//! the gap remains visible in every report.

use console_common::{
    Aggregator, Comparator, GroupBy, HealthState, Occurrence, Severity, ThresholdMonitor,
    TimeWindow,
};

use crate::issues;
use crate::pages::{action, form, health, navigation, util};
use crate::runner::Scenario;
use crate::session::Session;

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "health-critical-only",
            tags: &["health"],
            skip: None,
            build: critical_only,
        },
        Scenario {
            name: "health-warning-only",
            tags: &["health"],
            skip: None,
            build: warning_only,
        },
        Scenario {
            name: "health-both-disabled",
            tags: &["health"],
            skip: None,
            build: both_disabled,
        },
        Scenario {
            name: "health-warning-does-not-overwrite-critical",
            tags: &["health"],
            skip: Some(issues::MULTI_SEVERITY_PRECEDENCE),
            build: warning_does_not_overwrite_critical,
        },
        Scenario {
            name: "health-both-enabled-warning-band",
            tags: &["health"],
            skip: Some(issues::MULTI_SEVERITY_PRECEDENCE),
            build: both_enabled_warning_band,
        },
    ]
}

/// The mailbox size of the demo actors sits well below 3, so `< 3` always
/// triggers and `> 1000000` never does.
const TRIGGERING: f64 = 3.0;
const NEVER: f64 = 1_000_000.0;

fn monitor(critical: Severity, warning: Severity) -> ThresholdMonitor {
    ThresholdMonitor {
        monitor_name: None,
        metric: None,
        group_by: GroupBy::label("actor"),
        time_window: TimeWindow::OneMinute,
        trigger_occurrence: Occurrence::Once,
        critical,
        warning,
        aggregator: Aggregator::Max,
    }
}

/// Open the shared monitor in edit mode, apply the thresholds, and wait for
/// the recalculation to settle.
fn apply(s: &mut Session, m: &ThresholdMonitor) {
    navigation::go_monitor_page(s, "default", "es-demo", "akka_inbox_growth");
    action::edit_monitor(s);
    form::validate_metric_name(s, "akka_actor_mailbox_size");
    form::set_threshold_monitor(s, m);
    s.known_issue(issues::HEALTH_RECALCULATES_TWICE, |s| {
        util::wait_recalculate_health(s);
    });
}

fn validate_all_regions(s: &mut Session, expected: HealthState) {
    s.known_issue(issues::HEALTH_DATA_GAPS, |s| {
        health::validate_middle_metric_list(s, 0, expected);
        health::validate_middle_metric_list(s, 1, expected);
        health::validate_selected_graph(s, expected);
    });
    s.known_issue(issues::CONTEXT_TIMELINE_STALE_IN_EDIT, |s| {
        health::validate_context_timeline(s, expected);
    });
}

fn critical_only(s: &mut Session) {
    apply(
        s,
        &monitor(
            Severity::enabled(Comparator::Lt, TRIGGERING),
            Severity::disabled(Comparator::Lt, NEVER),
        ),
    );
    // Two demo actors grouped by the actor label.
    util::validate_mid_health_bar_count(s, 2);
    validate_all_regions(s, HealthState::Critical);
}

fn warning_only(s: &mut Session) {
    apply(
        s,
        &monitor(
            Severity::disabled(Comparator::Lt, NEVER),
            Severity::enabled(Comparator::Lt, TRIGGERING),
        ),
    );
    validate_all_regions(s, HealthState::Warning);
}

fn both_disabled(s: &mut Session) {
    apply(
        s,
        &monitor(
            Severity::disabled(Comparator::Lt, TRIGGERING),
            Severity::disabled(Comparator::Lt, TRIGGERING),
        ),
    );
    validate_all_regions(s, HealthState::Ok);
}

fn warning_does_not_overwrite_critical(s: &mut Session) {
    apply(
        s,
        &monitor(
            Severity::enabled(Comparator::Lt, TRIGGERING),
            Severity::enabled(Comparator::Lt, TRIGGERING),
        ),
    );
    validate_all_regions(s, HealthState::Critical);
}

fn both_enabled_warning_band(s: &mut Session) {
    // Only the warning rule triggers; the critical threshold is out of reach.
    apply(
        s,
        &monitor(
            Severity::enabled(Comparator::Gt, NEVER),
            Severity::enabled(Comparator::Lt, TRIGGERING),
        ),
    );
    validate_all_regions(s, HealthState::Warning);
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
    fn scenarios_open_the_shared_monitor_directly() {
        let session = record(critical_only);
        match &session.recorded()[0].step {
            UiStep::Visit { path } => {
                assert_eq!(path, "/namespaces/default/workloads/es-demo/monitors/akka_inbox_growth")
            }
            other => panic!("unexpected step: {other:?}"),
        }
    }

    #[test]
    fn nothing_is_saved() {
        for build in [critical_only, warning_only, both_disabled] {
            let session = record(build);
            assert!(!session.recorded().iter().any(|r| matches!(&r.step,
                UiStep::ClickText { text, .. } if text == "SAVE CHANGES")));
        }
    }

    #[test]
    fn context_timeline_guard_differs_from_list_guard() {
        let session = record(warning_only);
        let issues_seen: Vec<_> = session
            .recorded()
            .iter()
            .filter_map(|r| r.issue.map(|i| i.id))
            .collect();
        assert!(issues_seen.contains(&"console-home#354"));
        assert!(issues_seen.contains(&"console-home#328"));
    }

    #[test]
    fn disabled_severities_expect_ok_health() {
        let session = record(both_disabled);
        let classes: Vec<_> = session
            .recorded()
            .iter()
            .filter_map(|r| match &r.step {
                UiStep::Assert(a) => a.class.clone(),
                _ => None,
            })
            .collect();
        assert!(!classes.is_empty());
        assert!(classes.iter().all(|c| c == "health-ok-bar"));
    }

    #[test]
    fn precedence_variants_are_skipped() {
        let skipped: Vec<_> = scenarios()
            .into_iter()
            .filter(|s| s.skip.is_some())
            .map(|s| s.name)
            .collect();
        assert_eq!(
            skipped,
            vec![
                "health-warning-does-not-overwrite-critical",
                "health-both-enabled-warning-band",
            ]
        );
    }

    #[test]
    fn recalculation_wait_is_guarded() {
        let session = record(critical_only);
        let guarded = session
            .recorded()
            .iter()
            .any(|r| r.issue.map(|i| i.id) == Some("console-home#353"));
        assert!(guarded);
    }
}
