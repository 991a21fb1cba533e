//! Health bar assertions
//!
//! Read-only observers of the three health regions: the inline monitor
//! list, the selected-monitor graph, and the secondary context timeline.
//! Each region has its own lookup rule. A bar that has not updated yet
//! still shows only the unknown-bar rect plus the crosshair, so list
//! checks first wait for more than two rects before reading the last
//! non-crosshair segment.

use console_common::HealthState;

use crate::session::Session;
use crate::step::Assertion;

const LIST_BAR: &str = ".monitor-list .health-bar";
const SELECTED_BAR: &str = ".selected-container .health-bar";
const CONTEXT_BAR: &str = ".context-div .timeline-health";
const SEGMENT: &str = "rect";
const SEGMENT_NO_CURSOR: &str = "rect:not(.crosshair)";

/// Assert the latest severity of the indexed bar in the monitor list.
pub fn validate_middle_metric_list(s: &mut Session, index: usize, health: HealthState) {
    s.log(format!("validate middle metric list [{index}] is {}", health.as_str()));
    s.assert(
        Assertion::on(LIST_BAR)
            .nth(index)
            .within(SEGMENT)
            .count_gt(2)
            .timeout_ms(10_000),
    );
    s.assert(
        Assertion::on(LIST_BAR)
            .nth(index)
            .within(SEGMENT_NO_CURSOR)
            .last()
            .class(health.bar_class())
            .timeout_ms(10_000),
    );
}

/// Assert the latest severity of the selected monitor's graph.
pub fn validate_selected_graph(s: &mut Session, health: HealthState) {
    s.log(format!("validate selected graph is {}", health.as_str()));
    s.assert(
        Assertion::on(SELECTED_BAR)
            .within(SEGMENT_NO_CURSOR)
            .last()
            .class(health.bar_class())
            .timeout_ms(10_000),
    );
}

/// Assert the severity shown in the secondary context timeline. The
/// timeline renders newest-first, so every non-crosshair segment carries
/// the class rather than only the last one.
pub fn validate_context_timeline(s: &mut Session, health: HealthState) {
    s.log(format!("validate context timeline is {}", health.as_str()));
    s.assert(
        Assertion::on(CONTEXT_BAR)
            .within(SEGMENT)
            .count_gt(2)
            .timeout_ms(10_000),
    );
    s.assert(
        Assertion::on(CONTEXT_BAR)
            .within(SEGMENT_NO_CURSOR)
            .class(health.bar_class())
            .timeout_ms(10_000),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::UiStep;
    use console_common::Env;

    fn assertions(s: &Session) -> Vec<crate::step::Assertion> {
        s.recorded()
            .iter()
            .filter_map(|r| match &r.step {
                UiStep::Assert(a) => Some(a.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn list_check_waits_for_update_then_reads_last_segment() {
        let mut s = Session::new(Env::local());
        validate_middle_metric_list(&mut s, 1, HealthState::Critical);

        let asserts = assertions(&s);
        assert_eq!(asserts.len(), 2);
        // Probe: more than the unknown bar and the crosshair.
        assert_eq!(asserts[0].nth, Some(1));
        assert!(asserts[0].count.is_some());
        // Read: last non-crosshair segment.
        assert_eq!(asserts[1].within.as_deref(), Some("rect:not(.crosshair)"));
        assert!(asserts[1].last);
        assert_eq!(asserts[1].class.as_deref(), Some("health-critical-bar"));
    }

    #[test]
    fn selected_graph_reads_last_segment_without_index() {
        let mut s = Session::new(Env::local());
        validate_selected_graph(&mut s, HealthState::Ok);
        let asserts = assertions(&s);
        assert_eq!(asserts.len(), 1);
        assert!(asserts[0].nth.is_none());
        assert!(asserts[0].selector.starts_with(".selected-container"));
        assert_eq!(asserts[0].class.as_deref(), Some("health-ok-bar"));
    }

    #[test]
    fn context_timeline_does_not_narrow_to_last() {
        let mut s = Session::new(Env::local());
        validate_context_timeline(&mut s, HealthState::Warning);
        let asserts = assertions(&s);
        let read = &asserts[1];
        assert!(!read.last);
        assert_eq!(read.class.as_deref(), Some("health-warning-bar"));
    }
}
