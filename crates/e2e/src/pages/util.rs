//! Cross-cutting assertions and fixtures

use rand::Rng;

use crate::session::Session;
use crate::step::Assertion;

const MONITOR_LIST: &str = ".monitor-list";
const CONTROLS: &str = "rc-cluster-controls";

/// Unique monitor name for a scenario run. The wide random suffix keeps
/// concurrent runs against a shared deployment from colliding.
pub fn random_monitor_name() -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..100_000);
    format!("regression_test_{suffix}")
}

pub fn validate_url_path(s: &mut Session, url_path: &str) {
    s.assert_path_eq(url_path, 20_000);
}

pub fn validate_monitor_count_gte(s: &mut Session, count: usize) {
    s.assert(
        Assertion::on(format!("{MONITOR_LIST} .monitor-name"))
            .count_gte(count)
            .timeout_ms(10_000),
    );
}

pub fn validate_no_monitor(s: &mut Session, monitor_id: &str) {
    s.assert(
        Assertion::on(MONITOR_LIST)
            .not_contains(monitor_id)
            .timeout_ms(10_000),
    );
}

/// Assert the grouping count shown above the middle health bars.
pub fn validate_mid_health_bar_count(s: &mut Session, count: usize) {
    s.assert(
        Assertion::on(".list-header")
            .text(format!("Groupings ({count})"))
            .timeout_ms(20_000),
    );
}

/// Assert a control icon (Grafana, Kubernetes, ...) is present. The icons
/// come up only after the workload data loads, hence the long bound.
pub fn validate_control_icon_contains(s: &mut Session, value: &str) {
    s.assert(
        Assertion::on(format!("{CONTROLS} img[title=\"{value}\"]"))
            .count_gte(1)
            .timeout_ms(60_000),
    );
}

pub fn click_control_icon(s: &mut Session, value: &str) {
    s.click(format!("{CONTROLS} img[title=\"{value}\"]"));
}

/// Wait for a health recalculation to settle: the transient calculating
/// indicator appears, bars come back, then a fixed grace delay because the
/// bars still repaint line by line afterwards. Best effort, not a
/// synchronization primitive.
pub fn wait_recalculate_health(s: &mut Session) {
    s.assert(Assertion::on(format!("{MONITOR_LIST} .center")).contains("Calculating Health"));
    s.wait_for(format!("{MONITOR_LIST} .health-bar"), 20_000);
    s.sleep(5_000);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::UiStep;
    use console_common::Env;

    #[test]
    fn random_names_have_the_regression_prefix() {
        let name = random_monitor_name();
        assert!(name.starts_with("regression_test_"));
        let suffix: u32 = name["regression_test_".len()..].parse().unwrap();
        assert!(suffix < 100_000);
    }

    #[test]
    fn random_names_rarely_collide() {
        let a = random_monitor_name();
        let b = random_monitor_name();
        let c = random_monitor_name();
        // Three draws from 100k values; a shared value here means the RNG
        // is broken, not unlucky.
        assert!(!(a == b && b == c));
    }

    #[test]
    fn recalculate_wait_ends_with_grace_delay() {
        let mut s = Session::new(Env::local());
        wait_recalculate_health(&mut s);
        let last = s.recorded().last().unwrap();
        match &last.step {
            UiStep::Sleep { ms } => assert_eq!(*ms, 5_000),
            other => panic!("unexpected step: {other:?}"),
        }
    }

    #[test]
    fn mid_health_bar_count_formats_header() {
        let mut s = Session::new(Env::local());
        validate_mid_health_bar_count(&mut s, 2);
        match &s.recorded()[0].step {
            UiStep::Assert(a) => assert_eq!(a.text.as_deref(), Some("Groupings (2)")),
            other => panic!("unexpected step: {other:?}"),
        }
    }
}
