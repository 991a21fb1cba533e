//! Workload detail panels

use crate::session::Session;
use crate::step::Assertion;

const DETAILS: &str = "rc-workload-details";

/// Assert the last values of the three Infrastructure History sparklines.
pub fn validate_node_pod_container_count(
    s: &mut Session,
    node_count: u32,
    pod_count: u32,
    container_count: u32,
) {
    for (child, count) in [(1, node_count), (2, pod_count), (3, container_count)] {
        s.assert(
            Assertion::on(format!(
                "{DETAILS} [title=\"Infrastructure History\"] > .panel-body > :nth-child({child}) > svg > .last-value"
            ))
            .text(count.to_string()),
        );
    }
}

pub fn validate_service_types(s: &mut Session, service_types: &[&str]) {
    let inset = format!("{DETAILS} [title=\"Service Types\"] .inset");
    s.assert(Assertion::on(inset.as_str()).count_eq(service_types.len()));
    for service_type in service_types {
        s.assert(Assertion::on(inset.as_str()).contains(*service_type));
    }
}

/// Assert a key/value pair in the Labels panel.
pub fn validate_labels_contains(s: &mut Session, key: &str, value: &str) {
    s.assert(
        Assertion::on(format!(
            "{DETAILS} [title=\"Labels\"] .label-key:has-text(\"{key}\") ~ .label-value"
        ))
        .text(value),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::UiStep;
    use console_common::Env;

    #[test]
    fn infrastructure_history_checks_three_sparklines() {
        let mut s = Session::new(Env::local());
        validate_node_pod_container_count(&mut s, 1, 3, 3);
        let texts: Vec<_> = s
            .recorded()
            .iter()
            .filter_map(|r| match &r.step {
                UiStep::Assert(a) => a.text.clone(),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["1", "3", "3"]);
    }

    #[test]
    fn service_types_check_count_then_membership() {
        let mut s = Session::new(Env::local());
        validate_service_types(&mut s, &["akka", "kubernetes"]);
        let asserts: Vec<_> = s
            .recorded()
            .iter()
            .filter_map(|r| match &r.step {
                UiStep::Assert(a) => Some(a.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(asserts.len(), 3);
        assert_eq!(asserts[0].count.map(|c| c.n), Some(2));
        assert_eq!(asserts[1].contains_text.as_deref(), Some("akka"));
        assert_eq!(asserts[2].contains_text.as_deref(), Some("kubernetes"));
    }
}
