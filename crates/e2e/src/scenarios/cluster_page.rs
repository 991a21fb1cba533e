//! Cluster overview page scenarios
//!
//! Read-only checks against the minikube demo deployment: the detail
//! panels on the right, the workload table, and the namespace selector.

use crate::pages::{cluster, navigation};
use crate::runner::Scenario;
use crate::session::Session;

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "cluster-details-panel",
            tags: &["cluster", "smoke"],
            skip: None,
            build: details_panel,
        },
        Scenario {
            name: "cluster-workload-list",
            tags: &["cluster", "smoke"],
            skip: None,
            build: workload_list,
        },
        Scenario {
            name: "cluster-switch-namespace",
            tags: &["cluster"],
            skip: None,
            build: switch_namespace,
        },
    ]
}

fn details_panel(s: &mut Session) {
    navigation::go_cluster_page(s);
    cluster::infra_contains(s, "Nodes", "1");
    cluster::infra_contains(s, "Name", "minikube");
    cluster::workload_health_gte(s, cluster::HealthSeverityLabel::Healthy, 10);
}

fn workload_list(s: &mut Session) {
    navigation::go_cluster_page(s);
    cluster::validate_workload_count_gte(s, 10);
    cluster::validate_node_pod_container_count(s, "prometheus-server", 1, 1, 2);
}

fn switch_namespace(s: &mut Session) {
    navigation::go_cluster_page(s);
    cluster::validate_workload_count_gte(s, 10);
    // The lightbend namespace carries only the console's own workloads.
    cluster::switch_namespace(s, "lightbend");
    cluster::validate_workload_count_gte(s, 5);
    cluster::validate_workload_count_lte(s, 10);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::UiStep;
    use console_common::Env;

    #[test]
    fn every_scenario_starts_at_the_cluster_page() {
        for scenario in scenarios() {
            let session = scenario.record(&Env::local());
            match &session.recorded()[0].step {
                UiStep::Visit { path } => assert_eq!(path, "/"),
                other => panic!("{} starts with {other:?}", scenario.name),
            }
        }
    }

    #[test]
    fn namespace_switch_narrows_the_workload_count() {
        let session = Scenario {
            name: "probe",
            tags: &["cluster"],
            skip: None,
            build: switch_namespace,
        }
        .record(&Env::local());

        let selects: Vec<_> = session
            .recorded()
            .iter()
            .filter_map(|r| match &r.step {
                UiStep::SelectLabel { selector, label } => Some((selector.clone(), label.clone())),
                _ => None,
            })
            .collect();
        assert_eq!(
            selects,
            vec![("select.namespace".to_string(), "lightbend".to_string())]
        );
    }
}
