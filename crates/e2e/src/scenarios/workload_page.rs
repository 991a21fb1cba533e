//! Workload detail page scenarios

use crate::pages::{navigation, util, workload};
use crate::runner::Scenario;
use crate::session::Session;

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "workload-detail-panels",
            tags: &["workload", "smoke"],
            skip: None,
            build: detail_panels,
        },
        Scenario {
            name: "workload-control-icons",
            tags: &["workload"],
            skip: None,
            build: control_icons,
        },
    ]
}

fn detail_panels(s: &mut Session) {
    navigation::go_workload_page_by_click(s, "es-demo");
    util::validate_monitor_count_gte(s, 3);
    workload::validate_node_pod_container_count(s, 1, 3, 3);
    workload::validate_service_types(s, &["akka", "kubernetes"]);
    workload::validate_labels_contains(s, "namespace", "default");
    workload::validate_labels_contains(s, "node_name", "minikube");
}

fn control_icons(s: &mut Session) {
    navigation::go_workload_page_by_click(s, "es-demo");
    util::validate_control_icon_contains(s, "Grafana");
    util::validate_control_icon_contains(s, "Kubernetes");
}
