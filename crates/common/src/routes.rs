//! Console route constructors
//!
//! Path contracts the console honors. The route scheme grew a namespace
//! qualifier over console releases, and both forms are still served, so
//! both are provided; scenarios pick whichever the deployment under test
//! redirects to.

/// Cluster overview page. Visiting `/` redirects here.
pub fn cluster() -> String {
    "/clusters".to_string()
}

pub fn workload(workload_id: &str) -> String {
    format!("/workloads/{workload_id}")
}

pub fn namespaced_workload(namespace: &str, workload_id: &str) -> String {
    format!("/namespaces/{namespace}/workloads/{workload_id}")
}

pub fn monitor(workload_id: &str, monitor_id: &str) -> String {
    format!("/workloads/{workload_id}/monitors/{monitor_id}")
}

pub fn namespaced_monitor(namespace: &str, workload_id: &str, monitor_id: &str) -> String {
    format!("/namespaces/{namespace}/workloads/{workload_id}/monitors/{monitor_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workload_routes() {
        assert_eq!(workload("es-demo"), "/workloads/es-demo");
        assert_eq!(
            namespaced_workload("lightbend", "console-frontend"),
            "/namespaces/lightbend/workloads/console-frontend"
        );
    }

    #[test]
    fn monitor_routes() {
        assert_eq!(
            monitor("es-demo", "akka_inbox_growth"),
            "/workloads/es-demo/monitors/akka_inbox_growth"
        );
        assert_eq!(
            namespaced_monitor("default", "es-demo", "akka_inbox_growth"),
            "/namespaces/default/workloads/es-demo/monitors/akka_inbox_growth"
        );
    }
}
