//! Page navigation

use console_common::routes;

use crate::session::Session;

const WORKLOAD_TABLE: &str = "rc-workload-table";
const MONITOR_LIST: &str = ".monitor-list";

/// Go to the cluster overview and assert arrival. Full page navigation;
/// any in-page state is reset.
pub fn go_cluster_page(s: &mut Session) {
    s.visit("/");
    s.assert_path_eq(routes::cluster(), 20_000);
}

/// Activate the row for `workload_id` in the workload table and assert the
/// route transitions to the workload page.
pub fn click_workload(s: &mut Session, workload_id: &str) {
    s.click_text(WORKLOAD_TABLE, workload_id);
    s.assert_path_includes(routes::workload(workload_id), 20_000);
}

pub fn go_workload_page_by_click(s: &mut Session, workload_id: &str) {
    go_cluster_page(s);
    click_workload(s, workload_id);
}

/// Activate a monitor entry by its display title. Titles can collide; use
/// [`click_monitor_by_name`] when a stable lookup is needed.
pub fn click_monitor(s: &mut Session, monitor_id: &str) {
    s.click_text(MONITOR_LIST, monitor_id);
}

/// Activate a monitor entry by its name attribute, which stays unique even
/// when display titles collide.
pub fn click_monitor_by_name(s: &mut Session, monitor_id: &str) {
    s.click(format!(
        "{MONITOR_LIST} .monitor-name[title=\"{monitor_id}\"]"
    ));
}

/// Direct navigation to a monitor page, bypassing UI traversal. Used for
/// setup so a broken cluster page cannot fail an unrelated scenario.
pub fn go_monitor_page(s: &mut Session, namespace: &str, workload_id: &str, monitor_id: &str) {
    s.visit(routes::namespaced_monitor(namespace, workload_id, monitor_id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::UiStep;
    use console_common::Env;

    #[test]
    fn go_workload_page_composes_cluster_then_click() {
        let mut s = Session::new(Env::local());
        go_workload_page_by_click(&mut s, "es-demo");

        let names: Vec<_> = s.recorded().iter().map(|r| r.step.name()).collect();
        assert_eq!(
            names,
            vec![
                "visit:/",
                "assert-path:/clusters",
                "click:rc-workload-table:es-demo",
                "assert-path:/workloads/es-demo",
            ]
        );
    }

    #[test]
    fn monitor_lookup_strategies_differ() {
        let mut s = Session::new(Env::local());
        click_monitor(&mut s, "my_monitor");
        click_monitor_by_name(&mut s, "my_monitor");

        assert!(matches!(&s.recorded()[0].step, UiStep::ClickText { .. }));
        match &s.recorded()[1].step {
            UiStep::Click { selector, .. } => {
                assert!(selector.contains("[title=\"my_monitor\"]"))
            }
            other => panic!("unexpected step: {other:?}"),
        }
    }

    #[test]
    fn direct_monitor_navigation_is_namespaced() {
        let mut s = Session::new(Env::local());
        go_monitor_page(&mut s, "default", "es-demo", "akka_inbox_growth");
        match &s.recorded()[0].step {
            UiStep::Visit { path } => {
                assert_eq!(path, "/namespaces/default/workloads/es-demo/monitors/akka_inbox_growth")
            }
            other => panic!("unexpected step: {other:?}"),
        }
    }
}
