//! Grafana deep-link scenarios
//!
//! The monitor page hands a fully built dashboard URL to `window.open`.
//! The first scenario stubs `window.open` before navigation and compares
//! the captured URL byte-for-byte with the expected link; the second
//! navigates to the link itself and checks the dashboard renders.

use console_common::{routes, GrafanaLink};

use crate::pages::time_period::{self, TimePeriod};
use crate::pages::util;
use crate::runner::Scenario;
use crate::session::Session;
use crate::step::Assertion;

pub fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "grafana-deep-link",
            tags: &["grafana"],
            skip: None,
            build: deep_link,
        },
        Scenario {
            name: "grafana-dashboard-renders",
            tags: &["grafana"],
            skip: None,
            build: dashboard_renders,
        },
    ]
}

fn processing_time_link(s: &Session) -> GrafanaLink {
    GrafanaLink {
        base_url: s.env().grafana_url.clone(),
        es_workload: "es-demo".to_string(),
        from: "now-4h".to_string(),
        service_types: vec!["akka".to_string(), "kubernetes".to_string()],
        metric: "akka_actor_processing_time_ns".to_string(),
        monitor: "akka_processing_time".to_string(),
        promql: r#"max without (es_monitor_type) (akka_actor_processing_time_ns{quantile="0.5",es_workload="es-demo"})"#
            .to_string(),
    }
}

fn deep_link(s: &mut Session) {
    let url = processing_time_link(s).to_url();
    // The stub must be installed before the page loads.
    s.stub_window_open();
    s.visit(routes::monitor("es-demo", "akka_processing_time"));
    // The link's from parameter mirrors the selected graph period.
    time_period::select(s, TimePeriod::LastFourHours);
    util::validate_control_icon_contains(s, "Grafana");
    util::click_control_icon(s, "Grafana");
    s.assert_window_open(url);
}

fn dashboard_renders(s: &mut Session) {
    let url = processing_time_link(s).to_url();
    s.visit(url);
    for section in ["Monitored Metrics", "Akka Metrics", "Kubernetes Metrics"] {
        s.assert(Assertion::on("body").contains(section).timeout_ms(30_000));
    }
    s.assert(
        Assertion::on(".graph-panel__chart canvas")
            .count_gte(1)
            .timeout_ms(30_000),
    );
    s.assert(Assertion::on(".panel-info-corner--error").count_eq(0));
}
