//! Grafana dashboard deep link
//!
//! The monitor page opens Grafana in a new browser context with the
//! workload, metric, and PromQL expression baked into the query string.
//! The console passes the URL to `window.open` without percent-encoding
//! the PromQL, so the builder reproduces the string byte-for-byte; the
//! window-open assertion compares for equality.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrafanaLink {
    pub base_url: String,
    pub es_workload: String,
    /// Relative time range, e.g. `now-4h`.
    pub from: String,
    pub service_types: Vec<String>,
    pub metric: String,
    pub monitor: String,
    pub promql: String,
}

impl GrafanaLink {
    pub fn to_url(&self) -> String {
        format!(
            "{}?es_workload={}&from={}&service-type={}&metric={}&monitor={}&promQL={}",
            self.base_url,
            self.es_workload,
            self.from,
            self.service_types.join(","),
            self.metric,
            self.monitor,
            self.promql,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_matches_console_window_open_argument() {
        let link = GrafanaLink {
            base_url: "http://192.168.99.100:30080/service/grafana/dashboard/script/exporter-async.js"
                .to_string(),
            es_workload: "es-demo".to_string(),
            from: "now-4h".to_string(),
            service_types: vec!["akka".to_string(), "kubernetes".to_string()],
            metric: "akka_actor_processing_time_ns".to_string(),
            monitor: "akka_processing_time".to_string(),
            promql: r#"max without (es_monitor_type) (akka_actor_processing_time_ns{quantile="0.5",es_workload="es-demo"})"#
                .to_string(),
        };

        let expected = "http://192.168.99.100:30080/service/grafana/dashboard/script/exporter-async.js\
            ?es_workload=es-demo&from=now-4h&service-type=akka,kubernetes&\
            metric=akka_actor_processing_time_ns&monitor=akka_processing_time&\
            promQL=max without (es_monitor_type) (akka_actor_processing_time_ns{quantile=\"0.5\",es_workload=\"es-demo\"})";
        assert_eq!(link.to_url(), expected);
    }
}
