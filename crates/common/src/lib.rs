//! Console E2E Common Library
//!
//! Shared domain model for the Enterprise Suite console test suite:
//! environment profiles, the threshold-monitor value model, console route
//! constructors, and the Grafana deep-link builder.

pub mod env;
pub mod grafana;
pub mod monitor;
pub mod routes;

// Re-export commonly used types
pub use env::{Env, LogLevel, MaxResolution};
pub use grafana::GrafanaLink;
pub use monitor::{
    Aggregator, Comparator, GroupBy, HealthState, MonitorType, Occurrence, Severity,
    ThresholdMonitor, TimeWindow,
};

/// Console E2E version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
