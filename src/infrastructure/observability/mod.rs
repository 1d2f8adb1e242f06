//! Push-based observability for Loan Predict
//!
//! Metrics are kept in a Prometheus registry and pushed as periodic
//! structured JSON logs to stdout. No metrics endpoint is served.

pub mod metrics;
pub mod reporter;

pub use metrics::Metrics;
pub use reporter::MetricsReporter;
