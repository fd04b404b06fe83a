//! Observability infrastructure - Prometheus metrics

mod metrics;

pub use self::metrics::{
    PrometheusMetrics, create_metrics_router, init_metrics, record_gate_rejection,
    record_http_request,
};
