//! # Prometheus Metrics — Exposition for the Catalog Server
//!
//! Exposes showcase operational metrics in the Prometheus text exposition
//! format for scraping by Prometheus or any OpenMetrics-compatible collector.
//!
//! ## Metrics Exposed
//!
//! | Metric | Type | Labels | Description |
//! |--------|------|--------|-------------|
//! | `showcase_http_request_duration_seconds` | Histogram | `method`, `path` | Request latency |
//! | `showcase_catalog_projects` | Gauge | — | Entries in the served catalog |
//!
//! The gauge is set once at startup; the catalog never changes afterwards.

use prometheus_client::encoding::text::encode;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::metrics::histogram::{exponential_buckets, Histogram};
use prometheus_client::registry::Registry;

/// Label set for HTTP request metrics.
#[derive(Clone, Debug, Hash, PartialEq, Eq, prometheus_client::encoding::EncodeLabelSet)]
pub struct HttpLabel {
    pub method: String,
    pub path: String,
}

type HistogramFamily = Family<HttpLabel, Histogram, fn() -> Histogram>;

/// Thread-safe metrics registry for the catalog server.
pub struct Metrics {
    pub registry: Registry,
    pub http_request_duration: HistogramFamily,
    pub catalog_projects: Gauge,
}

impl Metrics {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let http_request_duration = HistogramFamily::new_with_constructor(|| {
            Histogram::new(exponential_buckets(0.0005, 2.0, 14))
        });
        registry.register(
            "showcase_http_request_duration_seconds",
            "HTTP request latency by method and path",
            http_request_duration.clone(),
        );

        let catalog_projects = Gauge::default();
        registry.register(
            "showcase_catalog_projects",
            "Number of projects in the served catalog",
            catalog_projects.clone(),
        );

        Self {
            registry,
            http_request_duration,
            catalog_projects,
        }
    }

    /// Render all metrics in Prometheus text exposition format.
    pub fn encode(&self) -> String {
        let mut buf = String::new();
        if let Err(e) = encode(&mut buf, &self.registry) {
            tracing::warn!(error = %e, "failed to encode metrics");
        }
        buf
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
