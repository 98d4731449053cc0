//! Prometheus metrics for part-analysis-service.
//!
//! Covers HTTP traffic, analysis outcomes and the upstream provider.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::OnceLock;
use std::time::Instant;

static METRICS: OnceLock<Metrics> = OnceLock::new();

struct Metrics {
    registry: Registry,
    http_requests_total: IntCounterVec,
    http_request_duration_seconds: HistogramVec,
    analysis_requests_total: IntCounterVec,
    provider_latency_seconds: HistogramVec,
    provider_errors_total: IntCounterVec,
    provider_tokens_total: IntCounterVec,
}

impl Metrics {
    fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "path", "status"],
        )?;

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
            &["method", "path"],
        )?;

        // outcome: success, image_missing, failed
        let analysis_requests_total = IntCounterVec::new(
            Opts::new("analysis_requests_total", "Total part analysis requests"),
            &["outcome"],
        )?;

        let provider_latency_seconds = HistogramVec::new(
            HistogramOpts::new(
                "provider_latency_seconds",
                "Vision provider API latency in seconds",
            )
            .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0, 120.0]),
            &["model"],
        )?;

        let provider_errors_total = IntCounterVec::new(
            Opts::new("provider_errors_total", "Total vision provider errors"),
            &["model", "error_type"],
        )?;

        // type: input, output
        let provider_tokens_total = IntCounterVec::new(
            Opts::new("provider_tokens_total", "Total tokens processed"),
            &["model", "type"],
        )?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(analysis_requests_total.clone()))?;
        registry.register(Box::new(provider_latency_seconds.clone()))?;
        registry.register(Box::new(provider_errors_total.clone()))?;
        registry.register(Box::new(provider_tokens_total.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_request_duration_seconds,
            analysis_requests_total,
            provider_latency_seconds,
            provider_errors_total,
            provider_tokens_total,
        })
    }
}

/// Initialize all metrics. Safe to call more than once.
pub fn init_metrics() -> Result<(), prometheus::Error> {
    if METRICS.get().is_some() {
        return Ok(());
    }
    let metrics = Metrics::new()?;
    if METRICS.set(metrics).is_ok() {
        tracing::info!("Prometheus metrics initialized");
    }
    Ok(())
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> Result<String, anyhow::Error> {
    let metrics = METRICS
        .get()
        .ok_or_else(|| anyhow::anyhow!("Metrics registry not initialized"))?;

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&metrics.registry.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Record a completed HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, duration_secs: f64) {
    if let Some(m) = METRICS.get() {
        let status = status.to_string();
        m.http_requests_total
            .with_label_values(&[method, path, status.as_str()])
            .inc();
        m.http_request_duration_seconds
            .with_label_values(&[method, path])
            .observe(duration_secs);
    }
}

/// Middleware recording count and latency per route.
///
/// Requests that hit no route (static assets) share the `unmatched` label.
pub async fn http_metrics_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;

    record_http_request(
        &method,
        &path,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );

    response
}

/// Record how an analysis request ended.
pub fn record_analysis(outcome: &str) {
    if let Some(m) = METRICS.get() {
        m.analysis_requests_total.with_label_values(&[outcome]).inc();
    }
}

/// Record provider latency.
pub fn record_provider_latency(model: &str, duration_secs: f64) {
    if let Some(m) = METRICS.get() {
        m.provider_latency_seconds
            .with_label_values(&[model])
            .observe(duration_secs);
    }
}

/// Record a provider error.
pub fn record_provider_error(model: &str, error_type: &str) {
    if let Some(m) = METRICS.get() {
        m.provider_errors_total
            .with_label_values(&[model, error_type])
            .inc();
    }
}

/// Record token usage.
pub fn record_tokens(model: &str, input_tokens: i32, output_tokens: i32) {
    if let Some(m) = METRICS.get() {
        m.provider_tokens_total
            .with_label_values(&[model, "input"])
            .inc_by(input_tokens.max(0) as u64);
        m.provider_tokens_total
            .with_label_values(&[model, "output"])
            .inc_by(output_tokens.max(0) as u64);
    }
}
