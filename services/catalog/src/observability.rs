//! Observability wiring for the catalog service.
//!
//! # Purpose
//! Initializes tracing and the Prometheus metrics endpoint with sensible
//! defaults for both local and production usage.
//!
//! # Notes
//! Initialization is guarded by `OnceLock` to keep startup idempotent in
//! tests.
use metrics_exporter_prometheus::PrometheusBuilder;
use metrics_exporter_prometheus::PrometheusHandle;
use std::net::SocketAddr;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
static OBS_INIT: OnceLock<()> = OnceLock::new();

pub fn init_observability() -> PrometheusHandle {
    OBS_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer();
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init();
    });

    install_metrics_recorder()
}

pub async fn serve_metrics(handle: PrometheusHandle, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, metrics_router(handle).into_make_service()).await
}

fn metrics_router(handle: PrometheusHandle) -> axum::Router {
    axum::Router::new().route(
        "/metrics",
        axum::routing::get(move || async move { handle.render() }),
    )
}

fn install_metrics_recorder() -> PrometheusHandle {
    if let Some(handle) = METRICS_HANDLE.get() {
        return handle.clone();
    }
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("install metrics recorder");
    let _ = METRICS_HANDLE.set(handle.clone());
    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serial_test::serial;
    use tower::ServiceExt;

    #[test]
    #[serial]
    fn install_metrics_recorder_is_cached() {
        let handle1 = install_metrics_recorder();
        let handle2 = install_metrics_recorder();
        let _ = (handle1.render(), handle2.render());
    }

    #[tokio::test]
    #[serial]
    async fn init_observability_is_idempotent() {
        let handle1 = init_observability();
        let handle2 = init_observability();
        let _ = (handle1.render(), handle2.render());
    }

    #[tokio::test]
    #[serial]
    async fn metrics_router_responds_with_exposition_text() {
        let handle = install_metrics_recorder();
        metrics::counter!("catalog_observability_test_total").increment(1);

        let request = Request::builder()
            .uri("/metrics")
            .body(Body::empty())
            .expect("request");
        let response = metrics_router(handle)
            .oneshot(request)
            .await
            .expect("metrics");
        assert!(response.status().is_success());
    }
}
