use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use impact_analyzer::assessment::AssessmentService;
use impact_analyzer::config::AppConfig;
use impact_analyzer::error::AppError;
use impact_analyzer::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let app_state = AppState::new(Some(prometheus_handle));

    let limits = config.assessment.limits();
    let service = Arc::new(AssessmentService::new(limits));

    let app = with_assessment_routes(service)
        .layer(Extension(app_state.clone()))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    app_state.readiness.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        max_description_chars = limits.max_description_chars,
        "impact analyzer ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
