use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryIntakeRepository};
use crate::routes::with_intake_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use lead_qualifier::config::AppConfig;
use lead_qualifier::error::AppError;
use lead_qualifier::intake::LeadIntakeService;
use lead_qualifier::qualification::{QualificationRubric, ScoringEngine};
use lead_qualifier::telemetry;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let rubric = QualificationRubric::default().validated()?;
    let engine = Arc::new(ScoringEngine::new(rubric));
    let repository = Arc::new(InMemoryIntakeRepository::default());
    let intake_service = Arc::new(LeadIntakeService::new(
        repository,
        engine,
        config.qualification,
    ));

    let app = with_intake_routes(intake_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        qualified_threshold = config.qualification.qualified_threshold,
        "lead qualification service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
