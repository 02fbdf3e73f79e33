use crate::cli::ServeArgs;
use crate::infra::{policy_override, AppState};
use crate::routes::assessment_routes;
use analyst_fit::assessment::QuestionBank;
use analyst_fit::config::AppConfig;
use analyst_fit::error::AppError;
use analyst_fit::telemetry::{self, LogOutput};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
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
    if let Some(policy) = policy_override(args.lenient) {
        config.assessment.answer_policy = policy;
    }

    telemetry::init(&config.telemetry, LogOutput::Stdout)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        bank: Arc::new(QuestionBank::standard()),
        answer_policy: config.assessment.answer_policy,
    };

    let app = assessment_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        policy = config.assessment.answer_policy.label(),
        "analyst fit assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
