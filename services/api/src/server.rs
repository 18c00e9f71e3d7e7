use crate::cli::ServeArgs;
use crate::infra::{seed_demo_board, AppState, InMemoryBoardStore, InMemorySessions};
use crate::routes::board_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use job_board::config::AppConfig;
use job_board::error::AppError;
use job_board::telemetry;
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

    let store = Arc::new(InMemoryBoardStore::default());
    let sessions = Arc::new(InMemorySessions::default());

    if args.seed_demo {
        let fixture = seed_demo_board(&store, &sessions);
        info!(
            company = %fixture.company_id.0,
            job = %fixture.job_id.0,
            owner_token = fixture.owner_token,
            applicant_token = fixture.applicant_token,
            "seeded demo board data"
        );
    }

    let app = board_router(store, sessions)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job board service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
