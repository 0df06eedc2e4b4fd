use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use job_assistant_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware, routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_api = Router::new()
        .route("/api/auth/telegram", post(routes::auth::telegram_auth))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.public_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let api = Router::new()
        .route(
            "/api/recruiter/start",
            post(routes::recruiter::start_conversation),
        )
        .route(
            "/api/recruiter/continue",
            post(routes::recruiter::continue_conversation),
        )
        .route(
            "/api/recruiter/profile",
            get(routes::recruiter::get_profile).delete(routes::recruiter::delete_profile),
        )
        .route(
            "/api/recruiter/recommendations",
            get(routes::recruiter::get_recommendations),
        )
        .route(
            "/api/jobs/compatibility",
            post(routes::jobs::analyze_compatibility),
        )
        .route("/api/jobs/translate", post(routes::jobs::translate_job))
        .route(
            "/api/jobs/cover-letter",
            post(routes::jobs::generate_cover_letter),
        )
        .route(
            "/api/documents/analyze",
            post(routes::analysis::analyze_document),
        )
        .layer(axum::middleware::from_fn(
            middleware::auth::require_bearer_auth,
        ))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.api_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let app = base_routes
        .merge(public_api)
        .merge(api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
