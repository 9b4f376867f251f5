//! Service entry point: configuration, wiring, and the axum server.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use axum::{http::HeaderValue, middleware, routing::get, Json, Router};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use dna_assessment::adapters::auth::{
    GoTrueConfig, GoTrueIdentityProvider, GoTrueSessionValidator,
};
use dna_assessment::adapters::http::middleware::{auth_middleware, AuthState};
use dna_assessment::adapters::http::{
    assessment_routes, auth_routes, catalog_routes, profile_routes, AssessmentHandlers,
    AuthHandlers, ProfileHandlers,
};
use dna_assessment::adapters::postgres::{
    PostgresAssessmentRepository, PostgresProfileRepository,
};
use dna_assessment::adapters::storage::{BucketAvatarStorage, LocalAvatarStorage};
use dna_assessment::application::handlers::assessment::{
    CheckRetakeHandler, GetLatestAssessmentHandler, GetReportHandler, ListAssessmentsHandler,
    SubmitAssessmentHandler,
};
use dna_assessment::application::handlers::profile::{
    GetProfileHandler, UpdateProfileHandler, UploadAvatarHandler,
};
use dna_assessment::config::AppConfig;
use dna_assessment::ports::{AssessmentRepository, AvatarStorage, IdentityProvider, ProfileRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("database migrations applied");
    }

    // Auth adapters
    let gotrue_config = GoTrueConfig {
        base_url: config.auth.provider_url.clone(),
        api_key: config.auth.api_key.clone(),
        jwt_secret: config.auth.jwt_secret.clone(),
        audience: config.auth.audience.clone(),
    };
    let identity_provider: Arc<dyn IdentityProvider> =
        Arc::new(GoTrueIdentityProvider::new(gotrue_config.clone()));
    let session_validator: AuthState = Arc::new(GoTrueSessionValidator::new(&gotrue_config));

    // Persistence adapters
    let assessment_repository: Arc<dyn AssessmentRepository> =
        Arc::new(PostgresAssessmentRepository::new(pool.clone()));
    let profile_repository: Arc<dyn ProfileRepository> =
        Arc::new(PostgresProfileRepository::new(pool.clone()));

    // Avatar storage
    let avatar_storage: Arc<dyn AvatarStorage> = if config.storage.uses_bucket() {
        let bucket_url = config
            .storage
            .bucket_url
            .clone()
            .unwrap_or_default();
        let api_key = config
            .storage
            .bucket_api_key
            .clone()
            .unwrap_or_else(|| config.auth.api_key.clone());
        Arc::new(BucketAvatarStorage::new(
            bucket_url,
            config.storage.public_base_url.clone(),
            api_key,
        ))
    } else {
        let base_path = config.storage.local_path.clone().unwrap_or_default();
        Arc::new(LocalAvatarStorage::new(
            base_path,
            config.storage.public_base_url.clone(),
        ))
    };

    // Use-case handlers
    let assessment_handlers = AssessmentHandlers::new(
        Arc::new(SubmitAssessmentHandler::new(assessment_repository.clone())),
        Arc::new(ListAssessmentsHandler::new(assessment_repository.clone())),
        Arc::new(GetLatestAssessmentHandler::new(assessment_repository.clone())),
        Arc::new(GetReportHandler::new(assessment_repository.clone())),
        Arc::new(CheckRetakeHandler::new(assessment_repository)),
    );
    let profile_handlers = ProfileHandlers::new(
        Arc::new(GetProfileHandler::new(profile_repository.clone())),
        Arc::new(UpdateProfileHandler::new(profile_repository.clone())),
        Arc::new(UploadAvatarHandler::new(avatar_storage, profile_repository)),
    );
    let auth_handlers = AuthHandlers::new(identity_provider);

    let app = Router::new()
        .nest("/api/auth", auth_routes(auth_handlers))
        .nest("/api/catalog", catalog_routes())
        .nest("/api/assessments", assessment_routes(assessment_handlers))
        .nest("/api/profile", profile_routes(profile_handlers))
        .route("/health", get(health))
        .layer(middleware::from_fn_with_state(
            session_validator,
            auth_middleware,
        ))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                ))),
        );

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "dna-assessment listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
