//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use forum_common::{AppConfig, AppError, EmailProvider, TokenService};
use forum_db::{
    create_pool, MySqlCommentRepository, MySqlLikeRepository, MySqlPostRepository,
    MySqlUserRepository, MySqlVerificationCodeRepository,
};
use forum_service::{
    ConsoleEmailSender, EmailSender, NoopEmailSender, SendgridEmailSender, ServiceContextBuilder,
};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes sit outside the rate limiter so probes keep working
/// under load.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();

    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to MySQL...");
    let db_config = forum_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        require_ssl: config.database.require_ssl,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("MySQL connection established");

    let token_service = Arc::new(TokenService::new(
        &config.jwt.secret,
        config.jwt.token_expiry,
    ));

    let email_sender: Arc<dyn EmailSender> = match config.email.provider {
        EmailProvider::Sendgrid => Arc::new(SendgridEmailSender::new(
            config.email.api_key.clone(),
            config.email.from_address.clone(),
        )),
        EmailProvider::Console => Arc::new(ConsoleEmailSender::new()),
        EmailProvider::Noop => Arc::new(NoopEmailSender::new()),
    };
    info!(provider = ?config.email.provider, "Email sender configured");

    let user_repo = Arc::new(MySqlUserRepository::new(pool.clone()));
    let code_repo = Arc::new(MySqlVerificationCodeRepository::new(pool.clone()));
    let post_repo = Arc::new(MySqlPostRepository::new(pool.clone()));
    let comment_repo = Arc::new(MySqlCommentRepository::new(pool.clone()));
    let like_repo = Arc::new(MySqlLikeRepository::new(pool.clone()));

    let service_context = ServiceContextBuilder::new()
        .user_repo(user_repo)
        .code_repo(code_repo)
        .post_repo(post_repo)
        .comment_repo(comment_repo)
        .like_repo(like_repo)
        .token_service(token_service)
        .email_sender(email_sender)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.server.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, &addr).await
}
