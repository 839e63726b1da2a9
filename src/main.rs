use anyhow::Result;
use crm_core::application::{
    ports::{
        security::{PasswordHasher, TokenIssuer},
        time::Clock,
    },
    services::ApplicationServices,
};
use crm_core::config::AppConfig;
use crm_core::domain::{
    activity::ActivityLogRepository, customer::CustomerRepository, note::CustomerNoteRepository,
    user::UserRepository,
};
use crm_core::infrastructure::{
    bootstrap, database,
    repositories::{
        PostgresActivityLogRepository, PostgresCustomerNoteRepository, PostgresCustomerRepository,
        PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::JwtTokenIssuer},
    time::SystemClock,
};
use crm_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap_server().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap_server() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool.clone()));
    let customer_repo: Arc<dyn CustomerRepository> =
        Arc::new(PostgresCustomerRepository::new(pool.clone()));
    let note_repo: Arc<dyn CustomerNoteRepository> =
        Arc::new(PostgresCustomerNoteRepository::new(pool.clone()));
    let activity_repo: Arc<dyn ActivityLogRepository> =
        Arc::new(PostgresActivityLogRepository::new(pool.clone()));

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_issuer: Arc<dyn TokenIssuer> = Arc::new(JwtTokenIssuer::new(
        config.jwt_secret(),
        config.access_token_ttl(),
        config.refresh_token_ttl(),
    ));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    bootstrap::seed_default_admin(
        &user_repo,
        &password_hasher,
        &clock,
        config.bootstrap_admin_email(),
        config.bootstrap_admin_password(),
    )
    .await?;

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&user_repo),
        Arc::clone(&customer_repo),
        Arc::clone(&note_repo),
        Arc::clone(&activity_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&token_issuer),
        Arc::clone(&clock),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
