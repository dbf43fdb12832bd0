use crate::{
    adapters::http::app_state::AppState,
    application::{
        jwt::JwtCodec,
        use_cases::auth::{AuthUseCases, RoleRepo, UserRepo},
    },
    infra::{InfraError, config::AppConfig, postgres_persistence, seed::ensure_default_roles},
};
use secrecy::{ExposeSecret, SecretString};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> Result<AppState, InfraError> {
    let config = AppConfig::from_env()?;

    let postgres_arc = Arc::new(
        postgres_persistence(&config.database_url, config.database_max_connections).await?,
    );

    let user_repo_arc = postgres_arc.clone() as Arc<dyn UserRepo>;
    let role_repo_arc = postgres_arc.clone() as Arc<dyn RoleRepo>;

    ensure_default_roles(role_repo_arc.as_ref())
        .await
        .map_err(InfraError::Seed)?;

    Ok(build_app_state(config, user_repo_arc, role_repo_arc))
}

/// Wires the use cases over the given stores. Tokens are only ever signed and
/// checked through the codec built here.
pub fn build_app_state(
    config: AppConfig,
    user_repo: Arc<dyn UserRepo>,
    role_repo: Arc<dyn RoleRepo>,
) -> AppState {
    let secret = SecretString::new(config.jwt_secret.expose_secret().into());
    let codec = Arc::new(JwtCodec::new(secret, config.token_ttl));
    let auth_use_cases = AuthUseCases::new(user_repo, role_repo, codec);

    AppState {
        config: Arc::new(config),
        auth_use_cases: Arc::new(auth_use_cases),
    }
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "authservice=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false) // don’t show target (module path)
        .with_level(true) // show log level
        .pretty(); // human-friendly, with colors

    // File (structured JSON logs). Skipped if the file cannot be created.
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
