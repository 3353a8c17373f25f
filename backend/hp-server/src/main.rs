use hp_auth::{IdentityProvider, JwtValidator, OidcIdentityProvider, OidcSettings};
use hp_config::Config;
use hp_server::{AppState, CookieSettings, ServerError, build_router, logger};
use hp_session::{SessionSettings, SessionStore};
use hp_tenant::TenantApiClient;

use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

const SIGNED_OUT_PATH: &str = "/signed-out";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting hp-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let identity = build_identity_provider(&config)?;

    let tenant_api = TenantApiClient::new(&config.tenant_api.host)?;
    info!("Tenant API: {}", tenant_api.base_url());

    let sessions = SessionStore::new(
        SessionSettings {
            org_claim_fallback: config.auth.org_claim_fallback.clone(),
            metadata_namespace: config.auth.metadata_namespace.clone(),
            login_timeout: config.login_timeout(),
            tenant_timeout: config.tenant_timeout(),
            voice_assistant_url: config.modules.voice_assistant_url.clone(),
        },
        Arc::new(tenant_api),
        config.session.max_sessions,
    );

    let app_state = AppState {
        sessions,
        identity,
        cookie: CookieSettings {
            name: config.session.cookie_name.clone(),
            secure: config.session.secure_cookie,
        },
        signed_out_url: config.server.public_url_for(SIGNED_OUT_PATH),
    };

    let app = build_router(app_state, &config.server.cors_origins);

    // Create TCP listener
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}

/// ID-token validator plus provider endpoints from `[auth]`.
fn build_identity_provider(config: &Config) -> Result<Arc<dyn IdentityProvider>, ServerError> {
    let mut validator = if let Some(ref secret) = config.auth.jwt_secret {
        info!("JWT: HS256 ID-token validation");
        JwtValidator::with_hs256(secret.as_bytes())
    } else if let Some(ref key_path) = config.auth.jwt_public_key_path {
        let full_path = Config::config_dir()?.join(key_path);
        let public_key =
            std::fs::read_to_string(&full_path).map_err(|e| ServerError::JwtKeyFile {
                path: full_path.display().to_string(),
                source: e,
            })?;
        info!("JWT: RS256 ID-token validation");
        JwtValidator::with_rs256(&public_key)?
    } else {
        return Err(ServerError::Config(hp_config::ConfigError::auth(
            "either auth.jwt_secret or auth.jwt_public_key_path is required",
        )));
    };

    if let Some(ref issuer) = config.auth.issuer {
        validator = validator.with_issuer(issuer);
    }
    if let Some(ref audience) = config.auth.audience {
        validator = validator.with_audience(audience);
    }

    let provider = OidcIdentityProvider::new(
        OidcSettings {
            authorize_url: config.auth.authorize_url.clone(),
            logout_url: config.auth.logout_url.clone(),
            client_id: config.auth.client_id.clone(),
            redirect_uri: config.auth.redirect_uri.clone(),
        },
        validator,
    )?;

    Ok(Arc::new(provider))
}
