use folio_server::config::OWNER_EMAIL;
use folio_server::repository::init_db;
use folio_server::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    if let Err(e) = rolling_logger::init_logger(&config.log_dir, "folio-server") {
        eprintln!("Failed to initialize logger: {}", e);
    }
    log::info!("folio-server {} starting", env!("CARGO_PKG_VERSION"));

    let conn = init_db(&config.db_path).await?;
    let state = AppState::new(conn);

    match &config.admin_token {
        Some(token) => {
            let owner = state.admins.upsert_owner(OWNER_EMAIL, token).await?;
            log::info!("owner admin {} ready", owner.id);
        }
        None => log::warn!("FOLIO_ADMIN_TOKEN not set, no owner admin provisioned"),
    }

    let app = build_router(state, config.allowed_origin.as_deref());
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    log::info!("listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
