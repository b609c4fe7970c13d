use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};
use std::io;
use std::sync::Arc;

use taskgate::config::Config;
use taskgate::store::PgStore;
use taskgate::{db, routes, AppState};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    if !config.cookie_secure {
        log::warn!("COOKIE_SECURE is off; refresh cookies will be sent over plain HTTP");
    }

    let pool = db::connect(&config).await.map_err(|e| {
        log::error!("Failed to connect to database: {}", e);
        io::Error::new(io::ErrorKind::ConnectionRefused, e)
    })?;
    db::init_schema(&pool)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let state = AppState::from_config(Arc::new(PgStore::new(pool)), &config);

    log::info!("Starting server at {}", config.server_url());
    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .supports_credentials()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(|cfg| routes::config(cfg, state))
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
