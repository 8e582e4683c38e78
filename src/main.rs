use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware::Logger, web, App, HttpServer};

mod config;
mod errors;
mod handlers;
mod models;
mod store;

use config::Config;
use store::{MemoryStore, NoteStore};

/// Shared per-process state. Built once in `main` and handed to every worker.
pub struct AppState {
    pub notes: Arc<dyn NoteStore>,
}

impl AppState {
    pub fn new(notes: Arc<dyn NoteStore>) -> Self {
        AppState { notes }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let governor_conf = GovernorConfigBuilder::default()
        .per_second(config.rate_limit_replenish_secs)
        .burst_size(config.rate_limit_burst)
        .finish()
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "rate limit values must be non-zero",
            )
        })?;

    let state = web::Data::new(AppState::new(Arc::new(MemoryStore::new())));
    let max_body_bytes = config.max_body_bytes;

    log::info!("listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Governor::new(&governor_conf))
            .wrap(Logger::default())
            .configure(handlers::configure(max_body_bytes))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
