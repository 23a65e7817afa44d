mod advisor;
mod attachment;
mod auth;
mod calendar;
mod config;
mod crud;
mod filters;
mod icons;
mod models;
mod routes;
mod seed;
mod state;
mod store;
mod templates;
mod view;

use std::sync::Arc;

use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};

use crate::{
    advisor::GeminiClient,
    auth::{AdminCredentials, Sessions},
    config::Config,
    state::{AppState, ClockConfig},
    store::ContentStore,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(err) = run().await {
        eprintln!("Startup error: {err}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let config = Config::from_env()?;
    let credentials = AdminCredentials::new(&config.admin_user, &config.admin_password)
        .map_err(|err| format!("could not hash admin password: {err}"))?;

    let state = AppState {
        store: Arc::new(ContentStore::new(seed::collections())),
        sessions: Arc::new(Sessions::default()),
        credentials: Arc::new(credentials),
        advisor: Arc::new(GeminiClient::new(config.advisor.clone())),
        clock: ClockConfig {
            offset: config.clock_offset,
        },
    };
    let upload_limit = config.upload_limit;

    let address = format!("0.0.0.0:{}", config.port);
    log::info!("Starting Beltar hospital portal on http://{address}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::FormConfig::default().limit(upload_limit))
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .configure(routes::configure)
    })
    .bind(address)?
    .run()
    .await?;

    Ok(())
}
