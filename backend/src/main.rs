mod config;
mod csv_exchange;
mod services;

use crate::config::AppConfig;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::fs;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config =
        AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    fs::create_dir_all(&config.export_dir)?;

    let bind_addr = (config.host.clone(), config.port);
    let max_upload_bytes = config.max_upload_bytes;
    info!(
        "Server running at http://{}:{} (exports under {})",
        config.host,
        config.port,
        config.export_dir.display()
    );

    let config = web::Data::new(config);
    HttpServer::new(move || {
        App::new()
            .app_data(web::PayloadConfig::new(max_upload_bytes))
            .app_data(config.clone())
            .service(services::entities::configure_routes())
    })
    .bind(bind_addr)?
    .run()
    .await
}
