mod config;
mod dates;
mod documents;
mod error;
mod lookup;
mod services;
mod session;
mod state;
mod store;
mod validation;

use crate::config::AppConfig;
use crate::session::SessionsState;
use crate::state::AppState;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    let (host, port, session_idle) = (config.host.clone(), config.port, config.session_idle);
    info!(
        "Datos en {}, plantillas en {}, documentos en {}",
        config.data_dir.display(),
        config.templates_dir.display(),
        config.output_dir.display()
    );
    let state = AppState::from_config(config).map_err(|e| io::Error::other(e.to_string()))?;
    let data = web::Data::new(state);
    let sessions = SessionsState::new(session_idle);

    info!("Server running at http://{}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(2 * 1024 * 1024)) // 2 MB
            .app_data(data.clone())
            .app_data(web::Data::new(sessions.clone()))
            .service(services::sessions::configure_routes())
            .service(services::lookup::configure_routes())
            .service(services::documents::configure_routes())
            .service(services::permits::configure_routes())
            .service(services::adverts::configure_routes())
            .service(services::compatibility::configure_routes())
    })
        .bind((host, port))?
        .run()
        .await
}
