use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use employee_backend::config::AppConfig;
use employee_backend::services::employee::EmployeeService;
use employee_backend::{db, handlers};
use log::info;
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;

    let repository = db::create_repository(&config)
        .await
        .map_err(|err| io::Error::other(err.to_string()))?;
    let service = web::Data::new(EmployeeService::new(repository));

    info!("Starting server at {}", config.bind_address());

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(service.clone())
            .configure(handlers::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
