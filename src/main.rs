mod config;
mod db;
mod errors;
mod handlers;
mod models;
mod utils;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use sqlx::PgPool;
use std::io;

use crate::config::Config;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().map_err(|err| {
        error!("Invalid configuration: {}", err);
        io::Error::new(io::ErrorKind::InvalidInput, err)
    })?;

    // Initialize the database pool
    let pool = db::create_pool(&config).await.map_err(|err| {
        error!("Failed to connect to the database: {}", err);
        io::Error::new(io::ErrorKind::ConnectionRefused, err)
    })?;

    db::bootstrap(&pool, config.seed_sample_data).await.map_err(|err| {
        error!("Error initializing database: {}", err);
        io::Error::new(io::ErrorKind::Other, err)
    })?;

    let (host, port) = config.bind_address();
    info!("Starting server at {}:{}", host, port);

    let data = web::Data::new(pool.clone());
    let result = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            .configure(handlers::routes::<PgPool>)
    })
    .bind((host, port))?
    .run()
    .await;

    info!("Server stopped, closing database pool");
    pool.close().await;
    result
}
