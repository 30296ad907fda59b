use std::sync::Arc;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use sqlx::postgres::PgPoolOptions;

use dailyhelper::auth::AuthMiddleware;
use dailyhelper::config::Config;
use dailyhelper::identity::{IdentityService, PgUserStore};
use dailyhelper::repository::{NoteRepository, TaskRepository};
use dailyhelper::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(config.db.max_connections)
        .connect(&config.db.connection_string)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let identity = IdentityService::new(
        Arc::new(PgUserStore::new(pool.clone())),
        config.jwt.clone(),
    );
    let note_repo = NoteRepository::new(pool.clone());
    let task_repo = TaskRepository::new(pool);
    let jwt_settings = config.jwt.clone();

    if !jwt_settings.require_token_expiry {
        log::warn!("token expiry requirement disabled: tokens without an exp claim never expire");
    }

    log::info!("starting server at {}", config.server_url());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(identity.clone()))
            .app_data(web::Data::new(note_repo.clone()))
            .app_data(web::Data::new(task_repo.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(routes::health::health)
            .service(
                web::scope("/api")
                    .wrap(AuthMiddleware::new(jwt_settings.clone()))
                    .configure(routes::config),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .run()
    .await
}
