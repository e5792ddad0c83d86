use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use feedback_board::config::Config;
use feedback_board::{db, routes};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("starting up...");

    let config = Config::load();

    let pool = match db::establish_connection(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to initialise database pool: {e:?}");
            std::process::exit(1);
        }
    };

    if let Err(e) = db::init_schema(&pool).await {
        log::error!("Failed to initialise schema: {e:?}");
        std::process::exit(1);
    }

    let admin = config.admin.clone();
    let port = config.port;
    log::info!("Listening on port {port}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(admin.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .configure(routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
