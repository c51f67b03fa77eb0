mod cors;

use actix_web::{
    App, HttpServer,
    web::{self, JsonConfig},
};
use common::env_config::Config;
use gemini::GeminiClient;

// Upload and generation payloads carry base64 images; the actix default
// JSON limit (2 MB) is far too small for them.
const JSON_PAYLOAD_LIMIT: usize = 50 * 1024 * 1024;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // get env vars
    let config = Config::from_env();
    let config_data = config.clone();

    // get info
    let is_production = config.environment == "production";
    let origin = config.cors_allowed_origin.clone();

    // init logger
    if config.console_logging_enabled {
        logger::setup().expect("Failed to set up logger");
    }

    // init db connection
    let pool = db::setup(&config.database_url, is_production)
        .await
        .expect("Failed to set up database");

    // shared client for the generative AI service
    let gemini_client = GeminiClient::from_config(&config);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config_data.clone()))
            .app_data(web::Data::new(gemini_client.clone()))
            .app_data(JsonConfig::default().limit(JSON_PAYLOAD_LIMIT))
            .wrap(logger::middleware()) // 2nd
            .wrap(cors::middleware(&origin)) // 1st
            .service(
                web::scope("/api")
                    .service(api_auth::mount_auth())
                    .service(api_credits::mount_webhook())
                    .service(
                        web::scope("")
                            .wrap(api_auth::auth_middleware(config_data.clone()))
                            .service(api_auth::mount_user())
                            .service(api_studio::mount_studio())
                            .service(api_projects::mount_projects())
                            .service(api_credits::mount_credits())
                            .service(api_credits::mount_admin()),
                    ),
            )
    })
    .bind((config.server_host.as_str(), config.server_port))?
    .workers(config.num_workers)
    .run()
    .await
}
