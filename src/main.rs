use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use foodshare_api::config::Settings;
use foodshare_api::error::{handle_json_payload_error, handle_query_payload_error};
use foodshare_api::routes::{self, AppState};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Logging is not up yet, so configuration errors go to stderr
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings);

    info!("Starting FoodShare API...");
    info!("Configuration loaded successfully");

    if !settings.store_configured() {
        warn!("Supabase credentials missing or placeholders; guidelines run in demo mode and store calls will fail");
    }

    let app_state = AppState::from_settings(&settings).map_err(|e| {
        error!("Failed to initialize Supabase client: {}", e);
        std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
    })?;

    info!("Matcher initialized with weights: {:?}", app_state.matcher.weights());

    let cors_origins = settings.cors_origins();
    info!("CORS origins: {:?}", cors_origins);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header()
            .supports_credentials()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
            .default_service(web::to(routes::not_found))
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
