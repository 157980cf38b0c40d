// Route exports
pub mod assistant;
pub mod partnership;
pub mod portal;

use actix_web::{web, HttpRequest, HttpResponse};
use crate::config::{FrontendSettings, Settings};
use crate::core::DonationMatcher;
use crate::models::ErrorResponse;
use crate::services::{SupabaseClient, SupabaseError, SupabaseTables};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SupabaseClient>,
    pub matcher: DonationMatcher,
    pub frontend: FrontendSettings,
    /// False while Supabase credentials are missing or placeholders
    pub store_configured: bool,
}

impl AppState {
    /// Build the datastore client and matcher from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self, SupabaseError> {
        let store = SupabaseClient::new(
            settings.supabase.url.clone(),
            settings.supabase.api_key().to_string(),
            SupabaseTables::from(settings.tables.clone()),
            settings.supabase.timeout(),
        )?;

        Ok(Self {
            store: Arc::new(store),
            matcher: DonationMatcher::new(settings.scoring_weights()),
            frontend: settings.frontend.clone(),
            store_configured: settings.store_configured(),
        })
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(portal::index)).service(
        web::scope("/api/v1")
            .configure(portal::configure)
            .configure(assistant::configure)
            .configure(partnership::configure),
    );
}

/// Fallback for unknown paths
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    tracing::debug!("No route for {} {}", req.method(), req.path());
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Endpoint not found".to_string(),
        message: "The requested endpoint does not exist".to_string(),
        status_code: 404,
    })
}

/// Best-effort client address: proxy headers first, then the socket peer
pub fn client_ip(req: &HttpRequest) -> String {
    if let Some(forwarded) = header(req, "x-forwarded-for") {
        if let Some(first) = forwarded.split(',').map(str::trim).find(|ip| !ip.is_empty()) {
            return first.to_string();
        }
    }

    if let Some(real_ip) = header(req, "x-real-ip") {
        return real_ip.to_string();
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn header<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
