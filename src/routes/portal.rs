use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;
use crate::error::ApiError;
use crate::models::{
    DonateRequest, DonateResponse, DonationLog, HealthResponse, PartnerLoginAttempt,
    PortalInfoResponse, PortalLoginRequest, PortalLoginResponse,
};
use super::{client_ip, AppState};

/// Configure public portal routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/donate", web::get().to(donate_info))
        .route("/donate", web::post().to(start_donation))
        .route("/partner/login", web::get().to(partner_portal_info))
        .route("/partner/login", web::post().to(partner_portal_login));
}

/// Service index
///
/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "FoodShare AI Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now(),
        "endpoints": {
            "health": "/api/v1/health",
            "donate": "/api/v1/donate",
            "partner_login": "/api/v1/partner/login",
            "ai_chat": "/api/v1/ai/chat",
            "ai_guidelines": "/api/v1/ai/guidelines",
            "ai_donation_form": "/api/v1/ai/donation-form",
            "partnership_overview": "/api/v1/partnership/overview",
            "partnership_partners": "/api/v1/partnership/partners",
            "partnership_register": "/api/v1/partnership/register",
            "partnership_login": "/api/v1/partnership/partner/login",
            "food_requests": "/api/v1/partnership/food-requests",
            "match_donations": "/api/v1/partnership/match-donations",
        },
    }))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    match state.store.health_check().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: "healthy".to_string(),
            database: "connected".to_string(),
            timestamp: Utc::now(),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
            error: None,
        }),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            HttpResponse::InternalServerError().json(HealthResponse {
                status: "unhealthy".to_string(),
                database: "disconnected".to_string(),
                timestamp: Utc::now(),
                version: None,
                error: Some(e.to_string()),
            })
        }
    }
}

async fn donate_info(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(PortalInfoResponse {
        message: "FoodShare AI Donation Portal".to_string(),
        description: "Connecting surplus food with those in need".to_string(),
        details: json!({
            "weekly_distribution": "2,000,000 lbs",
            "ai_chatbot_url": state.frontend.ai_url,
            "safety_guidelines": "AI will guide you through food safety requirements",
        }),
    })
}

/// Start the donation flow
///
/// POST /api/v1/donate
///
/// The body is optional; without a `user_id` a fresh one is issued and
/// doubles as the chat session id.
async fn start_donation(
    state: web::Data<AppState>,
    body: Option<web::Json<DonateRequest>>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user_id = body
        .and_then(|body| body.into_inner().user_id)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let log = DonationLog {
        user_id: user_id.clone(),
        action: "donate_initiated".to_string(),
        timestamp: Utc::now(),
        ip_address: client_ip(&req),
    };

    state
        .store
        .log_donation(&log)
        .await
        .map_err(ApiError::store("Failed to process donation"))?;

    tracing::info!("Donation flow started for {}", user_id);

    Ok(HttpResponse::Ok().json(DonateResponse {
        success: true,
        message: "Donation process initiated".to_string(),
        ai_chatbot_url: state.frontend.ai_url.clone(),
        session_id: user_id,
        next_step: "Redirecting to AI chatbot for food safety guidance".to_string(),
    }))
}

async fn partner_portal_info(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(PortalInfoResponse {
        message: "FoodShare Partner Portal".to_string(),
        description: "Building partnerships for food security across India".to_string(),
        details: json!({
            "partnership_site_url": state.frontend.partnership_url,
            "features": [
                "NGO partner registration",
                "Food request management",
                "Donation matching system",
                "Impact tracking",
            ],
        }),
    })
}

/// Record a partner-portal login attempt and hand out the portal URL
///
/// POST /api/v1/partner/login
async fn partner_portal_login(
    state: web::Data<AppState>,
    body: web::Json<PortalLoginRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let attempt = PartnerLoginAttempt {
        email: body.email.clone(),
        login_attempt: Utc::now(),
        ip_address: client_ip(&req),
        status: "attempted".to_string(),
    };

    state
        .store
        .log_portal_login(&attempt)
        .await
        .map_err(ApiError::store("Failed to process partner login"))?;

    Ok(HttpResponse::Ok().json(PortalLoginResponse {
        success: true,
        message: "Partner login processed".to_string(),
        partnership_site_url: state.frontend.partnership_url.clone(),
        partner_id: Uuid::new_v4().to_string(),
        next_step: "Redirecting to partnership management portal".to_string(),
    }))
}
