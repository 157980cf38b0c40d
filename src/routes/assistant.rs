use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;
use crate::core::assistant::{self, CHAT_TYPE, REPLY_TYPE};
use crate::error::ApiError;
use crate::models::{
    AssistantReplyLog, ChatInteraction, ChatRequest, ChatResponse, DonationFormRequest,
    DonationFormResponse, FoodDonation, GuidelineMode, GuidelinesResponse, STATUS_PENDING,
};
use super::{client_ip, AppState};

/// Configure food-safety assistant routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/ai/chat", web::post().to(chat))
        .route("/ai/guidelines", web::get().to(guidelines))
        .route("/ai/donation-form", web::post().to(submit_donation_form));
}

/// Chat with the food-safety assistant
///
/// POST /api/v1/ai/chat
///
/// Both the user message and the canned reply are recorded before responding.
async fn chat(
    state: web::Data<AppState>,
    body: web::Json<ChatRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let ChatRequest { message, session_id } = body.into_inner();
    let session_id = session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let interaction = ChatInteraction {
        session_id: session_id.clone(),
        user_message: message,
        timestamp: Utc::now(),
        ip_address: client_ip(&req),
        chat_type: CHAT_TYPE.to_string(),
    };

    state
        .store
        .log_chat_interaction(&interaction)
        .await
        .map_err(ApiError::store("Failed to process chat message"))?;

    let reply = assistant::reply_to(&interaction.user_message);

    let reply_log = AssistantReplyLog {
        session_id: session_id.clone(),
        ai_response: reply.to_string(),
        timestamp: Utc::now(),
        response_type: REPLY_TYPE.to_string(),
    };

    state
        .store
        .log_assistant_reply(&reply_log)
        .await
        .map_err(ApiError::store("Failed to process chat message"))?;

    Ok(HttpResponse::Ok().json(ChatResponse {
        success: true,
        response: reply.to_string(),
        session_id,
        guidelines: assistant::food_safety_guidelines(),
    }))
}

/// Guideline catalogue; the short demo set while no datastore is configured
async fn guidelines(state: web::Data<AppState>) -> HttpResponse {
    let (guidelines, mode) = if state.store_configured {
        (assistant::food_safety_guidelines(), GuidelineMode::Live)
    } else {
        (assistant::demo_guidelines(), GuidelineMode::Demo)
    };

    HttpResponse::Ok().json(GuidelinesResponse {
        guidelines,
        last_updated: Utc::now(),
        mode,
    })
}

/// Store a donation collected by the assistant's form
///
/// POST /api/v1/ai/donation-form
async fn submit_donation_form(
    state: web::Data<AppState>,
    body: web::Json<DonationFormRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    let form = body.into_inner();

    let donation = FoodDonation {
        id: Uuid::new_v4().to_string(),
        food_type: form.food_type,
        quantity: form.quantity,
        status: STATUS_PENDING.to_string(),
        donor_name: Some(form.donor_name),
        donor_email: Some(form.donor_email),
        donor_phone: form.donor_phone,
        expiry_date: form.expiry_date,
        pickup_location: Some(form.pickup_location),
        preferred_pickup_time: form.preferred_pickup_time,
        special_instructions: form.special_instructions,
        submission_time: Some(Utc::now().to_rfc3339()),
        created_at: None,
    };

    let donation_id = state
        .store
        .create_donation(&donation)
        .await
        .map_err(ApiError::store("Failed to submit donation form"))?;

    Ok(HttpResponse::Ok().json(DonationFormResponse {
        success: true,
        message: "Donation form submitted successfully".to_string(),
        donation_id,
    }))
}
