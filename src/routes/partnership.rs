use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use uuid::Uuid;
use validator::Validate;
use crate::error::ApiError;
use crate::models::{
    FoodRequest, FoodRequestCreatedResponse, FoodRequestSubmission, FoodRequestsQuery,
    FoodRequestsResponse, ImpactStats, MatchDonationsQuery, MatchDonationsResponse, NgoPartner,
    PartnerLoginLog, PartnerLoginRequest, PartnerLoginResponse, PartnerRegistrationRequest,
    PartnerRegistrationResponse, PartnerSummary, PartnersResponse, PartnershipOverviewResponse,
    STATUS_PENDING,
};
use crate::services::SupabaseError;
use super::{client_ip, AppState};

const STATUS_PENDING_VERIFICATION: &str = "pending_verification";

/// Configure NGO partnership routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/partnership")
            .route("/overview", web::get().to(overview))
            .route("/partners", web::get().to(list_partners))
            .route("/register", web::post().to(register_partner))
            .route("/partner/login", web::post().to(partner_login))
            .route("/food-requests", web::get().to(list_food_requests))
            .route("/food-requests", web::post().to(create_food_request))
            .route("/match-donations", web::get().to(match_donations)),
    );
}

/// Treat `?partner_id=` the same as no filter
fn partner_filter(partner_id: &Option<String>) -> Option<&str> {
    partner_id.as_deref().map(str::trim).filter(|id| !id.is_empty())
}

async fn overview(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let partnerships = state
        .store
        .partnerships()
        .await
        .map_err(ApiError::store("Failed to fetch partnership data"))?;
    let total_partners = state
        .store
        .count_partners()
        .await
        .map_err(ApiError::store("Failed to fetch partnership data"))?;

    Ok(HttpResponse::Ok().json(PartnershipOverviewResponse {
        success: true,
        message: "Building Partnerships for Food Security".to_string(),
        description: "Together with our NGO partners, we're creating a sustainable network to combat food waste and hunger across India.".to_string(),
        total_partners,
        partnerships,
        impact_stats: ImpactStats {
            food_distributed: "2,000,000 lbs/week".to_string(),
            partners_active: total_partners,
            communities_served: "150+".to_string(),
            waste_reduced: "85%".to_string(),
        },
    }))
}

async fn list_partners(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let partners = state
        .store
        .partners()
        .await
        .map_err(ApiError::store("Failed to fetch partners"))?;

    Ok(HttpResponse::Ok().json(PartnersResponse {
        success: true,
        total_count: partners.len(),
        partners,
    }))
}

/// Register an NGO partner; new partners start unverified
///
/// POST /api/v1/partnership/register
async fn register_partner(
    state: web::Data<AppState>,
    body: web::Json<PartnerRegistrationRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    let registration = body.into_inner();

    let partner = NgoPartner {
        id: Uuid::new_v4().to_string(),
        organization_name: registration.organization_name,
        contact_person: registration.contact_person,
        email: registration.email,
        phone: registration.phone,
        address: registration.address,
        city: registration.city,
        state: registration.state,
        registration_number: registration.registration_number,
        focus_areas: registration.focus_areas,
        capacity: registration.capacity,
        service_areas: registration.service_areas,
        registration_date: Some(Utc::now().to_rfc3339()),
        status: STATUS_PENDING_VERIFICATION.to_string(),
        verified: false,
        created_at: None,
    };

    state
        .store
        .register_partner(&partner)
        .await
        .map_err(ApiError::store("Failed to register partner"))?;

    Ok(HttpResponse::Ok().json(PartnerRegistrationResponse {
        success: true,
        message: "Partner registration submitted successfully".to_string(),
        partner_id: partner.id,
        status: partner.status,
    }))
}

/// Partner login by email
///
/// POST /api/v1/partnership/partner/login
///
/// The password is accepted but not checked; a successful lookup is logged
/// and answered with a fresh session token.
async fn partner_login(
    state: web::Data<AppState>,
    body: web::Json<PartnerLoginRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;

    let partner = match state.store.partner_by_email(&body.email).await {
        Ok(partner) => partner,
        Err(SupabaseError::NotFound(_)) => {
            tracing::info!("Login for unknown partner email {}", body.email);
            return Err(ApiError::NotFound("Partner not found".to_string()));
        }
        Err(e) => return Err(ApiError::store("Failed to process login")(e)),
    };

    let log = PartnerLoginLog {
        partner_id: partner.id.clone(),
        email: body.email.clone(),
        login_time: Utc::now(),
        ip_address: client_ip(&req),
        status: "success".to_string(),
    };

    state
        .store
        .log_partner_login(&log)
        .await
        .map_err(ApiError::store("Failed to process login"))?;

    Ok(HttpResponse::Ok().json(PartnerLoginResponse {
        success: true,
        message: "Login successful".to_string(),
        partner: PartnerSummary::from(&partner),
        session_token: Uuid::new_v4().to_string(),
    }))
}

async fn list_food_requests(
    state: web::Data<AppState>,
    query: web::Query<FoodRequestsQuery>,
) -> Result<HttpResponse, ApiError> {
    let requests = state
        .store
        .food_requests(partner_filter(&query.partner_id))
        .await
        .map_err(ApiError::store("Failed to fetch food requests"))?;

    Ok(HttpResponse::Ok().json(FoodRequestsResponse {
        success: true,
        total_count: requests.len(),
        requests,
    }))
}

/// File a food request on behalf of a partner
///
/// POST /api/v1/partnership/food-requests
async fn create_food_request(
    state: web::Data<AppState>,
    body: web::Json<FoodRequestSubmission>,
) -> Result<HttpResponse, ApiError> {
    body.validate()?;
    let submission = body.into_inner();

    let request = FoodRequest {
        id: Uuid::new_v4().to_string(),
        partner_id: Some(submission.partner_id),
        requested_food_types: submission.requested_food_types,
        quantity_needed: submission.quantity_needed,
        urgency_level: submission.urgency_level,
        status: STATUS_PENDING.to_string(),
        delivery_location: Some(submission.delivery_location),
        preferred_delivery_time: submission.preferred_delivery_time,
        beneficiary_count: Some(submission.beneficiary_count),
        special_requirements: submission.special_requirements,
        request_date: Some(Utc::now().to_rfc3339()),
        created_at: None,
    };

    state
        .store
        .create_food_request(&request)
        .await
        .map_err(ApiError::store("Failed to create food request"))?;

    Ok(HttpResponse::Ok().json(FoodRequestCreatedResponse {
        success: true,
        message: "Food request submitted successfully".to_string(),
        request_id: request.id,
    }))
}

/// Match pending donations against pending food requests
///
/// GET /api/v1/partnership/match-donations
///
/// Query parameters:
/// - `partner_id`: only consider this partner's requests
/// - `sort=score`: highest score first instead of enumeration order
async fn match_donations(
    state: web::Data<AppState>,
    query: web::Query<MatchDonationsQuery>,
) -> Result<HttpResponse, ApiError> {
    let partner_id = partner_filter(&query.partner_id);

    let requests = state
        .store
        .pending_food_requests(partner_id)
        .await
        .map_err(ApiError::store("Failed to match donations"))?;
    let donations = state
        .store
        .pending_donations()
        .await
        .map_err(ApiError::store("Failed to match donations"))?;

    let result = state
        .matcher
        .find_matches(&requests, &donations)
        .ordered(query.sort);

    tracing::info!(
        "Matched {} pairs from {} requests and {} donations (partner: {:?})",
        result.matches.len(),
        result.requests_considered,
        result.donations_considered,
        partner_id
    );

    Ok(HttpResponse::Ok().json(MatchDonationsResponse {
        success: true,
        total_matches: result.matches.len(),
        matches: result.matches,
    }))
}
