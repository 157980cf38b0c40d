use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::models::domain::{DonationMatch, FoodRequest, NgoPartner, PartnerSummary, Partnership, SafetyGuideline};

/// Response for the match-donations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDonationsResponse {
    pub success: bool,
    pub matches: Vec<DonationMatch>,
    pub total_matches: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct DonateResponse {
    pub success: bool,
    pub message: String,
    pub ai_chatbot_url: String,
    pub session_id: String,
    pub next_step: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PortalLoginResponse {
    pub success: bool,
    pub message: String,
    pub partnership_site_url: String,
    pub partner_id: String,
    pub next_step: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub session_id: String,
    pub guidelines: Vec<SafetyGuideline>,
}

/// Whether guidelines came from the live catalogue or the demo fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuidelineMode {
    Live,
    Demo,
}

#[derive(Debug, Clone, Serialize)]
pub struct GuidelinesResponse {
    pub guidelines: Vec<SafetyGuideline>,
    pub last_updated: chrono::DateTime<chrono::Utc>,
    pub mode: GuidelineMode,
}

#[derive(Debug, Clone, Serialize)]
pub struct DonationFormResponse {
    pub success: bool,
    pub message: String,
    pub donation_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImpactStats {
    pub food_distributed: String,
    pub partners_active: u64,
    pub communities_served: String,
    pub waste_reduced: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartnershipOverviewResponse {
    pub success: bool,
    pub message: String,
    pub description: String,
    pub total_partners: u64,
    pub partnerships: Vec<Partnership>,
    pub impact_stats: ImpactStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartnersResponse {
    pub success: bool,
    pub partners: Vec<NgoPartner>,
    pub total_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartnerRegistrationResponse {
    pub success: bool,
    pub message: String,
    pub partner_id: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PartnerLoginResponse {
    pub success: bool,
    pub message: String,
    pub partner: PartnerSummary,
    pub session_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FoodRequestsResponse {
    pub success: bool,
    pub requests: Vec<FoodRequest>,
    pub total_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FoodRequestCreatedResponse {
    pub success: bool,
    pub message: String,
    pub request_id: String,
}

/// Static information pages (GET on the portal endpoints)
#[derive(Debug, Clone, Serialize)]
pub struct PortalInfoResponse {
    pub message: String,
    pub description: String,
    #[serde(flatten)]
    pub details: Value,
}
