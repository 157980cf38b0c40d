use serde::{Deserialize, Serialize};
use validator::Validate;

/// Start of the donation flow from the public site
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DonateRequest {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Partner-portal login from the public site (logged, not authenticated)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PortalLoginRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub email: String,
}

/// Partner login against the registered partner list
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PartnerLoginRequest {
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DonationFormRequest {
    #[validate(length(min = 1))]
    pub donor_name: String,
    #[validate(email)]
    pub donor_email: String,
    #[serde(default)]
    pub donor_phone: Option<String>,
    #[validate(length(min = 1))]
    pub food_type: String,
    #[validate(length(min = 1))]
    #[serde(deserialize_with = "crate::models::domain::quantity_text")]
    pub quantity: String,
    #[serde(default)]
    pub expiry_date: Option<String>,
    #[validate(length(min = 1))]
    pub pickup_location: String,
    #[serde(default)]
    pub preferred_pickup_time: Option<String>,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FoodRequestSubmission {
    #[validate(length(min = 1))]
    pub partner_id: String,
    #[serde(default)]
    pub requested_food_types: Vec<String>,
    #[validate(length(min = 1))]
    #[serde(deserialize_with = "crate::models::domain::quantity_text")]
    pub quantity_needed: String,
    #[serde(default = "default_urgency")]
    pub urgency_level: String,
    #[validate(length(min = 1))]
    pub delivery_location: String,
    #[serde(default)]
    pub preferred_delivery_time: Option<String>,
    #[serde(default)]
    pub beneficiary_count: i64,
    #[serde(default)]
    pub special_requirements: Option<String>,
}

fn default_urgency() -> String {
    "medium".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PartnerRegistrationRequest {
    #[validate(length(min = 1))]
    pub organization_name: String,
    #[validate(length(min = 1))]
    pub contact_person: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub capacity: Option<String>,
    #[serde(default)]
    pub service_areas: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FoodRequestsQuery {
    #[serde(default)]
    pub partner_id: Option<String>,
}

/// Query parameters of the match-donations endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchDonationsQuery {
    #[serde(default)]
    pub partner_id: Option<String>,
    #[serde(default)]
    pub sort: MatchOrdering,
}

/// Order in which enumerated matches are returned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOrdering {
    /// Request order, then donation order
    #[default]
    Enumeration,
    /// Highest score first, ties keep enumeration order
    Score,
}
