use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Lifecycle status shared by requests and donations that are still open
pub const STATUS_PENDING: &str = "pending";

/// Food request filed by an NGO partner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRequest {
    pub id: String,
    #[serde(default)]
    pub partner_id: Option<String>,
    #[serde(default, deserialize_with = "food_types")]
    pub requested_food_types: Vec<String>,
    #[serde(default, deserialize_with = "quantity_text")]
    pub quantity_needed: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub urgency_level: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_delivery_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl FoodRequest {
    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING
    }

    pub fn urgency(&self) -> UrgencyLevel {
        UrgencyLevel::from(self.urgency_level.as_str())
    }
}

/// Surplus food offered by a donor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodDonation {
    pub id: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub food_type: String,
    #[serde(default, deserialize_with = "quantity_text")]
    pub quantity: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_pickup_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl FoodDonation {
    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING
    }
}

/// Urgency tag as understood by scoring.
///
/// The stored value is free text; only the exact strings `"high"` and
/// `"medium"` carry weight, everything else (including `"low"`) is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyLevel {
    High,
    Medium,
    Other,
}

impl From<&str> for UrgencyLevel {
    fn from(value: &str) -> Self {
        match value {
            "high" => UrgencyLevel::High,
            "medium" => UrgencyLevel::Medium,
            _ => UrgencyLevel::Other,
        }
    }
}

/// Pairing of one request with one donation, as produced by the matcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationMatch {
    pub request_id: String,
    pub donation_id: String,
    pub partner_id: Option<String>,
    pub match_score: u8,
    pub created_at: DateTime<Utc>,
}

/// Points awarded by each scoring term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    pub urgency_high: u32,
    pub urgency_medium: u32,
    /// Awarded once per requested food type found in the donation
    pub food_type: u32,
    /// Donation covers the full quantity needed
    pub quantity_full: u32,
    /// Donation covers at least `partial_quantity_percent` of the need
    pub quantity_partial: u32,
    pub partial_quantity_percent: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            urgency_high: 30,
            urgency_medium: 20,
            food_type: 25,
            quantity_full: 20,
            quantity_partial: 15,
            partial_quantity_percent: 70,
        }
    }
}

/// Registered NGO partner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NgoPartner {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub organization_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_person: String,
    #[serde(default, deserialize_with = "null_as_default")]
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
    #[serde(default, deserialize_with = "null_as_default")]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub capacity: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_areas: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Subset of partner fields returned after a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerSummary {
    pub id: String,
    pub organization_name: String,
    pub contact_person: String,
    pub verified: bool,
    pub status: String,
}

impl From<&NgoPartner> for PartnerSummary {
    fn from(partner: &NgoPartner) -> Self {
        Self {
            id: partner.id.clone(),
            organization_name: partner.organization_name.clone(),
            contact_person: partner.contact_person.clone(),
            verified: partner.verified,
            status: partner.status.clone(),
        }
    }
}

/// Partnership programme record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partnership {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub partner_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default)]
    pub impact_metrics: Value,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Row written when a visitor starts the donation flow
#[derive(Debug, Clone, Serialize)]
pub struct DonationLog {
    pub user_id: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
    pub ip_address: String,
}

/// Row written for every partner-portal login attempt
#[derive(Debug, Clone, Serialize)]
pub struct PartnerLoginAttempt {
    pub email: String,
    pub login_attempt: DateTime<Utc>,
    pub ip_address: String,
    pub status: String,
}

/// Row written after a partner was found by email
#[derive(Debug, Clone, Serialize)]
pub struct PartnerLoginLog {
    pub partner_id: String,
    pub email: String,
    pub login_time: DateTime<Utc>,
    pub ip_address: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatInteraction {
    pub session_id: String,
    pub user_message: String,
    pub timestamp: DateTime<Utc>,
    pub ip_address: String,
    pub chat_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssistantReplyLog {
    pub session_id: String,
    pub ai_response: String,
    pub timestamp: DateTime<Utc>,
    pub response_type: String,
}

/// One entry of the food-safety guideline catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SafetyGuideline {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Quantities are stored as text but clients sometimes send bare numbers
pub(crate) fn quantity_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    })
}

/// Text column that may hold any JSON value; non-strings read as empty
pub(crate) fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => text,
        _ => String::new(),
    })
}

/// Category list; non-string entries are dropped, a non-array is empty
pub(crate) fn food_types<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(text) => Some(text),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}
