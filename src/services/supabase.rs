use crate::models::{
    FoodRequest, FoodDonation, NgoPartner, Partnership, DonationLog, PartnerLoginAttempt,
    PartnerLoginLog, ChatInteraction, AssistantReplyLog, STATUS_PENDING,
};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with Supabase
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {status} - {body}")]
    ApiError { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Table names in the Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseTables {
    pub food_requests: String,
    pub food_donations: String,
    pub ngo_partners: String,
    pub partnerships: String,
    pub partner_logins: String,
    pub partner_login_logs: String,
    pub donation_logs: String,
    pub chat_interactions: String,
    pub ai_responses: String,
    pub health_check: String,
}

impl Default for SupabaseTables {
    fn default() -> Self {
        Self {
            food_requests: "food_requests".to_string(),
            food_donations: "food_donations".to_string(),
            ngo_partners: "ngo_partners".to_string(),
            partnerships: "partnerships".to_string(),
            partner_logins: "partner_logins".to_string(),
            partner_login_logs: "partner_login_logs".to_string(),
            donation_logs: "donation_logs".to_string(),
            chat_interactions: "chat_interactions".to_string(),
            ai_responses: "ai_responses".to_string(),
            health_check: "health_check".to_string(),
        }
    }
}

/// PostgREST row query: equality filters, ordering and limit
#[derive(Debug, Clone, Default)]
pub struct RowQuery {
    filters: Vec<(String, String)>,
    order: Option<(String, bool)>,
    limit: Option<usize>,
}

impl RowQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep rows where `column` equals `value`
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    pub fn order_by(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some((column.to_string(), ascending));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render as a PostgREST query string (without the leading `?`)
    pub fn to_query_string(&self) -> String {
        let mut parts = vec!["select=*".to_string()];

        for (column, value) in &self.filters {
            parts.push(format!(
                "{}=eq.{}",
                urlencoding::encode(column),
                urlencoding::encode(value)
            ));
        }

        if let Some((column, ascending)) = &self.order {
            let direction = if *ascending { "asc" } else { "desc" };
            parts.push(format!("order={}.{}", urlencoding::encode(column), direction));
        }

        if let Some(limit) = self.limit {
            parts.push(format!("limit={}", limit));
        }

        parts.join("&")
    }
}

/// Supabase REST client
///
/// Thin table/row access over PostgREST:
/// - Fetching pending requests and donations for matching
/// - Recording intake, login and chat rows
/// - Listing partners and partnerships
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    client: Client,
    tables: SupabaseTables,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(
        base_url: String,
        api_key: String,
        tables: SupabaseTables,
        timeout: Duration,
    ) -> Result<Self, SupabaseError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            client,
            tables,
        })
    }

    pub fn tables(&self) -> &SupabaseTables {
        &self.tables
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn check_status(response: Response, action: &str) -> Result<Response, SupabaseError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SupabaseError::Unauthorized);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Failed to {}: {} - {}", action, status, body);
            return Err(SupabaseError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Select rows from a table.
    ///
    /// Rows that do not deserialize into `T` are skipped with a warning rather
    /// than failing the whole fetch.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &RowQuery,
    ) -> Result<Vec<T>, SupabaseError> {
        let url = format!("{}?{}", self.table_url(table), query.to_query_string());

        tracing::debug!("Selecting rows from: {}", url);

        let response = self.authorized(self.client.get(&url)).send().await?;
        let response = Self::check_status(response, &format!("select from {}", table)).await?;

        let rows: Value = response.json().await?;
        let rows = match rows {
            Value::Array(rows) => rows,
            other => {
                return Err(SupabaseError::InvalidResponse(format!(
                    "Expected array of rows from {}, got {}",
                    table, other
                )))
            }
        };

        let total = rows.len();
        let parsed: Vec<T> = rows
            .into_iter()
            .filter_map(|row| match serde_json::from_value(row) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::warn!("Skipping malformed row in {}: {}", table, e);
                    None
                }
            })
            .collect();

        tracing::debug!("Selected {} rows from {} ({} returned)", parsed.len(), table, total);

        Ok(parsed)
    }

    /// Insert one row and return the stored representation
    pub async fn insert<R: Serialize>(&self, table: &str, row: &R) -> Result<Vec<Value>, SupabaseError> {
        let response = self
            .authorized(self.client.post(self.table_url(table)))
            .header("Prefer", "return=representation")
            .json(row)
            .send()
            .await?;
        let response = Self::check_status(response, &format!("insert into {}", table)).await?;

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&body)
            .map_err(|e| SupabaseError::InvalidResponse(format!("Failed to parse inserted rows: {}", e)))
    }

    /// Exact row count of a table
    pub async fn count(&self, table: &str) -> Result<u64, SupabaseError> {
        let url = format!("{}?select=*", self.table_url(table));

        let response = self
            .authorized(self.client.head(&url))
            .header("Prefer", "count=exact")
            .send()
            .await?;
        let response = Self::check_status(response, &format!("count {}", table)).await?;

        let content_range = response
            .headers()
            .get("content-range")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| SupabaseError::InvalidResponse("Missing Content-Range header".into()))?;

        parse_content_range_total(content_range)
    }

    /// Pending food requests, optionally for a single partner
    pub async fn pending_food_requests(
        &self,
        partner_id: Option<&str>,
    ) -> Result<Vec<FoodRequest>, SupabaseError> {
        let mut query = RowQuery::new().eq("status", STATUS_PENDING);
        if let Some(partner_id) = partner_id {
            query = query.eq("partner_id", partner_id);
        }

        self.select(&self.tables.food_requests, &query).await
    }

    /// Pending food donations
    pub async fn pending_donations(&self) -> Result<Vec<FoodDonation>, SupabaseError> {
        let query = RowQuery::new().eq("status", STATUS_PENDING);
        self.select(&self.tables.food_donations, &query).await
    }

    /// All food requests, newest first
    pub async fn food_requests(&self, partner_id: Option<&str>) -> Result<Vec<FoodRequest>, SupabaseError> {
        let mut query = RowQuery::new();
        if let Some(partner_id) = partner_id {
            query = query.eq("partner_id", partner_id);
        }

        self.select(&self.tables.food_requests, &query.order_by("created_at", false))
            .await
    }

    pub async fn create_food_request(&self, request: &FoodRequest) -> Result<(), SupabaseError> {
        self.insert(&self.tables.food_requests, request).await?;
        tracing::info!("Food request created: {}", request.id);
        Ok(())
    }

    /// Store a donation and return the id the datastore reports for it
    pub async fn create_donation(&self, donation: &FoodDonation) -> Result<Option<String>, SupabaseError> {
        let rows = self.insert(&self.tables.food_donations, donation).await?;

        let id = rows
            .first()
            .and_then(|row| row.get("id"))
            .and_then(|id| id.as_str())
            .map(str::to_string);

        tracing::info!("Donation form submitted: {:?}", id);

        Ok(id)
    }

    /// All partners, newest first
    pub async fn partners(&self) -> Result<Vec<NgoPartner>, SupabaseError> {
        let query = RowQuery::new().order_by("created_at", false);
        self.select(&self.tables.ngo_partners, &query).await
    }

    pub async fn partner_by_email(&self, email: &str) -> Result<NgoPartner, SupabaseError> {
        let query = RowQuery::new().eq("email", email).limit(1);

        self.select::<NgoPartner>(&self.tables.ngo_partners, &query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| SupabaseError::NotFound(format!("Partner not found for email {}", email)))
    }

    pub async fn count_partners(&self) -> Result<u64, SupabaseError> {
        self.count(&self.tables.ngo_partners).await
    }

    pub async fn register_partner(&self, partner: &NgoPartner) -> Result<(), SupabaseError> {
        self.insert(&self.tables.ngo_partners, partner).await?;
        tracing::info!("Partner registered: {}", partner.id);
        Ok(())
    }

    pub async fn partnerships(&self) -> Result<Vec<Partnership>, SupabaseError> {
        self.select(&self.tables.partnerships, &RowQuery::new()).await
    }

    pub async fn log_donation(&self, log: &DonationLog) -> Result<(), SupabaseError> {
        self.insert(&self.tables.donation_logs, log).await?;
        tracing::debug!("Donation logged for {}", log.user_id);
        Ok(())
    }

    pub async fn log_portal_login(&self, attempt: &PartnerLoginAttempt) -> Result<(), SupabaseError> {
        self.insert(&self.tables.partner_logins, attempt).await?;
        tracing::debug!("Partner login attempt logged for {}", attempt.email);
        Ok(())
    }

    pub async fn log_partner_login(&self, log: &PartnerLoginLog) -> Result<(), SupabaseError> {
        self.insert(&self.tables.partner_login_logs, log).await?;
        tracing::debug!("Partner login logged for {}", log.partner_id);
        Ok(())
    }

    pub async fn log_chat_interaction(&self, interaction: &ChatInteraction) -> Result<(), SupabaseError> {
        self.insert(&self.tables.chat_interactions, interaction).await?;
        tracing::debug!("Chat interaction logged for session {}", interaction.session_id);
        Ok(())
    }

    pub async fn log_assistant_reply(&self, reply: &AssistantReplyLog) -> Result<(), SupabaseError> {
        self.insert(&self.tables.ai_responses, reply).await?;
        Ok(())
    }

    /// Health check for the datastore connection
    pub async fn health_check(&self) -> Result<(), SupabaseError> {
        let query = RowQuery::new().limit(1);
        self.select::<Value>(&self.tables.health_check, &query).await?;
        Ok(())
    }
}

/// Total from a PostgREST `Content-Range` header such as `0-24/3573` or `*/42`
fn parse_content_range_total(header: &str) -> Result<u64, SupabaseError> {
    header
        .rsplit_once('/')
        .and_then(|(_, total)| total.trim().parse().ok())
        .ok_or_else(|| SupabaseError::InvalidResponse(format!("Unexpected Content-Range: {}", header)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn test_client(base_url: String) -> SupabaseClient {
        SupabaseClient::new(
            base_url,
            "test_key".to_string(),
            SupabaseTables::default(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_supabase_client_creation() {
        let client = test_client("https://project.supabase.co/".to_string());

        assert_eq!(client.base_url, "https://project.supabase.co/");
        assert_eq!(client.api_key, "test_key");
        assert_eq!(
            client.table_url("food_requests"),
            "https://project.supabase.co/rest/v1/food_requests"
        );
    }

    #[test]
    fn test_row_query_string() {
        let query = RowQuery::new()
            .eq("status", "pending")
            .eq("email", "a+b@example.org")
            .order_by("created_at", false)
            .limit(1);

        assert_eq!(
            query.to_query_string(),
            "select=*&status=eq.pending&email=eq.a%2Bb%40example.org&order=created_at.desc&limit=1"
        );
        assert_eq!(RowQuery::new().to_query_string(), "select=*");
    }

    #[test]
    fn test_content_range_total() {
        assert_eq!(parse_content_range_total("0-24/3573").unwrap(), 3573);
        assert_eq!(parse_content_range_total("*/0").unwrap(), 0);
        assert!(parse_content_range_total("0-24/*").is_err());
    }

    #[tokio::test]
    async fn test_pending_donations_skips_malformed_rows() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/rest/v1/food_donations")
            .match_query(Matcher::UrlEncoded("status".into(), "eq.pending".into()))
            .match_header("apikey", "test_key")
            .match_header("authorization", "Bearer test_key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"id": "d1", "food_type": "Rice", "quantity": "10", "status": "pending"},
                    {"food_type": "no id"}
                ]"#,
            )
            .create_async()
            .await;

        let client = test_client(server.url());
        let donations = client.pending_donations().await.unwrap();

        mock.assert_async().await;
        assert_eq!(donations.len(), 1);
        assert_eq!(donations[0].id, "d1");
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/rest/v1/food_requests")
            .match_query(Matcher::Any)
            .with_status(401)
            .create_async()
            .await;

        let client = test_client(server.url());
        let result = client.pending_food_requests(None).await;

        assert!(matches!(result, Err(SupabaseError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_create_donation_returns_stored_id() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/rest/v1/food_donations")
            .match_header("prefer", "return=representation")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": "stored-id", "food_type": "Rice"}]"#)
            .create_async()
            .await;

        let client = test_client(server.url());
        let donation = FoodDonation {
            id: "local-id".to_string(),
            food_type: "Rice".to_string(),
            quantity: "4".to_string(),
            status: STATUS_PENDING.to_string(),
            donor_name: Some("Asha".to_string()),
            donor_email: Some("asha@example.org".to_string()),
            donor_phone: None,
            expiry_date: None,
            pickup_location: Some("Sector 22".to_string()),
            preferred_pickup_time: None,
            special_instructions: None,
            submission_time: None,
            created_at: None,
        };

        let id = client.create_donation(&donation).await.unwrap();
        assert_eq!(id.as_deref(), Some("stored-id"));
    }

    #[tokio::test]
    async fn test_count_partners() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("HEAD", "/rest/v1/ngo_partners")
            .match_query(Matcher::UrlEncoded("select".into(), "*".into()))
            .match_header("prefer", "count=exact")
            .with_status(200)
            .with_header("content-range", "*/3")
            .create_async()
            .await;

        let client = test_client(server.url());
        assert_eq!(client.count_partners().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_partner_by_email_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/rest/v1/ngo_partners")
            .match_query(Matcher::UrlEncoded("email".into(), "eq.nobody@example.org".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let client = test_client(server.url());
        let result = client.partner_by_email("nobody@example.org").await;

        assert!(matches!(result, Err(SupabaseError::NotFound(_))));
    }
}
