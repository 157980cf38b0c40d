use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use crate::models::ScoringWeights;
use crate::services::SupabaseTables;

const PLACEHOLDER_SUPABASE_URL: &str = "https://placeholder.supabase.co";
const PLACEHOLDER_ANON_KEY: &str = "placeholder-anon-key";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub tables: TableSettings,
    #[serde(default)]
    pub frontend: FrontendSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupabaseSettings {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
    pub service_role_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl SupabaseSettings {
    /// Key used for server-side calls: the service role key when present
    pub fn api_key(&self) -> &str {
        self.service_role_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .unwrap_or(&self.anon_key)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableSettings {
    #[serde(default = "default_food_requests")]
    pub food_requests: String,
    #[serde(default = "default_food_donations")]
    pub food_donations: String,
    #[serde(default = "default_ngo_partners")]
    pub ngo_partners: String,
    #[serde(default = "default_partnerships")]
    pub partnerships: String,
    #[serde(default = "default_partner_logins")]
    pub partner_logins: String,
    #[serde(default = "default_partner_login_logs")]
    pub partner_login_logs: String,
    #[serde(default = "default_donation_logs")]
    pub donation_logs: String,
    #[serde(default = "default_chat_interactions")]
    pub chat_interactions: String,
    #[serde(default = "default_ai_responses")]
    pub ai_responses: String,
    #[serde(default = "default_health_check")]
    pub health_check: String,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            food_requests: default_food_requests(),
            food_donations: default_food_donations(),
            ngo_partners: default_ngo_partners(),
            partnerships: default_partnerships(),
            partner_logins: default_partner_logins(),
            partner_login_logs: default_partner_login_logs(),
            donation_logs: default_donation_logs(),
            chat_interactions: default_chat_interactions(),
            ai_responses: default_ai_responses(),
            health_check: default_health_check(),
        }
    }
}

fn default_food_requests() -> String { "food_requests".to_string() }
fn default_food_donations() -> String { "food_donations".to_string() }
fn default_ngo_partners() -> String { "ngo_partners".to_string() }
fn default_partnerships() -> String { "partnerships".to_string() }
fn default_partner_logins() -> String { "partner_logins".to_string() }
fn default_partner_login_logs() -> String { "partner_login_logs".to_string() }
fn default_donation_logs() -> String { "donation_logs".to_string() }
fn default_chat_interactions() -> String { "chat_interactions".to_string() }
fn default_ai_responses() -> String { "ai_responses".to_string() }
fn default_health_check() -> String { "health_check".to_string() }

impl From<TableSettings> for SupabaseTables {
    fn from(value: TableSettings) -> Self {
        Self {
            food_requests: value.food_requests,
            food_donations: value.food_donations,
            ngo_partners: value.ngo_partners,
            partnerships: value.partnerships,
            partner_logins: value.partner_logins,
            partner_login_logs: value.partner_login_logs,
            donation_logs: value.donation_logs,
            chat_interactions: value.chat_interactions,
            ai_responses: value.ai_responses,
            health_check: value.health_check,
        }
    }
}

/// Frontend locations handed back to clients for redirects
#[derive(Debug, Clone, Deserialize)]
pub struct FrontendSettings {
    #[serde(default = "default_main_url")]
    pub main_url: String,
    #[serde(default = "default_ai_url")]
    pub ai_url: String,
    #[serde(default = "default_partnership_url")]
    pub partnership_url: String,
}

impl Default for FrontendSettings {
    fn default() -> Self {
        Self {
            main_url: default_main_url(),
            ai_url: default_ai_url(),
            partnership_url: default_partnership_url(),
        }
    }
}

fn default_main_url() -> String { "http://localhost:3000".to_string() }
fn default_ai_url() -> String { "http://localhost:3001".to_string() }
fn default_partnership_url() -> String { "http://localhost:3002".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsSettings {
    /// Explicit origin list; empty means the frontend URLs plus local dev ports
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_urgency_high")]
    pub urgency_high: u32,
    #[serde(default = "default_urgency_medium")]
    pub urgency_medium: u32,
    #[serde(default = "default_food_type")]
    pub food_type: u32,
    #[serde(default = "default_quantity_full")]
    pub quantity_full: u32,
    #[serde(default = "default_quantity_partial")]
    pub quantity_partial: u32,
    #[serde(default = "default_partial_quantity_percent")]
    pub partial_quantity_percent: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            urgency_high: default_urgency_high(),
            urgency_medium: default_urgency_medium(),
            food_type: default_food_type(),
            quantity_full: default_quantity_full(),
            quantity_partial: default_quantity_partial(),
            partial_quantity_percent: default_partial_quantity_percent(),
        }
    }
}

fn default_urgency_high() -> u32 { 30 }
fn default_urgency_medium() -> u32 { 20 }
fn default_food_type() -> u32 { 25 }
fn default_quantity_full() -> u32 { 20 }
fn default_quantity_partial() -> u32 { 15 }
fn default_partial_quantity_percent() -> u32 { 70 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(value: &WeightsConfig) -> Self {
        Self {
            urgency_high: value.urgency_high,
            urgency_medium: value.urgency_medium,
            food_type: value.food_type,
            quantity_full: value.quantity_full,
            quantity_partial: value.quantity_partial,
            partial_quantity_percent: value.partial_quantity_percent,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FOODSHARE__)
    /// 5. SUPABASE_URL / SUPABASE_ANON_KEY / SUPABASE_SERVICE_ROLE_KEY / PORT
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FOODSHARE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FOODSHARE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FOODSHARE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Whether real Supabase credentials are present
    pub fn store_configured(&self) -> bool {
        let url = self.supabase.url.trim();
        let key = self.supabase.anon_key.trim();

        !url.is_empty()
            && !key.is_empty()
            && url != PLACEHOLDER_SUPABASE_URL
            && key != PLACEHOLDER_ANON_KEY
    }

    /// Origins allowed by CORS
    pub fn cors_origins(&self) -> Vec<String> {
        if !self.cors.allowed_origins.is_empty() {
            return self.cors.allowed_origins.clone();
        }

        let mut origins = vec![
            self.frontend.main_url.clone(),
            self.frontend.ai_url.clone(),
            self.frontend.partnership_url.clone(),
            "http://localhost:3000".to_string(),
            "http://localhost:3001".to_string(),
            "http://localhost:3002".to_string(),
        ];
        let mut seen = std::collections::HashSet::new();
        origins.retain(|origin| seen.insert(origin.clone()));
        origins
    }

    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights::from(&self.scoring.weights)
    }
}

/// Apply the conventional unprefixed variables on top of the loaded config
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(url) = env::var("SUPABASE_URL") {
        builder = builder.set_override("supabase.url", url)?;
    }
    if let Ok(anon_key) = env::var("SUPABASE_ANON_KEY") {
        builder = builder.set_override("supabase.anon_key", anon_key)?;
    }
    if let Ok(service_role_key) = env::var("SUPABASE_SERVICE_ROLE_KEY") {
        builder = builder.set_override("supabase.service_role_key", service_role_key)?;
    }
    if let Ok(port) = env::var("PORT") {
        builder = builder.set_override("server.port", port)?;
    }

    builder.build()
}
