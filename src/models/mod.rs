// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    FoodRequest, FoodDonation, DonationMatch, UrgencyLevel, NgoPartner, PartnerSummary, Partnership,
    DonationLog, PartnerLoginAttempt, PartnerLoginLog, ChatInteraction, AssistantReplyLog,
    SafetyGuideline, ScoringWeights, STATUS_PENDING,
};
pub use requests::{
    DonateRequest, PortalLoginRequest, PartnerLoginRequest, ChatRequest, DonationFormRequest,
    FoodRequestSubmission, PartnerRegistrationRequest, FoodRequestsQuery, MatchDonationsQuery,
    MatchOrdering,
};
pub use responses::{
    MatchDonationsResponse, HealthResponse, ErrorResponse, DonateResponse, PortalLoginResponse,
    ChatResponse, GuidelineMode, GuidelinesResponse, DonationFormResponse, ImpactStats,
    PartnershipOverviewResponse, PartnersResponse, PartnerRegistrationResponse,
    PartnerLoginResponse, FoodRequestsResponse, FoodRequestCreatedResponse, PortalInfoResponse,
};
