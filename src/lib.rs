//! FoodShare API - donation intake and NGO matching service
//!
//! This library provides the matching engine that pairs pending NGO food
//! requests with pending surplus-food donations, along with the HTTP layer
//! and Supabase client the service runs on.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{DonationMatcher, MatchResult, calculate_match_score, is_candidate};
pub use crate::error::ApiError;
pub use crate::models::{FoodRequest, FoodDonation, DonationMatch, ScoringWeights, MatchOrdering};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matcher = DonationMatcher::default();
        let result = matcher.find_matches(&[], &[]);
        assert!(result.matches.is_empty());
        assert_eq!(*matcher.weights(), ScoringWeights::default());
    }
}
