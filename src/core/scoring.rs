use crate::models::{FoodRequest, FoodDonation, ScoringWeights, UrgencyLevel};
use crate::core::{
    filters::matching_food_types,
    quantity::{coverage, Coverage, Quantity},
};

/// Highest score a pair can receive
pub const MAX_MATCH_SCORE: u32 = 100;

/// Per-term contributions to a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub urgency: u32,
    pub food_type: u32,
    pub quantity: u32,
}

impl ScoreBreakdown {
    /// Sum of all terms before clamping
    pub fn raw_total(&self) -> u32 {
        self.urgency
            .saturating_add(self.food_type)
            .saturating_add(self.quantity)
    }

    /// Final score, clamped to 0-100
    pub fn total(&self) -> u8 {
        // Bounded by MAX_MATCH_SCORE, so the narrowing cannot truncate
        self.raw_total().min(MAX_MATCH_SCORE) as u8
    }
}

/// Calculate a match score (0-100) for a request/donation pair
///
/// Scoring formula (default weights):
/// score = min(
///     urgency        # high = 30, medium = 20, anything else = 0
///   + 25 * n         # n = requested food types found in the donation
///   + quantity,      # full coverage = 20, >= 70% of need = 15, else 0
///   100)
///
/// Terms are summed independently; an unparseable quantity only zeroes the
/// quantity term.
pub fn calculate_match_score(
    request: &FoodRequest,
    donation: &FoodDonation,
    weights: &ScoringWeights,
) -> u8 {
    score_breakdown(request, donation, weights).total()
}

/// Compute each scoring term separately
pub fn score_breakdown(
    request: &FoodRequest,
    donation: &FoodDonation,
    weights: &ScoringWeights,
) -> ScoreBreakdown {
    let urgency = match request.urgency() {
        UrgencyLevel::High => weights.urgency_high,
        UrgencyLevel::Medium => weights.urgency_medium,
        UrgencyLevel::Other => 0,
    };

    // Each matching category counts, the clamp is the only cap
    let matched = matching_food_types(request, donation).len() as u32;
    let food_type = weights.food_type.saturating_mul(matched);

    let quantity = match coverage(
        Quantity::parse(&request.quantity_needed),
        Quantity::parse(&donation.quantity),
        weights.partial_quantity_percent,
    ) {
        Coverage::Full => weights.quantity_full,
        Coverage::Partial => weights.quantity_partial,
        Coverage::Short | Coverage::Unknown => 0,
    };

    ScoreBreakdown {
        urgency,
        food_type,
        quantity,
    }
}
