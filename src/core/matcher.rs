use chrono::Utc;
use crate::models::{FoodRequest, FoodDonation, DonationMatch, ScoringWeights, MatchOrdering};
use crate::core::{
    filters::{both_pending, is_candidate},
    scoring::calculate_match_score,
};

/// Result of the matching process
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub matches: Vec<DonationMatch>,
    pub requests_considered: usize,
    pub donations_considered: usize,
}

impl MatchResult {
    /// Reorder matches highest score first.
    ///
    /// The sort is stable, so pairs with equal scores keep enumeration order.
    pub fn sort_by_score(&mut self) {
        self.matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    }

    pub fn ordered(mut self, ordering: MatchOrdering) -> Self {
        if ordering == MatchOrdering::Score {
            self.sort_by_score();
        }
        self
    }
}

/// Pairs open food requests with pending donations
///
/// # Pipeline
/// 1. Skip anything that is not pending
/// 2. Candidate filter (high urgency, or food type overlap)
/// 3. Scoring
#[derive(Debug, Clone)]
pub struct DonationMatcher {
    weights: ScoringWeights,
}

impl DonationMatcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Enumerate every eligible request/donation pair
    ///
    /// Inputs are read-only snapshots. Output order follows iteration order:
    /// all matches for the first request (in donation order), then the second
    /// request, and so on. Nothing is sorted by score here; see
    /// [`MatchResult::sort_by_score`].
    ///
    /// # Arguments
    /// * `requests` - Pending food requests
    /// * `donations` - Pending food donations
    pub fn find_matches(&self, requests: &[FoodRequest], donations: &[FoodDonation]) -> MatchResult {
        let matches: Vec<DonationMatch> = requests
            .iter()
            .flat_map(|request| donations.iter().map(move |donation| (request, donation)))
            .filter(|(request, donation)| both_pending(request, donation))
            .filter(|(request, donation)| is_candidate(request, donation))
            .map(|(request, donation)| DonationMatch {
                request_id: request.id.clone(),
                donation_id: donation.id.clone(),
                partner_id: request.partner_id.clone(),
                match_score: calculate_match_score(request, donation, &self.weights),
                created_at: Utc::now(),
            })
            .collect();

        MatchResult {
            matches,
            requests_considered: requests.len(),
            donations_considered: donations.len(),
        }
    }
}

impl Default for DonationMatcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
