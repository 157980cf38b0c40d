// Core algorithm exports
pub mod assistant;
pub mod filters;
pub mod matcher;
pub mod quantity;
pub mod scoring;

pub use assistant::{reply_to, food_safety_guidelines, demo_guidelines};
pub use filters::{is_candidate, matching_food_types, both_pending};
pub use matcher::{DonationMatcher, MatchResult};
pub use quantity::{Quantity, Coverage, coverage};
pub use scoring::{calculate_match_score, score_breakdown, ScoreBreakdown, MAX_MATCH_SCORE};
