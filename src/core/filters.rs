use crate::models::{FoodRequest, FoodDonation, UrgencyLevel};

/// Requested food types that occur in the donation's food type.
///
/// Both sides are lower-cased and compared by substring, so a request for
/// "rice" matches a donation of "Fresh Bread and Rice". Every matching entry is
/// returned, duplicates included, in request order.
pub fn matching_food_types<'a>(request: &'a FoodRequest, donation: &FoodDonation) -> Vec<&'a str> {
    let offered = donation.food_type.to_lowercase();

    request
        .requested_food_types
        .iter()
        .filter(|requested| offered.contains(&requested.to_lowercase()))
        .map(String::as_str)
        .collect()
}

/// Check whether a request/donation pair should be scored at all
///
/// A pair is a candidate when the request is high urgency, or when at least
/// one requested food type occurs in the donation. High urgency requests are
/// paired with every donation regardless of food type.
#[inline]
pub fn is_candidate(request: &FoodRequest, donation: &FoodDonation) -> bool {
    if request.urgency() == UrgencyLevel::High {
        return true;
    }

    let offered = donation.food_type.to_lowercase();
    request
        .requested_food_types
        .iter()
        .any(|requested| offered.contains(&requested.to_lowercase()))
}

/// Both sides are still open
#[inline]
pub fn both_pending(request: &FoodRequest, donation: &FoodDonation) -> bool {
    request.is_pending() && donation.is_pending()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::STATUS_PENDING;

    fn create_test_request(urgency: &str, types: &[&str]) -> FoodRequest {
        FoodRequest {
            id: "req".to_string(),
            partner_id: Some("partner".to_string()),
            requested_food_types: types.iter().map(|t| t.to_string()).collect(),
            quantity_needed: "10".to_string(),
            urgency_level: urgency.to_string(),
            status: STATUS_PENDING.to_string(),
            delivery_location: None,
            preferred_delivery_time: None,
            beneficiary_count: None,
            special_requirements: None,
            request_date: None,
            created_at: None,
        }
    }

    fn create_test_donation(food_type: &str) -> FoodDonation {
        FoodDonation {
            id: "don".to_string(),
            food_type: food_type.to_string(),
            quantity: "10".to_string(),
            status: STATUS_PENDING.to_string(),
            donor_name: None,
            donor_email: None,
            donor_phone: None,
            expiry_date: None,
            pickup_location: None,
            preferred_pickup_time: None,
            special_instructions: None,
            submission_time: None,
            created_at: None,
        }
    }

    #[test]
    fn test_high_urgency_ignores_food_type() {
        let request = create_test_request("high", &["bread"]);
        let donation = create_test_donation("Canned Goods");

        assert!(is_candidate(&request, &donation));
    }

    #[test]
    fn test_food_type_substring_is_case_insensitive() {
        let request = create_test_request("medium", &["RICE"]);
        let donation = create_test_donation("Fresh Bread and Rice");

        assert!(is_candidate(&request, &donation));
        assert_eq!(matching_food_types(&request, &donation), vec!["RICE"]);
    }

    #[test]
    fn test_no_overlap_is_rejected() {
        let request = create_test_request("low", &["milk"]);
        let donation = create_test_donation("Vegetables");

        assert!(!is_candidate(&request, &donation));
    }

    #[test]
    fn test_empty_type_list_never_matches() {
        let request = create_test_request("medium", &[]);
        let donation = create_test_donation("Rice");

        assert!(!is_candidate(&request, &donation));
        assert!(matching_food_types(&request, &donation).is_empty());
    }

    #[test]
    fn test_pending_check() {
        let mut request = create_test_request("medium", &["rice"]);
        let donation = create_test_donation("Rice");
        assert!(both_pending(&request, &donation));

        request.status = "fulfilled".to_string();
        assert!(!both_pending(&request, &donation));
    }
}
