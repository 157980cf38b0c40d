// Criterion benchmarks for the FoodShare matching engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use foodshare_api::core::{scoring::calculate_match_score, DonationMatcher};
use foodshare_api::models::{FoodDonation, FoodRequest, ScoringWeights, STATUS_PENDING};

const FOOD_TYPES: [&str; 6] = ["Rice", "Bread", "Vegetables", "Canned Goods", "Milk", "Fresh Bread and Rice"];
const URGENCY: [&str; 3] = ["high", "medium", "low"];

fn create_request(id: usize) -> FoodRequest {
    FoodRequest {
        id: format!("req-{}", id),
        partner_id: Some(format!("partner-{}", id % 20)),
        requested_food_types: vec![
            FOOD_TYPES[id % FOOD_TYPES.len()].to_lowercase(),
            FOOD_TYPES[(id + 2) % FOOD_TYPES.len()].to_lowercase(),
        ],
        quantity_needed: (10 + id % 40).to_string(),
        urgency_level: URGENCY[id % URGENCY.len()].to_string(),
        status: STATUS_PENDING.to_string(),
        delivery_location: None,
        preferred_delivery_time: None,
        beneficiary_count: None,
        special_requirements: None,
        request_date: None,
        created_at: None,
    }
}

fn create_donation(id: usize) -> FoodDonation {
    FoodDonation {
        id: format!("don-{}", id),
        food_type: FOOD_TYPES[(id * 7) % FOOD_TYPES.len()].to_string(),
        quantity: if id % 11 == 0 { "a few crates".to_string() } else { (5 + id % 50).to_string() },
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

fn bench_match_score(c: &mut Criterion) {
    let weights = ScoringWeights::default();
    let request = create_request(1);
    let donation = create_donation(5);

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&request), black_box(&donation), black_box(&weights)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = DonationMatcher::with_default_weights();

    let mut group = c.benchmark_group("matching");

    for size in [10, 50, 100, 500].iter() {
        let requests: Vec<FoodRequest> = (0..*size).map(create_request).collect();
        let donations: Vec<FoodDonation> = (0..*size).map(create_donation).collect();

        group.bench_with_input(BenchmarkId::new("find_matches", size), size, |b, _| {
            b.iter(|| matcher.find_matches(black_box(&requests), black_box(&donations)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_match_score, bench_matching);

criterion_main!(benches);
