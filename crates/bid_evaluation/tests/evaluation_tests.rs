use bid_evaluation::{evaluate, EvaluationError};
use serde_json::json;

fn bid_a() -> serde_json::Value {
    json!({
        "bidder": "0xaaa",
        "companyName": "Alpha Builders",
        "budget": 80000,
        "requiredExperience": 10,
        "workforceSize": 20,
        "projectStartTime": "2024-01-01T00:00",
        "projectEndTime": "2024-02-01T00:00",
        "safetyStandards": "ISO 45001 certified"
    })
}

fn bid_b() -> serde_json::Value {
    json!({
        "bidder": "0xbbb",
        "companyName": "Beta Contractors",
        "budget": 95000,
        "requiredExperience": 3,
        "workforceSize": 5,
        "projectStartTime": "2024-01-01T00:00",
        "projectEndTime": "2024-06-01T00:00",
        "safetyStandards": "basic"
    })
}

#[test]
fn test_stronger_bid_wins_end_to_end() {
    let request = json!({
        "tender": { "budget": 100000 },
        "bids": [bid_b(), bid_a()]
    });

    let response = evaluate(&request).unwrap();

    // Bid A: lower cost, more experience, bigger workforce, shorter
    // timeline, higher safety score.
    assert_eq!(response.method, "MOORA");
    assert_eq!(response.ranking.len(), 2);
    assert_eq!(response.skipped, 0);

    let winner = response.winner.as_ref().unwrap();
    assert_eq!(winner.rank, 1);
    assert_eq!(winner.bidder, "0xaaa");
    assert_eq!(winner.company_name, "Alpha Builders");
    assert_eq!(response.ranking[1].bidder, "0xbbb");
    assert!(winner.score > response.ranking[1].score);
}

#[test]
fn test_response_carries_weight_table_and_details() {
    let request = json!({
        "tender": {
            "budget": 100000,
            "materialQuality": "standard grade",
            "environmentalImpact": "recycled content"
        },
        "bids": [bid_a()]
    });

    let response = evaluate(&request).unwrap();

    assert_eq!(response.weights.len(), 7);
    let total: f64 = response.weights.iter().map(|w| w.weight).sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert_eq!(response.weights[0].name, "cost");
    assert!(!response.weights[0].beneficial);

    let winner = response.winner.as_ref().unwrap();
    assert_eq!(winner.details["timeline"], json!("31 days"));
    assert_eq!(winner.details["safety"]["score"], json!(10));
    // Tender defaults fill the qualitative fields the bid omitted.
    assert_eq!(winner.details["material"]["description"], json!("standard grade"));
    assert_eq!(winner.details["environment"]["score"], json!(7));
}

#[test]
fn test_malformed_timestamp_bid_is_excluded() {
    let mut broken = bid_b();
    broken["projectEndTime"] = json!("2024-06-01"); // missing HH:MM

    let request = json!({
        "tender": { "budget": 100000 },
        "bids": [broken, bid_a()]
    });

    let response = evaluate(&request).unwrap();

    assert_eq!(response.ranking.len(), 1);
    assert_eq!(response.skipped, 1);
    assert_eq!(response.winner.as_ref().unwrap().bidder, "0xaaa");
}

#[test]
fn test_all_malformed_bids_is_no_valid_bids() {
    let request = json!({
        "tender": { "budget": 100000 },
        "bids": [
            { "bidder": "0x1", "companyName": "No Numbers Ltd" },
            { "companyName": "Missing Everything" },
            "not an object"
        ]
    });

    let result = evaluate(&request);
    assert!(matches!(result, Err(EvaluationError::NoValidBids)));
}

#[test]
fn test_request_shape_errors_reported_before_evaluation() {
    for request in [
        json!({ "bids": [bid_a()] }),
        json!({ "tender": {} }),
        json!({ "tender": {}, "bids": [] }),
        json!({ "tender": {}, "bids": "not a list" }),
    ] {
        let result = evaluate(&request);
        assert!(
            matches!(result, Err(EvaluationError::RequestShape(_))),
            "expected shape error for {}",
            request
        );
    }
}

#[test]
fn test_identical_bids_tie_at_equal_scores() {
    let mut twin = bid_a();
    twin["bidder"] = json!("0xccc");
    twin["companyName"] = json!("Alpha Clone");

    let request = json!({
        "tender": { "budget": 100000 },
        "bids": [bid_a(), twin]
    });

    let response = evaluate(&request).unwrap();

    assert_eq!(response.ranking[0].score, response.ranking[1].score);
    // Submission order breaks the tie.
    assert_eq!(response.ranking[0].bidder, "0xaaa");
    assert_eq!(response.ranking[1].bidder, "0xccc");
    assert_eq!(response.ranking[0].rank, 1);
    assert_eq!(response.ranking[1].rank, 2);
}

#[test]
fn test_negative_timeline_bid_is_accepted() {
    // End before start yields a negative duration; the engine passes it
    // through rather than rejecting the bid. Flagged in DESIGN.md as a
    // candidate validation rule.
    let mut backwards = bid_a();
    backwards["projectStartTime"] = json!("2024-06-01T00:00");
    backwards["projectEndTime"] = json!("2024-01-01T00:00");

    let request = json!({
        "tender": { "budget": 100000 },
        "bids": [backwards]
    });

    let response = evaluate(&request).unwrap();
    assert_eq!(response.ranking.len(), 1);
    assert!(response.winner.as_ref().unwrap().details["timeline"]
        .as_str()
        .unwrap()
        .starts_with('-'));
}
