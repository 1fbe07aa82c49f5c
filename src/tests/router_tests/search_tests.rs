// src/tests/router_tests/search_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};

#[test]
fn search_filters_by_bedrooms() {
    let state = test_state();

    let mut resp = handle(get("/search?q=2bhk"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("2 properties found"));
    assert!(body.contains("Modern 2BHK Flat"));
    assert!(body.contains("Elegant 2BHK Flat"));
    assert!(!body.contains("Luxury 3BHK Apartment"));
}

#[test]
fn search_handles_url_encoded_queries() {
    let state = test_state();

    let mut resp = handle(get("/search?q=3bhk%20in%20south%20delhi"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("2 properties found"));
    assert!(body.contains("Luxury 3BHK Apartment"));
    assert!(body.contains("Spacious 3BHK Penthouse"));
}

#[test]
fn search_without_query_lists_everything() {
    let state = test_state();

    let mut resp = handle(get("/search"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("6 properties found"));
    assert!(body.contains("Budget 1BHK Apartment"));
}

#[test]
fn search_with_no_matches_apologizes() {
    let state = test_state();

    let mut resp = handle(get("/search?q=5bhk"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("0 properties found"));
    assert!(body.contains("Would you like to try a different search?"));
}

#[test]
fn plus_encoded_spaces_are_decoded() {
    let state = test_state();

    let mut resp = handle(get("/search?q=under+80+lakh+in+east+delhi"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("1 property found"));
    assert!(body.contains("Elegant 2BHK Flat"));
}
