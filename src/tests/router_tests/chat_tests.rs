// src/tests/router_tests/chat_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};

#[test]
fn chat_empty_state_shows_starter_prompts() {
    let state = test_state();

    let mut resp = handle(get("/chat"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("How can I help you today?"));
    assert!(body.contains("Show me 2BHK apartments in Delhi"));
    assert!(body.contains("Properties near metro stations"));
}

#[test]
fn chat_message_gets_reply_and_matching_cards() {
    let state = test_state();

    let mut resp = handle(get("/chat?message=2bhk"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("I found 2 properties that match your criteria:"));
    assert!(body.contains("Modern 2BHK Flat"));
    assert!(body.contains("Elegant 2BHK Flat"));
}

#[test]
fn market_question_shows_trends_widget() {
    let state = test_state();

    let uri = "/chat?message=What+are+the+market+trends+for+Delhi%3F";
    let mut resp = handle(get(uri), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Delhi NCR"));
    assert!(body.contains("+8.2% YoY"));
    // The trends reply still carries matched listings.
    assert!(body.contains("Luxury 3BHK Apartment"));
}

#[test]
fn no_match_chat_message_apologizes() {
    let state = test_state();

    let mut resp = handle(get("/chat?message=5bhk+in+dwarka"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("Could you try a different search or be more specific?"));
}

#[test]
fn blank_chat_message_renders_empty_state() {
    let state = test_state();

    let mut resp = handle(get("/chat?message=+++"), &state).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("How can I help you today?"));
}
