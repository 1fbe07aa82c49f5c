// src/tests/router_tests/home_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_state};
use astra::Body;
use http::Method;

#[test]
fn home_page_renders() {
    let state = test_state();

    let mut resp = handle(get("/"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = body_string(&mut resp);
    assert!(body.contains("Ayra Homes"));
    assert!(body.contains("Find your next home with Ayra"));
    assert!(body.contains("action=\"/search\""));
}

#[test]
fn unknown_path_is_not_found() {
    let state = test_state();

    let err = handle(get("/nope"), &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn unknown_method_is_not_found() {
    let state = test_state();

    let mut req = astra::Request::new(Body::empty());
    *req.method_mut() = Method::POST;
    *req.uri_mut() = "/".parse().unwrap();

    let err = handle(req, &state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
