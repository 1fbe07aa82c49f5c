use crate::catalog::Catalog;
use crate::router::AppState;
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// App state over the embedded catalog, as main builds it.
pub fn test_state() -> AppState {
    let catalog = Catalog::embedded().expect("embedded catalog should load");
    AppState::new(catalog)
}

/// Build a GET request for the given uri (query string included).
pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

/// Drain a response body into a string.
pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("response body should be readable");
    String::from_utf8(bytes).expect("response body should be utf-8")
}
