use crate::assistant::Assistant;
use crate::catalog::Catalog;
use crate::errors::ServerError;
use crate::responses::html_response;
use crate::responses::ResultResp;
use crate::search::SearchEngine;
use crate::templates::pages;
use astra::Request;
use std::collections::HashMap;

/// Everything a request handler needs. Built once in main and shared by
/// reference into the serve closure; nothing in here is mutable.
pub struct AppState {
    pub catalog: Catalog,
    pub engine: SearchEngine,
    pub assistant: Assistant,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            engine: SearchEngine::default(),
            assistant: Assistant::new(),
        }
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/") => html_response(pages::home_page()),

        ("GET", "/search") => {
            let params = parse_query(&req);
            let query = params.get("q").map(String::as_str).unwrap_or("");

            let results = state.engine.filter(query, state.catalog.as_slice());
            html_response(pages::search_page(query, &results))
        }

        ("GET", "/chat") => {
            let params = parse_query(&req);
            let message = params.get("message").map(String::as_str).unwrap_or("");

            // Blank input renders the empty state instead of a turn.
            let reply = state.assistant.respond(message, state.catalog.as_slice());
            let turn = reply.as_ref().map(|r| (message, r));
            html_response(pages::chat_page(turn))
        }

        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    let raw = req.uri().query().unwrap_or("");
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}
