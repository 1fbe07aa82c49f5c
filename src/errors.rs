// errors.rs
use std::fmt;

/// Errors originating from either the server logic
/// (routing, bad query strings, etc.) or the catalog layer.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    CatalogError(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::CatalogError(msg) => write!(f, "Catalog Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}
