use crate::catalog::Catalog;
use crate::responses::error_to_response;
use crate::router::{handle, AppState};
use astra::Server;
use std::net::SocketAddr;

mod assistant;
mod catalog;
mod errors;
mod market;
mod responses;
mod router;
mod search;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Load the embedded property catalog
    let catalog = match Catalog::embedded() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("❌ Failed to load property catalog: {e}");
            std::process::exit(1);
        }
    };
    println!("✅ Loaded {} properties", catalog.len());

    let state = AppState::new(catalog);

    // 2️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, passing the shared state into the closure
    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
