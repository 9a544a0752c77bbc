//! Example HTTP function.
//!
//! Reads a `name` from the query string or the JSON request body and responds
//! with a greeting. Missing or malformed input falls through to the default
//! name; there is no error branch.

pub mod greeting;

use axum::body::Bytes;
use axum::extract::Query;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

const DEFAULT_NAME: &str = "World";

#[derive(Debug, Default, Deserialize)]
struct GreetParams {
    name: Option<String>,
}

async fn greet(Query(query): Query<GreetParams>, body: Bytes) -> String {
    let name = query
        .name
        .filter(|n| !n.is_empty())
        .or_else(|| {
            serde_json::from_slice::<GreetParams>(&body)
                .ok()
                .and_then(|b| b.name)
                .filter(|n| !n.is_empty())
        })
        .unwrap_or_else(|| DEFAULT_NAME.to_owned());

    greeting::create_greeting(&name)
}

/// The function's router, invoked under its trigger route.
pub fn app() -> Router {
    Router::new().route("/", get(greet).post(greet))
}
