//! Public documentation and ping routes

use std::collections::BTreeMap;

use axum::{Json, http::HeaderMap, http::header};
use serde::Serialize;

const FORWARDED_PROTO_HEADER: &str = "x-forwarded-proto";

/// One documented route
#[derive(Debug, Clone, Serialize)]
pub struct EndpointDoc {
    pub description: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<&'static str>,
    pub example: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiDocs {
    pub message: &'static str,
    pub documentation: &'static str,
    pub endpoints: BTreeMap<&'static str, EndpointDoc>,
}

/// (path, description, parameters, example query)
const DATA_ROUTES: &[(&str, &str, &[&str], &str)] = &[
    ("/user", "Generates user data.", &["count", "locale", "seed"], "?seed=123"),
    ("/address", "Generates address data.", &["count", "locale", "seed"], "?locale=fr&seed=abc"),
    ("/payment/card", "Generates payment card data.", &["count", "locale", "type", "seed"], "?seed=456"),
    ("/company", "Generates company data.", &["count", "locale", "seed"], "?seed=789"),
    ("/product", "Generates commerce product data.", &["count", "locale", "seed"], "?seed=xyz"),
    ("/internet", "Generates internet-related data.", &["count", "locale", "seed"], "?seed=111"),
    ("/uuid", "Generates UUIDs.", &["count", "seed"], "?seed=222"),
    ("/profile", "Generates a combined profile.", &["count", "locale", "seed"], "?seed=333"),
    (
        "/date",
        "Generates date/time data.",
        &["count", "locale", "format", "years", "refDate", "seed"],
        "?seed=444",
    ),
    ("/lorem", "Generates lorem ipsum text.", &["count", "type", "num", "seed"], "?seed=555"),
    ("/transaction", "Generates finance transaction data.", &["count", "locale", "seed"], "?seed=666"),
    ("/readable_text", "Generates readable text paragraphs.", &["count", "context", "seed"], "?seed=777"),
];

/// `scheme://host` as seen by the caller
fn base_url(headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    let scheme = headers
        .get(FORWARDED_PROTO_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    format!("{}://{}", scheme, host)
}

pub fn build_docs(base_url: &str) -> ApiDocs {
    let mut endpoints = BTreeMap::new();

    endpoints.insert(
        "/ping",
        EndpointDoc {
            description: "Simple health check.",
            parameters: Vec::new(),
            example: format!("{}/ping", base_url),
            response: Some("pong (text/plain)"),
        },
    );

    for (path, description, parameters, example) in DATA_ROUTES {
        endpoints.insert(
            *path,
            EndpointDoc {
                description: *description,
                parameters: parameters.to_vec(),
                example: format!("{}{}{}", base_url, path, example),
                response: None,
            },
        );
    }

    ApiDocs {
        message: "Test Data Generation API",
        documentation: "Provides various types of fake data for testing purposes.",
        endpoints,
    }
}

/// GET /
pub async fn root(headers: HeaderMap) -> Json<ApiDocs> {
    Json(build_docs(&base_url(&headers)))
}

/// GET /ping
pub async fn ping() -> &'static str {
    "pong"
}
