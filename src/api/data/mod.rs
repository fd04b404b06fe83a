//! Fake-data endpoints
//!
//! Every handler resolves its generator before validating `count`, so an
//! unsupported locale is reported ahead of a bad count.

pub mod business;
pub mod dates;
pub mod network;
pub mod payment;
pub mod people;
pub mod places;
pub mod text;

use axum::{Json, Router, routing::get};
use serde::Serialize;
use tracing::info;

use super::state::AppState;
use super::types::{ApiError, DataQuery};
use crate::domain::count::CountValidator;
use crate::domain::generator::GeneratorContext;

/// A single object when one was requested, an array otherwise
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn from_vec(mut items: Vec<T>) -> Self {
        if items.len() == 1 {
            Self::One(items.remove(0))
        } else {
            Self::Many(items)
        }
    }
}

pub type DataResponse<T> = Result<Json<OneOrMany<T>>, ApiError>;

/// Resolve the generator, validate `count`, then draw `count` items
///
/// `locale` is `None` for endpoints whose output is locale-independent.
pub(crate) fn generate<T>(
    endpoint: &'static str,
    state: &AppState,
    query: &DataQuery,
    locale: Option<&str>,
    counter: CountValidator,
    mut draw: impl FnMut(&mut GeneratorContext) -> T,
) -> DataResponse<T> {
    let seed = query.seed_value();
    let mut handle = state.generators.resolve(locale, seed.as_ref())?;
    let count = counter.validate(query.count.as_deref())?;

    info!(
        endpoint,
        locale = locale.unwrap_or("en"),
        count,
        seeded = handle.is_seeded(),
        "Generating data"
    );

    let items: Vec<T> = handle.with(|ctx| (0..count).map(|_| draw(ctx)).collect());

    Ok(Json(OneOrMany::from_vec(items)))
}

/// Routes behind the auth and rate-limit gates
pub fn create_data_router() -> Router<AppState> {
    Router::new()
        .route("/user", get(people::user))
        .route("/profile", get(people::profile))
        .route("/address", get(places::address))
        .route("/company", get(business::company))
        .route("/product", get(business::product))
        .route("/payment/card", get(payment::card))
        .route("/transaction", get(payment::transaction))
        .route("/internet", get(network::internet))
        .route("/uuid", get(network::uuid))
        .route("/date", get(dates::date))
        .route("/lorem", get(text::lorem))
        .route("/readable_text", get(text::readable_text))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::extract::{Query, State};

    use super::*;
    use crate::domain::keystore::MockKeyStore;
    use crate::domain::rate_limit::{FixedWindow, PlanLimits};

    pub fn state() -> AppState {
        AppState::new(
            Some(Arc::new(MockKeyStore::new())),
            PlanLimits::default(),
            FixedWindow::default(),
        )
    }

    pub fn query(pairs: &[(&str, &str)]) -> Query<DataQuery> {
        let encoded: Vec<String> = pairs.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        let uri: axum::http::Uri = format!("/?{}", encoded.join("&")).parse().unwrap();
        Query::try_from_uri(&uri).unwrap()
    }

    pub fn state_extractor() -> State<AppState> {
        State(state())
    }

    /// Serialize a handler result for assertions
    pub fn to_json<T: Serialize>(response: DataResponse<T>) -> serde_json::Value {
        serde_json::to_value(response.unwrap().0).unwrap()
    }
}
