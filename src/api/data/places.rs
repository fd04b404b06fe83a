//! Address endpoint

use axum::extract::{Query, State};
use serde::Serialize;

use super::{DataResponse, generate};
use crate::api::state::AppState;
use crate::api::types::DataQuery;
use crate::domain::generator::GeneratorContext;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Address {
    pub fn draw(ctx: &mut GeneratorContext) -> Self {
        let mut address = Self::draw_without_coordinates(ctx);
        address.latitude = Some(ctx.latitude());
        address.longitude = Some(ctx.longitude());
        address
    }

    /// Postal fields only, as embedded in a profile
    pub fn draw_without_coordinates(ctx: &mut GeneratorContext) -> Self {
        Self {
            street_address: ctx.street_address(),
            city: ctx.city(),
            state: ctx.state_abbr(),
            zip_code: ctx.zip_code(),
            country: ctx.country(),
            latitude: None,
            longitude: None,
        }
    }
}

/// GET /address
pub async fn address(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> DataResponse<Address> {
    generate("/address", &state, &query, query.locale.as_deref(), state.count, Address::draw)
}
