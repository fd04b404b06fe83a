//! Company and product endpoints

use axum::extract::{Query, State};
use serde::Serialize;

use super::{DataResponse, generate};
use crate::api::state::AppState;
use crate::api::types::DataQuery;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub name: String,
    pub price: String,
    pub department: String,
    pub description: String,
    pub material: String,
}

/// GET /company
pub async fn company(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> DataResponse<Company> {
    generate("/company", &state, &query, query.locale.as_deref(), state.count, |ctx| Company {
        name: ctx.company_name(),
        catch_phrase: ctx.catch_phrase(),
    })
}

/// GET /product
pub async fn product(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> DataResponse<Product> {
    generate("/product", &state, &query, query.locale.as_deref(), state.count, |ctx| Product {
        name: ctx.product_name(),
        price: ctx.price(),
        department: ctx.department(),
        description: ctx.product_description(),
        material: ctx.product_material(),
    })
}
