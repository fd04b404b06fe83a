//! Lorem and readable text endpoints

use axum::extract::{Query, State};
use serde::Serialize;

use super::{DataResponse, generate};
use crate::api::state::AppState;
use crate::api::types::DataQuery;
use crate::domain::generator::{LoremKind, ReadableContext};
use crate::domain::parse::parse_int_prefix_saturating;

const LOREM_MAX_COUNT: u32 = 10;
const DEFAULT_LOREM_UNITS: i64 = 5;
const MAX_LOREM_UNITS: i64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Text {
    pub text: String,
}

/// Lenient `num`: non-numeric falls back to the default, the rest is clamped
fn lorem_units(raw: Option<&str>) -> usize {
    let units = raw
        .and_then(parse_int_prefix_saturating)
        .unwrap_or(DEFAULT_LOREM_UNITS)
        .clamp(1, MAX_LOREM_UNITS);

    // Clamped to a small positive range above
    units as usize
}

/// GET /lorem; the locale is ignored
pub async fn lorem(State(state): State<AppState>, Query(query): Query<DataQuery>) -> DataResponse<Text> {
    let kind = query
        .kind
        .as_deref()
        .and_then(|k| k.parse::<LoremKind>().ok())
        .unwrap_or_default();
    let units = lorem_units(query.num.as_deref());
    let counter = state.count.with_max(LOREM_MAX_COUNT);

    generate("/lorem", &state, &query, None, counter, |ctx| Text {
        text: ctx.lorem(kind, units),
    })
}

/// GET /readable_text
pub async fn readable_text(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> DataResponse<Text> {
    let context = ReadableContext::from_query(query.context.as_deref());
    // Four paragraphs per context
    let counter = state.count.with_max(context.paragraphs().len() as u32);

    generate("/readable_text", &state, &query, None, counter, |ctx| Text {
        text: ctx.readable_paragraph(context).to_string(),
    })
}
