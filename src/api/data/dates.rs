//! Date endpoint

use axum::extract::{Query, State};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::{DataResponse, generate};
use crate::api::state::AppState;
use crate::api::types::{ApiError, DataQuery};
use crate::domain::generator::{DateFormat, to_iso};
use crate::domain::parse::parse_int_prefix_saturating;

const DEFAULT_YEARS: i64 = 1;
const MAX_YEARS: i64 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DateValue {
    Millis(i64),
    Iso(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedDate {
    pub date: DateValue,
}

/// Lenient `years`: non-numeric falls back to the default, the rest is clamped
fn parse_years(raw: Option<&str>) -> i64 {
    raw.and_then(parse_int_prefix_saturating)
        .unwrap_or(DEFAULT_YEARS)
        .clamp(1, MAX_YEARS)
}

/// RFC 3339, a bare `YYYY-MM-DD` (midnight UTC), or epoch millis
fn parse_ref_date(raw: &str) -> Result<DateTime<Utc>, ApiError> {
    let trimmed = raw.trim();

    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Some(midnight) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(midnight.and_utc());
    }
    if let Some(instant) = trimmed
        .parse::<i64>()
        .ok()
        .and_then(DateTime::from_timestamp_millis)
    {
        return Ok(instant);
    }

    Err(ApiError::bad_request(format!(
        "Invalid refDate parameter: '{}'.",
        raw
    )))
}

/// GET /date
///
/// `iso` and `unix` draw within a year of now; the relative formats honor
/// `refDate`. Unknown formats fall back to `iso`.
pub async fn date(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> DataResponse<GeneratedDate> {
    let format = query
        .format
        .as_deref()
        .and_then(|f| f.parse::<DateFormat>().ok())
        .unwrap_or_default();
    let years = parse_years(query.years.as_deref());
    let now = Utc::now();

    let reference = match (&format, query.ref_date.as_deref()) {
        (DateFormat::Iso | DateFormat::Unix, _) | (_, None) => now,
        (_, Some(raw)) => parse_ref_date(raw)?,
    };
    let days = years * 365;

    generate("/date", &state, &query, query.locale.as_deref(), state.count, |ctx| {
        let date = match format {
            DateFormat::Unix => DateValue::Millis(ctx.anytime(now).timestamp_millis()),
            DateFormat::Iso => DateValue::Iso(to_iso(ctx.anytime(now))),
            DateFormat::Recent => DateValue::Iso(to_iso(ctx.recent(days, reference))),
            DateFormat::Soon => DateValue::Iso(to_iso(ctx.soon(days, reference))),
            DateFormat::Past => DateValue::Iso(to_iso(ctx.past(years, reference))),
            DateFormat::Future => DateValue::Iso(to_iso(ctx.future(years, reference))),
        };

        GeneratedDate { date }
    })
}
