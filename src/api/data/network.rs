//! Internet and UUID endpoints

use axum::extract::{Query, State};
use serde::Serialize;

use super::{DataResponse, generate};
use crate::api::state::AppState;
use crate::api::types::DataQuery;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Internet {
    pub ip: String,
    pub ipv6: String,
    pub mac: String,
    pub user_agent: String,
    pub domain_name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UuidValue {
    pub uuid: String,
}

/// GET /internet
pub async fn internet(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> DataResponse<Internet> {
    generate("/internet", &state, &query, query.locale.as_deref(), state.count, |ctx| Internet {
        ip: ctx.ipv4(),
        ipv6: ctx.ipv6(),
        mac: ctx.mac(),
        user_agent: ctx.user_agent(),
        domain_name: ctx.domain_name(),
        url: ctx.url(),
    })
}

/// GET /uuid; the locale is ignored
pub async fn uuid(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> DataResponse<UuidValue> {
    generate("/uuid", &state, &query, None, state.count, |ctx| UuidValue {
        uuid: ctx.uuid().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::data::test_support::{query, state_extractor, to_json};

    #[tokio::test]
    async fn test_internet_fields() {
        let value = to_json(internet(state_extractor(), query(&[])).await);

        assert_eq!(value["ip"].as_str().unwrap().split('.').count(), 4);
        assert_eq!(value["mac"].as_str().unwrap().split(':').count(), 6);
        assert!(value["url"].as_str().unwrap().starts_with("https://"));
        for field in ["ipv6", "userAgent", "domainName"] {
            assert!(value[field].is_string());
        }
    }

    #[tokio::test]
    async fn test_uuid_is_v4() {
        let value = to_json(uuid(state_extractor(), query(&[])).await);
        let parsed = ::uuid::Uuid::parse_str(value["uuid"].as_str().unwrap()).unwrap();

        assert_eq!(parsed.get_version_num(), 4);
    }

    #[tokio::test]
    async fn test_uuid_ignores_locale() {
        let value = to_json(uuid(state_extractor(), query(&[("locale", "nowhere")])).await);

        assert!(value["uuid"].is_string());
    }

    #[tokio::test]
    async fn test_seeded_uuid_is_reproducible() {
        let first = to_json(uuid(state_extractor(), query(&[("seed", "7")])).await);
        let second = to_json(uuid(state_extractor(), query(&[("seed", "7")])).await);

        assert_eq!(first, second);
    }
}
