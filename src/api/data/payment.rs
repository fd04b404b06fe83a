//! Card and transaction endpoints

use axum::extract::{Query, State};
use chrono::{Datelike, Utc};
use serde::Serialize;

use super::{DataResponse, generate};
use crate::api::state::AppState;
use crate::api::types::DataQuery;
use crate::domain::generator::CardIssuer;

/// Years ahead an expiry may fall
const EXPIRY_YEARS: i64 = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub card_type: String,
    pub card_number: String,
    pub card_cvv: String,
    pub card_expiry: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub amount: String,
    pub currency_code: String,
    pub currency_name: String,
    pub currency_symbol: String,
    pub account: String,
    pub transaction_type: String,
    pub transaction_description: String,
}

/// GET /payment/card
///
/// A `type` the generator does not know is echoed as `cardType` and the
/// number takes a random issuer's layout.
pub async fn card(State(state): State<AppState>, Query(query): Query<DataQuery>) -> DataResponse<Card> {
    let requested = query.kind.as_deref().map(str::to_lowercase);
    let now = Utc::now();

    generate("/payment/card", &state, &query, query.locale.as_deref(), state.count, |ctx| {
        let (card_type, issuer) = match &requested {
            Some(name) => (name.clone(), name.parse::<CardIssuer>().ok()),
            None => {
                let issuer = ctx.card_issuer();
                (issuer.as_str().to_string(), Some(issuer))
            }
        };
        let expiry = ctx.future(EXPIRY_YEARS, now);

        Card {
            card_type,
            card_number: ctx.card_number(issuer),
            card_cvv: ctx.card_cvv(),
            card_expiry: format!("{}/{}", expiry.month(), expiry.year()),
        }
    })
}

/// GET /transaction
pub async fn transaction(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> DataResponse<Transaction> {
    generate("/transaction", &state, &query, query.locale.as_deref(), state.count, |ctx| {
        let (code, name, symbol) = ctx.currency();

        Transaction {
            amount: ctx.amount(),
            currency_code: code.to_string(),
            currency_name: name.to_string(),
            currency_symbol: symbol.to_string(),
            account: ctx.account_number(),
            transaction_type: ctx.transaction_type(),
            transaction_description: ctx.transaction_description(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::data::test_support::{query, state_extractor, to_json};
    use crate::domain::generator::luhn_valid;

    #[tokio::test]
    async fn test_cards_pass_luhn() {
        let value = to_json(card(state_extractor(), query(&[("count", "20")])).await);

        for item in value.as_array().unwrap() {
            assert!(luhn_valid(item["cardNumber"].as_str().unwrap()));
            assert_eq!(item["cardCvv"].as_str().unwrap().len(), 3);
        }
    }

    #[tokio::test]
    async fn test_requested_type_is_lowercased() {
        let value = to_json(card(state_extractor(), query(&[("type", "AMEX")])).await);
        let number = value["cardNumber"].as_str().unwrap();

        assert_eq!(value["cardType"], "amex");
        assert_eq!(number.len(), 15);
        assert!(number.starts_with("34") || number.starts_with("37"));
    }

    #[tokio::test]
    async fn test_unknown_type_is_echoed() {
        let value = to_json(card(state_extractor(), query(&[("type", "JCB")])).await);

        assert_eq!(value["cardType"], "jcb");
        assert!(luhn_valid(value["cardNumber"].as_str().unwrap()));
    }

    #[tokio::test]
    async fn test_expiry_is_month_slash_year() {
        let value = to_json(card(state_extractor(), query(&[])).await);
        let expiry = value["cardExpiry"].as_str().unwrap();
        let (month, year) = expiry.split_once('/').unwrap();

        assert!((1..=12).contains(&month.parse::<u32>().unwrap()));
        assert!(year.parse::<i32>().unwrap() >= Utc::now().year());
    }

    #[tokio::test]
    async fn test_transaction_fields() {
        let value = to_json(transaction(state_extractor(), query(&[("locale", "fr")])).await);

        for field in [
            "amount",
            "currencyCode",
            "currencyName",
            "currencySymbol",
            "account",
            "transactionType",
            "transactionDescription",
        ] {
            assert!(value[field].is_string(), "missing {}", field);
        }
        assert_eq!(value["account"].as_str().unwrap().len(), 8);
    }
}
