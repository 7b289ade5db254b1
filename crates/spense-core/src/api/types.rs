//! Wire types for the expense API.

use chrono::{NaiveDate, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A single server-owned expense entry.
///
/// The id is unique and assigned by the server; the client never invents
/// one. The date is an ISO 8601 instant as sent by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
}

/// Fields for creating or updating an expense.
///
/// The id decides the verb: `None` creates a new record (POST), `Some`
/// updates that record in place (PATCH).
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: f64,
}

/// Registration payload for `POST /api/users`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
}

/// Login payload for `POST /api/auth/login`.
#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Success response envelope: `{ "successResult": { ... } }`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    #[serde(rename = "successResult")]
    pub success_result: T,
}

/// Payload of auth responses.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResult {
    pub token: String,
}

/// Payload of the list response.
#[derive(Debug, Deserialize)]
pub(crate) struct ItemsResult {
    pub items: Vec<Expense>,
}

/// Serializes a calendar date as the RFC 3339 UTC midnight instant the
/// server expects (e.g. `2026-03-01T00:00:00.000Z`).
pub fn wire_date(date: NaiveDate) -> String {
    let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    Utc.from_utc_datetime(&midnight)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_date_is_utc_midnight() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(wire_date(date), "2026-03-01T00:00:00.000Z");
    }

    #[test]
    fn draft_without_id_omits_the_field() {
        let draft = ExpenseDraft {
            id: None,
            date: "2026-03-01T00:00:00.000Z".to_string(),
            category: "groceries".to_string(),
            description: "weekly shop".to_string(),
            amount: 42.5,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["amount"], 42.5);
    }

    #[test]
    fn draft_with_id_serializes_it() {
        let draft = ExpenseDraft {
            id: Some(7),
            date: "2026-03-01T00:00:00.000Z".to_string(),
            category: "groceries".to_string(),
            description: "weekly shop".to_string(),
            amount: 42.5,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["id"], 7);
    }

    #[test]
    fn register_request_uses_camel_case_names() {
        let req = RegisterRequest {
            email: "a@b.c",
            password: "pw",
            first_name: "Ada",
            last_name: "Lovelace",
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
    }

    #[test]
    fn envelope_unwraps_success_result() {
        let body = r#"{"successResult":{"items":[
            {"id":1,"date":"2026-03-01T00:00:00.000Z","category":"food",
             "description":"lunch","amount":12.0}
        ]}}"#;
        let parsed: Envelope<ItemsResult> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.success_result.items.len(), 1);
        assert_eq!(parsed.success_result.items[0].id, 1);
    }
}
