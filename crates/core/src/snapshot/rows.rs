//! Row decoders for the remote store's JSON shapes.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::Value;
use tripmate_shared::types::Currency;
use tripmate_shared::{AppError, AppResult};

use crate::expense::Expense;
use crate::settlement::Member;
use crate::trip::{Trip, total_days};

fn str_field<'a>(row: &'a Value, key: &str) -> AppResult<&'a str> {
    row.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Validation(format!("missing or non-string field `{key}`")))
}

fn id_field<I>(row: &Value, key: &str) -> AppResult<I>
where
    I: FromStr,
    I::Err: std::fmt::Display,
{
    str_field(row, key)?
        .parse()
        .map_err(|err| AppError::Validation(format!("field `{key}` is not a valid id: {err}")))
}

fn date_field(row: &Value, key: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(str_field(row, key)?, "%Y-%m-%d")
        .map_err(|err| AppError::Validation(format!("field `{key}` is not a date: {err}")))
}

/// Coerces a row field into an exact decimal.
///
/// The store serializes numerics as JSON numbers or as strings
/// depending on column type; both are accepted. Anything else (and
/// therefore anything non-finite, which JSON cannot carry as a number)
/// is rejected instead of propagated.
pub fn decimal_field(row: &Value, key: &str) -> AppResult<Decimal> {
    let value = row
        .get(key)
        .ok_or_else(|| AppError::Validation(format!("missing field `{key}`")))?;
    let parsed = match value {
        Value::Number(n) => Decimal::from_str(&n.to_string()),
        Value::String(s) => Decimal::from_str(s),
        other => {
            tracing::debug!(%key, ?other, "rejecting non-numeric amount field");
            return Err(AppError::Validation(format!(
                "field `{key}` is not numeric"
            )));
        }
    };
    parsed.map_err(|err| AppError::Validation(format!("field `{key}` is not a decimal: {err}")))
}

/// Decodes a trip-member row into a settlement [`Member`].
///
/// The member list is fetched joined with profiles, so the display
/// name usually sits nested under `profiles.username`; a flat
/// `username` is accepted too.
pub fn member_from_row(row: &Value) -> AppResult<Member> {
    let display_name = row
        .get("profiles")
        .and_then(|profiles| profiles.get("username"))
        .or_else(|| row.get("username"))
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::Validation("member row has no username".to_string()))?;

    Ok(Member {
        user_id: id_field(row, "user_id")?,
        display_name: display_name.to_string(),
    })
}

/// Decodes an expense row.
pub fn expense_from_row(row: &Value) -> AppResult<Expense> {
    let amount = decimal_field(row, "amount")?;
    if amount.is_sign_negative() {
        return Err(AppError::Validation(format!(
            "expense amount cannot be negative: {amount}"
        )));
    }

    Ok(Expense {
        id: id_field(row, "id")?,
        trip_id: id_field(row, "trip_id")?,
        payer_id: id_field(row, "payer_id")?,
        description: str_field(row, "description")?.to_string(),
        amount,
        date: date_field(row, "date")?,
    })
}

/// Decodes a trip row.
///
/// `total_days` is stored denormalized; when a row predates the column
/// it is recomputed from the date range.
pub fn trip_from_row(row: &Value) -> AppResult<Trip> {
    let start_date = date_field(row, "start_date")?;
    let end_date = date_field(row, "end_date")?;

    let days = match row.get("total_days").and_then(Value::as_u64) {
        Some(days) => u32::try_from(days)
            .map_err(|_| AppError::Validation(format!("total_days out of range: {days}")))?,
        None => total_days(start_date, end_date),
    };

    let base_currency = Currency::from_str(str_field(row, "base_currency")?)
        .map_err(AppError::Validation)?;

    Ok(Trip {
        id: id_field(row, "id")?,
        name: str_field(row, "trip_name")?.to_string(),
        start_date,
        end_date,
        total_days: days,
        base_currency,
        created_by: id_field(row, "created_by")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use tripmate_shared::types::{TripId, UserId};

    #[test]
    fn test_decimal_field_accepts_numbers_and_strings() {
        let row = json!({ "a": 12.5, "b": "12.50", "c": 3 });
        assert_eq!(decimal_field(&row, "a").unwrap(), dec!(12.5));
        assert_eq!(decimal_field(&row, "b").unwrap(), dec!(12.50));
        assert_eq!(decimal_field(&row, "c").unwrap(), dec!(3));
    }

    #[test]
    fn test_decimal_field_rejects_everything_else() {
        let row = json!({ "a": null, "b": [1], "c": "abc" });
        assert!(decimal_field(&row, "a").is_err());
        assert!(decimal_field(&row, "b").is_err());
        assert!(decimal_field(&row, "c").is_err());
        assert!(decimal_field(&row, "missing").is_err());
    }

    #[test]
    fn test_member_from_joined_row() {
        let user_id = UserId::new();
        let row = json!({
            "user_id": user_id.to_string(),
            "profiles": { "username": "alice", "avatar_url": null }
        });

        let member = member_from_row(&row).unwrap();
        assert_eq!(member.user_id, user_id);
        assert_eq!(member.display_name, "alice");
    }

    #[test]
    fn test_member_from_flat_row() {
        let row = json!({ "user_id": UserId::new().to_string(), "username": "bob" });
        assert_eq!(member_from_row(&row).unwrap().display_name, "bob");
    }

    #[test]
    fn test_member_without_username_rejected() {
        let row = json!({ "user_id": UserId::new().to_string() });
        assert!(member_from_row(&row).is_err());
    }

    fn expense_row(amount: serde_json::Value) -> serde_json::Value {
        json!({
            "id": UserId::new().to_string(),
            "trip_id": TripId::new().to_string(),
            "payer_id": UserId::new().to_string(),
            "description": "Train tickets",
            "amount": amount,
            "date": "2026-04-02"
        })
    }

    #[test]
    fn test_expense_from_row() {
        let expense = expense_from_row(&expense_row(json!(1520))).unwrap();
        assert_eq!(expense.description, "Train tickets");
        assert_eq!(expense.amount, dec!(1520));
        assert_eq!(
            expense.date,
            NaiveDate::from_ymd_opt(2026, 4, 2).unwrap()
        );
    }

    #[test]
    fn test_negative_expense_rejected_at_the_boundary() {
        let err = expense_from_row(&expense_row(json!(-3))).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_trip_from_row() {
        let row = json!({
            "id": TripId::new().to_string(),
            "trip_name": "Kyoto",
            "start_date": "2026-04-01",
            "end_date": "2026-04-05",
            "total_days": 5,
            "base_currency": "JPY",
            "created_by": UserId::new().to_string()
        });

        let trip = trip_from_row(&row).unwrap();
        assert_eq!(trip.name, "Kyoto");
        assert_eq!(trip.total_days, 5);
        assert_eq!(trip.base_currency, Currency::Jpy);
    }

    #[test]
    fn test_trip_row_without_total_days_recomputes() {
        let row = json!({
            "id": TripId::new().to_string(),
            "trip_name": "Kyoto",
            "start_date": "2026-04-01",
            "end_date": "2026-04-05",
            "base_currency": "JPY",
            "created_by": UserId::new().to_string()
        });

        assert_eq!(trip_from_row(&row).unwrap().total_days, 5);
    }

    #[test]
    fn test_trip_row_with_unknown_currency_rejected() {
        let row = json!({
            "id": TripId::new().to_string(),
            "trip_name": "Kyoto",
            "start_date": "2026-04-01",
            "end_date": "2026-04-05",
            "base_currency": "XYZ",
            "created_by": UserId::new().to_string()
        });

        assert!(trip_from_row(&row).is_err());
    }
}
