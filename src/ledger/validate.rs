// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Per-operation input validation.
//!
//! Amounts arrive as raw JSON values and are coerced to a numeric type
//! before any arithmetic: JSON numbers and numeric strings are accepted
//! (the original API was called with both), everything else is rejected
//! as invalid input. Coercion never touches the store, so a rejected
//! request leaves no partial side effects.

use serde_json::Value;

use super::error::{LedgerError, LedgerResult};

/// Largest amount representable without risking `u64` overflow when a
/// float is involved in coercion (2^53, the f64 integer-exact bound).
const MAX_AMOUNT: u64 = 1 << 53;

/// Require a non-empty wallet/user id.
pub fn wallet_id(field: &'static str, id: &str) -> LedgerResult<()> {
    if id.trim().is_empty() {
        return Err(LedgerError::invalid(field, "is required"));
    }
    Ok(())
}

/// Coerce a raw JSON `amount` into whole, strictly positive minor units.
pub fn amount(raw: Option<&Value>) -> LedgerResult<u64> {
    let value = raw.ok_or_else(|| LedgerError::invalid("amount", "is required"))?;

    let number = match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                return check_positive(u);
            }
            // Negative integers and all floats land here.
            n.as_f64()
                .ok_or_else(|| LedgerError::invalid("amount", "must be a number"))?
        }
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| LedgerError::invalid("amount", "must be a number"))?,
        _ => return Err(LedgerError::invalid("amount", "must be a number")),
    };

    if !number.is_finite() {
        return Err(LedgerError::invalid("amount", "must be a finite number"));
    }
    if number <= 0.0 {
        return Err(LedgerError::invalid("amount", "must be positive"));
    }
    if number.fract() != 0.0 {
        return Err(LedgerError::invalid(
            "amount",
            "must be a whole number of minor units",
        ));
    }
    if number > MAX_AMOUNT as f64 {
        return Err(LedgerError::invalid("amount", "is too large"));
    }

    check_positive(number as u64)
}

fn check_positive(units: u64) -> LedgerResult<u64> {
    if units == 0 {
        return Err(LedgerError::invalid("amount", "must be positive"));
    }
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wallet_id_rejects_empty_and_blank() {
        assert!(wallet_id("userId", "").is_err());
        assert!(wallet_id("userId", "   ").is_err());
        assert!(wallet_id("userId", "u1").is_ok());
    }

    #[test]
    fn amount_accepts_positive_integers() {
        assert_eq!(amount(Some(&json!(100))).unwrap(), 100);
        assert_eq!(amount(Some(&json!(1))).unwrap(), 1);
    }

    #[test]
    fn amount_accepts_integer_valued_floats() {
        assert_eq!(amount(Some(&json!(250.0))).unwrap(), 250);
    }

    #[test]
    fn amount_coerces_numeric_strings() {
        assert_eq!(amount(Some(&json!("42"))).unwrap(), 42);
        assert_eq!(amount(Some(&json!(" 7 "))).unwrap(), 7);
    }

    #[test]
    fn amount_rejects_missing() {
        assert!(matches!(
            amount(None),
            Err(LedgerError::InvalidInput { field: "amount", .. })
        ));
    }

    #[test]
    fn amount_rejects_zero_and_negative() {
        assert!(amount(Some(&json!(0))).is_err());
        assert!(amount(Some(&json!(-5))).is_err());
        assert!(amount(Some(&json!(-0.5))).is_err());
    }

    #[test]
    fn amount_rejects_fractional_units() {
        assert!(amount(Some(&json!(10.5))).is_err());
    }

    #[test]
    fn amount_rejects_non_numeric() {
        assert!(amount(Some(&json!("ten"))).is_err());
        assert!(amount(Some(&json!("NaN"))).is_err());
        assert!(amount(Some(&json!(true))).is_err());
        assert!(amount(Some(&json!({"v": 1}))).is_err());
        assert!(amount(Some(&Value::Null)).is_err());
    }
}
