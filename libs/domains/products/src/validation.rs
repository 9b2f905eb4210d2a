//! Request attribute rules for creating and updating products.
//!
//! Attributes are read from `data.attributes` of the request document and
//! checked with `validator`. Each field reports at most its first broken
//! rule; violations come back in field order (name, then price).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use std::str::FromStr;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{ProductError, ProductResult};
use crate::models::{NewProduct, ProductChanges};

const NAME_REQUIRED: &str = "A name is required";
const NAME_NOT_STRING: &str = "The name has to be a string";
const NAME_EMPTY: &str = "The name can not be empty";
const PRICE_REQUIRED: &str = "A price is required";
const PRICE_NOT_NUMERIC: &str = "The price has to be numeric";
const PRICE_NOT_POSITIVE: &str = "The price has to be more than 0 (zero)";

const FIELDS: [&str; 2] = ["name", "price"];

/// A broken attribute rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub title: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
struct CreateAttributes {
    #[validate(
        required(message = "A name is required"),
        custom(function = "name_on_create")
    )]
    name: Option<Value>,
    #[validate(
        required(message = "A price is required"),
        custom(function = "price_on_create")
    )]
    price: Option<Value>,
}

/// Absent and `null` attributes are left unchanged on update.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
struct UpdateAttributes {
    #[validate(custom(function = "name_on_update"))]
    name: Option<Value>,
    #[validate(custom(function = "price_rules"))]
    price: Option<Value>,
}

/// Checks a create document and returns the normalized product input.
pub fn validate_create(document: &Value) -> ProductResult<NewProduct> {
    let attributes: CreateAttributes = attributes_of(document);
    attributes.validate().map_err(into_product_error)?;

    let name = attributes.name.as_ref().and_then(Value::as_str);
    let price = attributes.price.as_ref().and_then(parse_price);
    match (name, price) {
        (Some(name), Some(price)) => Ok(NewProduct {
            name: name.trim().to_string(),
            price,
        }),
        _ => Err(ProductError::Internal(
            "validated create attributes could not be normalized".to_string(),
        )),
    }
}

/// Checks an update document and returns only the supplied fields.
pub fn validate_update(document: &Value) -> ProductResult<ProductChanges> {
    let attributes: UpdateAttributes = attributes_of(document);
    attributes.validate().map_err(into_product_error)?;

    Ok(ProductChanges {
        name: attributes
            .name
            .as_ref()
            .and_then(Value::as_str)
            .map(|name| name.trim().to_string()),
        price: attributes.price.as_ref().and_then(parse_price),
    })
}

/// Parses a JSON number or numeric string into a two-decimal price.
///
/// Plain and scientific notation are accepted; surrounding whitespace in
/// strings is ignored. The value is rounded half away from zero. Values the
/// `decimal(10, 2)` column cannot hold are not prices.
pub fn parse_price(value: &Value) -> Option<Decimal> {
    let parsed = match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text.trim()),
        _ => None,
    }?;

    let mut price = parsed.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if price.abs() > max_price() {
        return None;
    }
    price.rescale(2);
    Some(price)
}

/// Largest magnitude a `decimal(10, 2)` column stores.
fn max_price() -> Decimal {
    Decimal::new(9_999_999_999, 2)
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    let well_formed = !text.is_empty()
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !well_formed {
        return None;
    }

    if let Ok(value) = Decimal::from_str(text) {
        return Some(value);
    }

    let (mantissa, exponent) = text.split_once(|c: char| c == 'e' || c == 'E')?;
    let mantissa = Decimal::from_str(mantissa).ok()?;
    let exponent: i64 = exponent.parse().ok()?;

    // from_scientific rejects scales past 28 digits; those values shrink towards zero
    Decimal::from_scientific(text)
        .ok()
        .or_else(|| (exponent < 0).then(|| shift_right(mantissa, exponent.unsigned_abs())))
}

/// Divides by ten `places` times, underflowing to zero.
fn shift_right(mut value: Decimal, places: u64) -> Decimal {
    for _ in 0..places {
        if value.is_zero() {
            break;
        }
        value = value.checked_div(Decimal::TEN).unwrap_or(Decimal::ZERO);
    }
    value
}

fn attributes_of<T>(document: &Value) -> T
where
    T: Default + serde::de::DeserializeOwned,
{
    document
        .pointer("/data/attributes")
        .filter(|attributes| attributes.is_object())
        .cloned()
        .and_then(|attributes| serde_json::from_value(attributes).ok())
        .unwrap_or_default()
}

fn into_product_error(errors: ValidationErrors) -> ProductError {
    let by_field = errors.field_errors();
    let violations: Vec<Violation> = FIELDS
        .into_iter()
        .filter_map(|field| {
            let error = by_field.get(field)?.first()?;
            let title = error
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| error.code.to_string());
            Some(Violation { field, title })
        })
        .collect();

    tracing::debug!(violations = violations.len(), "Product attributes rejected");
    ProductError::Validation(violations)
}

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn is_blank(value: &Value) -> bool {
    matches!(value, Value::String(text) if text.trim().is_empty())
}

fn name_on_create(value: &Value) -> Result<(), ValidationError> {
    match value {
        _ if is_blank(value) => Err(rule("required", NAME_REQUIRED)),
        Value::String(_) => Ok(()),
        _ => Err(rule("string", NAME_NOT_STRING)),
    }
}

fn name_on_update(value: &Value) -> Result<(), ValidationError> {
    match value {
        _ if is_blank(value) => Err(rule("filled", NAME_EMPTY)),
        Value::String(_) => Ok(()),
        _ => Err(rule("string", NAME_NOT_STRING)),
    }
}

fn price_on_create(value: &Value) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(rule("required", PRICE_REQUIRED));
    }
    price_rules(value)
}

fn price_rules(value: &Value) -> Result<(), ValidationError> {
    match parse_price(value) {
        None => Err(rule("numeric", PRICE_NOT_NUMERIC)),
        Some(price) if price <= Decimal::ZERO => Err(rule("greater_than_zero", PRICE_NOT_POSITIVE)),
        Some(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn document(attributes: Value) -> Value {
        json!({ "data": { "type": "products", "attributes": attributes } })
    }

    fn titles(result: ProductResult<impl std::fmt::Debug>) -> Vec<String> {
        match result {
            Err(ProductError::Validation(violations)) => {
                violations.into_iter().map(|v| v.title).collect()
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_accepts_valid_attributes() {
        let input = validate_create(&document(json!({ "name": "Huevito Kinder", "price": 9.30 })))
            .unwrap();

        assert_eq!(input.name, "Huevito Kinder");
        assert_eq!(input.price, dec!(9.30));
        assert_eq!(input.price.to_string(), "9.30");
    }

    #[test]
    fn test_create_requires_both_fields_in_order() {
        assert_eq!(
            titles(validate_create(&document(json!({})))),
            vec![NAME_REQUIRED, PRICE_REQUIRED]
        );
    }

    #[test]
    fn test_create_treats_null_and_blank_as_missing() {
        assert_eq!(
            titles(validate_create(&document(json!({ "name": null, "price": "  " })))),
            vec![NAME_REQUIRED, PRICE_REQUIRED]
        );
    }

    #[test]
    fn test_create_reports_first_failure_per_field() {
        assert_eq!(
            titles(validate_create(&document(json!({ "name": 42, "price": "Dolar" })))),
            vec![NAME_NOT_STRING, PRICE_NOT_NUMERIC]
        );
    }

    #[test]
    fn test_create_rejects_non_positive_prices() {
        for price in [json!(-2), json!(0), json!("0.00"), json!(0.001)] {
            assert_eq!(
                titles(validate_create(&document(json!({ "name": "Chicle", "price": price })))),
                vec![PRICE_NOT_POSITIVE],
                "price {}",
                price
            );
        }
    }

    #[test]
    fn test_flat_and_malformed_documents_have_no_attributes() {
        let flat = json!({ "name": "Chicle", "price": 1 });
        assert_eq!(titles(validate_create(&flat)), vec![NAME_REQUIRED, PRICE_REQUIRED]);
        assert_eq!(
            titles(validate_create(&Value::Null)),
            vec![NAME_REQUIRED, PRICE_REQUIRED]
        );
        assert_eq!(
            titles(validate_create(&document(json!("not an object")))),
            vec![NAME_REQUIRED, PRICE_REQUIRED]
        );
    }

    #[test]
    fn test_update_with_only_price() {
        let changes = validate_update(&document(json!({ "price": "12.5" }))).unwrap();
        assert_eq!(changes.name, None);
        assert_eq!(changes.price.map(|p| p.to_string()), Some("12.50".to_string()));
    }

    #[test]
    fn test_update_ignores_null_and_missing_fields() {
        let changes = validate_update(&document(json!({ "name": null }))).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn test_update_rules() {
        assert_eq!(
            titles(validate_update(&document(json!({ "name": " ", "price": -2 })))),
            vec![NAME_EMPTY, PRICE_NOT_POSITIVE]
        );
        assert_eq!(
            titles(validate_update(&document(json!({ "name": ["x"], "price": true })))),
            vec![NAME_NOT_STRING, PRICE_NOT_NUMERIC]
        );
    }

    #[test]
    fn test_parse_price_notations() {
        assert_eq!(parse_price(&json!(" 1e2 ")), Some(dec!(100.00)));
        assert_eq!(parse_price(&json!("2.345")), Some(dec!(2.35)));
        assert_eq!(parse_price(&json!(2.344)), Some(dec!(2.34)));
        assert_eq!(parse_price(&json!("1_000")), None);
        assert_eq!(parse_price(&json!("")), None);
        assert_eq!(parse_price(&json!(null)), None);
    }

    #[test]
    fn test_parse_price_stays_within_column_range() {
        assert_eq!(parse_price(&json!("99999999.99")), Some(dec!(99999999.99)));
        assert_eq!(parse_price(&json!("99999999.995")), None);
        assert_eq!(parse_price(&json!("1e8")), None);
        assert_eq!(parse_price(&json!("1e27")), None);
        assert_eq!(parse_price(&json!("-1e27")), None);
        assert_eq!(parse_price(&json!(1e20)), None);
    }

    #[test]
    fn test_parsed_prices_have_two_decimals() {
        for value in [json!(1), json!("1e2"), json!("0.5"), json!(99999999.99)] {
            let price = parse_price(&value).unwrap();
            assert_eq!(price.scale(), 2, "value {}", value);
        }
    }

    #[test]
    fn test_create_rejects_prices_beyond_column_range() {
        for price in [json!("1e8"), json!("1e27")] {
            assert_eq!(
                titles(validate_create(&document(json!({ "name": "Chicle", "price": price })))),
                vec![PRICE_NOT_NUMERIC],
                "price {}",
                price
            );
        }
    }

    #[test]
    fn test_tiny_prices_round_to_zero() {
        assert_eq!(parse_price(&json!("1e-30")), Some(dec!(0.00)));
        assert_eq!(parse_price(&json!("25e-40")), Some(dec!(0.00)));
        for price in [json!(1e-7), json!("1e-7"), json!("1e-30")] {
            assert_eq!(
                titles(validate_create(&document(json!({ "name": "Chicle", "price": price })))),
                vec![PRICE_NOT_POSITIVE],
                "price {}",
                price
            );
        }
    }
}
