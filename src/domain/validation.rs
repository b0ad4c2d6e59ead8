//! Request validation rules for product routes.
//!
//! Every field owns an ordered list of independent checks. All checks run, and each
//! failing one contributes its own [`FieldError`], so a single field can report several
//! problems at once. For `price` and `quantity` that gives:
//!
//! | value                         | errors |
//! |-------------------------------|--------|
//! | absent, `null` or `""`        | 3      |
//! | present but not numeric       | 2      |
//! | numeric and `<= 0`            | 1      |
//! | numeric and `> 0`             | 0      |

use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::domain::product::ProductId;

pub const INVALID_ID: &str = "ID no válido";
pub const INVALID_JSON: &str = "JSON no válido";

/// One failed check, reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Vec<FieldError>),
}

impl ValidationOutcome {
    fn from_errors(errors: Vec<FieldError>) -> Self {
        if errors.is_empty() {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid(errors)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            ValidationOutcome::Valid => &[],
            ValidationOutcome::Invalid(errors) => errors,
        }
    }

    pub fn into_result(self) -> Result<(), Vec<FieldError>> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(errors) => Err(errors),
        }
    }
}

/// A check passes when it returns `true` for the (possibly absent) field value.
type Check = fn(Option<&JsonValue>) -> bool;

struct FieldRule {
    field: &'static str,
    checks: &'static [(Check, &'static str)],
}

const PRODUCT_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        checks: &[(not_empty, "El nombre del producto no puede ir vacio")],
    },
    FieldRule {
        field: "price",
        checks: &[
            (is_numeric, "Valor no válido"),
            (not_empty, "El precio del producto no puede ir vacio"),
            (greater_than_zero, "Precio no válido"),
        ],
    },
    FieldRule {
        field: "quantity",
        checks: &[
            (is_numeric, "Cantidad no válida"),
            (not_empty, "La cantidad del producto no puede ir vacio"),
            (greater_than_zero, "Cantidad no válida"),
        ],
    },
];

/// Identifier rule: the `id` path segment must be an integer.
pub fn check_product_id(raw: &str) -> Result<ProductId, Vec<FieldError>> {
    raw.parse::<ProductId>()
        .map_err(|_| vec![FieldError::new("id", INVALID_ID)])
}

/// Product payload rule, used for create and full update.
///
/// A body that is not a JSON object is checked as if every field were absent.
pub fn check_product_payload(body: &JsonValue) -> ValidationOutcome {
    let mut errors = Vec::new();
    for rule in PRODUCT_RULES {
        let value = body.get(rule.field);
        for (check, message) in rule.checks {
            if !check(value) {
                errors.push(FieldError::new(rule.field, *message));
            }
        }
    }
    ValidationOutcome::from_errors(errors)
}

fn not_empty(v: Option<&JsonValue>) -> bool {
    match v {
        None | Some(JsonValue::Null) => false,
        Some(JsonValue::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn is_numeric(v: Option<&JsonValue>) -> bool {
    match v {
        Some(JsonValue::Number(_)) => true,
        Some(JsonValue::String(s)) => is_numeric_str(s),
        _ => false,
    }
}

fn greater_than_zero(v: Option<&JsonValue>) -> bool {
    numeric_value(v).is_some_and(|n| n > 0.0)
}

/// Numeric value of a field that passes the numeric check.
pub fn numeric_value(v: Option<&JsonValue>) -> Option<f64> {
    let n = match v? {
        JsonValue::Number(n) => n.as_f64()?,
        JsonValue::String(s) if is_numeric_str(s) => s.parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

// Optional sign, optional integer part, optional '.', then at least one digit.
fn is_numeric_str(s: &str) -> bool {
    let unsigned = s.strip_prefix(|c| c == '+' || c == '-').unwrap_or(s);
    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    match unsigned.split_once('.') {
        Some((int, frac)) => all_digits(int) && !frac.is_empty() && all_digits(frac),
        None => !unsigned.is_empty() && all_digits(unsigned),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> JsonValue {
        json!({
            "name": "Monitor 32 Pulgadas",
            "price": 300,
            "quantity": 5,
            "availability": true
        })
    }

    fn errors_for(body: JsonValue, field: &str) -> usize {
        check_product_payload(&body)
            .errors()
            .iter()
            .filter(|e| e.field == field)
            .count()
    }

    #[test]
    fn empty_payload_yields_seven_errors() {
        let outcome = check_product_payload(&json!({}));
        assert_eq!(outcome.errors().len(), 7);
    }

    #[test]
    fn errors_follow_declared_order() {
        let outcome = check_product_payload(&json!({}));
        let fields: Vec<&str> = outcome.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            ["name", "price", "price", "price", "quantity", "quantity", "quantity"]
        );
        assert_eq!(outcome.errors()[1].message, "Valor no válido");
        assert_eq!(outcome.errors()[3].message, "Precio no válido");
    }

    #[test]
    fn valid_payload_passes() {
        assert!(check_product_payload(&valid_body()).is_valid());
    }

    #[test]
    fn numeric_strings_pass() {
        let mut body = valid_body();
        body["quantity"] = json!("23");
        body["price"] = json!("19.99");
        assert!(check_product_payload(&body).is_valid());
    }

    #[test]
    fn zero_price_yields_one_error() {
        let mut body = valid_body();
        body["price"] = json!(0);
        let outcome = check_product_payload(&body);
        assert_eq!(outcome.errors(), &[FieldError::new("price", "Precio no válido")]);
    }

    #[test]
    fn text_price_yields_two_errors() {
        let mut body = valid_body();
        body["price"] = json!("hola");
        let outcome = check_product_payload(&body);
        assert_eq!(outcome.errors().len(), 2);
        assert_eq!(outcome.errors()[0].message, "Valor no válido");
        assert_eq!(outcome.errors()[1].message, "Precio no válido");
    }

    #[test]
    fn numeric_field_error_table() {
        for field in ["price", "quantity"] {
            let cases = [
                (None, 3),
                (Some(json!(null)), 3),
                (Some(json!("")), 3),
                (Some(json!("hola")), 2),
                (Some(json!(true)), 2),
                (Some(json!(0)), 1),
                (Some(json!(-4.5)), 1),
                (Some(json!("-1")), 1),
                (Some(json!(12)), 0),
                (Some(json!("0.5")), 0),
            ];
            for (value, expected) in cases {
                let mut body = valid_body();
                match value.clone() {
                    Some(v) => body[field] = v,
                    None => {
                        body.as_object_mut().unwrap().remove(field);
                    }
                }
                assert_eq!(
                    errors_for(body, field),
                    expected,
                    "{field} = {value:?}"
                );
            }
        }
    }

    #[test]
    fn empty_name_yields_exactly_one_error_regardless_of_other_fields() {
        for name in [None, Some(json!("")), Some(json!(null))] {
            for mut body in [valid_body(), json!({ "price": "hola" })] {
                match name.clone() {
                    Some(v) => body["name"] = v,
                    None => {
                        body.as_object_mut().unwrap().remove("name");
                    }
                }
                assert_eq!(errors_for(body, "name"), 1);
            }
        }
    }

    #[test]
    fn non_object_body_is_checked_as_empty() {
        assert_eq!(check_product_payload(&json!([1, 2, 3])).errors().len(), 7);
        assert_eq!(check_product_payload(&json!("text")).errors().len(), 7);
    }

    #[test]
    fn id_must_be_an_integer() {
        assert_eq!(check_product_id("42"), Ok(42));
        assert_eq!(check_product_id("-3"), Ok(-3));
        let errors = check_product_id("not-valid-url").unwrap_err();
        assert_eq!(errors, vec![FieldError::new("id", INVALID_ID)]);
        assert!(check_product_id("1.5").is_err());
        assert!(check_product_id("").is_err());
    }

    #[test]
    fn numeric_string_grammar() {
        for ok in ["0", "12", "+3", "-7", ".5", "1.25"] {
            assert!(is_numeric_str(ok), "{ok}");
        }
        for bad in ["", "+", "1.", "1e5", " 5", "abc", "1.2.3"] {
            assert!(!is_numeric_str(bad), "{bad}");
        }
    }
}
