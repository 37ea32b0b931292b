//! Field rules that the `validator` derive does not cover directly.

use rust_decimal::Decimal;
use std::borrow::Cow;
use validator::{ValidateEmail, ValidationError};

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Strict `YYYY-MM-DD` shape. Calendar validity is not checked.
pub fn iso_date_shape(value: &str) -> Result<(), ValidationError> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if shaped {
        Ok(())
    } else {
        Err(rule("date_format", "Invalid date format (YYYY-MM-DD)"))
    }
}

pub fn ubigeo_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.chars().count() == 6 {
        Ok(())
    } else {
        Err(rule("ubigeo", "Invalid ubigeo"))
    }
}

pub fn email_or_empty(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.validate_email() {
        Ok(())
    } else {
        Err(rule("email", "Invalid email"))
    }
}

pub fn quantity_at_least_one(value: &Decimal) -> Result<(), ValidationError> {
    if *value >= Decimal::ONE {
        Ok(())
    } else {
        Err(rule("cantidad", "Quantity must be at least 1"))
    }
}

pub fn unit_value_at_least_one_cent(value: &Decimal) -> Result<(), ValidationError> {
    if *value >= Decimal::new(1, 2) {
        Ok(())
    } else {
        Err(rule("mto_valor_unitario", "Unit value is required"))
    }
}

pub fn igv_percentage(value: &Decimal) -> Result<(), ValidationError> {
    if *value >= Decimal::ZERO && *value <= Decimal::from(18) {
        Ok(())
    } else {
        Err(rule("porcentaje_igv", "IGV percentage must be between 0 and 18"))
    }
}
