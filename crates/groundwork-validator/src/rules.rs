use std::sync::OnceLock;

use groundwork_core::ServiceError;
use regex::Regex;

use crate::{Measure, Numeric, Result};

/// Return a validation error for the named field
#[track_caller]
pub(crate) fn fail<T>(field: &str, message: String) -> Result<T> {
    tracing::debug!(field, %message, "validation failed");
    Err(ServiceError::validation(message))
}

/// Require a value to be present
///
/// Returns the unwrapped value so callers continue with a non-optional one.
///
/// # Errors
///
/// Fails with `{name} may not be null or undefined` when the value is absent
#[track_caller]
pub fn not_null<T>(name: &str, value: Option<T>) -> Result<T> {
    match value {
        Some(value) => Ok(value),
        None => fail(name, format!("{name} may not be null or undefined")),
    }
}

/// Require a value to be present and non-empty
///
/// # Errors
///
/// Fails with `{name} may not be empty` when the value is absent or has no
/// length
#[track_caller]
pub fn not_empty<T: Measure>(name: &str, value: Option<T>) -> Result<T> {
    match value {
        Some(value) if value.measure() > 0 => Ok(value),
        _ => fail(name, format!("{name} may not be empty")),
    }
}

/// Require text to be present and contain something besides whitespace
///
/// # Errors
///
/// Fails with `{name} may not be blank` when the value is absent, empty or
/// whitespace only
#[track_caller]
pub fn not_blank<T: AsRef<str>>(name: &str, value: Option<T>) -> Result<T> {
    match value {
        Some(value) if !value.as_ref().trim().is_empty() => Ok(value),
        _ => fail(name, format!("{name} may not be blank")),
    }
}

/// Require present text to match a regular expression
///
/// # Errors
///
/// Fails with `{name} must match /{regex}/` when the text does not match
#[track_caller]
pub fn matches(name: &str, regex: &Regex, value: Option<&str>) -> Result<()> {
    match value {
        Some(text) if !regex.is_match(text) => fail(name, format!("{name} must match /{}/", regex.as_str())),
        _ => Ok(()),
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^[-!#$%&'*+/0-9=?A-Z^_`a-z{|}~]+(?:\.[-!#$%&'*+/0-9=?A-Z^_`a-z{|}~]+)*",
            r"@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
        ))
        .expect("valid email regex")
    })
}

/// Check an address against the RFC 5322 atom grammar and length limits
///
/// At most 254 characters overall and 64 before the `@`.
pub fn is_email_address(text: &str) -> bool {
    (1..=254).contains(&text.len())
        && text.find('@').is_some_and(|at| (1..=64).contains(&at))
        && email_regex().is_match(text)
}

/// Require present text to be an email address
///
/// # Errors
///
/// Fails with `{name} is not a valid email address`
#[track_caller]
pub fn is_email(name: &str, value: Option<&str>) -> Result<()> {
    match value {
        Some(text) if !is_email_address(text) => fail(name, format!("{name} is not a valid email address")),
        _ => Ok(()),
    }
}

/// Require a present value to be no longer than `length`
///
/// # Errors
///
/// Fails with `length of {name} may not exceed {length}`
#[track_caller]
pub fn max_length<T: Measure + ?Sized>(name: &str, length: usize, value: Option<&T>) -> Result<()> {
    match value {
        Some(value) if value.measure() > length => fail(name, format!("length of {name} may not exceed {length}")),
        _ => Ok(()),
    }
}

/// Require a present value to be at least `length` long
///
/// # Errors
///
/// Fails with `length of {name} may not be less than {length}`
#[track_caller]
pub fn min_length<T: Measure + ?Sized>(name: &str, length: usize, value: Option<&T>) -> Result<()> {
    match value {
        Some(value) if value.measure() < length => {
            fail(name, format!("length of {name} may not be less than {length}"))
        }
        _ => Ok(()),
    }
}

/// Require a present value to coerce to a number
///
/// # Errors
///
/// Fails with `{name} is not a number`
#[track_caller]
pub fn is_number<'a, N: Into<Numeric<'a>>>(name: &str, value: Option<N>) -> Result<()> {
    match value.map(Into::into) {
        Some(numeric) if numeric.coerce().is_none() => fail(name, format!("{name} is not a number")),
        _ => Ok(()),
    }
}

/// Text must be numeric before it can be compared against a bound
#[track_caller]
fn numeric_value(name: &str, value: Numeric<'_>) -> Result<f64> {
    if let Numeric::Text(_) = value {
        is_number(name, Some(value))?;
    }

    Ok(value.as_f64())
}

/// Require a present value to be at least `min`
///
/// # Errors
///
/// Fails with `{name} is not a number` for non-numeric text and with
/// `{name} may not be less than {min}` when below the bound
#[track_caller]
pub fn min_value<'a, N: Into<Numeric<'a>>>(name: &str, min: f64, value: Option<N>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };

    if numeric_value(name, value.into())? < min {
        return fail(name, format!("{name} may not be less than {min}"));
    }

    Ok(())
}

/// Require a present value to be at most `max`
///
/// # Errors
///
/// Fails with `{name} is not a number` for non-numeric text and with
/// `{name} may not be greater than {max}` when above the bound
#[track_caller]
pub fn max_value<'a, N: Into<Numeric<'a>>>(name: &str, max: f64, value: Option<N>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };

    if numeric_value(name, value.into())? > max {
        return fail(name, format!("{name} may not be greater than {max}"));
    }

    Ok(())
}

/// Require a present value to lie within `[min, max]`
///
/// # Errors
///
/// Fails with `{name} is not a number` for non-numeric text and with
/// `{name} must be between {min} and {max}` when outside the range
#[track_caller]
pub fn between_values<'a, N: Into<Numeric<'a>>>(name: &str, min: f64, max: f64, value: Option<N>) -> Result<()> {
    let Some(value) = value else {
        return Ok(());
    };

    let number = numeric_value(name, value.into())?;
    if number < min || number > max {
        return fail(name, format!("{name} must be between {min} and {max}"));
    }

    Ok(())
}
