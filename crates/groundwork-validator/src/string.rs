use serde::Deserialize;
use serde_json::Value;

use crate::rules::fail;
use crate::{Measure, Pattern, Result, is_email, is_number, not_blank, not_empty, not_null};

/// Rules applied by [`validate_string`]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StringValidationOptions {
    /// Field label used in messages
    #[serde(default)]
    pub name: String,
    /// Whether the value must be present
    #[serde(default)]
    pub required: bool,
    /// Minimum length in characters
    #[serde(default)]
    pub min_length: Option<usize>,
    /// Maximum length in characters
    #[serde(default)]
    pub max_length: Option<usize>,
    /// Pattern the value must match
    #[serde(default)]
    pub regex: Option<Pattern>,
    /// Reject whitespace-only values
    #[serde(default)]
    pub not_blank: bool,
    /// Reject empty values
    #[serde(default)]
    pub not_empty: bool,
    /// Require an email address
    #[serde(default)]
    pub is_email: bool,
    /// Require numeric text
    #[serde(default)]
    pub is_number: bool,
}

impl StringValidationOptions {
    /// Options for an optional field with no constraints
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Validate an untyped value against string rules
///
/// JSON `null` counts as absent. Checks run in a fixed order and the first
/// failure is returned: presence, type, minimum length, maximum length,
/// pattern, blankness, emptiness, email, number.
///
/// # Errors
///
/// Returns a validation error describing the first violated rule
#[track_caller]
pub fn validate_string(options: &StringValidationOptions, value: Option<&Value>) -> Result<()> {
    let name = options.name.as_str();
    let value = value.filter(|value| !value.is_null());

    if options.required {
        not_null(name, value)?;
    }

    let Some(value) = value else {
        return Ok(());
    };

    let Some(text) = value.as_str() else {
        return fail(name, format!("{name} must be a string"));
    };

    if let Some(min) = options.min_length
        && text.measure() < min
    {
        return fail(name, format!("{name} must be at least {min} characters"));
    }

    if let Some(max) = options.max_length
        && text.measure() > max
    {
        return fail(name, format!("{name} must be at most {max} characters"));
    }

    if let Some(Pattern(regex)) = &options.regex
        && !regex.is_match(text)
    {
        return fail(name, format!("{name} must match /{}/", regex.as_str()));
    }

    if options.not_blank {
        not_blank(name, Some(text))?;
    }

    if options.not_empty {
        not_empty(name, Some(text))?;
    }

    if options.is_email {
        is_email(name, Some(text))?;
    }

    if options.is_number {
        is_number(name, Some(text))?;
    }

    Ok(())
}
