//! Runtime validators
//!
//! Every validator either returns `Ok` or a `ValidationError` (a
//! [`ServiceError`] of kind [`ErrorKind::Validation`](groundwork_core::ErrorKind))
//! with a fixed message per rule. Absent values skip every rule except
//! [`not_null`], [`not_empty`] and [`not_blank`].

#![allow(clippy::must_use_candidate)]

mod fields;
mod number;
mod pattern;
mod rules;
mod string;

use groundwork_core::ServiceError;

pub use fields::FieldRules;
pub use number::{Numeric, parse_number};
pub use pattern::Pattern;
pub use rules::{
    between_values, is_email, is_email_address, is_number, matches, max_length, max_value, min_length, min_value,
    not_blank, not_empty, not_null,
};
pub use string::{StringValidationOptions, validate_string};

/// Result of a validator
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Length of a value as seen by the length rules
///
/// Text is measured in characters, sequences in elements.
pub trait Measure {
    /// Length of the value
    fn measure(&self) -> usize;
}

impl Measure for str {
    fn measure(&self) -> usize {
        self.chars().count()
    }
}

impl Measure for String {
    fn measure(&self) -> usize {
        self.as_str().measure()
    }
}

impl<T> Measure for [T] {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T> Measure for Vec<T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

impl<T: Measure + ?Sized> Measure for &T {
    fn measure(&self) -> usize {
        (**self).measure()
    }
}
