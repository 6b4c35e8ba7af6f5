//! Programmatic configuration builder for integration tests

use groundwork_codec::Alphabet;
use groundwork_config::Config;
use groundwork_validator::{Pattern, StringValidationOptions};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

#[allow(dead_code)]
impl ConfigBuilder {
    /// Create a new builder with no field rules
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Add a required username field of 3 to 16 word characters
    pub fn with_username(mut self) -> Self {
        let options = StringValidationOptions {
            required: true,
            min_length: Some(3),
            max_length: Some(16),
            regex: Some(Pattern::new(r"^\w+$").unwrap()),
            ..StringValidationOptions::default()
        };
        self.config.fields.insert("username", options);
        self
    }

    /// Add an optional email field
    pub fn with_email(mut self) -> Self {
        let options = StringValidationOptions {
            is_email: true,
            ..StringValidationOptions::new("Email")
        };
        self.config.fields.insert("email", options);
        self
    }

    /// Add an optional numeric age field
    pub fn with_age(mut self) -> Self {
        let options = StringValidationOptions {
            not_blank: true,
            is_number: true,
            ..StringValidationOptions::new("Age")
        };
        self.config.fields.insert("age", options);
        self
    }

    /// Use a different default alphabet
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.config.codec.alphabet = alphabet;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}
