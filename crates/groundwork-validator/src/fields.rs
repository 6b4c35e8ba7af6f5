use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::{Result, StringValidationOptions, validate_string};

/// Named string rules, validated in declaration order
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    fields: IndexMap<String, StringValidationOptions>,
}

impl FieldRules {
    /// Add a rule for a field
    ///
    /// An empty label in `options` is replaced by the field name.
    pub fn insert(&mut self, field: impl Into<String>, mut options: StringValidationOptions) {
        let field = field.into();
        if options.name.is_empty() {
            options.name.clone_from(&field);
        }
        self.fields.insert(field, options);
    }

    /// Rule for a field, if one is configured
    pub fn get(&self, field: &str) -> Option<&StringValidationOptions> {
        self.fields.get(field)
    }

    /// Iterate over field names and their rules
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StringValidationOptions)> {
        self.fields.iter().map(|(field, options)| (field.as_str(), options))
    }

    /// Number of configured fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are configured
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate the fields of a JSON object
    ///
    /// Fields missing from `input` are absent. A non-object input has no
    /// fields at all.
    ///
    /// # Errors
    ///
    /// Returns the first failure, in the order the rules were declared
    #[track_caller]
    pub fn validate(&self, input: &Value) -> Result<()> {
        for (field, options) in &self.fields {
            validate_string(options, input.get(field))?;
        }

        tracing::debug!(fields = self.fields.len(), "fields validated");
        Ok(())
    }
}

impl<'de> Deserialize<'de> for FieldRules {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = IndexMap::<String, StringValidationOptions>::deserialize(deserializer)?;

        let mut rules = Self::default();
        for (field, options) in raw {
            rules.insert(field, options);
        }

        Ok(rules)
    }
}
