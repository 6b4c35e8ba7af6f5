use regex::Regex;
use serde::Deserialize;

/// Compiled regex used by string rules
#[derive(Debug, Clone)]
pub struct Pattern(pub Regex);

impl Pattern {
    /// Compile a pattern
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not a valid regex
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self(regex)
    }
}

impl AsRef<Regex> for Pattern {
    fn as_ref(&self) -> &Regex {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(&s).map_err(|e| serde::de::Error::custom(format!("invalid pattern: {e}")))
    }
}
