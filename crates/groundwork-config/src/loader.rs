use std::path::Path;
use std::str::FromStr;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails, or
    /// validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config: Self = raw.parse()?;

        tracing::debug!(
            path = %path.display(),
            fields = config.fields.len(),
            "configuration loaded"
        );

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if a field's length bounds are inverted
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_field_rules()?;
        Ok(())
    }

    fn validate_field_rules(&self) -> anyhow::Result<()> {
        for (field, options) in self.fields.iter() {
            if let (Some(min), Some(max)) = (options.min_length, options.max_length)
                && min > max
            {
                anyhow::bail!("field '{field}' has min_length {min} greater than max_length {max}");
            }

            if options.name.trim().is_empty() {
                anyhow::bail!("field '{field}' has a blank name");
            }
        }

        Ok(())
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }
}
