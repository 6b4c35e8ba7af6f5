use groundwork_codec::Alphabet;
use serde::Deserialize;

/// Base64 codec configuration
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
    /// Alphabet used when none is requested explicitly
    #[serde(default)]
    pub alphabet: Alphabet,
}
