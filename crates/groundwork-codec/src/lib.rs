//! Base64 encoding with selectable alphabets
//!
//! All alphabets share the same bit packing and differ only in the two
//! substitution characters and in padding.

#![allow(clippy::must_use_candidate)]

use base64::Engine;
use base64::alphabet;
use base64::engine::{GeneralPurpose, general_purpose};
use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};

const YUI_ALPHABET: alphabet::Alphabet =
    match alphabet::Alphabet::new("ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789._") {
        Ok(alphabet) => alphabet,
        Err(_) => panic!("invalid YUI alphabet"),
    };

const YUI: GeneralPurpose = GeneralPurpose::new(&YUI_ALPHABET, general_purpose::PAD);

/// Padding marker used by the YUI variant in place of `=`
const YUI_PAD: char = '-';

/// Base64 alphabet variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Alphabet {
    /// RFC 4648 section 4: `+`, `/`, `=` padding
    #[default]
    Standard,
    /// RFC 4648 section 5: `-`, `_`, no padding
    Url,
    /// YUI library variant: `.`, `_`, `-` padding
    Yui,
}

impl Alphabet {
    /// Encode bytes with this alphabet
    pub fn encode(self, input: impl AsRef<[u8]>) -> String {
        match self {
            Self::Standard => general_purpose::STANDARD.encode(input),
            Self::Url => general_purpose::URL_SAFE_NO_PAD.encode(input),
            Self::Yui => {
                let mut encoded = YUI.encode(input);
                let padding = encoded.bytes().rev().take_while(|byte| *byte == b'=').count();
                encoded.truncate(encoded.len() - padding);
                encoded.extend(std::iter::repeat_n(YUI_PAD, padding));
                encoded
            }
        }
    }
}

/// Encode the UTF-8 bytes of `text`
pub fn encode_str(text: &str, alphabet: Alphabet) -> String {
    alphabet.encode(text)
}
