//! Configuration options payload decoding
//!
//! The configuration page closes with a percent-encoded JSON string. This
//! module decodes that payload into [`ConfigOptions`], a string-keyed map of
//! arbitrary JSON values. Decoding is strict: a malformed percent sequence,
//! a non-JSON body, or a body whose top level is not an object all fail with
//! a typed [`OptionsError`] rather than being papered over.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Error raised while decoding the options payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum OptionsError {
    /// The payload is not valid percent-encoding.
    #[error("Invalid percent-encoding at byte {position}: {reason}")]
    PercentDecode {
        /// Byte offset of the offending `%` in the raw payload.
        position: usize,
        /// What made the sequence invalid.
        reason: String,
    },

    /// The decoded payload is not valid JSON.
    #[error("Invalid options JSON: {reason}")]
    InvalidJson {
        /// Parser diagnostic for the failure.
        reason: String,
    },

    /// The decoded payload is valid JSON but not an object.
    #[error("Options payload is not a JSON object")]
    NotAnObject,
}

/// User-configured settings returned by the configuration page.
///
/// An unordered mapping from string keys to arbitrary JSON values. Options
/// are transient: they are decoded, logged, and handed to the caller; nothing
/// in this workspace persists them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigOptions(Map<String, Value>);

impl ConfigOptions {
    /// Look up a single option value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of options in the payload.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the payload carried no options.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over key/value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for ConfigOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl fmt::Display for ConfigOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.0.clone()))
    }
}

/// Decode a `webviewclosed` payload into [`ConfigOptions`].
///
/// The payload is percent-decoded, parsed as JSON, and validated to be an
/// object. Any failure along the way is an [`OptionsError`]; callers do not
/// catch it locally.
pub fn parse_options(response: &str) -> Result<ConfigOptions, OptionsError> {
    let decoded = percent_decode(response)?;
    let value: Value = serde_json::from_str(&decoded).map_err(|e| OptionsError::InvalidJson {
        reason: e.to_string(),
    })?;
    match value {
        Value::Object(map) => Ok(ConfigOptions(map)),
        _ => Err(OptionsError::NotAnObject),
    }
}

fn percent_decode(raw: &str) -> Result<String, OptionsError> {
    fn is_hex(b: u8) -> bool {
        matches!(b, b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F')
    }

    fn hex_value(b: u8) -> u8 {
        match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => b - b'A' + 10,
        }
    }

    let bytes = raw.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                if i + 2 >= bytes.len() {
                    return Err(OptionsError::PercentDecode {
                        position: i,
                        reason: "truncated escape sequence".to_string(),
                    });
                }
                let (hi, lo) = (bytes[i + 1], bytes[i + 2]);
                if !is_hex(hi) || !is_hex(lo) {
                    return Err(OptionsError::PercentDecode {
                        position: i,
                        reason: format!(
                            "expected two hex digits, found '{}{}'",
                            bytes[i + 1] as char,
                            bytes[i + 2] as char
                        ),
                    });
                }
                out.push((hex_value(hi) << 4) | hex_value(lo));
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(out).map_err(|e| OptionsError::PercentDecode {
        position: e.utf8_error().valid_up_to(),
        reason: format!("decoded bytes are not valid UTF-8: {}", e.utf8_error()),
    })
}
