//! Encode IP addresses as haiku, and haiku back into IP addresses.
//!
//! Every IPv4 or IPv6 address maps to exactly one short Indonesian poem.
//! Each address group is split into two factors (base 16 for IPv4, base 256
//! for IPv6); each factor selects a word from a fixed dictionary, and the
//! words are laid into a fixed poem template.
//!
//! ```
//! let haiku = hipku::encode("192.168.0.1").unwrap();
//! assert!(haiku.starts_with("Si "));
//! assert_eq!(hipku::decode(&haiku).unwrap(), "192.168.0.1");
//!
//! // IPv6 decodes to the fully expanded form
//! let haiku = hipku::encode("fe80::1").unwrap();
//! assert_eq!(
//!     hipku::decode(&haiku).unwrap(),
//!     "fe80:0000:0000:0000:0000:0000:0000:0001"
//! );
//! ```

mod core;
mod encoders;
mod features;

pub mod prelude;
pub mod wordlists;

pub use crate::core::address::{Address, Family};
pub use crate::core::config::{
    DictionaryConfig, FamilyConfig, FamilyTable, HaikuConfig, SchemaTable,
};
pub use crate::core::schema::{Schema, Token};
pub use crate::core::word_dictionary::{WordDictionary, WordDictionaryBuilder, WordMatch};
pub use encoders::Codec;
pub use encoders::algorithms::{DecodeError, DictionaryNotFoundError, FormatError};

/// Encodes an address as a haiku using the built-in vocabulary.
///
/// # Errors
///
/// Returns `FormatError` if the input contains neither ':' nor '.', or does
/// not have the right number of valid groups for its family.
pub fn encode(address: &str) -> Result<String, FormatError> {
    Codec::builtin().encode(address)
}

/// Encodes an already parsed address.
pub fn encode_address(address: &Address) -> String {
    Codec::builtin().encode_address(address)
}

/// Decodes a haiku back into an address string.
///
/// The family is guessed with [`detect_family`]. IPv6 addresses come back
/// fully expanded.
///
/// # Errors
///
/// Returns `DecodeError` if a required dictionary word cannot be found
/// before the poem runs out.
pub fn decode(haiku: &str) -> Result<String, DecodeError> {
    Codec::builtin().decode(haiku)
}

/// Decodes a haiku whose family is already known.
pub fn decode_as(haiku: &str, family: Family) -> Result<String, DecodeError> {
    Codec::builtin().decode_as(haiku, family)
}

/// Guesses whether a haiku encodes an IPv4 or an IPv6 address.
pub fn detect_family(haiku: &str) -> Family {
    Codec::builtin().detect_family(haiku)
}

#[cfg(test)]
mod tests;
