use crate::core::address::{Address, Family};
use crate::core::config::SchemaTable;
use crate::encoders::algorithms::errors::{DecodeError, FormatError};
use crate::encoders::algorithms::{factor, poem, word};
use crate::features::detection;

/// Address ↔ haiku converter bound to one vocabulary.
///
/// # Example
///
/// ```
/// use hipku::{Codec, SchemaTable};
///
/// let codec = Codec::new(SchemaTable::builtin());
/// let haiku = codec.encode("10.0.0.1").unwrap();
/// assert_eq!(codec.decode(&haiku).unwrap(), "10.0.0.1");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Codec<'a> {
    table: &'a SchemaTable,
}

impl<'a> Codec<'a> {
    pub fn new(table: &'a SchemaTable) -> Self {
        Codec { table }
    }

    /// Codec over the built-in Indonesian vocabulary.
    pub fn builtin() -> Codec<'static> {
        Codec::new(SchemaTable::builtin())
    }

    pub fn table(&self) -> &'a SchemaTable {
        self.table
    }

    /// Parses `address` and encodes it as a haiku.
    ///
    /// # Errors
    ///
    /// Returns `FormatError` if the text is not a recognizable address.
    pub fn encode(&self, address: &str) -> Result<String, FormatError> {
        let address: Address = address.parse()?;
        Ok(self.encode_address(&address))
    }

    pub fn encode_address(&self, address: &Address) -> String {
        let family = self.table.family(address.family());
        let factors = factor::factorize(&address.components(), address.family().divisor());
        let words = word::encode(&factors, family);
        poem::render(family.schema(), &words)
    }

    /// Decodes a haiku, guessing its family from its words.
    pub fn decode(&self, haiku: &str) -> Result<String, DecodeError> {
        self.decode_address(haiku, None).map(|a| a.to_string())
    }

    /// Decodes a haiku known to encode an address of `family`.
    pub fn decode_as(&self, haiku: &str, family: Family) -> Result<String, DecodeError> {
        self.decode_address(haiku, Some(family)).map(|a| a.to_string())
    }

    /// Decodes a haiku to an `Address`, detecting the family unless given.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::EmptyInput` if the haiku has no words, or
    /// `DecodeError::MissingWord` if a required word cannot be found.
    pub fn decode_address(
        &self,
        haiku: &str,
        family: Option<Family>,
    ) -> Result<Address, DecodeError> {
        let words = poem::tokenize(haiku);
        if words.is_empty() {
            return Err(DecodeError::EmptyInput);
        }
        let tokens: Vec<&str> = words.iter().map(String::as_str).collect();

        let family = family.unwrap_or_else(|| detection::detect_family(&tokens, self.table));
        let factors = word::decode(&tokens, self.table.family(family))?;
        let components = factor::recombine(&factors, family.divisor());
        Address::from_components(family, &components)
    }

    /// Guesses the family of a haiku from its words.
    pub fn detect_family(&self, haiku: &str) -> Family {
        detection::detect_family(&poem::tokenize(haiku), self.table)
    }
}
