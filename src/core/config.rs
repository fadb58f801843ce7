use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::core::address::Family;
use crate::core::schema::{Schema, Token};
use crate::core::word_dictionary::WordDictionary;
use crate::encoders::algorithms::errors::{DictionaryNotFoundError, find_closest_dictionary};
use crate::encoders::algorithms::poem;
use crate::wordlists;

/// Configuration for a single dictionary loaded from TOML.
///
/// Exactly one of `wordlist` (a built-in list name) or `words` must be set.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct DictionaryConfig {
    #[serde(default)]
    pub wordlist: Option<String>,
    #[serde(default)]
    pub words: Vec<String>,
}

/// Word order and poem template for one address family.
#[derive(Debug, Deserialize, Clone)]
pub struct FamilyConfig {
    /// Dictionary name per factor position
    pub key: Vec<String>,
    /// Poem template text (see `core::schema`)
    pub schema: String,
}

/// Haiku vocabulary configuration as written in TOML.
#[derive(Debug, Deserialize, Clone)]
pub struct HaikuConfig {
    pub dictionaries: HashMap<String, DictionaryConfig>,
    pub ipv4: FamilyConfig,
    pub ipv6: FamilyConfig,
}

impl HaikuConfig {
    /// Parses a haiku configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in configuration bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../haiku.toml");
        Ok(Self::from_toml(content)?)
    }

}

/// Dictionaries and schema resolved for one family.
#[derive(Debug, Clone)]
pub struct FamilyTable {
    family: Family,
    key: Vec<Arc<WordDictionary>>,
    schema: Schema,
}

impl FamilyTable {
    pub fn family(&self) -> Family {
        self.family
    }

    /// Dictionary for each factor position, in order.
    pub fn key(&self) -> &[Arc<WordDictionary>] {
        &self.key
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

/// Immutable (family, slot) → dictionary table plus poem schemas.
///
/// Built and validated once; shared freely between threads.
#[derive(Debug, Clone)]
pub struct SchemaTable {
    v4: FamilyTable,
    v6: FamilyTable,
}

static BUILTIN: LazyLock<SchemaTable> = LazyLock::new(|| {
    HaikuConfig::load_default()
        .and_then(|config| SchemaTable::from_config(&config))
        .expect("built-in haiku configuration should be valid")
});

impl SchemaTable {
    /// The built-in Indonesian vocabulary.
    pub fn builtin() -> &'static SchemaTable {
        &BUILTIN
    }

    /// Parses and validates a table from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_config(&HaikuConfig::from_toml(content)?)
    }

    /// Resolves dictionaries and checks every table invariant.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A key names an undefined dictionary
    /// - A dictionary is neither a known built-in list nor an inline word list
    /// - A key does not have two positions per address group
    /// - A schema's slot count differs from its key length
    /// - A key dictionary's size differs from the family's divisor
    /// - A schema literal is a word of one of the family's key dictionaries
    pub fn from_config(config: &HaikuConfig) -> Result<Self, Box<dyn std::error::Error>> {
        let mut resolved: HashMap<&str, Arc<WordDictionary>> = HashMap::new();
        for (name, dict_config) in &config.dictionaries {
            resolved.insert(name.as_str(), Arc::new(build_dictionary(name, dict_config)?));
        }

        Ok(SchemaTable {
            v4: build_family(Family::V4, &config.ipv4, &resolved)?,
            v6: build_family(Family::V6, &config.ipv6, &resolved)?,
        })
    }

    pub fn family(&self, family: Family) -> &FamilyTable {
        match family {
            Family::V4 => &self.v4,
            Family::V6 => &self.v6,
        }
    }
}

fn build_dictionary(
    name: &str,
    config: &DictionaryConfig,
) -> Result<WordDictionary, Box<dyn std::error::Error>> {
    let builder = WordDictionary::builder().name(name);

    let builder = match (&config.wordlist, config.words.is_empty()) {
        (Some(list), true) => {
            let words = wordlists::get_embedded_wordlist(list).ok_or_else(|| {
                let available: Vec<String> = wordlists::EMBEDDED_NAMES
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                match find_closest_dictionary(list, &available) {
                    Some(suggestion) => format!(
                        "Dictionary '{}': unknown wordlist '{}' (did you mean '{}'?)",
                        name, list, suggestion
                    ),
                    None => format!("Dictionary '{}': unknown wordlist '{}'", name, list),
                }
            })?;
            builder.words_from_str(words)
        }
        (None, false) => builder.words(config.words.iter().cloned()),
        (Some(_), false) => {
            return Err(format!(
                "Dictionary '{}' sets both 'wordlist' and 'words'",
                name
            )
            .into());
        }
        (None, true) => {
            return Err(format!("Dictionary '{}' needs 'wordlist' or 'words'", name).into());
        }
    };

    Ok(builder.build()?)
}

fn build_family(
    family: Family,
    config: &FamilyConfig,
    resolved: &HashMap<&str, Arc<WordDictionary>>,
) -> Result<FamilyTable, Box<dyn std::error::Error>> {
    if config.key.len() != family.factor_count() {
        return Err(format!(
            "{} key has {} positions, expected {}",
            family,
            config.key.len(),
            family.factor_count()
        )
        .into());
    }

    let mut key = Vec::with_capacity(config.key.len());
    for name in &config.key {
        let dict = resolved.get(name.as_str()).ok_or_else(|| {
            let available: Vec<String> = resolved.keys().map(|k| k.to_string()).collect();
            DictionaryNotFoundError::new(name, find_closest_dictionary(name, &available))
        })?;

        if dict.base() != family.divisor() as usize {
            return Err(format!(
                "{} dictionary '{}' has {} words, expected {}",
                family,
                name,
                dict.base(),
                family.divisor()
            )
            .into());
        }

        key.push(Arc::clone(dict));
    }

    let schema = Schema::parse(&config.schema)?;
    if schema.slot_count() != key.len() {
        return Err(format!(
            "{} schema has {} slots but the key has {} positions",
            family,
            schema.slot_count(),
            key.len()
        )
        .into());
    }

    for token in schema.tokens() {
        let Token::Literal(text) = token else {
            continue;
        };
        for word in poem::tokenize(text) {
            if let Some(dict) = key.iter().find(|dict| dict.uses_word(&word)) {
                return Err(format!(
                    "{} schema literal '{}' is a word of dictionary '{}'",
                    family,
                    text,
                    dict.name()
                )
                .into());
            }
        }
    }

    Ok(FamilyTable {
        family,
        key,
        schema,
    })
}
