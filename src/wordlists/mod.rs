//! Built-in word lists for haiku encoding.
//!
//! IPv4 lists hold 16 words each, IPv6 lists 256. All words are Indonesian.

use crate::core::word_dictionary::WordDictionary;

pub const ANIMAL_ADJECTIVES: &str = include_str!("animal-adjectives.txt");
pub const ANIMAL_COLORS: &str = include_str!("animal-colors.txt");
pub const ANIMAL_NOUNS: &str = include_str!("animal-nouns.txt");
pub const NATURE_ADJECTIVES: &str = include_str!("nature-adjectives.txt");
pub const NATURE_NOUNS: &str = include_str!("nature-nouns.txt");
pub const PLANT_NOUNS: &str = include_str!("plant-nouns.txt");
pub const PLANT_VERBS: &str = include_str!("plant-verbs.txt");

pub const ADJECTIVES: &str = include_str!("adjectives.txt");
pub const NOUNS: &str = include_str!("nouns.txt");
pub const VERBS: &str = include_str!("verbs.txt");

/// Names accepted by `wordlist = "..."` in a haiku configuration.
pub const EMBEDDED_NAMES: &[&str] = &[
    "animal-adjectives",
    "animal-colors",
    "animal-nouns",
    "nature-adjectives",
    "nature-nouns",
    "plant-nouns",
    "plant-verbs",
    "adjectives",
    "nouns",
    "verbs",
];

/// Looks up a built-in word list by name.
pub fn get_embedded_wordlist(name: &str) -> Option<&'static str> {
    match name {
        "animal-adjectives" => Some(ANIMAL_ADJECTIVES),
        "animal-colors" => Some(ANIMAL_COLORS),
        "animal-nouns" => Some(ANIMAL_NOUNS),
        "nature-adjectives" => Some(NATURE_ADJECTIVES),
        "nature-nouns" => Some(NATURE_NOUNS),
        "plant-nouns" => Some(PLANT_NOUNS),
        "plant-verbs" => Some(PLANT_VERBS),
        "adjectives" => Some(ADJECTIVES),
        "nouns" => Some(NOUNS),
        "verbs" => Some(VERBS),
        _ => None,
    }
}

/// Creates a WordDictionary from a built-in word list.
///
/// # Example
///
/// ```
/// use hipku::wordlists::embedded_dictionary;
///
/// let dict = embedded_dictionary("plant-nouns").unwrap();
/// assert_eq!(dict.base(), 16);
/// assert_eq!(dict.encode_word(0), Some("jati"));
/// ```
pub fn embedded_dictionary(name: &str) -> Option<WordDictionary> {
    let words = get_embedded_wordlist(name)?;
    Some(
        WordDictionary::builder()
            .name(name)
            .words_from_str(words)
            .build()
            .expect("built-in word lists should be valid"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_embedded_list_builds() {
        for name in EMBEDDED_NAMES {
            let dict = embedded_dictionary(name).unwrap();
            assert_eq!(dict.name(), *name);
        }
    }

    #[test]
    fn test_ipv4_list_sizes() {
        for name in &EMBEDDED_NAMES[..7] {
            assert_eq!(embedded_dictionary(name).unwrap().base(), 16, "{}", name);
        }
    }

    #[test]
    fn test_ipv6_list_sizes() {
        for name in ["adjectives", "nouns", "verbs"] {
            assert_eq!(embedded_dictionary(name).unwrap().base(), 256, "{}", name);
        }
    }

    #[test]
    fn test_first_and_last_words() {
        let adjectives = embedded_dictionary("adjectives").unwrap();
        assert_eq!(adjectives.encode_word(0), Some("bongsor"));
        assert_eq!(adjectives.encode_word(255), Some("muda"));

        let verbs = embedded_dictionary("verbs").unwrap();
        assert_eq!(verbs.encode_word(0), Some("menyumbang"));
        assert_eq!(verbs.encode_word(255), Some("memayungi"));
    }

    #[test]
    fn test_unknown_list() {
        assert!(get_embedded_wordlist("bip39").is_none());
        assert!(embedded_dictionary("bip39").is_none());
    }
}
