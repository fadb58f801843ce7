//! Poem layout: filling a schema with words, and flattening a poem back
//! into plain lowercase words.

use crate::core::schema::{Schema, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Word(String),
    Space,
    Period,
    Newline,
}

impl Piece {
    fn as_str(&self) -> &str {
        match self {
            Piece::Word(word) => word,
            Piece::Space => " ",
            Piece::Period => ".",
            Piece::Newline => "\n",
        }
    }
}

/// Fills the schema's slots with `words`, in order, and lays out the poem.
///
/// Adjacent tokens are separated by one space, except before a period or
/// newline and after a newline. The first word is capitalized, as is the
/// word two pieces after each period (past the newline or space that
/// follows it).
pub fn render(schema: &Schema, words: &[&str]) -> String {
    debug_assert_eq!(schema.slot_count(), words.len());

    let mut words = words.iter();
    let mut pieces: Vec<Piece> = Vec::with_capacity(schema.tokens().len() * 2);

    for token in schema.tokens() {
        let piece = match token {
            Token::Slot => Piece::Word(words.next().map(|w| w.to_string()).unwrap_or_default()),
            Token::Literal(word) => Piece::Word(word.clone()),
            Token::Period => Piece::Period,
            Token::Newline => Piece::Newline,
        };

        let needs_space = match (pieces.last(), &piece) {
            (None, _) => false,
            (Some(Piece::Newline), _) => false,
            (_, Piece::Period | Piece::Newline) => false,
            _ => true,
        };
        if needs_space {
            pieces.push(Piece::Space);
        }
        pieces.push(piece);
    }

    if let Some(Piece::Word(first)) = pieces.first_mut() {
        *first = capitalize(first);
    }
    for i in 0..pieces.len() {
        if pieces[i] == Piece::Period {
            if let Some(Piece::Word(word)) = pieces.get_mut(i + 2) {
                *word = capitalize(word);
            }
        }
    }

    pieces.iter().map(Piece::as_str).collect()
}

/// Upper-cases the first character, leaving the rest unchanged.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Normalizes a poem into its words.
///
/// Lower-cases everything, turns newlines into spaces, drops every character
/// other than `a-z`, space and `-`, then splits on spaces.
pub fn tokenize(poem: &str) -> Vec<String> {
    let cleaned: String = poem
        .to_lowercase()
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .filter(|c| c.is_ascii_lowercase() || *c == ' ' || *c == '-')
        .collect();

    cleaned
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_spacing_and_capitals() {
        let schema = Schema::parse("Si * *\n* di * * .\n* * * .\n").unwrap();
        let words = ["gemuk", "coklat", "kera", "tua", "lembah", "jati", "tua", "tertiup"];

        assert_eq!(
            render(&schema, &words),
            "Si gemuk coklat\nkera di tua lembah.\nJati tua tertiup.\n"
        );
    }

    #[test]
    fn test_render_capitalizes_first_slot() {
        let schema = Schema::parse("* * .\n* .\n").unwrap();
        assert_eq!(render(&schema, &["semut", "kera", "duri"]), "Semut kera.\nDuri.\n");
    }

    #[test]
    fn test_render_period_mid_line() {
        // The word after ". " is also two pieces on
        let schema = Schema::parse("* . *\n").unwrap();
        assert_eq!(render(&schema, &["satu", "dua"]), "Satu. Dua\n");
    }

    #[test]
    fn test_render_multi_word_entry() {
        let schema = Schema::parse("* *\n").unwrap();
        assert_eq!(render(&schema, &["abu abu", "kupu"]), "Abu abu kupu\n");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("masing-masing"), "Masing-masing");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("Si"), "Si");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Si gemuk coklat\nkera tua lembah.\nJati tua tertiup.\n"),
            vec!["si", "gemuk", "coklat", "kera", "tua", "lembah", "jati", "tua", "tertiup"]
        );
    }

    #[test]
    fn test_tokenize_strips_noise() {
        assert_eq!(
            tokenize("  Abu-abu,  KUPU!!\n\n42 café  "),
            vec!["abu-abu", "kupu", "caf"]
        );
        assert!(tokenize(" .\n, ").is_empty());
    }
}
