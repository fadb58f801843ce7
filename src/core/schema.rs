//! Poem templates.
//!
//! A template is written one poem line per text line. Tokens are separated
//! by whitespace: `*` is a word slot, `.` ends a sentence, anything else is a
//! literal word copied into the poem. Every line end becomes a newline.
//!
//! ```text
//! Si * *
//! * * * .
//! * * * .
//! ```

/// One element of a poem template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Filled by the next encoded word
    Slot,
    /// Connective word emitted verbatim
    Literal(String),
    Period,
    Newline,
}

/// Ordered poem template for one address family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    tokens: Vec<Token>,
}

impl Schema {
    /// Parses template text into tokens.
    ///
    /// Blank lines and surrounding whitespace are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the template has no slots.
    pub fn parse(template: &str) -> Result<Self, String> {
        let tokens: Vec<Token> = template
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .flat_map(|line| {
                line.split_whitespace()
                    .map(|raw| match raw {
                        "*" => Token::Slot,
                        "." => Token::Period,
                        word => Token::Literal(word.to_string()),
                    })
                    .chain(std::iter::once(Token::Newline))
            })
            .collect();

        let schema = Schema { tokens };
        if schema.slot_count() == 0 {
            return Err("Schema must contain at least one '*' slot".to_string());
        }
        Ok(schema)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn slot_count(&self) -> usize {
        self.tokens.iter().filter(|t| **t == Token::Slot).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template() {
        let schema = Schema::parse("Si * *\n* .\n").unwrap();

        assert_eq!(
            schema.tokens(),
            &[
                Token::Literal("Si".to_string()),
                Token::Slot,
                Token::Slot,
                Token::Newline,
                Token::Slot,
                Token::Period,
                Token::Newline,
            ]
        );
        assert_eq!(schema.slot_count(), 3);
    }

    #[test]
    fn test_parse_ignores_blank_lines_and_indent() {
        let schema = Schema::parse("\n    * *\n\n    * .\n").unwrap();
        assert_eq!(schema.slot_count(), 3);
        assert_eq!(schema.tokens().len(), 6);
    }

    #[test]
    fn test_parse_requires_slot() {
        assert!(Schema::parse("Si .\n").is_err());
        assert!(Schema::parse("").is_err());
    }
}
