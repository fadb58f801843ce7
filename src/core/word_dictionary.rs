use std::collections::HashMap;

/// An ordered word list used to encode one factor of an address group.
///
/// The index of an entry is the factor value it encodes. Entries may be
/// multi-word phrases separated by single spaces; the decoder matches them
/// against a window of consecutive poem words.
///
/// # Example
///
/// ```
/// use hipku::WordDictionary;
///
/// let dict = WordDictionary::builder()
///     .name("colors")
///     .words(vec!["hitam", "biru", "abu abu", "merah"])
///     .build()
///     .unwrap();
///
/// assert_eq!(dict.base(), 4);
/// assert_eq!(dict.encode_word(2), Some("abu abu"));
/// assert_eq!(dict.decode_word("biru"), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct WordDictionary {
    name: String,
    words: Vec<String>,
    // Number of space-separated words in each entry
    spans: Vec<usize>,
    word_to_index: HashMap<String, usize>,
}

/// Outcome of matching a dictionary at one position of a word sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordMatch {
    /// Entry `index` matched, consuming `span` words
    Matched { index: usize, span: usize },
    NotFound,
}

impl WordDictionary {
    /// Creates a new WordDictionaryBuilder for constructing a WordDictionary.
    pub fn builder() -> WordDictionaryBuilder {
        WordDictionaryBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base (number of entries) in this dictionary.
    pub fn base(&self) -> usize {
        self.words.len()
    }

    /// Encodes a factor (0 to base-1) as its entry.
    ///
    /// Returns `None` if the index is out of range.
    pub fn encode_word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(|s| s.as_str())
    }

    /// Decodes an exact entry back to its index.
    pub fn decode_word(&self, word: &str) -> Option<usize> {
        self.word_to_index.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.word_to_index.contains_key(word)
    }

    /// Returns true if `word` appears anywhere in an entry, alone or as part
    /// of a phrase.
    pub fn uses_word(&self, word: &str) -> bool {
        self.words
            .iter()
            .any(|entry| entry.split(' ').any(|part| part == word))
    }

    /// Tries every entry, in dictionary order, against the words starting at
    /// `position`. The first entry equal to the window of the same length wins.
    pub fn match_at(&self, tokens: &[&str], position: usize) -> WordMatch {
        for (index, (entry, &span)) in self.words.iter().zip(&self.spans).enumerate() {
            let Some(window) = tokens.get(position..position + span) else {
                continue;
            };
            if window_equals(window, entry) {
                return WordMatch::Matched { index, span };
            }
        }
        WordMatch::NotFound
    }

    /// Returns an iterator over all entries in the dictionary.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|s| s.as_str())
    }
}

// Compares `window.join(" ")` with `entry` without allocating
fn window_equals(window: &[&str], entry: &str) -> bool {
    let mut parts = entry.split(' ');
    window.iter().all(|token| parts.next() == Some(*token)) && parts.next().is_none()
}

/// Builder for constructing a WordDictionary.
///
/// # Example
///
/// ```
/// use hipku::WordDictionary;
///
/// let dict = WordDictionary::builder()
///     .name("trees")
///     .words_from_str("jati\nduwet\nnanas\n")
///     .build()
///     .unwrap();
///
/// assert_eq!(dict.name(), "trees");
/// ```
#[derive(Debug, Default)]
pub struct WordDictionaryBuilder {
    name: Option<String>,
    words: Option<Vec<String>>,
}

impl WordDictionaryBuilder {
    /// Creates a new WordDictionaryBuilder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name reported in decode errors.
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the word list from a vector of strings.
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = Some(words.into_iter().map(|s| s.into()).collect());
        self
    }

    /// Sets the word list from a newline-separated string.
    ///
    /// Empty lines are ignored. Leading/trailing whitespace is trimmed.
    pub fn words_from_str(mut self, s: &str) -> Self {
        self.words = Some(
            s.lines()
                .map(|line| line.trim())
                .filter(|line| !line.is_empty())
                .map(|line| line.to_string())
                .collect(),
        );
        self
    }

    /// Builds the WordDictionary.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No words were provided, or the list is empty
    /// - An entry contains anything but `a-z`, `-` and single inner spaces
    ///   (such entries could never be read back from a poem)
    /// - Duplicate entries exist
    /// - An entry is a word-prefix of a later entry, which the decoder
    ///   would never reach
    pub fn build(self) -> Result<WordDictionary, String> {
        let words = self.words.ok_or("No words provided")?;
        let name = self.name.unwrap_or_else(|| "unnamed".to_string());

        if words.is_empty() {
            return Err(format!("Word list '{}' cannot be empty", name));
        }

        let mut word_to_index = HashMap::with_capacity(words.len());
        let mut spans = Vec::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            if !is_decodable(word) {
                return Err(format!(
                    "Invalid entry in dictionary '{}': '{}' (entries are lowercase a-z and '-', phrases joined by single spaces)",
                    name, word
                ));
            }

            if word_to_index.insert(word.clone(), i).is_some() {
                return Err(format!("Duplicate word in dictionary '{}': '{}'", name, word));
            }

            spans.push(word.split(' ').count());
        }

        for (i, word) in words.iter().enumerate() {
            let shadowed_by = word
                .match_indices(' ')
                .find_map(|(end, _)| word_to_index.get(&word[..end]).filter(|&&j| j < i));
            if let Some(&j) = shadowed_by {
                return Err(format!(
                    "Entry '{}' in dictionary '{}' shadows the later entry '{}'",
                    words[j], name, word
                ));
            }
        }

        Ok(WordDictionary {
            name,
            words,
            spans,
            word_to_index,
        })
    }
}

fn is_decodable(entry: &str) -> bool {
    !entry.is_empty()
        && entry.split(' ').all(|part| {
            !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b == b'-')
        })
}
