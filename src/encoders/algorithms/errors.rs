use std::fmt;

use crate::core::address::Family;

/// Errors that can occur while parsing an address for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input contains neither ':' nor '.'
    AmbiguousFamily { input: String },
    /// Fewer groups than the family requires
    TooFewGroups {
        family: Family,
        actual: usize,
        input: String,
    },
    /// More groups than the family allows
    TooManyGroups {
        family: Family,
        actual: usize,
        input: String,
    },
    /// A group is empty, not a number, or out of range for its family
    InvalidGroup {
        family: Family,
        group: String,
        position: usize,
    },
    /// More than one `::` run in an IPv6 address
    MultipleElisions { input: String },
}

impl FormatError {
    pub(crate) fn too_few_groups(family: Family, actual: usize, input: &str) -> Self {
        FormatError::TooFewGroups {
            family,
            actual,
            input: truncate(input),
        }
    }

    pub(crate) fn too_many_groups(family: Family, actual: usize, input: &str) -> Self {
        FormatError::TooManyGroups {
            family,
            actual,
            input: truncate(input),
        }
    }

    pub(crate) fn invalid_group(family: Family, group: &str, position: usize) -> Self {
        FormatError::InvalidGroup {
            family,
            group: truncate(group),
            position,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            FormatError::AmbiguousFamily { input } => {
                write_header(f, use_color, &format!("ambiguous family for '{}'", input))?;
                write_hint(
                    f,
                    use_color,
                    "IPv4 addresses use '.' separators, IPv6 addresses use ':'",
                )
            }
            FormatError::TooFewGroups {
                family,
                actual,
                input,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!(
                        "too few groups in {} address '{}': found {}, expected {}",
                        family,
                        input,
                        actual,
                        family.group_count()
                    ),
                )?;
                if *family == Family::V6 {
                    write_hint(f, use_color, "abbreviate runs of zero groups with '::'")
                } else {
                    write_hint(f, use_color, "IPv4 addresses need all four octets")
                }
            }
            FormatError::TooManyGroups {
                family,
                actual,
                input,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!(
                        "too many groups in {} address '{}': found {}, expected {}",
                        family,
                        input,
                        actual,
                        family.group_count()
                    ),
                )?;
                Ok(())
            }
            FormatError::InvalidGroup {
                family,
                group,
                position,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!(
                        "invalid {} group '{}' at position {}",
                        family, group, position
                    ),
                )?;
                match family {
                    Family::V4 => write_hint(f, use_color, "octets are decimal numbers 0-255"),
                    Family::V6 => write_hint(f, use_color, "groups are 1-4 hexadecimal digits"),
                }
            }
            FormatError::MultipleElisions { input } => {
                write_header(
                    f,
                    use_color,
                    &format!("more than one '::' in IPv6 address '{}'", input),
                )?;
                write_hint(f, use_color, "only a single run of zero groups may be elided")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Errors that can occur while decoding a poem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The poem contains no words after normalization
    EmptyInput,
    /// The words ran out before the word for a factor position was found
    MissingWord {
        family: Family,
        position: usize,
        dictionary: String,
    },
    /// Recombined factors do not fit an address group
    ComponentOutOfRange {
        family: Family,
        position: usize,
        value: u32,
    },
}

impl DecodeError {
    pub(crate) fn missing_word(family: Family, position: usize, dictionary: &str) -> Self {
        DecodeError::MissingWord {
            family,
            position,
            dictionary: dictionary.to_string(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::EmptyInput => write_header(f, use_color, "cannot decode empty input"),
            DecodeError::MissingWord {
                family,
                position,
                dictionary,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!(
                        "required word missing for factor position {} of {} haiku",
                        position, family
                    ),
                )?;
                write_hint(
                    f,
                    use_color,
                    &format!(
                        "expected a word from the '{}' dictionary; the haiku may be truncated or mistyped",
                        dictionary
                    ),
                )
            }
            DecodeError::ComponentOutOfRange {
                family,
                position,
                value,
            } => write_header(
                f,
                use_color,
                &format!(
                    "decoded value {} does not fit {} group {}",
                    value, family, position
                ),
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;31merror:\x1b[0m {}", message)
    } else {
        write!(f, "error: {}", message)
    }
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, hint: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f)?;
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)
    } else {
        write!(f, "hint: {}", hint)
    }
}

// Truncate long inputs
fn truncate(input: &str) -> String {
    if input.chars().count() > 60 {
        format!("{}...", input.chars().take(60).collect::<String>())
    } else {
        input.to_string()
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a schema key names a dictionary that is not defined
#[derive(Debug)]
pub struct DictionaryNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl DictionaryNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for DictionaryNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        write_header(
            f,
            use_color,
            &format!("dictionary '{}' not found", self.name),
        )?;

        if let Some(suggestion) = &self.suggestion {
            write_hint(f, use_color, &format!("did you mean '{}'?", suggestion))?;
        }

        Ok(())
    }
}

impl std::error::Error for DictionaryNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching dictionary name
pub fn find_closest_dictionary(name: &str, available: &[String]) -> Option<String> {
    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for dict_name in available {
        let distance = levenshtein_distance(name, dict_name);

        // 1-2 character typos for short names, up to 3 for longer names
        let threshold = if name.len() < 5 { 2 } else { 3 };

        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(dict_name.clone());
        }
    }

    best_match
}
