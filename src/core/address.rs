use std::fmt;
use std::str::FromStr;

use crate::encoders::algorithms::errors::{DecodeError, FormatError};

/// Address family of an encoded address.
///
/// The family fixes how many groups an address has, the divisor used to
/// split each group into two dictionary indices, and the textual separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Number of groups in an address of this family.
    pub fn group_count(self) -> usize {
        match self {
            Family::V4 => 4,
            Family::V6 => 8,
        }
    }

    /// Divisor that splits a group into a (hi, lo) factor pair.
    pub fn divisor(self) -> u32 {
        match self {
            Family::V4 => 16,
            Family::V6 => 256,
        }
    }

    /// Number of factors (and therefore words) for a full address.
    pub fn factor_count(self) -> usize {
        self.group_count() * 2
    }

    /// Largest value a single group can hold.
    pub fn group_max(self) -> u32 {
        match self {
            Family::V4 => u8::MAX as u32,
            Family::V6 => u16::MAX as u32,
        }
    }

    pub fn separator(self) -> char {
        match self {
            Family::V4 => '.',
            Family::V6 => ':',
        }
    }

    /// Determines the family from address text.
    ///
    /// Any ':' means IPv6, otherwise any '.' means IPv4.
    pub fn detect(input: &str) -> Result<Family, FormatError> {
        if input.contains(':') {
            Ok(Family::V6)
        } else if input.contains('.') {
            Ok(Family::V4)
        } else {
            Err(FormatError::AmbiguousFamily {
                input: input.to_string(),
            })
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => write!(f, "IPv4"),
            Family::V6 => write!(f, "IPv6"),
        }
    }
}

/// An IPv4 or IPv6 address as its ordered groups.
///
/// Parsing accepts dotted-decimal IPv4 and colon-separated hexadecimal IPv6
/// with at most one `::` elision. Rendering is always fully expanded: IPv6
/// groups are four lowercase hex digits each.
///
/// # Example
///
/// ```
/// use hipku::Address;
///
/// let addr: Address = "::1".parse().unwrap();
/// assert_eq!(addr.to_string(), "0000:0000:0000:0000:0000:0000:0000:0001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    V4([u8; 4]),
    V6([u16; 8]),
}

impl Address {
    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    /// Returns the groups widened to `u32`, in address order.
    pub fn components(&self) -> Vec<u32> {
        match self {
            Address::V4(octets) => octets.iter().map(|&o| o as u32).collect(),
            Address::V6(groups) => groups.iter().map(|&g| g as u32).collect(),
        }
    }

    /// Builds an address from recombined group values.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::ComponentOutOfRange` if a value does not fit the
    /// family's group width.
    pub fn from_components(family: Family, components: &[u32]) -> Result<Self, DecodeError> {
        debug_assert_eq!(components.len(), family.group_count());

        let check = |position: usize, value: u32| {
            if value > family.group_max() {
                Err(DecodeError::ComponentOutOfRange {
                    family,
                    position,
                    value,
                })
            } else {
                Ok(value)
            }
        };

        match family {
            Family::V4 => {
                let mut octets = [0u8; 4];
                for (i, (slot, &value)) in octets.iter_mut().zip(components).enumerate() {
                    *slot = check(i, value)? as u8;
                }
                Ok(Address::V4(octets))
            }
            Family::V6 => {
                let mut groups = [0u16; 8];
                for (i, (slot, &value)) in groups.iter_mut().zip(components).enumerate() {
                    *slot = check(i, value)? as u16;
                }
                Ok(Address::V6(groups))
            }
        }
    }
}

impl FromStr for Address {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();

        match Family::detect(&cleaned)? {
            Family::V4 => parse_v4(&cleaned),
            Family::V6 => parse_v6(&cleaned),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::V4(octets) => {
                for (i, octet) in octets.iter().enumerate() {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", octet)?;
                }
            }
            Address::V6(groups) => {
                for (i, group) in groups.iter().enumerate() {
                    if i > 0 {
                        write!(f, ":")?;
                    }
                    write!(f, "{:04x}", group)?;
                }
            }
        }
        Ok(())
    }
}

fn parse_v4(input: &str) -> Result<Address, FormatError> {
    let groups: Vec<&str> = input.split('.').collect();

    if groups.len() < 4 {
        return Err(FormatError::too_few_groups(Family::V4, groups.len(), input));
    }
    if groups.len() > 4 {
        return Err(FormatError::too_many_groups(Family::V4, groups.len(), input));
    }

    let mut octets = [0u8; 4];
    for (i, group) in groups.iter().enumerate() {
        // Empty groups ("1..3.4") are rejected rather than zero-filled
        octets[i] = group
            .parse::<u8>()
            .ok()
            .filter(|_| group.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| FormatError::invalid_group(Family::V4, group, i))?;
    }

    Ok(Address::V4(octets))
}

fn parse_v6(input: &str) -> Result<Address, FormatError> {
    let groups = expand_elision(input)?;

    let mut values = [0u16; 8];
    for (i, group) in groups.iter().enumerate() {
        values[i] = parse_hex_group(group)
            .ok_or_else(|| FormatError::invalid_group(Family::V6, group, i))?;
    }

    Ok(Address::V6(values))
}

/// Splits IPv6 text into exactly eight group strings, filling a single `::`
/// gap with as many "0" groups as are missing.
fn expand_elision(input: &str) -> Result<Vec<&str>, FormatError> {
    let Some((head, tail)) = input.split_once("::") else {
        let groups: Vec<&str> = input.split(':').collect();
        return match groups.len() {
            8 => Ok(groups),
            n if n < 8 => Err(FormatError::too_few_groups(Family::V6, n, input)),
            n => Err(FormatError::too_many_groups(Family::V6, n, input)),
        };
    };

    if tail.contains("::") {
        return Err(FormatError::MultipleElisions {
            input: input.to_string(),
        });
    }

    let head = split_groups(head);
    let tail = split_groups(tail);
    let present = head.len() + tail.len();

    // The elision stands for at least one group
    if present >= 8 {
        return Err(FormatError::too_many_groups(Family::V6, present + 1, input));
    }

    let missing = 8 - present;
    Ok(head
        .into_iter()
        .chain(std::iter::repeat_n("0", missing))
        .chain(tail)
        .collect())
}

fn split_groups(part: &str) -> Vec<&str> {
    if part.is_empty() {
        Vec::new()
    } else {
        part.split(':').collect()
    }
}

fn parse_hex_group(group: &str) -> Option<u16> {
    if group.is_empty() || group.len() > 4 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u16::from_str_radix(group, 16).ok()
}
