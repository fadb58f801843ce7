use crate::core::address::Family;
use crate::core::config::SchemaTable;

/// Guesses which family a poem encodes.
///
/// Any word found in the first IPv4 dictionary marks the poem as IPv4;
/// otherwise it is IPv6. This is a heuristic: an IPv6 poem that happens to
/// use a word from that dictionary is misread as IPv4. Use
/// [`crate::decode_as`] when the family is known.
pub fn detect_family<S: AsRef<str>>(tokens: &[S], table: &SchemaTable) -> Family {
    let Some(marker) = table.family(Family::V4).key().first() else {
        return Family::V6;
    };

    if tokens.iter().any(|token| marker.contains(token.as_ref())) {
        Family::V4
    } else {
        Family::V6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_marker_word() {
        let table = SchemaTable::builtin();
        assert_eq!(detect_family(&["si", "gemuk", "coklat"], table), Family::V4);
        assert_eq!(detect_family(&["jati", "setia"], table), Family::V4);
    }

    #[test]
    fn test_no_marker_is_ipv6() {
        let table = SchemaTable::builtin();
        assert_eq!(detect_family(&["bongsor", "semut"], table), Family::V6);
        assert_eq!(detect_family::<&str>(&[], table), Family::V6);
    }

    #[test]
    fn test_known_collision() {
        // "gemuk" is both an IPv4 animal adjective and IPv6 adjective #65
        let table = SchemaTable::builtin();
        assert_eq!(
            table.family(Family::V6).key()[0].decode_word("gemuk"),
            Some(65)
        );
        assert_eq!(detect_family(&["gemuk", "semut"], table), Family::V4);
    }
}
