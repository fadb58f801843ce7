use crate::{
    Address, DecodeError, Family, FormatError, SchemaTable, decode, decode_as, detect_family,
    encode,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// IPv6 words that also appear in the first IPv4 dictionary
fn has_ipv4_marker(haiku: &str) -> bool {
    let marker = &SchemaTable::builtin().family(Family::V4).key()[0];
    crate::encoders::algorithms::poem::tokenize(haiku)
        .iter()
        .any(|word| marker.contains(word))
}

fn random_ipv6(rng: &mut StdRng) -> String {
    let groups: Vec<String> = (0..8)
        .map(|_| format!("{:04x}", rng.random::<u16>()))
        .collect();
    groups.join(":")
}

#[test]
fn test_encode_is_deterministic() {
    let first = encode("1.2.3.4").unwrap();
    for _ in 0..10 {
        assert_eq!(encode("1.2.3.4").unwrap(), first);
    }
}

#[test]
fn test_encode_ipv4_known_poem() {
    // 1 = (0, 1), 2 = (0, 2), 3 = (0, 3), 4 = (0, 4)
    assert_eq!(
        encode("1.2.3.4").unwrap(),
        "Si gemuk hitam\nkera di terindah lembah.\nMangga tua meluruh.\n"
    );
}

#[test]
fn test_ipv4_boundaries_roundtrip() {
    for address in ["0.0.0.0", "255.255.255.255", "127.0.0.1", "10.255.0.16"] {
        let haiku = encode(address).unwrap();
        assert_eq!(decode(&haiku).unwrap(), address, "haiku:\n{}", haiku);
    }
}

#[test]
fn test_ipv4_every_octet_value_roundtrip() {
    for position in 0..4 {
        for value in 0..=255u8 {
            let mut octets = [7u8, 77, 177, 250];
            octets[position] = value;
            let address = Address::V4(octets).to_string();

            let haiku = encode(&address).unwrap();
            assert_eq!(decode(&haiku).unwrap(), address);
        }
    }
}

#[test]
fn test_ipv4_random_roundtrip() {
    let mut rng = StdRng::seed_from_u64(0x4f4b);
    for _ in 0..2000 {
        let octets: [u8; 4] = rng.random();
        let address = Address::V4(octets).to_string();
        let haiku = encode(&address).unwrap();
        assert_eq!(decode(&haiku).unwrap(), address);
    }
}

#[test]
fn test_ipv6_boundaries_roundtrip() {
    for address in [
        "0000:0000:0000:0000:0000:0000:0000:0000",
        "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
        "2001:0db8:85a3:0000:0000:8a2e:0370:7334",
    ] {
        let haiku = encode(address).unwrap();
        assert_eq!(decode(&haiku).unwrap(), address, "haiku:\n{}", haiku);
    }
}

#[test]
fn test_ipv6_random_roundtrip() {
    let mut rng = StdRng::seed_from_u64(0x1996);
    let mut detected = 0;

    for _ in 0..2000 {
        let address = random_ipv6(&mut rng);
        let haiku = encode(&address).unwrap();

        assert_eq!(decode_as(&haiku, Family::V6).unwrap(), address);

        if has_ipv4_marker(&haiku) {
            // Known limitation of the family heuristic
            assert_eq!(detect_family(&haiku), Family::V4);
        } else {
            assert_eq!(detect_family(&haiku), Family::V6);
            assert_eq!(decode(&haiku).unwrap(), address);
            detected += 1;
        }
    }

    // Collisions are the exception
    assert!(detected > 1500, "only {} of 2000 detected as IPv6", detected);
}

#[test]
fn test_abbreviated_ipv6_decodes_expanded() {
    let haiku = encode("::1").unwrap();
    assert_eq!(
        decode(&haiku).unwrap(),
        "0000:0000:0000:0000:0000:0000:0000:0001"
    );
    assert_eq!(
        encode("0:0:0:0:0:0:0:1").unwrap(),
        haiku,
        "abbreviated and expanded forms share a haiku"
    );
}

#[test]
fn test_uppercase_ipv6_decodes_lowercase() {
    let haiku = encode("FE80:0:0:0:0:0:0:ABCD").unwrap();
    assert_eq!(
        decode(&haiku).unwrap(),
        "fe80:0000:0000:0000:0000:0000:0000:abcd"
    );
}

#[test]
fn test_family_detection_on_encoded_output() {
    assert_eq!(detect_family(&encode("8.8.8.8").unwrap()), Family::V4);
    assert_eq!(detect_family(&encode("2001:db8::1").unwrap()), Family::V6);
}

#[test]
fn test_decode_tolerates_reformatting() {
    let haiku = encode("172.16.254.3").unwrap();
    let mangled = haiku.to_uppercase().replace('\n', "  ,  ").replace('.', "!");
    assert_eq!(decode(&mangled).unwrap(), "172.16.254.3");
}

#[test]
fn test_encode_not_an_ip() {
    assert!(matches!(
        encode("not-an-ip"),
        Err(FormatError::AmbiguousFamily { .. })
    ));
}

#[test]
fn test_encode_too_few_ipv4_octets() {
    assert!(matches!(
        encode("1.2.3"),
        Err(FormatError::TooFewGroups { family: Family::V4, .. })
    ));
}

#[test]
fn test_decode_unrelated_text() {
    assert!(matches!(
        decode("completely unrelated text with no dictionary words"),
        Err(DecodeError::MissingWord { position: 0, .. })
    ));
}

#[test]
fn test_decode_truncated_haiku() {
    let haiku = encode("9.9.9.9").unwrap();
    let truncated: String = haiku.lines().take(2).collect::<Vec<_>>().join("\n");
    assert!(matches!(
        decode(&truncated),
        Err(DecodeError::MissingWord {
            family: Family::V4,
            position: 5,
            ..
        })
    ));
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..8u8)
        .map(|i| {
            std::thread::spawn(move || {
                let address = format!("10.{}.{}.1", i, 255 - i);
                let haiku = encode(&address).unwrap();
                assert_eq!(decode(&haiku).unwrap(), address);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
