//! Hex dumps for fixtures and diagnostics.

/// Formats bytes as space separated lowercase hexadecimal pairs.
pub fn to_spaced_hex(bytes: &[u8]) -> String {
    bytes
        .chunks(1)
        .map(::hex::encode)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_dump_splits_pairs() {
        let bytes = ::hex::decode("deADbeef").unwrap();
        assert_eq!(to_spaced_hex(&bytes), "de ad be ef");
        assert_eq!(::hex::decode(to_spaced_hex(&bytes).replace(' ', "")).unwrap(), bytes);
    }

    #[test]
    fn empty_dump_is_empty() {
        assert_eq!(to_spaced_hex(&[]), "");
    }
}
