//! Address Helpers
//!
//! Canonical and display forms of account addresses.

/// Canonical form used for every contract call and resource type: exactly
/// one `0x` prefix over the bare hex. Input may carry the prefix or not.
pub fn canonical(address: &str) -> String {
    format!("0x{}", address.trim_start_matches("0x"))
}

/// Short display form: first six characters, ellipsis, last five.
/// Addresses are ASCII hex, so byte slicing is safe here.
pub fn short(address: &str) -> String {
    if address.len() <= 11 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 5..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_adds_prefix() {
        assert_eq!(canonical("c994ab"), "0xc994ab");
    }

    #[test]
    fn test_canonical_keeps_existing_prefix() {
        assert_eq!(canonical("0xc994ab"), "0xc994ab");
    }

    #[test]
    fn test_short_truncates() {
        let address = "0xc9946781d09715fccb12d9544ce87453921bca802ea3cfb6262fd758f3c43ac4";
        assert_eq!(short(address), "0xc994...c3ac4");
    }

    #[test]
    fn test_short_leaves_short_addresses() {
        assert_eq!(short("0x1"), "0x1");
    }
}
