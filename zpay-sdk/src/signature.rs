//! Checksum algorithm for gateway requests.
//!
//! Every request to the gateway carries an MD5 checksum computed with the
//! merchant's secret key:
//!
//! ```text
//! sign = md5("key1=val1&key2=val2&...&keyN=valN" + secret)
//! ```
//!
//! The pairs are sorted by key (byte order) before joining, and the secret
//! is appended directly to the joined string, without a separator.  The
//! `sign` and `sign_type` parameters never participate in the digest.
//!
//! Serialization is deliberately raw: neither keys nor values are
//! percent-encoded.  The gateway's verifier recomputes the digest over the
//! unencoded byte string, so encoding here would change the signed bytes
//! and the gateway would reject the request.  Callers that need a
//! display-safe URL must arrange encoding with the gateway operator first.

/// Sort parameter pairs by key, byte-lexicographic.
///
/// Keys are unique by construction, so the order within equal keys never
/// matters.
pub fn canonicalize(pairs: &mut [(&str, &str)]) {
    pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
}

/// Join pairs as `key=value` with `&` separators, in the order given.
///
/// This is the raw serialization described in the module docs: values go
/// out byte-for-byte as supplied, empty values serialize as `key=`.
pub fn join_raw(pairs: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (i, (key, value)) in pairs.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.push_str(key);
        out.push('=');
        out.push_str(value);
    }
    out
}

/// MD5 digest of `data`, rendered as 32 lowercase hex characters.
pub fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}

/// Compute the checksum for a parameter set.
///
/// Pairs named `sign` or `sign_type` are skipped, the rest are sorted and
/// joined raw, the secret `key` is appended, and the result is digested.
/// The input order of `pairs` does not affect the output.
pub fn sign_pairs(pairs: &[(&str, &str)], key: &str) -> String {
    let mut signable: Vec<(&str, &str)> = pairs
        .iter()
        .copied()
        .filter(|(k, _)| *k != "sign" && *k != "sign_type")
        .collect();
    canonicalize(&mut signable);
    let mut data = join_raw(&signable);
    data.push_str(key);
    md5_hex(data.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex_known_digests() {
        assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(md5_hex(b"hello world"), "5eb63bbbe01eeed093cb22bb8f5acdc3");
    }

    #[test]
    fn test_canonicalize_sorts_by_key_bytes() {
        let mut pairs = vec![("type", "alipay"), ("money", "1.00"), ("name", "x")];
        canonicalize(&mut pairs);
        assert_eq!(
            pairs,
            vec![("money", "1.00"), ("name", "x"), ("type", "alipay")]
        );
    }

    #[test]
    fn test_join_raw_keeps_values_untouched() {
        let pairs = [("a", "1&2"), ("b", ""), ("c", "x=y")];
        assert_eq!(join_raw(&pairs), "a=1&2&b=&c=x=y");
    }

    #[test]
    fn test_sign_pairs_is_order_independent() {
        let forward = [("name", "Widget"), ("money", "9.99")];
        let backward = [("money", "9.99"), ("name", "Widget")];
        assert_eq!(sign_pairs(&forward, "k"), sign_pairs(&backward, "k"));
    }

    #[test]
    fn test_sign_pairs_skips_sign_fields() {
        let bare = [("money", "9.99"), ("name", "Widget")];
        let with_sign = [
            ("money", "9.99"),
            ("name", "Widget"),
            ("sign", "junk"),
            ("sign_type", "MD5"),
        ];
        assert_eq!(sign_pairs(&bare, "k"), sign_pairs(&with_sign, "k"));
    }

    #[test]
    fn test_sign_pairs_matches_manual_digest() {
        let pairs = [("money", "9.99"), ("name", "Widget")];
        let expected = md5_hex(b"money=9.99&name=Widgetsecret");
        assert_eq!(sign_pairs(&pairs, "secret"), expected);
    }
}
