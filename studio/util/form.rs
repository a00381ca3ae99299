/// Decodes a percent-encoded string (`%XX`) and converts `+` to space.
///
/// Decoding works on bytes so multi-byte UTF-8 sequences survive; invalid
/// sequences are replaced rather than rejected.
pub fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                match (hi, lo) {
                    (Some(h), Some(l)) => {
                        out.push(((h << 4) | l) as u8);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Parses `key=value&key2=value2` into a `Vec` of `(key, value)` pairs.
pub fn parse_form(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let mut it = pair.splitn(2, '=');
            let k = it.next()?;
            let v = it.next().unwrap_or("");
            Some((url_decode(k), url_decode(v)))
        })
        .collect()
}

/// Looks up a key in parsed form pairs, returning the value if found.
pub fn form_get<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plus_and_percent() {
        assert_eq!(url_decode("is+my+leaf%3F"), "is my leaf?");
    }

    #[test]
    fn keeps_multibyte_utf8() {
        assert_eq!(url_decode("caf%C3%A9"), "café");
    }

    #[test]
    fn malformed_escape_is_literal() {
        assert_eq!(url_decode("100%zz"), "100%zz");
        assert_eq!(url_decode("50%"), "50%");
    }

    #[test]
    fn parses_pairs_and_skips_empties() {
        let pairs = parse_form("query=aphids&&seed=4&flag");
        assert_eq!(form_get(&pairs, "query"), Some("aphids"));
        assert_eq!(form_get(&pairs, "seed"), Some("4"));
        assert_eq!(form_get(&pairs, "flag"), Some(""));
        assert_eq!(form_get(&pairs, "missing"), None);
    }
}
