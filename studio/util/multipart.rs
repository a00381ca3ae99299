/// One part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub name: String,
    /// Present for file inputs, even when the browser sent an empty name.
    pub filename: Option<String>,
    pub data: Vec<u8>,
}

/// A parsed `multipart/form-data` body.
#[derive(Debug, Default)]
pub struct MultipartForm {
    parts: Vec<Part>,
}

impl MultipartForm {
    /// Splits `body` on `--boundary` and parses each part's
    /// Content-Disposition header. Parts without a header/body separator
    /// (the preamble and the closing `--`) are skipped.
    pub fn parse(body: &[u8], boundary: &str) -> MultipartForm {
        let delimiter = format!("--{}", boundary);
        let sep = b"\r\n\r\n";

        let parts = split_on(body, delimiter.as_bytes())
            .into_iter()
            .filter_map(|raw| {
                let sep_pos = find_subsequence(raw, sep)?;
                let headers = String::from_utf8_lossy(&raw[..sep_pos]);
                let name = disposition_param(&headers, "name")?;
                let filename = disposition_param(&headers, "filename");
                let data = &raw[sep_pos + sep.len()..];
                let data = data.strip_suffix(b"\r\n").unwrap_or(data);
                Some(Part { name, filename, data: data.to_vec() })
            })
            .collect();

        MultipartForm { parts }
    }

    /// Bytes of the file input called `name`.
    pub fn file(&self, name: &str) -> Option<&[u8]> {
        self.parts
            .iter()
            .find(|p| p.name == name && p.filename.is_some())
            .map(|p| p.data.as_slice())
    }

    /// Value of the text (non-file) field called `name`.
    pub fn text(&self, name: &str) -> Option<String> {
        self.parts
            .iter()
            .find(|p| p.name == name && p.filename.is_none())
            .and_then(|p| String::from_utf8(p.data.clone()).ok())
    }
}

/// Returns the index of the first occurrence of `needle` in `haystack`.
pub fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Splits `haystack` on every occurrence of `needle`, returning the pieces
/// between occurrences (excluding the needle itself).
pub fn split_on<'a>(haystack: &'a [u8], needle: &[u8]) -> Vec<&'a [u8]> {
    let mut result = Vec::new();
    let mut start = 0;
    while start <= haystack.len() {
        if let Some(pos) = find_subsequence(&haystack[start..], needle) {
            result.push(&haystack[start..start + pos]);
            start += pos + needle.len();
        } else {
            result.push(&haystack[start..]);
            break;
        }
    }
    result
}

/// Extracts the boundary token from a Content-Type header value like
/// `multipart/form-data; boundary=----WebKitFormBoundaryXXX`.
pub fn extract_boundary(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .map(|s| s.trim())
        .find(|s| s.starts_with("boundary="))
        .map(|s| s["boundary=".len()..].trim_matches('"').to_owned())
        .filter(|b| !b.is_empty())
}

/// Reads `key="value"` from a Content-Disposition header block.
///
/// Matches on a `; ` or whitespace boundary so `name` does not match inside
/// `filename`.
fn disposition_param(headers: &str, key: &str) -> Option<String> {
    let pattern = format!("{}=\"", key);
    let mut search = 0;
    while let Some(rel) = headers[search..].find(&pattern) {
        let pos = search + rel;
        let preceded_ok = pos == 0
            || matches!(headers.as_bytes()[pos - 1], b' ' | b';' | b'\t');
        let rest = &headers[pos + pattern.len()..];
        if preceded_ok {
            let end = rest.find('"')?;
            return Some(rest[..end].to_owned());
        }
        search = pos + pattern.len();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDARY: &str = "XyZ";

    fn body() -> Vec<u8> {
        let mut b = Vec::new();
        b.extend_from_slice(b"--XyZ\r\nContent-Disposition: form-data; name=\"wind_speed\"\r\n\r\n14\r\n");
        b.extend_from_slice(b"--XyZ\r\nContent-Disposition: form-data; name=\"image_file\"; filename=\"leaf.png\"\r\nContent-Type: image/png\r\n\r\n");
        b.extend_from_slice(&[0x89, b'P', b'N', b'G', 0x00, 0xFF]);
        b.extend_from_slice(b"\r\n--XyZ--\r\n");
        b
    }

    #[test]
    fn boundary_from_content_type() {
        assert_eq!(
            extract_boundary("multipart/form-data; boundary=----WebKitFormBoundaryAb"),
            Some("----WebKitFormBoundaryAb".to_owned())
        );
        assert_eq!(extract_boundary("multipart/form-data; boundary=\"q\""), Some("q".to_owned()));
        assert_eq!(extract_boundary("application/x-www-form-urlencoded"), None);
    }

    #[test]
    fn reads_text_and_file_parts() {
        let form = MultipartForm::parse(&body(), BOUNDARY);
        assert_eq!(form.text("wind_speed").as_deref(), Some("14"));
        assert_eq!(form.file("image_file"), Some(&[0x89, b'P', b'N', b'G', 0x00, 0xFF][..]));
    }

    #[test]
    fn file_and_text_lookups_do_not_cross() {
        let form = MultipartForm::parse(&body(), BOUNDARY);
        assert_eq!(form.text("image_file"), None);
        assert_eq!(form.file("wind_speed"), None);
    }

    #[test]
    fn name_does_not_match_inside_filename() {
        let headers = "Content-Disposition: form-data; filename=\"a.png\"; name=\"pic\"";
        assert_eq!(disposition_param(headers, "name").as_deref(), Some("pic"));
        assert_eq!(disposition_param(headers, "filename").as_deref(), Some("a.png"));
    }

    #[test]
    fn garbage_body_yields_no_parts() {
        let form = MultipartForm::parse(b"not multipart at all", BOUNDARY);
        assert_eq!(form.text("anything"), None);
    }

    #[test]
    fn split_on_keeps_empty_edges() {
        let pieces = split_on(b"--a--b", b"--");
        assert_eq!(pieces, vec![&b""[..], &b"a"[..], &b"b"[..]]);
    }
}
