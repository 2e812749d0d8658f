use std::sync::LazyLock;

use encoding_rs::Encoding;
use regex::Regex;
use tracing::warn;

/// Only the head of the document is scanned for `<meta>` charset hints.
const SNIFF_LEN: usize = 4096;

static HEADER_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

static META_HTTP_EQUIV: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap()
});

/// Picks the document encoding: `Content-Type` header first, then `<meta>`
/// declarations near the top of the body, then statistical detection.
pub fn detect_encoding(content_type: &str, body: &[u8]) -> &'static Encoding {
    if let Some(encoding) = label_from(&HEADER_CHARSET, content_type) {
        return encoding;
    }

    let head = &body[..body.len().min(SNIFF_LEN)];
    let head_str = String::from_utf8_lossy(head);
    for pattern in [&*META_CHARSET, &*META_HTTP_EQUIV] {
        if let Some(encoding) = label_from(pattern, &head_str) {
            return encoding;
        }
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, head.len() == body.len());
    detector.guess(None, true)
}

fn label_from(pattern: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = pattern.captures(haystack)?.get(1)?.as_str().to_ascii_lowercase();
    Encoding::for_label(label.as_bytes())
}

/// Decodes `body` to UTF-8. Malformed sequences are replaced rather than
/// failing the fetch; a scrape with a few mangled characters is still useful.
pub fn decode_body(body: &[u8], encoding: &'static Encoding) -> String {
    let (decoded, actual, had_errors) = encoding.decode(body);
    if had_errors {
        warn!(encoding = actual.name(), "document contained malformed byte sequences");
    }
    decoded.into_owned()
}
