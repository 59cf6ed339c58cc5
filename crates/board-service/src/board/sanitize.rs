//! HTML tag stripping for post bodies.
//!
//! Posts store their body twice: the raw `contents` as submitted and a
//! `plain_contents` rendering with markup removed, used for search and
//! list previews. The stripper is a small scanner, not an HTML parser:
//! it drops `<...>` runs, skips `<script>`/`<style>` bodies entirely,
//! and decodes the five standard entities.

/// Strip HTML tags from `html`, returning the visible text.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut chars = html.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch != '<' {
            out.push(ch);
            continue;
        }

        let rest = &html[idx..];
        if let Some(skip_to) = raw_text_element_end(rest) {
            // Consume everything through the closing tag.
            let target = idx + skip_to;
            while let Some(&(next_idx, _)) = chars.peek() {
                if next_idx >= target {
                    break;
                }
                chars.next();
            }
            continue;
        }

        // Plain tag: drop through the next '>'.
        for (_, tag_ch) in chars.by_ref() {
            if tag_ch == '>' {
                break;
            }
        }
    }

    decode_entities(&out)
}

/// If `rest` opens a `<script>` or `<style>` element, return the byte
/// offset just past its closing tag.
///
/// Matching is byte-wise ASCII case-insensitive; lowercasing the input
/// would shift offsets for characters whose lowercase form has a
/// different byte length.
fn raw_text_element_end(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    for name in ["script", "style"] {
        let open = format!("<{name}");
        if bytes.len() < open.len() || !bytes[..open.len()].eq_ignore_ascii_case(open.as_bytes()) {
            continue;
        }

        let close = format!("</{name}>");
        let close = close.as_bytes();
        return match bytes
            .windows(close.len())
            .position(|w| w.eq_ignore_ascii_case(close))
        {
            Some(pos) => Some(pos + close.len()),
            // Unterminated raw element swallows the remainder.
            None => Some(rest.len()),
        };
    }
    None
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(strip_tags("hello world"), "hello world");
    }

    #[test]
    fn test_tags_removed_text_kept() {
        assert_eq!(
            strip_tags("<p>hello <b>bold</b> world</p>"),
            "hello bold world"
        );
    }

    #[test]
    fn test_attributes_removed() {
        assert_eq!(
            strip_tags(r#"<a href="https://example.com">link</a>"#),
            "link"
        );
    }

    #[test]
    fn test_script_body_dropped() {
        assert_eq!(
            strip_tags("before<script>alert('x')</script>after"),
            "beforeafter"
        );
    }

    #[test]
    fn test_style_body_dropped() {
        assert_eq!(strip_tags("a<style>p{color:red}</style>b"), "ab");
    }

    #[test]
    fn test_entities_decoded() {
        assert_eq!(strip_tags("1 &lt; 2 &amp;&amp; 3 &gt; 2"), "1 < 2 && 3 > 2");
    }

    #[test]
    fn test_unterminated_tag_dropped() {
        assert_eq!(strip_tags("text <unclosed"), "text ");
    }

    #[test]
    fn test_multibyte_content_survives() {
        assert_eq!(strip_tags("<p>안녕하세요</p>"), "안녕하세요");
    }

    #[test]
    fn test_script_close_matched_case_insensitively() {
        assert_eq!(strip_tags("a<SCRIPT>alert(1)</Script>b"), "ab");
    }

    #[test]
    fn test_script_body_with_length_changing_case_folds() {
        // 'İ' lowercases to a longer byte sequence; the skip must still
        // land exactly past the closing tag.
        assert_eq!(strip_tags("a<script>İİİİ</script>b"), "ab");
        assert_eq!(strip_tags("<style>İzmir</style>text"), "text");
    }
}
