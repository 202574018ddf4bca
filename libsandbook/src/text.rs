//! HTML-to-text conversion for terminal display
//!
//! Full-mode content arrives as rendered article HTML. The terminal
//! wants plain text, so tags are stripped, block-level tags become
//! line breaks, and the common entities are decoded. This is a
//! best-effort reader view, not an HTML engine.

/// Strip markup from rendered article HTML.
///
/// `<script>` and `<style>` contents are dropped entirely; block tags
/// open a new line; runs of more than one blank line collapse.
pub fn html_to_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len() / 2);
    let mut chars = html.char_indices().peekable();
    let mut skip_until_close: Option<&str> = None;

    while let Some((i, c)) = chars.next() {
        if c != '<' {
            if skip_until_close.is_none() {
                out.push(c);
            }
            continue;
        }

        let rest = &html[i..];
        let end = match rest.find('>') {
            Some(end) => end,
            // Unterminated tag; drop the remainder.
            None => break,
        };
        let tag_body = &rest[1..end];
        let name = tag_name(tag_body);

        if let Some(waiting_for) = skip_until_close {
            if tag_body.starts_with('/') && name == waiting_for {
                skip_until_close = None;
            }
        } else {
            match name {
                "script" => skip_until_close = Some("script"),
                "style" => skip_until_close = Some("style"),
                "br" | "p" | "li" | "tr" | "div" | "blockquote" | "pre" | "table" | "ul"
                | "ol" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                    if !out.ends_with('\n') && !out.is_empty() {
                        out.push('\n');
                    }
                }
                _ => {}
            }
        }

        // Advance past the tag.
        while let Some(&(j, _)) = chars.peek() {
            if j > i + end {
                break;
            }
            chars.next();
        }
    }

    collapse_blank_lines(&decode_entities(&out))
}

fn tag_name(tag_body: &str) -> &str {
    let body = tag_body.trim_start_matches('/');
    let end = body
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .unwrap_or(body.len());
    &body[..end]
}

/// Decode the handful of entities Wikipedia extracts actually use.
pub fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        // Entity names are short ASCII; byte search avoids slicing
        // mid-codepoint.
        let Some(semi) = rest.bytes().take(10).position(|b| b == b';') else {
            out.push('&');
            rest = &rest[1..];
            continue;
        };

        let entity = &rest[1..semi];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            "nbsp" => Some(' '),
            "ndash" => Some('\u{2013}'),
            "mdash" => Some('\u{2014}'),
            _ => numeric_entity(entity),
        };

        match decoded {
            Some(c) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn numeric_entity(entity: &str) -> Option<char> {
    let code = entity.strip_prefix('#')?;
    let value = if let Some(hex) = code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        code.parse().ok()?
    };
    char::from_u32(value)
}

fn collapse_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;

    for line in text.lines() {
        let trimmed = line.trim_end();
        if trimmed.trim().is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
            out.push('\n');
        } else {
            blank_run = 0;
            out.push_str(trimmed);
            out.push('\n');
        }
    }

    out.trim_matches('\n').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        assert_eq!(
            html_to_text("<p>An <b>atoll</b> in the <i>Indian Ocean</i>.</p>"),
            "An atoll in the Indian Ocean."
        );
    }

    #[test]
    fn test_block_tags_break_lines() {
        assert_eq!(
            html_to_text("<p>First.</p><p>Second.</p>"),
            "First.\nSecond."
        );
    }

    #[test]
    fn test_drops_style_content() {
        assert_eq!(
            html_to_text("<style>.infobox{display:none}</style><p>Body.</p>"),
            "Body."
        );
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(
            decode_entities("Dungeons &amp; Dragons &ndash; 1974"),
            "Dungeons & Dragons \u{2013} 1974"
        );
        assert_eq!(decode_entities("&#65;&#x42;"), "AB");
    }

    #[test]
    fn test_bare_ampersand_passes_through() {
        assert_eq!(decode_entities("AT&T"), "AT&T");
        assert_eq!(decode_entities("fish & chips"), "fish & chips");
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(html_to_text(""), "");
    }

    #[test]
    fn test_collapses_blank_runs() {
        assert_eq!(
            html_to_text("<div></div><div></div><div></div><p>Text</p>"),
            "Text"
        );
    }
}
