use super::{
    cursor::Cursor,
    kinds::Link,
    types::{RichText, Segment},
};

/// Formats a line (or joined paragraph text) into [`RichText`].
///
/// Scans left to right for `[label](url)`. Literal text around links becomes
/// plain segments; a link becomes one segment carrying the label, with the
/// URL attached only when [`Link::is_external`] accepts it.
///
/// The result always holds at least one segment: text with no links comes
/// back as a single plain segment of the whole input.
pub fn format_inline(text: &str) -> RichText {
    let mut cur = Cursor::new(text);
    let mut out = vec![];
    let mut text_start = 0;

    fn flush_text(out: &mut Vec<Segment>, literal: &str) {
        if !literal.is_empty() {
            out.push(Segment::plain(literal));
        }
    }

    while !cur.eof() {
        let at = cur.i;
        if let Some(link) = try_parse_link(&mut cur) {
            flush_text(&mut out, cur.slice(text_start, at));
            out.push(link);
            text_start = cur.i;
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, cur.slice(text_start, text.len()));
    RichText::from_segments(out, text)
}

/// Attempts to parse `[label](url)` at the current position.
///
/// On failure the cursor is restored so the caller can step past the `[`.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<Segment> {
    if cur.peek() != Some(Link::LABEL_OPEN) {
        return None;
    }

    let saved = cur.clone();
    let parsed = scan_link(cur);
    if parsed.is_none() {
        *cur = saved;
    }
    parsed
}

fn scan_link(cur: &mut Cursor<'_>) -> Option<Segment> {
    cur.bump(); // [
    let label = cur.take_until(Link::LABEL_CLOSE)?;
    cur.bump(); // ]

    if !cur.eat(Link::URL_OPEN) {
        return None;
    }
    let url = cur.take_until(Link::URL_CLOSE)?;
    cur.bump(); // )

    let url = url.trim();
    if label.is_empty() || url.is_empty() {
        return None;
    }
    if Link::is_external(url) {
        Some(Segment::linked(label, url))
    } else {
        Some(Segment::plain(label))
    }
}
