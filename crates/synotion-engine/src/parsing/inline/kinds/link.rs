/// Markdown link syntax `[label](url)` with owned delimiters.
pub struct Link;

impl Link {
    pub const LABEL_OPEN: u8 = b'[';
    pub const LABEL_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';

    /// Schemes the destination service can resolve as hyperlinks.
    pub const EXTERNAL_SCHEMES: [&'static str; 2] = ["http://", "https://"];

    /// Whether `url` points somewhere the destination can link to.
    ///
    /// Intra-document anchors (`#section`), `mailto:` and relative paths are
    /// not resolvable there; their label is kept and the target dropped.
    pub fn is_external(url: &str) -> bool {
        Self::EXTERNAL_SCHEMES.iter().any(|scheme| {
            url.as_bytes()
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme.as_bytes()))
        })
    }
}
