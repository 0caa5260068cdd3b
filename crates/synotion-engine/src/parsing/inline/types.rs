use serde::{Serialize, Serializer, ser::SerializeMap};

/// A run of literal text, optionally carrying a hyperlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The visible text of the run.
    pub content: String,
    /// Target URL when the run is a resolvable link.
    pub link: Option<String>,
}

impl Segment {
    /// A segment with no hyperlink.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            link: None,
        }
    }

    /// A segment linking to `url`.
    pub fn linked(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            link: Some(url.into()),
        }
    }
}

/// Ordered rich-text segments.
///
/// Never empty: constructors fall back to a single plain segment holding the
/// literal source text (which may itself be empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RichText(Vec<Segment>);

impl RichText {
    /// One unlinked segment holding `text` verbatim.
    pub fn plain(text: impl Into<String>) -> Self {
        Self(vec![Segment::plain(text)])
    }

    /// Wraps `segments`, substituting `fallback` as a single plain segment
    /// when there are none.
    pub fn from_segments(segments: Vec<Segment>, fallback: &str) -> Self {
        if segments.is_empty() {
            Self::plain(fallback)
        } else {
            Self(segments)
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Concatenated visible text of all segments.
    pub fn plain_text(&self) -> String {
        self.0.iter().map(|s| s.content.as_str()).collect()
    }
}

impl Default for RichText {
    fn default() -> Self {
        Self::plain("")
    }
}

// Wire shape: {"type": "text", "text": {"content": ..., "link": {"url": ...}}}
impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Link<'a> {
            url: &'a str,
        }

        #[derive(Serialize)]
        struct Text<'a> {
            content: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            link: Option<Link<'a>>,
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "text")?;
        map.serialize_entry(
            "text",
            &Text {
                content: &self.content,
                link: self.link.as_deref().map(|url| Link { url }),
            },
        )?;
        map.end()
    }
}

impl Serialize for RichText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}
