//! Page title resolution.

use std::{path::Path, str::FromStr};

use crate::{frontmatter::Frontmatter, parsing::blocks::kinds::Heading};

/// Title used when no other source yields one.
pub const UNTITLED: &str = "Untitled";

/// Text of the first body line starting with `#` (any level), else the
/// frontmatter `title`.
///
/// Scans raw lines, independent of block dispatch.
pub fn resolve_title(body: &str, frontmatter: &Frontmatter) -> Option<String> {
    body.lines()
        .find(|line| Heading::opens(line))
        .map(|line| Heading::split(line).1.to_string())
        .or_else(|| frontmatter.title())
}

/// Where a page title comes from when building page properties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TitleSource {
    /// The resolved document title, falling back to the file stem.
    #[default]
    FirstHeading,
    /// The file stem, ignoring document content.
    Filename,
    /// A fixed title.
    Custom(String),
}

impl TitleSource {
    /// Picks the title for a page given the document's resolved title and
    /// the file it came from. Ends at [`UNTITLED`] when nothing applies.
    pub fn pick(&self, resolved: Option<&str>, file: Option<&Path>) -> String {
        let stem = || {
            file.and_then(Path::file_stem)
                .and_then(|s| s.to_str())
                .map(str::to_string)
        };
        match self {
            TitleSource::FirstHeading => resolved.map(str::to_string).or_else(stem),
            TitleSource::Filename => stem(),
            TitleSource::Custom(title) => Some(title.clone()),
        }
        .unwrap_or_else(|| UNTITLED.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown title source '{0}' (expected 'first-heading' or 'filename')")]
pub struct UnknownTitleSource(pub String);

impl FromStr for TitleSource {
    type Err = UnknownTitleSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first-heading" | "first_heading" => Ok(TitleSource::FirstHeading),
            "filename" => Ok(TitleSource::Filename),
            other => Err(UnknownTitleSource(other.to_string())),
        }
    }
}
