//! YAML frontmatter between leading `---` lines.
//!
//! Frontmatter is optional enrichment: anything that cannot be read as a
//! YAML mapping is treated as "no frontmatter" and the document is left
//! untouched.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_yaml::Value;

/// Why a header was not accepted as frontmatter. Never escapes [`split`].
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("opening delimiter has no closing delimiter")]
    Unterminated,
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("YAML is not a mapping")]
    NotAMapping,
    #[error("mapping key is not a scalar")]
    InvalidKey,
}

/// Parsed frontmatter keys in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Frontmatter(BTreeMap<String, Value>);

impl Frontmatter {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The `title` key rendered as text, when it holds a scalar.
    pub fn title(&self) -> Option<String> {
        scalar_to_string(self.get("title")?)
    }
}

pub const DELIMITER: &str = "---";

/// Separates frontmatter from the body.
///
/// Returns the parsed mapping and the text after the closing delimiter, or
/// an empty mapping and the original text when there is no usable header.
pub fn split(raw: &str) -> (Frontmatter, &str) {
    match try_split(raw) {
        Ok(Some((frontmatter, body))) => (frontmatter, body),
        Ok(None) => (Frontmatter::default(), raw),
        Err(e) => {
            log::debug!("Ignoring frontmatter: {e}");
            (Frontmatter::default(), raw)
        }
    }
}

fn try_split(raw: &str) -> Result<Option<(Frontmatter, &str)>, FrontmatterError> {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = text.split_inclusive('\n');

    let Some(opener) = lines.next() else {
        return Ok(None);
    };
    if !is_delimiter(opener) {
        return Ok(None);
    }

    let yaml_start = opener.len();
    let mut offset = yaml_start;
    for line in lines {
        if is_delimiter(line) {
            let frontmatter = parse_yaml(&text[yaml_start..offset])?;
            return Ok(Some((frontmatter, &text[offset + line.len()..])));
        }
        offset += line.len();
    }

    Err(FrontmatterError::Unterminated)
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

fn parse_yaml(yaml: &str) -> Result<Frontmatter, FrontmatterError> {
    if yaml.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    match serde_yaml::from_str::<Value>(yaml)? {
        Value::Null => Ok(Frontmatter::default()),
        Value::Mapping(mapping) => mapping
            .into_iter()
            .map(|(key, value)| {
                let key = scalar_to_string(&key).ok_or(FrontmatterError::InvalidKey)?;
                Ok((key, value))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(Frontmatter),
        _ => Err(FrontmatterError::NotAMapping),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_yaml_frontmatter() {
        let (fm, body) = split("---\ntitle: Test\nauthor: John\n---\n\nContent");
        assert_eq!(fm.get("title"), Some(&Value::String("Test".into())));
        assert_eq!(fm.get("author"), Some(&Value::String("John".into())));
        assert_eq!(body, "\nContent");
    }

    #[test]
    fn no_frontmatter_returns_original() {
        let raw = "No frontmatter here";
        let (fm, body) = split(raw);
        assert!(fm.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn invalid_yaml_is_ignored() {
        let raw = "---\ninvalid yaml: [unclosed\n---\n\nContent";
        let (fm, body) = split(raw);
        assert!(fm.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn unterminated_header_is_ignored() {
        let raw = "---\n# Just a divider and a heading";
        let (fm, body) = split(raw);
        assert!(fm.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn non_mapping_yaml_is_ignored() {
        let raw = "---\n- a\n- b\n---\nbody";
        let (fm, body) = split(raw);
        assert!(fm.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn empty_header_is_stripped() {
        let (fm, body) = split("---\n---\nbody");
        assert!(fm.is_empty());
        assert_eq!(body, "body");
    }

    #[test]
    fn crlf_delimiters() {
        let (fm, body) = split("---\r\ntitle: Win\r\n---\r\nbody\r\n");
        assert_eq!(fm.title().as_deref(), Some("Win"));
        assert_eq!(body, "body\r\n");
    }

    #[test]
    fn structured_values_are_kept() {
        let (fm, _) = split("---\ntags: [a, b]\nmeta:\n  draft: true\n---\n");
        assert!(matches!(fm.get("tags"), Some(Value::Sequence(s)) if s.len() == 2));
        assert!(matches!(fm.get("meta"), Some(Value::Mapping(_))));
    }

    #[test]
    fn keys_iterate_sorted() {
        let (fm, _) = split("---\nzeta: 1\nalpha: 2\n---\n");
        assert_eq!(fm.iter().map(|(k, _)| k).collect::<Vec<_>>(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn scalar_titles_render_as_text() {
        let (fm, _) = split("---\ntitle: 2024\n---\n");
        assert_eq!(fm.title().as_deref(), Some("2024"));
        let (fm, _) = split("---\ntitle: [not, scalar]\n---\n");
        assert_eq!(fm.title(), None);
    }

    #[test]
    fn delimiter_must_be_first_line() {
        let raw = "intro\n---\ntitle: x\n---\n";
        let (fm, body) = split(raw);
        assert!(fm.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn numeric_keys_become_strings() {
        let (fm, _) = split("---\n1: one\n---\n");
        assert_eq!(fm.get("1"), Some(&Value::String("one".into())));
    }
}
