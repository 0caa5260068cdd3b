use std::path::Path;

use serde::Serialize;

use crate::{
    error::ConvertError,
    frontmatter::{self, Frontmatter},
    parsing::{self, blocks::Block},
    title::{TitleSource, resolve_title},
};

const BOM: char = '\u{feff}';

/// A converted document: the page body, its metadata and its title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub title: Option<String>,
    pub frontmatter: Frontmatter,
    #[serde(rename = "children")]
    pub blocks: Vec<Block>,
}

impl Conversion {
    /// Page title under the given fallback policy.
    pub fn title_or(&self, source: &TitleSource, file: Option<&Path>) -> String {
        source.pick(self.title.as_deref(), file)
    }
}

/// Converts a markdown document.
///
/// Never fails on malformed markdown; an error means the block dispatcher
/// itself faulted and no blocks are returned.
pub fn convert(markdown: &str) -> Result<Conversion, ConvertError> {
    let markdown = markdown.strip_prefix(BOM).unwrap_or(markdown);
    let (frontmatter, body) = frontmatter::split(markdown);
    let dispatched = parsing::parse_body(body)?;
    let title = resolve_title(body, &frontmatter);

    log::debug!(
        "Converted {} line(s) into {} block(s), {} frontmatter key(s), title: {}",
        dispatched.line_count,
        dispatched.blocks.len(),
        frontmatter.len(),
        title.as_deref().unwrap_or("<none>"),
    );

    Ok(Conversion {
        title,
        frontmatter,
        blocks: dispatched.blocks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{blocks::HeadingLevel, inline::RichText};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty_document() {
        let page = convert("").unwrap();
        assert!(page.blocks.is_empty());
        assert!(page.frontmatter.is_empty());
        assert_eq!(page.title, None);
    }

    #[test]
    fn frontmatter_is_not_parsed_as_blocks() {
        let page = convert("---\ntitle: Meta\n---\n\nBody text").unwrap();
        assert_eq!(
            page.blocks,
            vec![Block::Paragraph {
                text: RichText::plain("Body text")
            }]
        );
        assert_eq!(page.title.as_deref(), Some("Meta"));
    }

    #[test]
    fn unterminated_frontmatter_becomes_divider() {
        let page = convert("---\n# Heading").unwrap();
        assert_eq!(
            page.blocks,
            vec![
                Block::Divider,
                Block::Heading {
                    level: HeadingLevel::H1,
                    text: RichText::plain("Heading")
                }
            ]
        );
    }

    #[test]
    fn title_or_uses_resolved_title_first() {
        let page = convert("# Heading").unwrap();
        assert_eq!(
            page.title_or(&TitleSource::FirstHeading, Some(Path::new("doc.md"))),
            "Heading"
        );
        assert_eq!(
            page.title_or(&TitleSource::Filename, Some(Path::new("doc.md"))),
            "doc"
        );
    }

    #[test]
    fn serializes_as_page_payload() {
        let page = convert("---\ntags: [a]\n---\n# T\n---").unwrap();
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({
                "title": "T",
                "frontmatter": { "tags": ["a"] },
                "children": [
                    {
                        "type": "heading_1",
                        "heading_1": {
                            "rich_text": [
                                { "type": "text", "text": { "content": "T" } }
                            ]
                        }
                    },
                    { "type": "divider", "divider": {} }
                ]
            })
        );
    }

    #[test]
    fn leading_bom_is_not_body_text() {
        let page = convert("\u{feff}# T\nbody").unwrap();
        assert_eq!(page.title.as_deref(), Some("T"));
        assert_eq!(
            page.blocks[0],
            Block::Heading {
                level: HeadingLevel::H1,
                text: RichText::plain("T")
            }
        );

        let page = convert("\u{feff}---\ntitle: Meta\n---\ntext").unwrap();
        assert_eq!(page.title.as_deref(), Some("Meta"));
        assert_eq!(
            page.blocks,
            vec![Block::Paragraph {
                text: RichText::plain("text")
            }]
        );
    }

    #[test]
    fn conversion_is_deterministic() {
        let md = "---\ntitle: x\n---\n# A\n- b\n|c|d|\n|-|-|\n|1|2|\n```rust\nfn f() {}\n```";
        assert_eq!(convert(md).unwrap(), convert(md).unwrap());
    }
}
