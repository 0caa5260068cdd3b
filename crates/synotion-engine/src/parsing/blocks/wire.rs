//! Serialization of [`Block`] into the remote service's block objects.
//!
//! Every block is `{"type": <name>, <name>: <payload>}` where `<name>` is
//! [`Block::type_name`].

use serde::{Serialize, Serializer, ser::SerializeMap};

use super::types::{Block, Row, Table};
use crate::parsing::inline::RichText;

#[derive(Serialize)]
struct TextPayload<'a> {
    rich_text: &'a RichText,
}

#[derive(Serialize)]
struct ToDoPayload<'a> {
    rich_text: &'a RichText,
    checked: bool,
}

#[derive(Serialize)]
struct CodePayload<'a> {
    rich_text: RichText,
    language: &'a str,
}

#[derive(Serialize)]
struct EmptyPayload {}

#[derive(Serialize)]
struct TablePayload<'a> {
    table_width: usize,
    has_column_header: bool,
    has_row_header: bool,
    children: Vec<TableRowBlock<'a>>,
}

struct TableRowBlock<'a>(&'a Row);

#[derive(Serialize)]
struct TableRowPayload<'a> {
    cells: &'a Row,
}

impl Serialize for TableRowBlock<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "table_row")?;
        map.serialize_entry("table_row", &TableRowPayload { cells: self.0 })?;
        map.end()
    }
}

impl<'a> TablePayload<'a> {
    fn new(table: &'a Table) -> Self {
        Self {
            table_width: table.width(),
            has_column_header: table.has_column_header(),
            has_row_header: table.has_row_header(),
            children: table.rows().iter().map(TableRowBlock).collect(),
        }
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name = self.type_name();
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", name)?;
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph { text }
            | Block::BulletedListItem { text }
            | Block::NumberedListItem { text }
            | Block::Quote { text } => {
                map.serialize_entry(name, &TextPayload { rich_text: text })?
            }
            Block::ToDo { text, checked } => map.serialize_entry(
                name,
                &ToDoPayload {
                    rich_text: text,
                    checked: *checked,
                },
            )?,
            Block::Divider => map.serialize_entry(name, &EmptyPayload {})?,
            Block::Code { language, content } => map.serialize_entry(
                name,
                &CodePayload {
                    rich_text: RichText::plain(content.as_str()),
                    language,
                },
            )?,
            Block::Table(table) => map.serialize_entry(name, &TablePayload::new(table))?,
        }
        map.end()
    }
}
