use crate::parsing::inline::RichText;

/// Heading depth supported by the destination: `#`, `##`, and everything
/// deeper collapsed into the third level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Maps a count of leading `#` markers to a level.
    pub fn from_markers(count: usize) -> Self {
        match count {
            0 | 1 => Self::H1,
            2 => Self::H2,
            _ => Self::H3,
        }
    }
}

/// One table cell.
pub type Cell = RichText;

/// One table row; always exactly as wide as its table.
pub type Row = Vec<Cell>;

/// A rectangular table whose first row is the column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    width: usize,
    rows: Vec<Row>,
}

impl Table {
    /// Builds a table whose width is fixed by the first row. Later rows are
    /// padded with empty cells or truncated to that width.
    ///
    /// Returns `None` when there are no rows.
    pub fn from_rows(rows: Vec<Row>) -> Option<Self> {
        let width = rows.first()?.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize_with(width, RichText::default);
                row
            })
            .collect();
        Some(Self { width, rows })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn has_column_header(&self) -> bool {
        true
    }

    pub fn has_row_header(&self) -> bool {
        false
    }
}

/// A content block destined for the remote document service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: HeadingLevel, text: RichText },
    Paragraph { text: RichText },
    BulletedListItem { text: RichText },
    NumberedListItem { text: RichText },
    Quote { text: RichText },
    ToDo { text: RichText, checked: bool },
    Divider,
    Code { language: String, content: String },
    Table(Table),
}

impl Block {
    /// The destination's type discriminator for this block.
    pub fn type_name(&self) -> &'static str {
        match self {
            Block::Heading {
                level: HeadingLevel::H1,
                ..
            } => "heading_1",
            Block::Heading {
                level: HeadingLevel::H2,
                ..
            } => "heading_2",
            Block::Heading {
                level: HeadingLevel::H3,
                ..
            } => "heading_3",
            Block::Paragraph { .. } => "paragraph",
            Block::BulletedListItem { .. } => "bulleted_list_item",
            Block::NumberedListItem { .. } => "numbered_list_item",
            Block::Quote { .. } => "quote",
            Block::ToDo { .. } => "to_do",
            Block::Divider => "divider",
            Block::Code { .. } => "code",
            Block::Table(_) => "table",
        }
    }

    /// The block's rich text, for kinds that carry exactly one.
    pub fn rich_text(&self) -> Option<&RichText> {
        match self {
            Block::Heading { text, .. }
            | Block::Paragraph { text }
            | Block::BulletedListItem { text }
            | Block::NumberedListItem { text }
            | Block::Quote { text }
            | Block::ToDo { text, .. } => Some(text),
            Block::Divider | Block::Code { .. } | Block::Table(_) => None,
        }
    }

    /// Visible text of the block; table cells are joined with ` | ` and rows
    /// with newlines.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Divider => String::new(),
            Block::Code { content, .. } => content.clone(),
            Block::Table(table) => table
                .rows()
                .iter()
                .map(|row| {
                    row.iter()
                        .map(RichText::plain_text)
                        .collect::<Vec<_>>()
                        .join(" | ")
                })
                .collect::<Vec<_>>()
                .join("\n"),
            other => other
                .rich_text()
                .map(RichText::plain_text)
                .unwrap_or_default(),
        }
    }
}

/// What a block parser produced from the lines it examined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consumed {
    /// Blocks produced; may be empty (e.g. a table made only of separators).
    pub blocks: Vec<Block>,
    /// Number of source lines examined, starting at the parser's start index.
    pub lines: usize,
}

impl Consumed {
    pub fn one(block: Block, lines: usize) -> Self {
        Self {
            blocks: vec![block],
            lines,
        }
    }

    pub fn none(lines: usize) -> Self {
        Self {
            blocks: vec![],
            lines,
        }
    }
}
