use crate::parsing::{
    blocks::Block,
    inline::{RichText, Segment},
};

/// One line per block: `<type_name>: <text>` with kind-specific detail.
///
/// Linked segments render as `[content](url)`; table rows become separate
/// indented lines.
pub fn normalize(blocks: &[Block]) -> Vec<String> {
    blocks.iter().flat_map(block_lines).collect()
}

fn block_lines(block: &Block) -> Vec<String> {
    let name = block.type_name();
    match block {
        Block::Divider => vec![name.to_string()],
        Block::ToDo { text, checked } => {
            let mark = if *checked { "x" } else { " " };
            vec![format!("{name}[{mark}]: {}", rich(text))]
        }
        Block::Code { language, content } => {
            vec![format!("{name}({language}): {}", content.escape_debug())]
        }
        Block::Table(table) => {
            let mut lines = vec![format!("{name}({}x{})", table.rows().len(), table.width())];
            lines.extend(table.rows().iter().map(|row| {
                let cells = row.iter().map(rich).collect::<Vec<_>>();
                format!("  | {} |", cells.join(" | "))
            }));
            lines
        }
        other => {
            let text = other.rich_text().map(rich).unwrap_or_default();
            vec![format!("{name}: {text}")]
        }
    }
}

fn rich(text: &RichText) -> String {
    text.segments().iter().map(segment).collect()
}

fn segment(segment: &Segment) -> String {
    match &segment.link {
        Some(url) => format!("[{}]({url})", segment.content),
        None => segment.content.clone(),
    }
}
