use crate::parsing::{
    blocks::{
        classify::{LineKind, MarkdownLineClassifier},
        types::{Block, Consumed},
    },
    inline::format_inline,
    lines::SourceLines,
};

/// Paragraph block: the default when no other opener matches.
///
/// A paragraph always takes the line it starts on, then keeps going while
/// following lines would themselves classify as paragraph text. Lines are
/// trimmed and joined with single spaces before inline formatting.
pub struct Paragraph;

impl Paragraph {
    pub const JOINER: &'static str = " ";

    pub fn parse(
        lines: &SourceLines<'_>,
        start: usize,
        classifier: &MarkdownLineClassifier,
    ) -> Consumed {
        let Some(first) = lines.get(start) else {
            return Consumed::none(0);
        };

        let continuation = (start + 1..lines.len())
            .take_while(|&idx| {
                lines.get(idx).is_some_and(|line| {
                    classifier.classify(line, lines.get(idx + 1)) == LineKind::Paragraph
                })
            })
            .count();

        let text = std::iter::once(first)
            .chain(lines.rest(start + 1)[..continuation].iter().copied())
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(Self::JOINER);

        Consumed::one(
            Block::Paragraph {
                text: format_inline(&text),
            },
            1 + continuation,
        )
    }
}
