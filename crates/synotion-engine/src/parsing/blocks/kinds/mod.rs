pub mod block_quote;
pub mod code_fence;
pub mod divider;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod table;
pub mod task_item;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use divider::Divider;
pub use heading::Heading;
pub use list::ListKind;
pub use paragraph::Paragraph;
pub use table::PipeTable;
pub use task_item::TaskItem;
