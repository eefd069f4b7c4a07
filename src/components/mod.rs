//! Shared building blocks for topic pages and the site shell

mod code_block;
mod example_card;
mod notes;
mod shell;
mod utility_grid;

pub use code_block::CodeBlock;
pub use example_card::{CopyableCode, ExampleCard};
pub use notes::{TipList, UsageNotesCard};
pub use shell::{SectionNav, Shell};
pub use utility_grid::UtilityGrid;
