//! Playground - selectable axes rendered into a preview and a markup string
//!
//! - `spec`: static description of axes and flags per page
//! - `state`: the Selection state machine
//! - `markup`: ClassList/Node, the single derived output
//! - `preview`, `component`: Dioxus rendering

mod component;
pub mod markup;
mod preview;
pub mod spec;
pub mod state;

pub use component::Playground;
pub use markup::{ClassList, Node};
pub use spec::{AxisSpec, FlagSpec, PlaygroundSpec};
pub use state::Selection;
