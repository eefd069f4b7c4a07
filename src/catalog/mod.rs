//! Catalog - topics, their utility classes and page content
//!
//! Everything here is static data; [`content`] maps a [`Topic`] to the
//! [`TopicContent`] its page renders.

mod builtins;
mod content;
mod option;
mod topic;

pub use builtins::content;
pub use content::{CyclingDemo, ExampleSnippet, Tip, TopicContent, UsageNotes};
pub use option::{UtilityGroup, UtilityOption};
pub use topic::{Section, Topic};
