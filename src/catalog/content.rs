//! TopicContent - everything a topic page renders besides its chrome

use super::option::UtilityGroup;
use super::topic::Topic;
use crate::clipboard::FeedbackDelay;
use crate::playground::PlaygroundSpec;

/// A real-world usage card
///
/// `copy_text` is what lands on the clipboard; it is usually the class string
/// and sometimes the whole snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleSnippet {
    pub title: &'static str,
    pub note: &'static str,
    pub copy_text: &'static str,
    pub code: &'static str,
}

impl ExampleSnippet {
    pub const fn new(
        title: &'static str,
        note: &'static str,
        copy_text: &'static str,
        code: &'static str,
    ) -> Self {
        Self {
            title,
            note,
            copy_text,
            code,
        }
    }

    /// Card whose copy text is the code itself
    pub const fn code(title: &'static str, code: &'static str) -> Self {
        Self::new(title, "", code, code)
    }

    pub const fn noted(title: &'static str, note: &'static str, code: &'static str) -> Self {
        Self::new(title, note, code, code)
    }
}

/// Examples filed under the utility they demonstrate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleGroup {
    pub class_name: &'static str,
    pub examples: &'static [ExampleSnippet],
}

/// Benefits, use cases and pitfalls for one class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsageNotes {
    pub class_name: &'static str,
    pub benefits: &'static [&'static str],
    pub use_cases: &'static [&'static str],
    pub pitfalls: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tip {
    pub title: &'static str,
    pub body: &'static str,
}

impl Tip {
    pub const fn new(title: &'static str, body: &'static str) -> Self {
        Self { title, body }
    }
}

/// One box in a [`CyclingDemo`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoItem {
    pub label: &'static str,
    pub color: &'static str,
    pub grow: u8,
    pub shrink: u8,
    /// `flex-basis` per frame; a single value keeps the item fixed
    pub bases: &'static [&'static str],
}

impl DemoItem {
    pub const fn new(label: &'static str, color: &'static str, bases: &'static [&'static str]) -> Self {
        Self {
            label,
            color,
            grow: 1,
            shrink: 1,
            bases,
        }
    }

    pub const fn rigid(mut self) -> Self {
        self.shrink = 0;
        self
    }

    pub const fn no_grow(mut self) -> Self {
        self.grow = 0;
        self
    }

    pub fn basis(&self, frame: usize) -> &'static str {
        match self.bases.len() {
            0 => "auto",
            n => self.bases[frame % n],
        }
    }
}

/// A flex row whose items step through basis values on a timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclingDemo {
    pub title: &'static str,
    pub interval_ms: u32,
    /// Fixed container width, so shrinking can be observed
    pub width: Option<&'static str>,
    pub items: &'static [DemoItem],
}

impl CyclingDemo {
    /// Frames before the pattern repeats
    pub fn frame_count(&self) -> usize {
        self.items.iter().map(|i| i.bases.len()).max().unwrap_or(1).max(1)
    }

    pub fn bases(&self, frame: usize) -> Vec<&'static str> {
        self.items.iter().map(|i| i.basis(frame)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopicContent {
    pub topic: Topic,
    pub intro: &'static str,
    pub groups: &'static [UtilityGroup],
    /// Short "when to reach for it" cards above the playground
    pub guidance: &'static [Tip],
    pub playground: &'static PlaygroundSpec,
    pub cycling: &'static [CyclingDemo],
    pub examples: &'static [ExampleSnippet],
    pub example_groups: &'static [ExampleGroup],
    pub notes: &'static [UsageNotes],
    pub tips: &'static [Tip],
    pub delay: FeedbackDelay,
}

impl TopicContent {
    /// Every class the utility grid offers, in display order
    pub fn class_names(&self) -> impl Iterator<Item = &'static str> {
        self.groups
            .iter()
            .flat_map(|g| g.options.iter())
            .map(|o| o.class_name)
    }
}
