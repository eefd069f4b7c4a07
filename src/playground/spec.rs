//! Playground configuration - which axes and flags a page offers

use std::fmt;

use super::markup::Node;
use super::state::Selection;
use crate::utilities::{Choice, UtilityClass};

/// One independent dimension of choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSpec {
    pub name: &'static str,
    pub title: &'static str,
    pub choices: &'static [Choice],
    /// Index into `choices` selected at mount
    pub default: usize,
}

impl AxisSpec {
    /// Axis over a whole utility vocabulary, using its own default
    pub const fn of<T: UtilityClass>() -> Self {
        Self {
            name: T::AXIS,
            title: T::TITLE,
            choices: T::CHOICES,
            default: T::DEFAULT_INDEX,
        }
    }

    pub const fn titled(mut self, title: &'static str) -> Self {
        self.title = title;
        self
    }

    pub fn position(&self, value: &str) -> Option<usize> {
        self.choices.iter().position(|c| c.value == value)
    }
}

/// A boolean toggle that adds or removes something from the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub default: bool,
}

impl FlagSpec {
    pub const fn new(name: &'static str, label: &'static str, default: bool) -> Self {
        Self {
            name,
            label,
            default,
        }
    }
}

/// Full description of one playground
///
/// `render` derives the element tree from a selection. It is the single
/// source both the preview and the markup string are produced from.
pub struct PlaygroundSpec {
    pub id: &'static str,
    pub axes: &'static [AxisSpec],
    pub flags: &'static [FlagSpec],
    pub render: fn(&Selection) -> Node,
    /// Extra elements shown beside the preview, styled from the same
    /// selection but left out of the markup
    pub samples: Option<fn(&Selection) -> Vec<Node>>,
}

impl PlaygroundSpec {
    pub fn axis(&self, name: &str) -> Option<(usize, &'static AxisSpec)> {
        self.axes.iter().enumerate().find(|(_, a)| a.name == name)
    }

    pub fn flag(&self, name: &str) -> Option<usize> {
        self.flags.iter().position(|f| f.name == name)
    }
}

impl PartialEq for PlaygroundSpec {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PlaygroundSpec {}

impl fmt::Debug for PlaygroundSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaygroundSpec")
            .field("id", &self.id)
            .field("axes", &self.axes.len())
            .field("flags", &self.flags.len())
            .finish()
    }
}
