//! Selection - the per-playground state machine
//!
//! Holds exactly one choice index per axis plus one bool per flag. Every
//! mutation replaces a single slot; nothing cascades.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use super::spec::PlaygroundSpec;
use crate::utilities::{Choice, UtilityClass};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("no axis named `{0}`")]
    UnknownAxis(String),
    #[error("`{value}` is not an option on axis `{axis}`")]
    UnknownValue { axis: String, value: String },
    #[error("no flag named `{0}`")]
    UnknownFlag(String),
    #[error("index {index} out of range for `{axis}`")]
    OutOfRange { axis: String, index: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    spec: &'static PlaygroundSpec,
    picks: Vec<usize>,
    flags: Vec<bool>,
}

/// Serializable view of a selection, keyed by axis and flag name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub playground: &'static str,
    pub axes: BTreeMap<&'static str, &'static str>,
    pub flags: BTreeMap<&'static str, bool>,
}

impl Selection {
    /// Default combination for `spec`
    pub fn new(spec: &'static PlaygroundSpec) -> Self {
        Self {
            spec,
            picks: spec.axes.iter().map(|a| a.default).collect(),
            flags: spec.flags.iter().map(|f| f.default).collect(),
        }
    }

    /// Index of the current choice on axis `axis`
    pub fn picked(&self, axis: usize) -> usize {
        self.picks[axis]
    }

    pub fn choice(&self, axis: &str) -> Option<Choice> {
        let (i, spec) = self.spec.axis(axis)?;
        Some(spec.choices[self.picks[i]])
    }

    pub fn value(&self, axis: &str) -> Option<&'static str> {
        self.choice(axis).map(|c| c.value)
    }

    /// Typed read of the axis named after `T`
    ///
    /// Falls back to `T::DEFAULT` when the playground has no such axis.
    pub fn get<T: UtilityClass>(&self) -> T {
        self.value(T::AXIS)
            .and_then(T::from_class)
            .unwrap_or(T::DEFAULT)
    }

    #[cfg(test)]
    pub fn set<T: UtilityClass>(&mut self, value: T) -> Result<(), SelectionError> {
        self.set_axis(T::AXIS, value.class())
    }

    pub fn set_axis(&mut self, axis: &str, value: &str) -> Result<(), SelectionError> {
        let (i, spec) = self
            .spec
            .axis(axis)
            .ok_or_else(|| SelectionError::UnknownAxis(axis.to_string()))?;
        let choice = spec
            .position(value)
            .ok_or_else(|| SelectionError::UnknownValue {
                axis: axis.to_string(),
                value: value.to_string(),
            })?;
        self.picks[i] = choice;
        Ok(())
    }

    /// Index-driven variant of [`Selection::set_axis`], used by the controls
    pub fn pick(&mut self, axis: usize, choice: usize) -> Result<(), SelectionError> {
        let spec = self.spec.axes.get(axis).ok_or(SelectionError::OutOfRange {
            axis: self.spec.id.to_string(),
            index: axis,
        })?;
        let target = spec.choices.get(choice).ok_or(SelectionError::OutOfRange {
            axis: spec.name.to_string(),
            index: choice,
        })?;
        self.set_axis(spec.name, target.value)
    }

    /// Unknown flags read as off
    pub fn flag(&self, name: &str) -> bool {
        self.spec.flag(name).is_some_and(|i| self.flags[i])
    }

    pub fn set_flag(&mut self, name: &str, on: bool) -> Result<(), SelectionError> {
        let i = self
            .spec
            .flag(name)
            .ok_or_else(|| SelectionError::UnknownFlag(name.to_string()))?;
        self.flags[i] = on;
        Ok(())
    }

    pub fn toggle(&mut self, name: &str) -> Result<(), SelectionError> {
        let on = self.flag(name);
        self.set_flag(name, !on)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            playground: self.spec.id,
            axes: self
                .spec
                .axes
                .iter()
                .zip(&self.picks)
                .map(|(a, &i)| (a.name, a.choices[i].value))
                .collect(),
            flags: self
                .spec
                .flags
                .iter()
                .zip(&self.flags)
                .map(|(f, &on)| (f.name, on))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::markup::{ClassList, Node};
    use crate::playground::spec::{AxisSpec, FlagSpec};
    use crate::utilities::{BorderColor, BorderRadius, BorderWidth, Duration};

    fn render(sel: &Selection) -> Node {
        Node::div().classes(
            ClassList::new()
                .pick(sel.get::<BorderWidth>())
                .pick(sel.get::<BorderColor>()),
        )
    }

    static SPEC: PlaygroundSpec = PlaygroundSpec {
        id: "test",
        axes: &[
            AxisSpec::of::<BorderWidth>(),
            AxisSpec::of::<BorderColor>(),
            AxisSpec::of::<BorderRadius>(),
        ],
        flags: &[FlagSpec::new("shadow", "Shadow", true)],
        render,
        samples: None,
    };

    #[test]
    fn starts_at_defaults() {
        let sel = Selection::new(&SPEC);
        assert_eq!(sel.value("width"), Some("border"));
        assert_eq!(sel.value("color"), Some("border-blue-600"));
        assert_eq!(sel.value("radius"), Some("rounded-md"));
        assert!(sel.flag("shadow"));
    }

    #[test]
    fn set_axis_replaces_only_that_axis() {
        let mut sel = Selection::new(&SPEC);
        let before = sel.snapshot();
        sel.set_axis("color", "border-red-500").unwrap();
        let after = sel.snapshot();

        assert_eq!(after.axes["color"], "border-red-500");
        for axis in ["width", "radius"] {
            assert_eq!(before.axes[axis], after.axes[axis]);
        }
        assert_eq!(before.flags, after.flags);
    }

    #[test]
    fn typed_access() {
        let mut sel = Selection::new(&SPEC);
        sel.set(BorderRadius::Full).unwrap();
        assert_eq!(sel.get::<BorderRadius>(), BorderRadius::Full);
        // not on this playground
        assert_eq!(sel.get::<Duration>(), Duration::DEFAULT);
        assert_eq!(
            sel.set(Duration::Ms300),
            Err(SelectionError::UnknownAxis("duration".into()))
        );
    }

    #[test]
    fn invalid_requests_leave_state_untouched() {
        let mut sel = Selection::new(&SPEC);
        let before = sel.clone();

        assert!(matches!(
            sel.set_axis("color", "border-pink-500"),
            Err(SelectionError::UnknownValue { .. })
        ));
        assert!(matches!(sel.pick(0, 99), Err(SelectionError::OutOfRange { .. })));
        assert!(matches!(sel.pick(7, 0), Err(SelectionError::OutOfRange { .. })));
        assert!(matches!(sel.toggle("glow"), Err(SelectionError::UnknownFlag(_))));
        assert_eq!(sel, before);
    }

    #[test]
    fn every_combination_is_reachable() {
        let mut sel = Selection::new(&SPEC);
        let mut seen = std::collections::HashSet::new();
        for w in 0..SPEC.axes[0].choices.len() {
            for c in 0..SPEC.axes[1].choices.len() {
                for r in 0..SPEC.axes[2].choices.len() {
                    sel.pick(0, w).unwrap();
                    sel.pick(1, c).unwrap();
                    sel.pick(2, r).unwrap();
                    assert_eq!((sel.picked(0), sel.picked(1), sel.picked(2)), (w, c, r));
                    seen.insert(sel.snapshot().axes);
                }
            }
        }
        assert_eq!(seen.len(), 4 * 8 * 5);
    }

    #[test]
    fn toggle_flips_flag() {
        let mut sel = Selection::new(&SPEC);
        sel.toggle("shadow").unwrap();
        assert!(!sel.flag("shadow"));
        sel.toggle("shadow").unwrap();
        assert!(sel.flag("shadow"));
        assert!(!sel.flag("missing"));
    }

    #[test]
    fn snapshot_serializes() {
        let sel = Selection::new(&SPEC);
        let json = serde_json::to_value(sel.snapshot()).unwrap();
        assert_eq!(json["playground"], "test");
        assert_eq!(json["axes"]["width"], "border");
        assert_eq!(json["flags"]["shadow"], true);
    }
}
