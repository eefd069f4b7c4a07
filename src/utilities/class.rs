//! UtilityClass - macro for closed class vocabularies
//!
//! Generates a fieldless enum whose variants carry, side by side, the class a
//! visitor copies and the inline CSS the preview applies in its place. Keeping
//! both in one table is what keeps the preview and the markup in agreement.

use serde::Serialize;

use crate::catalog::UtilityOption;

/// One selectable value on an axis, as the playground sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Choice {
    /// Class (or raw value) written into the markup
    pub value: &'static str,
    /// Short button text
    pub label: &'static str,
    /// Inline declarations reproducing `value` in the preview
    #[serde(skip)]
    pub css: &'static str,
    /// One-line explanation, shown as the button tooltip
    #[serde(skip)]
    pub description: &'static str,
}

/// A closed vocabulary of utility classes for one axis
pub trait UtilityClass: Copy + PartialEq + 'static {
    /// Axis name used as the selection key
    const AXIS: &'static str;
    /// Heading shown above the axis controls
    const TITLE: &'static str;
    const ALL: &'static [Self];
    const CHOICES: &'static [Choice];
    const OPTIONS: &'static [UtilityOption];
    const DEFAULT: Self;
    const DEFAULT_INDEX: usize;

    fn index(&self) -> usize;

    fn choice(&self) -> Choice {
        Self::CHOICES[self.index()]
    }

    fn class(&self) -> &'static str {
        self.choice().value
    }

    fn label(&self) -> &'static str {
        self.choice().label
    }

    fn to_css(&self) -> &'static str {
        self.choice().css
    }

    fn from_class(class: &str) -> Option<Self> {
        Self::CHOICES
            .iter()
            .position(|c| c.value == class)
            .map(|i| Self::ALL[i])
    }
}

/// Creates a utility class enum with its rendering table.
///
/// # Example
/// ```ignore
/// utility_class! {
///     /// Border widths
///     BorderWidth, axis = "width", title = "Width", default = Thin {
///         Thin => "border", "1px", "border-width: 1px;", "1px border";
///         Thick => "border-4", "4px", "border-width: 4px;", "4px border";
///     }
/// }
/// assert_eq!(BorderWidth::Thick.class(), "border-4");
/// ```
macro_rules! utility_class {
    (
        $(#[$meta:meta])*
        $name:ident, axis = $axis:literal, title = $title:literal, default = $default:ident {
            $( $variant:ident => $class:literal, $label:literal, $css:literal, $desc:literal; )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
        }

        impl $crate::utilities::UtilityClass for $name {
            const AXIS: &'static str = $axis;
            const TITLE: &'static str = $title;
            const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];
            const CHOICES: &'static [$crate::utilities::Choice] = &[
                $( $crate::utilities::Choice { value: $class, label: $label, css: $css, description: $desc }, )+
            ];
            const OPTIONS: &'static [$crate::catalog::UtilityOption] = &[
                $( $crate::catalog::UtilityOption::new($class, $desc), )+
            ];
            const DEFAULT: Self = Self::$default;
            const DEFAULT_INDEX: usize = Self::$default as usize;

            fn index(&self) -> usize {
                *self as usize
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::utilities::UtilityClass::class(self))
            }
        }
    };
}

pub(crate) use utility_class;

#[cfg(test)]
mod tests {
    use super::*;

    utility_class! {
        TestSpacing, axis = "spacing", title = "Spacing", default = Medium {
            Small => "p-1", "1", "padding: 0.25rem;", "Tight";
            Medium => "p-4", "4", "padding: 1rem;", "Comfortable";
            Large => "p-8", "8", "padding: 2rem;", "Roomy";
        }
    }

    #[test]
    fn tables_line_up() {
        assert_eq!(TestSpacing::ALL.len(), TestSpacing::CHOICES.len());
        assert_eq!(TestSpacing::ALL.len(), TestSpacing::OPTIONS.len());
        for v in TestSpacing::ALL {
            assert_eq!(v.class(), TestSpacing::OPTIONS[v.index()].class_name);
        }
    }

    #[test]
    fn default_index_matches_default() {
        assert_eq!(TestSpacing::DEFAULT, TestSpacing::Medium);
        assert_eq!(TestSpacing::DEFAULT_INDEX, 1);
        assert_eq!(TestSpacing::default(), TestSpacing::Medium);
    }

    #[test]
    fn lookup_by_class() {
        assert_eq!(TestSpacing::from_class("p-8"), Some(TestSpacing::Large));
        assert_eq!(TestSpacing::from_class("p-3"), None);
    }

    #[test]
    fn display_is_class() {
        assert_eq!(TestSpacing::Small.to_string(), "p-1");
        assert_eq!(TestSpacing::Small.to_css(), "padding: 0.25rem;");
        assert_eq!(TestSpacing::Large.choice().description, "Roomy");
        assert_eq!(TestSpacing::OPTIONS[2].description, "Roomy");
    }
}
