//! UtilityOption - one copyable class and what it is for

/// A single entry in a utility catalogue
///
/// Identity is the class name; it doubles as the iteration key and the text
/// placed on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtilityOption {
    pub class_name: &'static str,
    pub description: &'static str,
}

impl UtilityOption {
    pub const fn new(class_name: &'static str, description: &'static str) -> Self {
        Self {
            class_name,
            description,
        }
    }
}

/// A headed run of options, e.g. "Flex grow" on the sizing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtilityGroup {
    pub heading: &'static str,
    pub options: &'static [UtilityOption],
}

impl UtilityGroup {
    pub const fn new(heading: &'static str, options: &'static [UtilityOption]) -> Self {
        Self { heading, options }
    }
}
