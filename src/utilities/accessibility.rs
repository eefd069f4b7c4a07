//! Accessibility utilities - screen reader visibility

use super::class::utility_class;

utility_class! {
    ScreenReader, axis = "visibility", title = "Visibility", default = Only {
        Only => "sr-only", "sr-only",
            "position: absolute; width: 1px; height: 1px; padding: 0; margin: -1px; overflow: hidden; clip: rect(0, 0, 0, 0); white-space: nowrap; border-width: 0;",
            "Hide visually, keep it available to screen readers";
        NotOnly => "not-sr-only", "not-sr-only",
            "position: static; width: auto; height: auto; padding: 0; margin: 0; overflow: visible; clip: auto; white-space: normal;",
            "Undo sr-only, visible to everyone";
    }
}

impl ScreenReader {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::NotOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::UtilityClass;

    #[test]
    fn sr_only_collapses_the_box() {
        let css = ScreenReader::Only.to_css();
        assert!(css.contains("width: 1px;"));
        assert!(css.contains("clip: rect(0, 0, 0, 0);"));
        assert!(!ScreenReader::Only.is_visible());
        assert!(ScreenReader::NotOnly.is_visible());
    }
}
