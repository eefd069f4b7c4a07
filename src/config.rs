//! SiteConfig - read once from the URL and provided as context

use crate::clipboard::FeedbackDelay;

pub const SITE_NAME: &str = "Utility Docs";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SiteConfig {
    /// `?debug=1` shows serialized playground state under each preview
    pub debug: bool,
    /// Badge delay for copies outside a topic page
    pub default_delay: FeedbackDelay,
}

impl SiteConfig {
    pub fn from_location() -> Self {
        let debug = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .and_then(|q| web_sys::UrlSearchParams::new_with_str(&q).ok())
            .and_then(|params| params.get("debug"));
        Self {
            debug: flag_enabled(debug.as_deref()),
            ..Self::default()
        }
    }
}

/// `debug`, `debug=1`, `debug=true` and `debug=yes` turn a flag on
fn flag_enabled(value: Option<&str>) -> bool {
    match value {
        Some(v) => matches!(v.trim().to_ascii_lowercase().as_str(), "" | "1" | "true" | "yes"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_values() {
        assert!(flag_enabled(Some("1")));
        assert!(flag_enabled(Some("")));
        assert!(flag_enabled(Some("TRUE")));
        assert!(!flag_enabled(Some("0")));
        assert!(!flag_enabled(Some("off")));
        assert!(!flag_enabled(None));
    }

    #[test]
    fn defaults() {
        let config = SiteConfig::default();
        assert!(!config.debug);
        assert_eq!(config.default_delay, FeedbackDelay::Long);
    }
}
