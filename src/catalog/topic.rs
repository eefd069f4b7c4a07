//! Section and Topic - the closed set of documented utility pages

use std::fmt;

use crate::Route;

/// Top-level grouping shown on the landing page and in the top bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Borders,
    Transforms,
    Flexbox,
    Grid,
    Alignment,
    Accessibility,
}

impl Section {
    pub const ALL: &[Self] = &[
        Self::Borders,
        Self::Transforms,
        Self::Flexbox,
        Self::Grid,
        Self::Alignment,
        Self::Accessibility,
    ];

    /// First path segment under `/utilities/`
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Borders => "border",
            Self::Transforms => "transform",
            Self::Flexbox => "flex",
            Self::Grid => "grid",
            Self::Alignment => "justify",
            Self::Accessibility => "accessibility",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Borders => "Borders",
            Self::Transforms => "Transforms",
            Self::Flexbox => "Flexbox",
            Self::Grid => "Grid",
            Self::Alignment => "Alignment",
            Self::Accessibility => "Accessibility",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Borders => "Width, Color, Style",
            Self::Transforms => "Translate, Skew",
            Self::Flexbox => "Direction, Wrap, Basis, Sizing",
            Self::Grid => "Gap",
            Self::Alignment => "Justify items, Justify self",
            Self::Accessibility => "Screen Readers",
        }
    }

    /// Class copied when the landing demo for this section is clicked
    pub fn demo_class(&self) -> &'static str {
        match self {
            Self::Borders => "rounded-lg",
            Self::Transforms => "translate-x-4",
            Self::Flexbox => "flex-1",
            Self::Grid => "grid-cols-3",
            Self::Alignment => "justify-center",
            Self::Accessibility => "sr-only",
        }
    }

    pub fn topics(&self) -> &'static [Topic] {
        match self {
            Self::Borders => &[Topic::BorderColor, Topic::BorderStyle],
            Self::Transforms => &[Topic::Skew, Topic::Translate],
            Self::Flexbox => &[
                Topic::FlexDirection,
                Topic::FlexBasis,
                Topic::FlexWrap,
                Topic::FlexSizing,
            ],
            Self::Grid => &[Topic::GridGap],
            Self::Alignment => &[Topic::JustifyItems, Topic::JustifySelf],
            Self::Accessibility => &[Topic::ScreenReaders],
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.slug() == slug)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One documented utility page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    BorderColor,
    BorderStyle,
    Skew,
    Translate,
    FlexDirection,
    FlexWrap,
    FlexBasis,
    FlexSizing,
    GridGap,
    JustifyItems,
    JustifySelf,
    ScreenReaders,
}

impl Topic {
    #[cfg(test)]
    pub const ALL: &[Self] = &[
        Self::BorderColor,
        Self::BorderStyle,
        Self::Skew,
        Self::Translate,
        Self::FlexDirection,
        Self::FlexWrap,
        Self::FlexBasis,
        Self::FlexSizing,
        Self::GridGap,
        Self::JustifyItems,
        Self::JustifySelf,
        Self::ScreenReaders,
    ];

    pub fn section(&self) -> Section {
        match self {
            Self::BorderColor | Self::BorderStyle => Section::Borders,
            Self::Skew | Self::Translate => Section::Transforms,
            Self::FlexDirection | Self::FlexWrap | Self::FlexBasis | Self::FlexSizing => {
                Section::Flexbox
            }
            Self::GridGap => Section::Grid,
            Self::JustifyItems | Self::JustifySelf => Section::Alignment,
            Self::ScreenReaders => Section::Accessibility,
        }
    }

    /// Second path segment under `/utilities/<section>/`
    pub fn slug(&self) -> &'static str {
        match self {
            Self::BorderColor => "color",
            Self::BorderStyle => "style",
            Self::Skew => "skew",
            Self::Translate => "translate",
            Self::FlexDirection => "direction",
            Self::FlexWrap => "wrap",
            Self::FlexBasis => "basis",
            Self::FlexSizing => "sizing",
            Self::GridGap => "gap",
            Self::JustifyItems => "items",
            Self::JustifySelf => "self",
            Self::ScreenReaders => "screen-readers",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BorderColor => "Border Color",
            Self::BorderStyle => "Border Style",
            Self::Skew => "Transform \u{2014} Skew",
            Self::Translate => "Transform \u{2014} Translate",
            Self::FlexDirection => "Flex Direction",
            Self::FlexWrap => "Flex Wrap",
            Self::FlexBasis => "Flex Basis",
            Self::FlexSizing => "Flex Sizing",
            Self::GridGap => "Gap",
            Self::JustifyItems => "Justify Items",
            Self::JustifySelf => "Justify Self",
            Self::ScreenReaders => "Screen Readers",
        }
    }

    /// Short name used in section sub-navigation
    pub fn nav_label(&self) -> &'static str {
        match self {
            Self::BorderColor => "Color",
            Self::BorderStyle => "Style",
            Self::Skew => "Skew",
            Self::Translate => "Translate",
            Self::FlexDirection => "Direction",
            Self::FlexWrap => "Wrap",
            Self::FlexBasis => "Basis",
            Self::FlexSizing => "Sizing",
            Self::GridGap => "Gap",
            Self::JustifyItems => "Items",
            Self::JustifySelf => "Self",
            Self::ScreenReaders => "Screen readers",
        }
    }

    pub fn from_slugs(section: &str, topic: &str) -> Option<Self> {
        let section = Section::from_slug(section)?;
        section.topics().iter().copied().find(|t| t.slug() == topic)
    }

    pub fn route(&self) -> Route {
        Route::TopicPage {
            section: self.section().slug().to_string(),
            topic: self.slug().to_string(),
        }
    }

    pub fn path(&self) -> String {
        format!("/utilities/{}/{}", self.section().slug(), self.slug())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_is_listed_under_its_section() {
        for topic in Topic::ALL {
            assert!(topic.section().topics().contains(topic), "{topic:?}");
        }
        let listed: usize = Section::ALL.iter().map(|s| s.topics().len()).sum();
        assert_eq!(listed, Topic::ALL.len());
    }

    #[test]
    fn slugs_round_trip() {
        for topic in Topic::ALL {
            let found = Topic::from_slugs(topic.section().slug(), topic.slug());
            assert_eq!(found, Some(*topic));
        }
    }

    #[test]
    fn unknown_slugs() {
        assert_eq!(Topic::from_slugs("border", "radius"), None);
        assert_eq!(Topic::from_slugs("spacing", "color"), None);
        assert_eq!(Topic::from_slugs("flex", "color"), None);
    }

    #[test]
    fn paths() {
        assert_eq!(Topic::ScreenReaders.path(), "/utilities/accessibility/screen-readers");
        assert_eq!(Topic::BorderColor.path(), "/utilities/border/color");
    }

    #[test]
    fn route_renders_the_same_path() {
        for topic in Topic::ALL {
            assert_eq!(topic.route().to_string(), topic.path());
        }
    }
}
