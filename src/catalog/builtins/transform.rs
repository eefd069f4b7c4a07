//! Transforms: skew and translate
//!
//! Both playgrounds share one shape: a transform value, optionally behind
//! `hover:`, plus transition duration and easing.

use super::PREVIEW_TEXT;
use crate::catalog::content::{ExampleSnippet, Tip, TopicContent};
use crate::catalog::option::UtilityGroup;
use crate::catalog::topic::Topic;
use crate::clipboard::FeedbackDelay;
use crate::playground::{AxisSpec, ClassList, FlagSpec, Node, PlaygroundSpec, Selection};
use crate::utilities::{Duration, Easing, Skew, Translate, UtilityClass};

const HOVER_ONLY: &str = "hover-only";

fn motion_render<T: UtilityClass>(sel: &Selection) -> Node {
    Node::div()
        .classes(
            ClassList::new()
                .fixed("transform", "")
                .fixed("transition-transform", "transition-property: transform;")
                .pick_on_hover(sel.get::<T>(), sel.flag(HOVER_ONLY))
                .pick(sel.get::<Duration>())
                .pick(sel.get::<Easing>())
                .fixed("p-6", "padding: 1.5rem;")
                .fixed("bg-slate-700", "background-color: #334155;")
                .fixed("inline-block", "display: inline-block;"),
        )
        .text(PREVIEW_TEXT)
}

pub static SKEW_PLAYGROUND: PlaygroundSpec = PlaygroundSpec {
    id: "transform-skew",
    axes: &[
        AxisSpec::of::<Skew>(),
        AxisSpec::of::<Duration>(),
        AxisSpec::of::<Easing>(),
    ],
    flags: &[FlagSpec::new(HOVER_ONLY, "Apply on hover only", false)],
    render: motion_render::<Skew>,
    samples: None,
};

pub static SKEW: TopicContent = TopicContent {
    topic: Topic::Skew,
    intro: "Skew introduces slanted geometry that adds personality and motion. Use it sparingly for accents: subtle skews imply tactility, while stronger skews create playful, collage-like compositions.",
    groups: &[UtilityGroup::new("Skew", Skew::OPTIONS)],
    guidance: &[
        Tip::new("Functional UI", "Keep skew subtle for functional UI elements; large angles are decorative."),
        Tip::new("Text-heavy content", "Avoid skewing important text-heavy content; prefer decorative labels."),
        Tip::new("Legibility", "Test for contrast and legibility, especially on slanted ribbons and CTAs."),
        Tip::new("Reduced motion", "Respect prefers-reduced-motion and provide a straight alternative when required."),
    ],
    playground: &SKEW_PLAYGROUND,
    cycling: &[],
    examples: &[
        ExampleSnippet::new(
            "Skewed hero band",
            "A full-width, slightly skewed band adds energy to hero sections. Counter-skew the inner content to keep copy readable.",
            "w-full transform -skew-y-6 bg-gradient-to-r from-indigo-600 to-purple-600 py-12",
            "<section class=\"w-full transform -skew-y-6 bg-gradient-to-r from-indigo-600 to-purple-600 py-12\">\n</section>",
        ),
        ExampleSnippet::new(
            "Ribbon / sale badge (skewed)",
            "Skewed ribbons feel tactile. Keep text short and contrast high.",
            "absolute top-3 right-3 -skew-x-6 bg-rose-600 text-white px-3 py-1 rounded",
            "<div class=\"absolute top-3 right-3 -skew-x-6 bg-rose-600 text-white px-3 py-1 rounded\">Sale</div>",
        ),
        ExampleSnippet::new(
            "Tilted card stack",
            "Layer cards with alternating small skews for a playful stack. Keep skews small so content stays readable.",
            "transform -skew-y-2",
            "<div class=\"relative\">\n  <div class=\"absolute inset-0 transform -skew-y-2 bg-slate-700 rounded\"></div>\n  <div class=\"relative transform skew-y-1 bg-slate-800 rounded p-4\">Card</div>\n</div>",
        ),
        ExampleSnippet::new(
            "Skewed image mask",
            "Mask an image container with skew to create angled crops; pair with object-cover for consistent results.",
            "overflow-hidden transform -skew-x-6",
            "<div class=\"overflow-hidden transform -skew-x-6\">\n  <img src=\"/path.jpg\" class=\"object-cover w-full h-44\"/>\n</div>",
        ),
        ExampleSnippet::new(
            "Hover skew micro-interaction",
            "A small hover skew (1-2\u{b0}) combined with a slight lift feels tactile for cards and buttons.",
            "transform transition hover:skew-x-2 hover:-translate-y-1",
            "<div class=\"transform transition hover:skew-x-2 hover:-translate-y-1\">Card</div>",
        ),
        ExampleSnippet::new(
            "Skewed divider",
            "A thin skewed element as a decorative divider keeps rhythm while adding personality.",
            "h-2 w-full transform skew-x-6 bg-gradient-to-r from-slate-700 to-slate-600",
            "<div class=\"h-2 w-full transform skew-x-6 bg-gradient-to-r from-slate-700 to-slate-600\"></div>",
        ),
        ExampleSnippet::new(
            "CTA badge",
            "A slight slant draws the eye to a call to action.",
            "inline-block transform skew-x-2 bg-blue-600 text-white px-4 py-2 rounded",
            "<div class=\"inline-block transform skew-x-2 bg-blue-600 text-white px-4 py-2 rounded\">Try it</div>",
        ),
    ],
    example_groups: &[],
    notes: &[],
    tips: &[
        Tip::new("Subtlety", "1-2\u{b0} for accents; 6\u{b0} for decorative treatments."),
        Tip::new("Readability", "Keep copy unskewed or counter-skew inner containers when necessary."),
        Tip::new("Performance", "Skew is transform-based and GPU friendly, but still respect reduced-motion."),
        Tip::new("Pairings", "Combine skew with shadow, translate, or scale for a richer motion language."),
    ],
    delay: FeedbackDelay::Short,
};

pub static TRANSLATE_PLAYGROUND: PlaygroundSpec = PlaygroundSpec {
    id: "transform-translate",
    axes: &[
        AxisSpec::of::<Translate>(),
        AxisSpec::of::<Duration>(),
        AxisSpec::of::<Easing>(),
    ],
    flags: &[FlagSpec::new(HOVER_ONLY, "Apply on hover only", false)],
    render: motion_render::<Translate>,
    samples: None,
};

pub static TRANSLATE: TopicContent = TopicContent {
    topic: Topic::Translate,
    intro: "Translation (translate-x / translate-y) is useful for motion that doesn't affect layout: slide-ins, nudges, tooltips and stacked carousels. Prefer transform-based translation for smooth GPU-accelerated motion.",
    groups: &[UtilityGroup::new("Translate", Translate::OPTIONS)],
    guidance: &[
        Tip::new("Entrance and exit", "Combine translate with opacity for clear entrance/exit motion and avoid sudden jumps."),
        Tip::new("Critical content", "Avoid large translations for critical content; test at different viewport sizes."),
        Tip::new("Reduced motion", "Respect prefers-reduced-motion and provide a non-animated fallback."),
        Tip::new("Off-screen content", "When translating drawers or toasts off-screen, make sure focus is managed and screen readers are notified."),
    ],
    playground: &TRANSLATE_PLAYGROUND,
    cycling: &[],
    examples: &[
        ExampleSnippet::new(
            "Drawer / sheet slide-in",
            "Use translate-x-full or a negative translate to animate off-canvas drawers. Pair with focus trapping and aria-hidden toggles.",
            "fixed right-0 top-0 h-full transform translate-x-full transition duration-300",
            "<div class=\"fixed right-0 top-0 h-full transform translate-x-full transition duration-300\">Drawer</div>",
        ),
        ExampleSnippet::new(
            "Toast from the top",
            "Negative translate-y combined with opacity makes smooth toast entrances.",
            "transform -translate-y-4 transition duration-200 opacity-0",
            "<div class=\"transform -translate-y-4\">Toast</div>",
        ),
        ExampleSnippet::new(
            "Dropdown offset",
            "A tiny translate-y (4px) offsets dropdowns from their trigger so they feel layered.",
            "mt-2 transform translate-y-1",
            "<div class=\"mt-2 transform translate-y-1\">Dropdown menu</div>",
        ),
        ExampleSnippet::new(
            "Carousel track",
            "Translate-x moves a carousel track without reflowing the page.",
            "transform translate-x-8",
            "<div class=\"transform translate-x-8\">Slide item</div>",
        ),
        ExampleSnippet::new(
            "Tooltip entrance",
            "Combine a small translate-y with opacity for subtle tooltip entrances. Provide aria-describedby and keyboard focus support.",
            "transform translate-y-1 opacity-0",
            "<div class=\"transform translate-y-1\">Tooltip</div>",
        ),
        ExampleSnippet::new(
            "Nudge on invalid input",
            "A small left-right shake built from translate-x keyframes flags invalid input. Use sparingly.",
            "animate-shake",
            "@keyframes shake {\n  0%, 100% { transform: translateX(0); }\n  25% { transform: translateX(-4px); }\n  75% { transform: translateX(4px); }\n}\n.animate-shake { animation: shake 300ms ease-in-out; }",
        ),
    ],
    example_groups: &[],
    notes: &[],
    tips: &[
        Tip::new("Combine with opacity", "Translate plus opacity feels natural for entrance and exit motion."),
        Tip::new("Small is subtle", "Prefer 4-16px for nudges; reserve 32px and up for full slide patterns like drawers and carousels."),
        Tip::new("Performance", "Translate is GPU-friendly; avoid animating layout properties."),
        Tip::new("Accessibility", "Keep keyboard focus and ARIA announcements working for off-canvas content."),
    ],
    delay: FeedbackDelay::Short,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::markup::State;

    #[test]
    fn skew_defaults() {
        let sel = Selection::new(&SKEW_PLAYGROUND);
        let node = (SKEW_PLAYGROUND.render)(&sel);
        assert_eq!(node.classes.selected(), "skew-x-0 duration-150 ease-in-out");
        assert!(node.to_html().starts_with(
            "<div class=\"transform transition-transform skew-x-0 duration-150 ease-in-out p-6"
        ));
    }

    #[test]
    fn hover_only_moves_transform_to_hover() {
        let mut sel = Selection::new(&SKEW_PLAYGROUND);
        sel.set(Skew::NegY6).unwrap();
        sel.toggle(HOVER_ONLY).unwrap();
        let node = (SKEW_PLAYGROUND.render)(&sel);

        assert!(node.classes.contains("hover:-skew-y-6"));
        assert!(!node.inline_css().contains("skewY"));
        assert_eq!(node.classes.css(State::Hover), "transform: skewY(-6deg);");
        assert!(node.hover_sheet("p").contains("transform: skewY(-6deg);"));
    }

    #[test]
    fn translate_markup_carries_selected_value() {
        let mut sel = Selection::new(&TRANSLATE_PLAYGROUND);
        sel.set(Translate::Y4).unwrap();
        sel.set(Duration::Ms300).unwrap();
        sel.set(Easing::Out).unwrap();
        let node = (TRANSLATE_PLAYGROUND.render)(&sel);

        assert_eq!(node.classes.selected(), "translate-y-4 duration-300 ease-out");
        assert!(node.inline_css().contains("transform: translateY(16px);"));
        assert!(node.inline_css().contains("transition-duration: 300ms;"));
    }

    #[test]
    fn playgrounds_do_not_share_state() {
        let mut skew = Selection::new(&SKEW_PLAYGROUND);
        let translate = Selection::new(&TRANSLATE_PLAYGROUND);
        skew.set(Duration::Ms500).unwrap();
        assert_eq!(translate.get::<Duration>(), Duration::Ms150);
    }
}
