//! Accessibility: screen readers

use super::BLUE_SURFACE;
use crate::catalog::content::{ExampleGroup, ExampleSnippet, Tip, TopicContent, UsageNotes};
use crate::catalog::option::UtilityGroup;
use crate::catalog::topic::Topic;
use crate::clipboard::FeedbackDelay;
use crate::playground::{AxisSpec, ClassList, Node, PlaygroundSpec, Selection};
use crate::utilities::{ScreenReader, UtilityClass};

fn screen_reader_render(sel: &Selection) -> Node {
    let sr = sel.get::<ScreenReader>();
    let label = if sr.is_visible() {
        "Visible Block"
    } else {
        "Screen Reader Only Block"
    };

    let block = ClassList::new()
        .pick(sr)
        .fixed(BLUE_SURFACE.0, BLUE_SURFACE.1)
        .fixed("w-32", "width: 8rem;")
        .fixed("h-16", "height: 4rem;")
        .fixed("flex", "display: flex;")
        .fixed("items-center", "align-items: center;")
        .fixed("justify-center", "justify-content: center;")
        .fixed("text-white", "color: #ffffff;");

    Node::div()
        .classes(
            ClassList::new()
                .fixed("flex", "display: flex;")
                .fixed("justify-center", "justify-content: center;")
                .fixed("items-center", "align-items: center;")
                .fixed("h-32", "height: 8rem;"),
        )
        .children([Node::div().classes(block).text(label)])
}

pub static SCREEN_READERS_PLAYGROUND: PlaygroundSpec = PlaygroundSpec {
    id: "screen-readers",
    axes: &[AxisSpec::of::<ScreenReader>()],
    flags: &[],
    render: screen_reader_render,
    samples: None,
};

pub static SCREEN_READERS: TopicContent = TopicContent {
    topic: Topic::ScreenReaders,
    intro: "The sr-only class hides content visually but keeps it accessible to screen readers. Use it for hidden labels, instructions, or live updates. not-sr-only makes the content readable by everyone again, which is handy behind a focus: or md: variant.",
    groups: &[UtilityGroup::new("Screen readers", ScreenReader::OPTIONS)],
    guidance: &[
        Tip::new("Visibility", "sr-only is hidden visually but readable by screen readers; not-sr-only is visible to all users."),
        Tip::new("Use cases", "sr-only suits hidden labels, instructions and live updates; not-sr-only suits alerts, navigation and visible content."),
        Tip::new("Accessibility", "sr-only improves the screen reader experience; not-sr-only works for all users."),
    ],
    playground: &SCREEN_READERS_PLAYGROUND,
    cycling: &[],
    examples: &[],
    example_groups: &[
        ExampleGroup {
            class_name: "sr-only",
            examples: &[
                ExampleSnippet::noted(
                    "Visually Hidden Label",
                    "Use sr-only to hide a label visually but keep it readable for screen readers.",
                    "<label class=\"sr-only\" for=\"email\">Email address</label>\n<input id=\"email\" type=\"email\" placeholder=\"Enter your email\" />",
                ),
                ExampleSnippet::noted(
                    "Screen Reader Only Text for Buttons",
                    "Provide extra description for icons for screen readers.",
                    "<button class=\"p-2 bg-blue-600 text-white rounded\">\n  <svg class=\"w-5 h-5\"><!-- icon --></svg>\n  <span class=\"sr-only\">Submit Form</span>\n</button>",
                ),
                ExampleSnippet::noted(
                    "Live Region for Dynamic Updates",
                    "Announce dynamic content changes via aria-live and sr-only.",
                    "<div role=\"status\" aria-live=\"polite\" class=\"sr-only\">\n  Form submitted successfully\n</div>",
                ),
                ExampleSnippet::noted(
                    "Skip Link for Keyboard Users",
                    "Provide a way to jump to main content for non-visual users.",
                    "<a href=\"#main-content\" class=\"sr-only focus:not-sr-only\">Skip to main content</a>\n<main id=\"main-content\"> ... </main>",
                ),
                ExampleSnippet::noted(
                    "Hidden Instructions",
                    "Provide guidance for screen reader users without affecting layout.",
                    "<p class=\"sr-only\">Use arrow keys to navigate the gallery</p>",
                ),
            ],
        },
        ExampleGroup {
            class_name: "not-sr-only",
            examples: &[
                ExampleSnippet::noted(
                    "Visible Label Example",
                    "Label is visible on the page for all users.",
                    "<label for=\"email\">Email address</label>\n<input id=\"email\" type=\"email\" placeholder=\"Enter your email\" />",
                ),
                ExampleSnippet::noted(
                    "Button with Text",
                    "Button shows text for both visual users and screen readers.",
                    "<button class=\"p-2 bg-blue-600 text-white rounded\">Submit Form</button>",
                ),
                ExampleSnippet::noted(
                    "Visible Notifications",
                    "Alerts that appear visually and for screen readers.",
                    "<div role=\"alert\" class=\"bg-green-100 text-green-800 p-2 rounded\">\nForm submitted successfully\n</div>",
                ),
                ExampleSnippet::noted(
                    "Inline Instructions",
                    "Instructions visible directly to all users.",
                    "<p>Use arrow keys to navigate the gallery</p>",
                ),
                ExampleSnippet::noted(
                    "Navigation Links",
                    "All navigation links visible for everyone.",
                    "<nav>\n  <a href=\"#home\">Home</a>\n  <a href=\"#about\">About</a>\n  <a href=\"#contact\">Contact</a>\n</nav>",
                ),
            ],
        },
    ],
    notes: &[
        UsageNotes {
            class_name: "sr-only",
            benefits: &[
                "Helps comply with accessibility standards (WCAG)",
                "Improves UX for visually impaired users",
                "Maintains semantic HTML structure",
            ],
            use_cases: &[
                "Use sr-only for labels, instructions, and dynamic updates",
                "Keep content accessible without affecting visual layout",
                "Combine with focus:not-sr-only for skip links",
            ],
            pitfalls: &[
                "Hiding content that should be visible",
                "Forgetting focus:not-sr-only on skip links",
                "Overusing sr-only unnecessarily",
            ],
        },
        UsageNotes {
            class_name: "not-sr-only",
            benefits: &[
                "Visible to all users",
                "Ensures clarity for non-visual users as well",
                "Works with sr-only for enhanced accessibility",
            ],
            use_cases: &[
                "Use visible content for all users",
                "Display alerts, instructions, navigation links",
                "Combine with sr-only when needed for accessibility",
            ],
            pitfalls: &[
                "Making content visible but forgetting accessibility labels",
                "Not combining with sr-only for hidden instructions",
            ],
        },
    ],
    tips: &[],
    delay: FeedbackDelay::Long,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sr_only_block_is_collapsed_in_preview() {
        let sel = Selection::new(&SCREEN_READERS_PLAYGROUND);
        let node = (SCREEN_READERS_PLAYGROUND.render)(&sel);
        let block = &node.child_nodes()[0];
        assert!(block.classes.class_attr().starts_with("sr-only "));
        assert!(block.inline_css().contains("clip: rect(0, 0, 0, 0);"));
        assert!(node.to_html().contains("Screen Reader Only Block"));
    }

    #[test]
    fn not_sr_only_shows_visible_block() {
        let mut sel = Selection::new(&SCREEN_READERS_PLAYGROUND);
        sel.set(ScreenReader::NotOnly).unwrap();
        let html = (SCREEN_READERS_PLAYGROUND.render)(&sel).to_html();
        assert!(html.contains("class=\"not-sr-only bg-blue-600"));
        assert!(html.contains("Visible Block"));
    }

    #[test]
    fn copies_keep_the_badge_for_two_seconds() {
        assert_eq!(SCREEN_READERS.delay.millis(), 2000);
    }

    #[test]
    fn examples_copy_their_whole_snippet() {
        for group in SCREEN_READERS.example_groups {
            assert_eq!(group.examples.len(), 5);
            for ex in group.examples {
                assert_eq!(ex.copy_text, ex.code);
            }
        }
    }
}
