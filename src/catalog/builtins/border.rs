//! Borders: color and style

use super::{BLUE_SURFACE, PREVIEW_TEXT, SHADOW_MD, SLATE_SURFACE};
use crate::catalog::content::{ExampleSnippet, Tip, TopicContent};
use crate::catalog::option::UtilityGroup;
use crate::catalog::topic::Topic;
use crate::clipboard::FeedbackDelay;
use crate::playground::{AxisSpec, ClassList, FlagSpec, Node, PlaygroundSpec, Selection};
use crate::utilities::{BorderColor, BorderRadius, BorderStyle, BorderSwatch, BorderWidth, UtilityClass};

const SHADOW: &str = "shadow";

fn color_render(sel: &Selection) -> Node {
    Node::div()
        .classes(
            frame(sel)
                .fixed("p-4", "padding: 1rem;")
                .when(sel.flag(SHADOW), "shadow-md", SHADOW_MD),
        )
        .text(PREVIEW_TEXT)
}

/// The chosen frame without padding or shadow
fn frame(sel: &Selection) -> ClassList {
    ClassList::new()
        .pick(sel.get::<BorderWidth>())
        .pick(sel.get::<BorderColor>())
        .pick(sel.get::<BorderStyle>())
        .pick(sel.get::<BorderRadius>())
}

/// Avatar, button and badge wearing the same frame as the preview
fn color_samples(sel: &Selection) -> Vec<Node> {
    let avatar = Node::div()
        .classes(
            frame(sel)
                .fixed("w-16", "width: 4rem;")
                .fixed("h-16", "height: 4rem;")
                .fixed("flex", "display: flex;")
                .fixed("items-center", "align-items: center;")
                .fixed("justify-center", "justify-content: center;")
                .fixed(SLATE_SURFACE.0, SLATE_SURFACE.1)
                .fixed("text-white", "color: #ffffff;"),
        )
        .inline("AV");
    let button = Node::new("button")
        .classes(
            frame(sel)
                .fixed("px-4", "padding-left: 1rem; padding-right: 1rem;")
                .fixed("py-2", "padding-top: 0.5rem; padding-bottom: 0.5rem;")
                .fixed(BLUE_SURFACE.0, BLUE_SURFACE.1)
                .fixed("text-white", "color: #ffffff;"),
        )
        .inline("Primary");
    let badge = Node::div()
        .classes(
            frame(sel)
                .fixed("px-3", "padding-left: 0.75rem; padding-right: 0.75rem;")
                .fixed("py-1", "padding-top: 0.25rem; padding-bottom: 0.25rem;")
                .fixed(SLATE_SURFACE.0, SLATE_SURFACE.1)
                .fixed("text-sm", "font-size: 0.875rem; line-height: 1.25rem;"),
        )
        .inline("Badge");
    vec![avatar, button, badge]
}

pub static COLOR_PLAYGROUND: PlaygroundSpec = PlaygroundSpec {
    id: "border-color",
    axes: &[
        AxisSpec::of::<BorderWidth>(),
        AxisSpec::of::<BorderColor>(),
        AxisSpec::of::<BorderStyle>(),
        AxisSpec::of::<BorderRadius>(),
    ],
    flags: &[FlagSpec::new(SHADOW, "Shadow", true)],
    render: color_render,
    samples: Some(color_samples),
};

pub static COLOR: TopicContent = TopicContent {
    topic: Topic::BorderColor,
    intro: "Choose border colors for states, accents, focus rings and product frames. Use colored borders to convey status, highlight products, or create subtle separators.",
    groups: &[UtilityGroup::new("Border color", BorderColor::OPTIONS)],
    guidance: &[
        Tip::new("Color is not enough", "Do not rely on border color alone to convey state. Combine it with icons or text for users with color-vision deficiencies."),
        Tip::new("Focus without shift", "Prefer outline or ring utilities for focus indication so layout doesn't shift when border width changes on focus."),
        Tip::new("Contrast", "Ensure contrast between border color and background is sufficient, especially for thin borders."),
    ],
    playground: &COLOR_PLAYGROUND,
    cycling: &[],
    examples: &[
        ExampleSnippet::new(
            "Featured product tile",
            "Use a bold frame to highlight a product.",
            "border-4 border-purple-500 rounded-lg",
            "<div class=\"border-4 border-purple-500 rounded-lg p-4\">Featured</div>",
        ),
        ExampleSnippet::new(
            "Avatar with ring",
            "Status color around a profile picture.",
            "border-2 border-green-500 rounded-full ring ring-green-300",
            "<div class=\"rounded-full border-2 border-green-500\">Avatar</div>",
        ),
        ExampleSnippet::new(
            "Input focus accent",
            "Thicker primary border while the field has focus.",
            "focus:border-2 focus:border-blue-600",
            "<input class=\"focus:border-2 focus:border-blue-600\" />",
        ),
        ExampleSnippet::new(
            "Table with colored dividers",
            "Row separators through the divide utilities.",
            "divide-y divide-gray-500",
            "<div class=\"divide-y divide-gray-500\">...</div>",
        ),
        ExampleSnippet::new(
            "Pricing row, highlighted plan",
            "Frame the recommended plan only.",
            "border-2 border-blue-600 rounded-md",
            "<div class=\"border-2 border-blue-600 rounded-md\">Highlighted plan</div>",
        ),
        ExampleSnippet::new(
            "Notification banner (left accent)",
            "New features are available, check the changelog.",
            "border-l-4 border-blue-600 pl-3",
            "<div class=\"border-l-4 border-blue-600 pl-3\">...</div>",
        ),
        ExampleSnippet::new(
            "Product carousel (framed tiles)",
            "Faint frames keep a row of products readable.",
            "grid grid-flow-col auto-cols-fr gap-4 border",
            "<div class=\"grid grid-flow-col auto-cols-fr gap-4\">...</div>",
        ),
        ExampleSnippet::new(
            "Billing card, accent border",
            "Payment successful. Your invoice has been paid.",
            "border-l-4 border-green-500 pl-4 rounded-md",
            "<div class=\"rounded-md p-4\" style=\"border-left: 4px solid #22c55e\">...</div>",
        ),
    ],
    example_groups: &[],
    notes: &[],
    tips: &[
        Tip::new("Subtle separators", "Use neutral borders (e.g. border-gray-300) for dividers, and bold colored borders for emphasis."),
        Tip::new("Focus vs state", "Prefer ring or outline for focus to avoid layout shift when border width changes."),
        Tip::new("Combine with radius", "A colored thin border with a small radius looks modern and crisp; use rounded-md or rounded-lg."),
        Tip::new("Visual hierarchy", "Use border width and color together: thin neutral borders for structure, thicker colored borders for featured items."),
    ],
    delay: FeedbackDelay::Short,
};

fn style_render(sel: &Selection) -> Node {
    Node::div()
        .classes(
            ClassList::new()
                .pick(sel.get::<BorderWidth>())
                .pick(sel.get::<BorderStyle>())
                .pick(sel.get::<BorderRadius>())
                .fixed("p-4", "padding: 1rem;")
                .when(sel.flag(SHADOW), "shadow-md", SHADOW_MD),
        )
        .style(sel.get::<BorderSwatch>().to_css())
        .text(PREVIEW_TEXT)
}

pub static STYLE_PLAYGROUND: PlaygroundSpec = PlaygroundSpec {
    id: "border-style",
    axes: &[
        AxisSpec::of::<BorderWidth>(),
        AxisSpec::of::<BorderStyle>(),
        AxisSpec::of::<BorderRadius>(),
        AxisSpec::of::<BorderSwatch>(),
    ],
    flags: &[FlagSpec::new(SHADOW, "Shadow", true)],
    render: style_render,
    samples: None,
};

pub static STYLE: TopicContent = TopicContent {
    topic: Topic::BorderStyle,
    intro: "Explore how different border styles affect rhythm and emphasis: dashed placeholders, dotted badges, double frames for emphasis, and when to hide borders entirely.",
    groups: &[UtilityGroup::new("Border style", BorderStyle::OPTIONS)],
    guidance: &[
        Tip::new("Not style alone", "Don't rely on style alone; combine it with labels and icons."),
        Tip::new("Contrast", "Thin dotted or dashed borders may need higher contrast on dark backgrounds."),
        Tip::new("Keyboard focus", "For keyboard focus, prefer ring or outline utilities so layout doesn't shift."),
    ],
    playground: &STYLE_PLAYGROUND,
    cycling: &[],
    examples: &[
        ExampleSnippet::code("Dashed file placeholder", "<div class=\"border-dashed rounded-md p-4\">...</div>"),
        ExampleSnippet::code("Double-framed feature", "<div class=\"border-double border-4 rounded-lg\">...</div>"),
        ExampleSnippet::code("Borderless input / clean UI", "<input class=\"border-none focus:ring-2 focus:ring-blue-600\" />"),
        ExampleSnippet::code("Validation input (dashed)", "<input class=\"border-dashed border-2 rounded-md\" />"),
        ExampleSnippet::code("Inset dotted divider", "<div class=\"border-t border-dotted border-slate-400/50\">...</div>"),
        ExampleSnippet::code("Stepper with dotted connectors", "<div class=\"w-16 border-t-2 border-dotted border-slate-400/60\"></div>"),
        ExampleSnippet::code("Resizable panel handle (dashed)", "<div class=\"border-l-2 border-dashed border-slate-400/50\"></div>"),
    ],
    example_groups: &[],
    notes: &[],
    tips: &[
        Tip::new("Use dashed or dotted", "For placeholders and optional elements."),
        Tip::new("Reserve double", "For high emphasis, and use it sparingly."),
        Tip::new("Hide borders", "When you prefer minimal, clean surfaces; provide an alternative focus indicator."),
        Tip::new("Combine", "Style, width and color together give a clear visual language: subtle dotted neutral for badges, solid colored for status."),
    ],
    delay: FeedbackDelay::Short,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_color_markup_matches_selection() {
        let mut sel = Selection::new(&COLOR_PLAYGROUND);
        sel.set(BorderWidth::Two).unwrap();
        sel.set(BorderColor::Blue600).unwrap();
        sel.set(BorderStyle::Dashed).unwrap();
        sel.set(BorderRadius::Lg).unwrap();
        sel.set_flag(SHADOW, true).unwrap();

        let node = (COLOR_PLAYGROUND.render)(&sel);
        assert_eq!(
            node.to_html(),
            "<div class=\"border-2 border-blue-600 border-dashed rounded-lg p-4 shadow-md\">\n  Preview content\n</div>"
        );
        assert!(node.inline_css().contains("border-style: dashed;"));
        assert!(node.inline_css().contains("border-color: #2563eb;"));
    }

    #[test]
    fn samples_wear_the_chosen_frame() {
        let mut sel = Selection::new(&COLOR_PLAYGROUND);
        sel.set(BorderWidth::Four).unwrap();
        sel.set(BorderStyle::Dotted).unwrap();
        sel.set(BorderRadius::Full).unwrap();
        let main = (COLOR_PLAYGROUND.render)(&sel).to_html();

        let samples = COLOR_PLAYGROUND.samples.map(|f| f(&sel)).unwrap_or_default();
        let tags: Vec<_> = samples.iter().map(|n| n.tag).collect();
        assert_eq!(tags, ["div", "button", "div"]);
        for (sample, text) in samples.iter().zip(["AV", "Primary", "Badge"]) {
            let html = sample.to_html();
            assert!(html.contains(&format!(">{text}<")), "{html}");
            for class in ["border-4", "border-dotted", "rounded-full"] {
                assert!(sample.classes.contains(class), "{html}");
            }
            assert!(sample.inline_css().contains("border-style: dotted;"));
            // not part of the copied markup
            assert!(!main.contains(text));
        }
    }

    #[test]
    fn shadow_off_leaves_no_trailing_space() {
        let mut sel = Selection::new(&COLOR_PLAYGROUND);
        sel.set_flag(SHADOW, false).unwrap();
        let html = (COLOR_PLAYGROUND.render)(&sel).to_html();
        assert!(html.starts_with("<div class=\"border border-blue-600 border-solid rounded-md p-4\">"));
    }

    #[test]
    fn copy_classes_are_the_axis_values() {
        let sel = Selection::new(&COLOR_PLAYGROUND);
        let node = (COLOR_PLAYGROUND.render)(&sel);
        assert_eq!(node.classes.selected(), "border border-blue-600 border-solid rounded-md");
    }

    #[test]
    fn markup_is_deterministic() {
        let mut a = Selection::new(&STYLE_PLAYGROUND);
        let mut b = Selection::new(&STYLE_PLAYGROUND);
        for sel in [&mut a, &mut b] {
            sel.set(BorderStyle::Double).unwrap();
            sel.set(BorderSwatch::Purple).unwrap();
        }
        assert_eq!(
            (STYLE_PLAYGROUND.render)(&a).to_html(),
            (STYLE_PLAYGROUND.render)(&b).to_html()
        );
    }

    #[test]
    fn style_swatch_goes_into_the_style_attribute() {
        let mut sel = Selection::new(&STYLE_PLAYGROUND);
        sel.set(BorderStyle::Dotted).unwrap();
        sel.set(BorderSwatch::Red).unwrap();
        let node = (STYLE_PLAYGROUND.render)(&sel);
        assert_eq!(
            node.to_html(),
            "<div class=\"border border-dotted rounded-md p-4 shadow-md\" style=\"border-color: #ef4444;\">\n  Preview content\n</div>"
        );
        assert_eq!(node.classes.selected(), "border border-dotted rounded-md");
        assert!(node.inline_css().ends_with("border-color: #ef4444;"));
    }
}
