//! Flexbox: direction, wrap, basis, sizing

use super::{BLUE_SURFACE, SLATE_SURFACE, surface, tile};
use crate::catalog::content::{CyclingDemo, DemoItem, ExampleSnippet, Tip, TopicContent};
use crate::catalog::option::UtilityGroup;
use crate::catalog::topic::Topic;
use crate::clipboard::FeedbackDelay;
use crate::playground::{AxisSpec, ClassList, Node, PlaygroundSpec, Selection};
use crate::utilities::{
    AlignItems, ContainerWidth, Flex, FlexBasis, FlexDirection, FlexGrow, FlexShrink, FlexWrap,
    GapSize, JustifyContent, UtilityClass,
};

fn direction_render(sel: &Selection) -> Node {
    Node::div()
        .classes(
            ClassList::new()
                .fixed("flex", "display: flex;")
                .pick(sel.get::<FlexDirection>())
                .pick(sel.get::<GapSize>()),
        )
        .children((1..=3).map(|i| tile(format!("Item {i}"))))
}

pub static DIRECTION_PLAYGROUND: PlaygroundSpec = PlaygroundSpec {
    id: "flex-direction",
    axes: &[AxisSpec::of::<FlexDirection>(), AxisSpec::of::<GapSize>()],
    flags: &[],
    render: direction_render,
    samples: None,
};

pub static DIRECTION: TopicContent = TopicContent {
    topic: Topic::FlexDirection,
    intro: "Control the direction flex items are laid out.",
    groups: &[UtilityGroup::new("Flex direction", FlexDirection::OPTIONS)],
    guidance: &[],
    playground: &DIRECTION_PLAYGROUND,
    cycling: &[],
    examples: &[
        ExampleSnippet::new(
            "Responsive nav (row on desktop, column on mobile)",
            "Mobile-first column that becomes a row from md up.",
            "flex md:flex-row flex-col items-center gap-4",
            "<nav class=\"flex md:flex-row flex-col items-center gap-4 p-4 bg-slate-800\">\n  <a href=\"#\" class=\"text-white\">Home</a>\n  <a href=\"#\" class=\"text-white\">About</a>\n  <a href=\"#\" class=\"text-white\">Contact</a>\n  <button class=\"px-4 py-2 bg-blue-600 text-white rounded\">Sign In</button>\n</nav>",
        ),
        ExampleSnippet::new(
            "Stacked sidebar (column)",
            "Links stack vertically beside a growing main area.",
            "flex flex-col w-56",
            "<div class=\"flex\">\n  <aside class=\"flex flex-col w-56 p-4 bg-slate-800\">\n    <a class=\"py-2\">Link 1</a>\n    <a class=\"py-2\">Link 2</a>\n    <a class=\"py-2\">Link 3</a>\n  </aside>\n  <main class=\"flex-1 p-6\">Main content</main>\n</div>",
        ),
    ],
    example_groups: &[],
    notes: &[],
    tips: &[
        Tip::new("Vertical UIs", "Use flex-col for stacked, vertical UIs such as forms and sidebars."),
        Tip::new("Mobile first", "Combine responsive variants like md:flex-row with flex-col for mobile-first layouts."),
        Tip::new("Reverse with care", "The *-reverse utilities change visual order while DOM order, and so tab order, stays the same."),
    ],
    delay: FeedbackDelay::Long,
};

fn wrap_render(sel: &Selection) -> Node {
    Node::div()
        .classes(
            ClassList::new()
                .fixed("flex", "display: flex;")
                .pick(sel.get::<FlexWrap>())
                .pick(sel.get::<GapSize>())
                .pick(sel.get::<AlignItems>())
                .pick(sel.get::<JustifyContent>())
                .pick(sel.get::<ContainerWidth>()),
        )
        .children((1..=6).map(|i| {
            Node::div()
                .classes(surface(SLATE_SURFACE).fixed("min-w-[140px]", "min-width: 140px;"))
                .inline(format!("Item {i}"))
        }))
}

pub static WRAP_PLAYGROUND: PlaygroundSpec = PlaygroundSpec {
    id: "flex-wrap",
    axes: &[
        AxisSpec::of::<FlexWrap>(),
        AxisSpec::of::<GapSize>(),
        AxisSpec::of::<AlignItems>(),
        AxisSpec::of::<JustifyContent>(),
        AxisSpec::of::<ContainerWidth>(),
    ],
    flags: &[],
    render: wrap_render,
    samples: None,
};

pub static WRAP: TopicContent = TopicContent {
    topic: Topic::FlexWrap,
    intro: "Control whether flex items wrap to multiple lines. Useful for galleries, tags, toolbars and responsive card layouts.",
    groups: &[UtilityGroup::new("Flex wrap", FlexWrap::OPTIONS)],
    guidance: &[
        Tip::new("nowrap overflows", "flex-nowrap prevents wrapping and will cause overflow; pair it with overflow-x-auto when content can exceed the container."),
        Tip::new("Focus order", "When items wrap, visual focus order remains DOM order. If wrapping changes how users expect to navigate, make tab order and ARIA attributes reflect that."),
    ],
    playground: &WRAP_PLAYGROUND,
    cycling: &[],
    examples: &[
        ExampleSnippet::new(
            "Filter bar with chips",
            "Wrapping chips keep many filters from breaking the layout; keep a compact \"More\" control for overflow.",
            "flex gap-2 flex-wrap",
            "<div class=\"flex gap-2 flex-wrap\">\n  <button class=\"px-3 py-1 bg-blue-600 text-white rounded\">All</button>\n  <span class=\"px-3 py-1 bg-slate-700 text-white rounded\">Open</span>\n  <span class=\"px-3 py-1 bg-slate-700 text-white rounded\">Closed</span>\n</div>",
        ),
        ExampleSnippet::new(
            "Breadcrumbs (wrap + truncate)",
            "Combine flex-wrap with truncation (max-w plus truncate) so long paths stay readable.",
            "flex gap-2 flex-wrap items-center text-sm",
            "<nav aria-label=\"Breadcrumb\">\n  <ol class=\"flex gap-2 flex-wrap items-center text-sm\">\n    <li>Home</li><li>/</li><li>Products</li><li>/</li><li>Cool sneakers</li>\n  </ol>\n</nav>",
        ),
        ExampleSnippet::new(
            "Responsive action toolbar",
            "Toolbars that wrap avoid overflow on narrow screens; keep primary actions visually distinct.",
            "flex gap-2 flex-wrap",
            "<div class=\"flex gap-2 flex-wrap\">\n  <button>Edit</button>\n  <button>Duplicate</button>\n  <button>Delete</button>\n</div>",
        ),
        ExampleSnippet::new(
            "Nav with search",
            "The nav wraps under the search input on narrow screens.",
            "flex flex-col md:flex-row gap-2",
            "<div class=\"flex flex-col md:flex-row gap-2\">\n  <input class=\"flex-1\" />\n  <nav class=\"flex gap-2 flex-wrap\">...</nav>\n</div>",
        ),
        ExampleSnippet::new(
            "Pricing cards (wrap)",
            "Fixed card widths (or basis-*) let pricing tiers reflow into multiple rows on smaller viewports.",
            "flex flex-row flex-wrap gap-4",
            "<div class=\"flex flex-row flex-wrap gap-4\">\n  <div class=\"w-64\">Card 1</div>\n  <div class=\"w-64\">Card 2</div>\n  <div class=\"w-64\">Card 3</div>\n</div>",
        ),
        ExampleSnippet::new(
            "Calendar week strips",
            "Day strips that wrap collapse into multiple rows while preserving day order.",
            "flex flex-row flex-wrap gap-2",
            "<div class=\"flex flex-row flex-wrap gap-2\">\n  <div class=\"w-12\">Mon</div>\n  <div class=\"w-12\">Tue</div>\n  ...\n</div>",
        ),
    ],
    example_groups: &[],
    notes: &[],
    tips: &[],
    delay: FeedbackDelay::Medium,
};

fn basis_render(sel: &Selection) -> Node {
    Node::div()
        .classes(
            ClassList::new()
                .fixed("flex", "display: flex;")
                .fixed("gap-2", "gap: 0.5rem;")
                .fixed("w-full", "width: 100%;"),
        )
        .children([
            Node::div()
                .classes(ClassList::new().pick(sel.get::<FlexBasis>()).append(surface(BLUE_SURFACE)))
                .inline(sel.get::<FlexBasis>().class()),
            tile_flex_one("Item 2"),
            tile_flex_one("Item 3"),
        ])
}

fn tile_flex_one(label: &'static str) -> Node {
    Node::div()
        .classes(ClassList::new().fixed("flex-1", "flex: 1 1 0%;").append(surface(SLATE_SURFACE)))
        .inline(label)
}

pub static BASIS_PLAYGROUND: PlaygroundSpec = PlaygroundSpec {
    id: "flex-basis",
    axes: &[AxisSpec::of::<FlexBasis>().titled("Basis of the first item")],
    flags: &[],
    render: basis_render,
    samples: None,
};

pub static BASIS_DEMOS: [CyclingDemo; 3] = [
    CyclingDemo {
        title: "Two items swap between 25% and 50% basis",
        interval_ms: 2500,
        width: None,
        items: &[
            DemoItem::new("25% \u{2192} 50%", "#f56565", &["25%", "50%"]),
            DemoItem::new("50% \u{2192} 25%", "#ed8936", &["50%", "25%"]),
            DemoItem::new("Fixed 25%", "#48bb78", &["25%"]),
        ],
    },
    CyclingDemo {
        title: "Items animate through basis values while flex-grow fills the remaining space",
        interval_ms: 2200,
        width: None,
        items: &[
            DemoItem::new("33% + grow", "#63b3ed", &["30%", "25%", "35%"]),
            DemoItem::new("33% + grow", "#4299e1", &["30%", "30%", "25%"]),
            DemoItem::new("33% + grow", "#3182ce", &["30%", "45%", "40%"]),
        ],
    },
    CyclingDemo {
        title: "Basis pulses between two sizes in a narrow row; only shrinkable items give way",
        interval_ms: 2000,
        width: Some("24rem"),
        items: &[
            DemoItem::new("No shrink", "#f6ad55", &["130px", "180px"]).no_grow().rigid(),
            DemoItem::new("Shrinks", "#ed64a6", &["130px", "180px"]).no_grow(),
            DemoItem::new("Shrinks", "#805ad5", &["130px", "180px"]).no_grow(),
        ],
    },
];

pub static BASIS: TopicContent = TopicContent {
    topic: Topic::FlexBasis,
    intro: "Flex-basis sets the initial main size of a flex item before it grows or shrinks. Think of it as the starting width of a flex item. Combined with flex-grow and flex-shrink you get powerful responsive layouts.",
    groups: &[UtilityGroup::new("Flex basis", FlexBasis::OPTIONS)],
    guidance: &[],
    playground: &BASIS_PLAYGROUND,
    cycling: &BASIS_DEMOS,
    examples: &[
        ExampleSnippet::code(
            "Responsive card grid",
            "<div class=\"flex gap-4 flex-wrap\">\n  <div class=\"flex-1 basis-44 bg-blue-600 rounded p-4\">Card 1</div>\n  <div class=\"flex-1 basis-56 bg-blue-500 rounded p-4\">Card 2</div>\n  <div class=\"flex-1 basis-52 bg-blue-400 rounded p-4\">Card 3</div>\n  <div class=\"flex-1 basis-40 bg-blue-300 rounded p-4\">Card 4</div>\n</div>",
        ),
        ExampleSnippet::code(
            "Navigation bar",
            "<nav class=\"flex items-center gap-4 p-4 bg-slate-800 rounded\">\n  <div class=\"basis-20 bg-yellow-400 rounded\">Logo</div>\n  <input class=\"basis-48 flex-grow px-3 py-2 rounded\" placeholder=\"Search...\" />\n  <button class=\"basis-24 px-4 py-2 bg-blue-600 text-white rounded\">Sign In</button>\n</nav>",
        ),
        ExampleSnippet::code(
            "Form with flexible input",
            "<form class=\"flex gap-4 items-end\">\n  <input class=\"basis-44 flex-grow px-3 py-2 rounded border\" placeholder=\"Email\" />\n  <button class=\"basis-24 px-6 py-2 bg-purple-600 text-white rounded\">Submit</button>\n</form>",
        ),
        ExampleSnippet::code(
            "Sidebar + main content",
            "<div class=\"flex gap-6 min-h-screen\">\n  <aside class=\"flex-none w-48 bg-red-500 p-6\">Sidebar</aside>\n  <main class=\"flex-1 bg-green-500 p-6\">Main Content</main>\n</div>",
        ),
    ],
    example_groups: &[],
    notes: &[],
    tips: &[
        Tip::new("Equal columns", "Use flex-1 to create equal-width columns that adapt to the container."),
        Tip::new("Responsive grids", "Combine basis-{size} with flex-grow for responsive grids."),
        Tip::new("Fixed plus fluid", "Give fixed parts a basis and no grow; let the main area take flex-1."),
    ],
    delay: FeedbackDelay::Long,
};

fn sizing_render(sel: &Selection) -> Node {
    let fixed = || {
        Node::div()
            .classes(
                ClassList::new()
                    .fixed("w-24", "width: 6rem;")
                    .fixed("flex-none", "flex: none;")
                    .append(surface(SLATE_SURFACE)),
            )
            .inline("Fixed")
    };
    let flex = sel.get::<Flex>();
    Node::div()
        .classes(
            ClassList::new()
                .fixed("flex", "display: flex;")
                .fixed("gap-2", "gap: 0.5rem;")
                .pick(sel.get::<ContainerWidth>()),
        )
        .children([
            fixed(),
            Node::div()
                .classes(ClassList::new().pick(flex).append(surface(BLUE_SURFACE)))
                .inline(flex.class()),
            fixed(),
        ])
}

pub static SIZING_PLAYGROUND: PlaygroundSpec = PlaygroundSpec {
    id: "flex-sizing",
    axes: &[
        AxisSpec::of::<Flex>().titled("Flex of the middle item"),
        AxisSpec::of::<ContainerWidth>(),
    ],
    flags: &[],
    render: sizing_render,
    samples: None,
};

pub static SIZING: TopicContent = TopicContent {
    topic: Topic::FlexSizing,
    intro: "Control how flex items grow, shrink, and set their base size within a flex container.",
    groups: &[
        UtilityGroup::new("Flex", Flex::OPTIONS),
        UtilityGroup::new("Flex grow", FlexGrow::OPTIONS),
        UtilityGroup::new("Flex shrink", FlexShrink::OPTIONS),
        UtilityGroup::new("Flex basis", FlexBasis::OPTIONS),
    ],
    guidance: &[],
    playground: &SIZING_PLAYGROUND,
    cycling: &[],
    examples: &[
        ExampleSnippet::code(
            "Navigation with spacing",
            "<nav class=\"flex items-center justify-between gap-4 p-4 bg-slate-800\">\n  <a href=\"#\" class=\"text-white hover:text-blue-400\">Home</a>\n  <a href=\"#\" class=\"text-white hover:text-blue-400\">About</a>\n  <a href=\"#\" class=\"text-white hover:text-blue-400\">Contact</a>\n  <button class=\"px-4 py-2 bg-blue-600 text-white rounded\">Sign In</button>\n</nav>",
        ),
        ExampleSnippet::code(
            "Responsive columns with grow/shrink",
            "<div class=\"flex gap-4 flex-wrap\">\n  <div class=\"flex-1 basis-64 p-4 bg-slate-700 rounded\">\n    <h3 class=\"font-bold text-white mb-2\">Card 1</h3>\n    <p class=\"text-slate-300\">Grows on large screens, wraps on small</p>\n  </div>\n  <div class=\"flex-1 basis-64 p-4 bg-slate-700 rounded\">\n    <h3 class=\"font-bold text-white mb-2\">Card 2</h3>\n    <p class=\"text-slate-300\">Responsive flex basis</p>\n  </div>\n</div>",
        ),
        ExampleSnippet::code(
            "Form with fixed and flexible inputs",
            "<form class=\"flex gap-4 items-end\">\n  <div class=\"flex-1\">\n    <label class=\"block text-sm font-medium text-white mb-2\">Email</label>\n    <input type=\"email\" class=\"w-full px-3 py-2 bg-slate-700 rounded border border-slate-600\" />\n  </div>\n  <button class=\"flex-shrink-0 px-6 py-2 bg-blue-600 text-white rounded hover:bg-blue-700\">\n    Submit\n  </button>\n</form>",
        ),
        ExampleSnippet::code(
            "Sidebar + main content",
            "<div class=\"flex gap-6 min-h-screen\">\n  <aside class=\"flex-shrink-0 w-64 bg-slate-800 p-6\">\n    <h3 class=\"font-bold text-white mb-4\">Sidebar</h3>\n  </aside>\n  <main class=\"flex-1 p-6 bg-slate-900\"></main>\n</div>",
        ),
    ],
    example_groups: &[],
    notes: &[],
    tips: &[
        Tip::new("flex-1 vs flex-auto", "flex-1 ignores content size when sharing space; flex-auto starts from it."),
        Tip::new("Keep it fixed", "flex-none or flex-shrink-0 stops logos and buttons from getting squeezed."),
    ],
    delay: FeedbackDelay::Long,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_markup() {
        let mut sel = Selection::new(&DIRECTION_PLAYGROUND);
        sel.set(FlexDirection::ColReverse).unwrap();
        let html = (DIRECTION_PLAYGROUND.render)(&sel).to_html();
        assert!(html.starts_with("<div class=\"flex flex-col-reverse gap-4\">\n  <div class=\"p-3 rounded bg-slate-700 text-white\">Item 1</div>"));
        assert!(html.ends_with("Item 3</div>\n</div>"));
    }

    #[test]
    fn wrap_defaults_and_item_count() {
        let sel = Selection::new(&WRAP_PLAYGROUND);
        let node = (WRAP_PLAYGROUND.render)(&sel);
        assert_eq!(
            node.classes.class_attr(),
            "flex flex-wrap gap-4 items-start justify-start w-full"
        );
        assert_eq!(node.child_nodes().len(), 6);
        assert_eq!(node.to_html().matches("min-w-[140px]").count(), 6);
    }

    #[test]
    fn wrap_nowrap_changes_only_wrap() {
        let mut sel = Selection::new(&WRAP_PLAYGROUND);
        sel.set(FlexWrap::NoWrap).unwrap();
        sel.set(ContainerWidth::Narrow).unwrap();
        let node = (WRAP_PLAYGROUND.render)(&sel);
        assert_eq!(node.classes.selected(), "flex-nowrap gap-4 items-start justify-start w-[420px]");
        assert!(node.inline_css().contains("flex-wrap: nowrap;"));
        assert!(node.inline_css().contains("width: 420px;"));
    }

    #[test]
    fn basis_applies_to_first_item_only() {
        let mut sel = Selection::new(&BASIS_PLAYGROUND);
        sel.set(FlexBasis::Half).unwrap();
        let node = (BASIS_PLAYGROUND.render)(&sel);
        let items = node.child_nodes();
        assert!(items[0].classes.contains("basis-1/2"));
        assert!(items[0].inline_css().contains("flex-basis: 50%;"));
        assert!(items[1..].iter().all(|n| n.classes.contains("flex-1")));
    }

    #[test]
    fn basis_cycle_frames_are_complete() {
        let [swap, cycle, pulse] = &BASIS_DEMOS;

        assert_eq!(swap.interval_ms, 2500);
        assert_eq!(swap.frame_count(), 2);
        assert_eq!(swap.bases(0), ["25%", "50%", "25%"]);
        assert_eq!(swap.bases(1), ["50%", "25%", "25%"]);

        assert_eq!(cycle.interval_ms, 2200);
        assert_eq!(cycle.frame_count(), 3);
        assert_eq!(cycle.bases(0), ["30%", "30%", "30%"]);
        assert_eq!(cycle.bases(1), ["25%", "30%", "45%"]);
        assert_eq!(cycle.bases(2), ["35%", "25%", "40%"]);
        // wraps back to the first pattern
        assert_eq!(cycle.bases(3), cycle.bases(0));

        assert_eq!(pulse.interval_ms, 2000);
        assert_eq!(pulse.width, Some("24rem"));
        assert_eq!(pulse.bases(0), ["130px"; 3]);
        assert_eq!(pulse.bases(1), ["180px"; 3]);
        assert_eq!(pulse.items[0].shrink, 0);
        assert!(pulse.items[1..].iter().all(|i| i.shrink == 1 && i.grow == 0));
    }

    #[test]
    fn sizing_middle_item() {
        let mut sel = Selection::new(&SIZING_PLAYGROUND);
        sel.set(Flex::Initial).unwrap();
        let node = (SIZING_PLAYGROUND.render)(&sel);
        let middle = &node.child_nodes()[1];
        assert!(middle.classes.contains("flex-initial"));
        assert!(middle.inline_css().starts_with("flex: 0 1 auto;"));
        assert_eq!(SIZING.class_names().count(), 4 + 2 + 2 + 6);
    }
}
