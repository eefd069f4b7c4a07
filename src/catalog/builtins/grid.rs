//! Grid: gap

use super::tile;
use crate::catalog::content::{ExampleSnippet, Tip, TopicContent};
use crate::catalog::option::{UtilityGroup, UtilityOption};
use crate::catalog::topic::Topic;
use crate::clipboard::FeedbackDelay;
use crate::playground::{AxisSpec, ClassList, Node, PlaygroundSpec, Selection};
use crate::utilities::{ContainerWidth, FlowDirection, GapMode, GapSize, ItemCount, LayoutMode, gap_rule};

const GAP_OPTIONS: &[UtilityOption] = &[
    UtilityOption::new("gap-0", "No gap"),
    UtilityOption::new("gap-1", "0.25rem gap"),
    UtilityOption::new("gap-2", "0.5rem gap"),
    UtilityOption::new("gap-3", "0.75rem gap"),
    UtilityOption::new("gap-4", "1rem gap (default example)"),
    UtilityOption::new("gap-6", "1.5rem gap"),
    UtilityOption::new("gap-8", "2rem gap"),
    UtilityOption::new("gap-x-4", "Horizontal gap only"),
    UtilityOption::new("gap-y-4", "Vertical gap only"),
    UtilityOption::new("md:gap-6", "Responsive gap at md breakpoint"),
];

fn gap_render(sel: &Selection) -> Node {
    let layout = sel.get::<LayoutMode>();
    let classes = ClassList::new().pick(layout);
    let classes = match (layout, sel.get::<FlowDirection>()) {
        (LayoutMode::Flex, FlowDirection::Row) => classes.derived("flex-row", "flex-direction: row;"),
        (LayoutMode::Flex, FlowDirection::Col) => {
            classes.derived("flex-col", "flex-direction: column;")
        }
        (LayoutMode::Grid, FlowDirection::Row) => classes,
        (LayoutMode::Grid, FlowDirection::Col) => classes.derived(
            "grid-flow-col auto-cols-auto",
            "grid-auto-flow: column; grid-auto-columns: auto;",
        ),
    };
    let (gap_class, gap_css) = gap_rule(sel.get::<GapMode>(), sel.get::<GapSize>());

    Node::div()
        .classes(
            classes
                .derived(gap_class, gap_css)
                .pick(sel.get::<ContainerWidth>()),
        )
        .children((1..=sel.get::<ItemCount>().count()).map(|i| tile(format!("Item {i}"))))
}

pub static GAP_PLAYGROUND: PlaygroundSpec = PlaygroundSpec {
    id: "grid-gap",
    axes: &[
        AxisSpec::of::<LayoutMode>(),
        AxisSpec::of::<FlowDirection>(),
        AxisSpec::of::<GapMode>(),
        AxisSpec::of::<GapSize>(),
        AxisSpec::of::<ContainerWidth>(),
        AxisSpec::of::<ItemCount>(),
    ],
    flags: &[],
    render: gap_render,
    samples: None,
};

pub static GAP: TopicContent = TopicContent {
    topic: Topic::GridGap,
    intro: "The gap utilities control the space between children inside a flex or grid container. Unlike margins, gap is symmetric, predictable and avoids collapsed margin issues, which makes it the preferred way to space items in modern layouts.",
    groups: &[UtilityGroup::new("Gap", GAP_OPTIONS)],
    guidance: &[Tip::new(
        "Accessibility",
        "Gap only affects visual spacing between children. It does not change DOM order or keyboard order; give interactive items adequate touch targets with padding and clear focus styles.",
    )],
    playground: &GAP_PLAYGROUND,
    cycling: &[],
    examples: &[
        ExampleSnippet::new(
            "Horizontal nav spacing",
            "A larger gap separates primary items and stays consistent across breakpoints without extra margin rules.",
            "flex gap-6 items-center",
            "<nav class=\"flex gap-6 items-center\">\n  <div>Logo</div>\n  <a>Home</a>\n  <a>Docs</a>\n  <a>Pricing</a>\n</nav>",
        ),
        ExampleSnippet::new(
            "Card grid",
            "gap controls spacing between cards; use gap-x or gap-y to control one axis only.",
            "grid grid-cols-3 gap-4",
            "<div class=\"grid grid-cols-3 gap-4\">\n  <div>Card</div>\n  <div>Card</div>\n</div>",
        ),
        ExampleSnippet::new(
            "Pricing cards, responsive gap",
            "Responsive gap utilities keep spacing comfortable on all screen sizes.",
            "grid sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6 md:gap-8",
            "<div class=\"grid sm:grid-cols-2 lg:grid-cols-3 gap-4 sm:gap-6 md:gap-8\">...</div>",
        ),
        ExampleSnippet::new(
            "Avatar stack",
            "Overlap is the exception: gap cannot overlap items, negative space utilities can.",
            "flex items-center -space-x-2",
            "<div class=\"flex items-center -space-x-2\">\n  <img class=\"w-10 h-10 rounded-full ring-2 ring-slate-900\" src=\"...\" />\n  ...\n</div>",
        ),
        ExampleSnippet::new(
            "Toolbar (nowrap + gap-x)",
            "gap-x spaces a tight toolbar horizontally; pair with overflow-x-auto when content may overflow.",
            "flex flex-nowrap gap-x-3 overflow-x-auto",
            "<div class=\"flex flex-nowrap gap-x-3 overflow-x-auto\">\n  <button>Action 1</button>\n  ...\n</div>",
        ),
    ],
    example_groups: &[],
    notes: &[],
    tips: &[
        Tip::new("Prefer gap", "Use gap instead of margins on children; spacing stays predictable and margins never collapse."),
        Tip::new("Axis control", "Use gap-x-* or gap-y-* to control one axis only."),
        Tip::new("Interactive targets", "Gap doesn't increase hit area; add padding to child elements for larger tappable regions."),
        Tip::new("Responsive spacing", "Combine responsive gap classes (e.g. md:gap-6) to get different spacing at breakpoints."),
        Tip::new("Overlap", "For avatars or badges that overlap, use negative margins or absolute positioning instead."),
        Tip::new("Performance", "Gap is inexpensive and CSS-native; prefer it over many margin adjustments."),
    ],
    delay: FeedbackDelay::Short,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::UtilityClass;

    fn markup(setup: impl FnOnce(&mut Selection)) -> Node {
        let mut sel = Selection::new(&GAP_PLAYGROUND);
        setup(&mut sel);
        (GAP_PLAYGROUND.render)(&sel)
    }

    #[test]
    fn flex_row_default() {
        let node = markup(|_| {});
        assert_eq!(node.classes.class_attr(), "flex flex-row gap-4 w-full");
        assert_eq!(node.child_nodes().len(), 6);
    }

    #[test]
    fn gap_mode_prefixes_size() {
        let node = markup(|s| {
            s.set(GapMode::Column).unwrap();
            s.set(GapSize::Six).unwrap();
        });
        assert_eq!(node.classes.class_attr(), "flex flex-row gap-x-6 w-full");
        assert!(node.inline_css().contains("column-gap: 1.5rem;"));
    }

    #[test]
    fn grid_column_flow() {
        let node = markup(|s| {
            s.set(LayoutMode::Grid).unwrap();
            s.set(FlowDirection::Col).unwrap();
            s.set(GapMode::Row).unwrap();
        });
        assert_eq!(
            node.classes.class_attr(),
            "grid grid-flow-col auto-cols-auto gap-y-4 w-full"
        );
        assert!(node.inline_css().contains("grid-auto-flow: column;"));
    }

    #[test]
    fn item_count_sets_tile_count() {
        for count in ItemCount::ALL {
            let node = markup(|s| s.set(*count).unwrap());
            assert_eq!(node.child_nodes().len(), count.count());
            assert!(node.to_html().contains(&format!("Item {}<", count.count())));
        }
        // the count never leaks into the copied classes
        let node = markup(|s| s.set(ItemCount::Three).unwrap());
        assert_eq!(node.selected_classes(), "flex flex-row gap-4 w-full");
    }

    #[test]
    fn grid_row_adds_no_flow_class() {
        let node = markup(|s| s.set(LayoutMode::Grid).unwrap());
        assert_eq!(node.classes.class_attr(), "grid gap-4 w-full");
        assert_eq!(node.classes.selected(), "grid gap-4 w-full");
    }
}
