//! Grid alignment: justify-items, justify-self

use super::{BLUE_SURFACE, SLATE_SURFACE, surface};
use crate::catalog::content::{ExampleGroup, ExampleSnippet, Tip, TopicContent, UsageNotes};
use crate::catalog::option::UtilityGroup;
use crate::catalog::topic::Topic;
use crate::clipboard::FeedbackDelay;
use crate::playground::{AxisSpec, ClassList, Node, PlaygroundSpec, Selection};
use crate::utilities::{JustifyItems, JustifySelf, UtilityClass};

const W_16: (&str, &str) = ("w-16", "width: 4rem;");
const W_FULL: (&str, &str) = ("w-full", "width: 100%;");

fn grid_container() -> ClassList {
    ClassList::new()
        .fixed("grid", "display: grid;")
        .fixed("grid-cols-3", "grid-template-columns: repeat(3, minmax(0, 1fr));")
        .fixed("gap-4", "gap: 1rem;")
}

fn items_render(sel: &Selection) -> Node {
    let justify = sel.get::<JustifyItems>();
    // Fixed-width items would hide what stretch does
    let (w, w_css) = if justify == JustifyItems::Stretch { W_FULL } else { W_16 };

    Node::div()
        .classes(grid_container().pick(justify))
        .children((1..=3).map(|i| {
            Node::div()
                .classes(surface(BLUE_SURFACE).fixed(w, w_css))
                .inline(i.to_string())
        }))
}

pub static ITEMS_PLAYGROUND: PlaygroundSpec = PlaygroundSpec {
    id: "justify-items",
    axes: &[AxisSpec::of::<JustifyItems>()],
    flags: &[],
    render: items_render,
    samples: None,
};

pub static ITEMS: TopicContent = TopicContent {
    topic: Topic::JustifyItems,
    intro: "Utilities for controlling how grid items are aligned along their inline axis inside each grid cell.",
    groups: &[UtilityGroup::new("Justify items", JustifyItems::OPTIONS)],
    guidance: &[],
    playground: &ITEMS_PLAYGROUND,
    cycling: &[],
    examples: &[],
    example_groups: &[
        ExampleGroup {
            class_name: "justify-items-start",
            examples: &[
                ExampleSnippet::noted(
                    "Start-aligned Grid",
                    "All items start at the left of each grid cell.",
                    "<div class=\"grid grid-cols-3 justify-items-start gap-4\">\n  <div class=\"bg-blue-500 p-4\">1</div>\n  <div class=\"bg-blue-500 p-4\">2</div>\n  <div class=\"bg-blue-500 p-4\">3</div>\n</div>",
                ),
                ExampleSnippet::noted(
                    "Form Items Left-aligned",
                    "Input fields align to the start.",
                    "<form class=\"grid grid-cols-2 justify-items-start gap-2\">\n  <label>Email</label>\n  <input type=\"email\" />\n</form>",
                ),
            ],
        },
        ExampleGroup {
            class_name: "justify-items-center",
            examples: &[
                ExampleSnippet::noted(
                    "Centered Grid Items",
                    "Items are centered in each grid cell.",
                    "<div class=\"grid grid-cols-3 justify-items-center gap-4\">\n  <div class=\"bg-blue-500 p-4\">1</div>\n  <div class=\"bg-blue-500 p-4\">2</div>\n  <div class=\"bg-blue-500 p-4\">3</div>\n</div>",
                ),
                ExampleSnippet::noted(
                    "Center Cards",
                    "Card elements centered within grid cells.",
                    "<div class=\"grid grid-cols-2 justify-items-center gap-4\">\n  <div class=\"p-4 bg-gray-200\">Card 1</div>\n  <div class=\"p-4 bg-gray-200\">Card 2</div>\n</div>",
                ),
            ],
        },
        ExampleGroup {
            class_name: "justify-items-end",
            examples: &[
                ExampleSnippet::noted(
                    "End-aligned Grid",
                    "Items align to the end of each grid cell.",
                    "<div class=\"grid grid-cols-3 justify-items-end gap-4\">\n  <div class=\"bg-blue-500 p-4\">1</div>\n  <div class=\"bg-blue-500 p-4\">2</div>\n  <div class=\"bg-blue-500 p-4\">3</div>\n</div>",
                ),
                ExampleSnippet::noted(
                    "Form Items Right-aligned",
                    "Input fields align to the end of the grid cells.",
                    "<form class=\"grid grid-cols-2 justify-items-end gap-2\">\n  <label>Email</label>\n  <input type=\"email\" />\n</form>",
                ),
            ],
        },
        ExampleGroup {
            class_name: "justify-items-stretch",
            examples: &[
                ExampleSnippet::noted(
                    "Stretched Grid Items",
                    "Items fill the width of each grid cell.",
                    "<div class=\"grid grid-cols-3 justify-items-stretch gap-4\">\n  <div class=\"bg-blue-500 p-4\">1</div>\n  <div class=\"bg-blue-500 p-4\">2</div>\n  <div class=\"bg-blue-500 p-4\">3</div>\n</div>",
                ),
                ExampleSnippet::noted(
                    "Stretch Cards",
                    "Cards stretch to fill cell width.",
                    "<div class=\"grid grid-cols-2 justify-items-stretch gap-4\">\n  <div class=\"p-4 bg-gray-200\">Card 1</div>\n  <div class=\"p-4 bg-gray-200\">Card 2</div>\n</div>",
                ),
            ],
        },
    ],
    notes: &[
        UsageNotes {
            class_name: "justify-items-start",
            benefits: &["Aligns items predictably to the start.", "Helps create consistent layouts."],
            use_cases: &["Forms", "Navigation grids", "Cards"],
            pitfalls: &["Not using `grid` on container.", "Using `flex` instead of `grid`."],
        },
        UsageNotes {
            class_name: "justify-items-center",
            benefits: &["Centers items for balanced appearance.", "Useful for symmetrical designs."],
            use_cases: &["Image galleries", "Cards", "Buttons"],
            pitfalls: &["Forgetting `grid` context.", "Combining with `text-center` incorrectly."],
        },
        UsageNotes {
            class_name: "justify-items-end",
            benefits: &["Aligns items to end for visual emphasis.", "Good for right-aligned content."],
            use_cases: &["Footers", "Toolbars", "Right-aligned controls"],
            pitfalls: &["Using flex properties accidentally.", "Overriding with margin utilities."],
        },
        UsageNotes {
            class_name: "justify-items-stretch",
            benefits: &["Fills available space in each cell.", "Creates uniform width for grid items."],
            use_cases: &["Forms", "Cards", "Buttons filling cell width"],
            pitfalls: &["Adding fixed width may prevent stretching.", "Not setting `grid` on container."],
        },
    ],
    tips: &[],
    delay: FeedbackDelay::Long,
};

fn self_render(sel: &Selection) -> Node {
    let justify = sel.get::<JustifySelf>();
    let (w, w_css) = if justify == JustifySelf::Stretch { W_FULL } else { W_16 };

    let first = Node::div()
        .classes(surface(BLUE_SURFACE).fixed(w, w_css).pick(justify))
        .inline("1");
    let rest = (2..=3).map(|i| {
        Node::div()
            .classes(
                surface(SLATE_SURFACE)
                    .fixed(W_16.0, W_16.1)
                    .fixed("justify-self-auto", "justify-self: auto;"),
            )
            .inline(i.to_string())
    });

    Node::div()
        .classes(grid_container())
        .children(std::iter::once(first).chain(rest))
}

pub static SELF_PLAYGROUND: PlaygroundSpec = PlaygroundSpec {
    id: "justify-self",
    axes: &[AxisSpec::of::<JustifySelf>().titled("Justify self of the first item")],
    flags: &[],
    render: self_render,
    samples: None,
};

pub static SELF: TopicContent = TopicContent {
    topic: Topic::JustifySelf,
    intro: "Utilities for controlling how an individual grid item is aligned along its inline axis, overriding the container's justify-items. The blue item uses the selected class; the others stay on auto for comparison.",
    groups: &[UtilityGroup::new("Justify self", JustifySelf::OPTIONS)],
    guidance: &[
        Tip::new("justify-self-auto", "Useful when you want the item to follow the container's default layout behavior."),
        Tip::new("justify-self-start", "Good for left-aligning specific elements independently of others."),
        Tip::new("justify-self-end", "Good for right-aligning specific elements, such as buttons or icons."),
        Tip::new("justify-self-center", "Ideal for centering content like images, cards, or icons inside their cell."),
        Tip::new("justify-self-stretch", "Useful for making form fields or cards span the full cell width."),
    ],
    playground: &SELF_PLAYGROUND,
    cycling: &[],
    examples: &[],
    example_groups: &[
        ExampleGroup {
            class_name: "justify-self-auto",
            examples: &[
                ExampleSnippet::noted("Default Grid Items", "Items follow the container's alignment rules.", "<div class=\"grid grid-cols-3 gap-4\">\n  <div class=\"justify-self-auto bg-blue-500 p-4\">Item 1</div>\n  <div class=\"justify-self-auto bg-blue-500 p-4\">Item 2</div>\n  <div class=\"justify-self-auto bg-blue-500 p-4\">Item 3</div>\n</div>"),
                ExampleSnippet::noted("Content Cards Default", "Cards inherit container alignment.", "<div class=\"grid grid-cols-2 gap-4\">\n  <div class=\"justify-self-auto bg-gray-200 p-4\">Card A</div>\n  <div class=\"justify-self-auto bg-gray-200 p-4\">Card B</div>\n</div>"),
                ExampleSnippet::noted("Image Gallery", "Images take container default alignment.", "<div class=\"grid grid-cols-4 gap-2\">\n  <img class=\"justify-self-auto\" src=\"img1.jpg\" alt=\"img1\"/>\n  <img class=\"justify-self-auto\" src=\"img2.jpg\" alt=\"img2\"/>\n</div>"),
                ExampleSnippet::noted("Buttons List", "Buttons inherit container alignment.", "<div class=\"grid grid-cols-3 gap-2\">\n  <button class=\"justify-self-auto\">Button 1</button>\n  <button class=\"justify-self-auto\">Button 2</button>\n</div>"),
                ExampleSnippet::noted("Form Fields", "Input fields aligned by default.", "<form class=\"grid grid-cols-2 gap-2\">\n  <input type=\"text\" class=\"justify-self-auto\" placeholder=\"Name\"/>\n  <input type=\"email\" class=\"justify-self-auto\" placeholder=\"Email\"/>\n</form>"),
            ],
        },
        ExampleGroup {
            class_name: "justify-self-start",
            examples: &[
                ExampleSnippet::noted("Left-aligned Grid Item", "Item aligned to start of cell.", "<div class=\"grid grid-cols-3 gap-4\">\n  <div class=\"justify-self-start bg-blue-500 p-4\">Item 1</div>\n</div>"),
                ExampleSnippet::noted("Left-aligned Cards", "Cards aligned left regardless of container.", "<div class=\"grid grid-cols-2 gap-4\">\n  <div class=\"justify-self-start bg-gray-200 p-4\">Card 1</div>\n  <div class=\"justify-self-start bg-gray-200 p-4\">Card 2</div>\n</div>"),
                ExampleSnippet::noted("Form Labels", "Labels left-aligned independently.", "<form class=\"grid grid-cols-2 gap-2\">\n  <label class=\"justify-self-start\">Email</label>\n  <input type=\"email\"/>\n</form>"),
                ExampleSnippet::noted("Sidebar Menu", "Menu items start-aligned.", "<ul class=\"grid grid-cols-1 gap-2\">\n  <li class=\"justify-self-start\">Home</li>\n  <li class=\"justify-self-start\">About</li>\n</ul>"),
                ExampleSnippet::noted("Action Buttons", "Buttons aligned left for consistent UX.", "<div class=\"grid grid-cols-3 gap-2\">\n  <button class=\"justify-self-start\">Save</button>\n  <button class=\"justify-self-start\">Cancel</button>\n</div>"),
            ],
        },
        ExampleGroup {
            class_name: "justify-self-end",
            examples: &[
                ExampleSnippet::noted("Right-aligned Grid Item", "Item aligned to end of cell.", "<div class=\"grid grid-cols-3 gap-4\">\n  <div class=\"justify-self-end bg-blue-500 p-4\">Item 1</div>\n</div>"),
                ExampleSnippet::noted("Right-aligned Cards", "Cards aligned right.", "<div class=\"grid grid-cols-2 gap-4\">\n  <div class=\"justify-self-end bg-gray-200 p-4\">Card 1</div>\n  <div class=\"justify-self-end bg-gray-200 p-4\">Card 2</div>\n</div>"),
                ExampleSnippet::noted("Form Inputs Right", "Input aligned to end of its cell.", "<form class=\"grid grid-cols-2 gap-2\">\n  <input type=\"text\" class=\"justify-self-end\" placeholder=\"Name\"/>\n</form>"),
                ExampleSnippet::noted("Footer Links", "Links aligned to the right.", "<div class=\"grid grid-cols-3 gap-2\">\n  <a href=\"#\" class=\"justify-self-end\">Privacy</a>\n</div>"),
                ExampleSnippet::noted("Toolbar Icons", "Icons aligned to right edge.", "<div class=\"grid grid-cols-4 gap-2\">\n  <button class=\"justify-self-end\">Search</button>\n  <button class=\"justify-self-end\">Settings</button>\n</div>"),
            ],
        },
        ExampleGroup {
            class_name: "justify-self-center",
            examples: &[
                ExampleSnippet::noted("Centered Grid Item", "Item centered horizontally in cell.", "<div class=\"grid grid-cols-3 gap-4\">\n  <div class=\"justify-self-center bg-blue-500 p-4\">Item 1</div>\n</div>"),
                ExampleSnippet::noted("Centered Cards", "Cards centered in grid cells.", "<div class=\"grid grid-cols-2 gap-4\">\n  <div class=\"justify-self-center bg-gray-200 p-4\">Card 1</div>\n  <div class=\"justify-self-center bg-gray-200 p-4\">Card 2</div>\n</div>"),
                ExampleSnippet::noted("Centered Images", "Images centered inside cells.", "<div class=\"grid grid-cols-4 gap-2\">\n  <img class=\"justify-self-center\" src=\"img1.jpg\" alt=\"img1\"/>\n</div>"),
                ExampleSnippet::noted("Profile Badges", "Centered badges in grid layout.", "<div class=\"grid grid-cols-3 gap-2\">\n  <div class=\"justify-self-center p-2 bg-yellow-200 rounded\">Badge 1</div>\n</div>"),
                ExampleSnippet::noted("Action Buttons Centered", "Buttons horizontally centered.", "<div class=\"grid grid-cols-3 gap-2\">\n  <button class=\"justify-self-center\">Submit</button>\n</div>"),
            ],
        },
        ExampleGroup {
            class_name: "justify-self-stretch",
            examples: &[
                ExampleSnippet::noted("Stretched Grid Item", "Item fills the width of its cell.", "<div class=\"grid grid-cols-3 gap-4\">\n  <div class=\"justify-self-stretch bg-blue-500 p-4\">Item 1</div>\n</div>"),
                ExampleSnippet::noted("Stretched Form Input", "Input fills the cell width.", "<form class=\"grid grid-cols-2 gap-2\">\n  <input type=\"text\" class=\"justify-self-stretch\" placeholder=\"Name\"/>\n</form>"),
                ExampleSnippet::noted("Stretched Cards", "Cards occupy full width of grid cells.", "<div class=\"grid grid-cols-2 gap-4\">\n  <div class=\"justify-self-stretch bg-gray-200 p-4\">Card 1</div>\n  <div class=\"justify-self-stretch bg-gray-200 p-4\">Card 2</div>\n</div>"),
                ExampleSnippet::noted("Stretch Buttons", "Buttons take full width of their column.", "<div class=\"grid grid-cols-3 gap-2\">\n  <button class=\"justify-self-stretch\">Save</button>\n</div>"),
                ExampleSnippet::noted("Stretch Images", "Images expand to fill cell width.", "<div class=\"grid grid-cols-2 gap-2\">\n  <img class=\"justify-self-stretch\" src=\"img1.jpg\" alt=\"img1\"/>\n</div>"),
            ],
        },
    ],
    notes: &[
        UsageNotes {
            class_name: "justify-self-auto",
            benefits: &["Follows container defaults.", "Simple for consistent layouts."],
            use_cases: &["Default grid layouts", "Cards", "Galleries"],
            pitfalls: &[],
        },
        UsageNotes {
            class_name: "justify-self-start",
            benefits: &["Left-align items individually.", "Great for forms and menus."],
            use_cases: &["Forms", "Sidebar menus", "Navigation items"],
            pitfalls: &[],
        },
        UsageNotes {
            class_name: "justify-self-end",
            benefits: &["Right-align specific items.", "Good for footers, toolbars."],
            use_cases: &["Footers", "Right-aligned controls", "Toolbars"],
            pitfalls: &[],
        },
        UsageNotes {
            class_name: "justify-self-center",
            benefits: &["Centers content in its cell.", "Balances layout visually."],
            use_cases: &["Images", "Cards", "Profile badges", "Icons"],
            pitfalls: &[],
        },
        UsageNotes {
            class_name: "justify-self-stretch",
            benefits: &["Items fill full width.", "Creates uniform cell sizing."],
            use_cases: &["Form inputs", "Buttons", "Cards", "Full-width elements"],
            pitfalls: &[],
        },
    ],
    tips: &[],
    delay: FeedbackDelay::Long,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_class_goes_on_the_container() {
        let mut sel = Selection::new(&ITEMS_PLAYGROUND);
        sel.set(JustifyItems::Center).unwrap();
        let node = (ITEMS_PLAYGROUND.render)(&sel);
        assert_eq!(node.classes.selected(), "justify-items-center");
        assert!(node.inline_css().contains("justify-items: center;"));
        assert!(node.child_nodes().iter().all(|c| c.classes.contains("w-16")));
    }

    #[test]
    fn stretch_drops_fixed_item_width() {
        let mut sel = Selection::new(&ITEMS_PLAYGROUND);
        sel.set(JustifyItems::Stretch).unwrap();
        let node = (ITEMS_PLAYGROUND.render)(&sel);
        assert!(node.child_nodes().iter().all(|c| c.classes.contains("w-full")));
    }

    #[test]
    fn self_applies_to_first_item_only() {
        let mut sel = Selection::new(&SELF_PLAYGROUND);
        sel.set(JustifySelf::End).unwrap();
        let node = (SELF_PLAYGROUND.render)(&sel);
        let items = node.child_nodes();
        assert!(items[0].classes.contains("justify-self-end"));
        assert!(items[1].classes.contains("justify-self-auto"));
        assert!(items[2].classes.contains("justify-self-auto"));
        assert!(!node.classes.contains("justify-self-end"));
    }

    #[test]
    fn every_class_has_notes_and_examples() {
        for topic in [&ITEMS, &SELF] {
            for class in topic.class_names() {
                assert!(topic.notes.iter().any(|n| n.class_name == class), "{class}");
                assert!(topic.example_groups.iter().any(|g| g.class_name == class), "{class}");
            }
        }
    }
}
