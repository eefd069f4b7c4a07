//! ClassList and Node - the derived element tree
//!
//! Each class is stored next to the declarations that reproduce it, so one
//! tree yields both the copyable markup (`Display`) and the inline styles the
//! preview applies.

use std::borrow::Cow;
use std::fmt;

use crate::utilities::{Choice, UtilityClass};

type Text = Cow<'static, str>;

/// When a rule's declarations apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Base,
    Hover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    /// Comes from an axis choice and is part of "Copy classes"
    Axis,
    /// Helper or flag class
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule {
    class: Text,
    css: Text,
    state: State,
    origin: Origin,
}

/// Ordered classes with their preview declarations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    rules: Vec<Rule>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, class: Text, css: Text, state: State, origin: Origin) -> Self {
        self.rules.push(Rule {
            class,
            css,
            state,
            origin,
        });
        self
    }

    /// Helper class that is always present
    pub fn fixed(self, class: &'static str, css: &'static str) -> Self {
        self.push(class.into(), css.into(), State::Base, Origin::Fixed)
    }

    /// Fixed class gated by a flag
    pub fn when(self, on: bool, class: &'static str, css: &'static str) -> Self {
        if on { self.fixed(class, css) } else { self }
    }

    pub fn choice(self, choice: Choice) -> Self {
        self.push(
            choice.value.into(),
            choice.css.into(),
            State::Base,
            Origin::Axis,
        )
    }

    pub fn pick(self, value: impl UtilityClass) -> Self {
        self.choice(value.choice())
    }

    /// Axis choice behind a `hover:` variant when `hover` is set
    pub fn pick_on_hover(self, value: impl UtilityClass, hover: bool) -> Self {
        let choice = value.choice();
        if hover {
            self.push(
                format!("hover:{}", choice.value).into(),
                choice.css.into(),
                State::Hover,
                Origin::Axis,
            )
        } else {
            self.choice(choice)
        }
    }

    /// Axis-driven class assembled at render time, e.g. `gap-x-4`
    pub fn derived(self, class: impl Into<Text>, css: impl Into<Text>) -> Self {
        self.push(class.into(), css.into(), State::Base, Origin::Axis)
    }

    /// Rules of `other` after ours
    pub fn append(mut self, other: ClassList) -> Self {
        self.rules.extend(other.rules);
        self
    }

    fn join<'a>(rules: impl Iterator<Item = &'a Rule>) -> String {
        rules
            .map(|r| r.class.as_ref())
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Value of the `class` attribute, single-space separated
    pub fn class_attr(&self) -> String {
        Self::join(self.rules.iter())
    }

    /// Just the axis classes, what "Copy classes" puts on the clipboard
    pub fn selected(&self) -> String {
        Self::join(self.rules.iter().filter(|r| r.origin == Origin::Axis))
    }

    /// Inline declarations for one state, in class order
    pub fn css(&self, state: State) -> String {
        self.rules
            .iter()
            .filter(|r| r.state == state && !r.css.is_empty())
            .map(|r| r.css.as_ref())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[cfg(test)]
    pub fn contains(&self, class: &str) -> bool {
        self.rules.iter().any(|r| r.class == class)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Empty,
    /// Text on its own indented line
    Block(Text),
    /// Text on the same line as the tags
    Inline(Text),
    Children(Vec<Node>),
}

/// One element of a playground's output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: &'static str,
    pub classes: ClassList,
    /// Literal `style` attribute, written into the markup as-is
    pub style: Option<Text>,
    pub content: Content,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: ClassList::new(),
            style: None,
            content: Content::Empty,
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }

    pub fn style(mut self, style: impl Into<Text>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn text(mut self, text: impl Into<Text>) -> Self {
        self.content = Content::Block(text.into());
        self
    }

    pub fn inline(mut self, text: impl Into<Text>) -> Self {
        self.content = Content::Inline(text.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.content = Content::Children(children.into_iter().collect());
        self
    }

    pub fn child_nodes(&self) -> &[Node] {
        match &self.content {
            Content::Children(c) => c,
            _ => &[],
        }
    }

    /// Markup string shown in the code block and copied by "Copy markup"
    pub fn to_html(&self) -> String {
        self.to_string()
    }

    /// Axis classes of the whole tree in document order
    pub fn selected_classes(&self) -> String {
        let mut parts = Vec::new();
        self.collect_selected(&mut parts);
        parts.join(" ")
    }

    fn collect_selected(&self, parts: &mut Vec<String>) {
        let own = self.classes.selected();
        if !own.is_empty() {
            parts.push(own);
        }
        for child in self.child_nodes() {
            child.collect_selected(parts);
        }
    }

    /// Base-state declarations for the preview: class rules, then the
    /// literal style attribute
    pub fn inline_css(&self) -> String {
        let mut css = self.classes.css(State::Base);
        if let Some(style) = &self.style {
            if !css.is_empty() {
                css.push(' ');
            }
            css.push_str(style);
        }
        css
    }

    /// Scoped stylesheet carrying every hover rule in the tree
    ///
    /// Nodes are addressed by `data-node` paths (`scope`, `scope-0`,
    /// `scope-0-1`, ...) which the preview assigns in the same order.
    pub fn hover_sheet(&self, scope: &str) -> String {
        let mut sheet = String::new();
        self.collect_hover(scope, &mut sheet);
        sheet
    }

    fn collect_hover(&self, path: &str, sheet: &mut String) {
        let hover = self.classes.css(State::Hover);
        if !hover.is_empty() {
            sheet.push_str(&format!("[data-node=\"{path}\"]:hover {{ {hover} }}\n"));
        }
        for (i, child) in self.child_nodes().iter().enumerate() {
            child.collect_hover(&format!("{path}-{i}"), sheet);
        }
    }

    fn write(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        write!(f, "{pad}<{}", self.tag)?;
        let class = self.classes.class_attr();
        if !class.is_empty() {
            write!(f, " class=\"{class}\"")?;
        }
        if let Some(style) = &self.style {
            write!(f, " style=\"{style}\"")?;
        }
        f.write_str(">")?;
        match &self.content {
            Content::Empty => {}
            Content::Inline(text) => f.write_str(text)?,
            Content::Block(text) => write!(f, "\n{pad}  {text}\n{pad}")?,
            Content::Children(children) => {
                f.write_str("\n")?;
                for child in children {
                    child.write(f, depth + 1)?;
                    f.write_str("\n")?;
                }
                f.write_str(&pad)?;
            }
        }
        write!(f, "</{}>", self.tag)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::{BorderStyle, BorderWidth, Skew};

    #[test]
    fn class_attr_skips_empty_and_single_spaces() {
        let classes = ClassList::new()
            .fixed("p-4", "padding: 1rem;")
            .derived("", "")
            .when(false, "shadow-md", "box-shadow: none;")
            .pick(BorderWidth::Two);
        assert_eq!(classes.class_attr(), "p-4 border-2");
    }

    #[test]
    fn selected_excludes_helpers_and_flags() {
        let classes = ClassList::new()
            .pick(BorderWidth::Four)
            .fixed("p-4", "padding: 1rem;")
            .pick(BorderStyle::Dotted)
            .when(true, "shadow-md", "");
        assert_eq!(classes.selected(), "border-4 border-dotted");
        assert_eq!(classes.class_attr(), "border-4 p-4 border-dotted shadow-md");
    }

    #[test]
    fn hover_variant_moves_css_to_hover_state() {
        let classes = ClassList::new().pick_on_hover(Skew::X6, true);
        assert_eq!(classes.class_attr(), "hover:skew-x-6");
        assert_eq!(classes.css(State::Base), "");
        assert_eq!(classes.css(State::Hover), "transform: skewX(6deg);");
        assert_eq!(classes.selected(), "hover:skew-x-6");

        let plain = ClassList::new().pick_on_hover(Skew::X6, false);
        assert_eq!(plain.class_attr(), "skew-x-6");
        assert_eq!(plain.css(State::Base), "transform: skewX(6deg);");
    }

    #[test]
    fn block_text_is_indented() {
        let node = Node::div()
            .classes(ClassList::new().fixed("p-4", "padding: 1rem;"))
            .text("Hello");
        assert_eq!(node.to_html(), "<div class=\"p-4\">\n  Hello\n</div>");
    }

    #[test]
    fn nested_children_indent_per_level() {
        let node = Node::div()
            .classes(ClassList::new().fixed("flex", "display: flex;"))
            .children([
                Node::div().inline("Item 1"),
                Node::new("span").children([Node::new("b").inline("x")]),
            ]);
        assert_eq!(
            node.to_html(),
            "<div class=\"flex\">\n  <div>Item 1</div>\n  <span>\n    <b>x</b>\n  </span>\n</div>"
        );
    }

    #[test]
    fn style_attribute_is_literal_and_previewed() {
        let node = Node::div()
            .classes(ClassList::new().pick(BorderWidth::Two))
            .style("border-color: #2563eb;");
        assert_eq!(
            node.to_html(),
            "<div class=\"border-2\" style=\"border-color: #2563eb;\"></div>"
        );
        assert_eq!(node.inline_css(), "border-width: 2px; border-color: #2563eb;");
    }

    #[test]
    fn selected_classes_walk_children() {
        let node = Node::div()
            .classes(ClassList::new().fixed("flex", "display: flex;"))
            .children([
                Node::div().classes(ClassList::new().pick(BorderWidth::Four)),
                Node::div().classes(ClassList::new().fixed("p-4", "")),
            ]);
        assert_eq!(node.classes.selected(), "");
        assert_eq!(node.selected_classes(), "border-4");
    }

    #[test]
    fn hover_sheet_addresses_nodes_by_path() {
        let node = Node::div().children([
            Node::div(),
            Node::div().classes(ClassList::new().pick_on_hover(Skew::NegY2, true)),
        ]);
        assert_eq!(
            node.hover_sheet("pg"),
            "[data-node=\"pg-1\"]:hover { transform: skewY(-2deg); }\n"
        );
    }
}
