//! Built-in topic content - one static per topic page

mod accessibility;
mod border;
mod flex;
mod grid;
mod justify;
mod transform;

use std::borrow::Cow;

use super::content::TopicContent;
use super::topic::Topic;
use crate::playground::{ClassList, Node};

const PREVIEW_TEXT: &str = "Preview content";

const SHADOW_MD: &str =
    "box-shadow: 0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1);";

/// Background class and declaration for demo items
type Fill = (&'static str, &'static str);

const SLATE_SURFACE: Fill = ("bg-slate-700", "background-color: #334155;");
const BLUE_SURFACE: Fill = ("bg-blue-600", "background-color: #2563eb;");

/// `p-3 rounded <fill> text-white`, the look of every demo item
fn surface((class, css): Fill) -> ClassList {
    ClassList::new()
        .fixed("p-3", "padding: 0.75rem;")
        .fixed("rounded", "border-radius: 0.25rem;")
        .fixed(class, css)
        .fixed("text-white", "color: #ffffff;")
}

fn tile(label: impl Into<Cow<'static, str>>) -> Node {
    Node::div().classes(surface(SLATE_SURFACE)).inline(label)
}

pub fn content(topic: Topic) -> &'static TopicContent {
    match topic {
        Topic::BorderColor => &border::COLOR,
        Topic::BorderStyle => &border::STYLE,
        Topic::Skew => &transform::SKEW,
        Topic::Translate => &transform::TRANSLATE,
        Topic::FlexDirection => &flex::DIRECTION,
        Topic::FlexWrap => &flex::WRAP,
        Topic::FlexBasis => &flex::BASIS,
        Topic::FlexSizing => &flex::SIZING,
        Topic::GridGap => &grid::GAP,
        Topic::JustifyItems => &justify::ITEMS,
        Topic::JustifySelf => &justify::SELF,
        Topic::ScreenReaders => &accessibility::SCREEN_READERS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::Selection;

    #[test]
    fn content_matches_topic() {
        for topic in Topic::ALL {
            assert_eq!(content(*topic).topic, *topic);
        }
    }

    #[test]
    fn playground_ids_are_unique() {
        let mut ids: Vec<_> = Topic::ALL.iter().map(|t| content(*t).playground.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Topic::ALL.len());
    }

    #[test]
    fn every_topic_has_utilities() {
        for topic in Topic::ALL {
            assert!(content(*topic).class_names().next().is_some(), "{topic:?}");
        }
    }

    #[test]
    fn defaults_render_and_stay_stable() {
        for topic in Topic::ALL {
            let spec = content(*topic).playground;
            let sel = Selection::new(spec);
            let first = (spec.render)(&sel).to_html();
            assert_eq!(first, (spec.render)(&sel).to_html());
            assert!(!first.contains("  \""), "{topic:?}: {first}");
            assert!(!first.contains("class=\" "), "{topic:?}: {first}");
        }
    }

    #[test]
    fn every_axis_value_reaches_the_markup() {
        for topic in Topic::ALL {
            let spec = content(*topic).playground;
            let mut sel = Selection::new(spec);
            for (ai, axis) in spec.axes.iter().enumerate() {
                for (ci, choice) in axis.choices.iter().enumerate() {
                    sel.pick(ai, ci).unwrap();
                    // mode and direction are folded into derived classes
                    if choice.css.is_empty() {
                        continue;
                    }
                    let html = (spec.render)(&sel).to_html();
                    assert!(html.contains(choice.value), "{topic:?}: {} missing", choice.value);
                }
                sel.pick(ai, axis.default).unwrap();
            }
        }
    }

    #[test]
    fn every_button_has_a_tooltip() {
        for topic in Topic::ALL {
            for axis in content(*topic).playground.axes {
                for choice in axis.choices {
                    assert!(!choice.description.is_empty(), "{topic:?}: {}", choice.value);
                }
            }
        }
    }
}
