use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use super::not_found::Missing;
use crate::catalog::{self, CyclingDemo, Topic, TopicContent};
use crate::clipboard::use_copy;
use crate::components::{CopyableCode, ExampleCard, SectionNav, TipList, UsageNotesCard, UtilityGrid};
use crate::playground::Playground;

#[component]
pub fn TopicPage(section: String, topic: String) -> Element {
    match Topic::from_slugs(&section, &topic) {
        Some(topic) => rsx! {
            // Keyed so switching topics resets selection and copy state
            TopicBody { key: "{topic.path()}", content: catalog::content(topic) }
        },
        None => {
            log::debug!("no topic at /utilities/{section}/{topic}");
            rsx! { Missing { path: format!("/utilities/{section}/{topic}") } }
        }
    }
}

const HEADING: &str = "color: #e5e7eb; font-size: 22px; font-weight: 600; margin: 0 0 16px 0;";

#[component]
fn TopicBody(content: &'static TopicContent) -> Element {
    let copy = use_copy(content.delay);
    let topic = content.topic;
    let announcement = copy
        .copied()
        .map(|text| format!("Copied {text}"))
        .unwrap_or_default();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 40px;",

            // Screen reader announcement for the badge
            div {
                role: "status",
                "aria-live": "polite",
                style: "position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0, 0, 0, 0); white-space: nowrap;",
                "{announcement}"
            }

            div {
                SectionNav { topic }
                h1 {
                    style: "font-size: 36px; font-weight: 700; color: #e5e7eb; margin: 0 0 12px 0; letter-spacing: -0.5px;",
                    "{topic.title()}"
                }
                p {
                    style: "font-size: 16px; color: #9ca3af; margin: 0; line-height: 1.7; max-width: 760px;",
                    "{content.intro}"
                }
            }

            section {
                h2 { style: "{HEADING}", "Utilities" }
                UtilityGrid { groups: content.groups, copy }
            }

            if !content.guidance.is_empty() {
                TipList { tips: content.guidance }
            }

            section {
                h2 { style: "{HEADING}", "Playground" }
                Playground { spec: content.playground, copy }
            }

            if !content.cycling.is_empty() {
                section {
                    h2 { style: "{HEADING}", "Animated demonstrations" }
                    div {
                        style: "display: flex; flex-direction: column; gap: 20px;",
                        for demo in content.cycling.iter() {
                            CyclingBasis { key: "{demo.title}", demo }
                        }
                    }
                }
            }

            if !content.examples.is_empty() {
                section {
                    h2 { style: "{HEADING}", "Real-world examples" }
                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(420px, 1fr)); gap: 16px;",
                        for example in content.examples.iter() {
                            ExampleCard { key: "{example.title}", example, copy }
                        }
                    }
                }
            }

            for group in content.example_groups.iter() {
                section {
                    key: "{group.class_name}",
                    h2 {
                        style: "{HEADING}",
                        "Examples: "
                        code { style: "color: #a5b4fc;", "{group.class_name}" }
                    }
                    div {
                        style: "display: flex; flex-direction: column; gap: 12px;",
                        for example in group.examples.iter() {
                            div {
                                key: "{example.title}",
                                if !example.note.is_empty() {
                                    p {
                                        style: "color: #6b7280; font-size: 13px; margin: 0 0 6px 0;",
                                        "{example.note}"
                                    }
                                }
                                CopyableCode { example, copy }
                            }
                        }
                    }
                }
            }

            if !content.notes.is_empty() {
                section {
                    h2 { style: "{HEADING}", "Usage notes" }
                    div {
                        style: "display: flex; flex-direction: column; gap: 16px;",
                        for notes in content.notes.iter() {
                            UsageNotesCard { key: "{notes.class_name}", notes }
                        }
                    }
                }
            }

            if !content.tips.is_empty() {
                section {
                    h2 { style: "{HEADING}", "Tips" }
                    TipList { tips: content.tips }
                }
            }
        }
    }
}

/// Items stepping through basis values
///
/// The loop is spawned in this scope and dies with it.
#[component]
fn CyclingBasis(demo: &'static CyclingDemo) -> Element {
    let mut frame = use_signal(|| 0usize);

    use_hook(move || {
        spawn(async move {
            let count = demo.frame_count();
            loop {
                TimeoutFuture::new(demo.interval_ms).await;
                let next = (*frame.peek() + 1) % count;
                frame.set(next);
            }
        })
    });

    let current = frame();
    let width = demo.width.unwrap_or("100%");

    rsx! {
        div {
            style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px;",
            p {
                style: "color: #9ca3af; font-size: 14px; margin: 0 0 12px 0;",
                "{demo.title}"
            }
            div {
                style: "display: flex; gap: 16px; width: {width}; max-width: 100%; overflow-x: auto; padding: 12px; background: #0f0f1a; border-radius: 6px; box-sizing: border-box;",
                for (i, item) in demo.items.iter().enumerate() {
                    {
                        let basis = item.basis(current);
                        rsx! {
                            div {
                                key: "{i}",
                                style: "flex-basis: {basis}; flex-grow: {item.grow}; flex-shrink: {item.shrink}; padding: 16px 12px; border-radius: 4px; background: {item.color}; color: white; font-size: 13px; font-weight: 600; text-align: center; white-space: nowrap; transition: all 1s ease; box-sizing: border-box;",
                                "{item.label}"
                                span {
                                    style: "display: block; font-weight: 400; font-size: 11px; opacity: 0.8;",
                                    "{basis}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
