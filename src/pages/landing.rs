use dioxus::prelude::*;

use crate::catalog::Section;
use crate::clipboard::use_copy;
use crate::config::{SITE_NAME, SiteConfig};

#[component]
pub fn Landing() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center;",

            // Hero
            div {
                style: "text-align: center; max-width: 720px; padding-top: 24px;",
                h1 {
                    style: "font-size: 48px; font-weight: 700; color: #e5e7eb; margin: 0 0 16px 0; letter-spacing: -1px;",
                    "{SITE_NAME}"
                }
                p {
                    style: "font-size: 20px; color: #9ca3af; margin: 0 0 40px 0; line-height: 1.6;",
                    "Browse utility classes by topic, try every combination in a live playground, and copy the class or the markup with one click."
                }
            }

            // Section grid
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 20px; width: 100%; max-width: 960px;",
                for section in Section::ALL.iter() {
                    SectionCard { key: "{section.slug()}", section: *section }
                }
            }

            SampleDemos {}
        }
    }
}

#[component]
fn SectionCard(section: Section) -> Element {
    rsx! {
        div {
            style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px;",
            h3 {
                style: "color: #e5e7eb; font-size: 16px; margin: 0 0 8px 0;",
                "{section.title()}"
            }
            p {
                style: "color: #6b7280; font-size: 14px; margin: 0 0 16px 0; line-height: 1.5;",
                "{section.describe()}"
            }
            div {
                style: "display: flex; flex-wrap: wrap; gap: 8px;",
                for topic in section.topics().iter() {
                    Link {
                        key: "{topic.slug()}",
                        to: topic.route(),
                        style: "padding: 6px 12px; background: #0f0f1a; color: #a5b4fc; border: 1px solid #2a2a4a; border-radius: 6px; font-size: 13px; text-decoration: none;",
                        "{topic.nav_label()} \u{2192}"
                    }
                }
            }
        }
    }
}

/// One section at a time; clicking the demo copies its class
#[component]
fn SampleDemos() -> Element {
    let config = use_context::<SiteConfig>();
    let copy = use_copy(config.default_delay);
    let mut current = use_signal(|| 0usize);

    let count = Section::ALL.len();
    let index = current() % count;
    let section = Section::ALL[index];
    let class = section.demo_class();
    let copied = copy.is_copied(class);

    let arrow = "width: 40px; height: 40px; background: #1a1a2e; color: #e5e7eb; border: 1px solid #2a2a4a; border-radius: 50%; font-size: 18px; cursor: pointer;";

    rsx! {
        div {
            style: "width: 100%; max-width: 720px; margin-top: 64px;",
            h2 {
                style: "color: #e5e7eb; font-size: 22px; margin: 0 0 16px 0; text-align: center;",
                "Sample demos"
            }
            div {
                style: "display: flex; align-items: center; gap: 16px;",
                button {
                    style: "{arrow}",
                    "aria-label": "Previous demo",
                    onclick: move |_| current.set((index + count - 1) % count),
                    "\u{2039}"
                }
                button {
                    style: "flex: 1; position: relative; background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 32px 24px; cursor: pointer; text-align: center;",
                    title: "Click to copy",
                    onclick: move |_| copy.copy(class),
                    div {
                        style: "color: #9ca3af; font-size: 13px; margin-bottom: 8px;",
                        "{section.title()}"
                    }
                    code {
                        style: "color: #a5b4fc; font-size: 20px;",
                        "{class}"
                    }
                    if copied {
                        span {
                            style: "position: absolute; top: 10px; right: 12px; padding: 2px 8px; background: #22c55e; color: #0f0f1a; border-radius: 4px; font-size: 11px; font-weight: 700;",
                            "Copied!"
                        }
                    }
                }
                button {
                    style: "{arrow}",
                    "aria-label": "Next demo",
                    onclick: move |_| current.set((index + 1) % count),
                    "\u{203a}"
                }
            }
            // Position dots
            div {
                style: "display: flex; justify-content: center; gap: 6px; margin-top: 12px;",
                for i in 0..count {
                    {
                        let bg = if i == index { "#6366f1" } else { "#2a2a4a" };
                        rsx! {
                            span {
                                key: "{i}",
                                style: "width: 8px; height: 8px; border-radius: 50%; background: {bg};",
                            }
                        }
                    }
                }
            }
        }
    }
}
