use dioxus::prelude::*;

use crate::Route;
use crate::catalog::{Section, Topic};
use crate::config::SITE_NAME;

/// Top bar, routed page, footer
#[component]
pub fn Shell() -> Element {
    rsx! {
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; font-family: system-ui, -apple-system, sans-serif;",

            // Top bar
            nav {
                style: "position: sticky; top: 0; z-index: 10; display: flex; align-items: center; gap: 24px; padding: 14px 32px; background: #0f0f1aee; border-bottom: 1px solid #2a2a4a;",
                Link {
                    to: Route::Landing {},
                    style: "color: #e5e7eb; text-decoration: none; font-size: 18px; font-weight: 700; letter-spacing: -0.5px;",
                    "{SITE_NAME}"
                }
                div {
                    style: "display: flex; gap: 16px; flex-wrap: wrap;",
                    for section in Section::ALL.iter() {
                        if let Some(first) = section.topics().first() {
                            Link {
                                key: "{section.slug()}",
                                to: first.route(),
                                style: "color: #9ca3af; text-decoration: none; font-size: 14px;",
                                "{section.title()}"
                            }
                        }
                    }
                }
            }

            main {
                style: "flex: 1; width: 100%; max-width: 1100px; margin: 0 auto; padding: 40px 24px; box-sizing: border-box;",
                Outlet::<Route> {}
            }

            // Footer
            footer {
                style: "padding: 24px 32px; border-top: 1px solid #2a2a4a; color: #4b5563; font-size: 13px; text-align: center;",
                "{SITE_NAME} \u{b7} click any class to copy it"
            }
        }
    }
}

/// Sibling topics of the current page's section
#[component]
pub fn SectionNav(topic: Topic) -> Element {
    let section = topic.section();

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; flex-wrap: wrap; margin-bottom: 24px;",
            span {
                style: "color: #6b7280; font-size: 13px; margin-right: 4px;",
                "{section.title()}"
            }
            for sibling in section.topics().iter() {
                {
                    let current = *sibling == topic;
                    let bg = if current { "#6366f1" } else { "#1a1a2e" };
                    let color = if current { "white" } else { "#9ca3af" };
                    rsx! {
                        Link {
                            key: "{sibling.slug()}",
                            to: sibling.route(),
                            style: "padding: 6px 12px; background: {bg}; color: {color}; border: 1px solid #2a2a4a; border-radius: 6px; font-size: 13px; text-decoration: none;",
                            "{sibling.nav_label()}"
                        }
                    }
                }
            }
        }
    }
}
