use dioxus::prelude::*;

use crate::catalog::{Tip, UsageNotes};

#[component]
pub fn UsageNotesCard(notes: &'static UsageNotes) -> Element {
    let lists: [(&str, &'static [&'static str]); 3] = [
        ("Benefits", notes.benefits),
        ("Use cases", notes.use_cases),
        ("Common mistakes", notes.pitfalls),
    ];

    rsx! {
        div {
            style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 20px;",
            code {
                style: "color: #a5b4fc; font-size: 15px; font-weight: 600;",
                "{notes.class_name}"
            }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; margin-top: 12px;",
                for (heading, items) in lists {
                    if !items.is_empty() {
                        div {
                            key: "{heading}",
                            h4 {
                                style: "color: #9ca3af; font-size: 12px; text-transform: uppercase; letter-spacing: 0.5px; margin: 0 0 8px 0;",
                                "{heading}"
                            }
                            ul {
                                style: "margin: 0; padding-left: 18px; color: #d1d5db; font-size: 13px; line-height: 1.6;",
                                for item in items.iter() {
                                    li { key: "{item}", "{item}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TipList(tips: &'static [Tip]) -> Element {
    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 12px;",
            for tip in tips.iter() {
                div {
                    key: "{tip.title}",
                    style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-left: 3px solid #6366f1; border-radius: 8px; padding: 14px 16px;",
                    h4 {
                        style: "color: #e5e7eb; font-size: 14px; margin: 0 0 6px 0;",
                        "{tip.title}"
                    }
                    p {
                        style: "color: #9ca3af; font-size: 13px; margin: 0; line-height: 1.5;",
                        "{tip.body}"
                    }
                }
            }
        }
    }
}
