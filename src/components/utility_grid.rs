use dioxus::prelude::*;

use crate::catalog::UtilityGroup;
use crate::clipboard::CopyHandle;

/// Clickable catalogue of classes; a click copies the class name
#[component]
pub fn UtilityGrid(groups: &'static [UtilityGroup], copy: CopyHandle) -> Element {
    let titled = groups.len() > 1;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 20px;",
            for group in groups.iter() {
                div {
                    key: "{group.heading}",
                    if titled {
                        h3 {
                            style: "color: #9ca3af; font-size: 13px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.5px; margin: 0 0 10px 0;",
                            "{group.heading}"
                        }
                    }
                    div {
                        style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 12px;",
                        for option in group.options.iter() {
                            {
                                let copied = copy.is_copied(option.class_name);
                                let border = if copied { "#22c55e" } else { "#2a2a4a" };
                                rsx! {
                                    button {
                                        key: "{option.class_name}",
                                        style: "text-align: left; background: #1a1a2e; border: 1px solid {border}; border-radius: 10px; padding: 14px 16px; cursor: pointer; transition: border-color 0.2s; font-family: system-ui, sans-serif;",
                                        onclick: move |_| copy.copy(option.class_name),
                                        div {
                                            style: "display: flex; justify-content: space-between; align-items: center; gap: 8px; margin-bottom: 6px;",
                                            code {
                                                style: "color: #a5b4fc; font-size: 14px; font-weight: 600;",
                                                "{option.class_name}"
                                            }
                                            if copied {
                                                span {
                                                    style: "color: #22c55e; font-size: 12px; font-weight: 600;",
                                                    "Copied!"
                                                }
                                            }
                                        }
                                        p {
                                            style: "color: #6b7280; font-size: 13px; margin: 0; line-height: 1.4;",
                                            "{option.description}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
