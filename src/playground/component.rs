//! Playground - controls, live preview, generated markup

use dioxus::prelude::*;

use super::preview::Preview;
use super::spec::PlaygroundSpec;
use super::state::Selection;
use crate::clipboard::CopyHandle;
use crate::components::CodeBlock;
use crate::config::SiteConfig;

#[component]
pub fn Playground(spec: &'static PlaygroundSpec, copy: CopyHandle) -> Element {
    let config = use_context::<SiteConfig>();
    let mut selection = use_signal(|| Selection::new(spec));

    let sel = selection.read();
    let node = (spec.render)(&sel);
    let samples = spec.samples.map(|f| f(&sel)).unwrap_or_default();
    let picks: Vec<usize> = (0..spec.axes.len()).map(|i| sel.picked(i)).collect();
    let flags: Vec<bool> = spec.flags.iter().map(|f| sel.flag(f.name)).collect();
    let debug_json = if config.debug {
        serde_json::to_string_pretty(&sel.snapshot()).unwrap_or_default()
    } else {
        String::new()
    };
    drop(sel);

    let markup = node.to_html();
    let classes = node.selected_classes();
    let markup_copied = copy.is_copied(&markup);
    let classes_copied = !classes.is_empty() && copy.is_copied(&classes);

    rsx! {
        div {
            style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 24px; display: flex; flex-direction: column; gap: 20px;",

            // Axis controls
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px;",
                for (ai, axis) in spec.axes.iter().enumerate() {
                    div {
                        key: "{axis.name}",
                        div {
                            style: "color: #9ca3af; font-size: 12px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.5px; margin-bottom: 8px;",
                            "{axis.title}"
                        }
                        div {
                            style: "display: flex; flex-wrap: wrap; gap: 6px;",
                            for (ci, choice) in axis.choices.iter().enumerate() {
                                {
                                    let active = picks[ai] == ci;
                                    let bg = if active { "#6366f1" } else { "#0f0f1a" };
                                    let border = if active { "#6366f1" } else { "#2a2a4a" };
                                    let color = if active { "white" } else { "#e5e7eb" };
                                    let swatch = axis.name == "color";
                                    rsx! {
                                        button {
                                            key: "{choice.value}",
                                            style: "display: inline-flex; align-items: center; gap: 6px; padding: 5px 10px; background: {bg}; color: {color}; border: 1px solid {border}; border-radius: 6px; font-size: 12px; font-family: monospace; cursor: pointer;",
                                            title: "{choice.value}: {choice.description}",
                                            onclick: move |_| {
                                                if let Err(e) = selection.write().pick(ai, ci) {
                                                    log::warn!("{e}");
                                                }
                                            },
                                            if swatch {
                                                span {
                                                    style: "display: inline-block; width: 10px; height: 10px; border-width: 5px; border-style: solid; border-radius: 2px; {choice.css}",
                                                }
                                            }
                                            "{choice.label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                // Flags
                for (fi, flag) in spec.flags.iter().enumerate() {
                    label {
                        key: "{flag.name}",
                        style: "display: flex; align-items: center; gap: 8px; color: #e5e7eb; font-size: 14px; cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked: flags[fi],
                            onchange: move |_| {
                                if let Err(e) = selection.write().toggle(flag.name) {
                                    log::warn!("{e}");
                                }
                            },
                        }
                        "{flag.label}"
                    }
                }
            }

            Preview { node: node.clone(), scope: spec.id.to_string(), samples }

            // Copy actions
            div {
                style: "display: flex; gap: 8px; align-items: center; flex-wrap: wrap;",
                button {
                    style: "padding: 8px 16px; background: #2a2a4a; color: #e5e7eb; border: 1px solid #3a3a5a; border-radius: 6px; font-size: 13px; cursor: pointer;",
                    onclick: {
                        let classes = classes.clone();
                        move |_| copy.copy(classes.clone())
                    },
                    if classes_copied { "Copied!" } else { "Copy classes" }
                }
                button {
                    style: "padding: 8px 16px; background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; border: none; border-radius: 6px; font-size: 13px; font-weight: 600; cursor: pointer;",
                    onclick: {
                        let markup = markup.clone();
                        move |_| copy.copy(markup.clone())
                    },
                    if markup_copied { "Copied!" } else { "Copy markup" }
                }
                code {
                    style: "color: #6b7280; font-size: 12px;",
                    "{classes}"
                }
            }

            CodeBlock { code: markup.clone(), language: "html" }

            if config.debug {
                pre {
                    id: "playground-state",
                    style: "margin: 0; padding: 12px; background: #0f0f1a; border: 1px solid #2a2a4a; border-radius: 6px; color: #22c55e; font-size: 11px; overflow-x: auto;",
                    "{debug_json}"
                }
            }
        }
    }
}
