use dioxus::prelude::*;

use super::CodeBlock;
use crate::catalog::ExampleSnippet;
use crate::clipboard::CopyHandle;

/// Real-world usage card with a copy button for its class string
#[component]
pub fn ExampleCard(example: &'static ExampleSnippet, copy: CopyHandle) -> Element {
    let copied = copy.is_copied(example.copy_text);

    rsx! {
        div {
            style: "background: #1a1a2e; border: 1px solid #2a2a4a; border-radius: 10px; padding: 20px; display: flex; flex-direction: column; gap: 12px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; gap: 12px;",
                div {
                    h3 {
                        style: "color: #e5e7eb; font-size: 16px; margin: 0 0 4px 0;",
                        "{example.title}"
                    }
                    if !example.note.is_empty() {
                        p {
                            style: "color: #6b7280; font-size: 13px; margin: 0; line-height: 1.5;",
                            "{example.note}"
                        }
                    }
                }
                button {
                    style: "flex-shrink: 0; padding: 6px 12px; background: #2a2a4a; color: #e5e7eb; border: 1px solid #3a3a5a; border-radius: 6px; font-size: 12px; cursor: pointer;",
                    onclick: move |_| copy.copy(example.copy_text),
                    if copied { "Copied!" } else { "Copy" }
                }
            }
            CodeBlock { code: example.code.to_string() }
        }
    }
}

/// Snippet that copies itself when clicked
///
/// The badge is keyed on the snippet text, so only the clicked snippet shows
/// it even when the whole page shares one handle.
#[component]
pub fn CopyableCode(example: &'static ExampleSnippet, copy: CopyHandle) -> Element {
    let copied = copy.is_copied(example.copy_text);
    let border = if copied { "#22c55e" } else { "#2a2a4a" };

    rsx! {
        button {
            style: "position: relative; width: 100%; text-align: left; background: #0f0f1a; border: 1px solid {border}; border-radius: 8px; padding: 14px 16px; cursor: pointer; transition: border-color 0.2s;",
            title: "Click to copy",
            onclick: move |_| copy.copy(example.copy_text),
            div {
                style: "color: #9ca3af; font-size: 12px; font-weight: 600; margin-bottom: 8px; font-family: system-ui, sans-serif;",
                "{example.title}"
            }
            pre {
                style: "margin: 0; color: #e5e7eb; font-size: 12px; line-height: 1.6; white-space: pre-wrap; font-family: ui-monospace, SFMono-Regular, Menlo, monospace;",
                "{example.code}"
            }
            if copied {
                span {
                    style: "position: absolute; top: 10px; right: 12px; padding: 2px 8px; background: #22c55e; color: #0f0f1a; border-radius: 4px; font-size: 11px; font-weight: 700; font-family: system-ui, sans-serif;",
                    "Copied!"
                }
            }
        }
    }
}
