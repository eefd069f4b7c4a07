use dioxus::prelude::*;

/// Read-only code with a language tag
#[component]
pub fn CodeBlock(code: String, #[props(default = "html")] language: &'static str) -> Element {
    rsx! {
        div {
            style: "background: #0f0f1a; border: 1px solid #2a2a4a; border-radius: 8px; overflow: hidden;",
            div {
                style: "padding: 6px 12px; border-bottom: 1px solid #2a2a4a; color: #6b7280; font-size: 11px; font-family: monospace; text-transform: uppercase; letter-spacing: 0.5px;",
                "{language}"
            }
            pre {
                style: "margin: 0; padding: 14px 16px; overflow-x: auto;",
                code {
                    style: "color: #e5e7eb; font-size: 13px; line-height: 1.6; font-family: ui-monospace, SFMono-Regular, Menlo, monospace; white-space: pre;",
                    "{code}"
                }
            }
        }
    }
}
