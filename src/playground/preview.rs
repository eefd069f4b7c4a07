//! Preview - renders a derived Node tree with inline styles
//!
//! The page does not ship the utility stylesheet, so every class is replaced
//! by the declarations stored beside it in the ClassList. Hover rules go into
//! a stylesheet scoped by `data-node` path.

use dioxus::prelude::*;

use super::markup::{Content, Node};

#[component]
pub fn Preview(node: Node, scope: String, #[props(default)] samples: Vec<Node>) -> Element {
    let sheet = node.hover_sheet(&scope);
    let sample_scope = format!("{scope}-sample");

    rsx! {
        div {
            style: "background: #0b0b16; border: 1px dashed #2a2a4a; border-radius: 10px; padding: 28px; min-height: 120px; color: #e5e7eb; font-size: 14px; overflow: hidden;",
            if !sheet.is_empty() {
                style { "{sheet}" }
            }
            PreviewNode { node, path: scope }

            if !samples.is_empty() {
                div {
                    style: "display: flex; flex-wrap: wrap; align-items: center; gap: 12px; margin-top: 16px;",
                    for (i, sample) in samples.into_iter().enumerate() {
                        PreviewNode {
                            key: "{i}",
                            node: sample,
                            path: format!("{sample_scope}-{i}"),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PreviewNode(node: Node, path: String) -> Element {
    let class = node.classes.class_attr();
    let css = node.inline_css();

    let body = match &node.content {
        Content::Empty => rsx! {},
        Content::Block(text) | Content::Inline(text) => rsx! { "{text}" },
        Content::Children(children) => rsx! {
            for (i, child) in children.iter().enumerate() {
                PreviewNode {
                    key: "{i}",
                    node: child.clone(),
                    path: format!("{path}-{i}"),
                }
            }
        },
    };

    match node.tag {
        "span" => rsx! {
            span { "data-node": "{path}", class: "{class}", style: "{css}", {body} }
        },
        "button" => rsx! {
            button { "data-node": "{path}", class: "{class}", style: "{css}", {body} }
        },
        "p" => rsx! {
            p { "data-node": "{path}", class: "{class}", style: "{css}", {body} }
        },
        _ => rsx! {
            div { "data-node": "{path}", class: "{class}", style: "{css}", {body} }
        },
    }
}
