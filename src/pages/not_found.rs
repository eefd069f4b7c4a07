use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! {
        Missing { path: format!("/{}", segments.join("/")) }
    }
}

#[component]
pub fn Missing(path: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; gap: 16px; padding: 80px 20px; text-align: center;",
            h1 {
                style: "font-size: 36px; font-weight: 700; color: #e5e7eb; margin: 0;",
                "Page not found"
            }
            code {
                style: "color: #6b7280; font-size: 14px;",
                "{path}"
            }
            Link {
                to: Route::Landing {},
                style: "display: inline-block; margin-top: 8px; padding: 12px 28px; background: linear-gradient(135deg, #3b82f6, #6366f1); color: white; text-decoration: none; border-radius: 8px; font-size: 16px; font-weight: 600;",
                "Back to all utilities"
            }
        }
    }
}
