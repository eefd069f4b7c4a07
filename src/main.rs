mod catalog;
mod clipboard;
mod components;
mod config;
mod pages;
mod playground;
mod utilities;

use dioxus::prelude::*;

use components::Shell;
use config::SiteConfig;
use pages::{Landing, NotFound, TopicPage};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Landing {},
    #[route("/utilities/:section/:topic")]
    TopicPage { section: String, topic: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[allow(non_snake_case)]
fn App() -> Element {
    let config = use_context_provider(SiteConfig::from_location);
    use_hook(move || {
        if config.debug {
            log::info!("debug mode on, playground state panels visible");
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already set: {e}").into());
    }
    dioxus::launch(App);
}
