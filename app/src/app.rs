use dioxus::prelude::*;
use dioxus_logger::tracing;
use oasis_core::{ModalConfig, load_modal_config};

use crate::components::AddCabin;

static CSS: Asset = asset!("/assets/styles.css");

/// Modal settings bundled with the app
const MODAL_CONFIG: &str = include_str!("../assets/modal.toml");

fn modal_config() -> ModalConfig {
    load_modal_config(MODAL_CONFIG).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "bundled modal config rejected, using defaults");
        ModalConfig::default()
    })
}

#[component]
pub fn App() -> Element {
    let modal_config = use_hook(modal_config);

    rsx! {
        link { rel: "stylesheet", href: CSS }

        main { class: "app-layout",
            header { class: "app-header",
                h1 { "All cabins" }
            }
            section { class: "cabins-page",
                AddCabin { config: modal_config }
            }
        }
    }
}
