use dioxus::prelude::*;

use atlas_shared::viewport::{Viewport, BUTTON_ZOOM_IN, BUTTON_ZOOM_OUT};

#[component]
pub fn ZoomControls(viewport: Signal<Viewport>) -> Element {
    let mut viewport = viewport;
    rsx! {
        div { class: "zoom-controls",
            button {
                onclick: move |_| viewport.write().zoom_step(BUTTON_ZOOM_IN),
                "Zoom In"
            }
            button {
                onclick: move |_| viewport.write().zoom_step(BUTTON_ZOOM_OUT),
                "Zoom Out"
            }
            button {
                class: "secondary",
                onclick: move |_| viewport.write().reset(),
                "Reset View"
            }
        }
    }
}
