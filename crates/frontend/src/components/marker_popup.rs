use dioxus::prelude::*;

use atlas_shared::models::Marker;

/// Info window for the selected marker, anchored below its screen position
/// and horizontally centered (the stylesheet applies `translateX(-50%)`).
#[component]
pub fn MarkerPopup(marker: Marker, left: f64, top: f64, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "marker-popup",
            style: "left: {left}px; top: {top}px;",
            // Keep popup interactions from starting a map drag
            onmousedown: move |evt: Event<MouseData>| evt.stop_propagation(),
            ondoubleclick: move |evt: Event<MouseData>| evt.stop_propagation(),

            button {
                class: "popup-close",
                onclick: move |_| on_dismiss.call(()),
                "\u{00d7}"
            }
            h3 { "{marker.title}" }
            p { "{marker.description}" }
        }
    }
}
