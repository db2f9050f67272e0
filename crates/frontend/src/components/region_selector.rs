use dioxus::prelude::*;

use atlas_shared::models::RegionMap;

use crate::api;

#[component]
pub fn RegionSelector(
    regions: Vec<RegionMap>,
    selected_slug: String,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "region-bar",
            for r in regions {
                {
                    let slug = r.slug();
                    let class = if slug == selected_slug { "region-button active" } else { "region-button" };
                    rsx! {
                        button {
                            class: "{class}",
                            onclick: move |_| on_select.call(slug.clone()),
                            "{r.display_name}"
                        }
                    }
                }
            }
            if !selected_slug.is_empty() {
                ShareLink { slug: selected_slug.clone() }
            }
        }
    }
}

/// Copy a deep link to the current region to the clipboard.
#[component]
fn ShareLink(slug: String) -> Element {
    rsx! {
        button {
            class: "region-button share",
            onclick: move |_| {
                let slug = slug.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if let Some(window) = web_sys::window() {
                        if let Ok(origin) = window.location().origin() {
                            let url = api::build_region_url(&origin, &slug);
                            let clipboard = window.navigator().clipboard();
                            let _ = wasm_bindgen_futures::JsFuture::from(
                                clipboard.write_text(&url)
                            ).await;
                        }
                    }
                });
            },
            "Copy Link"
        }
    }
}
