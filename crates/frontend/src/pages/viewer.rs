use dioxus::prelude::*;

use atlas_shared::models::RegionMap;
use atlas_shared::viewport::Viewport;

use crate::api;
use crate::components::map_view::MapView;
use crate::components::region_selector::RegionSelector;
use crate::components::zoom_controls::ZoomControls;

#[component]
pub fn Viewer(region: Option<String>) -> Element {
    let regions_resource = use_resource(|| api::fetch_regions());

    let mut selected_slug = use_signal(String::new);
    let mut viewport = use_signal(Viewport::default);
    let mut selected_marker = use_signal(|| None::<usize>);

    let regions: Vec<RegionMap> = match &*regions_resource.read() {
        Some(Ok(r)) => r.clone(),
        _ => vec![],
    };

    // Pick the deep-linked region when it names one, the first otherwise
    if selected_slug.read().is_empty() && !regions.is_empty() {
        let initial = region
            .as_ref()
            .and_then(|name| regions.iter().find(|r| r.slug() == *name))
            .unwrap_or(&regions[0]);
        selected_slug.set(initial.slug());
    }

    let current = regions
        .iter()
        .find(|r| r.slug() == *selected_slug.read())
        .cloned();

    rsx! {
        div { class: "app",
            div { class: "header",
                h1 { "Region Atlas" }
                div { class: "hint",
                    span { "Drag to move" }
                    span { "Scroll to zoom" }
                    span { "Click markers for details" }
                }
            }

            RegionSelector {
                regions: regions.clone(),
                selected_slug: selected_slug.read().clone(),
                on_select: move |slug: String| {
                    if *selected_slug.read() != slug {
                        selected_slug.set(slug);
                        selected_marker.set(None);
                        // Fresh viewport; the remounted map view refits it
                        viewport.set(Viewport::default());
                    }
                },
            }

            if let Some(current) = current {
                MapView {
                    key: "{current.file_name}",
                    region: current,
                    viewport: viewport,
                    selected_marker: selected_marker,
                }
                ZoomControls { viewport: viewport }
            } else {
                div { class: "loading", "Loading regions..." }
            }
        }
    }
}
