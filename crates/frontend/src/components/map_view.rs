use dioxus::html::geometry::WheelDelta;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

use atlas_shared::models::{Marker, RegionMap};
use atlas_shared::viewport::{Size, Viewport, MAX_ZOOM, WHEEL_ZOOM_STEP};

use crate::components::marker_popup::MarkerPopup;
use crate::coords;

const MAP_CONTAINER_ID: &str = "atlas-map-container";

/// Hit radius for marker clicks, in map-image pixels before marker scaling.
const MARKER_HIT_RADIUS: f64 = 24.0;

/// Fallback width used before the container has been measured.
const REFERENCE_WIDTH: f64 = 960.0;

/// Vertical gap between a marker and its popup, in container pixels.
const POPUP_GAP: f64 = 20.0;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Get the bounding client rect of the map container element.
fn container_rect() -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(MAP_CONTAINER_ID)?;
    Some(element.get_bounding_client_rect())
}

/// Push the live container measurements into the viewport. A no-op while the
/// container is unmounted or unmeasured; the next resize notification retries.
fn sync_container(mut viewport: Signal<Viewport>, image_w: f64, image_h: f64) {
    let Some(rect) = container_rect() else {
        return;
    };
    let Some((base_w, base_h)) = coords::rendered_base_size(rect.width(), image_w, image_h)
    else {
        return;
    };
    viewport.write().configure(
        Size::new(rect.width(), rect.height()),
        Size::new(base_w, base_h),
    );
}

// ---------------------------------------------------------------------------
// Pure helpers (easily testable)
// ---------------------------------------------------------------------------

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

/// Scale factor for marker glyphs. The SVG overlay is drawn in native image
/// pixels and then stretched by `container_w / image_w` times the current
/// zoom, so this keeps markers a consistent physical size on screen.
fn marker_scale(image_w: f64, container_w: f64, zoom: f64) -> f64 {
    (image_w / container_w.max(1.0)) / zoom.min(MAX_ZOOM)
}

/// Find the index of the nearest marker within `threshold` (Euclidean
/// distance, map-image pixels).
fn find_nearest(markers: &[Marker], click: (f64, f64), threshold: f64) -> Option<usize> {
    let mut best_idx = None;
    let mut best_dist = threshold;
    for (i, m) in markers.iter().enumerate() {
        let dx = m.x - click.0;
        let dy = m.y - click.1;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < best_dist {
            best_dist = dist;
            best_idx = Some(i);
        }
    }
    best_idx
}

// ---------------------------------------------------------------------------
// SVG builder
// ---------------------------------------------------------------------------

/// Build the marker overlay SVG as a string for reliable rendering.
/// Positions are in native map-image pixel space.
fn build_marker_svg(markers: &[Marker], selected: Option<usize>, s: f64) -> String {
    let mut svg = String::with_capacity(2048);
    for (i, m) in markers.iter().enumerate() {
        let r = 11.0 * s;
        let sw = 2.5 * s;
        let fs = 12.0 * s;
        let (mx, my, id, title) = (m.x, m.y, &m.id, &m.title);
        svg.push_str(&format!(r##"<g role="img"><title>{title}</title>"##));
        svg.push_str(&format!(
            r##"<circle cx="{mx}" cy="{my}" r="{r}" fill="#c43030" stroke="white" stroke-width="{sw}"/>"##
        ));
        svg.push_str(&format!(
            r##"<text x="{mx}" y="{my}" fill="white" font-size="{fs}" font-family="sans-serif" font-weight="700" text-anchor="middle" dominant-baseline="central">{id}</text>"##
        ));
        if selected == Some(i) {
            build_selection_ring(&mut svg, mx, my, s);
        }
        svg.push_str("</g>");
    }
    svg
}

/// Emit an animated dashed selection ring around a marker.
fn build_selection_ring(svg: &mut String, cx: f64, cy: f64, s: f64) {
    let r = 20.0 * s;
    let sw = 2.5 * s;
    let da1 = 6.0 * s;
    let da2 = 4.0 * s;
    svg.push_str(&format!(
        r##"<circle cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke="white" stroke-width="{sw}" stroke-dasharray="{da1} {da2}" opacity="0.9"><animate attributeName="opacity" values="0.5;1;0.5" dur="1.2s" repeatCount="indefinite"/></circle>"##
    ));
}

/// Wrap the marker overlay in an `<svg>` stretched over the map image.
fn svg_document(markers: &[Marker], selected: Option<usize>, image_w: f64, image_h: f64, s: f64) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" preserveAspectRatio="none" style="position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;">{}</svg>"#,
        image_w,
        image_h,
        build_marker_svg(markers, selected, s)
    )
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

#[component]
pub fn MapView(
    region: RegionMap,
    viewport: Signal<Viewport>,
    selected_marker: Signal<Option<usize>>,
) -> Element {
    let image_url = format!("/static/images/maps/{}.webp", region.file_name);
    let image_w = region.image_width;
    let image_h = region.image_height;

    let mut viewport = viewport;
    let mut selected_marker = selected_marker;

    // Markers for the click hit-test closure
    let markers = region.markers.clone();

    // First measurement after mount. The parent keys this component on the
    // region, so switching regions remounts and refits the view.
    use_effect(move || {
        sync_container(viewport, image_w, image_h);
    });

    let vp = *viewport.read();
    let t = vp.transform();
    let transform_style = format!(
        "transform: translate({}px, {}px) scale({}); transform-origin: 0 0;",
        t.translate_x, t.translate_y, t.scale
    );
    let container_class = if vp.is_dragging() {
        "map-container dragging"
    } else {
        "map-container"
    };

    let container_w = container_rect().map(|r| r.width()).unwrap_or(REFERENCE_WIDTH);
    let s = marker_scale(image_w, container_w, vp.zoom);
    let svg_html = svg_document(&region.markers, *selected_marker.read(), image_w, image_h, s);

    // Popup anchored below the selected marker's screen position
    let sel = *selected_marker.read();
    let popup = sel.and_then(|idx| region.markers.get(idx)).map(|m| {
        let (left, top) = coords::map_px_to_container(
            m.x, m.y, container_w, image_w, vp.zoom, vp.offset_x, vp.offset_y,
        );
        (m.clone(), left, top + POPUP_GAP)
    });

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "{container_class}",

            onwheel: move |evt: Event<WheelData>| {
                evt.prevent_default();

                let delta_y = wheel_delta_y(evt.data().delta());
                let factor = if delta_y < 0.0 { WHEEL_ZOOM_STEP } else { 1.0 / WHEEL_ZOOM_STEP };

                let Some(rect) = container_rect() else { return };
                let client = evt.data().client_coordinates();
                viewport.write().zoom_at(client.x - rect.left(), client.y - rect.top(), factor);
            },

            onmousedown: move |evt: Event<MouseData>| {
                // Only track drag/click for the left mouse button
                if evt.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                let Some(rect) = container_rect() else { return };
                let client = evt.client_coordinates();
                viewport.write().begin_drag(client.x - rect.left(), client.y - rect.top());
            },

            onmousemove: move |evt: Event<MouseData>| {
                if !viewport.read().is_dragging() {
                    return;
                }
                let Some(rect) = container_rect() else { return };
                let client = evt.client_coordinates();
                viewport.write().drag_to(client.x - rect.left(), client.y - rect.top());
            },

            onmouseup: move |evt: Event<MouseData>| {
                // A mouseup without drag movement = a click
                let was_click = viewport.write().end_drag();
                if !was_click {
                    return;
                }
                let vp = *viewport.read();
                let client = evt.client_coordinates();
                let Some((img_x, img_y)) = coords::click_to_map_px(
                    client.x, client.y, MAP_CONTAINER_ID,
                    image_w, image_h, vp.zoom, vp.offset_x, vp.offset_y,
                ) else {
                    return;
                };
                let Some(rect) = container_rect() else { return };
                let threshold = MARKER_HIT_RADIUS * marker_scale(image_w, rect.width(), vp.zoom);
                if let Some(idx) = find_nearest(&markers, (img_x, img_y), threshold) {
                    selected_marker.set(Some(idx));
                }
            },

            onmouseleave: move |_| {
                viewport.write().cancel_drag();
            },

            ondoubleclick: move |evt: Event<MouseData>| {
                evt.prevent_default();
                viewport.write().reset();
            },

            onresize: move |_| {
                sync_container(viewport, image_w, image_h);
            },

            // Inner wrapper — the CSS transform applies pan/zoom to map + overlay together
            div {
                class: "map-inner",
                style: "{transform_style}",

                img { src: "{image_url}", alt: "{region.display_name}", draggable: "false" }

                div {
                    dangerous_inner_html: "{svg_html}",
                    style: "position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;",
                }
            }

            // Popup lives outside the transform so its text renders unscaled
            if let Some((marker, left, top)) = popup {
                MarkerPopup {
                    marker: marker,
                    left: left,
                    top: top,
                    on_dismiss: move |_| selected_marker.set(None),
                }
            }
        }
    }
}
