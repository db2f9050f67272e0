//! Conversions between container pixel space and native map-image pixel
//! space, undoing the pan/zoom CSS transform. Regions differ in image size,
//! so the image dimensions are parameters rather than constants.

/// Rendered size of the map layer at zoom 1.
///
/// The image spans the container width (`width: 100%; height: auto`), so both
/// axes share the same scale factor and only the container width matters.
/// Returns `None` while any dimension is unmeasured.
pub fn rendered_base_size(container_w: f64, image_w: f64, image_h: f64) -> Option<(f64, f64)> {
    if container_w <= 0.0 || image_w <= 0.0 || image_h <= 0.0 {
        return None;
    }
    Some((container_w, container_w * image_h / image_w))
}

/// Pure function: convert container-relative coordinates to native map-image
/// pixels, undoing the `translate(pan) scale(zoom)` transform. Usable in unit
/// tests (no web_sys dependency).
pub fn container_to_map_px(
    container_x: f64,
    container_y: f64,
    container_w: f64,
    image_w: f64,
    image_h: f64,
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
) -> Option<(f64, f64)> {
    if container_w <= 0.0 || image_w <= 0.0 || zoom <= 0.0 {
        return None;
    }

    // Undo CSS transform: translate(pan_x, pan_y) scale(zoom)
    let rendered_x = (container_x - pan_x) / zoom;
    let rendered_y = (container_y - pan_y) / zoom;

    // Convert from rendered size to native image pixels.
    let scale = image_w / container_w;
    let img_x = (rendered_x * scale).clamp(0.0, image_w);
    let img_y = (rendered_y * scale).clamp(0.0, image_h);

    Some((img_x, img_y))
}

/// Inverse of [`container_to_map_px`]: project a map-image pixel into
/// container-relative coordinates under the current transform.
pub fn map_px_to_container(
    img_x: f64,
    img_y: f64,
    container_w: f64,
    image_w: f64,
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
) -> (f64, f64) {
    let scale = if image_w > 0.0 {
        container_w / image_w
    } else {
        1.0
    };
    (
        img_x * scale * zoom + pan_x,
        img_y * scale * zoom + pan_y,
    )
}

/// Get container-relative click coordinates using web_sys, then convert from
/// rendered pixel space to map-image pixel space.
pub fn click_to_map_px(
    client_x: f64,
    client_y: f64,
    container_id: &str,
    image_w: f64,
    image_h: f64,
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
) -> Option<(f64, f64)> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    let rect = element.get_bounding_client_rect();

    container_to_map_px(
        client_x - rect.left(),
        client_y - rect.top(),
        rect.width(),
        image_w,
        image_h,
        zoom,
        pan_x,
        pan_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMG_W: f64 = 800.0;
    const IMG_H: f64 = 600.0;

    #[test]
    fn test_rendered_base_size_preserves_aspect() {
        let (w, h) = rendered_base_size(400.0, IMG_W, IMG_H).unwrap();
        assert!((w - 400.0).abs() < 1e-9);
        assert!((h - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_rendered_base_size_unmeasured() {
        assert!(rendered_base_size(0.0, IMG_W, IMG_H).is_none());
        assert!(rendered_base_size(400.0, 0.0, IMG_H).is_none());
    }

    #[test]
    fn test_container_to_map_px_no_zoom() {
        // Container width matches the native image: identity mapping
        let (x, y) = container_to_map_px(400.0, 300.0, 800.0, IMG_W, IMG_H, 1.0, 0.0, 0.0).unwrap();
        assert!((x - 400.0).abs() < 1e-9);
        assert!((y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_container_to_map_px_with_zoom() {
        // At zoom 2 with no pan, (400, 300) maps to the image point (200, 150)
        let (x, y) = container_to_map_px(400.0, 300.0, 800.0, IMG_W, IMG_H, 2.0, 0.0, 0.0).unwrap();
        assert!((x - 200.0).abs() < 1e-9);
        assert!((y - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_container_to_map_px_with_pan() {
        // Pan (100, 50): clicking at (500, 350) equals clicking (400, 300) unpanned
        let (x, y) =
            container_to_map_px(500.0, 350.0, 800.0, IMG_W, IMG_H, 1.0, 100.0, 50.0).unwrap();
        assert!((x - 400.0).abs() < 1e-9);
        assert!((y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_container_to_map_px_half_width_container() {
        // Container at half the native width doubles the pixel scale
        let (x, y) = container_to_map_px(200.0, 150.0, 400.0, IMG_W, IMG_H, 1.0, 0.0, 0.0).unwrap();
        assert!((x - 400.0).abs() < 1e-9);
        assert!((y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_container_to_map_px_clamps_to_image() {
        let (x, y) =
            container_to_map_px(-100.0, -100.0, 800.0, IMG_W, IMG_H, 1.0, 0.0, 0.0).unwrap();
        assert!((x - 0.0).abs() < 1e-9);
        assert!((y - 0.0).abs() < 1e-9);

        let (x, y) =
            container_to_map_px(5000.0, 5000.0, 800.0, IMG_W, IMG_H, 1.0, 0.0, 0.0).unwrap();
        assert!((x - IMG_W).abs() < 1e-9);
        assert!((y - IMG_H).abs() < 1e-9);
    }

    #[test]
    fn test_container_to_map_px_invalid_inputs() {
        assert!(container_to_map_px(400.0, 300.0, 0.0, IMG_W, IMG_H, 1.0, 0.0, 0.0).is_none());
        assert!(container_to_map_px(400.0, 300.0, 800.0, IMG_W, IMG_H, 0.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn test_map_px_roundtrip() {
        let (cx, cy) = map_px_to_container(321.0, 123.0, 640.0, IMG_W, 1.7, -42.0, -17.0);
        let (ix, iy) =
            container_to_map_px(cx, cy, 640.0, IMG_W, IMG_H, 1.7, -42.0, -17.0).unwrap();
        assert!((ix - 321.0).abs() < 1e-9);
        assert!((iy - 123.0).abs() < 1e-9);
    }

    #[test]
    fn test_map_px_to_container_applies_transform() {
        // scale = 640/800 = 0.8; (100, 200) -> (100*0.8*2 - 30, 200*0.8*2 + 10)
        let (cx, cy) = map_px_to_container(100.0, 200.0, 640.0, IMG_W, 2.0, -30.0, 10.0);
        assert!((cx - 130.0).abs() < 1e-9);
        assert!((cy - 330.0).abs() < 1e-9);
    }
}
