//! Pan/zoom state for the map view.
//!
//! All coordinates are container-relative pixels. `content` is the rendered
//! size of the map layer at zoom 1; the CSS transform applied to that layer
//! is `translate(offset) scale(zoom)` with origin at the top-left corner.

/// Hard upper zoom limit.
pub const MAX_ZOOM: f64 = 5.0;

/// Multiplier applied per wheel notch.
pub const WHEEL_ZOOM_STEP: f64 = 1.1;

/// Multipliers for the zoom buttons.
pub const BUTTON_ZOOM_IN: f64 = 1.2;
pub const BUTTON_ZOOM_OUT: f64 = 0.8;

/// Drag threshold in pixels — movement below this is treated as a click.
pub const DRAG_THRESHOLD: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_measurable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Transform descriptor for the map layer, ready for
/// `translate({x}px, {y}px) scale({s})` with `transform-origin: 0 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

/// Transient pointer-drag state, created on pointer-down and destroyed on
/// pointer-up/leave.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    anchor_x: f64,
    anchor_y: f64,
    origin_x: f64,
    origin_y: f64,
    moved: bool,
}

/// Clamp an offset so the map layer can't be dragged off-screen.
///
/// When the scaled content exceeds the container on an axis the offset may
/// range over `[-(content·zoom − container), 0]`; when it doesn't, the only
/// valid offset is 0 (top/left aligned, no empty canvas revealed).
pub fn clamp_offset(
    offset_x: f64,
    offset_y: f64,
    zoom: f64,
    container: Size,
    content: Size,
) -> (f64, f64) {
    let min_x = -(content.width * zoom - container.width).max(0.0);
    let min_y = -(content.height * zoom - container.height).max(0.0);
    (offset_x.clamp(min_x, 0.0), offset_y.clamp(min_y, 0.0))
}

/// The zoom at which the content fits the container:
/// `min(container_w/content_w, container_h/content_h)`, capped at [`MAX_ZOOM`].
pub fn fit_zoom(container: Size, content: Size) -> f64 {
    (container.width / content.width)
        .min(container.height / content.height)
        .min(MAX_ZOOM)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub offset_x: f64,
    pub offset_y: f64,
    pub zoom: f64,
    pub min_zoom: f64,
    container: Size,
    content: Size,
    drag: Option<DragState>,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            min_zoom: 1.0,
            container: Size::new(0.0, 0.0),
            content: Size::new(0.0, 0.0),
            drag: None,
        }
    }
}

impl Viewport {
    pub fn new(container: Size, content: Size) -> Self {
        let mut vp = Self::default();
        vp.configure(container, content);
        vp
    }

    /// Update container/content dimensions and recompute the fit zoom.
    ///
    /// Ignored while either size is unmeasured (zero); the caller retries on
    /// the next resize notification. The first successful measurement resets
    /// the view to fit-and-center; later ones snap the zoom up and recenter
    /// if it fell below the new minimum, otherwise just re-clamp the offset.
    pub fn configure(&mut self, container: Size, content: Size) {
        if !container.is_measurable() || !content.is_measurable() {
            return;
        }
        let first = !self.container.is_measurable() || !self.content.is_measurable();
        self.container = container;
        self.content = content;
        self.min_zoom = fit_zoom(container, content);

        if first || self.zoom < self.min_zoom {
            self.reset();
        } else {
            self.apply_offset(self.offset_x, self.offset_y);
        }
    }

    /// Fit the content and center it. Idempotent.
    pub fn reset(&mut self) {
        self.zoom = self.min_zoom;
        let cx = (self.container.width - self.content.width * self.zoom) / 2.0;
        let cy = (self.container.height - self.content.height * self.zoom) / 2.0;
        self.apply_offset(cx, cy);
    }

    pub fn begin_drag(&mut self, pointer_x: f64, pointer_y: f64) {
        self.drag = Some(DragState {
            anchor_x: pointer_x - self.offset_x,
            anchor_y: pointer_y - self.offset_y,
            origin_x: pointer_x,
            origin_y: pointer_y,
            moved: false,
        });
    }

    /// Move the map under an active drag. No-op when no drag is active or
    /// while the pointer hasn't crossed [`DRAG_THRESHOLD`].
    pub fn drag_to(&mut self, pointer_x: f64, pointer_y: f64) {
        let Some(mut drag) = self.drag else {
            return;
        };
        if !drag.moved {
            let dx = pointer_x - drag.origin_x;
            let dy = pointer_y - drag.origin_y;
            if dx.abs() > DRAG_THRESHOLD || dy.abs() > DRAG_THRESHOLD {
                drag.moved = true;
            }
        }
        if drag.moved {
            self.apply_offset(pointer_x - drag.anchor_x, pointer_y - drag.anchor_y);
        }
        self.drag = Some(drag);
    }

    /// End an active drag. Returns true when the pointer never crossed the
    /// drag threshold, i.e. the gesture was a click. Idempotent; further
    /// calls return false.
    pub fn end_drag(&mut self) -> bool {
        match self.drag.take() {
            Some(drag) => !drag.moved,
            None => false,
        }
    }

    /// Pointer left the container: drop the drag without click semantics.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Zoom by `factor` keeping the content point under `(pointer_x, pointer_y)`
    /// fixed on screen. Zoom and offset are clamped; a request that clamps to
    /// the current zoom is a no-op.
    pub fn zoom_at(&mut self, pointer_x: f64, pointer_y: f64, factor: f64) {
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(self.min_zoom, MAX_ZOOM);
        if (new_zoom - old_zoom).abs() < 1e-9 {
            return;
        }
        let content_x = (pointer_x - self.offset_x) / old_zoom;
        let content_y = (pointer_y - self.offset_y) / old_zoom;
        self.zoom = new_zoom;
        self.apply_offset(
            pointer_x - content_x * new_zoom,
            pointer_y - content_y * new_zoom,
        );
    }

    /// Button-driven zoom about the container center.
    pub fn zoom_step(&mut self, factor: f64) {
        self.zoom_at(
            self.container.width / 2.0,
            self.container.height / 2.0,
            factor,
        );
    }

    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            translate_x: self.offset_x,
            translate_y: self.offset_y,
            scale: self.zoom,
        }
    }

    pub fn content_to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.zoom + self.offset_x, y * self.zoom + self.offset_y)
    }

    pub fn screen_to_content(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.offset_x) / self.zoom,
            (y - self.offset_y) / self.zoom,
        )
    }

    fn apply_offset(&mut self, x: f64, y: f64) {
        let (x, y) = clamp_offset(x, y, self.zoom, self.container, self.content);
        self.offset_x = x;
        self.offset_y = y;
    }
}
