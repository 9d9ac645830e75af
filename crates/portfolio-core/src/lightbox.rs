//! Image lightbox: gallery paging, zoom and pan, swipe, orientation.
//!
//! Fully decoupled from the navigation controller — the lightbox owns its
//! own index/zoom state and closes without touching the scroll stack.

/// Minimum zoom factor (fit to frame).
pub const ZOOM_MIN: f64 = 1.0;
/// Maximum zoom factor.
pub const ZOOM_MAX: f64 = 2.5;
/// Zoom step per control activation.
pub const ZOOM_STEP: f64 = 0.2;
/// Horizontal travel below this many pixels is not a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Width/height within 12% of each other reads as square.
const SQUARE_TOLERANCE: f64 = 0.12;

/// One image of a gallery, with the caption line shown under the counter.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub title: String,
}

impl GalleryImage {
    pub fn new(
        src: impl Into<String>,
        alt: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            title: title.into(),
        }
    }
}

/// Aspect classification of the displayed image, used to size the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    /// Classify natural dimensions. Zero or negative dimensions (image not
    /// loaded yet) classify as nothing.
    pub fn classify(width: f64, height: f64) -> Option<Self> {
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        if (width - height).abs() / width.max(height) < SQUARE_TOLERANCE {
            Some(Orientation::Square)
        } else if width > height {
            Some(Orientation::Landscape)
        } else {
            Some(Orientation::Portrait)
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Square => "square",
        }
    }
}

/// The lightbox state machine. Open means a non-empty gallery is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxState {
    gallery: Vec<GalleryImage>,
    index: usize,
    zoom: f64,
    pan: (f64, f64),
    drag_origin: Option<(f64, f64)>,
    touch_start_x: Option<f64>,
    orientation: Option<Orientation>,
}

impl Default for LightboxState {
    fn default() -> Self {
        Self {
            gallery: Vec::new(),
            index: 0,
            zoom: ZOOM_MIN,
            pan: (0.0, 0.0),
            drag_origin: None,
            touch_start_x: None,
            orientation: None,
        }
    }
}

impl LightboxState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        !self.gallery.is_empty()
    }

    /// Open on a gallery at the given image. An empty gallery keeps the
    /// lightbox closed; an out-of-range index clamps to the last image.
    pub fn open(&mut self, gallery: Vec<GalleryImage>, index: usize) {
        if gallery.is_empty() {
            return;
        }
        self.index = index.min(gallery.len() - 1);
        self.gallery = gallery;
        self.reset_zoom();
        self.orientation = None;
        self.touch_start_x = None;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn current(&self) -> Option<&GalleryImage> {
        self.gallery.get(self.index)
    }

    /// "n / total" line, absent while closed.
    pub fn counter(&self) -> Option<String> {
        self.is_open()
            .then(|| format!("{} / {}", self.index + 1, self.gallery.len()))
    }

    pub fn title(&self) -> Option<&str> {
        self.current().map(|image| image.title.as_str())
    }

    /// Whether prev/next controls should show at all.
    pub fn has_navigation(&self) -> bool {
        self.gallery.len() > 1
    }

    /// Advance with wrap-around; zoom and orientation reset per image.
    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn prev(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, direction: isize) {
        if self.gallery.is_empty() {
            return;
        }
        let len = self.gallery.len() as isize;
        self.index = (self.index as isize + direction).rem_euclid(len) as usize;
        self.reset_zoom();
        self.orientation = None;
    }

    // --- zoom & pan ---------------------------------------------------------

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoom > ZOOM_MIN
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = ZOOM_MIN;
        self.pan = (0.0, 0.0);
        self.drag_origin = None;
    }

    fn set_zoom(&mut self, zoom: f64) {
        // Two-decimal rounding keeps repeated steps from accumulating float
        // error past the bounds.
        self.zoom = ((zoom.clamp(ZOOM_MIN, ZOOM_MAX)) * 100.0).round() / 100.0;
        self.clamp_pan();
    }

    /// Pan translation in pixels.
    pub fn pan(&self) -> (f64, f64) {
        self.pan
    }

    fn max_pan(&self) -> f64 {
        200.0 + (self.zoom - 1.0) * 220.0
    }

    fn clamp_pan(&mut self) {
        if self.zoom > ZOOM_MIN {
            let limit = self.max_pan();
            self.pan.0 = self.pan.0.clamp(-limit, limit);
            self.pan.1 = self.pan.1.clamp(-limit, limit);
        } else {
            self.pan = (0.0, 0.0);
        }
    }

    /// CSS transform for the image element.
    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.pan.0, self.pan.1, self.zoom
        )
    }

    pub fn cursor(&self) -> &'static str {
        if self.is_zoomed() {
            if self.is_dragging() {
                "grabbing"
            } else {
                "grab"
            }
        } else {
            "zoom-in"
        }
    }

    // --- drag to pan --------------------------------------------------------

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    /// Begin a drag at pointer position. Only meaningful while zoomed in.
    pub fn begin_drag(&mut self, x: f64, y: f64) {
        if self.is_zoomed() {
            self.drag_origin = Some((x - self.pan.0, y - self.pan.1));
        }
    }

    pub fn drag_to(&mut self, x: f64, y: f64) {
        if let Some((ox, oy)) = self.drag_origin {
            self.pan = (x - ox, y - oy);
            self.clamp_pan();
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_origin = None;
    }

    // --- touch swipe --------------------------------------------------------

    pub fn touch_start(&mut self, x: f64) {
        self.touch_start_x = Some(x);
    }

    /// Finish a touch; horizontal travel past the threshold pages the
    /// gallery.
    pub fn touch_end(&mut self, x: f64) {
        let Some(start) = self.touch_start_x.take() else {
            return;
        };
        if x < start - SWIPE_THRESHOLD {
            self.next();
        } else if x > start + SWIPE_THRESHOLD {
            self.prev();
        }
    }

    // --- orientation --------------------------------------------------------

    /// Record the natural dimensions once the current image has loaded.
    pub fn set_image_dimensions(&mut self, width: f64, height: f64) {
        self.orientation = Orientation::classify(width, height);
    }

    pub fn orientation_class(&self) -> Option<&'static str> {
        self.orientation.map(|o| o.class_name())
    }

    // --- keyboard -----------------------------------------------------------

    /// Handle a key while open. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            "Escape" => self.close(),
            "ArrowLeft" => self.prev(),
            "ArrowRight" => self.next(),
            "+" | "=" => self.zoom_in(),
            "-" | "_" => self.zoom_out(),
            "0" => self.reset_zoom(),
            _ => return false,
        }
        true
    }
}
