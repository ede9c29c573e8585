// ============================================================================
// VIEWPORT: display scale, zoom mode, and pointer → image pixel mapping
// ============================================================================

/// Smallest scale ever used as a divisor when mapping pointer positions.
pub const MIN_SCALE_EPSILON: f32 = 1e-9;

/// Multiplier applied per zoom-in step (divisor per zoom-out step).
pub const DEFAULT_ZOOM_STEP: f32 = 1.25;
pub const DEFAULT_MIN_SCALE: f32 = 1.0 / 16.0;
pub const DEFAULT_MAX_SCALE: f32 = 16.0;

/// How the display scale is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZoomMode {
    /// Scale follows the container so the whole image fits.
    #[default]
    AutoFit,
    /// Scale was set by explicit zoom actions and ignores the container.
    Manual,
}

/// Step factor and clamp range for manual zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    pub step: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            step: DEFAULT_ZOOM_STEP,
            min: DEFAULT_MIN_SCALE,
            max: DEFAULT_MAX_SCALE,
        }
    }
}

impl ZoomLimits {
    /// Build limits from user settings, falling back to the defaults for any
    /// value that would break `scale > 0` or make zooming a no-op.
    pub fn new(step: f32, min: f32, max: f32) -> Self {
        let defaults = Self::default();
        let step = if step.is_finite() && step > 1.0 { step } else { defaults.step };
        let min = if min.is_finite() && min > 0.0 { min } else { defaults.min };
        let max = if max.is_finite() && max >= min { max } else { defaults.max.max(min) };
        Self { step, min, max }
    }

    pub fn clamp(&self, scale: f32) -> f32 {
        scale.clamp(self.min, self.max)
    }
}

/// Integer pixel coordinate inside the image buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImagePoint {
    pub x: u32,
    pub y: u32,
}

/// The scaled image as laid out inside its container (container coordinates).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl DisplayRect {
    /// Center an `image_w × image_h` image drawn at `scale` inside a
    /// `container_w × container_h` area. Offsets never go negative: an image
    /// larger than its container is anchored at the top-left.
    pub fn centered(container: (f32, f32), image: (u32, u32), scale: f32) -> Self {
        let width = (image.0 as f32 * scale).floor().max(1.0);
        let height = (image.1 as f32 * scale).floor().max(1.0);
        let x = ((container.0 - width) / 2.0).floor().max(0.0);
        let y = ((container.1 - height) / 2.0).floor().max(0.0);
        Self { x, y, width, height }
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Convert a container-space position to an image pixel.
///
/// Returns `None` for positions outside `rect`; positions are never clamped
/// onto the image edge.
pub fn map_to_image(px: f32, py: f32, rect: &DisplayRect, scale: f32) -> Option<ImagePoint> {
    if !rect.contains(px, py) {
        return None;
    }
    let scale = scale.max(MIN_SCALE_EPSILON);
    // Local offsets are non-negative here, so `as u32` truncates toward zero.
    let x = ((px - rect.x) / scale) as u32;
    let y = ((py - rect.y) / scale) as u32;
    Some(ImagePoint { x, y })
}

/// View state for one editing session: owns the display scale and decides
/// when it is recomputed.
#[derive(Clone, Debug)]
pub struct Viewport {
    scale: f32,
    zoom_mode: ZoomMode,
    /// Most recent auto-fit result, kept even while manual zoom is active.
    last_computed_scale: f32,
    container: (f32, f32),
    image_size: Option<(u32, u32)>,
    limits: ZoomLimits,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl Viewport {
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            scale: 1.0,
            zoom_mode: ZoomMode::AutoFit,
            last_computed_scale: 1.0,
            container: (0.0, 0.0),
            image_size: None,
            limits,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn zoom_mode(&self) -> ZoomMode {
        self.zoom_mode
    }

    pub fn is_manual(&self) -> bool {
        self.zoom_mode == ZoomMode::Manual
    }

    pub fn last_computed_scale(&self) -> f32 {
        self.last_computed_scale
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    pub fn image_size(&self) -> Option<(u32, u32)> {
        self.image_size
    }

    /// `min(container_w / image_w, container_h / image_h)`, or `None` when
    /// either side is empty and no meaningful fit exists.
    pub fn fit_scale(container: (f32, f32), image: (u32, u32)) -> Option<f32> {
        if container.0 <= 0.0 || container.1 <= 0.0 || image.0 == 0 || image.1 == 0 {
            return None;
        }
        let sx = container.0 / image.0 as f32;
        let sy = container.1 / image.1 as f32;
        Some(sx.min(sy).max(MIN_SCALE_EPSILON))
    }

    fn refit(&mut self) {
        let Some(image) = self.image_size else { return };
        if let Some(fit) = Self::fit_scale(self.container, image) {
            self.last_computed_scale = fit;
            self.scale = fit;
        }
    }

    /// The container widget changed size. Only auto-fit follows it; a manual
    /// zoom level is left exactly where the user put it.
    pub fn set_container_size(&mut self, width: f32, height: f32) {
        self.container = (width.max(0.0), height.max(0.0));
        if self.zoom_mode == ZoomMode::AutoFit {
            self.refit();
        }
    }

    /// A new buffer is about to be displayed.
    ///
    /// With `preserve_scale` (used right after a brush segment) the auto-fit
    /// scale is left untouched so the view does not jitter mid-stroke.
    pub fn image_replaced(&mut self, width: u32, height: u32, preserve_scale: bool) {
        self.image_size = Some((width, height));
        match self.zoom_mode {
            ZoomMode::Manual => {}
            ZoomMode::AutoFit if preserve_scale => {}
            ZoomMode::AutoFit => self.refit(),
        }
    }

    /// One step closer. Without an image there is nothing to zoom and the
    /// view stays in auto-fit; returns whether the step was taken.
    ///
    /// The limits only bound movement in the zoom direction, so an auto-fit
    /// scale already above `max` is never pulled back down by zooming in.
    pub fn zoom_in(&mut self) -> bool {
        if self.image_size.is_none() {
            return false;
        }
        self.zoom_mode = ZoomMode::Manual;
        self.scale = self.scale.max(self.limits.clamp(self.scale * self.limits.step));
        true
    }

    /// One step further away. Mirror of [`Viewport::zoom_in`].
    pub fn zoom_out(&mut self) -> bool {
        if self.image_size.is_none() {
            return false;
        }
        self.zoom_mode = ZoomMode::Manual;
        self.scale = self.scale.min(self.limits.clamp(self.scale / self.limits.step));
        true
    }

    /// Leave manual zoom and fit the current image to the container again.
    pub fn fit_to_window(&mut self) {
        self.zoom_mode = ZoomMode::AutoFit;
        self.refit();
    }

    /// Back to the unloaded home state: auto-fit, no image.
    pub fn reset_home(&mut self) {
        self.zoom_mode = ZoomMode::AutoFit;
        self.image_size = None;
        self.scale = 1.0;
        self.last_computed_scale = 1.0;
    }

    /// Where the image is drawn inside the container, if an image is shown.
    pub fn display_rect(&self) -> Option<DisplayRect> {
        let image = self.image_size?;
        Some(DisplayRect::centered(self.container, image, self.scale))
    }

    /// Map a pointer position (container coordinates) to an image pixel.
    pub fn map_pointer(&self, px: f32, py: f32) -> Option<ImagePoint> {
        let (w, h) = self.image_size?;
        let rect = self.display_rect()?;
        let p = map_to_image(px, py, &rect, self.scale)?;
        // Float rounding on the far edge can land exactly on `w` / `h`.
        Some(ImagePoint {
            x: p.x.min(w.saturating_sub(1)),
            y: p.y.min(h.saturating_sub(1)),
        })
    }

    /// Container position of the top-left corner of image pixel `p`.
    pub fn image_to_container(&self, p: ImagePoint) -> Option<(f32, f32)> {
        let rect = self.display_rect()?;
        Some((rect.x + p.x as f32 * self.scale, rect.y + p.y as f32 * self.scale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted(container: (f32, f32), image: (u32, u32)) -> Viewport {
        let mut vp = Viewport::default();
        vp.set_container_size(container.0, container.1);
        vp.image_replaced(image.0, image.1, false);
        vp
    }

    #[test]
    fn auto_fit_picks_the_tighter_axis() {
        let vp = fitted((800.0, 600.0), (400, 100));
        assert!((vp.scale() - 2.0).abs() < 1e-6);
        let vp = fitted((800.0, 600.0), (1600, 600));
        assert!((vp.scale() - 0.5).abs() < 1e-6);
        assert_eq!(vp.zoom_mode(), ZoomMode::AutoFit);
    }

    #[test]
    fn display_rect_is_centered_and_never_negative() {
        let vp = fitted((800.0, 600.0), (1600, 600));
        let rect = vp.display_rect().unwrap();
        assert_eq!(rect, DisplayRect { x: 0.0, y: 150.0, width: 800.0, height: 300.0 });

        let big = DisplayRect::centered((100.0, 100.0), (400, 400), 1.0);
        assert_eq!((big.x, big.y), (0.0, 0.0));
    }

    #[test]
    fn pointer_outside_rect_has_no_mapping() {
        let vp = fitted((800.0, 600.0), (1600, 600));
        let rect = vp.display_rect().unwrap();
        let outside = [
            (-1.0, 300.0),
            (400.0, rect.y - 0.5),
            (400.0, rect.y + rect.height),
            (rect.x + rect.width, 300.0),
            (5000.0, 5000.0),
        ];
        for (x, y) in outside {
            assert_eq!(vp.map_pointer(x, y), None, "({x}, {y}) should not map");
        }
    }

    #[test]
    fn pointer_maps_by_offset_then_scale() {
        let vp = fitted((800.0, 600.0), (1600, 600));
        assert_eq!(vp.map_pointer(0.0, 150.0), Some(ImagePoint { x: 0, y: 0 }));
        assert_eq!(vp.map_pointer(10.9, 160.2), Some(ImagePoint { x: 21, y: 20 }));
        assert_eq!(vp.map_pointer(799.9, 449.9), Some(ImagePoint { x: 1599, y: 599 }));
    }

    #[test]
    fn mapping_then_inverse_stays_within_a_pixel() {
        let vp = fitted((640.0, 480.0), (1000, 700));
        let rect = vp.display_rect().unwrap();
        let mut py = rect.y;
        while py < rect.y + rect.height {
            let mut px = rect.x;
            while px < rect.x + rect.width {
                let p = vp.map_pointer(px, py).unwrap();
                let (bx, by) = vp.image_to_container(p).unwrap();
                assert!((bx - px).abs() <= 1.0, "x {px} -> {bx}");
                assert!((by - py).abs() <= 1.0, "y {py} -> {by}");
                px += 7.3;
            }
            py += 5.1;
        }
    }

    #[test]
    fn zero_scale_is_clamped_before_division() {
        let rect = DisplayRect { x: 0.0, y: 0.0, width: 10.0, height: 10.0 };
        let p = map_to_image(0.0, 0.0, &rect, 0.0).unwrap();
        assert_eq!(p, ImagePoint { x: 0, y: 0 });
    }

    #[test]
    fn zoom_in_then_out_returns_to_start() {
        let mut vp = fitted((800.0, 600.0), (800, 600));
        let start = vp.scale();
        for _ in 0..5 {
            vp.zoom_in();
        }
        assert_eq!(vp.zoom_mode(), ZoomMode::Manual);
        for _ in 0..5 {
            vp.zoom_out();
        }
        assert!((vp.scale() - start).abs() < 1e-5);
    }

    #[test]
    fn zoom_is_clamped_to_limits() {
        let mut vp = fitted((800.0, 600.0), (800, 600));
        for _ in 0..100 {
            vp.zoom_in();
        }
        assert_eq!(vp.scale(), DEFAULT_MAX_SCALE);
        for _ in 0..200 {
            vp.zoom_out();
        }
        assert_eq!(vp.scale(), DEFAULT_MIN_SCALE);
    }

    #[test]
    fn zoom_without_image_stays_auto_fit() {
        let mut vp = Viewport::default();
        vp.set_container_size(800.0, 600.0);
        assert!(!vp.zoom_in());
        assert!(!vp.zoom_out());
        assert_eq!(vp.zoom_mode(), ZoomMode::AutoFit);

        vp.image_replaced(400, 300, false);
        assert_eq!(vp.zoom_mode(), ZoomMode::AutoFit);
        assert!((vp.scale() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn zoom_never_moves_against_its_direction() {
        // Tiny image in a big window fits above the max scale.
        let mut vp = fitted((800.0, 600.0), (10, 10));
        assert!((vp.scale() - 60.0).abs() < 1e-4);
        assert!(vp.zoom_in());
        assert!((vp.scale() - 60.0).abs() < 1e-4);
        assert!(vp.zoom_out());
        assert!(vp.scale() < 60.0);
        assert!(vp.scale() >= DEFAULT_MAX_SCALE);

        // Huge image in a small window fits below the min scale.
        let mut vp = fitted((100.0, 100.0), (4000, 4000));
        assert!((vp.scale() - 0.025).abs() < 1e-6);
        assert!(vp.zoom_out());
        assert!((vp.scale() - 0.025).abs() < 1e-6);
        assert!(vp.zoom_in());
        assert!(vp.scale() > 0.025);
        assert!(vp.scale() <= DEFAULT_MIN_SCALE);
    }

    #[test]
    fn manual_zoom_survives_resize_and_image_replacement() {
        let mut vp = fitted((800.0, 600.0), (800, 600));
        vp.zoom_in();
        let zoomed = vp.scale();
        vp.set_container_size(300.0, 200.0);
        assert_eq!(vp.scale(), zoomed);
        vp.image_replaced(50, 50, false);
        assert_eq!(vp.scale(), zoomed);

        vp.fit_to_window();
        assert_eq!(vp.zoom_mode(), ZoomMode::AutoFit);
        assert!((vp.scale() - 4.0).abs() < 1e-6);
    }

    #[test]
    fn preserve_scale_skips_refit() {
        let mut vp = fitted((800.0, 600.0), (800, 600));
        vp.set_container_size(800.0, 600.0);
        let before = vp.scale();
        vp.image_replaced(400, 300, true);
        assert_eq!(vp.scale(), before);
        vp.image_replaced(400, 300, false);
        assert!((vp.scale() - 2.0).abs() < 1e-6);
        assert_eq!(vp.last_computed_scale(), vp.scale());
    }

    #[test]
    fn reset_home_returns_to_auto_fit() {
        let mut vp = fitted((800.0, 600.0), (800, 600));
        vp.zoom_in();
        vp.reset_home();
        assert_eq!(vp.zoom_mode(), ZoomMode::AutoFit);
        assert_eq!(vp.display_rect(), None);
        assert_eq!(vp.map_pointer(10.0, 10.0), None);
        assert!(vp.scale() > 0.0);
    }

    #[test]
    fn empty_container_keeps_previous_scale() {
        let mut vp = fitted((800.0, 600.0), (400, 300));
        vp.set_container_size(0.0, 0.0);
        assert!((vp.scale() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn limits_sanitize_bad_settings() {
        let l = ZoomLimits::new(0.5, -1.0, f32::NAN);
        assert_eq!(l, ZoomLimits::default());
    }
}
