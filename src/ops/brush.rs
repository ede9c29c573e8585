// ============================================================================
// BRUSH: anti-aliased stroke segments and the painting state machine
// ============================================================================

use image::{Rgb, RgbImage};

use crate::canvas::Viewport;

pub const DEFAULT_BRUSH_WIDTH: u32 = 8;
pub const DEFAULT_BRUSH_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Swatches offered next to the brush toggle.
pub const PALETTE: &[(&str, [u8; 3])] = &[
    ("White", [255, 255, 255]),
    ("Black", [0, 0, 0]),
    ("Red", [255, 0, 0]),
    ("Green", [0, 255, 0]),
    ("Blue", [0, 0, 255]),
    ("Yellow", [255, 255, 0]),
];

/// Look up a palette swatch by name (case-insensitive).
pub fn palette_color(name: &str) -> Option<Rgb<u8>> {
    PALETTE
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name.trim()))
        .map(|(_, rgb)| Rgb(*rgb))
}

/// Parse `"r,g,b"` or a palette name.
pub fn parse_color(s: &str) -> Option<Rgb<u8>> {
    if let Some(c) = palette_color(s) {
        return Some(c);
    }
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return None;
    }
    let r = parts[0].trim().parse::<u8>().ok()?;
    let g = parts[1].trim().parse::<u8>().ok()?;
    let b = parts[2].trim().parse::<u8>().ok()?;
    Some(Rgb([r, g, b]))
}

/// One straight piece of a stroke, in image pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrokeSegment {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl StrokeSegment {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Both endpoints clamped into `[0, w-1] × [0, h-1]`.
    pub fn clamped(&self, w: u32, h: u32) -> StrokeSegment {
        let max_x = w.saturating_sub(1) as i32;
        let max_y = h.saturating_sub(1) as i32;
        StrokeSegment {
            x0: self.x0.clamp(0, max_x),
            y0: self.y0.clamp(0, max_y),
            x1: self.x1.clamp(0, max_x),
            y1: self.y1.clamp(0, max_y),
        }
    }
}

/// Distance from `(px, py)` to the segment `a → b`.
#[inline]
fn sdf_line_segment(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let dx = bx - ax;
    let dy = by - ay;
    let len2 = dx * dx + dy * dy;
    let t = if len2 > f32::EPSILON {
        (((px - ax) * dx + (py - ay) * dy) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let cx = ax + t * dx;
    let cy = ay + t * dy;
    ((px - cx) * (px - cx) + (py - cy) * (py - cy)).sqrt()
}

#[inline]
fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Draw `seg` into `img` as an anti-aliased line `width` pixels wide.
///
/// Endpoints are clamped into the buffer first; pixels are blended toward
/// `color` by their coverage so edges stay smooth.
pub fn draw_segment(img: &mut RgbImage, seg: StrokeSegment, color: Rgb<u8>, width: u32) {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    let seg = seg.clamped(w, h);
    let half = width.max(1) as f32 * 0.5;

    // Endpoints sit on pixel centers.
    let (ax, ay) = (seg.x0 as f32 + 0.5, seg.y0 as f32 + 0.5);
    let (bx, by) = (seg.x1 as f32 + 0.5, seg.y1 as f32 + 0.5);

    let pad = half + 1.0;
    let min_x = (ax.min(bx) - pad).floor().max(0.0) as u32;
    let min_y = (ay.min(by) - pad).floor().max(0.0) as u32;
    let max_x = ((ax.max(bx) + pad).ceil() as u32).min(w);
    let max_y = ((ay.max(by) + pad).ceil() as u32).min(h);

    for y in min_y..max_y {
        let py = y as f32 + 0.5;
        for x in min_x..max_x {
            let px = x as f32 + 0.5;
            let d = sdf_line_segment(px, py, ax, ay, bx, by) - half;
            let coverage = smoothstep(0.5, -0.5, d);
            if coverage <= 0.001 {
                continue;
            }
            let dst = img.get_pixel_mut(x, y);
            for c in 0..3 {
                let v = dst[c] as f32 + (color[c] as f32 - dst[c] as f32) * coverage;
                dst[c] = v.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

/// Which pointer button an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Progress of the current stroke, in container coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum StrokeState {
    #[default]
    Idle,
    Drawing { last: (f32, f32) },
}

/// Brush settings, the clear-paint baseline, and the stroke tracker.
#[derive(Clone, Debug)]
pub struct PaintState {
    enabled: bool,
    color: Rgb<u8>,
    width: u32,
    /// Snapshot restored by "clear paint".
    baseline: Option<RgbImage>,
    stroke: StrokeState,
}

impl Default for PaintState {
    fn default() -> Self {
        Self::new(DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_WIDTH)
    }
}

impl PaintState {
    pub fn new(color: Rgb<u8>, width: u32) -> Self {
        Self {
            enabled: false,
            color,
            width: width.max(1),
            baseline: None,
            stroke: StrokeState::Idle,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn color(&self) -> Rgb<u8> {
        self.color
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn stroke(&self) -> StrokeState {
        self.stroke
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self.stroke, StrokeState::Drawing { .. })
    }

    pub fn baseline(&self) -> Option<&RgbImage> {
        self.baseline.as_ref()
    }

    pub fn set_color(&mut self, color: Rgb<u8>) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width.max(1);
    }

    /// Toggle painting. Enabling snapshots `current` as the new baseline;
    /// either direction drops any stroke in progress without a final segment.
    pub fn set_enabled(&mut self, enabled: bool, current: Option<&RgbImage>) {
        self.enabled = enabled;
        self.stroke = StrokeState::Idle;
        if enabled && let Some(img) = current {
            self.baseline = Some(img.clone());
        }
    }

    /// Replace the baseline with a copy of `img`.
    pub fn rebase(&mut self, img: &RgbImage) {
        self.baseline = Some(img.clone());
    }

    /// Forget the baseline and any stroke (session went back home).
    pub fn reset(&mut self) {
        self.enabled = false;
        self.baseline = None;
        self.stroke = StrokeState::Idle;
    }

    /// Start a stroke when painting is on, the primary button went down and
    /// the pointer is over the image. Returns whether a stroke started.
    pub fn pointer_down(&mut self, pos: (f32, f32), button: PointerButton, viewport: &Viewport) -> bool {
        if !self.enabled || button != PointerButton::Primary {
            return false;
        }
        if viewport.map_pointer(pos.0, pos.1).is_none() {
            return false;
        }
        self.stroke = StrokeState::Drawing { last: pos };
        true
    }

    /// Emit the segment from the previous pointer position to `pos`. Nothing
    /// is emitted when either end falls outside the image, but the tracked
    /// position still advances.
    pub fn pointer_move(&mut self, pos: (f32, f32), viewport: &Viewport) -> Option<StrokeSegment> {
        if !self.enabled {
            return None;
        }
        let StrokeState::Drawing { last } = self.stroke else { return None };
        self.stroke = StrokeState::Drawing { last: pos };
        segment_between(last, pos, viewport)
    }

    /// End the stroke. The primary button emits one final segment.
    pub fn pointer_up(&mut self, pos: (f32, f32), button: PointerButton, viewport: &Viewport) -> Option<StrokeSegment> {
        if !self.enabled {
            return None;
        }
        let StrokeState::Drawing { last } = self.stroke else { return None };
        self.stroke = StrokeState::Idle;
        if button != PointerButton::Primary {
            return None;
        }
        segment_between(last, pos, viewport)
    }
}

fn segment_between(a: (f32, f32), b: (f32, f32), viewport: &Viewport) -> Option<StrokeSegment> {
    let a = viewport.map_pointer(a.0, a.1)?;
    let b = viewport.map_pointer(b.0, b.1)?;
    Some(StrokeSegment::new(a.x as i32, a.y as i32, b.x as i32, b.y as i32))
}
