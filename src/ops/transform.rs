// ============================================================================
// RESIZE: interpolation choice, area averaging, aspect-ratio lock
// ============================================================================

use image::{RgbImage, imageops};
use rayon::prelude::*;

/// Scale factor of the "Shrink" preset.
pub const SHRINK_FACTOR: f32 = 0.5;
/// Scale factor of the "Size Up" preset.
pub const ENLARGE_FACTOR: f32 = 1.5;

/// Interpolation method for resize operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interpolation {
    /// Bilinear upsampling.
    Bilinear,
    /// Box-filter averaging over the covered source area.
    Area,
}

impl Interpolation {
    pub fn label(&self) -> &'static str {
        match self {
            Interpolation::Bilinear => "Bilinear",
            Interpolation::Area => "Area",
        }
    }

    /// Upsample when the target holds more pixels than the source, else
    /// average.
    pub fn for_resize(src: (u32, u32), dst: (u32, u32)) -> Interpolation {
        let src_px = src.0 as u64 * src.1 as u64;
        let dst_px = dst.0 as u64 * dst.1 as u64;
        if dst_px > src_px { Interpolation::Bilinear } else { Interpolation::Area }
    }
}

/// Resize to `new_w × new_h` (each at least 1). Same-size requests return an
/// unchanged copy.
pub fn resize_image(src: &RgbImage, new_w: u32, new_h: u32) -> RgbImage {
    let new_w = new_w.max(1);
    let new_h = new_h.max(1);
    if src.dimensions() == (new_w, new_h) || src.width() == 0 || src.height() == 0 {
        return src.clone();
    }
    match Interpolation::for_resize(src.dimensions(), (new_w, new_h)) {
        Interpolation::Bilinear => imageops::resize(src, new_w, new_h, imageops::FilterType::Triangle),
        Interpolation::Area => area_resize(src, new_w, new_h),
    }
}

/// Dimensions after scaling both axes by `factor`, rounded, at least 1.
pub fn scaled_dimensions(w: u32, h: u32, factor: f32) -> (u32, u32) {
    let sw = (w as f32 * factor).round().max(1.0) as u32;
    let sh = (h as f32 * factor).round().max(1.0) as u32;
    (sw, sh)
}

/// For each destination index, the source indices it covers and the
/// fraction of each that falls inside the destination cell.
fn area_weights(src_len: u32, dst_len: u32) -> Vec<Vec<(usize, f32)>> {
    let ratio = src_len as f64 / dst_len as f64;
    (0..dst_len)
        .map(|o| {
            let start = o as f64 * ratio;
            let end = (o + 1) as f64 * ratio;
            let first = start.floor() as u32;
            let last = (end.ceil() as u32).min(src_len);
            let mut weights = Vec::with_capacity((last - first) as usize);
            for s in first..last {
                let lo = (s as f64).max(start);
                let hi = ((s + 1) as f64).min(end);
                if hi > lo {
                    weights.push((s as usize, (hi - lo) as f32));
                }
            }
            if weights.is_empty() {
                weights.push((first.min(src_len - 1) as usize, 1.0));
            }
            weights
        })
        .collect()
}

/// Area-averaging resize, parallel by destination row.
fn area_resize(src: &RgbImage, new_w: u32, new_h: u32) -> RgbImage {
    let (sw, sh) = src.dimensions();
    let xw = area_weights(sw, new_w);
    let yw = area_weights(sh, new_h);
    let src_raw = src.as_raw();
    let src_stride = sw as usize * 3;
    let dst_stride = new_w as usize * 3;
    let mut dst_raw = vec![0u8; dst_stride * new_h as usize];

    dst_raw.par_chunks_mut(dst_stride).enumerate().for_each(|(y, row_out)| {
        let rows = &yw[y];
        for (x, cols) in xw.iter().enumerate() {
            let mut acc = [0.0f32; 3];
            let mut total = 0.0f32;
            for &(sy, wy) in rows {
                let row_off = sy * src_stride;
                for &(sx, wx) in cols {
                    let w = wx * wy;
                    let idx = row_off + sx * 3;
                    acc[0] += src_raw[idx] as f32 * w;
                    acc[1] += src_raw[idx + 1] as f32 * w;
                    acc[2] += src_raw[idx + 2] as f32 * w;
                    total += w;
                }
            }
            let inv = if total > 0.0 { 1.0 / total } else { 0.0 };
            let out = x * 3;
            for c in 0..3 {
                row_out[out + c] = (acc[c] * inv).round().clamp(0.0, 255.0) as u8;
            }
        }
    });

    RgbImage::from_raw(new_w, new_h, dst_raw).unwrap_or_else(|| RgbImage::new(new_w, new_h))
}

/// Width/height pair that keeps the aspect ratio it was created with:
/// editing one side recomputes the other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AspectLock {
    pub width: u32,
    pub height: u32,
    ratio: f32,
}

impl AspectLock {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            ratio: width as f32 / height as f32,
        }
    }

    pub fn set_width(&mut self, width: u32) {
        self.width = width.max(1);
        self.height = ((self.width as f32 / self.ratio).round() as u32).max(1);
    }

    pub fn set_height(&mut self, height: u32) {
        self.height = height.max(1);
        self.width = ((self.height as f32 * self.ratio).round() as u32).max(1);
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
