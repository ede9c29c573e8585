// ============================================================================
// IMAGE FILTERS: grayscale, sepia, invert, colormap
// ============================================================================

use image::RgbImage;
use rayon::prelude::*;

use super::colormap::Colormap;

/// Rec.601 luma weights (R, G, B).
const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Sepia mixing matrix in RGB order: row `i` produces output channel `i`.
/// Same coefficients as the classic BGR-ordered table, rows and columns reversed.
const SEPIA_MATRIX: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// A canned whole-image filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    Grayscale,
    Sepia,
    Invert,
    Colormap(Colormap),
}

impl Filter {
    pub fn label(&self) -> String {
        match self {
            Filter::Grayscale => "Grayscale".to_string(),
            Filter::Sepia => "Sepia".to_string(),
            Filter::Invert => "Invert".to_string(),
            Filter::Colormap(cmap) => format!("Colormap ({})", cmap.name()),
        }
    }

    /// Produce a new buffer of the same size. The input is never modified.
    pub fn apply(&self, src: &RgbImage) -> RgbImage {
        match self {
            Filter::Grayscale => grayscale(src),
            Filter::Sepia => sepia(src),
            Filter::Invert => invert(src),
            Filter::Colormap(cmap) => apply_colormap(src, *cmap),
        }
    }
}

/// Luma of one RGB pixel, rounded to the nearest integer.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = LUMA_WEIGHTS[0] * r as f32 + LUMA_WEIGHTS[1] * g as f32 + LUMA_WEIGHTS[2] * b as f32;
    y.round().clamp(0.0, 255.0) as u8
}

/// Run `f` over every pixel, parallel by row, writing into a fresh buffer.
fn map_pixels<F>(src: &RgbImage, f: F) -> RgbImage
where
    F: Fn(&[u8], &mut [u8]) + Sync,
{
    let (w, h) = src.dimensions();
    if w == 0 || h == 0 {
        return src.clone();
    }
    let stride = w as usize * 3;
    let src_raw = src.as_raw();
    let mut dst_raw = vec![0u8; src_raw.len()];

    dst_raw.par_chunks_mut(stride).enumerate().for_each(|(y, row_out)| {
        let row_in = &src_raw[y * stride..(y + 1) * stride];
        for (px_in, px_out) in row_in.chunks_exact(3).zip(row_out.chunks_exact_mut(3)) {
            f(px_in, px_out);
        }
    });

    RgbImage::from_raw(w, h, dst_raw).unwrap_or_else(|| src.clone())
}

/// Luma reduction replicated across all three channels.
pub fn grayscale(src: &RgbImage) -> RgbImage {
    map_pixels(src, |p, out| {
        let y = luma(p[0], p[1], p[2]);
        out.copy_from_slice(&[y, y, y]);
    })
}

pub fn sepia(src: &RgbImage) -> RgbImage {
    map_pixels(src, |p, out| {
        let (r, g, b) = (p[0] as f32, p[1] as f32, p[2] as f32);
        for (c, row) in SEPIA_MATRIX.iter().enumerate() {
            let v = row[0] * r + row[1] * g + row[2] * b;
            out[c] = v.round().clamp(0.0, 255.0) as u8;
        }
    })
}

pub fn invert(src: &RgbImage) -> RgbImage {
    map_pixels(src, |p, out| {
        out[0] = 255 - p[0];
        out[1] = 255 - p[1];
        out[2] = 255 - p[2];
    })
}

/// Luma of each pixel looked up in the colormap's 256-entry table.
pub fn apply_colormap(src: &RgbImage, cmap: Colormap) -> RgbImage {
    let lut = cmap.lut();
    map_pixels(src, |p, out| {
        let y = luma(p[0], p[1], p[2]);
        out.copy_from_slice(&lut[y as usize]);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn solid(w: u32, h: u32, rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(w, h, Rgb(rgb))
    }

    fn gradient(w: u32, h: u32) -> RgbImage {
        RgbImage::from_fn(w, h, |x, y| {
            Rgb([(x * 13 % 256) as u8, (y * 29 % 256) as u8, ((x + y) * 7 % 256) as u8])
        })
    }

    #[test]
    fn invert_red_is_cyan() {
        let out = invert(&solid(100, 100, [255, 0, 0]));
        assert_eq!(out.dimensions(), (100, 100));
        assert!(out.pixels().all(|p| p.0 == [0, 255, 255]));
    }

    #[test]
    fn double_invert_of_grayscale_is_exact() {
        let gray = grayscale(&gradient(37, 23));
        let back = invert(&invert(&gray));
        assert_eq!(back, gray);
    }

    #[test]
    fn grayscale_replicates_luma() {
        let out = grayscale(&solid(2, 2, [255, 0, 0]));
        // 0.299 * 255 = 76.245
        assert!(out.pixels().all(|p| p.0 == [76, 76, 76]));
        let white = grayscale(&solid(1, 1, [255, 255, 255]));
        assert_eq!(white.get_pixel(0, 0).0, [255, 255, 255]);
    }

    #[test]
    fn sepia_matches_matrix_and_clamps() {
        let out = sepia(&solid(1, 1, [100, 50, 20]));
        // R = .393*100 + .769*50 + .189*20 = 81.53
        // G = .349*100 + .686*50 + .168*20 = 72.56
        // B = .272*100 + .534*50 + .131*20 = 56.52
        assert_eq!(out.get_pixel(0, 0).0, [82, 73, 57]);

        let white = sepia(&solid(1, 1, [255, 255, 255]));
        assert_eq!(white.get_pixel(0, 0).0, [255, 255, 239]);
    }

    #[test]
    fn filters_keep_dimensions_and_source() {
        let src = gradient(17, 9);
        let copy = src.clone();
        for filter in [
            Filter::Grayscale,
            Filter::Sepia,
            Filter::Invert,
            Filter::Colormap(Colormap::Viridis),
        ] {
            let out = filter.apply(&src);
            assert_eq!(out.dimensions(), src.dimensions(), "{}", filter.label());
        }
        assert_eq!(src, copy);
    }

    #[test]
    fn colormap_uses_luma_index() {
        let src = solid(3, 3, [255, 255, 255]);
        let out = apply_colormap(&src, Colormap::Autumn);
        assert!(out.pixels().all(|p| p.0 == [255, 255, 0]));
        let black = apply_colormap(&solid(1, 1, [0, 0, 0]), Colormap::Autumn);
        assert_eq!(black.get_pixel(0, 0).0, [255, 0, 0]);
    }

    #[test]
    fn empty_image_passes_through() {
        let empty = RgbImage::new(0, 0);
        assert_eq!(invert(&empty).dimensions(), (0, 0));
    }
}
