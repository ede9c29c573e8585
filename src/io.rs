use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ImageError, RgbImage};
use std::ffi::OsString;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions offered in the open filter. Anything else `image` can decode
/// still loads when named explicitly.
pub const OPEN_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

pub const DEFAULT_JPEG_QUALITY: u8 = 90;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("failed to decode image data: {0}")]
    Decode(#[source] ImageError),
    #[error("failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("cannot save an empty image")]
    EmptyImage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SaveFormat {
    #[default]
    Png,
    Jpeg,
    Bmp,
    Tiff,
}

impl SaveFormat {
    pub fn all() -> &'static [SaveFormat] {
        &[SaveFormat::Png, SaveFormat::Jpeg, SaveFormat::Bmp, SaveFormat::Tiff]
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SaveFormat::Png => "png",
            SaveFormat::Jpeg => "jpg",
            SaveFormat::Bmp => "bmp",
            SaveFormat::Tiff => "tiff",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SaveFormat::Png => "PNG",
            SaveFormat::Jpeg => "JPEG",
            SaveFormat::Bmp => "BMP",
            SaveFormat::Tiff => "TIFF",
        }
    }

    /// Format named by a file extension or a `--format` value.
    pub fn from_extension(ext: &str) -> Option<SaveFormat> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "png" => Some(SaveFormat::Png),
            "jpg" | "jpeg" => Some(SaveFormat::Jpeg),
            "bmp" => Some(SaveFormat::Bmp),
            "tif" | "tiff" => Some(SaveFormat::Tiff),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TiffCompression {
    #[default]
    None,
    Lzw,
    Deflate,
}

impl TiffCompression {
    pub fn name(&self) -> &'static str {
        match self {
            TiffCompression::None => "none",
            TiffCompression::Lzw => "lzw",
            TiffCompression::Deflate => "deflate",
        }
    }

    pub fn from_name(s: &str) -> Option<TiffCompression> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(TiffCompression::None),
            "lzw" => Some(TiffCompression::Lzw),
            "deflate" | "zip" => Some(TiffCompression::Deflate),
            _ => None,
        }
    }
}

/// Encoder knobs that only some formats read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SaveOptions {
    /// JPEG quality, 1 to 100.
    pub quality: u8,
    pub tiff_compression: TiffCompression,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_JPEG_QUALITY,
            tiff_compression: TiffCompression::None,
        }
    }
}

/// Decode any format `image` understands into an RGB buffer.
pub fn load_image(path: &Path) -> Result<RgbImage, IoError> {
    image::open(path)
        .map(|img| img.to_rgb8())
        .map_err(|source| IoError::Open {
            path: path.to_path_buf(),
            source,
        })
}

/// Decode an in-memory encoded image (e.g. a downloaded photo).
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage, IoError> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgb8())
        .map_err(IoError::Decode)
}

/// Final path and format for a save request.
///
/// An explicit `format` always wins: a recognised extension naming another
/// format is swapped for the right one. With no format the extension
/// decides. A path without a recognised extension gets the format's
/// extension appended (PNG when none was asked for).
pub fn resolve_save_target(path: &Path, format: Option<SaveFormat>) -> (PathBuf, SaveFormat) {
    let from_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .and_then(SaveFormat::from_extension);
    match (format, from_ext) {
        (Some(fmt), Some(named)) if fmt != named => {
            let target = path.with_extension(fmt.extension());
            log::warn!(
                "{} names {} but {} was requested; writing {}",
                path.display(),
                named.label(),
                fmt.label(),
                target.display()
            );
            (target, fmt)
        }
        (_, Some(named)) => (path.to_path_buf(), named),
        (fmt, None) => {
            let fmt = fmt.unwrap_or_default();
            let mut name: OsString = path.as_os_str().to_owned();
            name.push(".");
            name.push(fmt.extension());
            (PathBuf::from(name), fmt)
        }
    }
}

/// Resolve the target, encode and write. Returns the path actually written.
pub fn save_image(
    image: &RgbImage,
    path: &Path,
    format: Option<SaveFormat>,
    options: SaveOptions,
) -> Result<PathBuf, IoError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(IoError::EmptyImage);
    }
    let (target, fmt) = resolve_save_target(path, format);
    encode_and_write(image, &target, fmt, options).map_err(|source| IoError::Save {
        path: target.clone(),
        source,
    })?;
    log::info!("Saved {} ({}x{}) as {}", target.display(), image.width(), image.height(), fmt.label());
    Ok(target)
}

fn encode_and_write(
    image: &RgbImage,
    path: &Path,
    format: SaveFormat,
    options: SaveOptions,
) -> Result<(), ImageError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    match format {
        SaveFormat::Png => {
            let encoder = PngEncoder::new(&mut writer);
            #[allow(deprecated)]
            encoder.encode(image.as_raw(), image.width(), image.height(), image::ColorType::Rgb8)?;
        }
        SaveFormat::Jpeg => {
            let quality = options.quality.clamp(1, 100);
            let mut encoder = JpegEncoder::new_with_quality(&mut writer, quality);
            encoder.encode(image.as_raw(), image.width(), image.height(), image::ColorType::Rgb8)?;
        }
        SaveFormat::Bmp => {
            let mut encoder = BmpEncoder::new(&mut writer);
            encoder.encode(image.as_raw(), image.width(), image.height(), image::ColorType::Rgb8)?;
        }
        SaveFormat::Tiff => {
            let err_map = |e: tiff::TiffError| {
                ImageError::IoError(std::io::Error::other(format!("TIFF encode error: {}", e)))
            };
            let mut tiff_enc = tiff::encoder::TiffEncoder::new(&mut writer).map_err(err_map)?;
            let (w, h) = image.dimensions();
            match options.tiff_compression {
                TiffCompression::None => tiff_enc
                    .write_image::<tiff::encoder::colortype::RGB8>(w, h, image.as_raw())
                    .map_err(err_map)?,
                TiffCompression::Lzw => tiff_enc
                    .write_image_with_compression::<tiff::encoder::colortype::RGB8, _>(
                        w,
                        h,
                        tiff::encoder::compression::Lzw,
                        image.as_raw(),
                    )
                    .map_err(err_map)?,
                TiffCompression::Deflate => tiff_enc
                    .write_image_with_compression::<tiff::encoder::colortype::RGB8, _>(
                        w,
                        h,
                        tiff::encoder::compression::Deflate::default(),
                        image.as_raw(),
                    )
                    .map_err(err_map)?,
            }
        }
    }

    Ok(())
}
