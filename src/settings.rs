use image::Rgb;
use log::LevelFilter;
use std::path::{Path, PathBuf};

use crate::canvas::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_ZOOM_STEP, ZoomLimits};
use crate::io::{DEFAULT_JPEG_QUALITY, SaveOptions, TiffCompression};
use crate::ops::brush::{self, DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_WIDTH};
use crate::ops::colormap::{Colormap, DEFAULT_COLORMAP};
use crate::remote::DEFAULT_API_BASE;

/// Environment fallback for the photo-search access key.
pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Persistent user preferences.
#[derive(Clone, Debug, PartialEq)]
pub struct AppSettings {
    pub brush_width: u32,
    pub brush_color: Rgb<u8>,
    pub zoom_step: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub default_colormap: Colormap,
    pub jpeg_quality: u8,
    pub tiff_compression: TiffCompression,
    pub unsplash_access_key: String,
    /// Photo-search endpoint root, for mirrors and local test servers.
    pub photo_api_base: String,
    pub fetch_timeout_secs: u64,
    pub log_level: LevelFilter,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            brush_width: DEFAULT_BRUSH_WIDTH,
            brush_color: DEFAULT_BRUSH_COLOR,
            zoom_step: DEFAULT_ZOOM_STEP,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            default_colormap: DEFAULT_COLORMAP,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            tiff_compression: TiffCompression::None,
            unsplash_access_key: String::new(),
            photo_api_base: DEFAULT_API_BASE.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppSettings {
    /// Platform config file location. The directory is created on demand.
    pub fn settings_path() -> Option<PathBuf> {
        #[cfg(target_os = "linux")]
        {
            let config_dir = std::env::var("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|_| {
                    let home = std::env::var("HOME").unwrap_or_else(|_| "~".to_string());
                    PathBuf::from(home).join(".config")
                })
                .join("dollarshop");
            let _ = std::fs::create_dir_all(&config_dir);
            return Some(config_dir.join("dollarshop_settings.cfg"));
        }
        #[cfg(target_os = "windows")]
        {
            let appdata = std::env::var("APPDATA")
                .or_else(|_| std::env::var("USERPROFILE"))
                .ok()?;
            let config_dir = PathBuf::from(appdata).join("DollarShop");
            let _ = std::fs::create_dir_all(&config_dir);
            return Some(config_dir.join("dollarshop_settings.cfg"));
        }
        #[cfg(target_os = "macos")]
        {
            let home = std::env::var("HOME").unwrap_or_else(|_| "~".to_string());
            let config_dir = PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("DollarShop");
            let _ = std::fs::create_dir_all(&config_dir);
            return Some(config_dir.join("dollarshop_settings.cfg"));
        }
        #[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
        {
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join("dollarshop_settings.cfg")))
        }
    }

    /// Load settings from disk (returns default if file missing or corrupt).
    /// On first run the defaults are written out as an editable template.
    pub fn load() -> Self {
        match Self::settings_path() {
            Some(path) => Self::load_or_create(&path),
            None => Self::default(),
        }
    }

    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            return Self::load_from(path);
        }
        let defaults = Self::default();
        match defaults.save_to(path) {
            Ok(()) => log::info!("Wrote default settings to {}", path.display()),
            Err(e) => log::warn!("Could not write settings to {}: {}", path.display(), e),
        }
        defaults
    }

    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parse `key=value` lines. Unknown keys and unparsable values are
    /// skipped and keep their defaults.
    pub fn parse(content: &str) -> Self {
        let mut s = Self::default();
        for line in content.lines() {
            let line = line.trim();
            if line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else { continue };
            let val = val.trim();
            match key.trim() {
                "brush_width" => {
                    s.brush_width = val.parse::<u32>().ok().filter(|w| *w > 0).unwrap_or(s.brush_width);
                }
                "brush_color" => {
                    if let Some(c) = brush::parse_color(val) {
                        s.brush_color = c;
                    }
                }
                "zoom_step" => {
                    s.zoom_step = val.parse().unwrap_or(s.zoom_step);
                }
                "min_scale" => {
                    s.min_scale = val.parse().unwrap_or(s.min_scale);
                }
                "max_scale" => {
                    s.max_scale = val.parse().unwrap_or(s.max_scale);
                }
                "default_colormap" => {
                    s.default_colormap = Colormap::from_name_or_default(val);
                }
                "jpeg_quality" => {
                    s.jpeg_quality = val
                        .parse::<u8>()
                        .ok()
                        .filter(|q| (1..=100).contains(q))
                        .unwrap_or(s.jpeg_quality);
                }
                "tiff_compression" => {
                    s.tiff_compression = TiffCompression::from_name(val).unwrap_or_default();
                }
                "unsplash_access_key" => {
                    s.unsplash_access_key = val.to_string();
                }
                "photo_api_base" => {
                    if !val.is_empty() {
                        s.photo_api_base = val.trim_end_matches('/').to_string();
                    }
                }
                "fetch_timeout_secs" => {
                    s.fetch_timeout_secs = val.parse().unwrap_or(s.fetch_timeout_secs);
                }
                "log_level" => {
                    s.log_level = val.parse().unwrap_or(s.log_level);
                }
                _ => {}
            }
        }
        s
    }

    pub fn to_config_string(&self) -> String {
        let Rgb([r, g, b]) = self.brush_color;
        format!(
            "brush_width={}\n\
             brush_color={r},{g},{b}\n\
             zoom_step={}\n\
             min_scale={}\n\
             max_scale={}\n\
             default_colormap={}\n\
             jpeg_quality={}\n\
             tiff_compression={}\n\
             unsplash_access_key={}\n\
             photo_api_base={}\n\
             fetch_timeout_secs={}\n\
             log_level={}\n",
            self.brush_width,
            self.zoom_step,
            self.min_scale,
            self.max_scale,
            self.default_colormap.name(),
            self.jpeg_quality,
            self.tiff_compression.name(),
            self.unsplash_access_key,
            self.photo_api_base,
            self.fetch_timeout_secs,
            self.log_level.as_str().to_lowercase(),
        )
    }

    /// Save settings to disk
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_config_string())
    }

    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits::new(self.zoom_step, self.min_scale, self.max_scale)
    }

    pub fn save_options(&self) -> SaveOptions {
        SaveOptions {
            quality: self.jpeg_quality,
            tiff_compression: self.tiff_compression,
        }
    }

    /// The configured access key, else the environment variable.
    pub fn access_key(&self) -> Option<String> {
        let key = self.unsplash_access_key.trim();
        if !key.is_empty() {
            return Some(key.to_string());
        }
        std::env::var(ACCESS_KEY_ENV)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }
}
