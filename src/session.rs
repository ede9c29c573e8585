use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::canvas::{DisplayRect, Viewport};
use crate::io::{self, IoError, SaveFormat, SaveOptions};
use crate::ops::EditOp;
use crate::ops::brush::{self, PaintState, PointerButton, StrokeSegment};
use crate::ops::colormap::Colormap;
use crate::ops::filters::Filter;
use crate::ops::transform::{self, AspectLock};
use crate::remote::{FetchError, FetchResult, FetchWorker, PhotoRecord, PhotoSearchClient};
use crate::settings::AppSettings;

pub const READY_STATUS: &str = "Open an image or search for one to start editing.";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no image loaded")]
    NoImage,
    #[error(transparent)]
    Io(#[from] IoError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Where the current image came from.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    File(PathBuf),
    Remote(PhotoRecord),
}

impl ImageSource {
    pub fn name(&self) -> String {
        match self {
            ImageSource::File(path) => path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            ImageSource::Remote(record) => format!("Photo by {}", record.author),
        }
    }
}

/// One editing session: the image, its view, the brush and the status line.
///
/// A front end relays events into these methods and renders `image()` at
/// `display_rect()`. Failing operations set the status message and leave the
/// rest of the state untouched.
pub struct Session {
    image: Option<RgbImage>,
    /// Snapshot taken at load time, restored by `revert`.
    original: Option<RgbImage>,
    source: Option<ImageSource>,
    viewport: Viewport,
    paint: PaintState,
    status: String,
    is_dirty: bool,
    /// Bumped every time the displayed buffer changes.
    display_generation: u64,
    default_colormap: Colormap,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&AppSettings::default())
    }
}

impl Session {
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            image: None,
            original: None,
            source: None,
            viewport: Viewport::new(settings.zoom_limits()),
            paint: PaintState::new(settings.brush_color, settings.brush_width),
            status: READY_STATUS.to_string(),
            is_dirty: false,
            display_generation: 0,
            default_colormap: settings.default_colormap,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn image(&self) -> Option<&RgbImage> {
        self.image.as_ref()
    }

    pub fn original(&self) -> Option<&RgbImage> {
        self.original.as_ref()
    }

    pub fn source(&self) -> Option<&ImageSource> {
        self.source.as_ref()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn paint(&self) -> &PaintState {
        &self.paint
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn display_generation(&self) -> u64 {
        self.display_generation
    }

    pub fn display_rect(&self) -> Option<DisplayRect> {
        self.viewport.display_rect()
    }

    /// Get the display title (name with dirty indicator)
    pub fn display_title(&self) -> String {
        let name = self.source.as_ref().map(ImageSource::name).unwrap_or_else(|| "Untitled".to_string());
        if self.is_dirty { format!("{}*", name) } else { name }
    }

    fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
        log::info!("{}", self.status);
    }

    fn fail<E: Into<SessionError>>(&mut self, err: E) -> SessionError {
        let err = err.into();
        self.status = format!("Error: {}", err);
        log::warn!("{}", self.status);
        err
    }

    fn require_image(&mut self) -> Result<&RgbImage, SessionError> {
        if self.image.is_none() {
            return Err(self.fail(SessionError::NoImage));
        }
        self.image.as_ref().ok_or(SessionError::NoImage)
    }

    /// Put `img` on screen. `preserve_scale` keeps the auto-fit scale as is.
    fn show(&mut self, img: RgbImage, preserve_scale: bool) {
        self.viewport.image_replaced(img.width(), img.height(), preserve_scale);
        self.image = Some(img);
        self.display_generation += 1;
    }

    /// Swap in a new buffer produced by load, filter, resize or revert.
    /// The clear-paint baseline follows the new buffer.
    fn replace_image(&mut self, img: RgbImage) {
        self.paint.rebase(&img);
        self.show(img, false);
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Make `img` the session image and its revert snapshot.
    pub fn load_image(&mut self, img: RgbImage, source: ImageSource) {
        let (w, h) = img.dimensions();
        self.original = Some(img.clone());
        self.replace_image(img);
        self.is_dirty = false;
        let name = source.name();
        self.source = Some(source);
        self.set_status(format!("Loaded {} ({}x{})", name, w, h));
    }

    pub fn open_file(&mut self, path: &Path) -> Result<(), SessionError> {
        match io::load_image(path) {
            Ok(img) => {
                self.load_image(img, ImageSource::File(path.to_path_buf()));
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Validate the query and start a background fetch.
    pub fn begin_fetch(&mut self, client: PhotoSearchClient, query: &str) -> Result<FetchWorker, SessionError> {
        if query.trim().is_empty() {
            return Err(self.fail(FetchError::EmptyQuery));
        }
        self.set_status(format!("Fetching image for '{}'...", query.trim()));
        Ok(FetchWorker::spawn(client, query))
    }

    /// Apply the outcome of a fetch worker.
    pub fn accept_fetch(&mut self, result: FetchResult) -> Result<(), SessionError> {
        match result {
            Ok(fetched) => {
                let caption = fetched.record.caption();
                self.load_image(fetched.image, ImageSource::Remote(fetched.record));
                self.set_status(format!("Loaded from photo search ('{}'): {}", fetched.query, caption));
                Ok(())
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    // ------------------------------------------------------------------
    // Filters and resizing
    // ------------------------------------------------------------------

    pub fn apply_filter(&mut self, filter: Filter) -> Result<(), SessionError> {
        let out = filter.apply(self.require_image()?);
        self.replace_image(out);
        self.is_dirty = true;
        self.set_status(format!("Applied {}", filter.label()));
        Ok(())
    }

    /// Colormap by name; unknown names use the configured default map.
    pub fn apply_colormap(&mut self, cmap: Option<Colormap>) -> Result<(), SessionError> {
        self.apply_filter(Filter::Colormap(cmap.unwrap_or(self.default_colormap)))
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SessionError> {
        let src = self.require_image()?;
        let before = src.dimensions();
        let interp = transform::Interpolation::for_resize(before, (width.max(1), height.max(1)));
        let out = transform::resize_image(src, width, height);
        let after = out.dimensions();
        self.replace_image(out);
        self.is_dirty = true;
        self.set_status(format!(
            "Resized {}x{} -> {}x{} ({})",
            before.0,
            before.1,
            after.0,
            after.1,
            interp.label()
        ));
        Ok(())
    }

    /// Set the width and let the height follow the current aspect ratio.
    pub fn resize_width(&mut self, width: u32) -> Result<(), SessionError> {
        let (w, h) = self.require_image()?.dimensions();
        let mut lock = AspectLock::new(w, h);
        lock.set_width(width);
        let (nw, nh) = lock.dimensions();
        self.resize(nw, nh)
    }

    /// Set the height and let the width follow the current aspect ratio.
    pub fn resize_height(&mut self, height: u32) -> Result<(), SessionError> {
        let (w, h) = self.require_image()?.dimensions();
        let mut lock = AspectLock::new(w, h);
        lock.set_height(height);
        let (nw, nh) = lock.dimensions();
        self.resize(nw, nh)
    }

    /// Scale both sides by `factor` (the shrink and enlarge presets).
    pub fn scale_by(&mut self, factor: f32) -> Result<(), SessionError> {
        let (w, h) = self.require_image()?.dimensions();
        let (nw, nh) = transform::scaled_dimensions(w, h, factor);
        self.resize(nw, nh)
    }

    pub fn shrink(&mut self) -> Result<(), SessionError> {
        self.scale_by(transform::SHRINK_FACTOR)
    }

    pub fn enlarge(&mut self) -> Result<(), SessionError> {
        self.scale_by(transform::ENLARGE_FACTOR)
    }

    /// Back to the image as it was loaded.
    pub fn revert(&mut self) -> Result<(), SessionError> {
        let Some(original) = self.original.clone() else {
            return Err(self.fail(SessionError::NoImage));
        };
        self.replace_image(original);
        self.is_dirty = false;
        self.set_status("Reverted to original");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Painting
    // ------------------------------------------------------------------

    pub fn set_painting(&mut self, enabled: bool) {
        self.paint.set_enabled(enabled, self.image.as_ref());
        self.set_status(if enabled { "Painting enabled" } else { "Painting disabled" });
    }

    /// Picking a color also turns painting on.
    pub fn set_brush_color(&mut self, color: Rgb<u8>) {
        self.paint.set_color(color);
        if !self.paint.is_enabled() {
            self.set_painting(true);
        }
    }

    pub fn set_brush_width(&mut self, width: u32) {
        self.paint.set_width(width);
    }

    /// Restore the snapshot taken when painting was enabled or the image last
    /// replaced.
    pub fn clear_paint(&mut self) -> Result<(), SessionError> {
        self.require_image()?;
        let Some(baseline) = self.paint.baseline().cloned() else {
            return Err(self.fail(SessionError::NoImage));
        };
        self.show(baseline, false);
        self.set_status("Cleared paint");
        Ok(())
    }

    fn draw(&mut self, seg: StrokeSegment) {
        let color = self.paint.color();
        let width = self.paint.width();
        if let Some(img) = self.image.as_mut() {
            brush::draw_segment(img, seg, color, width);
            self.display_generation += 1;
            self.is_dirty = true;
            if let Some((w, h)) = self.viewport.image_size() {
                self.viewport.image_replaced(w, h, true);
            }
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, button: PointerButton) -> bool {
        self.paint.pointer_down((x, y), button, &self.viewport)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if let Some(seg) = self.paint.pointer_move((x, y), &self.viewport) {
            self.draw(seg);
        }
    }

    pub fn pointer_up(&mut self, x: f32, y: f32, button: PointerButton) {
        if let Some(seg) = self.paint.pointer_up((x, y), button, &self.viewport) {
            self.draw(seg);
        }
    }

    /// Draw one segment in image coordinates with the current brush.
    pub fn draw_stroke(&mut self, seg: StrokeSegment) -> Result<(), SessionError> {
        self.require_image()?;
        self.draw(seg);
        Ok(())
    }

    // ------------------------------------------------------------------
    // View
    // ------------------------------------------------------------------

    /// No-op until an image is loaded.
    pub fn zoom_in(&mut self) {
        if self.viewport.zoom_in() {
            self.display_generation += 1;
        }
    }

    pub fn zoom_out(&mut self) {
        if self.viewport.zoom_out() {
            self.display_generation += 1;
        }
    }

    pub fn fit_to_window(&mut self) {
        self.viewport.fit_to_window();
        self.display_generation += 1;
    }

    /// The layout moves with the container even when the scale does not.
    pub fn container_resized(&mut self, width: f32, height: f32) {
        self.viewport.set_container_size(width, height);
        if self.image.is_some() {
            self.display_generation += 1;
        }
    }

    /// Drop the image and return to the start screen state.
    pub fn go_home(&mut self) {
        self.image = None;
        self.original = None;
        self.source = None;
        self.viewport.reset_home();
        self.paint.reset();
        self.is_dirty = false;
        self.display_generation += 1;
        self.set_status(READY_STATUS);
    }

    // ------------------------------------------------------------------
    // Saving
    // ------------------------------------------------------------------

    pub fn save(
        &mut self,
        path: &Path,
        format: Option<SaveFormat>,
        options: SaveOptions,
    ) -> Result<PathBuf, SessionError> {
        let result = io::save_image(self.require_image()?, path, format, options);
        match result {
            Ok(written) => {
                self.is_dirty = false;
                self.set_status(format!("Saved {}", written.display()));
                Ok(written)
            }
            Err(e) => Err(self.fail(e)),
        }
    }

    /// Run one edit operation.
    pub fn apply_op(&mut self, op: &EditOp) -> Result<(), SessionError> {
        match *op {
            EditOp::Filter(filter) => self.apply_filter(filter),
            EditOp::Colormap(cmap) => self.apply_colormap(cmap),
            EditOp::Resize { width, height } => self.resize(width, height),
            EditOp::Width(w) => self.resize_width(w),
            EditOp::Height(h) => self.resize_height(h),
            EditOp::Shrink => self.shrink(),
            EditOp::Enlarge => self.enlarge(),
            EditOp::Stroke(seg) => self.draw_stroke(seg),
            EditOp::ClearPaint => self.clear_paint(),
            EditOp::Revert => self.revert(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::FetchedImage;

    fn session_with(img: RgbImage) -> Session {
        let mut s = Session::default();
        s.container_resized(800.0, 600.0);
        s.load_image(img, ImageSource::File(PathBuf::from("/tmp/test.png")));
        s
    }

    #[test]
    fn edits_without_image_fail_cleanly() {
        let mut s = Session::default();
        assert!(matches!(s.apply_filter(Filter::Invert), Err(SessionError::NoImage)));
        assert!(matches!(s.resize(10, 10), Err(SessionError::NoImage)));
        assert!(matches!(s.revert(), Err(SessionError::NoImage)));
        assert!(matches!(s.clear_paint(), Err(SessionError::NoImage)));
        assert!(s.image().is_none());
        assert!(s.status().starts_with("Error"));
    }

    #[test]
    fn load_fits_and_titles() {
        let s = session_with(RgbImage::new(400, 300));
        assert!((s.viewport().scale() - 2.0).abs() < 1e-6);
        assert_eq!(s.display_title(), "test.png");
        assert_eq!(s.display_generation(), 1);
    }

    #[test]
    fn filter_marks_dirty_and_revert_restores() {
        let mut s = session_with(RgbImage::from_pixel(4, 4, Rgb([10, 20, 30])));
        s.apply_filter(Filter::Invert).unwrap();
        assert!(s.is_dirty());
        assert_eq!(s.display_title(), "test.png*");
        assert_eq!(s.image().unwrap().get_pixel(0, 0).0, [245, 235, 225]);
        s.revert().unwrap();
        assert_eq!(s.image().unwrap().get_pixel(0, 0).0, [10, 20, 30]);
        assert!(!s.is_dirty());
    }

    #[test]
    fn width_follows_aspect_ratio() {
        let mut s = session_with(RgbImage::new(800, 600));
        s.resize_width(400).unwrap();
        assert_eq!(s.image().unwrap().dimensions(), (400, 300));
        s.resize_height(60).unwrap();
        assert_eq!(s.image().unwrap().dimensions(), (80, 60));
        s.enlarge().unwrap();
        assert_eq!(s.image().unwrap().dimensions(), (120, 90));
        s.shrink().unwrap();
        assert_eq!(s.image().unwrap().dimensions(), (60, 45));
    }

    #[test]
    fn brush_color_enables_painting() {
        let mut s = session_with(RgbImage::new(8, 8));
        assert!(!s.paint().is_enabled());
        s.set_brush_color(Rgb([255, 0, 0]));
        assert!(s.paint().is_enabled());
        assert_eq!(s.paint().baseline(), s.image());
    }

    #[test]
    fn clear_paint_keeps_filters_since_baseline() {
        let mut s = session_with(RgbImage::from_pixel(10, 10, Rgb([0, 0, 0])));
        s.set_painting(true);
        s.apply_filter(Filter::Invert).unwrap();
        s.set_brush_color(Rgb([255, 0, 0]));
        s.draw_stroke(StrokeSegment::new(0, 5, 9, 5)).unwrap();
        assert_eq!(s.image().unwrap().get_pixel(5, 5).0, [255, 0, 0]);
        s.clear_paint().unwrap();
        assert!(s.image().unwrap().pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn manual_zoom_survives_filters_until_home() {
        let mut s = session_with(RgbImage::new(400, 300));
        s.zoom_in();
        let zoomed = s.viewport().scale();
        s.apply_filter(Filter::Sepia).unwrap();
        assert_eq!(s.viewport().scale(), zoomed);
        s.go_home();
        assert!(!s.viewport().is_manual());
        assert!(s.image().is_none());
        assert_eq!(s.status(), READY_STATUS);
    }

    #[test]
    fn failed_fetch_leaves_image() {
        let mut s = session_with(RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])));
        let err = s.accept_fetch(Err(FetchError::Status(403))).unwrap_err();
        assert!(matches!(err, SessionError::Fetch(FetchError::Status(403))));
        assert_eq!(s.image().unwrap().get_pixel(0, 0).0, [1, 2, 3]);
        assert!(s.status().contains("403"));
    }

    #[test]
    fn accepted_fetch_becomes_the_revert_point() {
        let mut s = session_with(RgbImage::new(2, 2));
        let record = PhotoRecord {
            url: "https://img.example/r.jpg".into(),
            author: "Ada".into(),
            description: "Lake at dusk".into(),
            link: String::new(),
        };
        let fetched = FetchedImage {
            query: "lake".into(),
            image: RgbImage::from_pixel(6, 3, Rgb([9, 8, 7])),
            record: record.clone(),
        };
        let before = s.display_generation();
        s.accept_fetch(Ok(fetched)).unwrap();

        assert_eq!(s.source(), Some(&ImageSource::Remote(record)));
        assert_eq!(s.display_title(), "Photo by Ada");
        assert_eq!(s.status(), "Loaded from photo search ('lake'): By Ada | Lake at dusk");
        assert!(s.display_generation() > before);
        assert_eq!(s.original(), s.image());
        assert!(!s.is_dirty());

        s.apply_filter(Filter::Invert).unwrap();
        s.revert().unwrap();
        assert_eq!(s.image().unwrap().dimensions(), (6, 3));
        assert_eq!(s.image().unwrap().get_pixel(0, 0).0, [9, 8, 7]);
    }

    #[test]
    fn zoom_before_load_keeps_auto_fit() {
        let mut s = Session::default();
        s.container_resized(800.0, 600.0);
        s.zoom_in();
        s.zoom_out();
        assert_eq!(s.display_generation(), 0);
        s.load_image(RgbImage::new(400, 300), ImageSource::File(PathBuf::from("a.png")));
        assert!(!s.viewport().is_manual());
        assert!((s.viewport().scale() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn container_resize_redisplays_loaded_image() {
        let mut s = session_with(RgbImage::new(400, 300));
        let before = s.display_generation();
        s.container_resized(400.0, 300.0);
        assert!(s.display_generation() > before);
        assert!((s.viewport().scale() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn open_missing_file_leaves_state() {
        let mut s = session_with(RgbImage::new(3, 3));
        let missing = std::env::temp_dir().join(format!("dollarshop_{}.png", uuid::Uuid::new_v4()));
        assert!(matches!(s.open_file(&missing), Err(SessionError::Io(_))));
        assert_eq!(s.image().unwrap().dimensions(), (3, 3));
        assert_eq!(s.display_title(), "test.png");
    }

    #[test]
    fn empty_query_does_not_spawn() {
        let mut s = Session::default();
        let client = PhotoSearchClient::new("key", std::time::Duration::from_secs(1)).unwrap();
        assert!(matches!(s.begin_fetch(client, " "), Err(SessionError::Fetch(FetchError::EmptyQuery))));
    }
}
