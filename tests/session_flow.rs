use image::{Rgb, RgbImage};
use std::path::PathBuf;

use dollarshop::canvas::{DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, ZoomMode};
use dollarshop::io::{SaveFormat, SaveOptions};
use dollarshop::ops::EditOp;
use dollarshop::ops::brush::PointerButton;
use dollarshop::ops::filters::Filter;
use dollarshop::session::{ImageSource, Session};

fn loaded(img: RgbImage, container: (f32, f32)) -> Session {
    let mut s = Session::default();
    s.container_resized(container.0, container.1);
    s.load_image(img, ImageSource::File(PathBuf::from("input.png")));
    s
}

#[test]
fn red_inverts_to_cyan() {
    let mut s = loaded(RgbImage::from_pixel(100, 100, Rgb([255, 0, 0])), (640.0, 480.0));
    s.apply_filter(Filter::Invert).unwrap();
    let img = s.image().unwrap();
    assert_eq!(img.dimensions(), (100, 100));
    assert!(img.pixels().all(|p| p.0 == [0, 255, 255]));
}

#[test]
fn pointer_stroke_then_clear_restores_black() {
    let mut s = loaded(RgbImage::new(20, 20), (20.0, 20.0));
    s.set_brush_color(Rgb([255, 255, 255]));
    s.set_brush_width(1);
    assert!(s.paint().is_enabled());

    let before = s.display_generation();
    assert!(s.pointer_down(0.5, 0.5, PointerButton::Primary));
    s.pointer_move(10.5, 10.5);
    s.pointer_up(10.5, 10.5, PointerButton::Primary);
    assert!(s.display_generation() > before);

    let painted = s.image().unwrap();
    assert_eq!(painted.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(painted.get_pixel(10, 10).0, [255, 255, 255]);
    assert!(s.is_dirty());

    s.clear_paint().unwrap();
    assert!(s.image().unwrap().pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn pointer_outside_image_has_no_mapping() {
    // 200x100 in 400x400 fits at scale 2, drawn 400x200 starting at y=100.
    let s = loaded(RgbImage::new(200, 100), (400.0, 400.0));
    let vp = s.viewport();
    assert_eq!(vp.map_pointer(10.0, 50.0), None);
    assert_eq!(vp.map_pointer(10.0, 300.0), None);
    let p = vp.map_pointer(10.0, 101.0).unwrap();
    assert_eq!((p.x, p.y), (5, 0));
}

#[test]
fn stroke_outside_image_draws_nothing() {
    let mut s = loaded(RgbImage::new(200, 100), (400.0, 400.0));
    s.set_painting(true);
    assert!(!s.pointer_down(10.0, 50.0, PointerButton::Primary));
    s.pointer_move(100.0, 150.0);
    s.pointer_up(100.0, 150.0, PointerButton::Primary);
    assert!(s.image().unwrap().pixels().all(|p| p.0 == [0, 0, 0]));
}

#[test]
fn zoom_round_trip_and_limits() {
    let mut s = loaded(RgbImage::new(400, 300), (400.0, 300.0));
    let start = s.viewport().scale();
    for _ in 0..4 {
        s.zoom_in();
    }
    for _ in 0..4 {
        s.zoom_out();
    }
    assert!((s.viewport().scale() - start).abs() < 1e-5);
    assert_eq!(s.viewport().zoom_mode(), ZoomMode::Manual);

    for _ in 0..60 {
        s.zoom_in();
    }
    assert_eq!(s.viewport().scale(), DEFAULT_MAX_SCALE);
    for _ in 0..120 {
        s.zoom_out();
    }
    assert_eq!(s.viewport().scale(), DEFAULT_MIN_SCALE);

    // Manual zoom ignores the container until the user asks to fit again.
    s.container_resized(800.0, 600.0);
    assert_eq!(s.viewport().scale(), DEFAULT_MIN_SCALE);
    s.fit_to_window();
    assert!((s.viewport().scale() - 2.0).abs() < 1e-6);
}

#[test]
fn ops_chain_and_save() {
    let mut s = loaded(
        RgbImage::from_fn(64, 48, |x, y| Rgb([(x * 4) as u8, (y * 5) as u8, 90])),
        (640.0, 480.0),
    );
    for op in ["grayscale", "colormap=viridis", "shrink", "enlarge", "resize=33x21"] {
        s.apply_op(&op.parse::<EditOp>().unwrap()).unwrap();
    }
    assert_eq!(s.image().unwrap().dimensions(), (33, 21));

    let path = std::env::temp_dir().join(format!("dollarshop_flow_{}", uuid::Uuid::new_v4()));
    let written = s.save(&path, Some(SaveFormat::Bmp), SaveOptions::default()).unwrap();
    assert_eq!(written.extension().and_then(|e| e.to_str()), Some("bmp"));
    assert!(!s.is_dirty());
    let back = image::open(&written).unwrap().to_rgb8();
    assert_eq!(&back, s.image().unwrap());
    let _ = std::fs::remove_file(&written);

    s.apply_op(&EditOp::Revert).unwrap();
    assert_eq!(s.image().unwrap().dimensions(), (64, 48));
}
