use super::*;
use std::cell::RefCell;
use std::rc::Rc;

use image::{Rgba, RgbaImage};

use crate::foundation::error::TexpaintError;
use crate::surface::sink::DiscardSink;

const WHITE: crate::foundation::core::Rgba8 = [255, 255, 255, 255];
const BLACK: crate::foundation::core::Rgba8 = [0, 0, 0, 255];

fn white_base(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(WHITE))
}

fn surface(width: u32, height: u32) -> DrawSurface<DiscardSink> {
    DrawSurface::new(&white_base(width, height), SurfaceOptions::default(), DiscardSink).unwrap()
}

/// Counts uploads so tests can assert the commit-per-mutation contract.
#[derive(Clone, Default)]
struct RecordingSink {
    uploads: Rc<RefCell<usize>>,
}

impl TextureSink for RecordingSink {
    fn upload(&mut self, _width: u32, _height: u32, _rgba: &[u8]) -> TexpaintResult<()> {
        *self.uploads.borrow_mut() += 1;
        Ok(())
    }
}

#[test]
fn zero_sized_base_texture_is_rejected() {
    let err = DrawSurface::new(&RgbaImage::new(0, 4), SurfaceOptions::default(), DiscardSink)
        .err()
        .unwrap();
    assert!(matches!(err, TexpaintError::InvalidDimension(_)));
}

#[test]
fn first_touch_is_a_dab() {
    let mut surface = surface(16, 16);
    surface.draw(Point::new(0.5, 0.5), 2, Color::BLACK).unwrap();

    let mut black = 0;
    for y in 0..16 {
        for x in 0..16 {
            let px = surface.canvas().get(x, y).unwrap();
            if (6..=10).contains(&x) && (6..=10).contains(&y) {
                assert_eq!(px, BLACK, "expected dab pixel at ({x},{y})");
            } else {
                assert_eq!(px, WHITE, "expected untouched pixel at ({x},{y})");
            }
            if px == BLACK {
                black += 1;
            }
        }
    }
    assert_eq!(black, 25);
    assert!(surface.is_stroking());
}

#[test]
fn second_touch_extends_with_a_segment() {
    let mut surface = surface(16, 16);
    surface.draw(Point::new(0.25, 0.5), 0, Color::BLACK).unwrap();
    surface.draw(Point::new(0.75, 0.5), 0, Color::BLACK).unwrap();

    // Pixel (8,8) sits between the two touch points (4,8) and (12,8).
    assert_eq!(surface.canvas().get(8, 8), Some(BLACK));
    assert_eq!(surface.canvas().get(8, 9), Some(WHITE));
}

#[test]
fn lift_makes_the_next_touch_a_fresh_dab() {
    let mut surface = surface(16, 16);
    surface.draw(Point::new(0.1, 0.1), 0, Color::BLACK).unwrap();
    surface.lift();
    assert!(!surface.is_stroking());
    surface.draw(Point::new(0.9, 0.9), 0, Color::BLACK).unwrap();

    // No segment between (1,1) and (14,14): the midpoint stays white.
    assert_eq!(surface.canvas().get(8, 8), Some(WHITE));
    assert_eq!(surface.canvas().get(14, 14), Some(BLACK));
}

#[test]
fn draw_with_previous_overrides_idle_state() {
    let mut surface = surface(16, 16);
    surface
        .draw_with_previous(Point::new(0.75, 0.5), 0, Point::new(0.25, 0.5), 0, Color::BLACK)
        .unwrap();
    assert_eq!(surface.canvas().get(8, 8), Some(BLACK));
    assert!(surface.is_stroking());
}

#[test]
fn erase_matches_draw_with_background() {
    let path = [
        (Point::new(0.2, 0.2), 3),
        (Point::new(0.6, 0.4), 2),
        (Point::new(0.8, 0.8), 1),
    ];

    let mut erased = surface(16, 16);
    let mut drawn = surface(16, 16);
    for &(uv, radius) in &path {
        erased.draw(uv, radius, Color::BLACK).unwrap();
        drawn.draw(uv, radius, Color::BLACK).unwrap();
    }
    let background = drawn.canvas().background();
    for &(uv, radius) in &path {
        erased.erase(uv, radius).unwrap();
        drawn.draw(uv, radius, background).unwrap();
    }
    assert_eq!(erased.canvas().as_bytes(), drawn.canvas().as_bytes());
}

#[test]
fn reset_restores_background_and_is_idempotent() {
    let mut surface = surface(8, 8);
    surface.draw(Point::new(0.5, 0.5), 3, Color::BLACK).unwrap();
    surface.reset().unwrap();
    let once = surface.canvas().as_bytes().to_vec();
    assert!(once.chunks_exact(4).all(|px| px == WHITE));
    surface.reset().unwrap();
    assert_eq!(surface.canvas().as_bytes(), &once[..]);
}

#[test]
fn reset_does_not_end_the_stroke() {
    let mut surface = surface(16, 16);
    surface.draw(Point::new(0.25, 0.5), 0, Color::BLACK).unwrap();
    surface.reset().unwrap();
    assert!(surface.is_stroking());

    // The next touch still extends from (4,8).
    surface.draw(Point::new(0.75, 0.5), 0, Color::BLACK).unwrap();
    assert_eq!(surface.canvas().get(8, 8), Some(BLACK));
}

#[test]
fn state_tracks_the_latest_touch() {
    let mut surface = surface(16, 16);
    surface.draw(Point::new(0.2, 0.3), 1, Color::BLACK).unwrap();
    surface.draw(Point::new(0.6, 0.7), 4, Color::BLACK).unwrap();
    assert_eq!(
        surface.state(),
        StrokeState::Stroking {
            previous_uv: Point::new(0.6, 0.7),
            previous_radius: 4,
        }
    );
}

#[test]
fn every_mutation_commits() {
    let sink = RecordingSink::default();
    let uploads = sink.uploads.clone();
    let mut surface =
        DrawSurface::new(&white_base(8, 8), SurfaceOptions::default(), sink).unwrap();
    assert_eq!(*uploads.borrow(), 1);

    surface.draw(Point::new(0.5, 0.5), 1, Color::BLACK).unwrap();
    assert_eq!(*uploads.borrow(), 2);
    surface.erase(Point::new(0.5, 0.5), 1).unwrap();
    assert_eq!(*uploads.borrow(), 3);
    surface.reset().unwrap();
    assert_eq!(*uploads.borrow(), 4);
}

#[test]
fn apply_dispatches_draw_and_erase() {
    let mut surface = surface(16, 16);
    let mut sample = StrokeSample {
        uv: Point::new(0.5, 0.5),
        previous_uv: None,
        radius: 1,
        previous_radius: 0,
        color: Color::BLACK,
        erase: false,
    };
    surface.apply(&sample).unwrap();
    assert_eq!(surface.canvas().get(8, 8), Some(BLACK));

    sample.erase = true;
    surface.apply(&sample).unwrap();
    assert_eq!(surface.canvas().get(8, 8), Some(WHITE));
}

#[test]
fn apply_honors_an_explicit_previous_point() {
    let mut surface = surface(16, 16);
    let sample = StrokeSample {
        uv: Point::new(0.75, 0.5),
        previous_uv: Some(Point::new(0.25, 0.5)),
        radius: 0,
        previous_radius: 0,
        color: Color::BLACK,
        erase: false,
    };
    surface.apply(&sample).unwrap();
    assert_eq!(surface.canvas().get(8, 8), Some(BLACK));
}

#[test]
fn buffer_length_is_invariant_across_operations() {
    let mut surface = surface(8, 8);
    let expected = 8 * 8 * 4;
    assert_eq!(surface.canvas().as_bytes().len(), expected);
    surface.draw(Point::new(0.9, 0.9), 4, Color::BLACK).unwrap();
    assert_eq!(surface.canvas().as_bytes().len(), expected);
    surface.erase(Point::new(-0.2, 1.3), 5).unwrap();
    assert_eq!(surface.canvas().as_bytes().len(), expected);
    surface.reset().unwrap();
    assert_eq!(surface.canvas().as_bytes().len(), expected);
}
