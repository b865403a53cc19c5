use complex_rs::complex::Complex;
use shared::{
    models::{pixel::PixelBuffer, resolution::Resolution, viewport::Viewport},
    rendering::{render, EscapeTimeRenderer},
};

/// 61 columns put pixel centers on multiples of 0.05 along the real axis at
/// zoom 1, 41 rows put the real axis on row 20.
fn grid() -> Resolution {
    Resolution::new(61, 41).unwrap()
}

fn origin() -> Viewport {
    Viewport::new(1.0, 0.0, 0.0).unwrap()
}

fn intensity(buffer: &PixelBuffer, x: u32, y: u32) -> u8 {
    buffer.pixel(x, y).unwrap()[0]
}

fn nearest_pixel(viewport: &Viewport, resolution: Resolution, c: Complex) -> (u32, u32) {
    let (x, y) = viewport.plane_to_pixel(resolution, c);
    let clamp = |v: f64, len: u32| v.round().clamp(0.0, (len - 1) as f64) as u32;
    (clamp(x, resolution.width()), clamp(y, resolution.height()))
}

#[test]
fn repeated_renders_are_byte_identical() {
    let viewport = Viewport::new(3.5, -0.75, 0.1).unwrap();
    let mut renderer = EscapeTimeRenderer::new(grid());

    let first = renderer.render(&viewport).to_vec();
    let second = renderer.render(&viewport).to_vec();

    assert_eq!(first, second);
    assert_eq!(render(&viewport, grid()).as_bytes(), first.as_slice());
}

#[test]
fn buffer_length_is_width_times_height_times_four() {
    let mut renderer = EscapeTimeRenderer::new(grid());
    assert_eq!(renderer.render(&origin()).len(), 61 * 41 * 4);
}

#[test]
fn every_pixel_is_opaque_gray() {
    let buffer = render(&Viewport::new(1.3, -0.6, 0.2).unwrap(), grid());
    for pixel in buffer.pixels() {
        assert_eq!(pixel[3], 255);
        assert_eq!(pixel[0], pixel[1]);
        assert_eq!(pixel[1], pixel[2]);
    }
}

#[test]
fn plane_origin_renders_white() {
    let resolution = grid();
    let viewport = origin();
    let (x, y) = nearest_pixel(&viewport, resolution, Complex::new(0.0, 0.0));
    assert_eq!((x, y), (40, 20));

    let buffer = render(&viewport, resolution);
    assert_eq!(intensity(&buffer, x, y), 255);
}

#[test]
fn far_corner_escapes_almost_immediately() {
    let resolution = grid();
    let viewport = origin();
    // (2, 2) lies outside the view; its nearest pixel is the top-right corner.
    let (x, y) = nearest_pixel(&viewport, resolution, Complex::new(2.0, 2.0));
    assert_eq!((x, y), (60, 0));

    let buffer = render(&viewport, resolution);
    assert!(intensity(&buffer, x, y) <= 1);
}

#[test]
fn top_row_is_the_largest_imaginary_part() {
    // Shifted up, the top row sits above the set and the bottom row crosses it.
    let buffer = render(&Viewport::new(1.0, 0.0, 0.5).unwrap(), grid());
    let white = |row: u32| (0..61).filter(|&x| intensity(&buffer, x, row) == 255).count();

    assert_eq!(white(0), 0);
    assert!(white(40) > 0);
}

#[test]
fn real_axis_is_a_mirror_line() {
    let resolution = Resolution::new(64, 37).unwrap();
    let buffer = render(&Viewport::new(1.0, -0.25, 0.0).unwrap(), resolution);

    let mut matching = 0;
    let mut total = 0;
    for y in 0..resolution.height() / 2 {
        let mirrored = resolution.height() - 1 - y;
        for x in 0..resolution.width() {
            total += 1;
            if buffer.pixel(x, y) == buffer.pixel(x, mirrored) {
                matching += 1;
            }
        }
    }

    // Rows are derived by subtraction from the top, so a boundary pixel may
    // round differently from its mirror.
    assert!(
        matching * 100 >= total * 99,
        "only {} of {} mirrored pixels match",
        matching,
        total
    );
}

#[test]
fn zooming_in_resamples_the_same_pattern() {
    let resolution = grid();
    let wide = render(&origin(), resolution);
    let close = render(&Viewport::new(2.0, 0.0, 0.0).unwrap(), resolution);

    // At zoom 2 every other pixel lands on a zoom 1 pixel center:
    // x -> 20 + x / 2, y -> 10 + y / 2.
    let mut matching = 0;
    let mut total = 0;
    for y in (0..resolution.height()).step_by(2) {
        for x in (0..resolution.width()).step_by(2) {
            total += 1;
            if intensity(&close, x, y) == intensity(&wide, 20 + x / 2, 10 + y / 2) {
                matching += 1;
            }
        }
    }

    assert!(
        matching * 100 >= total * 95,
        "only {} of {} resampled pixels match",
        matching,
        total
    );
}

#[test]
fn bounds_shrink_with_zoom_for_every_resolution() {
    for resolution in [grid(), Resolution::FULL] {
        let wide = origin().bounds(resolution);
        let close = Viewport::new(4.0, 0.0, 0.0).unwrap().bounds(resolution);
        assert!(wide.contains(&close));
        assert!((close.width() - wide.width() / 4.0).abs() < 1e-12);
        assert!((close.height() - wide.height() / 4.0).abs() < 1e-12);
    }
}
