use super::*;
use crate::buffer::pixel::{Argb8, Argb16};

fn image() -> Vec<Argb8> {
    // 2x2: opaque red, opaque green / transparent, opaque blue.
    vec![
        Argb8::new(255, 255, 0, 0),
        Argb8::new(255, 0, 255, 0),
        Argb8::new(0, 0, 0, 0),
        Argb8::new(255, 0, 0, 255),
    ]
}

#[test]
fn integer_coordinates_are_exact_in_both_modes() {
    let data = image();
    let img = ImageRef::packed(&data, 2, 2).unwrap();
    for mode in [SampleMode::Nearest, SampleMode::Bilinear] {
        assert_eq!(sample(&img, mode, 0.0, 0.0), [255.0, 255.0, 0.0, 0.0]);
        assert_eq!(sample(&img, mode, 1.0, 1.0), [255.0, 0.0, 0.0, 255.0]);
    }
}

#[test]
fn out_of_bounds_is_transparent() {
    let data = image();
    let img = ImageRef::packed(&data, 2, 2).unwrap();
    for mode in [SampleMode::Nearest, SampleMode::Bilinear] {
        for (x, y) in [(-1.0, 0.0), (2.0, 0.0), (0.0, -3.5), (0.0, 2.0), (f64::NAN, 0.0)] {
            assert_eq!(sample(&img, mode, x, y), TRANSPARENT, "{mode:?} ({x}, {y})");
        }
    }
}

#[test]
fn nearest_rounds_to_closest_pixel() {
    let data = image();
    let img = ImageRef::packed(&data, 2, 2).unwrap();
    assert_eq!(
        sample(&img, SampleMode::Nearest, 0.6, 0.4),
        [255.0, 0.0, 255.0, 0.0]
    );
    assert_eq!(
        sample(&img, SampleMode::Nearest, -0.4, 0.2),
        [255.0, 255.0, 0.0, 0.0]
    );
}

#[test]
fn bilinear_blends_opaque_neighbours() {
    let data = image();
    let img = ImageRef::packed(&data, 2, 2).unwrap();
    let [a, r, g, b] = sample(&img, SampleMode::Bilinear, 0.5, 0.0);
    assert_eq!(a, 255.0);
    assert!((r - 127.5).abs() < 1e-3);
    assert!((g - 127.5).abs() < 1e-3);
    assert_eq!(b, 0.0);
}

#[test]
fn bilinear_does_not_bleed_transparent_colour() {
    let data = image();
    let img = ImageRef::packed(&data, 2, 2).unwrap();
    // Halfway between transparent (0,1) and opaque blue (1,1).
    let [a, r, g, b] = sample(&img, SampleMode::Bilinear, 0.5, 1.0);
    assert!((a - 127.5).abs() < 1e-3);
    assert_eq!([r, g], [0.0, 0.0]);
    assert!((b - 255.0).abs() < 1e-3);
}

#[test]
fn bilinear_fades_at_the_image_edge() {
    let data = vec![Argb16::new(32768, 100, 200, 300); 4];
    let img = ImageRef::packed(&data, 2, 2).unwrap();
    let [a, r, g, b] = sample(&img, SampleMode::Bilinear, -0.25, 0.0);
    assert!((a - 32768.0 * 0.75).abs() < 1e-2);
    assert!((r - 100.0).abs() < 1e-3);
    assert!((g - 200.0).abs() < 1e-3);
    assert!((b - 300.0).abs() < 1e-3);
}
