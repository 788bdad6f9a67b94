use super::*;
use crate::buffer::pixel::{Argb8, Argb16};

#[test]
fn negligible_shift_needs_no_expansion() {
    assert_eq!(Expansion::for_shift(0.0, 10, 10), None);
    assert_eq!(Expansion::for_shift(0.0005, 10, 10), None);
    assert_eq!(Expansion::for_shift(f64::NAN, 10, 10), None);
}

#[test]
fn margin_follows_shift() {
    let e = Expansion::for_shift(20.0, 100, 50).unwrap();
    assert_eq!(e.margin, 55);
    assert_eq!((e.width, e.height), (210, 160));
    assert_eq!(e.origin_offset(), PixelOffset::new(55, 55));

    assert_eq!(Expansion::for_shift(-1.1, 1, 1).unwrap().margin, 8);
}

#[test]
fn margin_is_capped() {
    let e = Expansion::for_shift(1.0e9, 10, 10).unwrap();
    assert_eq!(e.margin, MAX_EXPANSION_MARGIN);
    assert_eq!(e.width, 10 + 2 * MAX_EXPANSION_MARGIN);
}

#[test]
fn overflowing_dimensions_give_none() {
    assert_eq!(Expansion::for_shift(100.0, u32::MAX - 10, 10), None);
}

#[test]
fn params_apply_resolution_scale() {
    let params = SliceParams {
        shift: -8.0,
        resolution_scale: 0.5,
        ..SliceParams::default()
    };
    assert_eq!(Expansion::for_params(&params, 4, 4).unwrap().margin, 15);
    assert_eq!(Expansion::for_params(&SliceParams::default(), 4, 4), None);
}

#[test]
fn allocate_is_transparent_and_sized() {
    let e = Expansion::for_shift(1.0, 3, 2).unwrap();
    let buf = e.allocate::<Argb16>().unwrap();
    assert_eq!(buf.len(), (e.width * e.height) as usize);
    assert!(buf.iter().all(|p| *p == Argb16::TRANSPARENT));
    assert_eq!(e.allocate::<Argb8>().unwrap().len(), buf.len());
}
