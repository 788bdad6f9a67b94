use super::*;
use crate::buffer::pixel::Argb8;
use crate::params::SliceParams;

const GREY: Argb8 = Argb8::new(255, 90, 90, 90);

fn resolved(guides: bool) -> ResolvedParams {
    SliceParams {
        anchor: Some(Point::ZERO),
        guides,
        ..SliceParams::default()
    }
    .resolve(8, 8)
}

#[test]
fn world_point_removes_destination_offset() {
    let data = vec![GREY; 64];
    let src = ImageRef::packed(&data, 8, 8).unwrap();
    let table = SegmentTable::build(&[-20.0, 20.0], 1.0, 1, 1.0).unwrap();
    let params = resolved(false);
    let ctx = SliceContext::new(src, &params, &table, &[], PixelOffset::new(3, -2));
    assert_eq!(ctx.world_point(3, 0), Point::new(0.0, 2.0));
    assert_eq!(ctx.shade(2, 0), Argb8::TRANSPARENT);
    assert_eq!(ctx.shade(3, 0), GREY);
}

#[test]
fn guides_overlay_interior_divisions() {
    let data = vec![GREY; 64];
    let src = ImageRef::packed(&data, 8, 8).unwrap();
    let points = [-20.0, 4.0, 20.0];
    let table = SegmentTable::build(&points, 1.0, 1, 1.0).unwrap();
    let params = resolved(true);
    let ctx = SliceContext::new(src, &params, &table, &points, PixelOffset::ZERO);

    let mut row = [Argb8::TRANSPARENT; 8];
    ctx.shade_row(4, &mut row);
    assert!(row.iter().all(|p| *p == Argb8::new(255, 255, 255, 255)));
    ctx.shade_row(2, &mut row);
    assert!(row.iter().all(|p| *p == GREY));
}
