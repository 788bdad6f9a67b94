use super::*;

#[test]
fn depth_limits_match_host_convention() {
    assert_eq!(ChannelDepth::Eight.bits(), 8);
    assert_eq!(ChannelDepth::Eight.max_value(), 255);
    assert_eq!(ChannelDepth::Sixteen.bits(), 16);
    assert_eq!(ChannelDepth::Sixteen.max_value(), 32768);
    assert_eq!(Argb8::DEPTH, ChannelDepth::Eight);
    assert_eq!(Argb16::DEPTH, ChannelDepth::Sixteen);
}

#[test]
fn from_argb_rounds_and_clamps() {
    let p = Argb8::from_argb([254.6, -3.0, 300.0, 10.4]);
    assert_eq!(p, Argb8::new(255, 0, 255, 10));

    let p = Argb16::from_argb([40000.0, 16384.4, 0.5, f32::NAN]);
    assert_eq!(p.alpha, 32768);
    assert_eq!(p.red, 16384);
    assert_eq!(p.green, 1);
    assert_eq!(p.blue, 0);
}

#[test]
fn rgba8_channel_order_is_mapped() {
    let p = Argb8::from_rgba([1, 2, 3, 4]);
    assert_eq!(p, Argb8::new(4, 1, 2, 3));
    assert_eq!(p.to_rgba(), [1, 2, 3, 4]);
    assert_eq!(p.to_argb(), [4.0, 1.0, 2.0, 3.0]);
}

#[test]
fn deep_pixels_widen_and_narrow_losslessly_for_8bit_values() {
    for v in [0u8, 1, 17, 128, 254, 255] {
        let deep = Argb16::from_rgba8([v, 255 - v, v / 2, 255]);
        assert_eq!(deep.alpha, 32768);
        assert_eq!(deep.to_rgba8(), [v, 255 - v, v / 2, 255]);
    }
}

#[test]
fn transparent_is_all_zero() {
    assert_eq!(Argb8::TRANSPARENT, Argb8::default());
    assert_eq!(Argb16::TRANSPARENT, Argb16::default());
    assert_eq!(Argb16::TRANSPARENT.alpha(), 0.0);
}
