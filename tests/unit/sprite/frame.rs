use super::*;
use crate::foundation::core::Color;

#[test]
fn from_rgba8_premul_validates_len_and_dims() {
    assert!(SpriteFrame::from_rgba8_premul(2, 2, vec![0; 16]).is_ok());
    assert!(SpriteFrame::from_rgba8_premul(2, 2, vec![0; 15]).is_err());
    assert!(SpriteFrame::from_rgba8_premul(0, 2, Vec::new()).is_err());
}

#[test]
fn pixel_reads_row_major() {
    let mut data = vec![0u8; 2 * 2 * 4];
    data[12..16].copy_from_slice(&[1, 2, 3, 255]);
    let f = SpriteFrame::from_rgba8_premul(2, 2, data).unwrap();
    assert_eq!(f.pixel(1, 1), Some([1, 2, 3, 255]));
    assert_eq!(f.pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(f.pixel(2, 0), None);
}

#[test]
fn scaled_to_width_keeps_aspect_ratio() {
    let f = SpriteFrame::solid(40, 30, [10, 20, 30, 255]).unwrap();
    let (scaled, scale) = f.scaled_to_width(100).unwrap();
    assert!((scale - 2.5).abs() < 1e-12);
    assert_eq!(scaled.width, 100);
    assert_eq!(scaled.height, 75);
    // Flat color survives bilinear resampling.
    assert_eq!(scaled.pixel(50, 37), Some([10, 20, 30, 255]));
}

#[test]
fn scaled_to_same_width_shares_pixels() {
    let f = SpriteFrame::solid(8, 4, [0, 0, 0, 255]).unwrap();
    let (same, scale) = f.scaled_to_width(8).unwrap();
    assert_eq!(scale, 1.0);
    assert!(Arc::ptr_eq(&same.rgba8_premul, &f.rgba8_premul));
}

#[test]
fn scaled_to_width_never_collapses_to_zero_height() {
    let f = SpriteFrame::solid(100, 1, [0, 0, 0, 255]).unwrap();
    let (scaled, _) = f.scaled_to_width(10).unwrap();
    assert_eq!((scaled.width, scaled.height), (10, 1));
    assert!(f.scaled_to_width(0).is_err());
}

#[test]
fn solid_premultiplies_straight_colors() {
    let f = SpriteFrame::solid(2, 1, Color::rgba(200, 100, 0, 128)).unwrap();
    assert_eq!(f.pixel(1, 0), Some([100, 50, 0, 128]));
    assert_eq!(
        SpriteFrame::solid(1, 1, [100, 50, 0, 128]).unwrap(),
        SpriteFrame::solid(1, 1, Color::rgba(200, 100, 0, 128)).unwrap()
    );
}
