use std::io::Cursor;

use super::*;

fn encode_png(width: u32, height: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_dimensions_and_premul() {
    let buf = encode_png(1, 1, vec![100u8, 50u8, 200u8, 128u8]);

    let frame = decode_image(&buf).unwrap();
    assert_eq!(frame.width, 1);
    assert_eq!(frame.height, 1);
    assert_eq!(
        frame.rgba8_premul.as_slice(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_image_zeroes_fully_transparent_color() {
    let buf = encode_png(1, 1, vec![255, 255, 255, 0]);
    let frame = decode_image(&buf).unwrap();
    assert_eq!(frame.pixel(0, 0), Some([0, 0, 0, 0]));
}

#[test]
fn decode_frames_reports_failing_index() {
    let good = encode_png(2, 2, vec![0; 16]);
    let bad = b"not an image".to_vec();

    let frames = decode_frames(&[good.clone(), good.clone()]).unwrap();
    assert_eq!(frames.len(), 2);

    let err = decode_frames(&[good, bad]).unwrap_err();
    assert!(err.to_string().contains("frame 1"));
}

#[test]
fn decode_errors_are_other_and_name_the_frame() {
    let good = encode_png(2, 2, vec![0; 16]);
    let err = decode_frames(&[good, b"garbage".to_vec()]).unwrap_err();
    assert!(matches!(err, ClockfaceError::Other(_)));
}

#[test]
fn frame_index_keeps_validation_variant() {
    let err = with_frame_index(ClockfaceError::validation("sprite frame is empty"), 3);
    match err {
        ClockfaceError::Validation(msg) => assert!(msg.starts_with("sprite frame 3:")),
        other => panic!("variant changed: {other:?}"),
    }
}
