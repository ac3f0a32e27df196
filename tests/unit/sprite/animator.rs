use super::*;
use crate::render::recorder::{CommandRecorder, DrawCommand};

fn tinted_frames(n: u8, width: u32, height: u32) -> Vec<SpriteFrame> {
    (0..n)
        .map(|i| SpriteFrame::solid(width, height, [i, 0, 0, 255]).unwrap())
        .collect()
}

fn tint(frame: &SpriteFrame) -> u8 {
    frame.pixel(0, 0).unwrap()[0]
}

#[test]
fn empty_sequence_is_rejected() {
    let err = SpriteAnimator::new(Vec::new()).unwrap_err();
    assert!(err.to_string().contains("at least one frame"));
}

#[test]
fn produce_frame_cycles_with_period_len() {
    let mut anim = SpriteAnimator::new(tinted_frames(16, 4, 2)).unwrap();
    assert_eq!(anim.frame_count(), 16);

    let first: Vec<u8> = (0..16).map(|_| tint(anim.produce_frame())).collect();
    let second: Vec<u8> = (0..16).map(|_| tint(anim.produce_frame())).collect();

    let mut sorted = first.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..16).collect::<Vec<u8>>());
    assert_eq!(first, second);
    // Advances before returning.
    assert_eq!(first[0], 1);
    assert_eq!(first[15], 0);
}

#[test]
fn single_frame_always_returns_it() {
    let mut anim = SpriteAnimator::new(tinted_frames(1, 2, 2)).unwrap();
    for _ in 0..3 {
        assert_eq!(tint(anim.produce_frame()), 0);
    }
}

#[test]
fn resize_scales_every_frame_by_the_same_factor() {
    let mut anim = SpriteAnimator::new(tinted_frames(4, 40, 30)).unwrap();
    anim.on_surface_resize(120).unwrap();

    for f in anim.frames() {
        assert_eq!((f.width, f.height), (120, 90));
    }
    assert!(anim.scales().iter().all(|s| (s - 3.0).abs() < 1e-12));
}

#[test]
fn resize_always_derives_from_base_frames() {
    let mut anim = SpriteAnimator::new(tinted_frames(2, 40, 30)).unwrap();
    anim.on_surface_resize(7).unwrap();
    anim.on_surface_resize(400).unwrap();

    // Scale is relative to the original 40px width, not the intermediate 7px one.
    assert!(anim.scales().iter().all(|s| (s - 10.0).abs() < 1e-12));
    assert_eq!(anim.frames()[0].height, 300);
}

#[test]
fn zero_width_resize_fails_and_keeps_frames() {
    let mut anim = SpriteAnimator::new(tinted_frames(2, 40, 30)).unwrap();
    anim.on_surface_resize(80).unwrap();
    assert!(anim.on_surface_resize(0).is_err());
    assert_eq!(anim.frames()[0].width, 80);
}

#[test]
fn resize_does_not_reset_the_cursor() {
    let mut anim = SpriteAnimator::new(tinted_frames(3, 4, 4)).unwrap();
    assert_eq!(tint(anim.produce_frame()), 1);
    anim.on_surface_resize(8).unwrap();
    assert_eq!(tint(anim.produce_frame()), 2);
}

#[test]
fn draw_emits_one_image_at_origin() {
    let mut anim = SpriteAnimator::new(tinted_frames(2, 4, 4)).unwrap();
    let mut rec = CommandRecorder::new();
    anim.draw(&mut rec).unwrap();

    let cmds = rec.commands();
    assert_eq!(cmds.len(), 1);
    match &cmds[0] {
        DrawCommand::Image { frame, origin, .. } => {
            assert_eq!(tint(frame), 1);
            assert_eq!(*origin, Point::ORIGIN);
        }
        other => panic!("unexpected command {other:?}"),
    }
}
