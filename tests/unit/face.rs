use chrono::NaiveTime;

use super::*;
use crate::foundation::core::{Color, Point};
use crate::palette::extract::Palette;
use crate::render::recorder::{CommandRecorder, DrawCommand};

fn frames(n: u8) -> Vec<SpriteFrame> {
    (0..n)
        .map(|i| SpriteFrame::solid(20, 10, [i, 0, 0, 255]).unwrap())
        .collect()
}

fn face(config: FaceConfig) -> WatchFace {
    WatchFace::with_palette(
        frames(4),
        PaletteTask::ready(Palette::default()),
        config,
        SurfaceSize::new(100, 100).unwrap(),
    )
    .unwrap()
}

#[test]
fn construction_scales_frames_to_the_surface() {
    let f = face(FaceConfig::default());
    assert!(f.animator().frames().iter().all(|fr| fr.width == 100 && fr.height == 50));
    assert_eq!(f.clock().geometry().center, Point::new(50.0, 50.0));
}

#[test]
fn draw_clears_then_paints_sprite_then_clock() {
    let cfg = FaceConfig {
        background: Color::rgb(1, 2, 3),
        ..FaceConfig::default()
    };
    let mut f = face(cfg);
    let mut rec = CommandRecorder::new();
    f.draw(&mut rec, &NaiveTime::from_hms_opt(1, 2, 3).unwrap())
        .unwrap();

    let cmds = rec.commands();
    assert_eq!(
        cmds[0],
        DrawCommand::Clear {
            color: Color::rgb(1, 2, 3)
        }
    );
    assert!(matches!(&cmds[1], DrawCommand::Image { origin, .. } if *origin == Point::ORIGIN));
    assert!(matches!(cmds.last(), Some(DrawCommand::Circle { .. })));
}

#[test]
fn rejected_resize_changes_nothing() {
    let mut f = face(FaceConfig::default());
    assert!(f.on_surface_resize(200, 0).is_err());
    assert_eq!(f.size(), SurfaceSize::new(100, 100).unwrap());
    assert_eq!(f.animator().frames()[0].width, 100);
    assert_eq!(f.clock().geometry().center, Point::new(50.0, 50.0));

    f.on_surface_resize(40, 60).unwrap();
    assert_eq!(f.animator().frames()[0].width, 40);
    assert_eq!(f.clock().geometry().center, Point::new(20.0, 30.0));
}

#[test]
fn next_frame_delay_aligns_to_interval() {
    let mut f = face(FaceConfig::default());
    assert_eq!(f.next_frame_delay(1_000), Some(Duration::from_millis(25)));
    assert_eq!(f.next_frame_delay(1_010), Some(Duration::from_millis(15)));
    assert_eq!(f.next_frame_delay(1_024), Some(Duration::from_millis(1)));

    f.set_ambient(true);
    assert_eq!(f.next_frame_delay(1_010), None);
    f.set_ambient(false);
    assert!(f.next_frame_delay(1_010).is_some());
}

#[test]
fn empty_frames_are_rejected() {
    let err = WatchFace::with_palette(
        Vec::new(),
        PaletteTask::ready(Palette::default()),
        FaceConfig::default(),
        SurfaceSize::new(10, 10).unwrap(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("at least one frame"));
}
