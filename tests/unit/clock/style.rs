use super::*;

fn palette() -> Palette {
    Palette {
        hand: Color::rgb(250, 200, 200),
        highlight: Color::rgb(0, 0, 255),
        shadow: Color::rgb(40, 30, 20),
        minor_tick: Color::rgb(140, 128, 115),
    }
}

#[test]
fn interactive_uses_palette_and_config() {
    let s = FaceStyle::interactive(&palette(), &FaceConfig::default());
    assert_eq!(s.hour.color, palette().hand);
    assert_eq!(s.second.color, palette().highlight);
    assert_eq!(s.second_back.color, palette().highlight);
    assert_eq!(s.tick.color, Color::rgb(0xFC, 0x02, 0x04));
    assert_eq!(s.hour.shadow.unwrap().color, palette().shadow);
    assert_eq!(s.hour_border.as_ref().unwrap().stroke_width, 16.0);
    assert_eq!(s.minute_border.as_ref().unwrap().stroke_width, 14.0);
    assert!(s.hour.anti_alias);
}

#[test]
fn ambient_is_flat_monochrome_without_borders() {
    let s = FaceStyle::ambient();
    for p in [&s.hour, &s.minute, &s.second, &s.second_back, &s.tick, &s.label] {
        assert_eq!(p.color, Color::WHITE);
        assert!(!p.anti_alias);
        assert!(p.shadow.is_none());
    }
    assert!(s.hour_border.is_none());
    assert!(s.minute_border.is_none());
    assert!(s.second_border.is_none());
    assert!(s.second_back_border.is_none());
    assert!(s.label_border.is_none());
}

#[test]
fn ambient_minor_ticks_are_gray_for_every_index() {
    let s = FaceStyle::ambient();
    for k in [1, 2, 3, 4, 6, 59] {
        assert_eq!(s.minor_tick_paint(k).color, AMBIENT_MINOR_TICK);
    }
}

#[test]
fn rainbow_cycles_by_minute_index() {
    let s = FaceStyle::interactive(&palette(), &FaceConfig::default());
    assert_eq!(s.minor_tick_paint(1).color, RAINBOW[1]);
    assert_eq!(s.minor_tick_paint(4).color, RAINBOW[4]);
    assert_eq!(s.minor_tick_paint(13).color, RAINBOW[3]);
}

#[test]
fn plain_minor_ticks_use_the_palette() {
    let cfg = FaceConfig {
        rainbow_minor_ticks: false,
        ..FaceConfig::default()
    };
    let s = FaceStyle::interactive(&palette(), &cfg);
    assert_eq!(s.minor_tick_paint(7).color, palette().minor_tick);
}

#[test]
fn muted_only_touches_hand_alphas() {
    let base = FaceStyle::interactive(&palette(), &FaceConfig::default());
    let muted = base.muted();
    assert_eq!(muted.hour.color.a, MUTED_HAND_ALPHA);
    assert_eq!(muted.minute.color.a, MUTED_HAND_ALPHA);
    assert_eq!(muted.second.color.a, MUTED_SECOND_ALPHA);
    assert_eq!(muted.tick, base.tick);
    assert_eq!(muted.second_back, base.second_back);
    assert_eq!(muted.hour.color.with_alpha(255), base.hour.color);
}
