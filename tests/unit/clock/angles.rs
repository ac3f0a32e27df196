use super::*;
use chrono::NaiveTime;

fn hms_milli(h: u32, m: u32, s: u32, ms: u32) -> NaiveTime {
    NaiveTime::from_hms_milli_opt(h, m, s, ms).unwrap()
}

fn assert_angles(a: HandAngles, hours: f64, minutes: f64, seconds: f64) {
    assert!((a.hours - hours).abs() < 1e-9, "hours {} != {hours}", a.hours);
    assert!((a.minutes - minutes).abs() < 1e-9, "minutes {} != {minutes}", a.minutes);
    assert!((a.seconds - seconds).abs() < 1e-9, "seconds {} != {seconds}", a.seconds);
}

#[test]
fn noon_and_midnight_point_up() {
    assert_angles(HandAngles::at(&hms_milli(12, 0, 0, 0)), 0.0, 0.0, 0.0);
    assert_angles(HandAngles::at(&hms_milli(0, 0, 0, 0)), 0.0, 0.0, 0.0);
}

#[test]
fn three_oclock() {
    assert_angles(HandAngles::at(&hms_milli(3, 0, 0, 0)), 90.0, 0.0, 0.0);
    assert_angles(HandAngles::at(&hms_milli(15, 0, 0, 0)), 90.0, 0.0, 0.0);
}

#[test]
fn half_past_six_offsets_the_hour_hand() {
    assert_angles(HandAngles::at(&hms_milli(6, 30, 0, 0)), 195.0, 180.0, 0.0);
}

#[test]
fn seconds_include_milliseconds_and_minutes_include_seconds() {
    assert_angles(HandAngles::at(&hms_milli(9, 15, 30, 500)), 277.5, 93.0, 183.0);
}

#[test]
fn leap_second_is_clamped() {
    let leap = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
    let a = HandAngles::at(&leap);
    assert!((a.seconds - (59.0 + 0.999) * 6.0).abs() < 1e-9);
}
