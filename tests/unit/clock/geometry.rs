use super::*;

#[test]
fn lengths_are_fractions_of_half_width() {
    let g = HandGeometry::from_surface(SurfaceSize::new(400, 300).unwrap());
    assert_eq!(g.center, Point::new(200.0, 150.0));
    assert!((g.hour_length - 85.0).abs() < 1e-9);
    assert!((g.minute_length - 175.0).abs() < 1e-9);
    assert!((g.second_length - 175.0).abs() < 1e-9);
    assert!((g.second_back_length - 25.0).abs() < 1e-9);
}

#[test]
fn tick_radii_follow_the_edge() {
    let g = HandGeometry::from_surface(SurfaceSize::new(454, 454).unwrap());
    assert_eq!(g.tick_outer_radius, 227.0);
    assert_eq!(g.tick_inner_radius, 217.0);
    assert_eq!(g.text_radius, 195.0);
}

#[test]
fn hand_segments_start_at_the_center_gap() {
    let g = HandGeometry::from_surface(SurfaceSize::new(100, 100).unwrap());
    let up = g.upward(g.minute_length);
    assert_eq!(up.p0, Point::new(50.0, 45.0));
    assert_eq!(up.p1, Point::new(50.0, 50.0 - 43.75));

    let down = g.downward(g.second_back_length);
    assert_eq!(down.p0, Point::new(50.0, 55.0));
    assert_eq!(down.p1, Point::new(50.0, 56.25));
}
