use super::*;

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn rotation_is_clockwise_on_screen() {
    let mut t = TransformStack::new();
    let c = Point::new(50.0, 50.0);
    t.rotate(90.0, c);
    // Twelve o'clock maps to three o'clock.
    assert!(close(t.current() * Point::new(50.0, 0.0), Point::new(100.0, 50.0)));
}

#[test]
fn rotations_compose_cumulatively() {
    let c = Point::new(10.0, 10.0);
    let mut a = TransformStack::new();
    a.rotate(30.0, c);
    a.rotate(60.0, c);

    let mut b = TransformStack::new();
    b.rotate(90.0, c);

    let p = Point::new(10.0, 0.0);
    assert!(close(a.current() * p, b.current() * p));
}

#[test]
fn restore_pops_to_matching_save() {
    let mut t = TransformStack::new();
    t.save();
    t.rotate(45.0, Point::ORIGIN);
    t.save();
    t.rotate(45.0, Point::ORIGIN);
    assert_eq!(t.depth(), 2);

    assert!(t.restore());
    assert!(t.restore());
    assert_eq!(t.current(), Affine::IDENTITY);
    assert!(!t.restore());
}
