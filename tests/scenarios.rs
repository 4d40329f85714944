use screen_ruler::{InputEvent, Point, RulerController, RulerState, Slot, UnsetEncoding};

fn click(c: &mut RulerController, x: i32, y: i32) {
    c.handle(InputEvent::Clicked { x, y });
}

#[test]
fn two_clicks_measure_distance_and_angle() {
    let mut c = RulerController::default();
    click(&mut c, 100, 100);
    click(&mut c, 400, 300);
    let m = c.measurement().unwrap();
    assert_eq!((m.dx, m.dy), (300, -200));
    assert!((m.distance - 360.555_127_546_398_9).abs() < 1e-9);
    let expected = (-200f64).atan2(300.0) * 180.0 / std::f64::consts::PI;
    assert!((m.angle_degrees - expected).abs() < 1e-9);
    assert!((m.angle_degrees - -33.69).abs() < 0.01);
}

#[test]
fn single_click_is_unavailable() {
    let mut c = RulerController::default();
    click(&mut c, 50, 50);
    assert!(c.measurement().is_none());
    assert_eq!(c.state().next_slot(), Slot::B);
}

#[test]
fn coincident_points_give_zero_distance_and_angle() {
    let mut c = RulerController::default();
    click(&mut c, 10, 10);
    click(&mut c, 10, 10);
    let m = c.measurement().unwrap();
    assert_eq!(m.distance, 0.0);
    assert_eq!(m.angle_degrees, 0.0);
}

#[test]
fn third_click_overwrites_point_a() {
    let mut c = RulerController::default();
    click(&mut c, 100, 100);
    click(&mut c, 400, 300);
    click(&mut c, 500, 500);
    assert_eq!(c.state().point_a(), Some(Point::new(500, 500)));
    assert_eq!(c.state().point_b(), Some(Point::new(400, 300)));
    assert_eq!(c.state().next_slot(), Slot::B);
}

#[test]
fn pointer_moves_never_touch_points_or_slot() {
    let mut c = RulerController::default();
    click(&mut c, 7, 8);
    for (x, y) in [(0, 0), (-5, 12), (1920, 1080), (i32::MAX, i32::MIN)] {
        c.handle(InputEvent::PointerMoved { x, y });
        assert_eq!(c.state().cursor(), Point::new(x, y));
        assert_eq!(c.state().point_a(), Some(Point::new(7, 8)));
        assert_eq!(c.state().point_b(), None);
        assert_eq!(c.state().next_slot(), Slot::B);
    }
}

#[test]
fn distance_and_angle_hold_across_many_pairs() {
    let coords = [-1000, -37, -1, 0, 1, 5, 42, 640, 1999];
    for &x1 in &coords {
        for &y1 in &coords {
            for &(x2, y2) in &[(0, 0), (3, -4), (-1000, 1999), (42, 42), (x1, y1)] {
                let mut s = RulerState::new();
                s.on_click(x1, y1);
                s.on_click(x2, y2);
                let m = s.derive().unwrap();
                let dx = f64::from(x2 - x1);
                let dy = f64::from(y1 - y2);
                assert!((m.distance - (dx * dx + dy * dy).sqrt()).abs() < 1e-9);
                assert!(m.angle_degrees > -180.0 && m.angle_degrees <= 180.0);
            }
        }
    }
}

#[test]
fn sentinel_encoding_reports_unavailable_for_origin_b() {
    let mut s = RulerState::with_encoding(UnsetEncoding::ZeroSentinel);
    s.on_click(250, 250);
    s.on_click(0, 0);
    assert!(s.derive().is_none());

    let mut explicit = RulerState::new();
    explicit.on_click(250, 250);
    explicit.on_click(0, 0);
    assert!(explicit.derive().is_some());
}
