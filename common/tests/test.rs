use common::vec2::{PVec2, Vec2};
use std::f32::consts::FRAC_PI_2;

#[test]
fn test_norm() {
    let r = Vec2::new(1.0, 1.0).norm();
    assert!((r.x - 0.7071).abs() < 0.0001);
    assert!((r.y - 0.7071).abs() < 0.0001);

    let r = Vec2::new(1.0, 0.0).norm();
    assert_eq!(r, Vec2::new(1.0, 0.0));

    let r = Vec2::new(2.0, 1.0).norm();
    assert!((r.x - 0.8944).abs() < 0.0001);
    assert!((r.y - 0.4472).abs() < 0.0001);

    // The zero vector stays zero instead of dividing by zero.
    assert_eq!(Vec2::default().norm(), Vec2::default());
}

#[test]
fn test_add_sub() {
    let r = Vec2::default() - Vec2::new(1.0, 2.0);
    assert_eq!(r, Vec2::new(-1.0, -2.0));

    let r = Vec2::default() - Vec2::new(-1.0, -2.0);
    assert_eq!(r, Vec2::new(1.0, 2.0));

    let r = Vec2::new(1.0, 2.0) + Vec2::new(3.0, 4.0);
    assert_eq!(r, Vec2::new(4.0, 6.0));
}

#[test]
fn test_mag_dist() {
    assert_eq!(Vec2::new(3.0, 4.0).mag(), 5.0);
    assert_eq!(Vec2::new(1.0, 1.0).dist(Vec2::new(4.0, 5.0)), 5.0);
}

#[test]
fn test_cartesian_to_polar() {
    let p = PVec2::from(Vec2::default());
    assert_eq!(p.r, 0.0);
    assert_eq!(p.phi, 0.0);

    let p = PVec2::from(Vec2::new(0.0, 1.0));
    assert_eq!(p.r, 1.0);
    assert!((p.phi - FRAC_PI_2).abs() < 0.000001); // 90 deg
}

#[test]
fn test_polar_to_cartesian() {
    let v = Vec2::from(PVec2::default());
    assert_eq!(v, Vec2::default());

    let v = Vec2::from(PVec2 {
        r: 1.0,
        phi: FRAC_PI_2,
    });
    assert!(v.x.abs() < 0.0001);
    assert!((v.y - 1.0).abs() < 0.0001); // 90 deg
}

#[test]
fn test_within() {
    let nw = Vec2::new(1.0, 1.0);
    let se = Vec2::new(10.0, 10.0);

    assert!(Vec2::new(5.0, 5.0).within(nw, se));
    // Both corners are inclusive.
    assert!(nw.within(nw, se));
    assert!(se.within(nw, se));

    assert!(!Vec2::new(0.9, 5.0).within(nw, se));
    assert!(!Vec2::new(5.0, 10.1).within(nw, se));
}

#[test]
fn test_move_to() {
    let from = Vec2::new(0.0, 0.0);
    let to = Vec2::new(10.0, 0.0);

    let r = from.move_to(to, 4.0);
    assert!((r.x - 4.0).abs() < 0.0001);
    assert_eq!(r.y, 0.0);

    // Overshoot snaps to the target.
    let r = Vec2::new(9.0, 0.0).move_to(to, 4.0);
    assert_eq!(r, to);
}

#[test]
fn test_rand_from() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let v = Vec2::rand_from(5.0, &mut rng);
        assert!(v.mag() <= 5.0001);
    }
}
