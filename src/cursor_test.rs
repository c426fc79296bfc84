#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn follower_moves_fraction_of_remaining_distance() {
    let mut follower = Follower::new(0.15);
    let pos = follower.step(Point::new(100.0, 200.0));
    assert!(approx_eq(pos.x, 15.0));
    assert!(approx_eq(pos.y, 30.0));
    let pos = follower.step(Point::new(100.0, 200.0));
    assert!(approx_eq(pos.x, 15.0 + 85.0 * 0.15));
}

#[test]
fn follower_converges_on_stationary_pointer() {
    let mut follower = Follower::new(0.3);
    let target = Point::new(640.0, 360.0);
    for _ in 0..200 {
        follower.step(target);
    }
    assert!((follower.pos.x - target.x).abs() < 1e-6);
    assert!((follower.pos.y - target.y).abs() < 1e-6);
}

#[test]
fn follower_at_target_stays_put() {
    let mut follower = Follower::new(0.15);
    follower.pos = Point::new(10.0, 10.0);
    assert_eq!(follower.step(Point::new(10.0, 10.0)), Point::new(10.0, 10.0));
}

#[test]
fn secondary_proxy_leads_primary() {
    let mut pair = CursorPair::new(0.15, 0.3);
    pair.point_at(100.0, 0.0);
    let (one, two) = pair.frame();
    assert!(approx_eq(one.x, 15.0));
    assert!(approx_eq(two.x, 30.0));
    for _ in 0..5 {
        let (one, two) = pair.frame();
        assert!(two.x > one.x);
    }
}

#[test]
fn pointer_moves_retarget_both_proxies() {
    let mut pair = CursorPair::new(0.15, 0.3);
    pair.point_at(100.0, 100.0);
    pair.frame();
    pair.point_at(0.0, 0.0);
    let (one, two) = pair.frame();
    assert!(one.x < 15.0);
    assert!(two.x < 30.0);
}

#[test]
fn hover_enlarges_and_recolors_primary() {
    let hover = proxy_style(true, 50.0, 32.0);
    assert_eq!(hover.size_px, 50.0);
    assert_eq!(hover.border_color, "var(--theme-color, #667eea)");
    let rest = proxy_style(false, 50.0, 32.0);
    assert_eq!(rest.size_px, 32.0);
    assert_eq!(rest.border_color, "");
}
