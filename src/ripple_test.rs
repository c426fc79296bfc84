#![allow(clippy::float_cmp)]

use super::*;

fn button() -> Rect {
    Rect { left: 100.0, top: 50.0, width: 120.0, height: 40.0 }
}

#[test]
fn diameter_is_larger_side() {
    assert_eq!(geometry(button(), 160.0, 70.0).size, 120.0);
    let tall = Rect { width: 30.0, height: 90.0, ..button() };
    assert_eq!(geometry(tall, 100.0, 50.0).size, 90.0);
}

#[test]
fn ripple_is_centered_on_click() {
    let g = geometry(button(), 160.0, 70.0);
    assert_eq!(g.left, 0.0);
    assert_eq!(g.top, -40.0);
    assert_eq!(g.left + g.size / 2.0, 160.0 - 100.0);
    assert_eq!(g.top + g.size / 2.0, 70.0 - 50.0);
}

#[test]
fn second_click_displaces_first_ripple() {
    let mut slot = RippleSlot::default();
    let (first, displaced) = slot.spawn();
    assert_eq!(displaced, None);
    let (second, displaced) = slot.spawn();
    assert_eq!(displaced, Some(first));
    assert_eq!(slot.live(), Some(second));
}

#[test]
fn at_most_one_live_ripple_across_rapid_clicks() {
    let mut slot = RippleSlot::default();
    let ids: Vec<u64> = (0..5).map(|_| slot.spawn().0).collect();
    assert_eq!(slot.live(), ids.last().copied());
    for id in &ids[..4] {
        assert!(!slot.expire(*id));
    }
    assert_eq!(slot.live(), Some(ids[4]));
}

#[test]
fn expiry_clears_live_ripple() {
    let mut slot = RippleSlot::default();
    let (id, _) = slot.spawn();
    assert!(slot.expire(id));
    assert_eq!(slot.live(), None);
    assert!(!slot.expire(id));
}
