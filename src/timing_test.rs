use super::*;

#[test]
fn debounce_rearms_on_every_event() {
    let mut gate = RateGate::new(RatePolicy::Debounce { quiet_ms: 10 });
    assert_eq!(gate.on_event(), GateDecision::Arm { generation: 1, delay_ms: 10 });
    assert_eq!(gate.on_event(), GateDecision::Arm { generation: 2, delay_ms: 10 });
    assert_eq!(gate.on_event(), GateDecision::Arm { generation: 3, delay_ms: 10 });
    assert!(gate.is_pending());
}

#[test]
fn debounce_runs_only_the_last_timer_of_a_burst() {
    let mut gate = RateGate::new(RatePolicy::Debounce { quiet_ms: 10 });
    gate.on_event();
    gate.on_event();
    gate.on_event();
    assert!(!gate.on_fire(1));
    assert!(!gate.on_fire(2));
    assert!(gate.on_fire(3));
    assert!(!gate.is_pending());
}

#[test]
fn debounce_fires_once_per_quiet_period() {
    let mut gate = RateGate::new(RatePolicy::Debounce { quiet_ms: 10 });
    let GateDecision::Arm { generation, .. } = gate.on_event() else {
        panic!("debounce always arms");
    };
    assert!(gate.on_fire(generation));
    assert!(!gate.on_fire(generation));
}

#[test]
fn throttle_skips_events_while_pending() {
    let mut gate = RateGate::new(RatePolicy::Throttle { interval_ms: 100 });
    assert_eq!(gate.on_event(), GateDecision::Arm { generation: 1, delay_ms: 100 });
    assert_eq!(gate.on_event(), GateDecision::Skip);
    assert_eq!(gate.on_event(), GateDecision::Skip);
    assert!(gate.on_fire(1));
    assert_eq!(gate.on_event(), GateDecision::Arm { generation: 2, delay_ms: 100 });
}

#[test]
fn cancel_makes_pending_timer_stale() {
    let mut gate = RateGate::new(RatePolicy::Throttle { interval_ms: 100 });
    gate.on_event();
    gate.cancel();
    assert!(!gate.is_pending());
    assert!(!gate.on_fire(1));
}

#[test]
fn policy_exposes_its_delay() {
    assert_eq!(RatePolicy::Debounce { quiet_ms: 250 }.delay_ms(), 250);
    assert_eq!(RatePolicy::Throttle { interval_ms: 100 }.delay_ms(), 100);
    let gate = RateGate::new(RatePolicy::Debounce { quiet_ms: 7 });
    assert_eq!(gate.policy(), RatePolicy::Debounce { quiet_ms: 7 });
}
