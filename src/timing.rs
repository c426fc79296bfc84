//! Debounce / throttle scheduling primitive.
//!
//! [`RateGate`] is the pure bookkeeping: it decides, for each incoming event,
//! whether a timer must be (re)armed, and, when a timer fires, whether the
//! handler should run. [`RateLimited`] pairs a gate with a
//! `gloo_timers` timeout so any handler can be coalesced without knowing how.
//!
//! Debounce is trailing: every event supersedes the pending timer, and the
//! handler runs once per quiet period. Throttle arms a timer on the first
//! event and ignores the rest until it fires.

#[cfg(test)]
#[path = "timing_test.rs"]
mod timing_test;

/// How a burst of events is coalesced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatePolicy {
    Debounce { quiet_ms: u32 },
    Throttle { interval_ms: u32 },
}

impl RatePolicy {
    #[must_use]
    pub fn delay_ms(self) -> u32 {
        match self {
            Self::Debounce { quiet_ms } => quiet_ms,
            Self::Throttle { interval_ms } => interval_ms,
        }
    }
}

/// What the caller must do with its timer after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Arm a timer tagged with this generation, cancelling any pending one.
    Arm { generation: u64, delay_ms: u32 },
    /// A timer is already pending; do nothing.
    Skip,
}

#[derive(Clone, Debug)]
pub struct RateGate {
    policy: RatePolicy,
    generation: u64,
    pending: bool,
}

impl RateGate {
    #[must_use]
    pub fn new(policy: RatePolicy) -> Self {
        Self { policy, generation: 0, pending: false }
    }

    #[must_use]
    pub fn policy(&self) -> RatePolicy {
        self.policy
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record an incoming event.
    pub fn on_event(&mut self) -> GateDecision {
        match self.policy {
            RatePolicy::Throttle { .. } if self.pending => GateDecision::Skip,
            policy => {
                self.generation += 1;
                self.pending = true;
                GateDecision::Arm { generation: self.generation, delay_ms: policy.delay_ms() }
            }
        }
    }

    /// Record a timer firing. Returns whether the handler should run; a timer
    /// from a superseded generation is stale and runs nothing.
    pub fn on_fire(&mut self, generation: u64) -> bool {
        if !self.pending || generation != self.generation {
            return false;
        }
        self.pending = false;
        true
    }

    /// Forget any pending timer.
    pub fn cancel(&mut self) {
        self.pending = false;
        self.generation += 1;
    }
}

#[cfg(feature = "hydrate")]
pub use browser::RateLimited;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;

    use super::{GateDecision, RateGate, RatePolicy};

    struct Inner {
        gate: RateGate,
        timer: Option<Timeout>,
    }

    /// A handler behind a [`RateGate`]. Dropping it cancels the pending timer.
    pub struct RateLimited {
        inner: Rc<RefCell<Inner>>,
        handler: Rc<dyn Fn()>,
    }

    impl RateLimited {
        pub fn new(policy: RatePolicy, handler: impl Fn() + 'static) -> Self {
            Self {
                inner: Rc::new(RefCell::new(Inner { gate: RateGate::new(policy), timer: None })),
                handler: Rc::new(handler),
            }
        }

        /// Feed one event through the gate.
        pub fn trigger(&self) {
            let decision = self.inner.borrow_mut().gate.on_event();
            let GateDecision::Arm { generation, delay_ms } = decision else {
                return;
            };
            let inner = Rc::clone(&self.inner);
            let handler = Rc::clone(&self.handler);
            let timer = Timeout::new(delay_ms, move || {
                // The fired handle stays in `timer` until the next arm; dropping
                // it here would free this closure mid-call.
                let run = inner.borrow_mut().gate.on_fire(generation);
                if run {
                    handler();
                }
            });
            // Replacing the handle drops, and so cancels, the superseded timer.
            self.inner.borrow_mut().timer = Some(timer);
        }
    }

    impl Drop for RateLimited {
        fn drop(&mut self) {
            let mut inner = self.inner.borrow_mut();
            inner.gate.cancel();
            inner.timer = None;
        }
    }
}
