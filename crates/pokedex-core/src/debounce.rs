//! Debounce Primitive
//!
//! Trailing-edge debouncer over an explicit millisecond clock. The owner
//! arms a real timer for `deadline()` and calls `advance` when it fires;
//! only the latest value after a quiet period is ever surfaced.

struct Pending<T> {
    value: T,
    deadline: u64,
}

pub struct Debouncer<T> {
    delay_ms: u64,
    current: T,
    pending: Option<Pending<T>>,
    listeners: Vec<Box<dyn FnMut(&T)>>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    /// The settled value starts out as `initial`
    pub fn new(initial: T, delay_ms: u64) -> Self {
        Self {
            delay_ms,
            current: initial,
            pending: None,
            listeners: Vec::new(),
        }
    }

    /// Register a callback run each time a new value settles
    pub fn on_settled(&mut self, listener: impl FnMut(&T) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Last settled value
    pub fn value(&self) -> &T {
        &self.current
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Deadline of the pending value, if one is waiting
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Feed a new input at `now_ms`. Returns the new deadline when the
    /// timer was (re)started, `None` when the input did not change.
    pub fn set(&mut self, value: T, now_ms: u64) -> Option<u64> {
        let latest = self.pending.as_ref().map(|p| &p.value).unwrap_or(&self.current);
        if *latest == value {
            return None;
        }
        let deadline = now_ms.saturating_add(self.delay_ms);
        self.pending = Some(Pending { value, deadline });
        Some(deadline)
    }

    /// Settle the pending value if its deadline has passed
    pub fn advance(&mut self, now_ms: u64) -> Option<&T> {
        match &self.pending {
            Some(p) if p.deadline <= now_ms => {}
            _ => return None,
        }
        let pending = self.pending.take()?;
        if pending.value == self.current {
            return None;
        }
        self.current = pending.value;
        for listener in self.listeners.iter_mut() {
            listener(&self.current);
        }
        Some(&self.current)
    }
}
