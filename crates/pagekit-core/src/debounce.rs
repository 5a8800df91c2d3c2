//! Burst-collapsing call deferral
//!
//! [`Debouncer`] collapses rapid repeated calls into a single deferred
//! (or a single immediate) invocation per quiet window. Instead of
//! wrapping a callback and a hidden timer, the debouncer holds an
//! explicit payload and an explicit deadline: the host event loop feeds
//! calls in with [`Debouncer::call`] and drives time with
//! [`Debouncer::poll`], reacting to the returned [`Fire`].
//!
//! Each instance owns its own pending state, so debouncers at different
//! call sites never interact.

use std::time::{Duration, Instant};

/// Outcome of a [`Debouncer::call`] or [`Debouncer::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fire<T> {
    /// Leading-edge invocation: run the action with this payload now.
    Now(T),
    /// Trailing-edge invocation: the quiet window elapsed, run the
    /// action with the payload of the most recent call.
    Due(T),
    /// A deadline is pending; keep polling.
    Pending,
    /// Nothing scheduled.
    Idle,
}

struct Pending<T> {
    deadline: Instant,
    /// Trailing payload. Leading mode has already delivered its
    /// payload, so it only keeps the deadline as a re-fire gate.
    payload: Option<T>,
}

/// Collapses bursts of calls into one invocation per quiet window.
///
/// Trailing mode (the default) delivers the payload of the last call in
/// a burst once `wait` has elapsed with no further calls. Leading mode
/// delivers the first call of a burst immediately and suppresses the
/// rest until a full quiet window passes.
///
/// At most one deadline is pending per instance; every call replaces it
/// with `now + wait`.
pub struct Debouncer<T> {
    wait: Duration,
    leading: bool,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    /// Trailing-edge debouncer: one deferred invocation per burst.
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            leading: false,
            pending: None,
        }
    }

    /// Leading-edge debouncer: one immediate invocation per burst,
    /// trailing calls suppressed.
    pub fn leading(wait: Duration) -> Self {
        Self {
            wait,
            leading: true,
            pending: None,
        }
    }

    /// The configured quiet window.
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Whether a deadline is currently scheduled.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a call at the current instant.
    pub fn call(&mut self, payload: T) -> Fire<T> {
        self.call_at(Instant::now(), payload)
    }

    /// Record a call at an explicit instant.
    ///
    /// Every call pushes the deadline out to `now + wait`. In trailing
    /// mode the payload replaces any previously recorded one
    /// (latest-wins) and the return value is never `Now`; even with a
    /// zero wait the invocation is deferred to the next [`poll_at`][p].
    /// In leading mode the payload is delivered as `Now` when no
    /// deadline is pending (or the pending one has already elapsed),
    /// and dropped otherwise.
    ///
    /// [p]: Debouncer::poll_at
    pub fn call_at(&mut self, now: Instant, payload: T) -> Fire<T> {
        let deadline = now + self.wait;

        if self.leading {
            let gate_open = match &self.pending {
                None => true,
                Some(pending) => now >= pending.deadline,
            };
            self.pending = Some(Pending {
                deadline,
                payload: None,
            });
            if gate_open {
                return Fire::Now(payload);
            }
            return Fire::Pending;
        }

        self.pending = Some(Pending {
            deadline,
            payload: Some(payload),
        });
        Fire::Pending
    }

    /// Check the deadline at the current instant.
    pub fn poll(&mut self) -> Fire<T> {
        self.poll_at(Instant::now())
    }

    /// Check the deadline at an explicit instant, firing the trailing
    /// invocation if the quiet window has elapsed.
    pub fn poll_at(&mut self, now: Instant) -> Fire<T> {
        match self.pending.take() {
            None => Fire::Idle,
            Some(pending) if now < pending.deadline => {
                self.pending = Some(pending);
                Fire::Pending
            }
            // Deadline reached. Leading mode has nothing left to
            // deliver, its gate simply reopens.
            Some(Pending {
                payload: Some(payload),
                ..
            }) => Fire::Due(payload),
            Some(_) => Fire::Idle,
        }
    }

    /// Drop any pending deadline, returning the undelivered trailing
    /// payload if there was one.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().and_then(|pending| pending.payload)
    }
}
