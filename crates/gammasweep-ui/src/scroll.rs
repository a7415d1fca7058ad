//! Viewport scroll tracking for the navigation bar.
//!
//! [`ScrollSignal`] fans scroll samples out to subscribers. Subscribing hands
//! back a [`ScrollSubscription`]; dropping it removes the listener, so a
//! component that keeps the guard in its scope cannot leak one.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::DEFAULT_SCROLL_THRESHOLD;

/// Whether the viewport is past the threshold, from the latest sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollObserver {
    threshold: f64,
    scrolled: bool,
}

impl Default for ScrollObserver {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl ScrollObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Record a vertical offset. Returns `true` when the state changed.
    pub fn observe(&mut self, offset: f64) -> bool {
        let scrolled = is_past_threshold(offset, self.threshold);
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}

/// `offset > threshold`; the boundary itself does not count.
pub fn is_past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

type Listener = Box<dyn FnMut(f64)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
    /// Nesting depth of `emit` calls currently running.
    emit_depth: usize,
    /// Guards dropped while their listener was out running. Cleared when the
    /// outermost emit finishes.
    dropped_while_emitting: Vec<u64>,
}

impl Listeners {
    fn is_dropped(&self, id: u64) -> bool {
        self.dropped_while_emitting.contains(&id)
    }
}

/// Single-threaded broadcast of vertical scroll offsets.
#[derive(Clone, Default)]
pub struct ScrollSignal {
    listeners: Rc<RefCell<Listeners>>,
}

impl ScrollSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` until the returned guard is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl FnMut(f64) + 'static) -> ScrollSubscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Box::new(listener)));

        ScrollSubscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Deliver a sample to every listener, in subscription order.
    ///
    /// A listener whose guard is dropped during the emit, by itself or by an
    /// earlier listener, is not called again.
    pub fn emit(&self, offset: f64) {
        // Listeners run outside the borrow so they may subscribe, drop
        // guards, or emit again themselves.
        let mut running = {
            let mut listeners = self.listeners.borrow_mut();
            listeners.emit_depth += 1;
            std::mem::take(&mut listeners.entries)
        };
        for (id, listener) in running.iter_mut() {
            if self.listeners.borrow().is_dropped(*id) {
                continue;
            }
            listener(offset);
        }

        let mut listeners = self.listeners.borrow_mut();
        running.retain(|(id, _)| !listeners.is_dropped(*id));
        running.append(&mut listeners.entries);
        listeners.entries = running;
        listeners.emit_depth -= 1;
        if listeners.emit_depth == 0 {
            listeners.dropped_while_emitting.clear();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }
}

impl fmt::Debug for ScrollSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSignal")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// Guard for a [`ScrollSignal`] listener. Unsubscribes on drop.
pub struct ScrollSubscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
}

impl ScrollSubscription {
    /// Explicitly unsubscribe. Same as dropping the guard.
    pub fn unsubscribe(self) {}
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            if let Ok(mut listeners) = listeners.try_borrow_mut() {
                listeners.entries.retain(|(id, _)| *id != self.id);
                if listeners.emit_depth > 0 {
                    listeners.dropped_while_emitting.push(self.id);
                }
            }
        }
    }
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription").field("id", &self.id).finish()
    }
}
