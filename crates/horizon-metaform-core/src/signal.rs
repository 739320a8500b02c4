//! Signal/slot system for Horizon Metaform.
//!
//! Signals notify external observers of pipeline events — most importantly
//! the once-per-build `build_end` notification. The build pipeline is
//! synchronous and single-threaded (a build pass runs to completion before
//! returning), so slots are always invoked directly on the emitting thread;
//! there is no event loop and no queued delivery here.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//!
//! # Example
//!
//! ```
//! use horizon_metaform_core::Signal;
//!
//! let build_end = Signal::<u32>::new();
//!
//! let id = build_end.connect(|pass| {
//!     println!("build pass {} finished", pass);
//! });
//!
//! build_end.emit(&1);
//! build_end.disconnect(id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot function to invoke (Arc-wrapped so emission can run without
    /// holding the connection lock).
    slot: Arc<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked in connection
/// order with a reference to the provided arguments. Use `()` for signals
/// with no arguments.
///
/// `Signal<Args>` is `Send + Sync` and can be shared between threads; each
/// emission still runs its slots synchronously on the emitting thread.
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot
    /// later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Connection {
            slot: Arc::new(slot),
        })
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing. Useful during batch
    /// reconfiguration to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots in connection order.
    ///
    /// Slots connected or disconnected from within a slot take effect on
    /// the next emission; the current emission runs over a snapshot.
    pub fn emit(&self, args: &Args) {
        if self.is_blocked() {
            tracing::trace!(
                target: "horizon_metaform::signal",
                "signal blocked, skipping emit"
            );
            return;
        }

        // Snapshot the slots so re-entrant connect/disconnect from inside a
        // slot cannot deadlock on the connection lock.
        let slots: Vec<_> = self
            .connections
            .lock()
            .iter()
            .map(|(_, connection)| connection.slot.clone())
            .collect();
        tracing::trace!(
            target: "horizon_metaform::signal",
            connection_count = slots.len(),
            "emitting signal"
        );

        for slot in slots {
            slot(args);
        }
    }
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU32;

    #[test]
    fn test_emit_invokes_all_slots_in_order() {
        let signal = Signal::<i32>::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        let first = log.clone();
        signal.connect(move |n| first.lock().push(("first", *n)));
        let second = log.clone();
        signal.connect(move |n| second.lock().push(("second", *n)));

        signal.emit(&7);
        assert_eq!(*log.lock(), [("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_disconnect_removes_a_single_slot() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicU32::new(0));

        let kept = count.clone();
        signal.connect(move |()| {
            kept.fetch_add(1, Ordering::SeqCst);
        });
        let dropped = count.clone();
        let id = signal.connect(move |()| {
            dropped.fetch_add(10, Ordering::SeqCst);
        });

        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        signal.emit(&());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_blocked_signal_does_not_emit() {
        let signal = Signal::<()>::new();
        let count = Arc::new(AtomicU32::new(0));
        let slot = count.clone();
        signal.connect(move |()| {
            slot.fetch_add(1, Ordering::SeqCst);
        });

        signal.set_blocked(true);
        signal.emit(&());
        assert_eq!(count.load(Ordering::SeqCst), 0);

        signal.set_blocked(false);
        signal.emit(&());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reentrant_connect_from_slot_does_not_deadlock() {
        let signal = Arc::new(Signal::<()>::new());
        let inner = signal.clone();
        signal.connect(move |()| {
            inner.connect(|()| {});
        });

        signal.emit(&());
        assert_eq!(signal.connection_count(), 2);
    }
}
