//! Trailing-edge debouncing with last-event-wins semantics.
//!
//! Each event calls [`Debouncer::arm`] and then awaits
//! [`Debouncer::settle`]. Arming invalidates every earlier ticket, so only
//! the last event of a burst sees `true` once the delay has passed.
//!
//! ```ignore
//! let ticket = debouncer.arm();
//! spawn(async move {
//!     if debouncer.settle(ticket).await {
//!         recompute();
//!     }
//! });
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Trailing delay for pointer-move handling
pub const POINTER_DEBOUNCE: Duration = Duration::from_millis(10);
/// Trailing delay for resize handling
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);

/// Proof of one armed event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register a new event, cancelling any pending one
    pub fn arm(&self) -> DebounceTicket {
        DebounceTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is still the most recent event
    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Wait out the delay, then report whether this event should fire
    pub async fn settle(&self, ticket: DebounceTicket) -> bool {
        tokio::time::sleep(self.delay).await;
        self.is_current(ticket)
    }
}
