//! Test builders — ergonomic constructors for expected `MemoryEvent`s.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use gclog_core::{MemoryEvent, Phase};

/// Fluent builder for [`MemoryEvent`] expectations.
///
/// # Example
///
/// ```rust
/// let expected = MemoryEventBuilder::before()
///     .timestamp("2024-01-01T00:00:00.000+0000")
///     .gc_name("GC pause (Young Normal Pause)")
///     .sizes(10.0, 0.5, 100.0)
///     .build();
/// ```
pub struct MemoryEventBuilder {
    event: MemoryEvent,
}

impl MemoryEventBuilder {
    pub fn new(phase: Phase) -> Self {
        Self {
            event: MemoryEvent {
                timestamp: None,
                eden_size: None,
                survivors_size: None,
                heap_size: None,
                gc_name: None,
                phase,
            },
        }
    }

    pub fn before() -> Self {
        Self::new(Phase::Before)
    }

    pub fn after() -> Self {
        Self::new(Phase::After)
    }

    pub fn timestamp(mut self, ts: impl Into<String>) -> Self {
        self.event.timestamp = Some(ts.into());
        self
    }

    pub fn gc_name(mut self, name: impl Into<String>) -> Self {
        self.event.gc_name = Some(name.into());
        self
    }

    pub fn eden(mut self, mb: f64) -> Self {
        self.event.eden_size = Some(mb);
        self
    }

    pub fn survivors(mut self, mb: f64) -> Self {
        self.event.survivors_size = Some(mb);
        self
    }

    pub fn heap(mut self, mb: f64) -> Self {
        self.event.heap_size = Some(mb);
        self
    }

    /// Set eden, survivors and heap in one go.
    pub fn sizes(self, eden: f64, survivors: f64, heap: f64) -> Self {
        self.eden(eden).survivors(survivors).heap(heap)
    }

    pub fn build(self) -> MemoryEvent {
        self.event
    }
}
