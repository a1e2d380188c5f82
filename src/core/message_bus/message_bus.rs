//=========================================================================
// Message Bus
//=========================================================================
//
// Typed multi-consumer outbox for scene notifications.
//
// Architecture:
//   Engine → push<M>() → HashMap<TypeId, Vec<M>>
//                              ↓
//   Subscribers ← read<M>() (shared) / drain<M>() (owning)
//                              ↓
//   Owner ─────────→ clear_all() at tick boundary
//
// Each queue is a `Vec<M>` stored as `dyn Any`, together with the length
// and clear operations monomorphized for `M` when the queue is created.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::{Any, TypeId};
use std::collections::HashMap;

//=== Public API ==========================================================

/// Marker trait for types that can be published on the bus.
pub trait Message: Send + 'static {}

impl<T: Send + 'static> Message for T {}

//=========================================================================

/// One queue per message type, in publication order.
#[derive(Default)]
pub struct MessageBus {
    queues: HashMap<TypeId, NotificationQueue>,
}

impl MessageBus {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Publishing -------------------------------------------------------

    /// Appends a message to the queue for its type.
    pub fn push<M: Message>(&mut self, msg: M) {
        let queue = self
            .queues
            .entry(TypeId::of::<M>())
            .or_insert_with(NotificationQueue::new::<M>);

        // Keyed by TypeId::of::<M>, so the downcast always matches.
        if let Some(queue) = queue.typed_mut::<M>() {
            queue.push(msg);
        }
    }

    //--- Consuming --------------------------------------------------------

    /// All queued messages of type `M`, oldest first.
    ///
    /// Reading does not consume; several subscribers may read the same
    /// messages before the owner clears them.
    pub fn read<M: Message>(&self) -> &[M] {
        self.queue::<M>().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Removes and returns all queued messages of type `M`.
    pub fn drain<M: Message>(&mut self) -> Vec<M> {
        self.queues
            .get_mut(&TypeId::of::<M>())
            .and_then(NotificationQueue::typed_mut::<M>)
            .map(|v| v.drain(..).collect())
            .unwrap_or_default()
    }

    //--- Query API --------------------------------------------------------

    pub fn has_messages<M: Message>(&self) -> bool {
        self.count::<M>() > 0
    }

    pub fn count<M: Message>(&self) -> usize {
        self.queue::<M>().map(Vec::len).unwrap_or(0)
    }

    /// Number of queued messages across every type.
    pub fn total_count(&self) -> usize {
        self.queues.values().map(NotificationQueue::len).sum()
    }

    //--- Clearing ---------------------------------------------------------

    pub fn clear<M: Message>(&mut self) {
        if let Some(queue) = self.queues.get_mut(&TypeId::of::<M>()) {
            queue.clear();
        }
    }

    /// Clears every queue, keeping entries and capacity for reuse.
    pub fn clear_all(&mut self) {
        for queue in self.queues.values_mut() {
            queue.clear();
        }
    }

    fn queue<M: Message>(&self) -> Option<&Vec<M>> {
        self.queues
            .get(&TypeId::of::<M>())
            .and_then(NotificationQueue::typed::<M>)
    }
}

//=== NotificationQueue ===================================================

/// A type-erased `Vec<M>` for one notification type.
struct NotificationQueue {
    items: Box<dyn Any + Send>,
    len: fn(&dyn Any) -> usize,
    clear: fn(&mut dyn Any),
}

impl NotificationQueue {
    fn new<M: Message>() -> Self {
        Self {
            items: Box::new(Vec::<M>::new()),
            len: |items| items.downcast_ref::<Vec<M>>().map_or(0, Vec::len),
            clear: |items| {
                if let Some(items) = items.downcast_mut::<Vec<M>>() {
                    items.clear();
                }
            },
        }
    }

    fn typed<M: Message>(&self) -> Option<&Vec<M>> {
        self.items.downcast_ref::<Vec<M>>()
    }

    fn typed_mut<M: Message>(&mut self) -> Option<&mut Vec<M>> {
        self.items.downcast_mut::<Vec<M>>()
    }

    fn len(&self) -> usize {
        (self.len)(&*self.items)
    }

    /// Keeps the allocation.
    fn clear(&mut self) {
        (self.clear)(&mut *self.items)
    }
}

//=========================================================================
// Tests
//=========================================================================
